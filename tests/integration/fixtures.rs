//! Shared Java source trees for the integration tests

use std::fs;
use std::path::Path;

pub const FOO: &str = "package demo;

class Foo extends Base implements Runnable {
    int x;
    void run(String s) {
        System.out.println(s);
    }
}
";

pub const FOO_REPORT: &str = r#"{
  "classes": [
    {
      "name": "Foo",
      "package": "demo",
      "type": "class",
      "modifiers": "",
      "fields": [
        {
          "name": "x",
          "type": "int"
        }
      ],
      "methods": [
        {
          "name": "run",
          "parameters": [
            {
              "name": "s",
              "type": "String"
            }
          ],
          "linesOfCode": 3
        }
      ]
    }
  ],
  "relations": [
    {
      "source": "Foo",
      "target": "Base",
      "type": "extends"
    },
    {
      "source": "Foo",
      "target": "Runnable",
      "type": "implements"
    },
    {
      "source": "Foo",
      "target": "String",
      "type": "uses"
    }
  ]
}
"#;

/// Write `content` at `relative` below `root`, creating directories
pub fn write_source(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A small Maven-style project with nested types, an excluded wrapper class
/// and one file that does not parse
pub fn create_sample_project(root: &Path) {
    write_source(
        root,
        "src/main/java/com/shop/Order.java",
        "package com.shop;

import java.util.List;

public final class Order implements java.io.Serializable, Comparable<Order> {
    private long id;
    private String customer, note;
    private int[] quantities, totals[];

    public Order(long id) {
        this.id = id;
    }

    public int compareTo(Order other) {
        return Long.compare(id, other.id);
    }

    void addItems(List<String> items, int count, String... tags) {
        for (String item : items) {
            System.out.println(item);
        }
    }

    static class Line {
        String sku;
    }
}
",
    );
    write_source(
        root,
        "src/main/java/com/shop/Repository.java",
        "package com.shop;

public interface Repository<T> extends AutoCloseable, Iterable<T> {
    T find(long id);
    void save(T item, boolean flush);
}
",
    );
    write_source(
        root,
        "src/main/java/com/shop/OrderRepository.java",
        "package com.shop;

@SuppressWarnings(\"unused\")
public abstract class OrderRepository extends BaseRepository<Order> implements Repository<Order> {
    protected abstract void evict(Order order, Order replacement);
}
",
    );
    write_source(
        root,
        "src/main/java/com/shop/Broken.java",
        "package com.shop;

public class Broken {
    void oops( {
}
",
    );
    write_source(
        root,
        ".mvn/wrapper/MavenWrapperDownloader.java",
        "public class MavenWrapperDownloader {
    private static final String WRAPPER_VERSION = \"0.5.6\";
    public static void main(String args[]) {
    }
}
",
    );
    write_source(root, "README.md", "# shop\n");
}
