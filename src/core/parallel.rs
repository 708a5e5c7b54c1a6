//! Parallel processing utilities
//!
//! Every helper here returns results in input order, whatever order the
//! workers finish in.

use crate::error::{IntrospectorError, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress update information for parallel operations
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }
}

/// Build a dedicated pool with `threads` workers
pub fn build_pool(threads: usize) -> Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("introspector-worker-{}", index))
        .build()
        .map_err(|e| IntrospectorError::ParallelExecution {
            message: e.to_string(),
        })
}

/// Map `f` over `items` on the current rayon pool, reporting each completion
pub fn parallel_process_with_progress<T, F, R, P>(items: &[T], f: F, progress_callback: P) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let total = items.len();
    let counter = AtomicUsize::new(0);

    items
        .par_iter()
        .map(|item| {
            let result = f(item);
            let current = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress_callback(ProgressUpdate::new(
                current,
                total,
                format!("Processing item {}/{}", current, total),
            ));
            result
        })
        .collect()
}

/// Same contract as [`parallel_process_with_progress`] on the calling thread
pub fn sequential_process_with_progress<T, F, R, P>(
    items: &[T],
    f: F,
    progress_callback: P,
) -> Vec<R>
where
    F: Fn(&T) -> R,
    P: Fn(ProgressUpdate),
{
    let total = items.len();

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let result = f(item);
            progress_callback(ProgressUpdate::new(
                index + 1,
                total,
                format!("Processing item {}/{}", index + 1, total),
            ));
            result
        })
        .collect()
}
