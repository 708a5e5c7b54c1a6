use introspector::{
    cli::{exit_code, suggestion, Args, Command, USAGE_EXIT_CODE},
    logging, ErrorSeverity,
};
use std::process;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    if let Err(err) = logging::init_logging(args.quiet, args.verbose, !args.no_colors) {
        eprintln!("Warning: {}", err.user_message());
    }

    // Create command from arguments
    let command = Command::from_args(args);

    // Run the command and exit with the appropriate code
    process::exit(run_command(command));
}

/// Run the command with proper error handling
fn run_command(command: Command) -> i32 {
    let is_usage = matches!(command, Command::Usage);

    match command.execute() {
        Ok(()) if is_usage => USAGE_EXIT_CODE,
        Ok(()) => 0,
        Err(err) => {
            eprintln!("\nError: {}", err.user_message());

            if let Some(hint) = suggestion(&err) {
                eprintln!("Suggestion: {}", hint);
            }

            let code = exit_code(err.severity());
            if err.severity() == ErrorSeverity::Critical {
                eprintln!("\nExiting with code {} due to {}", code, err.severity());
            }
            code
        }
    }
}
