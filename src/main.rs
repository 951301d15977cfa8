use std::process::ExitCode;

use resizer::{args, help};

fn main() -> ExitCode {
    let arguments: Vec<_> = std::env::args_os().collect();
    let plan = match args::parse_args(arguments) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{e}");
            help::print_help(env!("CARGO_PKG_NAME"));
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = plan.execute() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
