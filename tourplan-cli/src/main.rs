//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tourplan_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = tourplan_cli::run() {
        if let CliError::ArgumentParsing(parse_err) = &err {
            parse_err.exit();
        }
        eprintln!("tourplan: {err}");
        std::process::exit(1);
    }
}
