use std::process::ExitCode;

use colored::Colorize;
use fraction_calc::{evaluate, repl};

fn main() -> ExitCode {
  env_logger::init();
  let args: Vec<String> = std::env::args().skip(1).collect();

  // fraction-calc <a> <op> <b>
  if let [lhs, operator, rhs] = args.as_slice() {
    return match evaluate(lhs, operator, rhs) {
      Ok(result) => {
        println!("{}", result.to_string().bold());
        ExitCode::SUCCESS
      }
      Err(err) => {
        eprintln!("{} {}", "Error:".red().bold(), err);
        ExitCode::FAILURE
      }
    };
  }
  if !args.is_empty() {
    log::warn!("Expected '<a> <op> <b>', ignoring {} argument(s)", args.len());
  }

  let stdin = std::io::stdin();
  let stdout = std::io::stdout();
  if let Err(err) = repl::run(stdin.lock(), stdout.lock()) {
    log::error!("Session ended: {}", err);
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}
