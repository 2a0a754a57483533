use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::operator::evaluate;

/// Menu-driven calculator session. Stops on `0` or at end of input; bad input
/// only produces an error line and the menu again.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
  writeln!(output, "{}", "=== Fraction calculator ===".bold())?;
  writeln!(output, "Enter numbers as 5 or 3/4. Operators: + - * /")?;
  writeln!(output, "Choose 0 in the menu to exit.\n")?;

  loop {
    writeln!(output, "1) Calculate")?;
    writeln!(output, "0) Exit")?;
    let Some(choice) = prompt(&mut input, &mut output, "Choose an item: ")? else {
      break;
    };
    match choice.trim() {
      "0" => {
        writeln!(output, "Goodbye!")?;
        break;
      }
      "1" => {}
      _ => {
        writeln!(output, "{}\n", "Unknown menu item.".yellow())?;
        continue;
      }
    }

    let Some(lhs) = prompt(&mut input, &mut output, "First number (a): ")? else {
      break;
    };
    let Some(operator) = prompt(&mut input, &mut output, "Operator (+ - * /): ")? else {
      break;
    };
    let Some(rhs) = prompt(&mut input, &mut output, "Second number (b): ")? else {
      break;
    };

    log::debug!(
      "Evaluating '{}' '{}' '{}'",
      lhs.trim(),
      operator.trim(),
      rhs.trim()
    );
    match evaluate(&lhs, &operator, &rhs) {
      Ok(result) => writeln!(output, "Result: {}\n", result.to_string().bold())?,
      Err(err) => writeln!(output, "{} {}\n", "Error:".red().bold(), err)?,
    }
  }
  Ok(())
}

fn prompt<R: BufRead, W: Write>(
  input: &mut R,
  output: &mut W,
  message: &str,
) -> io::Result<Option<String>> {
  write!(output, "{message}")?;
  output.flush()?;
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line))
}
