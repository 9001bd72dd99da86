//! Interactive shell: menu dispatch over the five matrix operations
//!
//! "New matrix" restarts the outer loop rather than re-entering the
//! program, so repeated selections cannot grow the call stack.

use std::io::{self, BufRead, Write};

use matcalc_core::Context;
use matcalc_matrix::Matrix;

use crate::input;

const MENU: &str = "\n1 - Determinant\n\
                    2 - Transpose\n\
                    3 - Cofactor Matrix\n\
                    4 - Adjugate\n\
                    5 - Inverse\n\
                    E - Exit\n\
                    N - New matrix";

/// Run the calculator until the user exits
pub fn run(
    input: &mut impl BufRead,
    output: &mut impl Write,
    ctx: &Context,
) -> io::Result<()> {
    loop {
        writeln!(output, "\n---------- New Instance ----------")?;
        let Some(matrix) = input::read_matrix(input, output, ctx)? else {
            return Ok(());
        };
        if !menu_loop(input, output, &matrix)? {
            return Ok(());
        }
    }
}

/// Dispatch menu selections against one matrix
///
/// Returns `Ok(true)` when the user asked for a new matrix, `Ok(false)`
/// to exit.
fn menu_loop(
    input: &mut impl BufRead,
    output: &mut impl Write,
    matrix: &Matrix,
) -> io::Result<bool> {
    loop {
        writeln!(output, "{MENU}")?;
        write!(output, "\nEnter number of operation: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim() {
            "1" => writeln!(output, "\nDeterminant: {}", matrix.determinant())?,
            "2" => writeln!(output, "\nTranspose Matrix:\n{}", matrix.transpose())?,
            "3" => writeln!(output, "\nCofactor Matrix:\n{}", matrix.cofactor())?,
            "4" => writeln!(output, "\nAdjugate Matrix:\n{}", matrix.adjugate())?,
            "5" => match matrix.inverse() {
                Ok(inv) => writeln!(output, "\nInverse Matrix:\n{inv}")?,
                Err(err) => writeln!(output, "{err}")?,
            },
            "E" | "e" => return Ok(false),
            "N" | "n" => return Ok(true),
            _ => writeln!(output, "Error: Enter a valid choice.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(&mut input, &mut output, &Context::default()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_determinant_and_exit() {
        let text = run_session("2\n1 2\n3 4\n1\ne\n");
        assert!(text.contains("Determinant: -2"));
    }

    #[test]
    fn test_all_operations() {
        let text = run_session("2\n1 2\n3 4\n1\n2\n3\n4\n5\nE\n");
        assert!(text.contains("Determinant: -2"));
        assert!(text.contains("Transpose Matrix:\n1 3\n2 4"));
        assert!(text.contains("Cofactor Matrix:\n4 -3\n-2 1"));
        assert!(text.contains("Adjugate Matrix:\n4 -2\n-3 1"));
        assert!(text.contains("Inverse Matrix:\n-2 1\n1.5 -0.5"));
    }

    #[test]
    fn test_singular_inverse_keeps_matrix() {
        // inverse fails, but the same matrix still answers the other ops
        let text = run_session("2\n1 2\n2 4\n5\n1\ne\n");
        assert!(text.contains("Cannot invert singular matrix."));
        assert!(text.contains("Determinant: 0"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let text = run_session("1\n7\nx\n9\n1\ne\n");
        assert_eq!(text.matches("Error: Enter a valid choice.").count(), 2);
        assert!(text.contains("Determinant: 7"));
    }

    #[test]
    fn test_new_matrix_restarts() {
        let text = run_session("1\n7\nn\n1\n9\n1\ne\n");
        assert_eq!(text.matches("---------- New Instance ----------").count(), 2);
        assert!(text.contains("Determinant: 9"));
    }

    #[test]
    fn test_exit_at_dimension_prompt() {
        let text = run_session("0\n");
        assert!(text.contains("Enter matrix dimension: "));
        assert!(!text.contains("Input matrix elements"));
    }

    #[test]
    fn test_eof_terminates() {
        // script ends mid-menu; the loop must return instead of spinning
        let text = run_session("1\n5\n");
        assert!(text.contains("Enter number of operation: "));
    }
}
