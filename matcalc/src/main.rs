//! Matcalc - interactive calculator for square matrices
//!
//! Computes determinant, transpose, cofactor matrix, adjugate, and
//! inverse over exact decimals rounded to 5 significant digits.

mod input;
mod shell;

use std::io;

use matcalc_core::Context;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut stdin.lock(), &mut stdout.lock(), &Context::default())
}
