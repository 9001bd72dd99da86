//! Matrix input collection
//!
//! Prompts for a dimension and then reads the matrix row-by-row,
//! re-prompting on malformed input. Generic over `BufRead`/`Write` so the
//! loops can be driven from in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use matcalc_core::Context;
use matcalc_matrix::Matrix;

/// Read the matrix dimension
///
/// `None` means the user asked to exit (dimension 0, or end of input).
pub fn read_dimension(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<usize>> {
    loop {
        writeln!(output, "\n[Enter 0 to exit]")?;
        write!(output, "Enter matrix dimension: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(0) => return Ok(None),
            Ok(dim) => return Ok(Some(dim)),
            Err(_) => writeln!(output, "Error: Enter positive integer.")?,
        }
    }
}

/// Read a complete matrix, echoing it back once accepted
///
/// Rows are whitespace-separated decimal tokens; a row with the wrong
/// element count or an unparseable token is rejected and asked for again.
pub fn read_matrix(
    input: &mut impl BufRead,
    output: &mut impl Write,
    ctx: &Context,
) -> io::Result<Option<Matrix>> {
    let Some(dim) = read_dimension(input, output)? else {
        return Ok(None);
    };

    writeln!(output, "\nInput matrix elements row-by-row:")?;
    let mut rows: Vec<Vec<_>> = Vec::with_capacity(dim);
    while rows.len() < dim {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != dim {
            writeln!(output, "Error: Enter exactly {dim} elements.")?;
            continue;
        }
        match tokens.iter().map(|t| ctx.parse(t)).collect::<Result<Vec<_>, _>>() {
            Ok(row) => rows.push(row),
            Err(_) => writeln!(output, "Error: Enter numerical elements separated by spaces.")?,
        }
    }

    // every row was checked against dim, so this cannot be ragged
    let matrix = Matrix::from_rows(rows)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    writeln!(output, "\nInput Matrix:")?;
    writeln!(output, "{matrix}")?;
    Ok(Some(matrix))
}
