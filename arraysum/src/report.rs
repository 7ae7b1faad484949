use std::io::{self, Write};

/// Writes the accumulator as a decimal number on its own line.
pub fn report<W: Write + ?Sized>(out: &mut W, total: u64) -> io::Result<()> {
    writeln!(out, "{total}")?;
    out.flush()
}
