//! Summary command: the three-section register report.

use std::io::Write;

use anyhow::Result;
use aforo_core::Registry;

pub fn run<W: Write>(writer: &mut W, registry: &Registry) -> Result<()> {
    writeln!(writer, "{}", registry.summary())?;
    Ok(())
}
