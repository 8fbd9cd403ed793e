//! Stdout helpers shared by the commands

use serde::Serialize;
use std::io::{self, Write};

/// Pretty-printed JSON on its own line
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    print_raw(&format!("{json}\n"))?;
    Ok(())
}

/// Write `s` exactly as given; rendered templates keep their own newlines
pub fn print_raw(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}
