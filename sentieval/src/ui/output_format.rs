// sentieval/src/ui/output_format.rs
//! Prefixed error messages written to stderr.
//!
//! Colour is applied only when the caller says the target supports it, so
//! redirected output stays free of ANSI escapes.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes `Error: <msg>`.
pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg.red())
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}
