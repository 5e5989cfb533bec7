//! Redact command.
//!
//! Masks a value for safe sharing in tickets, chat, and logs.

use crate::core::redact::redact;
use crate::error::Result;

/// Print the masked form of a value.
pub fn execute(value: &str, keep: usize) -> Result<()> {
    println!("{}", redact(value, keep));
    Ok(())
}
