//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: commands, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Print a success message with checkmark (green).
///
/// Example: `✓ sync complete`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ unknown store platform`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().for_stderr(), msg);
}

/// Print a warning message (yellow).
///
/// Example: `⚠ live backend unavailable`
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ drop --live to use the placeholder backend`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  store  shopify`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a list item with bullet.
///
/// Example: `  • DB_DSN`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Shopsync Status
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}

/// Format a command string in green.
///
/// Returns a colored string that can be used inline.
pub fn cmd(c: &str) -> String {
    style(c).green().to_string()
}
