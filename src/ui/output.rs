//! User-facing console output
//!
//! Info and error lines are padded with blank lines and colorized so they
//! stand out between prompts. Diagnostics go through `tracing` instead.

use colored::Colorize;

pub fn info(msg: &str) {
    println!();
    println!("{}", msg.green().bold());
    println!();
}

pub fn error(msg: &str) {
    println!();
    println!("{}", msg.red().bold());
    println!();
}
