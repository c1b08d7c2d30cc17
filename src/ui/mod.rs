//! Console interaction: prompts, table rendering, colored output

pub mod output;
pub mod prompt;
pub mod table;
