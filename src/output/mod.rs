//! Output formatting for subnet data.
//!
//! - [`terminal`] - Human-readable lines
//! - [`batch`] - Script consumable lines
//! - [`print`] - Writing a whole split in either format

mod batch;
mod print;
mod terminal;

pub use batch::format_batch;
pub use print::{subnet_print, OutputFormat};
pub use terminal::format_subnet;
