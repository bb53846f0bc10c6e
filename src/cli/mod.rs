pub mod context;
pub mod entry;
pub mod prompts;
pub mod remove;

pub use entry::{Args, run};
