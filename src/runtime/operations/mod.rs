// Runtime operation traits and CLI-backed implementations
pub mod list;
pub mod remove;

pub use list::Lister;
pub use remove::Remover;
