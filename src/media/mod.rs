//! Media module for post representation and feed parsing.

pub mod item;
pub mod parser;

pub use item::{Media, MediaKind, Post};
pub use parser::{Page, PostExtractor};
