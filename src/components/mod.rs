//! Leptos components for the documentation widgets

pub mod array_field;
pub mod code_block;
pub mod preview;

pub use code_block::{CodeBlock, JsonCodeBlock};
pub use preview::ApiPreview;
