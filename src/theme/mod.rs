//! Theme Variable Extraction Engine
//!
//! Pulls design-token custom properties out of raw CSS text and re-emits
//! them as a canonically ordered stylesheet fragment:
//! - regex text search locates the light/dark selector contexts
//! - balanced-brace scanning recovers each context's block body
//! - declarations are filtered against a fixed allow-list and merged with
//!   last-write-wins semantics
//! - the formatter serializes the result deterministically

pub mod block;
pub mod constants;
pub mod error;
pub mod extract;
pub mod formatter;
pub mod scanner;
pub mod snapshot;
pub mod variables;
