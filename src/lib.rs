//! Theme Lift Library
//!
//! This library extracts design-token CSS custom properties from raw CSS
//! text, separates them into light-mode and dark-mode tables, and re-emits
//! them as a canonically ordered stylesheet fragment.

pub mod logging;
pub mod theme;
