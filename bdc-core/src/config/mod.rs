//! Configuration types
//!
//! Board-agnostic driver configuration supplied at construction.

pub mod driver;

pub use driver::*;
