#![allow(dead_code)]

pub mod doubles;
pub mod fixtures;
pub mod test_context;

pub use doubles::*;
pub use fixtures::*;
pub use test_context::*;
