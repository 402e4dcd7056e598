//! The library of dispatch types.

pub mod delta;
pub mod report;
pub mod stat;
