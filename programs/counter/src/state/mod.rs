//! State account definitions

pub mod counter;

pub use counter::*;
