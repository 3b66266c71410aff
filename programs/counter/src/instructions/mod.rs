pub mod decrement;
pub mod increment;
pub mod initialize;

pub use decrement::*;
pub use increment::*;
pub use initialize::*;
