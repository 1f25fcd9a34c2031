pub mod general;
pub mod search;

pub use general::*;
pub use search::*;
