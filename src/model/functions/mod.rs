mod backend;
pub use backend::*;

mod identity;
pub use identity::*;
