pub mod types;
pub use types::*;

pub mod result_view;
pub mod search_state;
pub mod session_guard;
pub mod validation;

pub use result_view::*;
pub use search_state::*;
pub use session_guard::*;
pub use validation::*;

#[cfg(feature = "ssr")]
pub mod functions;
#[cfg(feature = "ssr")]
pub use functions::*;
