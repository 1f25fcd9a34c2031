pub mod comparison;
pub mod config;
pub mod error;
pub mod session;

pub use comparison::*;
pub use config::*;
pub use error::*;
pub use session::*;

#[cfg(feature = "ssr")]
pub mod app_state;
#[cfg(feature = "ssr")]
pub use app_state::*;
