pub mod landing_page;
pub mod login_page;
pub mod search_page;
pub mod signup_page;

pub use landing_page::*;
pub use login_page::*;
pub use search_page::*;
pub use signup_page::*;
