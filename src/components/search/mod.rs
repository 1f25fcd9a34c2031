pub mod header;
pub mod result_card;
pub mod search_form;
pub mod search_panel;

pub use header::*;
pub use result_card::*;
pub use search_form::*;
pub use search_panel::*;
