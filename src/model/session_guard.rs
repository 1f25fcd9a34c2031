use crate::model::types::*;

/// Where people without a session are sent.
pub const LOGIN_PATH: &str = "/login";
/// Where a fresh login lands.
pub const HOME_PATH: &str = "/homepage";

#[derive(Debug, Clone, PartialEq)]
pub enum Guard {
    Admit(Session),
    Redirect(&'static str),
}

impl Guard {
    /// Any lookup error counts the same as having no session.
    pub fn from_lookup(lookup: Result<Option<Session>, Error>) -> Self {
        match lookup {
            Ok(Some(session)) => Guard::Admit(session),
            Ok(None) | Err(_) => Guard::Redirect(LOGIN_PATH),
        }
    }
}
