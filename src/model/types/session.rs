use serde::{Deserialize, Serialize};

/// The logged in user as the search page sees it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub email: Option<String>,
    pub name: String,
}

/// User record returned by the identity provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserMetadata {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<AuthUser> for Session {
    fn from(user: AuthUser) -> Self {
        let name = display_name(user.user_metadata.name.as_deref(), user.email.as_deref());
        Self {
            id: user.id,
            email: user.email.filter(|email| !email.is_empty()),
            name,
        }
    }
}

/// Picks the provider name, then the part of the email before the `@`, then "User".
pub fn display_name(name: Option<&str>, email: Option<&str>) -> String {
    name.filter(|name| !name.is_empty())
        .or_else(|| {
            email
                .and_then(|email| email.split('@').next())
                .filter(|local| !local.is_empty())
        })
        .unwrap_or("User")
        .to_string()
}
