use serde::{Deserialize, Serialize};

/// A server account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Login name
    pub name: String,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub slug: Option<String>,
    /// `NORMAL` or `SERVICE`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl User {
    /// Display name, falling back to the login name
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}
