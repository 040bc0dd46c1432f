use serde::{Deserialize, Serialize};

/// Remote identity returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque provider-assigned identifier
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub email: String,
}
