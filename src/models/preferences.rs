use serde::{Deserialize, Serialize};

/// Persisted view preferences, loaded at startup and saved on change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
        }
    }
}
