use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
        }
    }
}

/// unknown values (e.g. written by a newer version) fall back to the default theme
impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            "sepia" => Theme::Sepia,
            _ => Theme::Light,
        }
    }
}

/// app wide settings, kept in managed state so handlers don't need to hit the database for every request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppSettings {
    /// sha256 hex digest of the passcode, `None` until one has been set
    pub passcode_hash: Option<String>,
    pub theme: Theme,
}

impl AppSettings {
    pub fn has_passcode(&self) -> bool {
        self.passcode_hash.is_some()
    }
}
