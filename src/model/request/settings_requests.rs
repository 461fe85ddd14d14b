use serde::{Deserialize, Serialize};

use crate::settings::Theme;

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SetPasscodeRequest {
    pub passcode: String,
    /// required when a passcode has already been set
    #[serde(default)]
    pub current_passcode: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateThemeRequest {
    pub theme: Theme,
}
