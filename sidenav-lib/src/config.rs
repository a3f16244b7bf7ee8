use serde::{Deserialize, Serialize};

pub const DEFAULT_OPEN_WIDTH: &str = "250px";
pub const CLOSED_WIDTH: &str = "0";
pub const DEFAULT_PANEL_ID: &str = "sidenav";
pub const DEFAULT_CONTENT_ID: &str = "main";

/// Values the toggle writes and the ids the browser binding resolves.
///
/// Every field is optional when deserialized, missing ones fall back to
/// [`NavConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub open_width: String,
    pub panel_id: String,
    pub content_id: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            open_width: DEFAULT_OPEN_WIDTH.to_string(),
            panel_id: DEFAULT_PANEL_ID.to_string(),
            content_id: DEFAULT_CONTENT_ID.to_string(),
        }
    }
}

impl NavConfig {
    #[must_use]
    pub fn with_open_width(mut self, open_width: &str) -> Self {
        self.open_width = open_width.to_string();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: NavConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse nav config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        // open width must be non-empty and differ from the closed width
        if self.open_width.trim().is_empty() {
            return Err("Nav config 'open_width' must not be empty".to_string());
        }
        if self.open_width == CLOSED_WIDTH {
            return Err(format!(
                "Nav config 'open_width' must differ from the closed width '{CLOSED_WIDTH}'"
            ));
        }
        Ok(())
    }
}
