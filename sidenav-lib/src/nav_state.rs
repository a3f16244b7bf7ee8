use core::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::{CLOSED_WIDTH, NavConfig};

#[derive(EnumIter, PartialEq, Eq, Hash, Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavState {
    Open,
    #[default]
    Closed,
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavState::Open => "open",
            NavState::Closed => "closed",
        };
        write!(f, "{name}")
    }
}

impl NavState {
    /// Only an exact match with the configured open width counts as open.
    /// `""`, `"0"`, `"0px"` or any other value reads as closed.
    #[must_use]
    pub fn from_panel_width(width: &str, config: &NavConfig) -> Self {
        if width == config.open_width {
            NavState::Open
        } else {
            NavState::Closed
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            NavState::Open => NavState::Closed,
            NavState::Closed => NavState::Open,
        }
    }

    #[must_use]
    pub fn panel_width(self, config: &NavConfig) -> &str {
        match self {
            NavState::Open => config.open_width.as_str(),
            NavState::Closed => CLOSED_WIDTH,
        }
    }

    /// Content margin always mirrors the panel width.
    #[must_use]
    pub fn content_offset(self, config: &NavConfig) -> &str {
        self.panel_width(config)
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == NavState::Open
    }
}
