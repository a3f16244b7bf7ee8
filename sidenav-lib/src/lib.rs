pub mod config;
pub mod nav_state;
pub mod region;
mod toggle;
#[cfg(target_arch = "wasm32")]
pub mod web_region;

pub use config::NavConfig;
pub use nav_state::NavState;
pub use region::{ContentRegion, MemoryRegion, PanelRegion};
pub use toggle::*;
