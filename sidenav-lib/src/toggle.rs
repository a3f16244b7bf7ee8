use crate::config::NavConfig;
use crate::nav_state::NavState;
use crate::region::{ContentRegion, PanelRegion};

/// Reads the nav state from the panel width alone.
pub fn current_state<P: PanelRegion + ?Sized>(
    panel: &P,
    config: &NavConfig,
) -> Result<NavState, String> {
    let width = panel.width()?;
    Ok(NavState::from_panel_width(&width, config))
}

/// True when the content margin implies the same state as the panel width.
///
/// States are compared rather than raw strings, so a host that reads the
/// written `"0"` back as `"0px"`, or an unset `""`, still counts as closed.
pub fn is_synchronized<P, C>(panel: &P, content: &C, config: &NavConfig) -> Result<bool, String>
where
    P: PanelRegion + ?Sized,
    C: ContentRegion + ?Sized,
{
    let state = current_state(panel, config)?;
    let margin = content.margin_left()?;
    Ok(NavState::from_panel_width(&margin, config) == state)
}

/// Writes the width/margin pair belonging to `state` to both regions.
///
/// The panel is written first. If the content write then fails, the panel is
/// restored to the width it had before the call and the content error is
/// returned, so a failed call leaves both regions as they were.
pub fn apply_state<P, C>(
    panel: &mut P,
    content: &mut C,
    state: NavState,
    config: &NavConfig,
) -> Result<(), String>
where
    P: PanelRegion + ?Sized,
    C: ContentRegion + ?Sized,
{
    let previous = panel.width()?;
    panel.set_width(state.panel_width(config))?;
    if let Err(e) = content.set_margin_left(state.content_offset(config)) {
        if let Err(restore) = panel.set_width(&previous) {
            tracing::error!("Failed to restore panel width '{previous}': {restore}");
        }
        return Err(e);
    }
    Ok(())
}

/// Closes the nav if the panel is at the open width, opens it otherwise.
///
/// Returns the state that was entered. The decision looks at the panel only;
/// a content margin that disagrees with it is logged and then overwritten.
/// The margin is read for that check alone, so a failed read is logged too
/// and does not stop the toggle.
pub fn toggle_nav<P, C>(
    panel: &mut P,
    content: &mut C,
    config: &NavConfig,
) -> Result<NavState, String>
where
    P: PanelRegion + ?Sized,
    C: ContentRegion + ?Sized,
{
    let width = panel.width()?;
    let current = NavState::from_panel_width(&width, config);
    match content.margin_left() {
        Ok(margin) if NavState::from_panel_width(&margin, config) != current => {
            tracing::warn!(
                "Nav regions out of sync before toggle: panel width '{width}', content margin '{margin}'"
            );
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Could not read content margin before toggle: {e}"),
    }

    let next = current.toggled();
    apply_state(panel, content, next, config)?;
    tracing::debug!("Nav toggled {current} -> {next}");
    Ok(next)
}

pub fn open_nav<P, C>(panel: &mut P, content: &mut C, config: &NavConfig) -> Result<(), String>
where
    P: PanelRegion + ?Sized,
    C: ContentRegion + ?Sized,
{
    apply_state(panel, content, NavState::Open, config)?;
    tracing::debug!("Nav opened");
    Ok(())
}

pub fn close_nav<P, C>(panel: &mut P, content: &mut C, config: &NavConfig) -> Result<(), String>
where
    P: PanelRegion + ?Sized,
    C: ContentRegion + ?Sized,
{
    apply_state(panel, content, NavState::Closed, config)?;
    tracing::debug!("Nav closed");
    Ok(())
}

/// Owns both region handles together with the config they are toggled with.
pub struct NavToggle<P, C> {
    panel: P,
    content: C,
    config: NavConfig,
}

impl<P: PanelRegion, C: ContentRegion> NavToggle<P, C> {
    #[must_use]
    pub fn new(panel: P, content: C) -> Self {
        Self::with_config(panel, content, NavConfig::default())
    }

    #[must_use]
    pub fn with_config(panel: P, content: C, config: NavConfig) -> Self {
        Self {
            panel,
            content,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[must_use]
    pub fn panel(&self) -> &P {
        &self.panel
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn toggle(&mut self) -> Result<NavState, String> {
        toggle_nav(&mut self.panel, &mut self.content, &self.config)
    }

    pub fn open(&mut self) -> Result<(), String> {
        open_nav(&mut self.panel, &mut self.content, &self.config)
    }

    pub fn close(&mut self) -> Result<(), String> {
        close_nav(&mut self.panel, &mut self.content, &self.config)
    }

    pub fn state(&self) -> Result<NavState, String> {
        current_state(&self.panel, &self.config)
    }

    pub fn is_synchronized(&self) -> Result<bool, String> {
        is_synchronized(&self.panel, &self.content, &self.config)
    }

    #[must_use]
    pub fn into_parts(self) -> (P, C) {
        (self.panel, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::MemoryRegion;

    struct ReadOnlyPanel {
        width: String,
    }

    impl PanelRegion for ReadOnlyPanel {
        fn width(&self) -> Result<String, String> {
            Ok(self.width.clone())
        }

        fn set_width(&mut self, _value: &str) -> Result<(), String> {
            Err("panel style is read-only".to_string())
        }
    }

    struct MissingContent;

    impl ContentRegion for MissingContent {
        fn margin_left(&self) -> Result<String, String> {
            Err("element 'main' not found".to_string())
        }

        fn set_margin_left(&mut self, _value: &str) -> Result<(), String> {
            Err("element 'main' not found".to_string())
        }
    }

    #[derive(Default)]
    struct WriteOnlyContent {
        written: Vec<String>,
    }

    impl ContentRegion for WriteOnlyContent {
        fn margin_left(&self) -> Result<String, String> {
            Err("computed style unavailable".to_string())
        }

        fn set_margin_left(&mut self, value: &str) -> Result<(), String> {
            self.written.push(value.to_string());
            Ok(())
        }
    }

    /// Reads a written `"0"` back as `"0px"`, like an inline CSS style.
    struct CssRegion {
        value: String,
    }

    impl CssRegion {
        fn new(value: &str) -> Self {
            Self {
                value: value.to_string(),
            }
        }

        fn store(&mut self, value: &str) {
            self.value = if value == "0" {
                "0px".to_string()
            } else {
                value.to_string()
            };
        }
    }

    impl PanelRegion for CssRegion {
        fn width(&self) -> Result<String, String> {
            Ok(self.value.clone())
        }

        fn set_width(&mut self, value: &str) -> Result<(), String> {
            self.store(value);
            Ok(())
        }
    }

    impl ContentRegion for CssRegion {
        fn margin_left(&self) -> Result<String, String> {
            Ok(self.value.clone())
        }

        fn set_margin_left(&mut self, value: &str) -> Result<(), String> {
            self.store(value);
            Ok(())
        }
    }

    fn regions(panel: &str, content: &str) -> (MemoryRegion, MemoryRegion) {
        (MemoryRegion::new(panel), MemoryRegion::new(content))
    }

    #[test]
    fn test_toggle_from_closed_opens() {
        let (mut panel, mut content) = regions("0", "0");
        let state = toggle_nav(&mut panel, &mut content, &NavConfig::default()).unwrap();
        assert_eq!(state, NavState::Open);
        assert_eq!(panel.value(), "250px");
        assert_eq!(content.value(), "250px");
    }

    #[test]
    fn test_toggle_from_open_closes() {
        let (mut panel, mut content) = regions("250px", "250px");
        let state = toggle_nav(&mut panel, &mut content, &NavConfig::default()).unwrap();
        assert_eq!(state, NavState::Closed);
        assert_eq!(panel.value(), "0");
        assert_eq!(content.value(), "0");
    }

    #[test]
    fn test_toggle_from_unset_opens() {
        let (mut panel, mut content) = regions("", "");
        let state = toggle_nav(&mut panel, &mut content, &NavConfig::default()).unwrap();
        assert_eq!(state, NavState::Open);
        assert_eq!(panel.value(), "250px");
        assert_eq!(content.value(), "250px");
    }

    #[test]
    fn test_toggle_writes_each_region_once() {
        let (mut panel, mut content) = regions("0", "0");
        toggle_nav(&mut panel, &mut content, &NavConfig::default()).unwrap();
        assert_eq!(panel.writes(), 1);
        assert_eq!(content.writes(), 1);
    }

    #[test]
    fn test_desynced_regions_follow_panel() {
        let config = NavConfig::default();
        let (mut panel, mut content) = regions("250px", "0");
        assert!(!is_synchronized(&panel, &content, &config).unwrap());

        let state = toggle_nav(&mut panel, &mut content, &config).unwrap();
        assert_eq!(state, NavState::Closed);
        assert_eq!(panel.value(), "0");
        assert_eq!(content.value(), "0");
        assert!(is_synchronized(&panel, &content, &config).unwrap());
    }

    #[test]
    fn test_custom_open_width() {
        let config = NavConfig::default().with_open_width("320px");
        let (mut panel, mut content) = regions("250px", "250px");
        // 250px is not the configured open width, so the nav counts as closed
        assert_eq!(current_state(&panel, &config).unwrap(), NavState::Closed);
        toggle_nav(&mut panel, &mut content, &config).unwrap();
        assert_eq!(panel.value(), "320px");
        assert_eq!(content.value(), "320px");
    }

    #[test]
    fn test_open_and_close_are_forced() {
        let config = NavConfig::default();
        let (mut panel, mut content) = regions("250px", "250px");
        open_nav(&mut panel, &mut content, &config).unwrap();
        assert_eq!(panel.value(), "250px");
        assert_eq!(content.value(), "250px");

        close_nav(&mut panel, &mut content, &config).unwrap();
        close_nav(&mut panel, &mut content, &config).unwrap();
        assert_eq!(panel.value(), "0");
        assert_eq!(content.value(), "0");
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut panel = ReadOnlyPanel {
            width: "0".to_string(),
        };
        let mut content = MemoryRegion::new("0");
        let err = toggle_nav(&mut panel, &mut content, &NavConfig::default()).unwrap_err();
        assert_eq!(err, "panel style is read-only");
        assert_eq!(content.writes(), 0);
    }

    #[test]
    fn test_missing_content_propagates() {
        let mut panel = MemoryRegion::new("0");
        let mut content = MissingContent;
        let err = toggle_nav(&mut panel, &mut content, &NavConfig::default()).unwrap_err();
        assert!(err.contains("main"));
        // written, then restored
        assert_eq!(panel.value(), "0");
        assert_eq!(panel.writes(), 2);
    }

    #[test]
    fn test_failed_content_write_restores_panel() {
        let config = NavConfig::default();
        let mut panel = MemoryRegion::new("250px");
        let mut content = MissingContent;
        assert!(close_nav(&mut panel, &mut content, &config).is_err());
        assert_eq!(panel.value(), "250px");
        assert!(apply_state(&mut panel, &mut content, NavState::Open, &config).is_err());
        assert_eq!(panel.value(), "250px");
    }

    #[test]
    fn test_unreadable_margin_does_not_block_toggle() {
        let mut panel = MemoryRegion::new("0");
        let mut content = WriteOnlyContent::default();
        let state = toggle_nav(&mut panel, &mut content, &NavConfig::default()).unwrap();
        assert_eq!(state, NavState::Open);
        assert_eq!(panel.value(), "250px");
        assert_eq!(content.written, ["250px"]);
    }

    #[test]
    fn test_normalized_closed_width_counts_as_synchronized() {
        let config = NavConfig::default();
        let mut panel = CssRegion::new("250px");
        let mut content = CssRegion::new("250px");
        assert!(is_synchronized(&panel, &content, &config).unwrap());

        toggle_nav(&mut panel, &mut content, &config).unwrap();
        assert_eq!(PanelRegion::width(&panel).unwrap(), "0px");
        assert_eq!(content.margin_left().unwrap(), "0px");
        assert!(is_synchronized(&panel, &content, &config).unwrap());

        toggle_nav(&mut panel, &mut content, &config).unwrap();
        assert_eq!(PanelRegion::width(&panel).unwrap(), "250px");
        assert!(is_synchronized(&panel, &content, &config).unwrap());
    }

    #[test]
    fn test_unset_page_is_synchronized() {
        let config = NavConfig::default();
        let (panel, content) = (CssRegion::new(""), CssRegion::new(""));
        assert!(is_synchronized(&panel, &content, &config).unwrap());
        let (panel, content) = (CssRegion::new(""), CssRegion::new("0px"));
        assert!(is_synchronized(&panel, &content, &config).unwrap());
        let (panel, content) = (CssRegion::new("0px"), CssRegion::new("250px"));
        assert!(!is_synchronized(&panel, &content, &config).unwrap());
    }

    #[test]
    fn test_nav_toggle_struct() {
        let mut nav = NavToggle::new(MemoryRegion::new("0"), MemoryRegion::new("0"));
        assert_eq!(nav.state().unwrap(), NavState::Closed);
        assert_eq!(nav.toggle().unwrap(), NavState::Open);
        assert_eq!(nav.state().unwrap(), NavState::Open);
        assert!(nav.is_synchronized().unwrap());
        nav.close().unwrap();
        assert_eq!(nav.panel().value(), "0");
        nav.open().unwrap();
        assert_eq!(nav.content().value(), "250px");
        assert_eq!(nav.config().open_width, "250px");

        let (panel, content) = nav.into_parts();
        assert_eq!(panel.writes(), 3);
        assert_eq!(content.writes(), 3);
    }

    #[test]
    fn test_nav_toggle_over_borrowed_regions() {
        let (mut panel, mut content) = regions("0", "0");
        {
            let mut nav = NavToggle::new(&mut panel, &mut content);
            nav.toggle().unwrap();
        }
        assert_eq!(panel.value(), "250px");
        assert_eq!(content.value(), "250px");
    }
}
