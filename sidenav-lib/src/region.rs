/// The side navigation element whose width is toggled.
pub trait PanelRegion {
    fn width(&self) -> Result<String, String>;

    fn set_width(&mut self, value: &str) -> Result<(), String>;
}

/// The main content element whose left margin follows the panel.
pub trait ContentRegion {
    fn margin_left(&self) -> Result<String, String>;

    fn set_margin_left(&mut self, value: &str) -> Result<(), String>;
}

/// Region kept in memory, for headless rendering and tests.
///
/// It holds a single style value, so one instance serves as either the panel
/// (`width`) or the content (`margin-left`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRegion {
    value: String,
    writes: usize,
}

impl MemoryRegion {
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            writes: 0,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of writes since creation.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn write(&mut self, value: &str) {
        self.value = value.to_string();
        self.writes += 1;
    }
}

impl PanelRegion for MemoryRegion {
    fn width(&self) -> Result<String, String> {
        Ok(self.value.clone())
    }

    fn set_width(&mut self, value: &str) -> Result<(), String> {
        self.write(value);
        Ok(())
    }
}

impl ContentRegion for MemoryRegion {
    fn margin_left(&self) -> Result<String, String> {
        Ok(self.value.clone())
    }

    fn set_margin_left(&mut self, value: &str) -> Result<(), String> {
        self.write(value);
        Ok(())
    }
}

impl<T: PanelRegion + ?Sized> PanelRegion for &mut T {
    fn width(&self) -> Result<String, String> {
        (**self).width()
    }

    fn set_width(&mut self, value: &str) -> Result<(), String> {
        (**self).set_width(value)
    }
}

impl<T: ContentRegion + ?Sized> ContentRegion for &mut T {
    fn margin_left(&self) -> Result<String, String> {
        (**self).margin_left()
    }

    fn set_margin_left(&mut self, value: &str) -> Result<(), String> {
        (**self).set_margin_left(value)
    }
}
