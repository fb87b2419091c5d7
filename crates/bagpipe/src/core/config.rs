//! Configuration types for layout and rendering

use std::fmt;

use super::{PipelineError, Result};

/// Fill color of a slot created without an explicit color
pub const DEFAULT_SLOT_COLOR: &str = "white";

/// Character set used by the text renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CharacterSet {
    /// Pure ASCII: `-`, `|`, `+`, `>`
    Ascii,
    /// Unicode box drawing: `─`, `│`, `┼`, `▶`
    #[default]
    Unicode,
}

impl CharacterSet {
    /// Returns true if this character set uses only ASCII
    pub fn is_ascii(&self) -> bool {
        matches!(self, CharacterSet::Ascii)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Ascii => write!(f, "ascii"),
            CharacterSet::Unicode => write!(f, "unicode"),
        }
    }
}

/// Settings for the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutConfig {
    /// Inset applied to both ends of every edge segment, in grid units
    pub edge_center_offset: f64,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edge inset. Must be finite and within `[0.0, 0.5]`.
    pub fn with_edge_center_offset(mut self, offset: f64) -> Result<Self> {
        if !offset.is_finite() || !(0.0..=0.5).contains(&offset) {
            return Err(PipelineError::invalid_argument(format!(
                "edge center offset must be within [0.0, 0.5], got {}",
                offset
            )));
        }
        self.edge_center_offset = offset;
        Ok(self)
    }
}

/// Settings for the text renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub style: CharacterSet,
    /// Width of one time column in characters
    pub cell_width: usize,
    /// Print `color: legend` lines under the diagram
    pub show_legend: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: CharacterSet::default(),
            cell_width: 6,
            show_legend: true,
        }
    }
}

impl RenderConfig {
    pub fn new(style: CharacterSet) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Set the column width; clamped to at least 3 so a label and an edge fit
    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width.max(3);
        self
    }

    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_set_display() {
        assert_eq!(CharacterSet::Ascii.to_string(), "ascii");
        assert_eq!(CharacterSet::Unicode.to_string(), "unicode");
        assert_eq!(CharacterSet::default(), CharacterSet::Unicode);
    }

    #[test]
    fn test_layout_config_default_has_no_inset() {
        assert_eq!(LayoutConfig::default().edge_center_offset, 0.0);
    }

    #[test]
    fn test_layout_config_rejects_out_of_range_offset() {
        assert!(LayoutConfig::new().with_edge_center_offset(0.2).is_ok());
        assert!(LayoutConfig::new().with_edge_center_offset(0.5).is_ok());
        assert!(matches!(
            LayoutConfig::new().with_edge_center_offset(0.75),
            Err(PipelineError::InvalidArgument { .. })
        ));
        assert!(LayoutConfig::new().with_edge_center_offset(-0.1).is_err());
        assert!(LayoutConfig::new().with_edge_center_offset(f64::NAN).is_err());
    }

    #[test]
    fn test_render_config_clamps_cell_width() {
        let config = RenderConfig::new(CharacterSet::Ascii).with_cell_width(1);
        assert_eq!(config.cell_width, 3);
        assert_eq!(config.style, CharacterSet::Ascii);
        assert!(config.show_legend);
    }
}
