use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::consts::{
    CUSTOM_FALLBACK_HEIGHT, CUSTOM_FALLBACK_WIDTH, DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH,
    HEADER_HEIGHT, HEADER_WIDTH, LISTING_HEIGHT, LISTING_WIDTH,
};

/// Output dimensions of the export surface. Both sides are always >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_WIDTH, DEFAULT_TARGET_HEIGHT)
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Selectable output size modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizePreset {
    ListingContent,
    #[default]
    Header,
    Custom,
}

impl SizePreset {
    pub const ALL: &[Self] = &[Self::ListingContent, Self::Header, Self::Custom];

    /// Label shown in the preset selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ListingContent => "Listing Content (250x400)",
            Self::Header => "Header (1400x700)",
            Self::Custom => "Custom",
        }
    }

    /// Fixed dimensions, or `None` for custom.
    pub fn size(&self) -> Option<TargetSize> {
        match self {
            Self::ListingContent => Some(TargetSize::new(LISTING_WIDTH, LISTING_HEIGHT)),
            Self::Header => Some(TargetSize::new(HEADER_WIDTH, HEADER_HEIGHT)),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(p) = Self::ALL.iter().find(|p| p.label() == trimmed) {
            return Ok(*p);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "listing" | "listing-content" => Ok(Self::ListingContent),
            "header" => Ok(Self::Header),
            "custom" => Ok(Self::Custom),
            other => Err(format!(
                "unknown preset '{other}' (expected listing, header or custom)"
            )),
        }
    }
}

/// Parse a custom dimension field the way an HTML number input is read:
/// leading whitespace is skipped and the leading run of decimal digits is
/// taken. Blank, non-numeric and non-positive input yields `fallback`.
pub fn parse_dimension(text: &str, fallback: u32) -> u32 {
    let trimmed = text.trim_start();
    let digits_end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(trimmed.len(), |(i, _)| i);

    match trimmed[..digits_end].parse::<u32>() {
        Ok(v) if v > 0 => v,
        _ => fallback,
    }
}

/// Preset selection plus the two custom fields, and the size they resolve to.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetSelection {
    preset: SizePreset,
    custom_width: String,
    custom_height: String,
    size: TargetSize,
}

impl Default for TargetSelection {
    fn default() -> Self {
        Self {
            preset: SizePreset::default(),
            custom_width: String::new(),
            custom_height: String::new(),
            size: TargetSize::default(),
        }
    }
}

impl TargetSelection {
    pub fn preset(&self) -> SizePreset {
        self.preset
    }

    pub fn size(&self) -> TargetSize {
        self.size
    }

    pub fn custom_fields(&self) -> (&str, &str) {
        (&self.custom_width, &self.custom_height)
    }

    /// Switch preset. Choosing `Custom` re-reads both custom fields.
    pub fn select_preset(&mut self, preset: SizePreset) {
        self.preset = preset;
        let size = match preset.size() {
            Some(size) => size,
            None => TargetSize::new(
                parse_dimension(&self.custom_width, CUSTOM_FALLBACK_WIDTH),
                parse_dimension(&self.custom_height, CUSTOM_FALLBACK_HEIGHT),
            ),
        };
        self.set_target_size(size);
    }

    /// Record the custom width field. Returns true if the target size changed.
    pub fn set_custom_width(&mut self, text: impl Into<String>) -> bool {
        self.custom_width = text.into();
        if self.preset != SizePreset::Custom {
            return false;
        }
        let width = parse_dimension(&self.custom_width, CUSTOM_FALLBACK_WIDTH);
        self.set_target_size(TargetSize::new(width, self.size.height))
    }

    /// Record the custom height field. Returns true if the target size changed.
    pub fn set_custom_height(&mut self, text: impl Into<String>) -> bool {
        self.custom_height = text.into();
        if self.preset != SizePreset::Custom {
            return false;
        }
        let height = parse_dimension(&self.custom_height, CUSTOM_FALLBACK_HEIGHT);
        self.set_target_size(TargetSize::new(self.size.width, height))
    }

    fn set_target_size(&mut self, size: TargetSize) -> bool {
        if size == self.size {
            return false;
        }
        debug!(from = %self.size, to = %size, preset = ?self.preset, "Target size changed");
        self.size = size;
        true
    }
}
