//! ANSI palette for tree dumps and construction traces.
//!
//! Three roles plus reset:
//! - `label`: edge labels
//! - `leaf`: leaf positions and suffix numbers
//! - `link`: suffix links and other secondary structure

/// ANSI color palette for CLI output.
///
/// Only standard 16-color codes, so output reads on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub label: &'static str,
    pub leaf: &'static str,
    pub link: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        label: "\x1b[34m",
        leaf: "\x1b[32m",
        link: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        label: "",
        leaf: "",
        link: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in the `label` color.
    pub fn paint_label(&self, text: &str) -> String {
        format!("{}{}{}", self.label, text, self.reset)
    }

    /// Wrap `text` in the `leaf` color.
    pub fn paint_leaf(&self, text: &str) -> String {
        format!("{}{}{}", self.leaf, text, self.reset)
    }

    /// Wrap `text` in the `link` color.
    pub fn paint_link(&self, text: &str) -> String {
        format!("{}{}{}", self.link, text, self.reset)
    }
}
