//! Per-page layout and naming preferences.
//!
//! Storage and defaulting live with the host; the core receives one resolved
//! `Preferences` value per invocation and treats it as immutable.

use serde::{Deserialize, Serialize};

/// Resolved preferences for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Horizontal gap between artboards in a row.
    pub x_spacing: f64,
    /// Vertical gap between rows.
    pub y_spacing: f64,
    /// Separator between the row and column numbers, e.g. `-` in `00-02`.
    pub row_col_separator: String,
    /// Separator between the number prefix and the base name, e.g. `_` in
    /// `00-02_Checkout`.
    pub number_title_separator: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            x_spacing: 100.0,
            y_spacing: 100.0,
            row_col_separator: "-".to_string(),
            number_title_separator: "_".to_string(),
        }
    }
}
