//! In-memory host implementation.
//!
//! `MemoryPage` backs the CLI and the test suite, and doubles as the
//! reference for what a real host binding has to provide. The board list is
//! kept frontmost-first, matching the layer-list convention of the `Page`
//! trait.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TricksError};
use crate::geom::Rect;
use crate::host::{Artboard, Page};
use crate::prefs::Preferences;

/// An artboard held directly in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryArtboard {
    /// Display name.
    pub name: String,
    /// Frame in page coordinates.
    #[serde(flatten)]
    pub rect: Rect,
}

impl MemoryArtboard {
    /// Create an artboard with the given name and frame.
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
        }
    }
}

impl Artboard for MemoryArtboard {
    fn frame(&self) -> Rect {
        self.rect
    }

    fn set_position(&mut self, left: f64, top: f64) -> Result<()> {
        let width = self.rect.width();
        let height = self.rect.height();
        self.rect.left = left;
        self.rect.top = top;
        self.rect.right = left + width;
        self.rect.bottom = top + height;
        Ok(())
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = name.to_string();
        Ok(())
    }
}

/// A page whose artboards live in a plain `Vec`, frontmost first.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    boards: Vec<MemoryArtboard>,
}

impl MemoryPage {
    /// Create a page from a board list, frontmost first.
    pub fn new(boards: Vec<MemoryArtboard>) -> Self {
        Self { boards }
    }

    /// The boards in current layer order.
    pub fn boards(&self) -> &[MemoryArtboard] {
        &self.boards
    }

    /// Consume the page, returning the boards in current layer order.
    pub fn into_boards(self) -> Vec<MemoryArtboard> {
        self.boards
    }

    /// Names in current layer order. Test convenience.
    pub fn names(&self) -> Vec<String> {
        self.boards.iter().map(|b| b.name.clone()).collect()
    }
}

impl Page for MemoryPage {
    type Board = MemoryArtboard;

    fn len(&self) -> usize {
        self.boards.len()
    }

    fn board(&self, index: usize) -> Option<&MemoryArtboard> {
        self.boards.get(index)
    }

    fn board_mut(&mut self, index: usize) -> Option<&mut MemoryArtboard> {
        self.boards.get_mut(index)
    }

    fn raise_to_front(&mut self, index: usize) -> Result<()> {
        if index >= self.boards.len() {
            return Err(TricksError::Host(format!(
                "no artboard at layer index {index}"
            )));
        }
        let board = self.boards.remove(index);
        self.boards.insert(0, board);
        Ok(())
    }
}

/// The JSON page document consumed and produced by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDocument {
    /// Resolved preferences; omitted fields fall back to defaults.
    #[serde(default)]
    pub prefs: Preferences,
    /// Artboards, frontmost first.
    pub artboards: Vec<MemoryArtboard>,
}

impl PageDocument {
    /// Parse a page document from JSON.
    ///
    /// # Errors
    /// Returns [`TricksError::Document`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the page document as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`TricksError::Document`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    fn board(name: &str) -> MemoryArtboard {
        MemoryArtboard::new(name, Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    #[test]
    fn test_set_position_preserves_size() {
        let mut b = MemoryArtboard::new("A", Rect::new(10.0, 20.0, 110.0, 80.0));
        b.set_position(0.0, 0.0).unwrap();
        assert_eq!(b.rect, Rect::new(0.0, 0.0, 100.0, 60.0));
    }

    #[test]
    fn test_raise_to_front_moves_board_first() {
        let mut page = MemoryPage::new(vec![board("A"), board("B"), board("C")]);
        page.raise_to_front(2).unwrap();
        assert_eq!(page.names(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_raise_to_front_out_of_range_is_host_error() {
        let mut page = MemoryPage::new(vec![board("A")]);
        assert!(page.raise_to_front(3).is_err());
    }

    #[test]
    fn test_page_document_round_trip() {
        let doc = PageDocument {
            prefs: Preferences::default(),
            artboards: vec![MemoryArtboard::new(
                "Home",
                Rect::new(0.0, 0.0, 100.0, 100.0),
            )],
        };
        let json = doc.to_json().unwrap();
        let back = PageDocument::from_json(&json).unwrap();
        assert_eq!(back.artboards[0].name, "Home");
        assert_eq!(back.artboards[0].rect, doc.artboards[0].rect);
    }

    #[test]
    fn test_page_document_prefs_optional() {
        let doc = PageDocument::from_json(
            r#"{"artboards": [{"name": "A", "left": 0.0, "top": 0.0, "right": 10.0, "bottom": 10.0}]}"#,
        )
        .unwrap();
        assert_eq!(doc.prefs, Preferences::default());
    }
}
