//! Host-document traits.
//!
//! The host (Sketch, Figma, a test harness, ...) owns the artboard objects;
//! this crate only reads and mutates them through these traits. Artboards are
//! addressed by their current index in the page's layer list, index 0 being
//! the frontmost layer.

use crate::error::Result;
use crate::geom::Rect;

/// One artboard on a page. Position is mutated by moving `left`/`top`;
/// the core never resizes or destroys an artboard.
pub trait Artboard {
    /// Current frame in page coordinates.
    fn frame(&self) -> Rect;

    /// Move the artboard so its top-left corner is at (`left`, `top`).
    ///
    /// # Errors
    /// Hosts backed by fallible bridges may reject the write.
    fn set_position(&mut self, left: f64, top: f64) -> Result<()>;

    /// Current display name.
    fn name(&self) -> String;

    /// Replace the display name.
    ///
    /// # Errors
    /// Hosts backed by fallible bridges may reject the write.
    fn set_name(&mut self, name: &str) -> Result<()>;
}

/// A page's artboard collection plus its layer-ordering primitive.
pub trait Page {
    /// Concrete artboard type owned by this host.
    type Board: Artboard;

    /// Number of artboards on the page.
    fn len(&self) -> usize;

    /// True if the page has no artboards.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Artboard at `index` in current layer order, frontmost first.
    fn board(&self, index: usize) -> Option<&Self::Board>;

    /// Mutable access to the artboard at `index`.
    fn board_mut(&mut self, index: usize) -> Option<&mut Self::Board>;

    /// Remove the artboard at `index` and reinsert it as the frontmost
    /// layer. Indices of the artboards that were in front of it shift by
    /// one. This mirrors the remove-then-insert-at-top primitive design
    /// hosts typically expose; callers wanting a specific final order walk
    /// their desired sequence in reverse.
    ///
    /// # Errors
    /// Hosts backed by fallible bridges may reject the reorder.
    fn raise_to_front(&mut self, index: usize) -> Result<()>;
}
