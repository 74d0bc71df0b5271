//! artboard-tricks - grid cleanup for design-page artboards
//!
//! Takes the artboards of a single page, in whatever scattered positions
//! they currently occupy, and:
//! - recovers the logical row structure from the raw rectangle positions
//! - repositions everything into a tidy grid with configurable spacing
//! - renumbers artboard names with a `RR-CC` prefix, preserving user base
//!   names and dotted sub-flow numbering (e.g. `00-02.1_Detail`)
//!
//! The host document is abstracted behind the [`host::Page`] and
//! [`host::Artboard`] traits; [`page::MemoryPage`] is a ready-made in-memory
//! implementation used by the CLI and the test suite.
//!
//! # Usage
//!
//! ```
//! use artboard_tricks::{rearrange_page, MemoryArtboard, MemoryPage, Preferences, Rect};
//!
//! let mut page = MemoryPage::new(vec![
//!     MemoryArtboard::new("Home", Rect::new(0.0, 0.0, 100.0, 100.0)),
//!     MemoryArtboard::new("Checkout", Rect::new(240.0, 8.0, 340.0, 108.0)),
//! ]);
//! rearrange_page(&mut page, &Preferences::default()).unwrap();
//! ```

pub mod cluster;
pub mod error;
pub mod geom;
pub mod grid;
pub mod host;
pub mod page;
pub mod prefs;
pub mod renamer;

pub use error::{Result, TricksError};
pub use geom::Rect;
pub use grid::rearrange_grid;
pub use host::{Artboard, Page};
pub use page::{MemoryArtboard, MemoryPage};
pub use prefs::Preferences;
pub use renamer::add_numbers;

/// Run both passes in sequence: grid layout first, then renumbering.
///
/// This is the original plugin's default command. The renumber pass re-reads
/// artboard positions after layout, so numbering always reflects the tidied
/// grid rather than the pre-layout scatter.
///
/// # Errors
/// Propagates the first host write failure; positions already applied stay
/// applied (the host offers no transaction boundary).
pub fn rearrange_page<P: Page>(page: &mut P, prefs: &Preferences) -> Result<()> {
    grid::rearrange_grid(page, prefs)?;
    renamer::add_numbers(page, prefs)
}
