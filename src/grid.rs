//! Grid layout pass.
//!
//! Consumes the row clustering, sorts each row left-to-right, and recomputes
//! absolute positions from a fixed origin plus the configured spacing. Also
//! restacks the host's layer list into row-major order.

use log::debug;

use crate::cluster::{self, ArtboardMeta};
use crate::error::Result;
use crate::host::{Artboard, Page};
use crate::prefs::Preferences;

/// One planned artboard move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Page index of the artboard to move.
    pub index: usize,
    /// Target left edge.
    pub left: f64,
    /// Target top edge.
    pub top: f64,
}

/// The full result of planning a layout, computed before any host write.
#[derive(Debug, Clone)]
pub struct LayoutPlan {
    /// Target positions, one per artboard.
    pub placements: Vec<Placement>,
    /// Desired layer order as page indices, frontmost first (row 0 col 0,
    /// row 0 col 1, ...).
    pub front_to_back: Vec<usize>,
}

/// Plan the grid without touching the host.
///
/// The grid is anchored at the current position of the first artboard in
/// the first row, never at a hardcoded (0,0) — some hosts silently misplace
/// artboards positioned at literal zero. Spacing values are taken as given;
/// negative spacing produces an overlapping layout.
pub fn plan_layout(metas: &[ArtboardMeta], prefs: &Preferences) -> LayoutPlan {
    let mut rows = cluster::cluster_rows(metas);

    for row in &mut rows {
        row.members.sort_by(|a, b| a.rect.left.total_cmp(&b.rect.left));
    }

    let origin = rows
        .first()
        .and_then(|row| row.members.first())
        .map_or((0.0, 0.0), |m| (m.rect.left, m.rect.top));

    let mut placements = Vec::with_capacity(metas.len());
    let mut front_to_back = Vec::with_capacity(metas.len());
    let mut y = origin.1;
    for row in &rows {
        let mut x = origin.0;
        for member in &row.members {
            placements.push(Placement {
                index: member.index,
                left: x,
                top: y,
            });
            front_to_back.push(member.index);
            x += member.rect.width() + prefs.x_spacing;
        }
        y += row.height + prefs.y_spacing;
    }

    LayoutPlan {
        placements,
        front_to_back,
    }
}

/// Rearrange the page's artboards into a tidy grid.
///
/// Positions and the layer order are planned in full first, then applied;
/// the host is never read mid-apply.
///
/// # Errors
/// Propagates the first failed host write. Artboards already moved stay
/// moved.
pub fn rearrange_grid<P: Page>(page: &mut P, prefs: &Preferences) -> Result<()> {
    let metas = cluster::collect_metas(page);
    if metas.is_empty() {
        return Ok(());
    }

    let plan = plan_layout(&metas, prefs);
    debug!("placing {} artboards", plan.placements.len());

    for placement in &plan.placements {
        if let Some(board) = page.board_mut(placement.index) {
            board.set_position(placement.left, placement.top)?;
        }
    }

    apply_layer_order(page, &plan.front_to_back)
}

/// Restack the layer list to match `front_to_back`.
///
/// The host primitive is remove-then-reinsert-at-front, so the desired
/// order is walked in reverse: each raise puts one artboard on top, and the
/// first desired artboard is raised last, ending frontmost.
fn apply_layer_order<P: Page>(page: &mut P, front_to_back: &[usize]) -> Result<()> {
    // Raising shifts the list, so track where each original index sits now.
    let mut position: Vec<usize> = (0..page.len()).collect();
    for &original in front_to_back.iter().rev() {
        let Some(&current) = position.get(original) else {
            continue;
        };
        page.raise_to_front(current)?;
        for p in &mut position {
            if *p < current {
                *p += 1;
            }
        }
        if let Some(p) = position.get_mut(original) {
            *p = 0;
        }
    }
    Ok(())
}
