//! Row clustering.
//!
//! Recovers the logical row structure of a page from raw artboard rectangles
//! with no grid metadata: an artboard starts a row when nothing strictly to
//! its left overlaps it vertically, and every other artboard joins the row
//! whose starter's vertical center is nearest. The overlap rule tolerates
//! rows of unequal heights and partial vertical misalignment that comparing
//! top coordinates alone would miss.

use log::debug;

use crate::geom::Rect;
use crate::host::{Artboard, Page};

/// Snapshot of one artboard, taken fresh at the start of each pass.
#[derive(Debug, Clone, Copy)]
pub struct ArtboardMeta {
    /// Index of the artboard in the page's layer list at snapshot time.
    pub index: usize,
    /// Frame at snapshot time.
    pub rect: Rect,
}

/// One recovered row: its starter plus every artboard assigned to it.
#[derive(Debug, Clone)]
pub struct Row {
    /// Row number, 0 = topmost.
    pub index: usize,
    /// Member artboards; insertion order until the layout pass sorts them
    /// left-to-right.
    pub members: Vec<ArtboardMeta>,
    /// Max member height, recomputed as members are assigned.
    pub height: f64,
}

/// Snapshot every artboard on the page.
pub fn collect_metas<P: Page>(page: &P) -> Vec<ArtboardMeta> {
    (0..page.len())
        .filter_map(|index| {
            page.board(index).map(|board| ArtboardMeta {
                index,
                rect: board.frame(),
            })
        })
        .collect()
}

/// Partition `metas` into rows.
///
/// Every artboard lands in exactly one row; rows are ordered top-to-bottom
/// by their starter's top edge (stable, so starters sharing a top keep
/// their layer order). A non-starter equidistant from two starters goes to
/// the row with the smaller index.
pub fn cluster_rows(metas: &[ArtboardMeta]) -> Vec<Row> {
    // An artboard starts a row unless some artboard strictly to its left
    // overlaps it vertically.
    let mut starters: Vec<ArtboardMeta> = metas
        .iter()
        .filter(|meta| {
            !metas.iter().any(|other| {
                other.index != meta.index
                    && other.rect.left < meta.rect.left
                    && meta.rect.vertically_overlaps(&other.rect)
            })
        })
        .copied()
        .collect();

    starters.sort_by(|a, b| a.rect.top.total_cmp(&b.rect.top));

    let mut rows: Vec<Row> = starters
        .iter()
        .enumerate()
        .map(|(index, starter)| Row {
            index,
            members: vec![*starter],
            height: starter.rect.height(),
        })
        .collect();

    // Everything else joins the row whose starter's vertical center is
    // nearest. Strict less-than keeps the smaller row index on ties.
    for meta in metas {
        if starters.iter().any(|s| s.index == meta.index) {
            continue;
        }

        let center = meta.rect.vertical_center();
        let mut nearest: Option<(usize, f64)> = None;
        for (row_index, starter) in starters.iter().enumerate() {
            let distance = (starter.rect.vertical_center() - center).abs();
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((row_index, distance));
            }
        }

        if let Some((row_index, _)) = nearest {
            if let Some(row) = rows.get_mut(row_index) {
                row.members.push(*meta);
                if meta.rect.height() > row.height {
                    row.height = meta.rect.height();
                }
            }
        }
    }

    debug!("clustered {} artboards into {} rows", metas.len(), rows.len());
    rows
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    fn meta(index: usize, left: f64, top: f64, right: f64, bottom: f64) -> ArtboardMeta {
        ArtboardMeta {
            index,
            rect: Rect::new(left, top, right, bottom),
        }
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(cluster_rows(&[]).is_empty());
    }

    #[test]
    fn test_single_artboard_single_row() {
        let rows = cluster_rows(&[meta(0, 0.0, 0.0, 100.0, 100.0)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].members.len(), 1);
        assert_eq!(rows[0].height, 100.0);
    }

    #[test]
    fn test_one_row_despite_vertical_jitter() {
        // B and C overlap A's vertical band; only A has nothing to its left.
        let metas = [
            meta(0, 0.0, 0.0, 100.0, 100.0),
            meta(1, 150.0, 30.0, 250.0, 130.0),
            meta(2, 300.0, -20.0, 400.0, 80.0),
        ];
        let rows = cluster_rows(&metas);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].members.len(), 3);
        assert_eq!(rows[0].height, 100.0);
    }

    #[test]
    fn test_stacked_artboards_form_separate_rows() {
        let metas = [
            meta(0, 0.0, 300.0, 100.0, 400.0),
            meta(1, 0.0, 0.0, 100.0, 100.0),
            meta(2, 0.0, 150.0, 100.0, 250.0),
        ];
        let rows = cluster_rows(&metas);
        assert_eq!(rows.len(), 3);
        // Rows ordered by top edge regardless of input order.
        assert_eq!(rows[0].members[0].index, 1);
        assert_eq!(rows[1].members[0].index, 2);
        assert_eq!(rows[2].members[0].index, 0);
    }

    #[test]
    fn test_partition_covers_every_artboard_once() {
        let metas = [
            meta(0, 0.0, 0.0, 100.0, 100.0),
            meta(1, 150.0, 10.0, 250.0, 110.0),
            meta(2, 0.0, 300.0, 100.0, 400.0),
            meta(3, 180.0, 290.0, 280.0, 390.0),
            meta(4, 400.0, 320.0, 500.0, 420.0),
        ];
        let rows = cluster_rows(&metas);
        let mut seen: Vec<usize> = rows
            .iter()
            .flat_map(|row| row.members.iter().map(|m| m.index))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_non_starter_joins_nearest_row() {
        // Centers: row 0 at 50, row 1 at 350; the orphan at 280 is nearer
        // to row 1.
        let metas = [
            meta(0, 0.0, 0.0, 100.0, 100.0),
            meta(1, 0.0, 300.0, 100.0, 400.0),
            meta(2, 200.0, 230.0, 300.0, 330.0),
        ];
        let rows = cluster_rows(&metas);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].members.len(), 2);
        assert_eq!(rows[1].members[1].index, 2);
    }

    #[test]
    fn test_equidistant_tie_goes_to_smaller_row_index() {
        // The orphan overlaps the first starter's band, so it is not a
        // starter itself, and its center at 250 is exactly 150 from both
        // starters' centers (100 and 400). The tie goes to row 0.
        let metas = [
            meta(0, 0.0, 0.0, 100.0, 200.0),
            meta(1, 0.0, 300.0, 100.0, 500.0),
            meta(2, 200.0, 150.0, 300.0, 350.0),
        ];
        let rows = cluster_rows(&metas);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].members.len(), 2);
        assert_eq!(rows[0].members[1].index, 2);
        assert_eq!(rows[1].members.len(), 1);
    }

    #[test]
    fn test_row_height_is_max_member_height() {
        let metas = [
            meta(0, 0.0, 0.0, 100.0, 100.0),
            meta(1, 150.0, 0.0, 250.0, 180.0),
        ];
        let rows = cluster_rows(&metas);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].height, 180.0);
    }

    #[test]
    fn test_starters_sharing_top_keep_layer_order() {
        // Identical frames: neither is strictly left of the other, so both
        // start rows, and the stable sort keeps layer order.
        let metas = [
            meta(0, 0.0, 0.0, 100.0, 100.0),
            meta(1, 0.0, 0.0, 100.0, 100.0),
        ];
        let rows = cluster_rows(&metas);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].members[0].index, 0);
        assert_eq!(rows[1].members[0].index, 1);
    }
}
