//! Renumbering pass.
//!
//! Walks the artboards sorted by (top, left) and rewrites each name with a
//! zero-padded `RR-CC` prefix. Any prefix written by a previous run is
//! stripped first, so the pass is idempotent on stable positions. Dotted
//! sub-flow numbers ("2.1") keep their grouping: sub-flow members share the
//! main column number and count up a `.N` suffix instead.

use log::debug;

use crate::cluster;
use crate::error::Result;
use crate::host::{Artboard, Page};
use crate::prefs::Preferences;

/// Pieces of one artboard name. Recomputed every invocation, never stored.
#[derive(Debug, PartialEq, Eq)]
pub struct NameParts {
    /// Everything up to and including the last `/`, or empty.
    pub path: String,
    /// Leading digits-and-dots number, if any. Used only to detect sub-flow
    /// membership, never to seed the new number.
    pub current_number: String,
    /// The name with path and number prefix removed.
    pub base_name: String,
}

/// Longest leading run of ASCII digits and dots.
fn leading_number(s: &str) -> &str {
    let end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    s.get(..end).unwrap_or("")
}

/// Drop a single leading `_` or `-`.
fn skip_separator(s: &str) -> &str {
    s.strip_prefix(['_', '-']).unwrap_or(s)
}

/// Strip a generated prefix head from the front of `s`: digits, one
/// optional `.` or `-`, digits, one optional `_`. Every part may be empty,
/// so this never fails; on an unprefixed name it strips nothing.
///
/// A generated sub-flow name like `00-02.1_Detail` deliberately loses only
/// `00-02` here, keeping `.1` visible for re-detection.
fn strip_generated_prefix(s: &str) -> &str {
    let rest = s.trim_start_matches(|c: char| c.is_ascii_digit());
    let rest = rest.strip_prefix(['.', '-']).unwrap_or(rest);
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.strip_prefix('_').unwrap_or(rest)
}

/// Split one artboard name into path, current number, and base name.
///
/// A name that carries no recognizable prefix degrades gracefully to
/// `current_number = ""` with the whole remainder as the base name.
pub fn parse_name(full: &str) -> NameParts {
    let path_len = full.rfind('/').map_or(0, |i| i + 1);
    let path = full.get(..path_len).unwrap_or("");
    let rest = full.get(path_len..).unwrap_or("");

    // First look past any generated prefix for a dotted sub-number
    // (`00-02.1_Detail` -> `.1`).
    let cleaned = strip_generated_prefix(rest);
    let number = leading_number(cleaned);
    if number.contains('.') {
        let base = skip_separator(cleaned.get(number.len()..).unwrap_or(""));
        return NameParts {
            path: path.to_string(),
            current_number: number.to_string(),
            base_name: base.to_string(),
        };
    }

    // A hand-written dotted number ("2.1_Detail") also marks sub-flow
    // membership, even though the strip above would have eaten it.
    let raw = leading_number(rest);
    if raw.contains('.') {
        let base = skip_separator(rest.get(raw.len()..).unwrap_or(""));
        return NameParts {
            path: path.to_string(),
            current_number: raw.to_string(),
            base_name: base.to_string(),
        };
    }

    NameParts {
        path: path.to_string(),
        current_number: number.to_string(),
        base_name: skip_separator(cleaned.get(number.len()..).unwrap_or("")).to_string(),
    }
}

// Row breaks are exact-equality on top: the layout pass writes identical
// tops for every member of a row, so no epsilon is applied.
#[allow(clippy::float_cmp)]
fn same_row(last_top: Option<f64>, top: f64) -> bool {
    last_top.is_some_and(|t| t == top)
}

/// Compute new names for artboards already sorted by (top, left).
///
/// Pure fold over the sorted sequence: `row` advances when the top
/// coordinate changes, `col` advances per artboard within a row, and a
/// dotted current number holds the column while counting up `sub_col`.
pub fn plan_names(entries: &[(f64, &str)], prefs: &Preferences) -> Vec<String> {
    let mut row: i32 = -1;
    let mut col: i32 = -1;
    let mut sub_col: i32 = 0;
    let mut last_top: Option<f64> = None;
    let mut names = Vec::with_capacity(entries.len());

    for &(top, full_name) in entries {
        if !same_row(last_top, top) {
            last_top = Some(top);
            row += 1;
            col = -1;
            sub_col = 0;
        }

        let parts = parse_name(full_name);
        if parts.current_number.contains('.') {
            // Stay in the current column, count the sub-flow up.
            sub_col += 1;
            col = col.max(0);
        } else {
            sub_col = 0;
            col += 1;
        }

        let mut prefix = format!("{row:02}{}{col:02}", prefs.row_col_separator);
        if sub_col > 0 {
            prefix.push('.');
            prefix.push_str(&sub_col.to_string());
        }
        if !parts.base_name.is_empty() {
            prefix.push_str(&prefs.number_title_separator);
        }

        names.push(format!("{}{}{}", parts.path, prefix, parts.base_name));
    }

    names
}

/// Renumber every artboard on the page in (top, left) order.
///
/// All names are computed from a position snapshot before any write.
///
/// # Errors
/// Propagates the first failed host write; artboards already renamed stay
/// renamed.
pub fn add_numbers<P: Page>(page: &mut P, prefs: &Preferences) -> Result<()> {
    let mut metas = cluster::collect_metas(page);
    if metas.is_empty() {
        return Ok(());
    }

    metas.sort_by(|a, b| {
        a.rect
            .top
            .total_cmp(&b.rect.top)
            .then(a.rect.left.total_cmp(&b.rect.left))
    });

    let current: Vec<String> = metas
        .iter()
        .map(|m| page.board(m.index).map_or_else(String::new, Artboard::name))
        .collect();
    let entries: Vec<(f64, &str)> = metas
        .iter()
        .zip(&current)
        .map(|(m, name)| (m.rect.top, name.as_str()))
        .collect();
    let planned = plan_names(&entries, prefs);
    debug!("renumbering {} artboards", planned.len());

    for (meta, name) in metas.iter().zip(&planned) {
        if let Some(board) = page.board_mut(meta.index) {
            board.set_name(name)?;
        }
    }
    Ok(())
}
