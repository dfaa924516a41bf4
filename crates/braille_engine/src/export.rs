//! Plain text export for embossers.
//!
//! The text is the grid's letters read row-major. Digits never need special
//! casing here: text insertion already stores them as number sign + letter.

use serde::{Deserialize, Serialize};

use crate::Grid;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    #[default]
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Joins every row's letters, rows separated by `eol`. No trailing line break.
pub fn grid_to_letters(grid: &Grid, eol: LineEnding) -> String {
    let mut result = String::with_capacity(((grid.width() + 2) * grid.height()) as usize);
    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            result.push_str(eol.as_str());
        }
        result.extend(row.iter().map(|cell| cell.letter));
    }
    result
}

/// Encodes text as one byte per character (Latin-1); anything above U+00FF becomes `fallback`.
pub fn to_single_byte(text: &str, fallback: u8) -> Vec<u8> {
    text.chars().map(|ch| u8::try_from(u32::from(ch)).unwrap_or(fallback)).collect()
}

/// `grid_to_letters` followed by `to_single_byte`.
pub fn export_grid(grid: &Grid, eol: LineEnding, fallback: u8) -> Vec<u8> {
    let text = grid_to_letters(grid, eol);
    let bytes = to_single_byte(&text, fallback);
    log::debug!("exported {}x{} grid to {} bytes", grid.width(), grid.height(), bytes.len());
    bytes
}
