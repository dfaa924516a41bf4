use serde::{Deserialize, Serialize};

use crate::{Dots, braille_table};

/// Who wrote a cell last. Only used for feedback in front ends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Explicit dot toggle or cell editor.
    #[default]
    Manual,
    /// Shapes, fills and image import.
    Automatic,
    /// Text transliteration.
    Text,
}

/// One braille character slot on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub dots: Dots,
    pub letter: char,
    pub origin: Origin,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        dots: Dots::empty(),
        letter: ' ',
        origin: Origin::Manual,
    };

    /// A cell whose letter is derived from its dots.
    pub fn from_dots(dots: Dots, origin: Origin) -> Self {
        Cell {
            dots,
            letter: braille_table::dots_to_letter(dots),
            origin,
        }
    }

    /// A cell holding `letter` with its canonical pattern.
    pub fn from_letter(letter: char, origin: Origin) -> Self {
        Cell {
            dots: braille_table::letter_to_dots(letter),
            letter: letter.to_ascii_lowercase(),
            origin,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Replaces the dots and resyncs the letter.
    pub fn set_dots(&mut self, dots: Dots, origin: Origin) {
        self.dots = dots;
        self.letter = braille_table::dots_to_letter(dots);
        self.origin = origin;
    }
}
