//! Interactive shape placement
//!
//! ```text
//! idle ──down──▶ placing ──up──▶ locked ──confirm──▶ idle (grid written once)
//!                   │  ▲ move        │
//!                   └──┴─────────────┴──cancel──▶ idle (grid untouched)
//! ```
//!
//! A pointer-down in any state starts over at the new anchor. The preview is
//! recomputed from scratch on every request; nothing but `confirm` ever
//! produces a grid.

use braille_engine::{Grid, Origin, Position, Rectangle, Size, cell_fraction, pixel_to_cell};

use crate::{
    brushes::{DotMap, ShapeKind, ShapeParams, shape_to_dots_map},
    grid_operations::apply_dots_map_to_grid,
};

/// A shape being dragged out or waiting for confirmation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementState {
    pub shape: ShapeKind,
    pub anchor: Position,
    pub current: Position,
    /// Press position inside the anchor cell, `(0..1, 0..1)`.
    pub anchor_frac: (f64, f64),
    pub is_locked: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ShapePlacement {
    state: Option<PlacementState>,
    stroke_width: Option<i32>,
    max_dist_px: Option<f64>,
}

impl ShapePlacement {
    pub fn new(stroke_width: Option<i32>, max_dist_px: Option<f64>) -> Self {
        Self {
            state: None,
            stroke_width,
            max_dist_px,
        }
    }

    pub fn state(&self) -> Option<&PlacementState> {
        self.state.as_ref()
    }

    pub fn is_placing(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_some_and(|s| s.is_locked)
    }

    pub fn shape(&self) -> Option<ShapeKind> {
        self.state.map(|s| s.shape)
    }

    pub fn set_stroke_width(&mut self, stroke_width: Option<i32>) {
        self.stroke_width = stroke_width;
    }

    pub fn set_max_dist_px(&mut self, max_dist_px: Option<f64>) {
        self.max_dist_px = max_dist_px;
    }

    /// Pointer down. Drops whatever was in progress, then starts a new shape
    /// if the pointer is over the grid.
    pub fn begin(&mut self, px: f64, py: f64, shape: ShapeKind, grid_size: Size) -> bool {
        if self.state.is_some() {
            log::debug!("discarding {:?} placement on new pointer down", self.shape());
        }
        self.state = None;

        let cell = pixel_to_cell(px, py);
        if !grid_size.is_inside(cell) {
            return false;
        }
        self.state = Some(PlacementState {
            shape,
            anchor: cell,
            current: cell,
            anchor_frac: cell_fraction(px, py),
            is_locked: false,
        });
        true
    }

    /// Pointer move. Ignored while idle or locked; the cell is clamped into the grid.
    pub fn update(&mut self, px: f64, py: f64, grid_size: Size) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if state.is_locked {
            return false;
        }
        let cell = pixel_to_cell(px, py).clamp_to(grid_size.width, grid_size.height);
        if cell == state.current {
            return false;
        }
        state.current = cell;
        true
    }

    /// Pointer up: freezes the preview.
    pub fn lock(&mut self) -> bool {
        match self.state.as_mut() {
            Some(state) if !state.is_locked => {
                state.is_locked = true;
                log::debug!("locked {:?} from {} to {}", state.shape, state.anchor, state.current);
                true
            }
            _ => false,
        }
    }

    pub fn params(&self) -> ShapeParams {
        ShapeParams {
            stroke_width: self.stroke_width,
            max_dist_px: self.max_dist_px,
            anchor_frac: self.state.map(|s| s.anchor_frac),
        }
    }

    /// Dots the shape would write. Empty while idle.
    pub fn preview(&self, grid_size: Size) -> DotMap {
        let Some(state) = self.state else {
            return DotMap::new();
        };
        shape_to_dots_map(state.shape, state.anchor, state.current, grid_size.width, grid_size.height, &self.params())
    }

    /// Cells spanned by anchor and current, inclusive.
    pub fn bounding_box(&self) -> Option<Rectangle> {
        self.state.map(|s| Rectangle::from_pt(s.anchor, s.current))
    }

    /// Writes the preview into a copy of `grid` and goes back to idle.
    ///
    /// Returns `None` (still resetting) when idle or when the preview is empty.
    pub fn confirm(&mut self, grid: &Grid) -> Option<Grid> {
        let map = self.preview(grid.size());
        let shape = self.shape();
        self.state = None;
        if map.is_empty() {
            return None;
        }
        log::debug!("confirmed {shape:?} touching {} cells", map.len());
        Some(apply_dots_map_to_grid(grid, &map, Origin::Automatic))
    }

    /// Back to idle. Safe in any state.
    pub fn cancel(&mut self) {
        self.state = None;
    }
}
