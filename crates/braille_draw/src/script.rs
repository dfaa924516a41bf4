//! Scripted editing sessions
//!
//! A script is a TOML file replayed against a [`BrailleEditState`] as if the
//! events came from a pointer and a keyboard:
//!
//! ```toml
//! width = 20
//! height = 10
//!
//! [[event]]
//! type = "tool"
//! tool = "rectangle"
//!
//! [[event]]
//! type = "down"
//! x = 30.0
//! y = 45.0
//!
//! [[event]]
//! type = "up"
//! x = 130.0
//! y = 165.0
//!
//! [[event]]
//! type = "intent"
//! intent = "confirm_shape"
//! ```

use std::path::Path;

use anyhow::Context;
use braille_engine::{Dots, Grid};
use braille_engine_edit::{BrailleEditState, Intent, KeyModifiers, Tool};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Tool {
        tool: Tool,
    },
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
    },
    Leave,
    Intent {
        intent: Intent,
    },
    /// Types text at the text cursor, or at `at` when given.
    Text {
        text: String,
        #[serde(default)]
        at: Option<(i32, i32)>,
    },
    /// Sets one cell's dots, like the cell editor does.
    Cell {
        x: i32,
        y: i32,
        dots: Vec<u8>,
    },
    Fill {
        x: i32,
        y: i32,
    },
    StrokeWidth {
        width: i32,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub width: Option<i32>,
    pub height: Option<i32>,
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

/// What happened while replaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub changed: usize,
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let txt = std::fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
        Self::from_toml(&txt).with_context(|| format!("parsing script {}", path.display()))
    }

    pub fn from_toml(txt: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    /// An editor sized from the script, falling back to the given size.
    pub fn create_state(&self, width: i32, height: i32) -> anyhow::Result<BrailleEditState> {
        let grid = Grid::new(self.width.unwrap_or(width), self.height.unwrap_or(height))?;
        Ok(BrailleEditState::from_grid(grid))
    }

    pub fn replay(&self, state: &mut BrailleEditState) -> anyhow::Result<ReplayStats> {
        let mut stats = ReplayStats::default();
        for (i, event) in self.events.iter().enumerate() {
            let changed = apply_event(state, event).with_context(|| format!("event {} ({event:?})", i + 1))?;
            log::debug!("event {}: {event:?} -> changed {changed}", i + 1);
            stats.events += 1;
            if changed {
                stats.changed += 1;
            }
        }
        Ok(stats)
    }
}

fn apply_event(state: &mut BrailleEditState, event: &ScriptEvent) -> anyhow::Result<bool> {
    Ok(match event {
        ScriptEvent::Tool { tool } => {
            let changed = state.tool() != *tool;
            state.set_tool(*tool);
            changed
        }
        ScriptEvent::Down { x, y, shift, ctrl } => {
            let mut modifiers = KeyModifiers::empty();
            modifiers.set(KeyModifiers::SHIFT, *shift);
            modifiers.set(KeyModifiers::CTRL, *ctrl);
            state.pointer_down(*x, *y, modifiers)
        }
        ScriptEvent::Move { x, y } => state.pointer_move(*x, *y),
        ScriptEvent::Up { x, y } => state.pointer_up(*x, *y),
        ScriptEvent::Leave => state.pointer_leave(),
        ScriptEvent::Intent { intent } => state.handle_intent(*intent),
        ScriptEvent::Text { text, at } => match at {
            Some((x, y)) => state.insert_text_at(*x, *y, text),
            None => state.insert_text(text),
        },
        ScriptEvent::Cell { x, y, dots } => state.edit_cell(*x, *y, Dots::from_numbers(dots)?),
        ScriptEvent::Fill { x, y } => state.fill_at(*x, *y),
        ScriptEvent::StrokeWidth { width } => {
            state.set_stroke_width(*width);
            false
        }
    })
}
