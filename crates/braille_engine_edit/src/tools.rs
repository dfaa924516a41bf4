//! Tool definitions for braille drawing
//!
//! Tools sit in toolbar slots; a slot can hold a toggle pair where pressing an
//! already selected tool switches to its partner (pencil / eraser).

use serde::{Deserialize, Serialize};

use crate::brushes::ShapeKind;

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Area and cell selection, drag to move
    #[default]
    Select,

    // === Toggle Pair: Pencil / Eraser ===
    /// Raise single dots
    Pencil,
    /// Lower single dots, clear cells on click
    Eraser,

    // === Shapes ===
    Line,
    Rectangle,
    Circle,
    Triangle,

    /// Flood fill cells with the same dots
    Fill,
    /// Type text starting at a cell
    Text,
}

/// A toggle pair of tools sharing one toolbar slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolPair {
    pub primary: Tool,
    pub secondary: Tool,
}

impl ToolPair {
    pub const fn new(primary: Tool, secondary: Tool) -> Self {
        Self { primary, secondary }
    }

    pub const fn single(tool: Tool) -> Self {
        Self {
            primary: tool,
            secondary: tool,
        }
    }

    pub fn contains(&self, tool: Tool) -> bool {
        self.primary == tool || self.secondary == tool
    }

    /// Get the other tool in the pair (toggle)
    pub fn toggle(&self, current: Tool) -> Tool {
        if current == self.primary { self.secondary } else { self.primary }
    }

    pub fn is_single(&self) -> bool {
        self.primary == self.secondary
    }
}

pub const TOOL_SLOTS: [ToolPair; 8] = [
    ToolPair::single(Tool::Select),
    ToolPair::new(Tool::Pencil, Tool::Eraser),
    ToolPair::single(Tool::Line),
    ToolPair::single(Tool::Rectangle),
    ToolPair::single(Tool::Circle),
    ToolPair::single(Tool::Triangle),
    ToolPair::single(Tool::Fill),
    ToolPair::single(Tool::Text),
];

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Triangle => "Triangle",
            Tool::Fill => "Fill",
            Tool::Text => "Text",
        }
    }

    pub fn shortcut(&self) -> Option<char> {
        match self {
            Tool::Select => Some('s'),
            Tool::Pencil | Tool::Eraser => Some('p'),
            Tool::Line => Some('l'),
            Tool::Rectangle => Some('r'),
            Tool::Circle => Some('o'),
            Tool::Triangle => Some('y'),
            Tool::Fill => Some('f'),
            Tool::Text => Some('t'),
        }
    }

    /// Find which slot this tool belongs to
    pub fn slot_index(&self) -> usize {
        TOOL_SLOTS.iter().position(|pair| pair.contains(*self)).unwrap_or(0)
    }

    /// The tool selected by pressing `key`, toggling within a pair when `self` is already in it.
    pub fn from_shortcut(self, key: char) -> Option<Tool> {
        let key = key.to_ascii_lowercase();
        let slot = TOOL_SLOTS.iter().find(|pair| pair.primary.shortcut() == Some(key))?;
        if slot.contains(self) { Some(slot.toggle(self)) } else { Some(slot.primary) }
    }

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Triangle => Some(ShapeKind::Triangle),
            _ => None,
        }
    }

    /// Check if this tool draws shapes (needs overlay preview)
    pub fn is_shape_tool(&self) -> bool {
        self.shape_kind().is_some()
    }

    pub fn uses_selection(&self) -> bool {
        matches!(self, Tool::Select)
    }

    /// Check if this tool needs drag tracking
    pub fn needs_drag(&self) -> bool {
        matches!(self, Tool::Select | Tool::Pencil | Tool::Eraser) || self.is_shape_tool()
    }
}
