/// Horizontal placement of each line within the paragraph width
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Centre,
    Right,
}

impl From<&str> for HorizontalAlignment {
    /// Parse `"left"`, `"center"`/`"centre"` or `"right"` in any case. Anything
    /// else is left aligned.
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => HorizontalAlignment::Centre,
            "right" => HorizontalAlignment::Right,
            _ => HorizontalAlignment::Left,
        }
    }
}

/// Vertical placement of a cell's paragraph within the row height
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl From<&str> for VerticalAlignment {
    /// Parse `"top"`, `"middle"` or `"bottom"` in any case. Anything else is top
    /// aligned.
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "middle" => VerticalAlignment::Middle,
            "bottom" => VerticalAlignment::Bottom,
            _ => VerticalAlignment::Top,
        }
    }
}

/// A line drawn along each line of text
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextDecoration {
    Underline,
    Strikeout,
}
