use crate::units::*;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: Pt,
}

impl Rect {
    /// The rectangle hanging down from a top-left corner, the way rows and cells
    /// are positioned on a page
    pub fn from_top_left(left: Pt, top: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: left,
            y1: top - height,
            x2: left + width,
            y2: top,
        }
    }

    pub fn width(&self) -> Pt {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> Pt {
        (self.y2 - self.y1).abs()
    }
}
