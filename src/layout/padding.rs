use crate::units::Pt;

/// Space between a cell's borders and its text.
///
/// Cells start with the same padding on every side; individual sides are
/// adjusted with the `with_*` methods:
///
/// ```
/// use pdf_tables::Pt;
/// use pdf_tables::layout::Padding;
///
/// let padding = Padding::all(Pt(5.0)).with_left(Pt(12.0));
/// assert_eq!(padding.horizontal(), Pt(17.0));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Padding {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Padding {
    /// The same padding on every side
    pub fn all<D: Into<Pt>>(value: D) -> Padding {
        let value = value.into();
        Padding {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn with_top(self, top: Pt) -> Padding {
        Padding { top, ..self }
    }

    pub fn with_right(self, right: Pt) -> Padding {
        Padding { right, ..self }
    }

    pub fn with_bottom(self, bottom: Pt) -> Padding {
        Padding { bottom, ..self }
    }

    pub fn with_left(self, left: Pt) -> Padding {
        Padding { left, ..self }
    }

    /// Left plus right, taken off the width available to text
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Top plus bottom, added to the height the text needs
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }
}

impl From<Pt> for Padding {
    fn from(value: Pt) -> Self {
        Padding::all(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Mm;

    #[test]
    fn sides_sum_per_axis() {
        let padding = Padding::all(Pt(1.0))
            .with_right(Pt(2.0))
            .with_bottom(Pt(3.0))
            .with_left(Pt(4.0));
        assert_eq!(padding.vertical(), Pt(4.0));
        assert_eq!(padding.horizontal(), Pt(6.0));
        assert_eq!(padding.with_top(Pt(0.0)).vertical(), Pt(3.0));
        assert_eq!(Padding::default().vertical(), Pt(0.0));
    }

    #[test]
    fn accepts_other_units() {
        let padding = Padding::all(Mm(25.4));
        assert!((*padding.left - 72.0).abs() < 1e-3);
        assert_eq!(Padding::from(Pt(2.0)), Padding::all(Pt(2.0)));
    }
}
