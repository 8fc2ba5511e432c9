use crate::colour::Colour;
use crate::units::Pt;

/// How a border or decoration line is stroked
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub colour: Colour,
    pub width: Pt,
    /// Dash pattern as alternating on/off lengths; `None` is a solid line
    pub dash: Option<Vec<Pt>>,
}

impl LineStyle {
    /// A solid line
    pub fn new(colour: Colour, width: Pt) -> LineStyle {
        LineStyle {
            colour,
            width,
            dash: None,
        }
    }

    /// A dotted line: dots as long as the line is wide
    pub fn dotted(colour: Colour, width: Pt) -> LineStyle {
        LineStyle {
            colour,
            width,
            dash: Some(vec![width, width * 2.0]),
        }
    }

    /// A dashed line with dashes five times as long as the line is wide
    pub fn dashed(colour: Colour, width: Pt) -> LineStyle {
        LineStyle {
            colour,
            width,
            dash: Some(vec![width * 5.0]),
        }
    }
}

/// The border of each side of a cell; `None` draws nothing and takes no room
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Borders {
    pub top: Option<LineStyle>,
    pub right: Option<LineStyle>,
    pub bottom: Option<LineStyle>,
    pub left: Option<LineStyle>,
}

impl Borders {
    /// The same style on every side
    pub fn all(style: LineStyle) -> Borders {
        Borders {
            top: Some(style.clone()),
            right: Some(style.clone()),
            bottom: Some(style.clone()),
            left: Some(style),
        }
    }

    /// No border on any side
    pub fn none() -> Borders {
        Borders::default()
    }

    /// Combined width of the left and right borders
    pub fn horizontal(&self) -> Pt {
        side_width(&self.left) + side_width(&self.right)
    }

    /// Combined width of the top and bottom borders
    pub fn vertical(&self) -> Pt {
        side_width(&self.top) + side_width(&self.bottom)
    }
}

pub(crate) fn side_width(side: &Option<LineStyle>) -> Pt {
    side.as_ref().map(|s| s.width).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    #[test]
    fn missing_sides_take_no_room() {
        let mut borders = Borders::all(LineStyle::new(colours::BLACK, Pt(1.0)));
        assert_eq!(borders.horizontal(), Pt(2.0));
        borders.left = None;
        assert_eq!(borders.horizontal(), Pt(1.0));
        assert_eq!(borders.vertical(), Pt(2.0));
        assert_eq!(Borders::none().vertical(), Pt(0.0));
    }

    #[test]
    fn dash_patterns_scale_with_width() {
        assert_eq!(
            LineStyle::dotted(colours::RED, Pt(2.0)).dash,
            Some(vec![Pt(2.0), Pt(4.0)])
        );
        assert_eq!(
            LineStyle::dashed(colours::RED, Pt(1.0)).dash,
            Some(vec![Pt(5.0)])
        );
        assert_eq!(LineStyle::new(colours::RED, Pt(1.0)).dash, None);
    }
}
