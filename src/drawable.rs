use crate::colour::Colour;
use crate::font::FontId;
use crate::line_style::LineStyle;
use crate::rect::Rect;
use crate::transform::Transform;
use crate::units::Pt;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: FontId,
    pub size: Pt,
}

/// A run of text in one font, positioned at its baseline start
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// Positioned output of paragraph, cell and row layout.
///
/// Nothing here is written anywhere by this crate: a drawing driver walks the
/// list and emits the matching content stream operators.
#[derive(Clone, PartialEq, Debug)]
pub enum Drawable {
    Text(SpanLayout),
    /// A filled list bullet
    Bullet {
        centre: (Pt, Pt),
        radius: Pt,
        colour: Colour,
    },
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        style: LineStyle,
    },
    Fill {
        rect: Rect,
        colour: Colour,
    },
    /// Drawables whose coordinates are mapped through `transform`
    Transformed {
        transform: Transform,
        contents: Vec<Drawable>,
    },
}

impl Drawable {
    /// All text spans, including those nested in transformed groups, in drawing order
    pub fn spans(drawables: &[Drawable]) -> Vec<&SpanLayout> {
        let mut spans = Vec::new();
        for drawable in drawables {
            match drawable {
                Drawable::Text(span) => spans.push(span),
                Drawable::Transformed { contents, .. } => spans.extend(Drawable::spans(contents)),
                _ => {}
            }
        }
        spans
    }
}
