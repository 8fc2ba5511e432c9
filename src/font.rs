use crate::LayoutError;
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// Identifies a font registered in a [`FontBook`](crate::FontBook). Ids are arena
/// indices, so two distinct fonts never share an id even if they share a name.
pub type FontId = Id<Box<dyn FontMetrics>>;

/// Font metrics consumed by the line breaker and the cell sizing code.
///
/// All values are expressed in thousandths of an em (the same unit PDF font
/// descriptors use), so a measurement is scaled to points by multiplying with
/// `font_size / 1000`. Implementations must be deterministic: the same input
/// always yields the same width.
pub trait FontMetrics {
    /// Advance width of `text`, in 1/1000 em
    fn string_width(&self, text: &str) -> f32;

    /// Distance from the baseline to the top of the tallest glyphs
    fn ascent(&self) -> f32;

    /// Distance from the baseline to the bottom of the lowest glyphs. Usually negative
    fn descent(&self) -> f32;

    /// Baseline-to-baseline distance of two consecutive lines
    fn line_height(&self) -> f32 {
        self.ascent() - self.descent()
    }

    /// Advance width of a single space
    fn space_width(&self) -> f32 {
        self.string_width(" ")
    }

    /// Average advance width of a character, used to reject widths too narrow
    /// to break words into
    fn average_char_width(&self) -> f32;
}

/// A parsed TrueType or OpenType font, measured through its horizontal metrics.
pub struct Font {
    pub face: OwnedFace,
    average_width: f32,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        let mut font = Font {
            face,
            average_width: 0.0,
        };
        font.average_width = font.printable_ascii_average();
        Ok(font)
    }

    /// Obtain the full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    fn scaling(&self) -> f32 {
        1000.0 / self.face.as_face_ref().units_per_em() as f32
    }

    fn advance(&self, ch: char) -> Option<f32> {
        let gid = self.glyph_id(ch)?;
        self.face
            .as_face_ref()
            .glyph_hor_advance(GlyphId(gid))
            .map(|adv| adv as f32 * self.scaling())
    }

    fn printable_ascii_average(&self) -> f32 {
        let advances: Vec<f32> = (' '..='~').filter_map(|ch| self.advance(ch)).collect();
        if advances.is_empty() {
            return 0.0;
        }
        advances.iter().sum::<f32>() / advances.len() as f32
    }
}

impl FontMetrics for Font {
    fn string_width(&self, text: &str) -> f32 {
        text.chars().filter_map(|ch| self.advance(ch)).sum()
    }

    fn ascent(&self) -> f32 {
        self.face.as_face_ref().ascender() as f32 * self.scaling()
    }

    fn descent(&self) -> f32 {
        self.face.as_face_ref().descender() as f32 * self.scaling()
    }

    fn line_height(&self) -> f32 {
        let face = self.face.as_face_ref();
        (face.line_gap() as f32 + face.ascender() as f32 - face.descender() as f32) * self.scaling()
    }

    fn average_char_width(&self) -> f32 {
        self.average_width
    }
}

/// The four faces a paragraph switches between when it meets `<b>` and `<i>` tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FontFamily {
    pub regular: FontId,
    pub bold: FontId,
    pub italic: FontId,
    pub bold_italic: FontId,
}

impl FontFamily {
    pub fn new(regular: FontId, bold: FontId, italic: FontId, bold_italic: FontId) -> FontFamily {
        FontFamily {
            regular,
            bold,
            italic,
            bold_italic,
        }
    }

    /// A family that uses the same face for every style, for when no bold or
    /// italic variants are available
    pub fn single(font: FontId) -> FontFamily {
        FontFamily::new(font, font, font, font)
    }

    /// Pick the face matching the given style flags
    pub fn variant(&self, bold: bool, italic: bool) -> FontId {
        match (bold, italic) {
            (true, true) => self.bold_italic,
            (true, false) => self.bold,
            (false, true) => self.italic,
            (false, false) => self.regular,
        }
    }

    /// The same family with the bold face promoted to the regular slot. Header
    /// cells are set with this.
    pub fn emboldened(&self) -> FontFamily {
        FontFamily {
            regular: self.bold,
            italic: self.bold_italic,
            ..*self
        }
    }
}
