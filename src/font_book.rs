use crate::font::{FontFamily, FontId, FontMetrics};
use crate::units::Pt;
use id_arena::Arena;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

const DEFAULT_CACHE_ENTRIES: usize = 4096;

#[derive(Debug)]
struct TextWidthCache {
    map: HashMap<FontId, HashMap<String, f32>>,
    order: VecDeque<(FontId, String)>,
    max_entries: usize,
}

impl TextWidthCache {
    fn new(max_entries: usize) -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
            max_entries,
        }
    }

    fn get(&self, font: FontId, text: &str) -> Option<f32> {
        self.map.get(&font)?.get(text).copied()
    }

    fn insert(&mut self, font: FontId, text: &str, width: f32) {
        let widths = self.map.entry(font).or_default();
        if widths.contains_key(text) {
            return;
        }
        widths.insert(text.to_string(), width);
        self.order.push_back((font, text.to_string()));
        while self.order.len() > self.max_entries {
            match self.order.pop_front() {
                Some((old_font, old_text)) => {
                    log::trace!("evicting cached width of {old_text:?}");
                    if let Some(widths) = self.map.get_mut(&old_font) {
                        widths.remove(&old_text);
                    }
                }
                None => break,
            }
        }
    }
}

/// The font metrics context every measuring call goes through.
///
/// A book owns the fonts a document uses and hands out [`FontId`]s for them.
/// Text widths are memoised per `(FontId, text)`. The cache uses interior
/// mutability and is not synchronised: a book, and every paragraph, cell and row
/// measured with it, belongs to one thread at a time.
pub struct FontBook {
    fonts: Arena<Box<dyn FontMetrics>>,
    widths: RefCell<TextWidthCache>,
}

impl Default for FontBook {
    fn default() -> Self {
        FontBook::new()
    }
}

impl FontBook {
    pub fn new() -> FontBook {
        FontBook::with_cache_capacity(DEFAULT_CACHE_ENTRIES)
    }

    /// Create a book whose width cache holds at most `entries` measurements
    /// before evicting the oldest ones
    pub fn with_cache_capacity(entries: usize) -> FontBook {
        FontBook {
            fonts: Arena::new(),
            widths: RefCell::new(TextWidthCache::new(entries)),
        }
    }

    /// Register a font, returning the id that refers to it
    pub fn add_font<F: FontMetrics + 'static>(&mut self, font: F) -> FontId {
        self.fonts.alloc(Box::new(font))
    }

    /// Register four faces at once and return them as a family
    pub fn add_family<R, B, I, BI>(&mut self, regular: R, bold: B, italic: I, bold_italic: BI) -> FontFamily
    where
        R: FontMetrics + 'static,
        B: FontMetrics + 'static,
        I: FontMetrics + 'static,
        BI: FontMetrics + 'static,
    {
        FontFamily::new(
            self.add_font(regular),
            self.add_font(bold),
            self.add_font(italic),
            self.add_font(bold_italic),
        )
    }

    /// Number of registered fonts
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.len() == 0
    }

    /// Access the raw metrics of a font. Panics if `id` was issued by another book
    pub fn metrics(&self, id: FontId) -> &dyn FontMetrics {
        self.fonts[id].as_ref()
    }

    /// Width of `text` in 1/1000 em, memoised
    pub fn string_width(&self, id: FontId, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        if let Some(width) = self.widths.borrow().get(id, text) {
            return width;
        }
        let width = self.metrics(id).string_width(text);
        self.widths.borrow_mut().insert(id, text, width);
        width
    }

    /// Width of a single character in 1/1000 em
    pub fn char_width(&self, id: FontId, ch: char) -> f32 {
        let mut buf = [0u8; 4];
        self.string_width(id, ch.encode_utf8(&mut buf))
    }

    /// Width of `text` set at `size`
    pub fn text_width(&self, id: FontId, text: &str, size: Pt) -> Pt {
        scale(self.string_width(id, text), size)
    }

    /// Ascent of the font set at `size`
    pub fn ascent(&self, id: FontId, size: Pt) -> Pt {
        scale(self.metrics(id).ascent(), size)
    }

    /// Descent of the font set at `size`. Usually negative
    pub fn descent(&self, id: FontId, size: Pt) -> Pt {
        scale(self.metrics(id).descent(), size)
    }

    /// Height of one line of the font set at `size`
    pub fn line_height(&self, id: FontId, size: Pt) -> Pt {
        scale(self.metrics(id).line_height(), size)
    }

    /// Width of a space set at `size`
    pub fn space_width(&self, id: FontId, size: Pt) -> Pt {
        scale(self.metrics(id).space_width(), size)
    }

    /// Average character width set at `size`
    pub fn average_char_width(&self, id: FontId, size: Pt) -> Pt {
        scale(self.metrics(id).average_char_width(), size)
    }
}

/// Scale a measurement in 1/1000 em to points at the given font size
pub(crate) fn scale(thousandths: f32, size: Pt) -> Pt {
    Pt(thousandths / 1000.0 * *size)
}
