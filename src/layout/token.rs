use crate::font::FontId;
use crate::font_book::FontBook;
use crate::units::Pt;
use std::cell::Cell;
use std::fmt;

/// The lexical category of a [`Token`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    /// A run of text to be measured and drawn
    Text,
    /// A position where the line may be broken
    PossibleWrapPoint,
    /// A position where the line must be broken; the payload names the tag
    WrapPoint,
    /// An opening style or structure tag (`b`, `i`, `p`, `ul`, `ol`)
    OpenTag,
    /// A closing tag (`b`, `i`, `p`, `ul`, `ol`, `li`)
    CloseTag,
    /// Horizontal space inserted by the line breaker, e.g. list indentation
    Padding(Pt),
    /// Space reserved for an unordered list bullet
    Bullet,
    /// An ordered list label such as `"1.2. "`
    Ordering,
}

/// A single lexical unit of paragraph markup.
///
/// The kind and payload never change once created. Measuring a token through
/// [`Token::width`] remembers the last `(font, width)` pair, so repeated
/// measurements with the same font are free.
#[derive(Clone)]
pub struct Token {
    kind: TokenKind,
    data: String,
    memo: Cell<Option<(FontId, f32)>>,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, data: S) -> Token {
        Token {
            kind,
            data: data.into(),
            memo: Cell::new(None),
        }
    }

    pub fn text<S: Into<String>>(data: S) -> Token {
        Token::new(TokenKind::Text, data)
    }

    pub fn padding(width: Pt) -> Token {
        Token::new(TokenKind::Padding(width), "")
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Whether this is a tag (open or close) with the given name
    pub fn is_tag(&self, name: &str) -> bool {
        matches!(self.kind, TokenKind::OpenTag | TokenKind::CloseTag) && self.data == name
    }

    /// Width of the payload in 1/1000 em when set in `font`. Padding tokens report
    /// no glyph width; their extent is carried by [`TokenKind::Padding`].
    pub fn width(&self, book: &FontBook, font: FontId) -> f32 {
        if let Some((cached_font, width)) = self.memo.get() {
            if cached_font == font {
                return width;
            }
        }
        let width = match self.kind {
            TokenKind::Padding(_) => 0.0,
            _ => book.string_width(font, &self.data),
        };
        self.memo.set(Some((font, width)));
        width
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.data == other.data
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.data)
    }
}
