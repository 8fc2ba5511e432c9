use crate::font::FontId;
use crate::font_book::{scale, FontBook};
use crate::layout::token::{Token, TokenKind};
use crate::units::Pt;
use std::fmt;

/// Collects tokens into a candidate line.
///
/// The most recent text token is held back as *pending* until another text
/// token (or a merge) supersedes it. That lets [`trimmed_width`] drop the
/// trailing whitespace of the line without re-measuring anything: only the
/// last token can end the line with whitespace.
///
/// [`trimmed_width`]: LineAccumulator::trimmed_width
#[derive(Default, Clone)]
pub struct LineAccumulator {
    text: String,
    width: Pt,
    last_text: String,
    last_trimmed_len: usize,
    last_width: Pt,
    last_trimmed_width: Pt,
    tokens: Vec<Token>,
}

impl LineAccumulator {
    pub fn new() -> LineAccumulator {
        LineAccumulator::default()
    }

    /// Whether no token at all has been pushed since the last reset
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Record a token that takes no room on the line, such as a style tag
    pub fn push_tag(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Push a token that occupies space on the line, measured in `font` at `size`.
    ///
    /// Padding, bullets and ordinal labels are committed immediately. A text
    /// token first commits the previously pending text token and then becomes
    /// the new pending one.
    pub fn push(&mut self, book: &FontBook, font: FontId, size: Pt, token: Token) {
        match token.kind() {
            TokenKind::Padding(amount) => self.width += amount,
            TokenKind::Bullet | TokenKind::Ordering => {
                self.text.push_str(token.data());
                self.width += scale(token.width(book, font), size);
            }
            TokenKind::Text => {
                self.commit_pending();
                let data = token.data();
                let trimmed = data.trim_end();
                self.last_text = data.to_string();
                self.last_trimmed_len = trimmed.len();
                self.last_width = scale(token.width(book, font), size);
                self.last_trimmed_width = if trimmed.len() == data.len() {
                    self.last_width
                } else {
                    book.text_width(font, trimmed, size)
                };
            }
            _ => {}
        }
        self.tokens.push(token);
    }

    /// Move everything `other` holds, its pending token included, onto the end of
    /// this line and reset `other`
    pub fn append(&mut self, other: &mut LineAccumulator) {
        self.commit_pending();
        self.text.push_str(&other.text);
        self.width += other.width;
        self.last_text = std::mem::take(&mut other.last_text);
        self.last_trimmed_len = other.last_trimmed_len;
        self.last_width = other.last_width;
        self.last_trimmed_width = other.last_trimmed_width;
        self.tokens.append(&mut other.tokens);
        other.reset();
    }

    /// Clear all state so the accumulator can build the next line
    pub fn reset(&mut self) {
        self.text.clear();
        self.width = Pt(0.0);
        self.last_text.clear();
        self.last_trimmed_len = 0;
        self.last_width = Pt(0.0);
        self.last_trimmed_width = Pt(0.0);
        self.tokens.clear();
    }

    /// Width of everything pushed so far
    pub fn width(&self) -> Pt {
        self.width + self.last_width
    }

    /// Width of everything pushed so far, ignoring trailing whitespace of the last
    /// text token
    pub fn trimmed_width(&self) -> Pt {
        self.width + self.last_trimmed_width
    }

    /// Text pushed so far without the trailing whitespace of the last text token
    pub fn trimmed_text(&self) -> String {
        let mut text = String::with_capacity(self.text.len() + self.last_trimmed_len);
        text.push_str(&self.text);
        text.push_str(&self.last_text[..self.last_trimmed_len]);
        text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Take the tokens out, leaving the accumulator without any
    pub(crate) fn take_tokens(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }

    fn commit_pending(&mut self) {
        self.text.push_str(&self.last_text);
        self.width += self.last_width;
        self.last_text.clear();
        self.last_trimmed_len = 0;
        self.last_width = Pt(0.0);
        self.last_trimmed_width = Pt(0.0);
    }
}

impl fmt::Debug for LineAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) [width: {}, trimmed: {}]",
            self.text,
            self.last_text,
            self.width(),
            self.trimmed_width()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MonospaceMetrics;

    const SIZE: Pt = Pt(10.0);

    fn book() -> (FontBook, FontId) {
        let mut book = FontBook::new();
        let font = book.add_font(MonospaceMetrics::new(500.0));
        (book, font)
    }

    #[test]
    fn trailing_whitespace_of_the_last_token_is_discounted() {
        let (book, font) = book();
        let mut line = LineAccumulator::new();
        line.push(&book, font, SIZE, Token::text("Hello "));

        assert_eq!(line.width(), Pt(30.0));
        assert_eq!(line.trimmed_width(), Pt(25.0));
        assert_eq!(line.trimmed_text(), "Hello");
    }

    #[test]
    fn earlier_tokens_keep_their_whitespace() {
        let (book, font) = book();
        let mut line = LineAccumulator::new();
        line.push(&book, font, SIZE, Token::text("Hello "));
        line.push(&book, font, SIZE, Token::text("world  "));

        assert_eq!(line.width(), Pt(65.0));
        assert_eq!(line.trimmed_width(), Pt(55.0));
        assert_eq!(line.trimmed_text(), "Hello world");
    }

    #[test]
    fn padding_and_labels_are_committed_immediately() {
        let (book, font) = book();
        let mut line = LineAccumulator::new();
        line.push(&book, font, SIZE, Token::padding(Pt(20.0)));
        line.push(&book, font, SIZE, Token::new(TokenKind::Ordering, "1. "));
        line.push(&book, font, SIZE, Token::text("First"));

        assert_eq!(line.width(), Pt(20.0 + 15.0 + 25.0));
        assert_eq!(line.trimmed_text(), "1. First");
        assert_eq!(line.tokens().len(), 3);
    }

    #[test]
    fn tags_take_no_room() {
        let (book, font) = book();
        let mut line = LineAccumulator::new();
        line.push_tag(Token::new(TokenKind::OpenTag, "b"));

        assert!(!line.is_empty());
        assert_eq!(line.width(), Pt(0.0));
        assert_eq!(line.trimmed_text(), "");
        line.push(&book, font, SIZE, Token::text("x"));
        assert_eq!(line.trimmed_width(), Pt(5.0));
    }

    #[test]
    fn append_moves_state_and_resets_the_source() {
        let (book, font) = book();
        let mut current = LineAccumulator::new();
        current.push(&book, font, SIZE, Token::text("one "));

        let mut pending = LineAccumulator::new();
        pending.push(&book, font, SIZE, Token::text("two"));
        pending.push(&book, font, SIZE, Token::text("three "));

        current.append(&mut pending);

        assert!(pending.is_empty());
        assert_eq!(pending.width(), Pt(0.0));
        assert_eq!(current.trimmed_text(), "one twothree");
        assert_eq!(current.width(), Pt(70.0));
        assert_eq!(current.trimmed_width(), Pt(60.0));
        assert_eq!(current.tokens().len(), 3);
    }

    #[test]
    fn reset_clears_everything() {
        let (book, font) = book();
        let mut line = LineAccumulator::new();
        line.push(&book, font, SIZE, Token::padding(Pt(3.0)));
        line.push(&book, font, SIZE, Token::text("abc"));
        line.reset();

        assert!(line.is_empty());
        assert_eq!(line.width(), Pt(0.0));
        assert_eq!(line.trimmed_width(), Pt(0.0));
        assert_eq!(line.trimmed_text(), "");
    }
}
