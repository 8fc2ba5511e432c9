use crate::colour::Colour;
use crate::drawable::{Drawable, SpanFont, SpanLayout};
use crate::font::{FontFamily, FontId};
use crate::font_book::FontBook;
use crate::layout::accumulator::LineAccumulator;
use crate::layout::alignment::{HorizontalAlignment, TextDecoration};
use crate::layout::numbering::ListNumbering;
use crate::layout::token::{Token, TokenKind};
use crate::layout::tokenizer::{tokenize, WrappingFunction};
use crate::line_style::LineStyle;
use crate::units::Pt;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

/// Indentation of one list level, in spaces
const TAB: usize = 4;
/// Indentation of an unordered item's text past its level's tab, in spaces
const TAB_AND_BULLET: usize = 6;
/// Room reserved for a bullet: two spaces
const BULLET: &str = "  ";

/// One wrapped line of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// The line's text, without trailing whitespace and without indentation
    pub text: String,
    /// Trimmed width, indentation included
    pub width: Pt,
    /// The tokens the line was built from, style tags included
    pub tokens: Vec<Token>,
}

impl Line {
    fn spacer() -> Line {
        Line {
            text: " ".to_string(),
            width: Pt(0.0),
            tokens: Vec::new(),
        }
    }

    /// Whether nothing visible is drawn on this line
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The result of breaking a paragraph into lines
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LineBreaks {
    pub lines: Vec<Line>,
    /// Widest trimmed line width
    pub max_line_width: Pt,
}

/// A run of markup text wrapped to a fixed width.
///
/// The markup understands `<b>`, `<i>`, `<p>`, `<br>`, `<ul>`, `<ol>` and
/// `<li>` (see [`tokenize`]). Lines are computed on first use and cached; the
/// setters that affect wrapping throw the cache away.
///
/// ```
/// use pdf_tables::{FontBook, FontFamily, Pt};
/// use pdf_tables::layout::Paragraph;
/// use pdf_tables::testing::MonospaceMetrics;
///
/// let mut book = FontBook::new();
/// let font = book.add_font(MonospaceMetrics::new(500.0));
///
/// // 5pt per character: ten characters per line
/// let paragraph = Paragraph::new("aaaa bbbb cccc", FontFamily::single(font), Pt(10.0), Pt(50.0));
/// let lines: Vec<&str> = paragraph.lines(&book).iter().map(|l| l.text.as_str()).collect();
/// assert_eq!(lines, vec!["aaaa bbbb", "cccc"]);
/// assert_eq!(paragraph.height(&book), Pt(20.0));
/// ```
#[derive(Clone)]
pub struct Paragraph {
    text: String,
    fonts: FontFamily,
    font_size: Pt,
    width: Pt,
    align: HorizontalAlignment,
    colour: Colour,
    line_spacing: f32,
    decoration: Option<TextDecoration>,
    wrapping: Option<Rc<dyn WrappingFunction>>,
    tokens: OnceCell<Vec<Token>>,
    breaks: OnceCell<LineBreaks>,
}

impl Paragraph {
    /// A left aligned, black paragraph with single line spacing
    pub fn new<S: Into<String>>(text: S, fonts: FontFamily, font_size: Pt, width: Pt) -> Paragraph {
        Paragraph {
            text: text.into(),
            fonts,
            font_size,
            width,
            align: HorizontalAlignment::Left,
            colour: Colour::default(),
            line_spacing: 1.0,
            decoration: None,
            wrapping: None,
            tokens: OnceCell::new(),
            breaks: OnceCell::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fonts(&self) -> FontFamily {
        self.fonts
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn align(&self) -> HorizontalAlignment {
        self.align
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    pub fn decoration(&self) -> Option<TextDecoration> {
        self.decoration
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.text = text.into();
        self.tokens.take();
        self.breaks.take();
        self
    }

    pub fn set_fonts(&mut self, fonts: FontFamily) -> &mut Self {
        self.fonts = fonts;
        self.breaks.take();
        self
    }

    pub fn set_font_size(&mut self, font_size: Pt) -> &mut Self {
        self.font_size = font_size;
        self.breaks.take();
        self
    }

    pub fn set_width(&mut self, width: Pt) -> &mut Self {
        self.width = width;
        self.breaks.take();
        self
    }

    pub fn set_align(&mut self, align: HorizontalAlignment) -> &mut Self {
        self.align = align;
        self.breaks.take();
        self
    }

    pub fn set_colour(&mut self, colour: Colour) -> &mut Self {
        self.colour = colour;
        self
    }

    /// Multiplier applied to the font height between consecutive baselines
    pub fn set_line_spacing(&mut self, line_spacing: f32) -> &mut Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn set_decoration(&mut self, decoration: Option<TextDecoration>) -> &mut Self {
        self.decoration = decoration;
        self
    }

    /// Replace the default break rules with a custom wrapping function
    pub fn set_wrapping(&mut self, wrapping: Option<Rc<dyn WrappingFunction>>) -> &mut Self {
        self.wrapping = wrapping;
        self.tokens.take();
        self.breaks.take();
        self
    }

    /// The token stream of the text, computed once per text
    pub fn tokens(&self) -> &[Token] {
        self.tokens
            .get_or_init(|| tokenize(Some(&self.text), self.wrapping.as_deref()))
    }

    /// Break the paragraph into lines, or return the lines computed before
    pub fn breaks(&self, book: &FontBook) -> &LineBreaks {
        self.breaks.get_or_init(|| {
            let breaks = LineBreaker::new(self, book).run(self.tokens());
            log::debug!(
                "broke {} tokens into {} lines at width {}",
                self.tokens().len(),
                breaks.lines.len(),
                self.width
            );
            breaks
        })
    }

    pub fn lines(&self, book: &FontBook) -> &[Line] {
        &self.breaks(book).lines
    }

    /// Trimmed width of the line at `index`
    pub fn line_width(&self, book: &FontBook, index: usize) -> Option<Pt> {
        self.lines(book).get(index).map(|line| line.width)
    }

    pub fn max_line_width(&self, book: &FontBook) -> Pt {
        self.breaks(book).max_line_width
    }

    /// Height of one line of the regular face at the paragraph's font size
    pub fn font_height(&self, book: &FontBook) -> Pt {
        book.line_height(self.fonts.regular, self.font_size)
    }

    /// Total height: every line but the last takes `font_height × line_spacing`,
    /// the last one takes `font_height`. An empty paragraph has no height.
    pub fn height(&self, book: &FontBook) -> Pt {
        let count = self.lines(book).len();
        if count == 0 {
            return Pt(0.0);
        }
        let font_height = self.font_height(book);
        font_height * ((count - 1) as f32 * self.line_spacing) + font_height
    }

    /// Position every line inside a box whose top-left corner is `origin`.
    ///
    /// The first baseline sits one ascent below the top. Font switches at `<b>`
    /// and `<i>` split a line into several spans; bullets become
    /// [`Drawable::Bullet`]s and list labels get a span of their own.
    pub fn layout(&self, book: &FontBook, origin: (Pt, Pt)) -> Vec<Drawable> {
        let size = self.font_size;
        let ascent = book.ascent(self.fonts.regular, size);
        let descent = book.descent(self.fonts.regular, size);
        let step = self.font_height(book) * self.line_spacing;

        let mut drawables = Vec::new();
        let (mut bold, mut italic) = (false, false);

        for (index, line) in self.breaks(book).lines.iter().enumerate() {
            let baseline = origin.1 - ascent - step * index as f32;
            let free = self.width - line.width;
            let start = origin.0
                + match self.align {
                    HorizontalAlignment::Left => Pt(0.0),
                    HorizontalAlignment::Centre => free / 2.0,
                    HorizontalAlignment::Right => free,
                };

            let mut pen = start;
            let mut run = String::new();
            let mut run_start = pen;

            for token in &line.tokens {
                let font = self.fonts.variant(bold, italic);
                match token.kind() {
                    TokenKind::Text => {
                        if run.is_empty() {
                            run_start = pen;
                        }
                        run.push_str(token.data());
                        pen += book.text_width(font, token.data(), size);
                    }
                    TokenKind::OpenTag | TokenKind::CloseTag => {
                        let open = token.kind() == TokenKind::OpenTag;
                        match token.data() {
                            "b" if bold != open => {
                                self.push_span(&mut drawables, &mut run, font, (run_start, baseline));
                                bold = open;
                            }
                            "i" if italic != open => {
                                self.push_span(&mut drawables, &mut run, font, (run_start, baseline));
                                italic = open;
                            }
                            _ => {}
                        }
                    }
                    TokenKind::Padding(amount) => {
                        self.push_span(&mut drawables, &mut run, font, (run_start, baseline));
                        pen += amount;
                    }
                    TokenKind::Bullet => {
                        self.push_span(&mut drawables, &mut run, font, (run_start, baseline));
                        let width = book.text_width(self.fonts.regular, token.data(), size);
                        drawables.push(Drawable::Bullet {
                            centre: (pen + width / 2.0, baseline + ascent / 3.0),
                            radius: size * 0.15,
                            colour: self.colour,
                        });
                        pen += width;
                    }
                    TokenKind::Ordering => {
                        self.push_span(&mut drawables, &mut run, font, (run_start, baseline));
                        let mut label = token.data().to_string();
                        let regular = self.fonts.regular;
                        self.push_span(&mut drawables, &mut label, regular, (pen, baseline));
                        pen += book.text_width(regular, token.data(), size);
                    }
                    TokenKind::PossibleWrapPoint | TokenKind::WrapPoint => {}
                }
            }
            let font = self.fonts.variant(bold, italic);
            self.push_span(&mut drawables, &mut run, font, (run_start, baseline));

            if let Some(decoration) = self.decoration {
                if !line.is_blank() {
                    let y = match decoration {
                        TextDecoration::Underline => baseline + descent / 2.0,
                        TextDecoration::Strikeout => baseline + ascent / 3.0,
                    };
                    drawables.push(Drawable::Line {
                        from: (start, y),
                        to: (start + line.width, y),
                        style: LineStyle::new(self.colour, size / 20.0),
                    });
                }
            }
        }

        drawables
    }

    fn push_span(&self, drawables: &mut Vec<Drawable>, run: &mut String, font: FontId, coords: (Pt, Pt)) {
        if run.trim().is_empty() {
            run.clear();
            return;
        }
        drawables.push(Drawable::Text(SpanLayout {
            text: std::mem::take(run),
            font: SpanFont {
                id: font,
                size: self.font_size,
            },
            colour: self.colour,
            coords,
        }));
    }
}

impl fmt::Debug for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paragraph")
            .field("text", &self.text)
            .field("font_size", &self.font_size)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("line_spacing", &self.line_spacing)
            .finish_non_exhaustive()
    }
}

/// Whether a line holds anything that is drawn: non-blank text, a bullet or a label
fn has_visible(line: &LineAccumulator) -> bool {
    line.tokens().iter().any(|token| match token.kind() {
        TokenKind::Text => !token.data().trim().is_empty(),
        TokenKind::Bullet | TokenKind::Ordering => true,
        _ => false,
    })
}

/// State of one pass of the line breaker over a token stream.
///
/// `current` holds the line being built, `pending` everything seen since the
/// last point where a break is allowed.
struct LineBreaker<'a> {
    book: &'a FontBook,
    fonts: FontFamily,
    size: Pt,
    width: Pt,
    align: HorizontalAlignment,
    bold: bool,
    italic: bool,
    in_item: bool,
    numbering: ListNumbering,
    current: LineAccumulator,
    pending: LineAccumulator,
    breaks: LineBreaks,
}

impl<'a> LineBreaker<'a> {
    fn new(paragraph: &Paragraph, book: &'a FontBook) -> LineBreaker<'a> {
        LineBreaker {
            book,
            fonts: paragraph.fonts,
            size: paragraph.font_size,
            width: paragraph.width,
            align: paragraph.align,
            bold: false,
            italic: false,
            in_item: false,
            numbering: ListNumbering::new(),
            current: LineAccumulator::new(),
            pending: LineAccumulator::new(),
            breaks: LineBreaks::default(),
        }
    }

    fn run(mut self, tokens: &[Token]) -> LineBreaks {
        for token in tokens {
            match token.kind() {
                TokenKind::OpenTag => match token.data() {
                    "ul" => self.open_list(false),
                    "ol" => self.open_list(true),
                    name => {
                        self.set_style(name, true);
                        self.pending.push_tag(token.clone());
                    }
                },
                TokenKind::CloseTag => match token.data() {
                    "ul" | "ol" => self.close_list(),
                    "li" => self.close_item(),
                    "p" => self.close_paragraph(),
                    name => {
                        self.set_style(name, false);
                        self.pending.push_tag(token.clone());
                    }
                },
                TokenKind::PossibleWrapPoint => self.wrap_at_last_point(),
                TokenKind::WrapPoint if token.data() == "li" => self.open_item(),
                TokenKind::WrapPoint => self.force_break(),
                TokenKind::Text => self.push_text(token),
                TokenKind::Padding(_) | TokenKind::Bullet | TokenKind::Ordering => {
                    let font = self.font();
                    self.pending.push(self.book, font, self.size, token.clone());
                }
            }
        }

        self.wrap_at_last_point();
        if has_visible(&self.current) {
            self.flush();
        }
        self.breaks
    }

    fn set_style(&mut self, name: &str, on: bool) {
        match name {
            "b" => self.bold = on,
            "i" => self.italic = on,
            _ => {}
        }
    }

    fn font(&self) -> FontId {
        self.fonts.variant(self.bold, self.italic)
    }

    /// Width of `spaces` spaces of the regular face
    fn indent(&self, spaces: usize) -> Pt {
        self.book.space_width(self.fonts.regular, self.size) * spaces as f32
    }

    /// Indentation of a wrapped line inside a list item, lining it up with the
    /// item's text. Labels are always measured in the regular face.
    fn continuation_indent(&self) -> Pt {
        let depth = self.numbering.depth();
        if self.align != HorizontalAlignment::Left || depth == 0 {
            return self.indent(TAB);
        }
        if self.numbering.is_ordered() {
            let label = self.numbering.current_label().unwrap_or_default();
            self.indent(TAB * depth) + self.book.text_width(self.fonts.regular, &label, self.size)
        } else {
            self.indent(TAB * (depth - 1) + TAB_AND_BULLET)
        }
    }

    fn push_padding(&mut self, amount: Pt) {
        let font = self.font();
        self.current
            .push(self.book, font, self.size, Token::padding(amount));
    }

    fn flush(&mut self) {
        let width = self.current.trimmed_width();
        let line = Line {
            text: self.current.trimmed_text(),
            width,
            tokens: self.current.take_tokens(),
        };
        self.breaks.max_line_width = self.breaks.max_line_width.max(width);
        self.breaks.lines.push(line);
        self.current.reset();
    }

    /// Finish the current line if it shows anything, otherwise throw away its
    /// whitespace while keeping its style tags
    fn flush_or_clear(&mut self) {
        if has_visible(&self.current) {
            self.flush();
            return;
        }
        let tags: Vec<Token> = self
            .current
            .take_tokens()
            .into_iter()
            .filter(|t| matches!(t.kind(), TokenKind::OpenTag | TokenKind::CloseTag))
            .collect();
        self.current.reset();
        for tag in tags {
            self.current.push_tag(tag);
        }
    }

    /// Finish the current line and start the next one, indented under the item
    /// text when inside a list item
    fn break_line(&mut self) {
        self.flush();
        if self.in_item {
            let indent = self.continuation_indent();
            self.push_padding(indent);
        }
    }

    /// Move the pending segment onto the current line, breaking the line first
    /// if the segment no longer fits on it
    fn wrap_at_last_point(&mut self) {
        if self.current.width() + self.pending.trimmed_width() > self.width && has_visible(&self.current) {
            self.break_line();
        }
        self.current.append(&mut self.pending);
    }

    fn force_break(&mut self) {
        self.wrap_at_last_point();
        self.break_line();
    }

    fn open_list(&mut self, ordered: bool) {
        self.wrap_at_last_point();
        self.flush_or_clear();
        self.numbering.open(ordered);
    }

    fn close_list(&mut self) {
        if self.numbering.depth() == 0 {
            log::trace!("ignoring a list close with no open list");
            return;
        }
        self.wrap_at_last_point();
        self.flush_or_clear();
        self.numbering.close();
        if self.numbering.depth() == 0 {
            self.in_item = false;
            self.breaks.lines.push(Line::spacer());
        } else {
            // back in the item that holds the nested list
            self.in_item = true;
        }
    }

    fn open_item(&mut self) {
        self.wrap_at_last_point();
        self.flush_or_clear();
        self.in_item = true;

        let depth = self.numbering.depth();
        let label = self.numbering.next_label();
        if self.align != HorizontalAlignment::Left || depth == 0 {
            let indent = self.indent(TAB);
            self.push_padding(indent);
            return;
        }

        let indent = self.indent(TAB * depth);
        self.push_padding(indent);
        let marker = match label {
            Some(label) if self.numbering.is_ordered() => Token::new(TokenKind::Ordering, label),
            _ => Token::new(TokenKind::Bullet, BULLET),
        };
        self.current
            .push(self.book, self.fonts.regular, self.size, marker);
    }

    fn close_item(&mut self) {
        self.wrap_at_last_point();
        self.flush_or_clear();
        self.in_item = false;
    }

    fn close_paragraph(&mut self) {
        self.wrap_at_last_point();
        if has_visible(&self.current) {
            self.flush();
            self.breaks.lines.push(Line::spacer());
        } else {
            self.flush_or_clear();
        }
    }

    fn push_text(&mut self, token: &Token) {
        let font = self.font();
        let word_width = self
            .book
            .text_width(font, token.data().trim_end(), self.size);
        let narrowest = self.book.average_char_width(self.fonts.regular, self.size);

        if word_width > self.width && self.width > narrowest {
            self.split_word(font, token.data().to_string());
        } else {
            self.pending.push(self.book, font, self.size, token.clone());
        }
    }

    /// Room left on the current line once the pending segment is placed
    fn available(&self) -> Pt {
        self.width - self.current.width() - self.pending.width()
    }

    /// Break a word wider than the paragraph into pieces that each fill a line.
    ///
    /// Every round either emits a line holding at least one character of the
    /// word, or flushes the text already on the line, so the word always runs out.
    /// Lines started inside a list item keep the item's indentation.
    fn split_word(&mut self, font: FontId, mut word: String) {
        while !word.trim_end().is_empty()
            && self.book.text_width(font, word.trim_end(), self.size) > self.available()
        {
            let available = self.available();

            let mut taken = Pt(0.0);
            let mut split = 0;
            for (idx, ch) in word.char_indices() {
                taken += self.book.text_width(font, ch.encode_utf8(&mut [0; 4]), self.size);
                if taken > available {
                    break;
                }
                split = idx + ch.len_utf8();
            }

            if split == 0 {
                if has_visible(&self.current) || has_visible(&self.pending) {
                    self.current.append(&mut self.pending);
                    self.break_line();
                    continue;
                }
                split = word.chars().next().map_or(word.len(), char::len_utf8);
            }

            let rest = word.split_off(split);
            self.pending
                .push(self.book, font, self.size, Token::text(word));
            self.current.append(&mut self.pending);
            self.break_line();
            word = rest;
        }

        if !word.is_empty() {
            self.pending
                .push(self.book, font, self.size, Token::text(word));
        }
    }
}
