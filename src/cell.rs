use crate::colour::Colour;
use crate::drawable::Drawable;
use crate::font::FontFamily;
use crate::font_book::FontBook;
use crate::layout::{HorizontalAlignment, Padding, Paragraph, VerticalAlignment, WrappingFunction};
use crate::line_style::{side_width, Borders, LineStyle};
use crate::rect::Rect;
use crate::transform::Transform;
use crate::units::Pt;
use crate::LayoutError;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

const DEFAULT_FONT_SIZE: Pt = Pt(8.0);
const DEFAULT_PADDING: Pt = Pt(5.0);
const DEFAULT_BORDER_WIDTH: Pt = Pt(1.0);
const MIN_FONT_SIZE: Pt = Pt(1.0);
const FIT_ITERATIONS: usize = 10;

/// Width of a cell, either in points or as a share of the row width
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CellWidth {
    Absolute(Pt),
    /// Percentage of the row width, 0 to 100
    Percent(f32),
}

impl CellWidth {
    pub fn resolve(self, row_width: Pt) -> Pt {
        match self {
            CellWidth::Absolute(width) => width,
            CellWidth::Percent(percent) => row_width * (percent / 100.0),
        }
    }
}

impl From<Pt> for CellWidth {
    fn from(width: Pt) -> Self {
        CellWidth::Absolute(width)
    }
}

/// One table cell: a paragraph of markup text inside padding and borders.
///
/// The paragraph is built from the cell's style on first use and rebuilt after
/// any change that affects wrapping. Measuring a cell before a font family has
/// been set fails with [`LayoutError::FontNotSet`].
#[derive(Clone)]
pub struct Cell {
    width: Pt,
    height: Option<Pt>,
    text: String,
    fonts: Option<FontFamily>,
    font_size: Pt,
    fill: Option<Colour>,
    text_colour: Colour,
    padding: Padding,
    borders: Borders,
    line_spacing: f32,
    rotated: bool,
    header: bool,
    align: HorizontalAlignment,
    valign: VerticalAlignment,
    wrapping: Option<Rc<dyn WrappingFunction>>,
    paragraph: OnceCell<Paragraph>,
}

impl Cell {
    /// Create a cell for a row `row_width` wide. Fails if the cell would be wider
    /// than the row.
    pub fn new<W: Into<CellWidth>, S: Into<String>>(row_width: Pt, width: W, text: S) -> Result<Cell, LayoutError> {
        let width = width.into().resolve(row_width);
        if width > row_width {
            return Err(LayoutError::CellTooWide { width, row_width });
        }

        Ok(Cell {
            width,
            height: None,
            text: text.into(),
            fonts: None,
            font_size: DEFAULT_FONT_SIZE,
            fill: None,
            text_colour: Colour::default(),
            padding: Padding::all(DEFAULT_PADDING),
            borders: Borders::all(LineStyle::new(Colour::default(), DEFAULT_BORDER_WIDTH)),
            line_spacing: 1.0,
            rotated: false,
            header: false,
            align: HorizontalAlignment::Left,
            valign: VerticalAlignment::Top,
            wrapping: None,
            paragraph: OnceCell::new(),
        })
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fonts(&self) -> Option<FontFamily> {
        self.fonts
    }

    pub fn font_size(&self) -> Pt {
        self.font_size
    }

    pub fn fill(&self) -> Option<Colour> {
        self.fill
    }

    pub fn text_colour(&self) -> Colour {
        self.text_colour
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    pub fn is_header(&self) -> bool {
        self.header
    }

    pub fn align(&self) -> HorizontalAlignment {
        self.align
    }

    pub fn valign(&self) -> VerticalAlignment {
        self.valign
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.text = text.into();
        self.invalidate()
    }

    pub fn set_fonts(&mut self, fonts: FontFamily) -> &mut Self {
        self.fonts = Some(fonts);
        self.invalidate()
    }

    pub fn set_font_size(&mut self, font_size: Pt) -> &mut Self {
        self.font_size = font_size;
        if let Some(paragraph) = self.paragraph.get_mut() {
            paragraph.set_font_size(font_size);
        }
        self
    }

    pub fn set_fill(&mut self, fill: Option<Colour>) -> &mut Self {
        self.fill = fill;
        self
    }

    pub fn set_text_colour(&mut self, colour: Colour) -> &mut Self {
        self.text_colour = colour;
        if let Some(paragraph) = self.paragraph.get_mut() {
            paragraph.set_colour(colour);
        }
        self
    }

    pub fn set_padding(&mut self, padding: Padding) -> &mut Self {
        self.padding = padding;
        self.invalidate()
    }

    pub fn set_borders(&mut self, borders: Borders) -> &mut Self {
        self.borders = borders;
        self.invalidate()
    }

    /// Use the same border on every side, or remove all of them with `None`
    pub fn set_border_style(&mut self, style: Option<LineStyle>) -> &mut Self {
        self.borders = match style {
            Some(style) => Borders::all(style),
            None => Borders::none(),
        };
        self.invalidate()
    }

    pub fn set_top_border(&mut self, style: Option<LineStyle>) -> &mut Self {
        self.borders.top = style;
        self
    }

    pub fn set_right_border(&mut self, style: Option<LineStyle>) -> &mut Self {
        self.borders.right = style;
        self.invalidate()
    }

    pub fn set_bottom_border(&mut self, style: Option<LineStyle>) -> &mut Self {
        self.borders.bottom = style;
        self
    }

    pub fn set_left_border(&mut self, style: Option<LineStyle>) -> &mut Self {
        self.borders.left = style;
        self.invalidate()
    }

    pub fn set_line_spacing(&mut self, line_spacing: f32) -> &mut Self {
        self.line_spacing = line_spacing;
        if let Some(paragraph) = self.paragraph.get_mut() {
            paragraph.set_line_spacing(line_spacing);
        }
        self
    }

    /// Turn the text a quarter turn anticlockwise. Rotated text is never wrapped.
    pub fn set_rotated(&mut self, rotated: bool) -> &mut Self {
        self.rotated = rotated;
        self.invalidate()
    }

    /// Header cells are set in the bold face of their family
    pub fn set_header(&mut self, header: bool) -> &mut Self {
        self.header = header;
        self.invalidate()
    }

    pub fn set_align(&mut self, align: HorizontalAlignment) -> &mut Self {
        self.align = align;
        self.invalidate()
    }

    pub fn set_valign(&mut self, valign: VerticalAlignment) -> &mut Self {
        self.valign = valign;
        self
    }

    pub fn set_wrapping(&mut self, wrapping: Option<Rc<dyn WrappingFunction>>) -> &mut Self {
        self.wrapping = wrapping;
        self.invalidate()
    }

    /// Pin the cell's own height instead of deriving it from the text
    pub fn set_height(&mut self, height: Option<Pt>) -> &mut Self {
        self.height = height;
        self
    }

    fn invalidate(&mut self) -> &mut Self {
        self.paragraph.take();
        self
    }

    /// Width left for text once padding and borders are taken off. May be negative.
    pub fn inner_width(&self) -> Pt {
        self.width - self.padding.horizontal() - self.borders.horizontal()
    }

    /// Height left for text in a row `row_height` tall
    pub fn inner_height(&self, row_height: Pt) -> Pt {
        row_height - self.padding.vertical() - self.borders.vertical()
    }

    /// The family the text is set in: bold faces for header cells
    fn base_fonts(&self) -> Result<FontFamily, LayoutError> {
        let fonts = self.fonts.ok_or(LayoutError::FontNotSet)?;
        Ok(if self.header { fonts.emboldened() } else { fonts })
    }

    /// The cell's paragraph, built on first use
    pub fn paragraph(&self) -> Result<&Paragraph, LayoutError> {
        if let Some(paragraph) = self.paragraph.get() {
            return Ok(paragraph);
        }

        let fonts = self.base_fonts()?;
        let (width, align) = if self.rotated {
            (Pt(f32::INFINITY), HorizontalAlignment::Left)
        } else {
            (self.inner_width(), self.align)
        };
        let mut paragraph = Paragraph::new(self.text.clone(), fonts, self.font_size, width);
        paragraph
            .set_align(align)
            .set_colour(self.text_colour)
            .set_line_spacing(self.line_spacing)
            .set_wrapping(self.wrapping.clone());
        Ok(self.paragraph.get_or_init(|| paragraph))
    }

    /// Height of the wrapped text alone
    pub fn text_height(&self, book: &FontBook) -> Result<Pt, LayoutError> {
        Ok(self.paragraph()?.height(book))
    }

    /// Height this cell needs: the pinned height if any, otherwise the text plus
    /// vertical padding and borders. Rotated text needs its run length instead.
    pub fn cell_height(&self, book: &FontBook) -> Result<Pt, LayoutError> {
        if let Some(height) = self.height {
            return Ok(height);
        }
        let content = if self.rotated {
            self.paragraph()?.max_line_width(book)
        } else {
            self.text_height(book)?
        };
        Ok(content + self.padding.vertical() + self.borders.vertical())
    }

    fn required_text_height(&self, book: &FontBook) -> Result<Pt, LayoutError> {
        let paragraph = self.paragraph()?;
        let descent = book.descent(paragraph.fonts().regular, self.font_size);
        Ok(paragraph.height(book) + descent.abs())
    }

    /// Shrink the font until the text fits in a row `row_height` tall.
    ///
    /// Binary search over `[1pt, current size]` for at most ten rounds; the font
    /// never grows. Rotated and empty cells are left alone.
    pub fn fit_font_size_to_height(&mut self, book: &FontBook, row_height: Pt) -> Result<(), LayoutError> {
        if self.rotated || self.text.is_empty() {
            return Ok(());
        }
        let available = self.inner_height(row_height);
        if available <= Pt(0.0) || self.font_size <= MIN_FONT_SIZE {
            return Ok(());
        }
        if self.required_text_height(book)? <= available {
            return Ok(());
        }

        let original = self.font_size;
        let (mut low, mut high) = (MIN_FONT_SIZE, self.font_size);
        for _ in 0..FIT_ITERATIONS {
            let mid = (low + high) / 2.0;
            self.set_font_size(mid);
            if self.required_text_height(book)? <= available {
                low = mid;
            } else {
                high = mid;
            }
        }

        if self.required_text_height(book)? > available {
            self.set_font_size(low);
            if self.required_text_height(book)? > available {
                log::warn!(
                    "text of {:?} does not fit in {} even at {}",
                    self.text,
                    available,
                    low
                );
            }
        }
        log::debug!("shrank font from {} to {}", original, self.font_size);
        Ok(())
    }

    /// Horizontal room left around the text. For rotated cells the text height
    /// runs horizontally.
    pub fn horizontal_free_space(&self, book: &FontBook) -> Result<Pt, LayoutError> {
        let used = if self.rotated {
            self.text_height(book)?
        } else {
            self.paragraph()?.max_line_width(book)
        };
        Ok(self.inner_width() - used)
    }

    /// Vertical room left around the text in a row `row_height` tall. For rotated
    /// cells the longest line runs vertically.
    pub fn vertical_free_space(&self, book: &FontBook, row_height: Pt) -> Result<Pt, LayoutError> {
        let used = if self.rotated {
            self.paragraph()?.max_line_width(book)
        } else {
            self.text_height(book)?
        };
        Ok(self.inner_height(row_height) - used)
    }

    /// Copy borders, fonts, colours and alignment from `source`. A cell without a
    /// left border keeps going without one.
    pub fn copy_style(&mut self, source: &Cell) -> &mut Self {
        let style = source.borders.top.clone();
        let had_left = self.borders.left.is_some();
        self.borders = Borders {
            top: style.clone(),
            right: style.clone(),
            bottom: style.clone(),
            left: if had_left { style } else { None },
        };
        self.fonts = source.fonts;
        self.font_size = source.font_size;
        self.fill = source.fill;
        self.text_colour = source.text_colour;
        self.align = source.align;
        self.valign = source.valign;
        self.invalidate()
    }

    pub fn has_same_style(&self, other: &Cell) -> bool {
        self.borders.top == other.borders.top
            && self.fonts == other.fonts
            && self.fill == other.fill
            && self.text_colour == other.text_colour
            && self.align == other.align
            && self.valign == other.valign
    }

    /// Fill, borders and text of the cell with its top-left corner at `origin`,
    /// in a row `row_height` tall
    pub fn layout(&self, book: &FontBook, origin: (Pt, Pt), row_height: Pt) -> Result<Vec<Drawable>, LayoutError> {
        let (left, top) = origin;
        let right = left + self.width;
        let bottom = top - row_height;
        let mut drawables = Vec::new();

        if let Some(colour) = self.fill {
            drawables.push(Drawable::Fill {
                rect: Rect::from_top_left(left, top, self.width, row_height),
                colour,
            });
        }

        let edges = [
            (&self.borders.top, (left, top), (right, top)),
            (&self.borders.right, (right, top), (right, bottom)),
            (&self.borders.bottom, (left, bottom), (right, bottom)),
            (&self.borders.left, (left, top), (left, bottom)),
        ];
        for (side, from, to) in edges {
            if let Some(style) = side {
                drawables.push(Drawable::Line {
                    from,
                    to,
                    style: style.clone(),
                });
            }
        }

        let paragraph = self.paragraph()?;
        let inner_left = left + self.padding.left + side_width(&self.borders.left);
        let inner_top = top - self.padding.top - side_width(&self.borders.top);
        let free = self.vertical_free_space(book, row_height)?;

        if !self.rotated {
            let offset = match self.valign {
                VerticalAlignment::Top => Pt(0.0),
                VerticalAlignment::Middle => free / 2.0,
                VerticalAlignment::Bottom => free,
            };
            drawables.extend(paragraph.layout(book, (inner_left, inner_top - offset)));
            return Ok(drawables);
        }

        // rotated text reads bottom to top and starts at the bottom of the cell
        let inner_bottom = bottom + self.padding.bottom + side_width(&self.borders.bottom);
        let free_across = self.horizontal_free_space(book)?;
        let across = match self.align {
            HorizontalAlignment::Left => Pt(0.0),
            HorizontalAlignment::Centre => free_across / 2.0,
            HorizontalAlignment::Right => free_across,
        };
        let along = match self.valign {
            VerticalAlignment::Top => free,
            VerticalAlignment::Middle => free / 2.0,
            VerticalAlignment::Bottom => Pt(0.0),
        };
        let transform = Transform::rotate(std::f32::consts::FRAC_PI_2)
            .with_translate(inner_left + across, inner_bottom + along);
        drawables.push(Drawable::Transformed {
            transform,
            contents: paragraph.layout(book, (Pt(0.0), Pt(0.0))),
        });
        Ok(drawables)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("text", &self.text)
            .field("font_size", &self.font_size)
            .field("rotated", &self.rotated)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::testing::MonospaceMetrics;

    fn book() -> (FontBook, FontFamily) {
        let mut book = FontBook::new();
        let family = book.add_family(
            MonospaceMetrics::new(500.0),
            MonospaceMetrics::new(600.0),
            MonospaceMetrics::new(500.0),
            MonospaceMetrics::new(600.0),
        );
        (book, family)
    }

    fn cell(width: Pt, text: &str, fonts: FontFamily) -> Cell {
        let mut cell = Cell::new(Pt(500.0), width, text).unwrap();
        cell.set_fonts(fonts).set_font_size(Pt(10.0));
        cell
    }

    #[test]
    fn cells_wider_than_the_row_are_rejected() {
        assert!(matches!(
            Cell::new(Pt(100.0), Pt(100.5), "x"),
            Err(LayoutError::CellTooWide { .. })
        ));
        assert!(Cell::new(Pt(100.0), Pt(100.0), "x").is_ok());
        assert!(Cell::new(Pt(100.0), CellWidth::Percent(101.0), "x").is_err());

        let half = Cell::new(Pt(300.0), CellWidth::Percent(50.0), "x").unwrap();
        assert_eq!(half.width(), Pt(150.0));
    }

    #[test]
    fn measuring_without_fonts_fails() {
        let (book, _) = book();
        let cell = Cell::new(Pt(100.0), Pt(50.0), "").unwrap();
        assert!(matches!(cell.cell_height(&book), Err(LayoutError::FontNotSet)));
    }

    #[test]
    fn defaults_match_a_plain_grid() {
        let cell = Cell::new(Pt(100.0), Pt(50.0), "x").unwrap();
        assert_eq!(cell.font_size(), Pt(8.0));
        assert_eq!(cell.padding(), Padding::all(Pt(5.0)));
        assert_eq!(cell.borders().horizontal(), Pt(2.0));
        assert_eq!(cell.inner_width(), Pt(38.0));
        assert_eq!(cell.inner_height(Pt(30.0)), Pt(18.0));
    }

    #[test]
    fn height_is_text_plus_padding_and_borders() {
        let (book, fonts) = book();
        // 38pt inner width holds 7 characters
        let cell = cell(Pt(50.0), "aaaa bbbb cccc", fonts);
        assert_eq!(cell.paragraph().unwrap().lines(&book).len(), 3);
        assert_eq!(cell.cell_height(&book).unwrap(), Pt(30.0 + 10.0 + 2.0));

        let empty = self::cell(Pt(50.0), "", fonts);
        assert_eq!(empty.cell_height(&book).unwrap(), Pt(12.0));
    }

    #[test]
    fn pinned_height_wins() {
        let (book, fonts) = book();
        let mut cell = cell(Pt(50.0), "aaaa bbbb cccc", fonts);
        cell.set_height(Some(Pt(5.0)));
        assert_eq!(cell.cell_height(&book).unwrap(), Pt(5.0));
    }

    #[test]
    fn rotated_height_is_the_run_length() {
        let (book, fonts) = book();
        let mut cell = cell(Pt(50.0), "aaaa bbbb cccc", fonts);
        cell.set_rotated(true);

        assert_eq!(cell.paragraph().unwrap().lines(&book).len(), 1);
        assert_eq!(cell.cell_height(&book).unwrap(), Pt(70.0 + 12.0));
        // the free space swaps axes
        assert_eq!(cell.horizontal_free_space(&book).unwrap(), Pt(38.0 - 10.0));
        assert_eq!(
            cell.vertical_free_space(&book, Pt(100.0)).unwrap(),
            Pt(88.0 - 70.0)
        );
    }

    #[test]
    fn header_cells_use_the_bold_face() {
        let (book, fonts) = book();
        let mut cell = cell(Pt(200.0), "abcd", fonts);
        assert_eq!(cell.paragraph().unwrap().max_line_width(&book), Pt(20.0));
        cell.set_header(true);
        assert_eq!(cell.paragraph().unwrap().fonts().regular, fonts.bold);
        assert_eq!(cell.paragraph().unwrap().max_line_width(&book), Pt(24.0));
    }

    #[test]
    fn font_shrinks_to_fit_the_row() {
        let (book, fonts) = book();
        let mut cell = cell(Pt(100.0), "aaaa bbbb cccc dddd eeee ffff", fonts);
        let row_height = Pt(30.0);
        let available = cell.inner_height(row_height);

        cell.fit_font_size_to_height(&book, row_height).unwrap();

        assert!(cell.font_size() < Pt(10.0));
        assert!(cell.font_size() >= Pt(1.0));
        assert!(cell.required_text_height(&book).unwrap() <= available);
    }

    #[test]
    fn fitting_text_keeps_its_size() {
        let (book, fonts) = book();
        let mut cell = cell(Pt(100.0), "short", fonts);
        cell.fit_font_size_to_height(&book, Pt(100.0)).unwrap();
        assert_eq!(cell.font_size(), Pt(10.0));

        cell.set_rotated(true);
        cell.fit_font_size_to_height(&book, Pt(1.0)).unwrap();
        assert_eq!(cell.font_size(), Pt(10.0));
    }

    #[test]
    fn copy_style_keeps_a_missing_left_border() {
        let (_, fonts) = book();
        let mut source = cell(Pt(50.0), "a", fonts);
        source
            .set_fill(Some(colours::LIGHT_GREY))
            .set_align(HorizontalAlignment::Right)
            .set_border_style(Some(LineStyle::dashed(colours::RED, Pt(2.0))));

        let mut target = Cell::new(Pt(500.0), Pt(50.0), "b").unwrap();
        target.set_left_border(None);
        assert!(!target.has_same_style(&source));
        target.copy_style(&source);

        assert!(target.has_same_style(&source));
        assert_eq!(target.borders().left, None);
        assert_eq!(target.borders().right, source.borders().top);
    }

    #[test]
    fn layout_places_text_inside_padding_and_borders() {
        let (book, fonts) = book();
        let mut cell = cell(Pt(100.0), "ab", fonts);
        cell.set_fill(Some(colours::LIGHT_GREY));

        let drawables = cell.layout(&book, (Pt(0.0), Pt(100.0)), Pt(40.0)).unwrap();
        assert!(matches!(drawables[0], Drawable::Fill { .. }));
        let lines = drawables
            .iter()
            .filter(|d| matches!(d, Drawable::Line { .. }))
            .count();
        assert_eq!(lines, 4);

        // one ascent below the padding and border
        let spans = Drawable::spans(&drawables);
        assert_eq!(spans[0].coords, (Pt(6.0), Pt(86.0)));

        cell.set_valign(VerticalAlignment::Bottom);
        let drawables = cell.layout(&book, (Pt(0.0), Pt(100.0)), Pt(40.0)).unwrap();
        // 28pt inner height, 10pt of text
        assert_eq!(Drawable::spans(&drawables)[0].coords.1, Pt(68.0));
    }

    #[test]
    fn rotated_layout_is_transformed() {
        let (book, fonts) = book();
        let mut cell = cell(Pt(100.0), "ab", fonts);
        cell.set_rotated(true).set_border_style(None);

        let drawables = cell.layout(&book, (Pt(0.0), Pt(100.0)), Pt(40.0)).unwrap();
        assert_eq!(drawables.len(), 1);
        assert!(matches!(drawables[0], Drawable::Transformed { .. }));
        assert_eq!(Drawable::spans(&drawables).len(), 1);
    }
}
