use crate::drawable::Drawable;
use crate::font_book::FontBook;
use crate::row::Row;
use crate::units::Pt;
use crate::LayoutError;

/// An ordered list of rows, the first few of which are header rows.
///
/// A pagination driver repeats the header rows on every page and uses
/// [`Row::height`] to decide where the body rows break.
#[derive(Debug, Clone)]
pub struct Table {
    width: Pt,
    rows: Vec<Row>,
    header_count: usize,
}

impl Table {
    pub fn new(width: Pt) -> Table {
        Table {
            width,
            rows: Vec::new(),
            header_count: 0,
        }
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    /// Append a body row at least `height` tall
    pub fn add_row(&mut self, height: Pt) -> &mut Row {
        self.rows.push(Row::new(self.width, height));
        let index = self.rows.len() - 1;
        &mut self.rows[index]
    }

    /// Add a header row after the existing header rows. Its cells are header cells.
    pub fn add_header_row(&mut self, height: Pt) -> &mut Row {
        let mut row = Row::new(self.width, height);
        row.set_header(true);
        let index = self.header_count;
        self.rows.insert(index, row);
        self.header_count += 1;
        &mut self.rows[index]
    }

    /// Append a body row with one cell per text, each as wide as the matching
    /// column of the first header row
    pub fn add_row_like_header<I, S>(&mut self, height: Pt, texts: I) -> Result<&mut Row, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let widths: Vec<Pt> = self
            .header_rows()
            .first()
            .map(|header| header.cells().iter().map(|cell| cell.width()).collect())
            .unwrap_or_default();

        let mut row = Row::new(self.width, height);
        for (column, text) in texts.into_iter().enumerate() {
            let width = *widths
                .get(column)
                .ok_or(LayoutError::MissingHeaderColumn(column))?;
            row.create_cell(width, text)?;
        }
        self.rows.push(row);
        let index = self.rows.len() - 1;
        Ok(&mut self.rows[index])
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn header_rows(&self) -> &[Row] {
        &self.rows[..self.header_count]
    }

    pub fn body_rows(&self) -> &[Row] {
        &self.rows[self.header_count..]
    }

    /// Combined height of every row
    pub fn height(&self, book: &FontBook) -> Result<Pt, LayoutError> {
        sum_heights(&self.rows, book)
    }

    /// Combined height of the header rows, repeated at the top of each page
    pub fn header_height(&self, book: &FontBook) -> Result<Pt, LayoutError> {
        sum_heights(self.header_rows(), book)
    }

    /// Shrink the text of every fixed-height row to fit
    pub fn fit_rows(&mut self, book: &FontBook) -> Result<(), LayoutError> {
        for row in &mut self.rows {
            row.fit_text_to_height(book)?;
        }
        Ok(())
    }

    /// Lay out every row, stacked downwards from the table's top-left corner
    pub fn layout(&self, book: &FontBook, origin: (Pt, Pt)) -> Result<Vec<Drawable>, LayoutError> {
        let mut drawables = Vec::new();
        let mut top = origin.1;
        for row in &self.rows {
            drawables.extend(row.layout(book, (origin.0, top))?);
            top -= row.height(book)?;
        }
        Ok(drawables)
    }
}

fn sum_heights(rows: &[Row], book: &FontBook) -> Result<Pt, LayoutError> {
    rows.iter().map(|row| row.height(book)).sum()
}
