use crate::cell::{Cell, CellWidth};
use crate::drawable::Drawable;
use crate::font_book::FontBook;
use crate::units::Pt;
use crate::LayoutError;

/// A horizontal run of cells sharing one height.
///
/// The row grows to fit its tallest cell unless it has a fixed height, in
/// which case [`fit_text_to_height`](Row::fit_text_to_height) shrinks the cells'
/// fonts instead.
#[derive(Debug, Clone)]
pub struct Row {
    width: Pt,
    cells: Vec<Cell>,
    height: Pt,
    line_spacing: f32,
    header: bool,
    fixed_height: bool,
}

impl Row {
    /// An empty row `width` wide that is at least `height` tall
    pub fn new(width: Pt, height: Pt) -> Row {
        Row {
            width,
            cells: Vec::new(),
            height,
            line_spacing: 1.0,
            header: false,
            fixed_height: false,
        }
    }

    /// Append a cell. Every cell but the first loses its left border, so that
    /// neighbouring borders are not drawn twice.
    pub fn create_cell<W: Into<CellWidth>, S: Into<String>>(
        &mut self,
        width: W,
        text: S,
    ) -> Result<&mut Cell, LayoutError> {
        let mut cell = Cell::new(self.width, width, text)?;
        if self.header {
            cell.set_header(true);
        }
        if !self.cells.is_empty() {
            cell.set_left_border(None);
        }
        cell.set_line_spacing(self.line_spacing);

        let index = self.cells.len();
        self.cells.push(cell);
        Ok(&mut self.cells[index])
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn col_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_header(&self) -> bool {
        self.header
    }

    /// Cells created from now on are header cells
    pub fn set_header(&mut self, header: bool) -> &mut Self {
        self.header = header;
        self
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    /// Line spacing given to cells created from now on
    pub fn set_line_spacing(&mut self, line_spacing: f32) -> &mut Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn is_fixed_height(&self) -> bool {
        self.fixed_height
    }

    pub fn set_fixed_height(&mut self, fixed_height: bool) -> &mut Self {
        self.fixed_height = fixed_height;
        self
    }

    /// The configured height: a minimum, or the exact height of a fixed row
    pub fn min_height(&self) -> Pt {
        self.height
    }

    pub fn set_height(&mut self, height: Pt) -> &mut Self {
        self.height = height;
        self
    }

    /// Height of the row, recomputed from the cells on every call
    pub fn height(&self, book: &FontBook) -> Result<Pt, LayoutError> {
        if self.fixed_height {
            return Ok(self.height);
        }
        let mut height = self.height;
        for cell in &self.cells {
            height = height.max(cell.cell_height(book)?);
        }
        Ok(height)
    }

    /// Shrink every cell's font to fit a fixed-height row. Rows that grow with
    /// their content are left alone.
    pub fn fit_text_to_height(&mut self, book: &FontBook) -> Result<(), LayoutError> {
        if !self.fixed_height {
            return Ok(());
        }
        let height = self.height;
        for cell in &mut self.cells {
            cell.fit_font_size_to_height(book, height)?;
        }
        Ok(())
    }

    /// Row width not covered by any cell
    pub fn last_cell_extra_width(&self) -> Pt {
        self.width - self.cells.iter().map(Cell::width).sum::<Pt>()
    }

    pub fn remove_top_borders(&mut self) {
        for cell in &mut self.cells {
            cell.set_top_border(None);
        }
    }

    pub fn remove_all_borders(&mut self) {
        for cell in &mut self.cells {
            cell.set_border_style(None);
        }
    }

    /// Lay out the cells left to right from the row's top-left corner
    pub fn layout(&self, book: &FontBook, origin: (Pt, Pt)) -> Result<Vec<Drawable>, LayoutError> {
        let height = self.height(book)?;
        let mut drawables = Vec::new();
        let mut x = origin.0;
        for cell in &self.cells {
            drawables.extend(cell.layout(book, (x, origin.1), height)?);
            x += cell.width();
        }
        Ok(drawables)
    }
}
