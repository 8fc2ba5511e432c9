//! Markup-aware line breaking and table cell sizing for paginated PDF layout.
//!
//! Text carrying a handful of inline tags (`<b>`, `<i>`, `<p>`, `<br>`,
//! `<ul>`, `<ol>`, `<li>`) is broken into lines by [`layout::Paragraph`];
//! [`Cell`]s wrap a paragraph in padding and borders, [`Row`]s size themselves
//! to their tallest cell and a [`Table`] stacks rows under its header rows.
//! Every measurement goes through a [`FontBook`], which owns the fonts and
//! caches text widths.
//!
//! Nothing is written to a PDF here: layout produces [`Drawable`]s for a
//! drawing driver to emit.

mod cell;
pub use cell::*;

mod colour;
pub use colour::*;

mod drawable;
pub use drawable::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod font_book;
pub use font_book::*;

/// Tokenizing, line breaking and positioning of paragraph text
pub mod layout;

mod line_style;
pub use line_style::*;

mod rect;
pub use rect::*;

mod row;
pub use row::*;

mod table;
pub use table::*;

/// Fixed-advance font metrics for tests and previews
pub mod testing;

mod transform;
pub use transform::*;

mod units;
pub use units::*;
