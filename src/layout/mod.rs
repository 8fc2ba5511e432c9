//! Markup-aware text layout: tokenizing, line breaking and positioning.
//!
//! Text passes through the following stages:
//!
//! - [`tokenize`](crate::layout::tokenize) splits markup into [`Token`](crate::layout::Token)s,
//!   marking where lines may or must break
//! - a [`LineAccumulator`](crate::layout::LineAccumulator) collects tokens into a
//!   candidate line, tracking its width with and without trailing whitespace
//! - [`Paragraph`](crate::layout::Paragraph) drives both to produce wrapped
//!   [`Line`](crate::layout::Line)s, numbering lists as it goes, and turns them into
//!   [`Drawable`](crate::Drawable)s
//!
//! # Example
//!
//! ```
//! use pdf_tables::{FontBook, FontFamily, Pt};
//! use pdf_tables::layout::{HorizontalAlignment, Paragraph};
//! use pdf_tables::testing::MonospaceMetrics;
//!
//! let mut book = FontBook::new();
//! let fonts = FontFamily::single(book.add_font(MonospaceMetrics::default()));
//!
//! let mut paragraph = Paragraph::new(
//!     "<b>Steps</b><ol><li>Measure</li><li>Break</li></ol>",
//!     fonts,
//!     Pt(10.0),
//!     Pt(200.0),
//! );
//! paragraph.set_align(HorizontalAlignment::Left);
//!
//! let lines: Vec<&str> = paragraph.lines(&book).iter().map(|l| l.text.as_str()).collect();
//! assert_eq!(lines, vec!["Steps", "1. Measure", "2. Break", " "]);
//! ```

mod accumulator;
mod alignment;
mod numbering;
mod padding;
mod paragraph;
mod token;
mod tokenizer;

pub use accumulator::*;
pub use alignment::*;
pub use numbering::*;
pub use padding::*;
pub use paragraph::*;
pub use token::*;
pub use tokenizer::*;
