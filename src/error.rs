use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("cell width {width} can't be bigger than row width {row_width}")]
    /// A cell was created wider than the row it belongs to
    CellTooWide { width: Pt, row_width: Pt },

    #[error("no font has been set on the cell")]
    /// A cell was measured before a font family was assigned to it
    FontNotSet,

    #[error("the header row has no column {0}")]
    /// A row was modelled on the header, but has more cells than the header has columns
    MissingHeaderColumn(usize),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),
}
