use thiserror::Error;

/// Errors that can occur while laying out or saving a worksheet
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("{name} must be between {min} and {max}, got {value}")]
    DimensionOutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("Failed to write worksheet: {0}")]
    Io(#[from] std::io::Error),
}
