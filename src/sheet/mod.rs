//! Plain-text worksheet layout

mod errors;
mod layout;

pub use errors::SheetError;
pub use layout::{
    DEFAULT_COLS_PER_PAGE, DEFAULT_PAGES, DEFAULT_ROWS_PER_PAGE, SheetLayout, default_file_name,
    render_answers, write_sheet,
};
