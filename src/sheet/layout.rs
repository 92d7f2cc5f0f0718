use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::generator::OperationSet;
use crate::problem::Problem;
use crate::sheet::errors::SheetError;

// Layout limits
pub const MIN_ROWS_PER_PAGE: usize = 1;
pub const MAX_ROWS_PER_PAGE: usize = 20;
pub const MIN_COLS_PER_PAGE: usize = 1;
pub const MAX_COLS_PER_PAGE: usize = 5;
pub const MIN_PAGES: usize = 1;
pub const MAX_PAGES: usize = 100;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
pub const DEFAULT_COLS_PER_PAGE: usize = 3;
pub const DEFAULT_PAGES: usize = 10;

const COLUMN_GAP: &str = "    ";
const PAGE_BREAK: &str = "\u{c}\n";

/// Rows, columns and pages of a printed worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    rows_per_page: usize,
    cols_per_page: usize,
    pages: usize,
}

fn check_dimension(
    name: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<usize, SheetError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(SheetError::DimensionOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

impl SheetLayout {
    /// # Errors
    ///
    /// Returns an error if any dimension is outside its allowed range.
    pub fn new(rows_per_page: usize, cols_per_page: usize, pages: usize) -> Result<Self, SheetError> {
        Ok(Self {
            rows_per_page: check_dimension(
                "rows per page",
                rows_per_page,
                MIN_ROWS_PER_PAGE,
                MAX_ROWS_PER_PAGE,
            )?,
            cols_per_page: check_dimension(
                "columns per page",
                cols_per_page,
                MIN_COLS_PER_PAGE,
                MAX_COLS_PER_PAGE,
            )?,
            pages: check_dimension("pages", pages, MIN_PAGES, MAX_PAGES)?,
        })
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn cols_per_page(&self) -> usize {
        self.cols_per_page
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn problems_per_page(&self) -> usize {
        self.rows_per_page * self.cols_per_page
    }

    pub fn total_problems(&self) -> usize {
        self.problems_per_page() * self.pages
    }

    /// Lay problems out page by page, filling each column top to bottom
    /// before moving right. Pages are separated by a form feed.
    pub fn render<T: fmt::Display>(&self, problems: &[T]) -> String {
        debug!(
            "Rendering {} problems at {}x{} per page",
            problems.len(),
            self.rows_per_page,
            self.cols_per_page
        );

        problems
            .chunks(self.problems_per_page())
            .map(|page| self.render_page(page))
            .collect::<Vec<_>>()
            .join(PAGE_BREAK)
    }

    fn render_page<T: fmt::Display>(&self, page: &[T]) -> String {
        let cells: Vec<String> = page.iter().map(ToString::to_string).collect();
        let columns: Vec<&[String]> = cells.chunks(self.rows_per_page).collect();
        let widths: Vec<usize> = columns
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let row_count = columns.first().map_or(0, |column| column.len());

        let mut out = String::new();
        for row in 0..row_count {
            let line = columns
                .iter()
                .zip(&widths)
                .filter_map(|(column, width)| {
                    column
                        .get(row)
                        .map(|cell| format!("{:<width$}", cell, width = *width))
                })
                .collect::<Vec<_>>()
                .join(COLUMN_GAP);
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            cols_per_page: DEFAULT_COLS_PER_PAGE,
            pages: DEFAULT_PAGES,
        }
    }
}

/// Numbered answer key, one problem per line
pub fn render_answers(problems: &[Problem]) -> String {
    let width = problems.len().to_string().len();
    problems
        .iter()
        .enumerate()
        .map(|(index, problem)| {
            format!("{:>width$}. {}\n", index + 1, problem.answer(), width = width)
        })
        .collect()
}

/// File name describing the enabled operations, e.g.
/// `worksheet_addition_subtraction.txt`
pub fn default_file_name(operations: &OperationSet, mixed: bool) -> String {
    let mut parts: Vec<&str> = operations.enabled().into_iter().map(|op| op.name()).collect();
    if mixed {
        parts.push("mixed");
    }

    if parts.is_empty() {
        "worksheet.txt".to_string()
    } else {
        format!("worksheet_{}.txt", parts.join("_"))
    }
}

/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_sheet(path: &Path, contents: &str) -> Result<(), SheetError> {
    std::fs::write(path, contents)?;
    info!("Worksheet written to {}", path.display());
    Ok(())
}
