//! Text summary and bootstrap workbook.

pub mod summary;
pub mod workbook;

pub use summary::{cohort_summary, summary_file_name};
pub use workbook::{BootstrapWorkbook, WORKBOOK_FILE_NAME};
