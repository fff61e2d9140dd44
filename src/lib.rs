pub mod cell;
pub mod cli;
pub mod collation;
pub mod compare;
pub mod config;
pub mod errors;
pub mod export;
pub mod extract;
pub mod paths;
pub mod session;
pub mod workbook;

pub use cell::CellValue;
pub use collation::sort_values;
pub use compare::{CompareOutcome, CompareRequest, WorkbookInput, compare, compare_async, diff};
pub use config::{CheckConfig, ConfigArgs};
pub use errors::{CompareError, SessionError};
pub use export::{DEFAULT_EXPORT_FILE, format_export, write_export};
pub use extract::{ValueSet, extract_bytes, extract_file, extract_values};
pub use session::{CompareSession, SessionState};
pub use workbook::{Sheet, Workbook};
