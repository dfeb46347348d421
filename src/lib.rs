//! gridmap - typed row mapping and selective cell updates over a remote
//! spreadsheet.
//!
//! A [`Sheet`] reads the whole sheet through an injected [`SheetsChannel`],
//! decodes each data row into a [`TypedRow`] per a caller-declared
//! [`ColumnSpec`], and writes back only the cells whose value a
//! [`Sheet::transform`] mutator actually changed.

pub mod cache;
pub mod channel;
pub mod column;
pub mod error;
pub mod header;
pub mod row;
pub mod sheet;

pub use cache::{Grid, GridCache};
pub use channel::{InputMode, SheetsChannel};
pub use column::{ColumnSpec, ColumnType};
pub use error::{Result, SheetError};
pub use header::{column_letter, normalize_header};
pub use row::{FieldValue, TypedRow};
pub use sheet::Sheet;
