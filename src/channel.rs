//! The injected remote-spreadsheet capability.

use crate::cache::Grid;
use crate::error::Result;

/// How the remote service interprets written values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Stored verbatim, never parsed as a formula.
    Raw,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Raw => "RAW",
        }
    }
}

/// An authorized channel to the remote spreadsheet service.
///
/// Credential acquisition and lifecycle live outside this crate; a
/// [`crate::Sheet`] only needs something that can read a range of raw cell
/// strings and write one back. Calls block and run in strict order.
/// Transport failures surface unchanged through
/// [`crate::SheetError::Remote`].
pub trait SheetsChannel {
    /// Read `range` from the spreadsheet as raw cell strings.
    fn read_range(&mut self, spreadsheet_id: &str, range: &str) -> Result<Grid>;

    /// Write `values` at `address`. Single-cell writes pass a 1x1 grid.
    fn write_range(
        &mut self,
        spreadsheet_id: &str,
        address: &str,
        values: Grid,
        input_mode: InputMode,
    ) -> Result<()>;
}
