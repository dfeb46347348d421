//! Sheet access: typed row mapping and selective cell updates.

use crate::cache::{Grid, GridCache};
use crate::channel::{InputMode, SheetsChannel};
use crate::column::{ColumnSpec, ColumnType};
use crate::error::{Result, SheetError};
use crate::header::{column_letter, normalize_header};
use crate::row::{FieldValue, TypedRow, coerce_assign};

/// Full-sheet read range: every row, columns A through ZZZ.
const FULL_RANGE: &str = "A:ZZZ";

/// One remote sheet, read and written through an injected channel.
///
/// The fetched grid is cached until a write (or an explicit
/// [`Sheet::invalidate_cache`]) discards it, so repeated reads cost one
/// remote call.
pub struct Sheet<C: SheetsChannel> {
    channel: C,
    spreadsheet_id: String,
    columns: ColumnSpec,
    cache: GridCache,
}

impl<C: SheetsChannel> Sheet<C> {
    pub fn new(channel: C, spreadsheet_id: impl Into<String>, columns: ColumnSpec) -> Self {
        Sheet {
            channel,
            spreadsheet_id: spreadsheet_id.into(),
            columns,
            cache: GridCache::new(),
        }
    }

    /// Discard locally cached grid data; the next read re-fetches.
    pub fn invalidate_cache(&mut self) {
        self.cache.invalidate();
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    fn grid(&mut self) -> Result<&Grid> {
        let Sheet {
            channel,
            spreadsheet_id,
            cache,
            ..
        } = self;
        cache.get_or_fetch(|| {
            log::debug!("fetching {FULL_RANGE} from spreadsheet {spreadsheet_id}");
            channel.read_range(spreadsheet_id, FULL_RANGE)
        })
    }

    /// The normalized header row, validated against the column spec.
    pub fn headers(&mut self) -> Result<Vec<String>> {
        let headers: Vec<String> = self
            .grid()?
            .header_row()
            .ok_or(SheetError::MissingHeaderRow)?
            .iter()
            .map(|h| normalize_header(h))
            .collect();

        for header in &headers {
            if !self.columns.contains(header) {
                return Err(SheetError::UnexpectedHeader(header.clone()));
            }
        }
        Ok(headers)
    }

    /// Every data row decoded into a [`TypedRow`], in sheet order.
    pub fn typed_rows(&mut self) -> Result<Vec<TypedRow>> {
        let headers = self.headers()?;
        let data_rows = self.grid()?.data_rows().to_vec();
        data_rows
            .iter()
            .map(|raw| self.typed_row(&headers, raw))
            .collect()
    }

    fn typed_row(&self, headers: &[String], raw: &[String]) -> Result<TypedRow> {
        let mut row = TypedRow::new();
        for (i, header) in headers.iter().enumerate() {
            let column_type = self.column_type(header)?;
            coerce_assign(&mut row, header, column_type, raw.get(i).map(String::as_str));
        }
        Ok(row)
    }

    fn column_type(&self, header: &str) -> Result<ColumnType> {
        self.columns
            .get(header)
            .ok_or_else(|| SheetError::UnknownColumn(header.to_string()))
    }

    /// Write a single cell at `address` (spreadsheet form, like `B5`).
    ///
    /// The value is stored RAW, never parsed as a formula. The cache is
    /// invalidated whether or not the write succeeded, so subsequent reads
    /// never serve stale data.
    pub fn update_cell(&mut self, address: &str, value: &str) -> Result<()> {
        log::debug!(
            "writing {value:?} to {address} in spreadsheet {id}",
            id = self.spreadsheet_id
        );
        let result = self.channel.write_range(
            &self.spreadsheet_id,
            address,
            Grid::from(vec![vec![value.to_string()]]),
            InputMode::Raw,
        );
        self.cache.invalidate();
        result
    }

    /// Write `value` into `header`'s column on 1-based grid row `row`.
    ///
    /// Accepts raw header text; it is normalized before resolving.
    pub fn update_row_value(&mut self, row: usize, header: &str, value: &str) -> Result<()> {
        let header = normalize_header(header);
        let headers = self.headers()?;
        let column = column_letter(&header, &headers)?;
        self.update_cell(&format!("{column}{row}"), value)
    }

    /// Run `mutator` over every typed row and write back only the fields
    /// whose value changed.
    ///
    /// The mutator may change field values but never the key set. Only
    /// `string` columns may be updated; boolean and array decodings have no
    /// unambiguous inverse, so changing them fails with
    /// [`SheetError::NonStringColumnUpdate`]. Writes go out in row order,
    /// then field order within a row, each one invalidating the cache. A
    /// failure partway leaves earlier writes applied; there is no rollback.
    pub fn transform<F>(&mut self, mut mutator: F) -> Result<()>
    where
        F: FnMut(&mut TypedRow),
    {
        let rows = self.typed_rows()?;
        for (row_index, row) in rows.iter().enumerate() {
            let mut scratch = row.clone();
            mutator(&mut scratch);
            if scratch == *row {
                continue;
            }
            if !scratch.keys().eq(row.keys()) {
                return Err(SheetError::KeySetMismatch);
            }
            for ((header, old), (_, new)) in row.iter().zip(scratch.iter()) {
                if old == new {
                    continue;
                }
                let column_type = self.column_type(header)?;
                let FieldValue::Text(new_text) = new else {
                    return Err(SheetError::NonStringColumnUpdate {
                        column: header.to_string(),
                        column_type,
                    });
                };
                if column_type != ColumnType::String {
                    return Err(SheetError::NonStringColumnUpdate {
                        column: header.to_string(),
                        column_type,
                    });
                }
                // Absent text encodes as the empty string, clearing the cell.
                let value = new_text.as_deref().unwrap_or("").to_string();
                self.update_row_value(row_index + 2, header, &value)?;
            }
        }
        Ok(())
    }
}
