//! Typed row values and raw-cell coercion.

use crate::column::ColumnType;

/// A decoded cell value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// Trimmed text, or `None` for an empty or absent cell.
    Text(Option<String>),
    Bool(bool),
    /// Ordered non-empty values accumulated for an `array` column.
    List(Vec<String>),
}

/// One data row decoded into typed values keyed by canonical header.
///
/// Fields keep header order, so diffing and write-back walk columns left to
/// right. Rows are built fresh per read and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypedRow {
    fields: Vec<(String, FieldValue)>,
}

impl TypedRow {
    pub fn new() -> Self {
        TypedRow::default()
    }

    pub fn get(&self, header: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == header)
            .map(|(_, v)| v)
    }

    /// Replace the value under `header`, appending the field if new.
    pub fn set(&mut self, header: &str, value: FieldValue) {
        match self.fields.iter_mut().find(|(k, _)| k == header) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((header.to_string(), value)),
        }
    }

    /// Remove and return the value under `header`.
    pub fn remove(&mut self, header: &str) -> Option<FieldValue> {
        let index = self.fields.iter().position(|(k, _)| k == header)?;
        Some(self.fields.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text of a `string` field, if present and non-absent.
    pub fn text(&self, header: &str) -> Option<&str> {
        match self.get(header)? {
            FieldValue::Text(text) => text.as_deref(),
            _ => None,
        }
    }

    /// Set a `string` field to `value`.
    pub fn set_text(&mut self, header: &str, value: impl Into<String>) {
        self.set(header, FieldValue::Text(Some(value.into())));
    }

    /// Clear a `string` field to the absent marker.
    pub fn clear_text(&mut self, header: &str) {
        self.set(header, FieldValue::Text(None));
    }

    pub fn bool(&self, header: &str) -> Option<bool> {
        match self.get(header)? {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn list(&self, header: &str) -> Option<&[String]> {
        match self.get(header)? {
            FieldValue::List(values) => Some(values),
            _ => None,
        }
    }

    /// Append `value` to the list under `header`, materializing an empty
    /// list first. An empty value materializes the list but adds nothing.
    fn push_list_value(&mut self, header: &str, value: &str) {
        let index = match self.fields.iter().position(|(k, _)| k == header) {
            Some(index) => index,
            None => {
                self.fields
                    .push((header.to_string(), FieldValue::List(Vec::new())));
                self.fields.len() - 1
            }
        };
        if !matches!(self.fields[index].1, FieldValue::List(_)) {
            self.fields[index].1 = FieldValue::List(Vec::new());
        }
        if value.is_empty() {
            return;
        }
        if let FieldValue::List(list) = &mut self.fields[index].1 {
            list.push(value.to_string());
        }
    }
}

/// Decode one raw cell into `row` under `header` per the declared type.
///
/// - `string`: trimmed text; empty or absent becomes the absent marker.
/// - `boolean`: case-insensitive equality with `TRUE`; everything else,
///   absent included, is false.
/// - `array`: each non-empty trimmed value appends to the header's list.
///
/// When duplicate columns share one canonical header, `array` lists
/// accumulate in column order while scalar columns are last-value-wins.
pub(crate) fn coerce_assign(
    row: &mut TypedRow,
    header: &str,
    column_type: ColumnType,
    raw: Option<&str>,
) {
    let value = raw.unwrap_or("").trim();
    match column_type {
        ColumnType::Array => row.push_list_value(header, value),
        ColumnType::Boolean => row.set(header, FieldValue::Bool(value.eq_ignore_ascii_case("TRUE"))),
        ColumnType::String => {
            let text = (!value.is_empty()).then(|| value.to_string());
            row.set(header, FieldValue::Text(text));
        }
    }
}
