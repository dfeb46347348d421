//! Raw grid data and the fetch cache.

use crate::error::Result;

/// Raw rectangular cell data as returned by the remote read: row 0 is the
/// header row, the rest are data rows. Rows may be ragged; missing trailing
/// cells are treated as absent by the decoder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Grid { rows }
    }

    /// The raw header row, or `None` when the grid has no rows or the first
    /// row has no cells.
    pub fn header_row(&self) -> Option<&[String]> {
        self.rows
            .first()
            .filter(|row| !row.is_empty())
            .map(Vec::as_slice)
    }

    /// Every row after the header row.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Grid::new(rows)
    }
}

/// Memoized copy of the last-fetched grid, with explicit invalidation.
///
/// The cache has exactly two states, unpopulated and populated. There is no
/// partial invalidation: after [`GridCache::invalidate`] the next access
/// re-fetches the whole grid and replaces it wholesale.
#[derive(Debug, Default)]
pub struct GridCache {
    grid: Option<Grid>,
}

impl GridCache {
    pub fn new() -> Self {
        GridCache::default()
    }

    /// Return the cached grid, running `fetch` first if unpopulated.
    pub fn get_or_fetch<F>(&mut self, fetch: F) -> Result<&Grid>
    where
        F: FnOnce() -> Result<Grid>,
    {
        let grid = match self.grid.take() {
            Some(grid) => grid,
            None => fetch()?,
        };
        Ok(self.grid.insert(grid))
    }

    /// Discard the cached grid unconditionally.
    pub fn invalidate(&mut self) {
        self.grid = None;
    }

    pub fn is_populated(&self) -> bool {
        self.grid.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SheetError;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_header_row_and_data_rows() {
        let g = grid(&[&["name", "active"], &["Alice", "TRUE"]]);
        assert_eq!(g.header_row().unwrap(), ["name", "active"]);
        assert_eq!(g.data_rows().len(), 1);
    }

    #[test]
    fn test_empty_grid_has_no_header_row() {
        assert!(grid(&[]).header_row().is_none());
        assert!(grid(&[&[]]).header_row().is_none());
        assert!(grid(&[]).data_rows().is_empty());
    }

    #[test]
    fn test_fetches_once_until_invalidated() {
        let mut cache = GridCache::new();
        let mut fetches = 0;

        for _ in 0..3 {
            cache
                .get_or_fetch(|| {
                    fetches += 1;
                    Ok(grid(&[&["h"]]))
                })
                .unwrap();
        }
        assert_eq!(fetches, 1);
        assert!(cache.is_populated());

        cache.invalidate();
        assert!(!cache.is_populated());
        cache
            .get_or_fetch(|| {
                fetches += 1;
                Ok(grid(&[&["h"]]))
            })
            .unwrap();
        assert_eq!(fetches, 2);
    }

    #[test]
    fn test_failed_fetch_leaves_cache_unpopulated() {
        let mut cache = GridCache::new();
        let result = cache.get_or_fetch(|| {
            Err(SheetError::remote(std::io::Error::other("network down")))
        });
        assert!(result.is_err());
        assert!(!cache.is_populated());
    }
}
