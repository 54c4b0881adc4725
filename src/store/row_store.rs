//! Schema-checked CRUD over one worksheet.
//!
//! Reads go through a short-lived cache; every mutation goes straight to the
//! backend and drops the cache, so the next read always reflects it.

use super::cache::ReadCache;
use super::record::{self, SheetRecord};
use crate::backend::SheetBackend;
use crate::errors::{AppError, AppResult};
use log::{debug, info, warn};
use std::time::Duration;
use uuid::Uuid;

pub struct RowStore<R: SheetRecord, B: SheetBackend> {
    backend: B,
    cache: ReadCache<R>,
}

impl<R: SheetRecord, B: SheetBackend> RowStore<R, B> {
    /// Wrap a backend without touching it.
    pub fn new(backend: B, cache_ttl: Duration) -> Self {
        Self {
            backend,
            cache: ReadCache::new(cache_ttl),
        }
    }

    /// Wrap a backend and validate its header. A store is never handed out
    /// for a sheet whose header does not match.
    pub fn open(backend: B, cache_ttl: Duration) -> AppResult<Self> {
        let mut store = Self::new(backend, cache_ttl);
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn sheet_name(&self) -> &str {
        self.backend.sheet_name()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the header into an empty sheet, or verify the existing one.
    pub fn ensure_schema(&mut self) -> AppResult<()> {
        let values = self.backend.read_all()?;
        let expected = record::headers::<R>();

        match values.first() {
            None => {
                info!("sheet '{}': writing header {:?}", self.sheet_name(), expected);
                self.cache.invalidate();
                self.backend.append_row(&expected)
            }
            Some(found) => self.check_header(found),
        }
    }

    fn check_header(&self, found: &[String]) -> AppResult<()> {
        if found.iter().map(String::as_str).eq(R::HEADERS.iter().copied()) {
            return Ok(());
        }
        Err(AppError::SchemaMismatch {
            sheet: self.sheet_name().to_string(),
            expected: record::headers::<R>(),
            found: found.to_vec(),
        })
    }

    /// Fresh read of every data row with its backend position.
    fn read_positioned(&self) -> AppResult<Vec<(usize, R)>> {
        let values = self.backend.read_all()?;

        let Some(header) = values.first() else {
            return Ok(Vec::new());
        };
        self.check_header(header)?;

        Ok(values
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, cells)| (idx + 1, R::from_cells(cells)))
            .collect())
    }

    /// All rows in backend order, served from the cache while it is fresh.
    pub fn load_all(&mut self) -> AppResult<Vec<R>> {
        if let Some(rows) = self.cache.get() {
            return Ok(rows);
        }

        let rows: Vec<R> = self
            .read_positioned()?
            .into_iter()
            .map(|(_, r)| r)
            .collect();

        debug!("sheet '{}': loaded {} rows", self.sheet_name(), rows.len());
        self.cache.put(rows.clone());
        Ok(rows)
    }

    /// Backend position of the first row whose id equals `id`.
    pub fn find_position_by_id(&self, id: &str) -> AppResult<Option<usize>> {
        let column = R::ID_COLUMN
            .ok_or_else(|| AppError::NoIdColumn(self.sheet_name().to_string()))?;

        let ids = self.backend.col_values(column)?;
        Ok(ids
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, v)| v.as_str() == id)
            .map(|(idx, _)| idx + 1))
    }

    fn require_position(&self, id: &str) -> AppResult<usize> {
        self.find_position_by_id(id)?
            .ok_or_else(|| AppError::RowNotFound(id.to_string()))
    }

    /// Append a record, assigning a fresh id when the sheet has an id column.
    pub fn insert(&mut self, mut rec: R) -> AppResult<R> {
        if R::ID_COLUMN.is_some() {
            rec.set_id(Uuid::new_v4().to_string());
        }

        self.cache.invalidate();
        self.backend.append_row(&rec.to_cells())?;

        info!(
            "sheet '{}': inserted row {}",
            self.sheet_name(),
            rec.id().unwrap_or("-")
        );
        Ok(rec)
    }

    /// Overwrite the contiguous range of columns starting at the 1-indexed
    /// `first_column` of the row identified by `id`.
    pub fn update_fields(
        &mut self,
        id: &str,
        first_column: usize,
        values: &[String],
    ) -> AppResult<()> {
        let width = R::HEADERS.len();
        let end = first_column + values.len();
        if first_column == 0 || values.is_empty() || end - 1 > width {
            return Err(AppError::InvalidRange {
                first: first_column,
                end,
                width,
            });
        }

        let position = self.require_position(id)?;

        self.cache.invalidate();
        self.backend.write_range(position, first_column, values)?;

        info!(
            "sheet '{}': updated columns {}..{} of row {} ({})",
            self.sheet_name(),
            first_column,
            end,
            position,
            id
        );
        Ok(())
    }

    /// Overwrite a single named column.
    pub fn update_column(&mut self, id: &str, column: &str, value: &str) -> AppResult<()> {
        let first = record::column_of::<R>(column)
            .ok_or_else(|| AppError::Validation(format!("Unknown column '{}'", column)))?;
        self.update_fields(id, first, &[value.to_string()])
    }

    /// Remove the row identified by `id`.
    pub fn delete_by_id(&mut self, id: &str) -> AppResult<()> {
        let position = self.require_position(id)?;

        self.cache.invalidate();
        self.backend.delete_row(position)?;

        info!("sheet '{}': deleted row {} ({})", self.sheet_name(), position, id);
        Ok(())
    }

    /// Delete every row matching `predicate`; returns how many were removed.
    ///
    /// Positions are deleted from the bottom up: removing a row shifts all
    /// later rows, so ascending order would hit the wrong rows. A failure
    /// midway leaves the rows already removed deleted.
    pub fn delete_where<F>(&mut self, predicate: F) -> AppResult<usize>
    where
        F: Fn(&R) -> bool,
    {
        let mut positions: Vec<usize> = self
            .read_positioned()?
            .into_iter()
            .filter(|(_, r)| predicate(r))
            .map(|(pos, _)| pos)
            .collect();
        positions.sort_unstable_by(|a, b| b.cmp(a));

        self.cache.invalidate();
        for (done, pos) in positions.iter().enumerate() {
            if let Err(e) = self.backend.delete_row(*pos) {
                warn!(
                    "sheet '{}': bulk delete stopped after {} of {} rows: {}",
                    self.sheet_name(),
                    done,
                    positions.len(),
                    e
                );
                return Err(e);
            }
        }

        info!("sheet '{}': bulk deleted {} rows", self.sheet_name(), positions.len());
        Ok(positions.len())
    }
}
