//! Ordered in-memory table
//!
//! Insertion order is display order. Rows can be addressed by position or
//! by their surrogate id, which stays valid when earlier rows are removed.

use tracing::debug;

use crate::error::{PlannerError, PlannerResult};
use crate::models::Record;

/// An ordered table of session records
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTable<T: Record> {
    rows: Vec<T>,
}

impl<T: Record> Default for EntityTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> EntityTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows, validating each of them
    pub fn from_rows(rows: Vec<T>) -> PlannerResult<Self> {
        for (idx, row) in rows.iter().enumerate() {
            row.validate()?;
            Self::check_unique(&rows[..idx], row, None)?;
        }
        Ok(Self { rows })
    }

    /// All rows in display order
    pub fn list(&self) -> &[T] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by position
    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// Get a row by id
    pub fn get_by_id(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Current position of the row with this id
    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    /// Append a validated row, returning its index
    pub fn add(&mut self, record: T) -> PlannerResult<usize> {
        record.validate()?;
        Self::check_unique(&self.rows, &record, None)?;
        debug!(table = T::TABLE, id = %record.id(), "row added");
        self.rows.push(record);
        Ok(self.rows.len() - 1)
    }

    /// Apply a partial update to the row at `index`
    ///
    /// The patch is applied to a copy first; the stored row is only replaced
    /// when the result validates.
    pub fn update(&mut self, index: usize, patch: T::Patch) -> PlannerResult<&T> {
        let len = self.rows.len();
        let current = self
            .rows
            .get(index)
            .ok_or_else(|| Self::out_of_range(index, len))?;

        let mut updated = current.clone();
        updated.apply(patch);
        updated.validate()?;
        Self::check_unique(&self.rows, &updated, Some(index))?;

        debug!(table = T::TABLE, id = %updated.id(), index, "row updated");
        self.rows[index] = updated;
        Ok(&self.rows[index])
    }

    /// Apply a partial update to the row with this id
    pub fn update_by_id(&mut self, id: T::Id, patch: T::Patch) -> PlannerResult<&T> {
        let index = self.position(id).ok_or_else(|| Self::id_not_found(id))?;
        self.update(index, patch)
    }

    /// Remove the row at `index`; later rows shift up by one
    pub fn remove(&mut self, index: usize) -> PlannerResult<T> {
        if index >= self.rows.len() {
            return Err(Self::out_of_range(index, self.rows.len()));
        }
        let removed = self.rows.remove(index);
        debug!(table = T::TABLE, id = %removed.id(), index, "row removed");
        Ok(removed)
    }

    /// Remove the row with this id
    pub fn remove_by_id(&mut self, id: T::Id) -> PlannerResult<T> {
        let index = self.position(id).ok_or_else(|| Self::id_not_found(id))?;
        self.remove(index)
    }

    /// Index of the first row matching `predicate`
    pub fn find_index<P>(&self, predicate: P) -> PlannerResult<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.rows
            .iter()
            .position(predicate)
            .ok_or_else(|| PlannerError::NotFound {
                entity_type: T::TABLE,
                identifier: "no row matches".to_string(),
            })
    }

    /// Swap in a new set of rows wholesale, returning the previous rows
    pub(crate) fn replace_all(&mut self, rows: Vec<T>) -> Vec<T> {
        debug!(table = T::TABLE, rows = rows.len(), "table replaced");
        std::mem::replace(&mut self.rows, rows)
    }

    /// Reject `record` if another row already carries its unique key
    fn check_unique(rows: &[T], record: &T, skip: Option<usize>) -> PlannerResult<()> {
        let Some(key) = record.unique_key() else {
            return Ok(());
        };
        let taken = rows
            .iter()
            .enumerate()
            .any(|(idx, row)| Some(idx) != skip && row.unique_key() == Some(key));
        if taken {
            return Err(PlannerError::Validation(format!(
                "'{}' appears more than once in {}",
                key,
                T::TABLE
            )));
        }
        Ok(())
    }

    fn out_of_range(index: usize, len: usize) -> PlannerError {
        PlannerError::IndexOutOfRange {
            table: T::TABLE,
            index,
            len,
        }
    }

    fn id_not_found(id: T::Id) -> PlannerError {
        PlannerError::NotFound {
            entity_type: T::TABLE,
            identifier: id.to_string(),
        }
    }
}

impl<'a, T: Record> IntoIterator for &'a EntityTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
