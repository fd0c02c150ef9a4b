//! The department list view: an in-memory snapshot plus search state.
//!
//! The snapshot is replaced wholesale on every reload. Search scans the
//! snapshot first and only falls back to the store when the id is absent,
//! in which case a hit narrows the snapshot to that single row.

use std::sync::Arc;

use tracing::debug;

use super::ports::DepartmentRepository;
use super::{Department, DepartmentId, Error};

/// Message for search input that is not an integer.
pub const INVALID_SEARCH_ID: &str = "Please enter a valid department ID (numeric)";

/// Where a successful search found its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Found in the current snapshot at `row`; the store was not queried.
    InSnapshot {
        /// Zero-based snapshot position.
        row: usize,
    },
    /// Fetched from the store; the snapshot now holds only this row.
    FromStore,
}

/// Snapshot, highlight marker and selection for the main screen.
pub struct DepartmentList {
    repository: Arc<dyn DepartmentRepository>,
    snapshot: Vec<Department>,
    highlighted: Option<DepartmentId>,
    selected: Option<usize>,
}

impl DepartmentList {
    /// Create an empty list; call [`DepartmentList::reload`] to populate it.
    pub fn new(repository: Arc<dyn DepartmentRepository>) -> Self {
        Self {
            repository,
            snapshot: Vec::new(),
            highlighted: None,
            selected: None,
        }
    }

    /// Create a list and populate it from the store.
    pub fn load(repository: Arc<dyn DepartmentRepository>) -> Result<Self, Error> {
        let mut list = Self::new(repository);
        list.reload()?;
        Ok(list)
    }

    /// Replace the snapshot with every stored row.
    ///
    /// The highlight marker survives; the selection does not, as it indexes
    /// the previous snapshot. On failure the snapshot is left empty.
    pub fn reload(&mut self) -> Result<(), Error> {
        self.snapshot.clear();
        self.selected = None;
        self.snapshot = self.repository.list()?;
        debug!(rows = self.snapshot.len(), "department snapshot reloaded");
        Ok(())
    }

    /// Reload and forget any search state.
    pub fn refresh(&mut self) -> Result<(), Error> {
        self.highlighted = None;
        self.reload()
    }

    /// Highlight and select the department with `id`.
    pub fn search_by_id(&mut self, id: DepartmentId) -> Result<SearchOutcome, Error> {
        self.highlighted = Some(id);

        if let Some(row) = self.snapshot.iter().position(|d| d.id() == id) {
            self.selected = Some(row);
            return Ok(SearchOutcome::InSnapshot { row });
        }

        match self.repository.find_by_id(id) {
            Ok(Some(department)) => {
                debug!(%id, "search narrowed snapshot to store row");
                self.snapshot = vec![department];
                self.selected = Some(0);
                Ok(SearchOutcome::FromStore)
            }
            Ok(None) => {
                self.highlighted = None;
                Err(Error::not_found(format!("No department found with ID {id}")))
            }
            Err(error) => {
                self.highlighted = None;
                Err(error.into())
            }
        }
    }

    /// Search from raw user input.
    ///
    /// Blank input does nothing and returns `Ok(None)`.
    pub fn search_text(&mut self, raw: &str) -> Result<Option<SearchOutcome>, Error> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let id = trimmed
            .parse::<i32>()
            .map_err(|_| Error::invalid_input(INVALID_SEARCH_ID))?;
        self.search_by_id(DepartmentId::new(id)).map(Some)
    }

    /// Rows in display order.
    pub fn departments(&self) -> &[Department] {
        &self.snapshot
    }

    /// Current highlight marker.
    pub fn highlighted(&self) -> Option<DepartmentId> {
        self.highlighted
    }

    /// True when `department` carries the highlight marker.
    pub fn is_highlighted(&self, department: &Department) -> bool {
        self.highlighted == Some(department.id())
    }

    /// Selected snapshot position.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selected row, if any.
    pub fn selected_department(&self) -> Option<&Department> {
        self.selected.and_then(|row| self.snapshot.get(row))
    }
}
