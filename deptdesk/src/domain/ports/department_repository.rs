//! Port abstraction for department persistence adapters and their errors.

use crate::domain::{Department, DepartmentDraft, DepartmentId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by department repository adapters.
    pub enum DepartmentPersistenceError {
        /// The store could not be opened for this call.
        Connection => "department store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "department store query failed: {message}",
        /// The id already exists.
        UniqueViolation => "department id already exists in the store: {message}",
    }
}

/// Data access for the `departments` table.
///
/// Every call is synchronous and opens its own connection, released before
/// the call returns on every path.
#[cfg_attr(test, mockall::automock)]
pub trait DepartmentRepository: Send + Sync {
    /// All rows ordered by id ascending.
    fn list(&self) -> Result<Vec<Department>, DepartmentPersistenceError>;

    /// Zero or one row matching `id`.
    fn find_by_id(&self, id: DepartmentId)
    -> Result<Option<Department>, DepartmentPersistenceError>;

    /// Insert a fully specified row; a taken id fails with
    /// [`DepartmentPersistenceError::UniqueViolation`].
    fn insert_with_id(
        &self,
        id: DepartmentId,
        draft: &DepartmentDraft,
    ) -> Result<(), DepartmentPersistenceError>;

    /// Insert a row and let the store assign the id.
    fn insert_auto_id(
        &self,
        draft: &DepartmentDraft,
    ) -> Result<DepartmentId, DepartmentPersistenceError>;

    /// Replace every non-id field; returns the affected row count.
    fn update(
        &self,
        id: DepartmentId,
        draft: &DepartmentDraft,
    ) -> Result<usize, DepartmentPersistenceError>;

    /// Remove the row; returns the affected row count.
    fn delete(&self, id: DepartmentId) -> Result<usize, DepartmentPersistenceError>;
}
