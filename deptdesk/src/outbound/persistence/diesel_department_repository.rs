//! SQLite-backed `DepartmentRepository` implementation using Diesel ORM.

use diesel::prelude::*;
use tracing::warn;

use crate::domain::ports::{DepartmentPersistenceError, DepartmentRepository};
use crate::domain::{Department, DepartmentDraft, DepartmentId};

use super::connection::SqliteStore;
use super::diesel_error_mapping::{
    DieselFailure, classify_connection_error, classify_diesel_error,
};
use super::models::{
    DepartmentChangeset, DepartmentRow, DepartmentValues, NewDepartmentWithIdRow,
};
use super::schema::departments;

/// Diesel-backed implementation of the department repository port.
#[derive(Debug, Clone)]
pub struct DieselDepartmentRepository {
    store: SqliteStore,
}

impl DieselDepartmentRepository {
    /// Create a repository over a prepared store.
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    fn connect(&self) -> Result<SqliteConnection, DepartmentPersistenceError> {
        self.store
            .connect()
            .map_err(|err| classify_connection_error(err).into())
    }
}

impl From<DieselFailure> for DepartmentPersistenceError {
    fn from(failure: DieselFailure) -> Self {
        match failure {
            DieselFailure::Connection(message) => Self::connection(message),
            DieselFailure::UniqueViolation(message) => Self::unique_violation(message),
            DieselFailure::Query(message) => Self::query(message),
        }
    }
}

impl From<diesel::result::Error> for DepartmentPersistenceError {
    fn from(error: diesel::result::Error) -> Self {
        classify_diesel_error(error).into()
    }
}

fn map_diesel_error(error: diesel::result::Error) -> DepartmentPersistenceError {
    error.into()
}

/// Narrow a stored rowid to a department id; out-of-range ids are errors.
fn department_id(raw: i64) -> Result<DepartmentId, DepartmentPersistenceError> {
    i32::try_from(raw).map(DepartmentId::new).map_err(|_| {
        warn!(id = raw, "stored department id does not fit a 32-bit id");
        DepartmentPersistenceError::query(format!(
            "department id {raw} is outside the supported range"
        ))
    })
}

fn values_from_draft(draft: &DepartmentDraft) -> DepartmentValues<'_> {
    DepartmentValues {
        sch_id: draft.school_id(),
        dept_code: draft.dept_code(),
        dept_name: draft.name(),
        dept_location: draft.location(),
        dept_email: draft.email(),
    }
}

fn changeset_from_draft(draft: &DepartmentDraft) -> DepartmentChangeset<'_> {
    DepartmentChangeset {
        sch_id: draft.school_id(),
        dept_code: draft.dept_code(),
        dept_name: draft.name(),
        dept_location: draft.location(),
        dept_email: draft.email(),
    }
}

/// Convert a row, reading `NULL` required columns as zero or empty.
fn row_to_department(row: DepartmentRow) -> Result<Department, DepartmentPersistenceError> {
    let id = department_id(row.id)?;
    if row.sch_id.is_none() || row.dept_code.is_none() || row.dept_name.is_none() {
        warn!(
            id = row.id,
            "department row has NULL required columns; showing defaults"
        );
    }

    let location = row.dept_location.unwrap_or_default();
    let email = row.dept_email.unwrap_or_default();
    Ok(Department::new(
        id,
        DepartmentDraft::new(
            row.sch_id.unwrap_or_default(),
            row.dept_code.unwrap_or_default(),
            row.dept_name.unwrap_or_default(),
            &location,
            &email,
        ),
    ))
}

impl DepartmentRepository for DieselDepartmentRepository {
    fn list(&self) -> Result<Vec<Department>, DepartmentPersistenceError> {
        let mut conn = self.connect()?;
        let rows: Vec<DepartmentRow> = departments::table
            .order(departments::id.asc())
            .select(DepartmentRow::as_select())
            .load(&mut conn)
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_department).collect()
    }

    fn find_by_id(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, DepartmentPersistenceError> {
        let mut conn = self.connect()?;
        let row: Option<DepartmentRow> = departments::table
            .find(i64::from(id.get()))
            .select(DepartmentRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_department).transpose()
    }

    fn insert_with_id(
        &self,
        id: DepartmentId,
        draft: &DepartmentDraft,
    ) -> Result<(), DepartmentPersistenceError> {
        let mut conn = self.connect()?;
        let row = NewDepartmentWithIdRow {
            id: i64::from(id.get()),
            values: values_from_draft(draft),
        };
        diesel::insert_into(departments::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(map_diesel_error)?;
        Ok(())
    }

    fn insert_auto_id(
        &self,
        draft: &DepartmentDraft,
    ) -> Result<DepartmentId, DepartmentPersistenceError> {
        let mut conn = self.connect()?;
        // SQLite picks max(id) + 1; past i32::MAX the insert is rolled back.
        conn.transaction(|conn| {
            let raw: i64 = diesel::insert_into(departments::table)
                .values(&values_from_draft(draft))
                .returning(departments::id)
                .get_result(conn)?;
            department_id(raw)
        })
    }

    fn update(
        &self,
        id: DepartmentId,
        draft: &DepartmentDraft,
    ) -> Result<usize, DepartmentPersistenceError> {
        let mut conn = self.connect()?;
        diesel::update(departments::table.find(i64::from(id.get())))
            .set(&changeset_from_draft(draft))
            .execute(&mut conn)
            .map_err(map_diesel_error)
    }

    fn delete(&self, id: DepartmentId) -> Result<usize, DepartmentPersistenceError> {
        let mut conn = self.connect()?;
        diesel::delete(departments::table.find(i64::from(id.get())))
            .execute(&mut conn)
            .map_err(map_diesel_error)
    }
}
