//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories translate them to
//! and from domain types.

use diesel::prelude::*;

use super::schema::departments;

/// Row read from the departments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct DepartmentRow {
    pub id: i64,
    pub sch_id: Option<i32>,
    pub dept_code: Option<i32>,
    pub dept_name: Option<String>,
    pub dept_location: Option<String>,
    pub dept_email: Option<String>,
}

/// Every non-id column; inserting it lets SQLite assign the id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = departments)]
pub(crate) struct DepartmentValues<'a> {
    pub sch_id: i32,
    pub dept_code: i32,
    pub dept_name: &'a str,
    pub dept_location: Option<&'a str>,
    pub dept_email: Option<&'a str>,
}

/// Insertable row with a caller-chosen id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = departments)]
pub(crate) struct NewDepartmentWithIdRow<'a> {
    pub id: i64,
    #[diesel(embed)]
    pub values: DepartmentValues<'a>,
}

/// Full replacement of every non-id column, writing `NULL` for absent values.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = departments)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct DepartmentChangeset<'a> {
    pub sch_id: i32,
    pub dept_code: i32,
    pub dept_name: &'a str,
    pub dept_location: Option<&'a str>,
    pub dept_email: Option<&'a str>,
}
