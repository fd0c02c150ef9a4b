//! Department records and the write payload shared by every mutation.

use std::fmt;

/// Primary identifier of a department row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartmentId(i32);

impl DepartmentId {
    /// Wrap a raw store id.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer as stored.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for DepartmentId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Field values for an insert or a full-row update.
///
/// ## Invariants
/// - `location` and `email` are `None` rather than empty strings.
///
/// # Examples
/// ```
/// use deptdesk::domain::DepartmentDraft;
///
/// let draft = DepartmentDraft::new(10, 100, "CS", "", "cs@x.edu");
/// assert_eq!(draft.location(), None);
/// assert_eq!(draft.email(), Some("cs@x.edu"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentDraft {
    school_id: i32,
    dept_code: i32,
    name: String,
    location: Option<String>,
    email: Option<String>,
}

impl DepartmentDraft {
    /// Build a draft, normalizing empty optional fields to absent.
    pub fn new(
        school_id: i32,
        dept_code: i32,
        name: impl Into<String>,
        location: &str,
        email: &str,
    ) -> Self {
        Self {
            school_id,
            dept_code,
            name: name.into(),
            location: non_empty(location),
            email: non_empty(email),
        }
    }

    /// Owning school.
    pub fn school_id(&self) -> i32 {
        self.school_id
    }

    /// Department code within the school.
    pub fn dept_code(&self) -> i32 {
        self.dept_code
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Optional location.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Optional contact email.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// A department row as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    id: DepartmentId,
    fields: DepartmentDraft,
}

impl Department {
    /// Attach an id to draft values.
    pub fn new(id: DepartmentId, fields: DepartmentDraft) -> Self {
        Self { id, fields }
    }

    /// Primary identifier.
    pub fn id(&self) -> DepartmentId {
        self.id
    }

    /// Owning school.
    pub fn school_id(&self) -> i32 {
        self.fields.school_id()
    }

    /// Department code within the school.
    pub fn dept_code(&self) -> i32 {
        self.fields.dept_code()
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.fields.name()
    }

    /// Optional location.
    pub fn location(&self) -> Option<&str> {
        self.fields.location()
    }

    /// Optional contact email.
    pub fn email(&self) -> Option<&str> {
        self.fields.email()
    }

    /// Non-id values, as accepted by update.
    pub fn fields(&self) -> &DepartmentDraft {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", None)]
    #[case("Bldg A", Some("Bldg A"))]
    fn optional_fields_normalize_empty_to_none(
        #[case] raw: &str,
        #[case] expected: Option<&str>,
    ) {
        let draft = DepartmentDraft::new(1, 2, "Math", raw, raw);
        assert_eq!(draft.location(), expected);
        assert_eq!(draft.email(), expected);
    }

    #[rstest]
    fn department_exposes_draft_values() {
        let department = Department::new(
            DepartmentId::new(1),
            DepartmentDraft::new(10, 100, "CS", "Bldg A", "cs@x.edu"),
        );
        assert_eq!(department.id().get(), 1);
        assert_eq!(department.school_id(), 10);
        assert_eq!(department.dept_code(), 100);
        assert_eq!(department.name(), "CS");
        assert_eq!(department.location(), Some("Bldg A"));
        assert_eq!(department.email(), Some("cs@x.edu"));
    }
}
