//! The department form: one component for every insert/update/delete
//! surface.
//!
//! A [`FormProfile`] picks the rules. `Manage` exposes explicit insert,
//! update and delete with an optional id on insert; `EditorNew` saves by
//! inserting with a required, duplicate-checked id; `EditorExisting` is
//! locked to one id and saves by updating it.
//!
//! Validation runs before any store access, in this order: the id when the
//! operation needs one, then the required fields (all missing ones are
//! reported together), then integer parsing of every non-empty numeric
//! field.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use super::ports::DepartmentRepository;
use super::{Department, DepartmentDraft, DepartmentId, Error, Notice};

/// Rule set applied by a [`DepartmentForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormProfile {
    /// Explicit insert, update and delete over any id.
    Manage,
    /// Create one department with a caller-chosen id.
    EditorNew,
    /// Edit the department with this id.
    EditorExisting(DepartmentId),
}

impl FormProfile {
    /// Heading for the form screen.
    pub fn title(self) -> String {
        match self {
            Self::Manage => "Manage Departments".to_owned(),
            Self::EditorNew => "New Department".to_owned(),
            Self::EditorExisting(id) => format!("Edit Department {id}"),
        }
    }

    /// Id the form is pinned to, if any.
    pub fn locked_id(self) -> Option<DepartmentId> {
        match self {
            Self::EditorExisting(id) => Some(id),
            Self::Manage | Self::EditorNew => None,
        }
    }

    /// Whether delete is offered.
    pub fn allows_delete(self) -> bool {
        !matches!(self, Self::EditorNew)
    }

    /// Whether insert needs an explicit id.
    pub fn requires_id_on_insert(self) -> bool {
        matches!(self, Self::EditorNew)
    }

    /// Whether insert checks the id against the store first.
    pub fn checks_duplicate_id(self) -> bool {
        matches!(self, Self::EditorNew)
    }

    /// Whether the surface closes after a successful action.
    pub fn closes_on_success(self) -> bool {
        !matches!(self, Self::Manage)
    }
}

/// Form inputs subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Department id.
    Id,
    /// School id.
    SchoolId,
    /// Department code.
    DeptCode,
    /// Department name.
    Name,
}

impl FormField {
    /// Label used in messages and prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::SchoolId => "School ID",
            Self::DeptCode => "Department Code",
            Self::Name => "Name",
        }
    }
}

/// Raw text of every form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Department id.
    pub id: String,
    /// School id.
    pub school_id: String,
    /// Department code.
    pub dept_code: String,
    /// Department name.
    pub name: String,
    /// Optional location.
    pub location: String,
    /// Optional contact email.
    pub email: String,
}

impl FormFields {
    /// Pre-fill from a stored row.
    pub fn from_department(department: &Department) -> Self {
        Self {
            id: department.id().to_string(),
            school_id: department.school_id().to_string(),
            dept_code: department.dept_code().to_string(),
            name: department.name().to_owned(),
            location: department.location().unwrap_or_default().to_owned(),
            email: department.email().unwrap_or_default().to_owned(),
        }
    }
}

/// Why form input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValidationError {
    /// The operation needs an id and none was given.
    MissingId,
    /// Required fields were blank.
    MissingRequired {
        /// Blank fields in form order.
        fields: Vec<FormField>,
    },
    /// Fields did not parse as 32-bit integers.
    NotNumeric {
        /// Offending fields in form order.
        fields: Vec<FormField>,
    },
}

impl fmt::Display for FormValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "Please enter the ID of the department"),
            Self::MissingRequired { fields } => {
                let verb = if fields.len() == 1 { "is" } else { "are" };
                write!(f, "{} {verb} required", join_labels(fields))
            }
            Self::NotNumeric { fields } => write!(f, "{} must be numeric", join_labels(fields)),
        }
    }
}

impl std::error::Error for FormValidationError {}

impl From<FormValidationError> for Error {
    fn from(error: FormValidationError) -> Self {
        Self::invalid_input(error.to_string())
    }
}

fn join_labels(fields: &[FormField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|field| field.label()).collect();
    match labels.split_last() {
        Some((last, [])) => (*last).to_owned(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
        None => String::new(),
    }
}

/// A completed mutation, used by the caller to reload the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// A row was added.
    Inserted(DepartmentId),
    /// A row was replaced.
    Updated(DepartmentId),
    /// A row was removed.
    Deleted(DepartmentId),
}

impl FormOutcome {
    /// Affected id.
    pub fn id(self) -> DepartmentId {
        match self {
            Self::Inserted(id) | Self::Updated(id) | Self::Deleted(id) => id,
        }
    }

    /// Confirmation for the user.
    pub fn notice(self) -> Notice {
        Notice::info(match self {
            Self::Inserted(_) => "Department added successfully!",
            Self::Updated(_) => "Department updated successfully!",
            Self::Deleted(_) => "Department deleted successfully!",
        })
    }
}

/// Fields that passed validation.
struct ValidatedFields {
    id: Option<DepartmentId>,
    draft: DepartmentDraft,
}

/// Consolidated insert/update/delete form.
pub struct DepartmentForm {
    repository: Arc<dyn DepartmentRepository>,
    profile: FormProfile,
    fields: FormFields,
}

impl DepartmentForm {
    /// Open a form for `profile`.
    ///
    /// `EditorExisting` loads its row first and fails with not-found when the
    /// row is gone; the other profiles start blank.
    pub fn open(
        repository: Arc<dyn DepartmentRepository>,
        profile: FormProfile,
    ) -> Result<Self, Error> {
        let fields = match profile.locked_id() {
            Some(id) => match repository.find_by_id(id)? {
                Some(department) => FormFields::from_department(&department),
                None => return Err(Error::not_found("Department not found!")),
            },
            None => FormFields::default(),
        };
        Ok(Self {
            repository,
            profile,
            fields,
        })
    }

    /// Active profile.
    pub fn profile(&self) -> FormProfile {
        self.profile
    }

    /// Current input values.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Replace the input values. A locked id is kept.
    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
        self.pin_locked_id();
    }

    /// Blank every input except a locked id.
    pub fn clear(&mut self) {
        self.fields = FormFields::default();
        self.pin_locked_id();
    }

    /// Add a department from the current inputs.
    pub fn insert(&mut self) -> Result<FormOutcome, Error> {
        if self.profile.locked_id().is_some() {
            return Err(Error::invalid_input(
                "Insert is not available while editing an existing department",
            ));
        }
        let ValidatedFields { id, draft } = self.validate(self.profile.requires_id_on_insert())?;

        let id = match id {
            Some(id) => {
                if self.profile.checks_duplicate_id() && self.repository.find_by_id(id)?.is_some()
                {
                    return Err(Error::conflict("Department ID already exists!"));
                }
                self.repository.insert_with_id(id, &draft)?;
                id
            }
            None => self.repository.insert_auto_id(&draft)?,
        };

        info!(%id, "department inserted");
        self.clear();
        Ok(FormOutcome::Inserted(id))
    }

    /// Replace the department named by the id input (or the locked id).
    pub fn update(&mut self) -> Result<FormOutcome, Error> {
        let ValidatedFields { id, draft } = self.validate(true)?;
        let id = id.ok_or(FormValidationError::MissingId)?;

        if self.repository.update(id, &draft)? == 0 {
            return Err(not_found(id));
        }

        info!(%id, "department updated");
        self.clear();
        Ok(FormOutcome::Updated(id))
    }

    /// Remove the department named by the id input after `confirm` accepts
    /// the question. Declining returns `Ok(None)` and changes nothing.
    pub fn delete<F>(&mut self, confirm: F) -> Result<Option<FormOutcome>, Error>
    where
        F: FnOnce(&str) -> bool,
    {
        if !self.profile.allows_delete() {
            return Err(Error::invalid_input(
                "Delete is not available for a new department",
            ));
        }
        let id = self.validate_id()?;

        let question = format!("Are you sure you want to delete the department with ID {id}?");
        if !confirm(&question) {
            return Ok(None);
        }

        if self.repository.delete(id)? == 0 {
            return Err(not_found(id));
        }

        info!(%id, "department deleted");
        self.clear();
        Ok(Some(FormOutcome::Deleted(id)))
    }

    /// The profile's primary action: insert for new rows, update for
    /// existing ones.
    pub fn save(&mut self) -> Result<FormOutcome, Error> {
        match self.profile {
            FormProfile::EditorExisting(_) => self.update(),
            FormProfile::Manage | FormProfile::EditorNew => self.insert(),
        }
    }

    fn pin_locked_id(&mut self) {
        if let Some(id) = self.profile.locked_id() {
            self.fields.id = id.to_string();
        }
    }

    fn id_text(&self) -> String {
        match self.profile.locked_id() {
            Some(id) => id.to_string(),
            None => self.fields.id.trim().to_owned(),
        }
    }

    fn validate_id(&self) -> Result<DepartmentId, FormValidationError> {
        let text = self.id_text();
        if text.is_empty() {
            return Err(FormValidationError::MissingId);
        }
        text.parse::<i32>()
            .map(DepartmentId::new)
            .map_err(|_| FormValidationError::NotNumeric {
                fields: vec![FormField::Id],
            })
    }

    fn validate(&self, id_required: bool) -> Result<ValidatedFields, FormValidationError> {
        let id_text = self.id_text();
        if id_required && id_text.is_empty() {
            return Err(FormValidationError::MissingId);
        }

        let required = [
            (FormField::SchoolId, &self.fields.school_id),
            (FormField::DeptCode, &self.fields.dept_code),
            (FormField::Name, &self.fields.name),
        ];
        let missing: Vec<FormField> = required
            .into_iter()
            .filter(|(_, text)| text.trim().is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(FormValidationError::MissingRequired { fields: missing });
        }

        let mut not_numeric = Vec::new();
        let id = parse_number(FormField::Id, &id_text, &mut not_numeric);
        let school_id = parse_number(FormField::SchoolId, &self.fields.school_id, &mut not_numeric);
        let dept_code = parse_number(FormField::DeptCode, &self.fields.dept_code, &mut not_numeric);
        if !not_numeric.is_empty() {
            return Err(FormValidationError::NotNumeric {
                fields: not_numeric,
            });
        }

        Ok(ValidatedFields {
            id: id.map(DepartmentId::new),
            draft: DepartmentDraft::new(
                school_id.unwrap_or_default(),
                dept_code.unwrap_or_default(),
                self.fields.name.trim(),
                self.fields.location.trim(),
                self.fields.email.trim(),
            ),
        })
    }
}

/// Parse a non-empty numeric input, recording `field` when it is malformed.
fn parse_number(field: FormField, text: &str, not_numeric: &mut Vec<FormField>) -> Option<i32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let parsed = text.parse::<i32>().ok();
    if parsed.is_none() {
        not_numeric.push(field);
    }
    parsed
}

fn not_found(id: DepartmentId) -> Error {
    Error::not_found(format!("No department found with ID {id}"))
}
