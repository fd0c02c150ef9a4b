//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_repository;
mod department_repository;
mod login_service;

#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
pub use credential_repository::{CredentialPersistenceError, CredentialRepository};
#[cfg(test)]
pub use department_repository::MockDepartmentRepository;
pub use department_repository::{DepartmentPersistenceError, DepartmentRepository};
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
