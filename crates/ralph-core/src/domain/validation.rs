use crate::domain::{entities::RunConfiguration, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A project name becomes a directory under the current one, so it
    /// must be a single, visible path component.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: name.into(),
                reason: "name cannot be empty".into(),
            });
        }
        if name.starts_with('.') {
            return Err(DomainError::InvalidProjectName {
                name: name.into(),
                reason: "name cannot start with '.'".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidProjectName {
                name: name.into(),
                reason: "name cannot contain path separators".into(),
            });
        }
        Ok(())
    }

    pub fn validate_run_configuration(config: &RunConfiguration) -> Result<(), DomainError> {
        if config.template_root() == config.destination_root() {
            return Err(DomainError::InvalidConfiguration(
                "template root and destination root must differ".into(),
            ));
        }
        Ok(())
    }
}
