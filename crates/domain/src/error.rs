//! Common error types used across the workspace.
//!
//! Each failure family is its own typed error and converts into
//! [`RobotServiceError`] via `#[from]`, so callers can `?` straight through.

/// Top-level error returned by domain constructors and controller operations.
#[derive(Debug, thiserror::Error)]
pub enum RobotServiceError {
    #[error("invalid argument")]
    InvalidArgument(#[from] InvalidArgumentError),

    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("capacity exceeded")]
    CapacityExceeded(#[from] CapacityError),
}

/// An unrecognised type tag was passed where a closed set was expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {family} type: {value}.")]
pub struct InvalidArgumentError {
    /// The tag family, e.g. `"service"`.
    pub family: &'static str,
    /// The rejected tag.
    pub value: String,
}

/// Invariant violations raised while constructing entities.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name cannot be null or empty")]
    EmptyName,

    #[error("robot kind cannot be null or empty")]
    EmptyKind,

    #[error("robot price cannot be below or equal to zero (got {0})")]
    NonPositivePrice(f64),
}

/// A lookup came back empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No {entity} found with type {key}.")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: String,
}

/// A service has no free robot slot left.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Not enough capacity in {service} for this robot (capacity {capacity}).")]
pub struct CapacityError {
    pub service: String,
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: RobotServiceError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            RobotServiceError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_display_invalid_argument_with_family_and_value() {
        let err = InvalidArgumentError {
            family: "supplement",
            value: "WoodenArmor".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid supplement type: WoodenArmor.");
    }

    #[test]
    fn should_display_not_found_with_key() {
        let err = NotFoundError {
            entity: "supplement",
            key: "MetalArmor".to_string(),
        };
        assert_eq!(err.to_string(), "No supplement found with type MetalArmor.");
    }
}
