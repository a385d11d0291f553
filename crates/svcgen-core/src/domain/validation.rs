use crate::domain::{
    entities::{Blueprint, ClusterSettings, GenerationPlan},
    error::DomainError,
    value_objects::{NamePolicy, ServiceName},
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across the services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(raw: &str, policy: NamePolicy) -> Result<ServiceName, DomainError> {
        ServiceName::parse(raw, policy)
    }

    pub fn validate_settings(settings: &ClusterSettings) -> Result<(), DomainError> {
        settings.validate()
    }

    pub fn validate_blueprint(blueprint: &Blueprint) -> Result<(), DomainError> {
        blueprint.validate()
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
