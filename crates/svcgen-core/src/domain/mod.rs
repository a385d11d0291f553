// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for svcgen.
//!
//! This module contains pure logic with no I/O. Files only reach storage
//! through the `FileSink` port defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    blueprint::{Blueprint, FileTemplate},
    common::RelativePath,
    generation_plan::{GenerationPlan, RenderedFile},
    render_context::{APP_VERSION, RenderContext},
    settings::ClusterSettings,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{NamePolicy, ServiceName};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Name -> Context -> Plan
    // ========================================================================

    #[test]
    fn strict_name_flows_into_every_file() {
        let name = DomainValidator::validate_name("billing", NamePolicy::Strict).unwrap();
        let ctx = RenderContext::new(&name, &ClusterSettings::default());

        let blueprint = Blueprint::new("test", "0.1.0")
            .with_template(FileTemplate::new(
                "k8s/ingress.yaml",
                "host: {{SERVICE_NAME}}.{{DOMAIN}}\nsecretName: {{SERVICE_NAME}}-tls\n",
                "ingress",
            ))
            .with_template(FileTemplate::new(
                "main.py",
                r#"return {"service":"{{SERVICE_NAME}}","status":"ok"}"#,
                "app",
            ));

        let plan = GenerationPlan::render(&blueprint, &ctx, "apps/billing").unwrap();
        let contents: Vec<_> = plan.files().map(|f| f.content.as_str()).collect();

        assert_eq!(
            contents[0],
            "host: billing.homelab.lan\nsecretName: billing-tls\n"
        );
        assert_eq!(contents[1], r#"return {"service":"billing","status":"ok"}"#);
        assert!(contents.iter().all(|c| !c.contains("{{")));
    }

    #[test]
    fn invalid_settings_are_reported_by_field() {
        let settings = ClusterSettings {
            refresh_interval: String::new(),
            ..ClusterSettings::default()
        };
        assert!(matches!(
            DomainValidator::validate_settings(&settings),
            Err(DomainError::InvalidSettings {
                field: "refresh_interval",
                ..
            })
        ));
    }

    #[test]
    fn validation_errors_are_user_facing() {
        let err = DomainValidator::validate_name("Bad Name", NamePolicy::Strict).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("--permissive")));
    }
}
