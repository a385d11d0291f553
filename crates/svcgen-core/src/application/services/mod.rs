//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a service".

pub mod generate_service;

pub use generate_service::{
    BlueprintListing, GenerateService, GenerationReport, GenerationRequest, TemplateInfo,
    describe_blueprint,
};
