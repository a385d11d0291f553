//! Application layer for svcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    BlueprintListing, GenerateService, GenerationReport, GenerationRequest, TemplateInfo,
    describe_blueprint,
};

pub use ports::{BlueprintSource, FileSink};

pub use error::ApplicationError;
