//! Svcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the svcgen
//! service scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           svcgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: FileSink, Blueprints)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    svcgen-adapters (Infrastructure)     │
//! │ (LocalFileSink, MemoryFileSink, ...)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ServiceName, Blueprint, RenderContext) │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use svcgen_adapters::{BuiltinBlueprint, LocalFileSink};
//! use svcgen_core::application::{GenerateService, GenerationRequest};
//!
//! let service = GenerateService::new(Box::new(BuiltinBlueprint), Box::new(LocalFileSink));
//! let report = service.generate(&GenerationRequest::new("billing"))?;
//!
//! println!("{}", report.summary());
//! for line in report.next_steps() {
//!     println!("  {line}");
//! }
//! # Ok::<(), svcgen_core::error::SvcgenError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BlueprintListing, GenerateService, GenerationReport, GenerationRequest, TemplateInfo,
        describe_blueprint,
        ports::{BlueprintSource, FileSink},
    };
    pub use crate::domain::{
        Blueprint, ClusterSettings, FileTemplate, GenerationPlan, NamePolicy, RenderContext,
        RenderedFile, ServiceName,
    };
    pub use crate::error::{SvcgenError, SvcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
