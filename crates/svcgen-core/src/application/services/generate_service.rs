//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate the service name and cluster settings
//! 2. Render the blueprint into a plan
//! 3. Write the plan through the file sink
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{BlueprintSource, FileSink},
    domain::{
        Blueprint, ClusterSettings, DomainValidator as validator, GenerationPlan, NamePolicy,
        RenderContext,
    },
    error::SvcgenResult,
};

/// Everything one invocation needs. Only `name` is required; the rest
/// defaults to the homelab cluster layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: String,
    policy: NamePolicy,
    settings: ClusterSettings,
    apps_dir: PathBuf,
}

impl GenerationRequest {
    /// Directory generated services are placed under.
    pub const DEFAULT_APPS_DIR: &'static str = "apps";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            policy: NamePolicy::default(),
            settings: ClusterSettings::default(),
            apps_dir: PathBuf::from(Self::DEFAULT_APPS_DIR),
        }
    }

    pub fn with_policy(mut self, policy: NamePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_settings(mut self, settings: ClusterSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_apps_dir(mut self, apps_dir: impl Into<PathBuf>) -> Self {
        self.apps_dir = apps_dir.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> NamePolicy {
        self.policy
    }

    pub fn settings(&self) -> &ClusterSettings {
        &self.settings
    }

    pub fn apps_dir(&self) -> &Path {
        &self.apps_dir
    }
}

/// Information about a blueprint file for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub path: String,
    pub purpose: String,
}

/// A blueprint's id and the files it produces, in write order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintListing {
    pub blueprint: String,
    pub templates: Vec<TemplateInfo>,
}

impl BlueprintListing {
    pub fn of(blueprint: &Blueprint) -> Self {
        Self {
            blueprint: blueprint.id(),
            templates: blueprint
                .templates()
                .map(|t| TemplateInfo {
                    path: t.path.to_string(),
                    purpose: t.purpose.to_string(),
                })
                .collect(),
        }
    }
}

/// Load a blueprint from `source` and check it is usable.
fn load_blueprint(source: &dyn BlueprintSource) -> SvcgenResult<Blueprint> {
    let blueprint = source.load()?;
    validator::validate_blueprint(&blueprint)?;
    Ok(blueprint)
}

/// Describe the blueprint `source` provides. Needs no file sink.
pub fn describe_blueprint(source: &dyn BlueprintSource) -> SvcgenResult<BlueprintListing> {
    load_blueprint(source).map(|b| BlueprintListing::of(&b))
}

/// What a successful generation wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub service: String,
    pub root: PathBuf,
    /// Every file written, in blueprint order.
    pub written: Vec<PathBuf>,
    /// Files that existed before and were replaced.
    pub overwritten: Vec<PathBuf>,
    /// Secret store key the ExternalSecret reads.
    pub secret_key: String,
}

impl GenerationReport {
    pub fn summary(&self) -> String {
        format!(
            "Generated service '{}' in {}",
            self.service,
            self.root.display()
        )
    }

    /// Manual follow-ups. Advisory only, nothing here is executed.
    pub fn next_steps(&self) -> Vec<String> {
        vec![
            format!(
                "1) Seed Vault secret for this service: just vault-seed {} --random",
                self.service
            ),
            format!(
                "   (ExternalSecret expects: {} with key APP_SECRET)",
                self.secret_key
            ),
            "2) Apply k8s manifests (Deployment/Service/Ingress/ExternalSecret) when ready.".into(),
        ]
    }
}

/// Main generation service.
///
/// Orchestrates validation, rendering and writing.
pub struct GenerateService {
    blueprints: Box<dyn BlueprintSource>,
    sink: Box<dyn FileSink>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(blueprints: Box<dyn BlueprintSource>, sink: Box<dyn FileSink>) -> Self {
        Self { blueprints, sink }
    }

    /// Load and validate the blueprint.
    fn blueprint(&self) -> SvcgenResult<Blueprint> {
        load_blueprint(self.blueprints.as_ref())
    }

    /// List the files every generated service receives.
    pub fn list_templates(&self) -> SvcgenResult<BlueprintListing> {
        describe_blueprint(self.blueprints.as_ref())
    }

    /// Render without writing anything.
    #[instrument(
        skip_all,
        fields(
            service = %request.name(),
            apps_dir = %request.apps_dir().display()
        )
    )]
    pub fn plan(&self, request: &GenerationRequest) -> SvcgenResult<GenerationPlan> {
        let name = validator::validate_name(request.name(), request.policy())?;
        validator::validate_settings(request.settings())?;

        let blueprint = self.blueprint()?;
        let ctx = RenderContext::new(&name, request.settings());
        let root = request.apps_dir().join(name.as_str());

        let plan = GenerationPlan::render(&blueprint, &ctx, root)?;
        info!(
            blueprint = %blueprint.id(),
            files = plan.file_count(),
            root = %plan.root().display(),
            "Plan rendered"
        );
        Ok(plan)
    }

    /// Generate the service files.
    ///
    /// Existing files are overwritten. A failed write aborts the remaining
    /// writes; files already written stay on disk.
    #[instrument(skip_all, fields(service = %request.name()))]
    pub fn generate(&self, request: &GenerationRequest) -> SvcgenResult<GenerationReport> {
        info!(policy = %request.policy(), "Generating service");

        let plan = self.plan(request)?;
        let (written, overwritten) = self.write_plan(&plan)?;

        info!(
            written = written.len(),
            overwritten = overwritten.len(),
            "Generation completed"
        );

        Ok(GenerationReport {
            service: request.name().to_string(),
            root: plan.root().to_path_buf(),
            written,
            overwritten,
            secret_key: request.settings().secret_key(request.name()),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_plan(&self, plan: &GenerationPlan) -> SvcgenResult<(Vec<PathBuf>, Vec<PathBuf>)> {
        validator::validate_plan(plan)?;

        self.sink.create_dir_all(plan.root())?;

        let mut written = Vec::with_capacity(plan.file_count());
        let mut overwritten = Vec::new();

        for file in plan.files() {
            let path = plan.target_path(file);

            if let Some(parent) = path.parent() {
                self.sink.create_dir_all(parent)?;
            }

            let existed = self.sink.exists(&path);
            if existed {
                warn!(path = %path.display(), "Overwriting existing file");
            }

            self.sink.write_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size(), "File written");

            if existed {
                overwritten.push(path.clone());
            }
            written.push(path);
        }

        Ok((written, overwritten))
    }
}
