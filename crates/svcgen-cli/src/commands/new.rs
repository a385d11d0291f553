//! Implementation of the `svcgen new` command.
//!
//! Responsibility: translate CLI arguments and configuration into a
//! `GenerationRequest`, call the core generate service, and display results.
//! No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use svcgen_adapters::{BuiltinBlueprint, LocalFileSink};
use svcgen_core::{
    application::{GenerateService, GenerationReport, GenerationRequest},
    domain::{GenerationPlan, NamePolicy},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `svcgen new` command.
///
/// Dispatch sequence:
/// 1. Merge flags over configuration into a request
/// 2. Early-exit with a plan if `--dry-run`
/// 3. Generate through `GenerateService`
/// 4. Print the summary and next steps
#[instrument(skip_all, fields(service = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config)?;

    debug!(
        policy = %request.policy(),
        apps_dir = %request.apps_dir().display(),
        namespace = %request.settings().namespace,
        "Request resolved"
    );

    let service = GenerateService::new(
        Box::new(BuiltinBlueprint::new()),
        Box::new(LocalFileSink::new()),
    );

    if args.dry_run {
        let plan = service.plan(&request)?;
        return show_plan(&plan, &output);
    }

    let report = service.generate(&request)?;
    show_report(&report, &output)
}

// ── Request construction ──────────────────────────────────────────────────────

fn build_request(args: &NewArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let mut settings = config.cluster.clone();
    if let Some(namespace) = &args.namespace {
        settings.namespace = namespace.clone();
    }
    if let Some(domain) = &args.domain {
        settings.domain = domain.clone();
    }
    if let Some(registry) = &args.registry {
        settings.image_registry = registry.clone();
    }
    if let Some(port) = args.port {
        settings.container_port = port;
    }

    let apps_dir = args
        .apps_dir
        .clone()
        .unwrap_or_else(|| config.generation.apps_dir.clone());
    if apps_dir.as_os_str().is_empty() {
        return Err(CliError::InvalidInput {
            message: "--apps-dir cannot be empty".into(),
        });
    }

    let policy = if args.permissive {
        NamePolicy::Permissive
    } else {
        config.generation.name_policy
    };

    Ok(GenerationRequest::new(args.name.as_str())
        .with_policy(policy)
        .with_settings(settings)
        .with_apps_dir(apps_dir))
}

// ── Presentation ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct PlannedFile {
    path: PathBuf,
    bytes: usize,
}

fn show_plan(plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    let files: Vec<_> = plan
        .files()
        .map(|f| PlannedFile {
            path: plan.target_path(f),
            bytes: f.size(),
        })
        .collect();

    if output.is_json() {
        output.json(&files)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would write {} files to {}",
        files.len(),
        plan.root().display(),
    ))?;
    for file in &files {
        output.print(&format!("  {} ({} bytes)", file.path.display(), file.bytes))?;
    }
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    for path in &report.overwritten {
        output.warning(&format!("Overwrote {}", path.display()))?;
    }

    output.success(&report.summary())?;
    output.print("Next steps:")?;
    for line in report.next_steps() {
        output.print(&format!("  {line}"))?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
