//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "svcgen",
    bin_name = "svcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a FastAPI service with its Kubernetes manifests",
    long_about = "svcgen writes a ready-to-deploy service skeleton under \
                  apps/<name>/: a FastAPI app, its pyproject.toml and \
                  Dockerfile, and the Deployment/Service/Ingress and \
                  ExternalSecret manifests for the homelab cluster.",
    after_help = "EXAMPLES:\n\
        \x20 svcgen new billing\n\
        \x20 svcgen new ledger --namespace payments --domain example.org\n\
        \x20 svcgen list\n\
        \x20 svcgen completions bash > /usr/share/bash-completion/completions/svcgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new service.
    #[command(
        visible_aliases = ["generate", "g"],
        about = "Generate a new service",
        after_help = "EXAMPLES:\n\
            \x20 svcgen new billing\n\
            \x20 svcgen new billing --dry-run\n\
            \x20 svcgen new billing --apps-dir services --port 9000\n\
            \x20 svcgen new Legacy_Name --permissive"
    )]
    New(NewArgs),

    /// List the files every generated service receives.
    #[command(
        visible_alias = "ls",
        about = "List generated files",
        after_help = "EXAMPLES:\n\
            \x20 svcgen list\n\
            \x20 svcgen list --format json"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 svcgen init\n\
            \x20 svcgen init --force\n\
            \x20 svcgen --config ./svcgen.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 svcgen completions bash > ~/.local/share/bash-completion/completions/svcgen\n\
            \x20 svcgen completions zsh  > ~/.zfunc/_svcgen\n\
            \x20 svcgen completions fish > ~/.config/fish/completions/svcgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 svcgen config get cluster.namespace\n\
            \x20 svcgen config list\n\
            \x20 svcgen config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `svcgen new`.
///
/// Cluster flags override the `[cluster]` section of the configuration for
/// this run only.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Service name.  Becomes the directory, image, hostname and object names.
    #[arg(value_name = "NAME", help = "Service name")]
    pub name: String,

    /// Directory services are generated under.
    #[arg(
        short = 'd',
        long = "apps-dir",
        value_name = "DIR",
        help = "Directory to generate into (default: apps)"
    )]
    pub apps_dir: Option<PathBuf>,

    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "NAMESPACE",
        help = "Kubernetes namespace"
    )]
    pub namespace: Option<String>,

    #[arg(
        long = "domain",
        value_name = "DOMAIN",
        help = "Ingress domain; the host becomes <name>.<domain>"
    )]
    pub domain: Option<String>,

    #[arg(
        long = "registry",
        value_name = "REGISTRY",
        help = "Image registry; the image becomes <registry>/<name>:latest"
    )]
    pub registry: Option<String>,

    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Container port"
    )]
    pub port: Option<u16>,

    /// Accept any name, interpolated verbatim.
    #[arg(
        long = "permissive",
        help = "Skip DNS-label validation of the service name"
    )]
    pub permissive: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `svcgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `svcgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `svcgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `svcgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `cluster.namespace`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
