//! Stdout rendering for command results.
//!
//! `human` decorates status lines with a marker and colour, `plain` prints
//! them verbatim so scripts can match on the text, and `json` leaves only
//! what [`OutputManager::json`] writes.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Write `msg` as is. Suppressed by `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2713}', Style::new().green(), msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status('\u{26a0}', Style::new().yellow(), msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status('\u{2139}', Style::new().blue(), msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.color {
            self.print(&text.style(Style::new().cyan().bold()).to_string())
        } else {
            self.print(text)
        }
    }

    /// Pretty-printed JSON. Written even with `--quiet`.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    fn status(&self, marker: char, style: Style, msg: &str) -> io::Result<()> {
        self.print(&self.status_line(marker, style, msg))
    }

    fn status_line(&self, marker: char, style: Style, msg: &str) -> String {
        match (self.format, self.color) {
            (OutputFormat::Human, true) => format!(
                "{} {}",
                marker.style(style.bold()),
                msg.style(style)
            ),
            (OutputFormat::Human, false) => format!("{marker} {msg}"),
            _ => msg.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(output_format: OutputFormat, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format,
            log_file: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn plain_status_lines_are_verbatim() {
        let out = manager(OutputFormat::Plain, false);
        assert!(!out.supports_color());
        assert_eq!(
            out.status_line('\u{2713}', Style::new().green(), "Generated service 'billing' in apps/billing"),
            "Generated service 'billing' in apps/billing"
        );
    }

    #[test]
    fn human_without_color_keeps_marker() {
        let out = manager(OutputFormat::Human, true);
        assert_eq!(
            out.status_line('\u{26a0}', Style::new().yellow(), "Overwrote main.py"),
            "\u{26a0} Overwrote main.py"
        );
    }

    #[test]
    fn human_with_color_wraps_in_ansi() {
        let out = manager(OutputFormat::Human, false);
        assert!(out.supports_color());
        let line = out.status_line('\u{2713}', Style::new().green(), "done");
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("done"));
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
            log_file: None,
        };
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn json_is_written_in_quiet_mode() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Json,
            log_file: None,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.is_json());
        assert!(out.json(&["main.py", "Dockerfile"]).is_ok());
    }
}
