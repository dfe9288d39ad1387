//! Output Rendering
//!
//! Prints pipeline reports and settings warnings as text or JSON.

use std::path::Path;

use crate::application::{PipelineReport, PipelineStage};
use crate::config::SettingsWarning;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Trait for rendering pipeline reports
pub trait ReportRenderer {
    fn render(&self, command: &str, network_path: &Path, report: &PipelineReport);
}

/// Text renderer for pipeline reports
#[derive(Debug, Default)]
pub struct TextRenderer {
    pub verbose: u8,
}

impl ReportRenderer for TextRenderer {
    fn render(&self, command: &str, network_path: &Path, report: &PipelineReport) {
        print!("{}", format_text(command, network_path, report, self.verbose));
    }
}

fn format_text(command: &str, network_path: &Path, report: &PipelineReport, verbose: u8) -> String {
    let mut out = String::new();
    let status = if report.is_done() { "[OK]" } else { "[..]" };
    out.push_str(&format!("{} {} complete\n\n", status, command));
    out.push_str(&format!("  Network: {}\n", network_path.display()));

    if !report.artifacts.is_empty() {
        out.push_str(&format!("  Written ({}):\n", report.artifacts.len()));
        for artifact in &report.artifacts {
            if verbose > 0 {
                out.push_str(&format!(
                    "    -> {} ({})\n",
                    artifact.path().display(),
                    artifact.hash()
                ));
            } else {
                out.push_str(&format!("    -> {}\n", artifact.path().display()));
            }
        }
    }

    if !report.commands.is_empty() {
        out.push_str(&format!("  Executed ({}):\n", report.commands.len()));
        for command in &report.commands {
            out.push_str(&format!("    $ {}\n", command));
        }
    }

    if verbose > 1 {
        let stages: Vec<String> = report.stages.iter().map(stage_label).collect();
        out.push_str(&format!("  Stages: {}\n", stages.join(" -> ")));
    }
    out
}

fn stage_label(stage: &PipelineStage) -> String {
    serde_json::to_value(stage)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{:?}", stage))
}

/// JSON renderer for pipeline reports
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, command: &str, network_path: &Path, report: &PipelineReport) {
        println!(
            "{}",
            serde_json::to_string_pretty(&report_json(command, network_path, report))
                .unwrap_or_default()
        );
    }
}

fn report_json(command: &str, network_path: &Path, report: &PipelineReport) -> serde_json::Value {
    serde_json::json!({
        "success": report.is_done(),
        "command": command,
        "network_path": network_path.display().to_string(),
        "artifacts": report.artifacts,
        "stages": report.stages,
        "commands": report.commands,
    })
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, verbose: u8) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Print settings warnings to stderr
pub fn print_warnings(warnings: &[SettingsWarning]) {
    for warning in warnings {
        eprintln!("{}", format_warning(warning));
    }
}

fn format_warning(warning: &SettingsWarning) -> String {
    let mut message = format!(
        "warning: unknown key '{}' in {}",
        warning.key,
        warning.file.display()
    );
    if let Some(line) = warning.line {
        message.push_str(&format!(":{}", line));
    }
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    message
}

/// Print a failure in the selected format
pub fn print_error(format: OutputFormat, error: &anyhow::Error) {
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "success": false,
                "error": format!("{:#}", error),
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => eprintln!("Error: {:#}", error),
    }
}
