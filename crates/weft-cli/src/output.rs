//! Output formatting for the CLI.

use colored::*;
use std::path::Path;
use weft_extractor::BatchReport;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format the end-of-run summary.
    pub fn report(&self, report: &BatchReport, output: &Path) -> String {
        let mut lines = vec![self.success(&format!(
            "Extraction complete. Results saved to '{}'",
            output.display()
        ))];

        lines.push(format!("  {} records", report.total));
        lines.push(format!(
            "  {} extracted",
            self.colorize(&report.extracted.to_string(), "green")
        ));
        if report.raw_output > 0 {
            lines.push(self.warning(&format!(
                "{} kept as raw output (not valid JSON)",
                report.raw_output
            )));
        }
        if report.errors > 0 {
            lines.push(self.error(&format!("{} failed (see 'error' field)", report.errors)));
        }

        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
