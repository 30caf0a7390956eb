//! Output formatter trait

use disjunct_domain::{NormalizationReport, OutputFormat};

/// Trait for formatting normalization reports
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, report: &NormalizationReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &NormalizationReport) -> String;

    /// Format the normalized repr only (concise output)
    fn format_repr(&self, report: &NormalizationReport) -> String;

    /// Format according to `format`
    fn render(&self, format: OutputFormat, report: &NormalizationReport) -> String {
        match format {
            OutputFormat::Text => self.format(report),
            OutputFormat::Repr => self.format_repr(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
