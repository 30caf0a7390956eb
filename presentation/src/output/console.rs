//! Console output formatter for normalization reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use disjunct_domain::NormalizationReport;

/// Formats normalization reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &NormalizationReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Strategy:".cyan().bold(), report.repr));
        output.push_str(&format!(
            "{} depth {}, {} leaves\n",
            "Input:".cyan().bold(),
            report.input_depth,
            report.input_leaf_count
        ));

        output.push_str(&Self::section_header(&format!(
            "Alternatives ({})",
            report.alternative_count()
        )));
        let width = report.alternative_count().to_string().len();
        for (i, alternative) in report.alternatives.iter().enumerate() {
            output.push_str(&format!("  {:>width$}. {}\n", i + 1, alternative, width = width));
        }

        if let Some(branches) = &report.branches {
            output.push_str(&Self::section_header(&format!("Branches ({})", branches.len())));
            for branch in branches {
                output.push_str(&format!("  * {}\n", branch));
            }
        }

        if report.is_empty {
            output.push_str(&format!(
                "\n{}\n",
                "Warning: this strategy can never produce a value".yellow().bold()
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(report: &NormalizationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the normalized repr only
    pub fn format_repr(report: &NormalizationReport) -> String {
        report.repr.clone()
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &NormalizationReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &NormalizationReport) -> String {
        Self::format_json(report)
    }

    fn format_repr(&self, report: &NormalizationReport) -> String {
        Self::format_repr(report)
    }
}
