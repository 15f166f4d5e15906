//! Console output formatter for job reports

use colored::Colorize;
use jobshift_application::AnalyzeJobError;
use jobshift_domain::{OutputFormat, Report};

/// Formats reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render in the requested format
    pub fn render(report: &Report, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// Format the complete report, sections in display order
    pub fn format(report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI Transformation Report"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Job Title:".cyan().bold(),
            report.job_title()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Generated:".cyan().bold(),
            report.generated_at().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        for (section, text) in report.sections() {
            output.push_str(&Self::section_header(section.title()));
            output.push('\n');
            output.push_str(text.trim_end());
            output.push('\n');
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON: title, timestamp and the section map
    pub fn format_json(report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line error summary naming the failed stage
    pub fn format_error(err: &AnalyzeJobError) -> String {
        match err.failed_stage() {
            Some(stage) if err.is_cancelled() => format!(
                "{} cancelled during: {}",
                "Analysis".yellow().bold(),
                stage.display_name()
            ),
            Some(stage) => format!(
                "{} {}\n  {}",
                "Failed while".red().bold(),
                stage.display_name().to_lowercase(),
                err
            ),
            None => format!("{} {}", "Error:".red().bold(), err),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobshift_domain::{ContextKey, DomainError, JobTitle, PromptContext, Stage};

    fn report() -> Report {
        let title = JobTitle::try_new("Accountant").unwrap();
        let mut ctx = PromptContext::new(&title);
        ctx.insert(ContextKey::JobDescription, "DESC").unwrap();
        ctx.insert(ContextKey::MissionsTasks, "MISSIONS").unwrap();
        ctx.insert(ContextKey::TechRecommendations, "TECH").unwrap();
        ctx.insert(ContextKey::AiEnhancements, "AI").unwrap();
        ctx.insert(ContextKey::TransitionPlan, "PLAN").unwrap();
        Report::from_context(&ctx).unwrap()
    }

    #[test]
    fn test_full_format_keeps_display_order() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&report());

        assert!(output.contains("Job Title: Accountant"));
        let positions: Vec<usize> = [
            "Job Description",
            "Missions, Deliverables & Tasks",
            "Technology Recommendations",
            "AI Augmentation Opportunities",
            "Transition to AI-Augmented Role",
        ]
        .iter()
        .map(|title| output.find(title).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(output.contains("Transition to AI-Augmented Role\n----------------------------------------\nPLAN"));
    }

    #[test]
    fn test_json_format_has_five_sections() {
        let json = ConsoleFormatter::render(&report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let map = value["sections"].as_object().unwrap();

        assert_eq!(value["job_title"], "Accountant");
        assert_eq!(map.len(), 5);
        assert_eq!(map["job_desc"], "DESC");
        assert_eq!(map["transition_plan"], "PLAN");
    }

    #[test]
    fn test_format_error_names_stage() {
        colored::control::set_override(false);

        let cancelled = ConsoleFormatter::format_error(&AnalyzeJobError::Cancelled(Stage::EnhancingAi));
        assert!(cancelled.contains("Identifying AI enhancements"));

        let invalid = ConsoleFormatter::format_error(&AnalyzeJobError::InvalidTitle(
            DomainError::InvalidJobTitle("".into()),
        ));
        assert!(invalid.starts_with("Error:"));
    }
}
