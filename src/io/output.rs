use crate::core::{AnalysisResult, AnalysisSummary, IssueKind, MaintainabilityRating};
use crate::formatting::{ColoredFormatter, FormattingConfig};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &[AnalysisResult]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &[AnalysisResult]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &[AnalysisResult]) -> anyhow::Result<()> {
        let summary = AnalysisSummary::from_results(results);
        self.write_header()?;
        self.write_summary(&summary)?;
        self.write_file_table(results)?;
        self.write_issues(results)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Code Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &AnalysisSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_summary_row("Files Analyzed", &summary.files_analyzed.to_string())?;
        self.write_summary_row("Failed Files", &summary.failed_files.to_string())?;
        self.write_summary_row("Total Lines", &summary.total_lines.to_string())?;
        self.write_summary_row(
            "Average Complexity",
            &format!("{:.1}", summary.average_complexity),
        )?;
        self.write_summary_row(
            "Average Maintainability",
            &format!("{:.1}%", summary.average_maintainability),
        )?;
        self.write_summary_row("Errors", &summary.errors.to_string())?;
        self.write_summary_row("Warnings", &summary.warnings.to_string())?;
        self.write_summary_row("Suggestions", &summary.suggestions.to_string())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_file_table(&mut self, results: &[AnalysisResult]) -> anyhow::Result<()> {
        if results.is_empty() {
            writeln!(self.writer, "No files analyzed.")?;
            return Ok(());
        }

        writeln!(self.writer, "## Files")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| File | Maintainability | Complexity | Lines | Issues |"
        )?;
        writeln!(
            self.writer,
            "|------|-----------------|------------|-------|--------|"
        )?;
        for result in results {
            let metrics = &result.metrics;
            writeln!(
                self.writer,
                "| {} | {}% ({}) | {} | {} | {} |",
                escape_cell(&result.identifier),
                metrics.maintainability,
                metrics.rating().label(),
                metrics.complexity,
                metrics.lines_of_code,
                metrics.issues.len()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_issues(&mut self, results: &[AnalysisResult]) -> anyhow::Result<()> {
        let with_issues: Vec<_> = results
            .iter()
            .filter(|r| !r.metrics.issues.is_empty())
            .collect();
        if with_issues.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Issues")?;
        writeln!(self.writer)?;
        for result in with_issues {
            writeln!(self.writer, "### {}", result.identifier)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Line | Column | Type | Message |")?;
            writeln!(self.writer, "|------|--------|------|---------|")?;
            for issue in &result.metrics.issues {
                writeln!(
                    self.writer,
                    "| {} | {} | {} | {} |",
                    issue.line,
                    issue.column,
                    issue.kind,
                    escape_cell(&issue.message)
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
        }
    }

    fn badge(&self, result: &AnalysisResult) -> String {
        let text = format!("{}% Maintainable", result.metrics.maintainability);
        match result.metrics.rating() {
            MaintainabilityRating::Good => self.formatter.success(&text),
            MaintainabilityRating::Fair => self.formatter.warning(&text),
            MaintainabilityRating::Poor => self.formatter.error(&text),
        }
    }

    fn kind_label(&self, kind: IssueKind) -> String {
        let label = format!("[{kind}]");
        match kind {
            IssueKind::Error => self.formatter.error(&label),
            IssueKind::Warning => self.formatter.warning(&label),
            IssueKind::Suggestion => self.formatter.info(&label),
        }
    }

    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        let metrics = &result.metrics;
        writeln!(
            self.writer,
            "{}  {}",
            self.formatter.bold(&result.identifier),
            self.badge(result)
        )?;
        writeln!(
            self.writer,
            "  Complexity: {}  Lines of Code: {}  Issues Found: {}",
            metrics.complexity,
            metrics.lines_of_code,
            metrics.issues.len()
        )?;

        if !metrics.issues.is_empty() {
            writeln!(self.writer, "  Issues:")?;
            for issue in &metrics.issues {
                writeln!(
                    self.writer,
                    "    {} {}",
                    self.kind_label(issue.kind),
                    issue.message
                )?;
                writeln!(
                    self.writer,
                    "      {}",
                    self.formatter
                        .dim(&format!("Line {}, Column {}", issue.line, issue.column))
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, results: &[AnalysisResult]) -> anyhow::Result<()> {
        let summary = AnalysisSummary::from_results(results);
        writeln!(
            self.writer,
            "{} {} files analyzed, {} failed, {} issues ({} errors, {} warnings, {} suggestions)",
            self.formatter.bold("Summary:"),
            summary.files_analyzed,
            summary.failed_files,
            summary.total_issues(),
            summary.errors,
            summary.warnings,
            summary.suggestions
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &[AnalysisResult]) -> anyhow::Result<()> {
        if results.is_empty() {
            writeln!(self.writer, "No files analyzed")?;
            writeln!(
                self.writer,
                "{}",
                self.formatter.dim("Select files to begin code analysis")
            )?;
            return Ok(());
        }

        writeln!(self.writer, "{}", self.formatter.header("Code Analysis"))?;
        writeln!(self.writer, "{}", self.formatter.header("============="))?;
        writeln!(self.writer)?;
        for result in results {
            self.write_result(result)?;
        }
        self.write_summary(results)?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::analyze;

    fn sample_results() -> Vec<AnalysisResult> {
        vec![
            analyze("if (a) {\n  console.log(a);\n}", "src/app.ts"),
            AnalysisResult::acquisition_failure("missing.ts", "not found"),
        ]
    }

    fn render(mut writer: impl OutputWriter, results: &[AnalysisResult]) {
        writer.write_results(results).unwrap();
    }

    #[test]
    fn test_output_format_names() {
        let format: OutputFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
        assert_eq!(OutputFormat::default(), OutputFormat::Terminal);
    }

    #[test]
    fn test_json_writer_emits_array() {
        let mut buffer = Vec::new();
        render(JsonWriter::new(&mut buffer), &sample_results());

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["filePath"], "src/app.ts");
        assert_eq!(entries[0]["metrics"]["linesOfCode"], 3);
        assert_eq!(entries[1]["metrics"]["issues"][0]["type"], "error");
    }

    #[test]
    fn test_terminal_writer_plain() {
        let mut buffer = Vec::new();
        render(
            TerminalWriter::new(&mut buffer, FormattingConfig::plain()),
            &sample_results(),
        );
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("src/app.ts  "));
        assert!(text.contains("Complexity: 2  Lines of Code: 3  Issues Found: 1"));
        assert!(text.contains("[suggestion] Consider removing console.log statements"));
        assert!(text.contains("Line 2, Column 3"));
        assert!(text.contains("0% Maintainable"));
        assert!(text.contains("[error] Failed to analyze file: not found"));
        assert!(text.contains("1 files analyzed, 1 failed"));
    }

    #[test]
    fn test_terminal_writer_empty() {
        let mut buffer = Vec::new();
        render(TerminalWriter::new(&mut buffer, FormattingConfig::plain()), &[]);
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("No files analyzed\n"));
    }

    #[test]
    fn test_markdown_writer_tables() {
        let mut buffer = Vec::new();
        render(MarkdownWriter::new(&mut buffer), &sample_results());
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Code Analysis Report"));
        assert!(text.contains("| Files Analyzed | 1 |"));
        assert!(text.contains("| Failed Files | 1 |"));
        assert!(text.contains("### src/app.ts"));
        assert!(text.contains("| 2 | 3 | suggestion | Consider removing console.log statements in production code |"));
        assert!(text.contains("### missing.ts"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }
}
