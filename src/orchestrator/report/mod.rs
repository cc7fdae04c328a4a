//! 报告渲染器 - 将意图记录与任务产出渲染为结构化markdown报告

use chrono::{DateTime, Local};

use crate::orchestrator::types::{IntentRecord, SearchReport, TaskResult};

/// 报告渲染器。相同输入永远渲染出相同报告，
/// 时间戳由调用方传入而不是在渲染过程中读取时钟
pub struct ReportFormatter;

impl ReportFormatter {
    /// 渲染最终报告，包括markdown与原始任务产出两种形态
    pub fn render(
        query: &str,
        intent: &IntentRecord,
        results: Vec<TaskResult>,
        generated_at: DateTime<Local>,
    ) -> SearchReport {
        let markdown = Self::render_markdown(query, intent, &results, generated_at);
        let raw_output = Self::render_raw(&results);

        SearchReport {
            query: query.to_string(),
            intent: intent.clone(),
            results,
            markdown,
            raw_output,
            generated_at,
        }
    }

    fn render_markdown(
        query: &str,
        intent: &IntentRecord,
        results: &[TaskResult],
        generated_at: DateTime<Local>,
    ) -> String {
        let mut markdown = String::new();

        markdown.push_str("# Business Intelligence Report\n\n");
        markdown.push_str(&format!(
            "**Generated:** {}\n",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        markdown.push_str(&format!("**Query:** {}\n\n", query));

        markdown.push_str("## Query Analysis\n\n");
        markdown.push_str("| Field | Value |\n");
        markdown.push_str("|---|---|\n");
        markdown.push_str(&format!("| Query Type | {} |\n", intent.query_type));
        markdown.push_str(&format!(
            "| Industry | {} |\n",
            if intent.industry.is_empty() {
                "-"
            } else {
                intent.industry.as_str()
            }
        ));
        markdown.push_str(&format!(
            "| Location | {} |\n\n",
            intent.location.as_deref().unwrap_or("-")
        ));

        for result in results {
            markdown.push_str(&format!("## {}\n\n{}\n\n", result.role_name, result.output));
        }

        markdown.push_str("## Summary & Next Steps\n\n");
        if let Some(last) = results.last() {
            markdown.push_str(&Self::extract_summary(&last.output));
            markdown.push_str("\n\n");
            markdown.push_str(&Self::extract_takeaways(&last.output));
            markdown.push_str("\n\n");
        }
        markdown.push_str("1. Review the findings and identify top solutions/opportunities\n");
        markdown.push_str("2. Use provided contact information to reach out\n");
        markdown.push_str("3. Implement evaluation criteria before making decisions\n");
        markdown.push_str("4. Track results against projected ROI/benefits\n\n");

        markdown.push_str("---\n\n*Report generated by bizscout-rs*\n");

        markdown
    }

    fn render_raw(results: &[TaskResult]) -> String {
        results
            .iter()
            .map(|result| format!("=== {} ===\n{}\n", result.role_name, result.output))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 从最终角色产出中提取概要：前10行中最多3行非标题内容
    fn extract_summary(output: &str) -> String {
        let mut summary_lines = Vec::new();
        for line in output.lines().take(10) {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                summary_lines.push(trimmed.to_string());
            }
            if summary_lines.len() >= 3 {
                break;
            }
        }

        if summary_lines.is_empty() {
            "Analysis complete. See detailed findings above.".to_string()
        } else {
            summary_lines.join("\n")
        }
    }

    /// 从最终角色产出中提取要点：带建议措辞的列表行，最多5条
    fn extract_takeaways(output: &str) -> String {
        const ADVICE_MARKERS: [&str; 4] = ["recommend", "suggest", "consider", "important"];

        let mut takeaways: Vec<String> = output
            .lines()
            .map(str::trim)
            .filter(|line| is_list_line(line))
            .filter(|line| {
                let lowered = line.to_lowercase();
                ADVICE_MARKERS.iter().any(|marker| lowered.contains(marker))
            })
            .map(str::to_string)
            .collect();
        takeaways.truncate(5);

        if takeaways.is_empty() {
            takeaways = vec![
                "- Multiple findings identified with supporting evidence".to_string(),
                "- Follow-up strategies provided for each option".to_string(),
                "- Contact information included where available".to_string(),
            ];
        }

        takeaways.join("\n")
    }
}

/// 是否是列表行：编号（"1."）或项目符号（"•"、"-"）开头
fn is_list_line(line: &str) -> bool {
    if line.starts_with('•') || line.starts_with('-') {
        return true;
    }
    let digits: String = line.chars().take_while(|c| c.is_ascii_digit()).collect();
    !digits.is_empty() && line[digits.len()..].starts_with('.')
}

// Include tests
#[cfg(test)]
mod tests;
