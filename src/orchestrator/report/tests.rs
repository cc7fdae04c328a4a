#[cfg(test)]
mod tests {
    use crate::orchestrator::report::ReportFormatter;
    use crate::orchestrator::types::{IntentRecord, QueryType, TaskResult};
    use chrono::{Local, TimeZone};

    fn test_intent() -> IntentRecord {
        IntentRecord {
            query_type: QueryType::ProblemSolving,
            industry: "restaurant".to_string(),
            location: Some("Peoria".to_string()),
            specific_need: "Find restaurant staffing solutions in Peoria".to_string(),
        }
    }

    fn test_results() -> Vec<TaskResult> {
        vec![
            TaskResult {
                role_name: "Restaurant Problem Analyst".to_string(),
                output: "analysis body".to_string(),
            },
            TaskResult {
                role_name: "Restaurant Solution Researcher".to_string(),
                output: "research body".to_string(),
            },
            TaskResult {
                role_name: "ROI and Success Validator".to_string(),
                output: "validation body".to_string(),
            },
            TaskResult {
                role_name: "Implementation Strategist".to_string(),
                output: "strategy body\n1. We recommend starting with agency A".to_string(),
            },
        ]
    }

    fn generated_at() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_report_header_echoes_query() {
        let report = ReportFormatter::render(
            "Find restaurant staffing solutions in Peoria",
            &test_intent(),
            test_results(),
            generated_at(),
        );

        assert!(report.markdown.starts_with("# Business Intelligence Report"));
        assert!(
            report
                .markdown
                .contains("**Query:** Find restaurant staffing solutions in Peoria")
        );
        assert!(report.markdown.contains("**Generated:** 2025-03-14 09:30:00"));
    }

    #[test]
    fn test_query_analysis_table() {
        let report = ReportFormatter::render(
            "Find restaurant staffing solutions in Peoria",
            &test_intent(),
            test_results(),
            generated_at(),
        );

        assert!(report.markdown.contains("## Query Analysis"));
        assert!(report.markdown.contains("| Query Type | problem_solving |"));
        assert!(report.markdown.contains("| Industry | restaurant |"));
        assert!(report.markdown.contains("| Location | Peoria |"));
    }

    #[test]
    fn test_one_section_per_role_in_execution_order() {
        let report = ReportFormatter::render(
            "Find restaurant staffing solutions in Peoria",
            &test_intent(),
            test_results(),
            generated_at(),
        );

        let analyst = report.markdown.find("## Restaurant Problem Analyst").unwrap();
        let researcher = report
            .markdown
            .find("## Restaurant Solution Researcher")
            .unwrap();
        let validator = report.markdown.find("## ROI and Success Validator").unwrap();
        let strategist = report.markdown.find("## Implementation Strategist").unwrap();

        assert!(analyst < researcher);
        assert!(researcher < validator);
        assert!(validator < strategist);
        assert!(report.markdown.contains("analysis body"));
    }

    #[test]
    fn test_closing_section_synthesized_from_final_role() {
        let report = ReportFormatter::render(
            "Find restaurant staffing solutions in Peoria",
            &test_intent(),
            test_results(),
            generated_at(),
        );

        let closing = report.markdown.find("## Summary & Next Steps").unwrap();
        let strategist = report.markdown.find("## Implementation Strategist").unwrap();
        assert!(strategist < closing);

        // 概要与要点取自最后一个角色的产出
        let closing_body = &report.markdown[closing..];
        assert!(closing_body.contains("strategy body"));
        assert!(closing_body.contains("1. We recommend starting with agency A"));
    }

    #[test]
    fn test_empty_intent_fields_render_as_dash() {
        let intent = IntentRecord {
            query_type: QueryType::General,
            industry: String::new(),
            location: None,
            specific_need: "hello world".to_string(),
        };
        let report = ReportFormatter::render("hello world", &intent, vec![], generated_at());

        assert!(report.markdown.contains("| Industry | - |"));
        assert!(report.markdown.contains("| Location | - |"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first = ReportFormatter::render(
            "Find restaurant staffing solutions in Peoria",
            &test_intent(),
            test_results(),
            generated_at(),
        );
        let second = ReportFormatter::render(
            "Find restaurant staffing solutions in Peoria",
            &test_intent(),
            test_results(),
            generated_at(),
        );

        assert_eq!(first.markdown, second.markdown);
        assert_eq!(first.raw_output, second.raw_output);
    }

    #[test]
    fn test_raw_output_concatenates_all_results() {
        let report = ReportFormatter::render(
            "Find restaurant staffing solutions in Peoria",
            &test_intent(),
            test_results(),
            generated_at(),
        );

        assert!(report.raw_output.contains("=== Restaurant Problem Analyst ==="));
        assert!(report.raw_output.contains("analysis body"));
        assert!(report.raw_output.contains("=== Implementation Strategist ==="));
        assert!(report.raw_output.contains("strategy body"));
    }
}
