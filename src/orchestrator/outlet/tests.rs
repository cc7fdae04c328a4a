#[cfg(test)]
mod tests {
    use crate::orchestrator::outlet::{DiskOutlet, Outlet};
    use crate::orchestrator::report::ReportFormatter;
    use crate::orchestrator::types::{IntentRecord, QueryType, SearchReport, TaskResult};
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn test_report(hour: u32) -> SearchReport {
        let intent = IntentRecord {
            query_type: QueryType::ResourceFinding,
            industry: "agriculture".to_string(),
            location: Some("Peoria".to_string()),
            specific_need: "organic seed suppliers near Peoria".to_string(),
        };
        let results = vec![TaskResult {
            role_name: "Agriculture Resource Specialist".to_string(),
            output: "supplier list".to_string(),
        }];
        let generated_at = Local.with_ymd_and_hms(2025, 3, 14, hour, 0, 0).unwrap();
        ReportFormatter::render(
            "organic seed suppliers near Peoria",
            &intent,
            results,
            generated_at,
        )
    }

    #[tokio::test]
    async fn test_save_writes_both_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let outlet = DiskOutlet::new(temp_dir.path().to_path_buf());

        let report = test_report(9);
        let paths = outlet.save(&report).await.unwrap();

        assert!(paths.report_path.exists());
        assert!(paths.raw_path.exists());

        let markdown = std::fs::read_to_string(&paths.report_path).unwrap();
        assert!(markdown.contains("# Business Intelligence Report"));

        let raw = std::fs::read_to_string(&paths.raw_path).unwrap();
        assert!(raw.contains("=== Agriculture Resource Specialist ==="));
    }

    #[tokio::test]
    async fn test_save_filenames_use_slug_and_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let outlet = DiskOutlet::new(temp_dir.path().to_path_buf());

        let report = test_report(9);
        let paths = outlet.save(&report).await.unwrap();

        let report_name = paths.report_path.file_name().unwrap().to_string_lossy();
        assert_eq!(
            report_name,
            "organic_seed_suppliers_near_Peoria_20250314_090000.md"
        );

        let raw_name = paths.raw_path.file_name().unwrap().to_string_lossy();
        assert_eq!(
            raw_name,
            "organic_seed_suppliers_near_Peoria_20250314_090000_raw.txt"
        );
    }

    #[tokio::test]
    async fn test_reruns_do_not_overwrite_prior_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let outlet = DiskOutlet::new(temp_dir.path().to_path_buf());

        let first = outlet.save(&test_report(9)).await.unwrap();
        let second = outlet.save(&test_report(10)).await.unwrap();

        assert_ne!(first.report_path, second.report_path);
        assert!(first.report_path.exists());
        assert!(second.report_path.exists());
    }

    #[tokio::test]
    async fn test_save_creates_missing_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("results");
        let outlet = DiskOutlet::new(nested.clone());

        outlet.save(&test_report(9)).await.unwrap();
        assert!(nested.exists());
    }
}
