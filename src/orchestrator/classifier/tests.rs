#[cfg(test)]
mod tests {
    use crate::orchestrator::classifier::QueryClassifier;
    use crate::orchestrator::types::QueryType;

    #[test]
    fn test_problem_solving_keywords() {
        let classifier = QueryClassifier;

        let intent = classifier.classify("Find restaurant staffing solutions in Peoria");
        assert_eq!(intent.query_type, QueryType::ProblemSolving);

        let intent = classifier.classify("I need help me with food waste");
        assert_eq!(intent.query_type, QueryType::ProblemSolving);

        let intent = classifier.classify("recommend consultants for my farm");
        assert_eq!(intent.query_type, QueryType::ProblemSolving);
    }

    #[test]
    fn test_trend_analysis_keywords() {
        let classifier = QueryClassifier;

        let intent = classifier.classify("What are emerging precision agriculture technologies?");
        assert_eq!(intent.query_type, QueryType::TrendAnalysis);

        let intent = classifier.classify("trends in kitchen automation");
        assert_eq!(intent.query_type, QueryType::TrendAnalysis);
    }

    #[test]
    fn test_resource_finding_keywords() {
        let classifier = QueryClassifier;

        let intent = classifier.classify("organic seed suppliers near Peoria");
        assert_eq!(intent.query_type, QueryType::ResourceFinding);

        let intent = classifier.classify("equipment vendors for my kitchen");
        assert_eq!(intent.query_type, QueryType::ResourceFinding);
    }

    #[test]
    fn test_compliance_keywords() {
        let classifier = QueryClassifier;

        let intent = classifier.classify("health code regulations for dining rooms");
        assert_eq!(intent.query_type, QueryType::Compliance);

        let intent = classifier.classify("restaurant compliance checklist");
        assert_eq!(intent.query_type, QueryType::Compliance);
    }

    #[test]
    fn test_priority_order_on_overlapping_keywords() {
        let classifier = QueryClassifier;

        // "find"（problem_solving）先于"suppliers"（resource_finding）被检查
        let intent = classifier.classify("find organic seed suppliers near Peoria");
        assert_eq!(intent.query_type, QueryType::ProblemSolving);

        // "latest"（trend_analysis）先于"vendors"（resource_finding）被检查
        let intent = classifier.classify("latest offerings from equipment vendors");
        assert_eq!(intent.query_type, QueryType::TrendAnalysis);
    }

    #[test]
    fn test_unclassifiable_query_falls_back_to_general() {
        let classifier = QueryClassifier;

        let intent = classifier.classify("hello world");
        assert_eq!(intent.query_type, QueryType::General);
        assert_eq!(intent.industry, "");
        assert!(intent.location.is_none());
    }

    #[test]
    fn test_industry_detection() {
        let classifier = QueryClassifier;

        let intent = classifier.classify("Find restaurant staffing solutions in Peoria");
        assert_eq!(intent.industry, "restaurant");

        let intent = classifier.classify("crop rotation consultants");
        assert_eq!(intent.industry, "agriculture");

        let intent = classifier.classify("find software consultants");
        assert_eq!(intent.industry, "");
    }

    #[test]
    fn test_location_extraction() {
        let classifier = QueryClassifier;

        let intent = classifier.classify("Find restaurant staffing solutions in Peoria");
        assert_eq!(intent.location.as_deref(), Some("Peoria"));

        let intent = classifier.classify("organic seed suppliers near Springfield");
        assert_eq!(intent.location.as_deref(), Some("Springfield"));

        let intent = classifier.classify("dining options around Chicago");
        assert_eq!(intent.location.as_deref(), Some("Chicago"));

        let intent = classifier.classify("find staffing consultants");
        assert!(intent.location.is_none());
    }

    #[test]
    fn test_classifier_is_deterministic() {
        let classifier = QueryClassifier;
        let query = "Find restaurant staffing solutions in Peoria";

        let first = classifier.classify(query);
        let second = classifier.classify(query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_specific_need_preserves_raw_query() {
        let classifier = QueryClassifier;
        let query = "Find restaurant staffing solutions in Peoria";

        let intent = classifier.classify(query);
        assert_eq!(intent.specific_need, query);
    }
}
