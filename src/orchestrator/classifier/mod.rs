//! 查询分类器 - 将自由文本查询归类为结构化的意图记录

use regex::Regex;
use std::sync::OnceLock;

use crate::orchestrator::types::{IntentRecord, QueryType};

/// 问题求解类关键词
const PROBLEM_SOLVING_KEYWORDS: [&str; 5] =
    ["find", "help me", "solutions", "consultants", "services"];

/// 趋势分析类关键词
const TREND_ANALYSIS_KEYWORDS: [&str; 5] =
    ["trends", "emerging", "latest", "innovations", "technologies"];

/// 资源寻找类关键词
const RESOURCE_FINDING_KEYWORDS: [&str; 5] =
    ["suppliers", "vendors", "sources", "dealers", "providers"];

/// 合规类关键词
const COMPLIANCE_KEYWORDS: [&str; 4] = ["compliance", "regulations", "legal", "certification"];

/// 餐饮行业关键词
const RESTAURANT_KEYWORDS: [&str; 5] =
    ["restaurant", "food service", "dining", "chef", "kitchen"];

/// 农业行业关键词
const AGRICULTURE_KEYWORDS: [&str; 6] = ["farm", "agriculture", "crop", "soil", "organic", "seed"];

/// 地理位置提取模式，按优先级排列
const LOCATION_PATTERNS: [&str; 3] = [
    r"(?i)\bin\s+(\w+(?:\s+\w+)*?)(?:\s|$)",
    r"(?i)\bnear\s+(\w+(?:\s+\w+)*?)(?:\s|$)",
    r"(?i)\baround\s+(\w+(?:\s+\w+)*?)(?:\s|$)",
];

fn location_regexes() -> &'static Vec<Regex> {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        LOCATION_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("location pattern is a valid regex"))
            .collect()
    })
}

/// 查询分类器。纯函数式，同一查询永远得到同一意图记录
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryClassifier;

impl QueryClassifier {
    /// 分析查询，返回意图记录。对任何输入都不会失败，
    /// 无法归类的查询回落到general类型
    pub fn classify(&self, query: &str) -> IntentRecord {
        let query_lower = query.to_lowercase();

        IntentRecord {
            query_type: Self::detect_query_type(&query_lower),
            industry: Self::detect_industry(&query_lower),
            location: Self::extract_location(query),
            specific_need: query.to_string(),
        }
    }

    /// 判定查询类型。检查顺序即优先级，关键词重叠时
    /// （例如"find ... solutions"与"find ... suppliers"）先命中的规则胜出
    fn detect_query_type(query_lower: &str) -> QueryType {
        if contains_any(query_lower, &PROBLEM_SOLVING_KEYWORDS) {
            QueryType::ProblemSolving
        } else if contains_any(query_lower, &TREND_ANALYSIS_KEYWORDS) {
            QueryType::TrendAnalysis
        } else if contains_any(query_lower, &RESOURCE_FINDING_KEYWORDS) {
            QueryType::ResourceFinding
        } else if contains_any(query_lower, &COMPLIANCE_KEYWORDS) {
            QueryType::Compliance
        } else {
            QueryType::General
        }
    }

    /// 识别行业标签，无法识别时返回空字符串
    fn detect_industry(query_lower: &str) -> String {
        if contains_any(query_lower, &RESTAURANT_KEYWORDS) {
            "restaurant".to_string()
        } else if contains_any(query_lower, &AGRICULTURE_KEYWORDS) {
            "agriculture".to_string()
        } else {
            String::new()
        }
    }

    /// 从原始查询中提取地理位置，保留原始大小写
    fn extract_location(query: &str) -> Option<String> {
        for regex in location_regexes() {
            if let Some(captures) = regex.captures(query)
                && let Some(matched) = captures.get(1)
            {
                return Some(matched.as_str().to_string());
            }
        }
        None
    }
}

fn contains_any(query_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| query_lower.contains(keyword))
}

// Include tests
#[cfg(test)]
mod tests;
