//! 智能体组队器 - 按查询类型装配固定顺序的角色链

use std::collections::HashMap;

use crate::orchestrator::types::{IntentRecord, OrchestratorError, QueryType, RoleDefinition};

/// 角色模板。`{Industry}`与`{industry}`占位符在装配时
/// 分别替换为标题格式与小写的行业标签
pub struct RoleSpec {
    name: &'static str,
    goal: &'static str,
    backstory: &'static str,
    uses_search: bool,
}

impl RoleSpec {
    const fn new(
        name: &'static str,
        goal: &'static str,
        backstory: &'static str,
        uses_search: bool,
    ) -> Self {
        Self {
            name,
            goal,
            backstory,
            uses_search,
        }
    }

    fn instantiate(&self, industry_title: &str, industry_lower: &str) -> RoleDefinition {
        let fill = |template: &str| {
            template
                .replace("{Industry}", industry_title)
                .replace("{industry}", industry_lower)
        };
        RoleDefinition {
            name: fill(self.name),
            goal: fill(self.goal),
            backstory: fill(self.backstory),
            uses_search: self.uses_search,
        }
    }
}

/// 智能体组队器。注册表在构造时建立，运行期只读
pub struct TeamConfigurator {
    registry: HashMap<QueryType, Vec<RoleSpec>>,
}

impl Default for TeamConfigurator {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamConfigurator {
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
        }
    }

    /// 使用自定义注册表构造，用于测试契约失效路径
    pub fn with_registry(registry: HashMap<QueryType, Vec<RoleSpec>>) -> Self {
        Self { registry }
    }

    /// 按意图装配角色链。注册表缺失查询类型是契约违反，
    /// 必须显式失败而不是静默回落
    pub fn assemble(&self, intent: &IntentRecord) -> Result<Vec<RoleDefinition>, OrchestratorError> {
        let specs = self.registry.get(&intent.query_type).ok_or(
            OrchestratorError::Configuration {
                query_type: intent.query_type,
            },
        )?;

        let industry_lower = if intent.industry.is_empty() {
            "business".to_string()
        } else {
            intent.industry.clone()
        };
        let industry_title = title_case(&industry_lower);

        Ok(specs
            .iter()
            .map(|spec| spec.instantiate(&industry_title, &industry_lower))
            .collect())
    }
}

/// 各查询类型对应的角色链。顺序即执行顺序
fn default_registry() -> HashMap<QueryType, Vec<RoleSpec>> {
    HashMap::from([
        (
            QueryType::ProblemSolving,
            vec![
                RoleSpec::new(
                    "{Industry} Problem Analyst",
                    "Deeply understand the specific problem and its impact on {industry} businesses",
                    "You are an expert in {industry} operations who understands the real pain points and their cascading effects on business success.",
                    false,
                ),
                RoleSpec::new(
                    "{Industry} Solution Researcher",
                    "Find proven solutions, consultants, and services that address the specific problem",
                    "You know every solution provider in the {industry} space and can identify which ones actually deliver results.",
                    true,
                ),
                RoleSpec::new(
                    "ROI and Success Validator",
                    "Find concrete evidence of success, ROI metrics, and implementation timelines",
                    "You dig deep to find real results and can distinguish between marketing claims and actual business impact.",
                    true,
                ),
                RoleSpec::new(
                    "Implementation Strategist",
                    "Create actionable implementation plans with contacts, templates, and timelines",
                    "You understand how {industry} businesses actually work and can create realistic implementation strategies.",
                    true,
                ),
            ],
        ),
        (
            QueryType::TrendAnalysis,
            vec![
                RoleSpec::new(
                    "{Industry} Trend Researcher",
                    "Identify emerging trends, technologies, and innovations in the {industry} sector",
                    "You track every innovation and trend in the {industry} space, from early adopters to mainstream movements.",
                    true,
                ),
                RoleSpec::new(
                    "Business Impact Analyst",
                    "Analyze how trends affect business operations, costs, and competitive advantage",
                    "You understand the practical implications of trends and can predict their business impact.",
                    true,
                ),
                RoleSpec::new(
                    "Adoption Strategy Expert",
                    "Create strategies for adopting trends with timelines, costs, and implementation steps",
                    "You help {industry} businesses successfully adopt new trends without disrupting operations.",
                    false,
                ),
            ],
        ),
        (
            QueryType::ResourceFinding,
            vec![
                RoleSpec::new(
                    "{Industry} Resource Specialist",
                    "Find suppliers, vendors, and service providers for {industry} businesses",
                    "You have comprehensive knowledge of {industry} suppliers and can match businesses with the right providers.",
                    true,
                ),
                RoleSpec::new(
                    "Vendor Evaluation Expert",
                    "Evaluate vendors on quality, pricing, reliability, and customer satisfaction",
                    "You can assess vendor capabilities and identify the best options for specific business needs.",
                    true,
                ),
            ],
        ),
        (
            QueryType::Compliance,
            vec![
                RoleSpec::new(
                    "{Industry} Regulatory Researcher",
                    "Identify the regulations, licenses, and certification requirements that apply to {industry} businesses",
                    "You follow every regulatory change in the {industry} space and know which rules actually apply to a given operation.",
                    true,
                ),
                RoleSpec::new(
                    "Compliance Gap Analyst",
                    "Assess where the business falls short of the applicable requirements and rank the gaps by risk",
                    "You have audited hundreds of {industry} operations and can separate paperwork issues from license-threatening violations.",
                    true,
                ),
                RoleSpec::new(
                    "Certification Roadmap Advisor",
                    "Create a step-by-step path to certification with authorities, costs, and timelines",
                    "You guide {industry} businesses through certification processes without disrupting their day-to-day operations.",
                    false,
                ),
            ],
        ),
        (
            QueryType::General,
            vec![
                RoleSpec::new(
                    "Business Research Generalist",
                    "Research the request from multiple angles and gather the most relevant findings",
                    "You are a versatile business researcher who can quickly map an unfamiliar topic and surface what matters.",
                    true,
                ),
                RoleSpec::new(
                    "Recommendation Synthesizer",
                    "Distill the findings into clear, prioritized recommendations",
                    "You turn scattered research into decisions executives can act on.",
                    false,
                ),
            ],
        ),
    ])
}

/// 将小写行业标签转换为标题格式（"food service" -> "Food Service"）
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
