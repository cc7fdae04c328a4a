use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::llm::TaskError;

/// 查询类型，分类器输出的封闭集合
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryType {
    #[serde(rename = "problem_solving")]
    ProblemSolving,
    #[serde(rename = "trend_analysis")]
    TrendAnalysis,
    #[serde(rename = "resource_finding")]
    ResourceFinding,
    #[serde(rename = "compliance")]
    Compliance,
    #[serde(rename = "general")]
    #[default]
    General,
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryType::ProblemSolving => write!(f, "problem_solving"),
            QueryType::TrendAnalysis => write!(f, "trend_analysis"),
            QueryType::ResourceFinding => write!(f, "resource_finding"),
            QueryType::Compliance => write!(f, "compliance"),
            QueryType::General => write!(f, "general"),
        }
    }
}

impl std::str::FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "problem_solving" => Ok(QueryType::ProblemSolving),
            "trend_analysis" => Ok(QueryType::TrendAnalysis),
            "resource_finding" => Ok(QueryType::ResourceFinding),
            "compliance" => Ok(QueryType::Compliance),
            "general" => Ok(QueryType::General),
            _ => Err(format!("Unknown query type: {}", s)),
        }
    }
}

/// 查询意图记录，由分类器一次性生成，之后不再变更
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IntentRecord {
    /// 查询类型
    pub query_type: QueryType,

    /// 行业标签（小写），无法识别时为空字符串
    pub industry: String,

    /// 地理位置，未提及时为None
    pub location: Option<String>,

    /// 原始查询文本
    pub specific_need: String,
}

/// 角色定义，不可变的值类型。原型是各脚本中重复出现的
/// role/goal/backstory三元组外加工具挂载标记
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RoleDefinition {
    /// 角色名称，作为报告的小节标题
    pub name: String,

    /// 角色职责，一句话
    pub goal: String,

    /// 角色设定
    pub backstory: String,

    /// 是否为该角色挂载Web检索工具
    pub uses_search: bool,
}

/// 单个角色任务的产出
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaskResult {
    /// 产出该结果的角色名称
    pub role_name: String,

    /// 任务产出文本
    pub output: String,
}

/// 最终检索报告，渲染完成后不再变更
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchReport {
    /// 原始查询
    pub query: String,

    /// 查询意图
    pub intent: IntentRecord,

    /// 各角色任务产出，按执行顺序排列
    pub results: Vec<TaskResult>,

    /// 渲染后的markdown报告
    pub markdown: String,

    /// 原始任务产出拼接
    pub raw_output: String,

    /// 报告生成时间
    pub generated_at: DateTime<Local>,
}

/// 编排错误分类
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// 查询校验失败，在任何任务执行之前返回
    #[error("检索查询不能为空")]
    EmptyQuery,

    /// 角色链注册表中不存在该查询类型，说明分类器与组队器之间的契约被破坏
    #[error("角色链注册表中不存在查询类型: {query_type}")]
    Configuration { query_type: QueryType },

    /// 任务执行失败，整次运行中止，不产出部分报告
    #[error("角色 {role} 执行失败: {source}")]
    Execution {
        role: String,
        #[source]
        source: TaskError,
    },

    /// 报告写盘失败。内存中的结果仍然有效，调用方可以兜底使用
    #[error("报告写入失败: {source}")]
    ReportIo {
        #[source]
        source: std::io::Error,
    },
}
