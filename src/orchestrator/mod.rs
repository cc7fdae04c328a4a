// 查询驱动的多智能体检索编排器
// 单次查询严格顺序地经过四个阶段：
// 分类（classifier）→ 组队（team）→ 顺序执行（executor）→ 报告渲染（report）
// 数据单向流动，阶段之间没有反馈回路，运行之间不共享可变状态

use chrono::Local;
use std::time::Duration;

use crate::config::Config;
use crate::orchestrator::classifier::QueryClassifier;
use crate::orchestrator::context::OrchestratorContext;
use crate::orchestrator::executor::{LlmTaskRunner, RetryPolicy, TaskExecutor, TaskRunner};
use crate::orchestrator::report::ReportFormatter;
use crate::orchestrator::team::TeamConfigurator;
use crate::orchestrator::types::{OrchestratorError, SearchReport};

pub mod classifier;
pub mod context;
pub mod executor;
pub mod outlet;
pub mod report;
pub mod team;
pub mod types;
pub mod workflow;

/// 执行一次完整的检索编排，任务执行委托给LLM服务
pub async fn execute(
    context: &OrchestratorContext,
    query: &str,
) -> Result<SearchReport, OrchestratorError> {
    let runner = LlmTaskRunner::new(context.llm_client.clone());
    execute_with_runner(&context.config, runner, query).await
}

/// 使用指定的任务执行器运行编排流程。
/// 执行器是外部LLM调用的接缝，测试可以注入桩实现
pub async fn execute_with_runner<R: TaskRunner>(
    config: &Config,
    runner: R,
    query: &str,
) -> Result<SearchReport, OrchestratorError> {
    // 空查询在任何任务执行之前失败
    let query = query.trim();
    if query.is_empty() {
        return Err(OrchestratorError::EmptyQuery);
    }

    let classifier = QueryClassifier;
    let intent = classifier.classify(query);
    println!(
        "🔍 查询解析: type={}, industry={}, location={}",
        intent.query_type,
        if intent.industry.is_empty() {
            "-"
        } else {
            intent.industry.as_str()
        },
        intent.location.as_deref().unwrap_or("-")
    );

    let configurator = TeamConfigurator::new();
    let roles = configurator.assemble(&intent)?;
    println!("👥 已组建 {} 个角色的任务链", roles.len());

    let retry = RetryPolicy::new(
        config.llm.retry_attempts,
        Duration::from_millis(config.llm.retry_base_delay_ms),
    );
    let executor = TaskExecutor::new(runner, retry);
    let results = executor.execute_chain(&intent, &roles).await?;

    Ok(ReportFormatter::render(query, &intent, results, Local::now()))
}
