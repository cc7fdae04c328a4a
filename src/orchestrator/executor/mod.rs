//! 顺序任务执行器 - 按角色链顺序执行任务，上下文单调累积

use async_trait::async_trait;

use crate::llm::{LLMClient, TaskError};
use crate::orchestrator::types::{IntentRecord, OrchestratorError, RoleDefinition, TaskResult};

pub mod retry;

pub use retry::RetryPolicy;

/// 任务执行接缝。生产实现委托给LLM服务，测试使用桩实现
#[async_trait]
pub trait TaskRunner: Send + Sync {
    /// 执行单个角色任务，返回文本产出
    async fn run_task(
        &self,
        role: &RoleDefinition,
        task_description: &str,
    ) -> Result<String, TaskError>;
}

/// 基于LLM客户端的任务执行器
pub struct LlmTaskRunner {
    client: LLMClient,
}

impl LlmTaskRunner {
    pub fn new(client: LLMClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaskRunner for LlmTaskRunner {
    async fn run_task(
        &self,
        role: &RoleDefinition,
        task_description: &str,
    ) -> Result<String, TaskError> {
        let system_prompt = format!(
            "You are {}. {}\nYour goal: {}.",
            role.name, role.backstory, role.goal
        );
        self.client
            .execute_call(&system_prompt, task_description, role.uses_search)
            .await
    }
}

/// 顺序任务执行器。角色链是严格的流水线：每个角色的输入
/// 依赖前序角色的产出，链内绝不并发
pub struct TaskExecutor<R: TaskRunner> {
    runner: R,
    retry: RetryPolicy,
}

impl<R: TaskRunner> TaskExecutor<R> {
    pub fn new(runner: R, retry: RetryPolicy) -> Self {
        Self { runner, retry }
    }

    /// 按顺序执行整条角色链。任一任务最终失败则整次运行中止，
    /// 不产出部分结果
    pub async fn execute_chain(
        &self,
        intent: &IntentRecord,
        roles: &[RoleDefinition],
    ) -> Result<Vec<TaskResult>, OrchestratorError> {
        let mut results: Vec<TaskResult> = Vec::with_capacity(roles.len());

        for role in roles {
            println!("🤖 执行角色任务: {}", role.name);

            let task_description = build_task_description(role, intent, &results);
            let output = self
                .retry
                .execute(|| self.runner.run_task(role, &task_description))
                .await
                .map_err(|source| OrchestratorError::Execution {
                    role: role.name.clone(),
                    source,
                })?;

            println!("✓ {} 任务完成", role.name);
            results.push(TaskResult {
                role_name: role.name.clone(),
                output,
            });
        }

        Ok(results)
    }
}

/// 装配任务描述：角色职责 + 意图字段 + 此前所有角色的产出。
/// 上下文单调累积，任何角色都看不到在它之后执行的任务
pub fn build_task_description(
    role: &RoleDefinition,
    intent: &IntentRecord,
    prior_results: &[TaskResult],
) -> String {
    let mut description = String::new();

    description.push_str(&format!("Task: {}.\n\n", role.goal));
    description.push_str(&format!("Query: \"{}\"\n", intent.specific_need));
    description.push_str(&format!("Query type: {}\n", intent.query_type));
    description.push_str(&format!(
        "Industry: {}\n",
        if intent.industry.is_empty() {
            "unspecified"
        } else {
            intent.industry.as_str()
        }
    ));
    description.push_str(&format!(
        "Location: {}\n",
        intent.location.as_deref().unwrap_or("unspecified")
    ));

    if !prior_results.is_empty() {
        description.push_str("\nFindings from previously executed roles:\n");
        for result in prior_results {
            description.push_str(&format!("\n### {}\n{}\n", result.role_name, result.output));
        }
    }

    description
}
