//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use std::time::Duration;

use crate::config::Config;
use crate::llm::tools::search::AgentToolWebSearch;

mod providers;

use providers::ProviderClient;

/// 外部任务调用错误。过载与限流可在有限次退避后重试，其余错误立即中止整次运行
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// 上游服务明确返回过载或限流
    #[error("模型服务过载或限流: {0}")]
    Overloaded(String),

    /// 其他不可恢复的调用失败（含超时）
    #[error("模型服务调用失败: {0}")]
    Fatal(String),
}

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        // 使用一个简单的prompt来测试连接
        match self
            .execute_call("System: You are a helpful assistant.", "Hello", false)
            .await
        {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(anyhow::anyhow!(e))
            }
        }
    }

    /// 执行一次角色任务调用；uses_search控制是否为Agent挂载Web检索工具
    pub async fn execute_call(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        uses_search: bool,
    ) -> Result<String, TaskError> {
        let llm_config = &self.config.llm;

        let agent = if uses_search && !self.config.search.api_key.is_empty() {
            let web_search = AgentToolWebSearch::new(&self.config.search);
            self.client
                .create_agent_with_tools(&llm_config.model, system_prompt, llm_config, &web_search)
        } else {
            if uses_search && self.config.verbose {
                eprintln!("⚠️ 未配置检索API KEY，该角色将仅依赖模型知识作答");
            }
            self.client
                .create_agent(&llm_config.model, system_prompt, llm_config)
        };

        // 单个挂起的调用不允许拖住整次运行
        let timeout = Duration::from_secs(llm_config.timeout_seconds);
        match tokio::time::timeout(timeout, agent.prompt(user_prompt)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(classify_provider_error(e)),
            Err(_) => Err(TaskError::Fatal(format!(
                "模型调用超时（{}秒）",
                llm_config.timeout_seconds
            ))),
        }
    }
}

/// 将provider侧错误归类为可重试的过载错误或不可恢复错误
pub(crate) fn classify_provider_error(err: anyhow::Error) -> TaskError {
    const OVERLOAD_MARKERS: [&str; 6] = [
        "overloaded",
        "rate limit",
        "rate_limit",
        "too many requests",
        "429",
        "503",
    ];

    let message = err.to_string();
    let lowered = message.to_lowercase();
    if OVERLOAD_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        TaskError::Overloaded(message)
    } else {
        TaskError::Fatal(message)
    }
}
