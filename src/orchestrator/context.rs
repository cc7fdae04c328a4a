use anyhow::Result;

use crate::{config::Config, llm::LLMClient};

/// 编排上下文。每次查询运行独立构建，运行之间不共享可变状态
#[derive(Clone)]
pub struct OrchestratorContext {
    /// LLM调用器，用于与AI通信。
    pub llm_client: LLMClient,
    /// 配置
    pub config: Config,
}

impl OrchestratorContext {
    /// 创建新的编排上下文
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(config.clone())?;
        Ok(Self { llm_client, config })
    }
}
