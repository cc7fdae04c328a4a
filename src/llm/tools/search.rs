//! Web检索工具

use anyhow::Result;
use rig::tool::Tool;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;

/// Web检索工具，基于Serper检索服务返回商业情报结果
#[derive(Debug, Clone)]
pub struct AgentToolWebSearch {
    api_key: String,
    api_base_url: String,
    max_results: usize,
}

/// 检索参数
#[derive(Debug, Deserialize)]
pub struct SearchArgs {
    pub query: String,
}

/// 检索结果
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub formatted_results: String,
}

/// 检索工具错误
#[derive(Debug)]
pub struct SearchToolError(String);

impl std::fmt::Display for SearchToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Web search tool error: {}", self.0)
    }
}

impl std::error::Error for SearchToolError {}

impl AgentToolWebSearch {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.clone(),
            max_results: config.max_results,
        }
    }

    /// 调用检索服务并格式化organic结果
    async fn search(&self, query: &str) -> Result<String> {
        let client = reqwest::Client::new();
        let response = client
            .post(&self.api_base_url)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&serde_json::json!({
                "q": query,
                "num": self.max_results,
            }))
            .send()
            .await?
            .error_for_status()?;

        let data: serde_json::Value = response.json().await?;

        let mut formatted_results = Vec::new();
        for item in data
            .get("organic")
            .and_then(|value| value.as_array())
            .into_iter()
            .flatten()
            .take(self.max_results)
        {
            let field = |key: &str, fallback: &str| {
                item.get(key)
                    .and_then(|value| value.as_str())
                    .unwrap_or(fallback)
                    .to_string()
            };
            formatted_results.push(format!("Title: {}", field("title", "No title")));
            formatted_results.push(format!("Link: {}", field("link", "No link")));
            formatted_results.push(format!("Snippet: {}", field("snippet", "No snippet")));
            formatted_results.push("---".to_string());
        }

        if formatted_results.is_empty() {
            return Ok("No results found or error in search.".to_string());
        }

        Ok(formatted_results.join("\n"))
    }
}

impl Tool for AgentToolWebSearch {
    const NAME: &'static str = "web_search";

    type Error = SearchToolError;
    type Args = SearchArgs;
    type Output = SearchOutput;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "基于Web搜索引擎检索商业情报，返回标题、链接与摘要组成的结果列表。"
                .to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "检索关键词"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        println!("   🔧 tool called...web_search@{:?}", args);

        self.search(&args.query)
            .await
            .map(|formatted_results| SearchOutput { formatted_results })
            .map_err(|e| SearchToolError(e.to_string()))
    }
}
