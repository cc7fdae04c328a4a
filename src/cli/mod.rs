use crate::config::{Config, LLMProvider};
use clap::Parser;
use std::path::PathBuf;

/// bizscout-rs - 由Rust与AI驱动的商业情报检索引擎
#[derive(Parser, Debug)]
#[command(name = "bizscout-rs")]
#[command(
    about = "AI-based versatile business intelligence search engine. It classifies a business query, assembles a specialized agent team, executes the agents as a sequential task chain and renders a professional markdown report.\n\nExample queries:\n  \"Find restaurant staffing solutions in Peoria\"\n  \"What are emerging precision agriculture technologies?\"\n  \"Find organic seed suppliers near Peoria\""
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 检索查询语句
    pub query: String,

    /// 报告输出目录
    #[arg(short, long, default_value = "./results")]
    pub output_path: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// LLM Provider (openai, deepseek, openrouter, anthropic, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// 模型名称
    #[arg(short, long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Web检索服务API KEY
    #[arg(long)]
    pub search_api_key: Option<String>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
            })
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("bizscout.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_default()
            } else {
                Config::default()
            }
        };

        // 覆盖配置文件中的设置
        config.output_path = self.output_path;

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 覆盖检索配置
        if let Some(search_api_key) = self.search_api_key {
            config.search.api_key = search_api_key;
        }

        config.verbose = self.verbose;

        config
    }
}
