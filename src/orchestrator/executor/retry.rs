//! 重试策略 - 对上游过载错误做有界指数退避

use std::future::Future;
use std::time::Duration;

use crate::llm::TaskError;

/// 指数退避重试策略。只有`TaskError::Overloaded`会被重试，
/// 达到尝试次数上限后硬失败，绝不无限循环
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// 总尝试次数上限（含首次调用）
    pub max_attempts: u32,

    /// 基础退避间隔，每次重试翻倍
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// 通用重试逻辑，用于处理异步操作的重试机制
    pub async fn execute<T, F, Fut>(&self, operation: F) -> Result<T, TaskError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, TaskError>>,
    {
        let mut attempt: u32 = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(TaskError::Overloaded(message)) => {
                    attempt += 1;
                    if attempt >= self.max_attempts.max(1) {
                        return Err(TaskError::Overloaded(message));
                    }
                    let delay = self.base_delay * 2u32.saturating_pow(attempt - 1);
                    eprintln!(
                        "⚠️ 模型服务过载，{}ms后重试 (第 {} / {} 次尝试): {}",
                        delay.as_millis(),
                        attempt,
                        self.max_attempts,
                        message
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(other) => return Err(other),
            }
        }
    }
}
