use crate::config::Config;
use crate::orchestrator::context::OrchestratorContext;
use crate::orchestrator::outlet::{DiskOutlet, Outlet};

use anyhow::Result;

/// 启动检索编排工作流
pub async fn launch(config: &Config, query: &str) -> Result<()> {
    println!("🚀 开始执行商业情报检索...");

    let context = OrchestratorContext::new(config.clone())?;

    // 启动时检查模型连接
    context.llm_client.check_connection().await?;

    let report = crate::orchestrator::execute(&context, query).await?;

    let outlet = DiskOutlet::new(config.output_path.clone());
    match outlet.save(&report).await {
        Ok(paths) => {
            println!("\n✅ 检索完成");
            println!("   - 报告: {}", paths.report_path.display());
            println!("   - 原始产出: {}", paths.raw_path.display());
            Ok(())
        }
        Err(e) => {
            // 写盘失败时把报告兜底输出到标准输出，任务产出不随持久化一起丢失
            println!("\n{}", report.markdown);
            Err(e.into())
        }
    }
}
