//! 报告落盘 - 将渲染完成的报告写入结果目录

use std::fs;
use std::path::PathBuf;

use crate::orchestrator::types::{OrchestratorError, SearchReport};
use crate::utils::slug::safe_slug;

/// 报告落盘后的文件路径
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// markdown报告路径
    pub report_path: PathBuf,

    /// 原始任务产出路径
    pub raw_path: PathBuf,
}

pub trait Outlet {
    async fn save(&self, report: &SearchReport) -> Result<ReportPaths, OrchestratorError>;
}

/// 磁盘落盘实现。文件名由查询slug加时间戳构成，
/// 同一查询的多次运行互不覆盖
pub struct DiskOutlet {
    output_dir: PathBuf,
}

impl DiskOutlet {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

impl Outlet for DiskOutlet {
    async fn save(&self, report: &SearchReport) -> Result<ReportPaths, OrchestratorError> {
        println!("\n🖊️ 报告存储中...");

        fs::create_dir_all(&self.output_dir)
            .map_err(|source| OrchestratorError::ReportIo { source })?;

        let slug = safe_slug(&report.query);
        let timestamp = report.generated_at.format("%Y%m%d_%H%M%S");

        let report_path = self.output_dir.join(format!("{}_{}.md", slug, timestamp));
        let raw_path = self
            .output_dir
            .join(format!("{}_{}_raw.txt", slug, timestamp));

        fs::write(&report_path, &report.markdown)
            .map_err(|source| OrchestratorError::ReportIo { source })?;
        fs::write(&raw_path, &report.raw_output)
            .map_err(|source| OrchestratorError::ReportIo { source })?;

        println!("💾 已保存报告: {}", report_path.display());
        println!("💾 已保存原始产出: {}", raw_path.display());

        Ok(ReportPaths {
            report_path,
            raw_path,
        })
    }
}

// Include tests
#[cfg(test)]
mod tests;
