// JSON形式でのレポート出力

use crate::config::BenchConfig;
use crate::core::{BenchError, BenchResult, ComparisonReport};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 1回分の実行結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub timestamp: String,
    pub config: BenchConfig,
    pub names: Vec<String>,
    pub results: ComparisonReport,
}

impl JsonReport {
    pub fn new(config: BenchConfig, names: Vec<String>, results: ComparisonReport) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            config,
            names,
            results,
        }
    }

    pub fn to_json_pretty(&self) -> BenchResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BenchError::report(e.into()))
    }

    /// ファイルに書き出す
    pub fn write_to(&self, path: &Path) -> BenchResult<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| {
            BenchError::report(
                anyhow::Error::new(e).context(format!("書き込みに失敗しました: {}", path.display())),
            )
        })
    }
}
