// ベンチマーク設定
// JSONファイルから読み込み、CLI引数で上書きする

use crate::benchmarks::MeasurementBudget;
use crate::core::{ValidationError, ValidationResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 生成できる名前の上限
pub const MAX_NAME_COUNT: usize = 1_000_000;

/// 反復ごとのターゲットの扱い
///
/// 再定義のコストを計測に含めるかどうかは決まっていないため、両方を選べる。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TargetMode {
    /// 同じターゲットに繰り返し定義する (2回目以降は再定義)
    #[default]
    Shared,
    /// 反復ごとに空のターゲットを作り直す
    Fresh,
}

/// ベンチマーク設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub name_count: usize,
    pub seed: Option<u64>,
    pub warmup_secs: f64,
    pub time_secs: f64,
    /// 指定時は時間予算の代わりに固定回数で計測する
    pub iterations: Option<u64>,
    pub target_mode: TargetMode,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            name_count: 10,
            seed: None,
            warmup_secs: 2.0,
            time_secs: 5.0,
            iterations: None,
            target_mode: TargetMode::Shared,
        }
    }
}

impl BenchConfig {
    pub fn with_name_count(mut self, name_count: usize) -> Self {
        self.name_count = name_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_warmup_secs(mut self, warmup_secs: f64) -> Self {
        self.warmup_secs = warmup_secs;
        self
    }

    pub fn with_time_secs(mut self, time_secs: f64) -> Self {
        self.time_secs = time_secs;
        self
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn with_target_mode(mut self, target_mode: TargetMode) -> Self {
        self.target_mode = target_mode;
        self
    }

    /// 設定の妥当性をチェック
    pub fn validate(&self) -> ValidationResult<()> {
        if self.name_count > MAX_NAME_COUNT {
            return Err(ValidationError::new(
                "name_count",
                format!("{MAX_NAME_COUNT}以下である必要があります"),
            ));
        }

        if Duration::try_from_secs_f64(self.warmup_secs).is_err() {
            return Err(ValidationError::new(
                "warmup_secs",
                "0以上の有限値である必要があります",
            ));
        }

        match self.iterations {
            Some(0) => Err(ValidationError::new("iterations", "1以上である必要があります")),
            Some(_) => Ok(()),
            None => match Duration::try_from_secs_f64(self.time_secs) {
                Ok(time) if !time.is_zero() => Ok(()),
                _ => Err(ValidationError::new(
                    "time_secs",
                    "正の有限値である必要があります",
                )),
            },
        }
    }

    /// 計測予算に変換する (検証済みであること)
    pub fn budget(&self) -> MeasurementBudget {
        match self.iterations {
            Some(iterations) => MeasurementBudget::Iterations(iterations),
            None => MeasurementBudget::Time {
                warmup: Duration::try_from_secs_f64(self.warmup_secs).unwrap_or_default(),
                time: Duration::try_from_secs_f64(self.time_secs).unwrap_or_default(),
            },
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("設定JSONの解析エラー: {e}"))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
