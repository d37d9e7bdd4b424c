// 計測結果に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 計測フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 1サイクルあたりの反復回数を見積もる
    Warmup,
    /// 本計測
    Calculating,
}

/// ラベル付き計測対象1件分の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEntry {
    pub label: String,
    /// 本計測で完了した呼び出し回数
    pub iterations: u64,
    /// 本計測の総経過時間
    pub elapsed: Duration,
    /// 毎秒の呼び出し回数 (iterations / elapsed)
    pub ips: f64,
    /// サイクルごとのipsの標準偏差
    pub ips_stddev: f64,
    /// 採取したサンプル(サイクル)数
    pub samples: usize,
    /// 1サイクルあたりの呼び出し回数
    pub cycle_iterations: u64,
}

impl MeasurementEntry {
    /// 標準偏差を平均に対する百分率で取得
    pub fn stddev_percentage(&self) -> f64 {
        if self.ips > 0.0 {
            self.ips_stddev / self.ips * 100.0
        } else {
            0.0
        }
    }
}

/// 全計測対象の比較結果
///
/// `entries` は速い順に並ぶ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub entries: Vec<MeasurementEntry>,
    pub winner: String,
    /// 最速 / 最遅 のスループット比 (常に1.0以上)
    #[serde(with = "ratio_format")]
    pub ratio: f64,
}

impl ComparisonReport {
    /// 計測結果から比較結果を作成
    ///
    /// 空の入力は `None`。
    pub fn new(mut entries: Vec<MeasurementEntry>) -> Option<Self> {
        entries.sort_by(|a, b| b.ips.total_cmp(&a.ips));

        let fastest = entries.first()?;
        let slowest = entries.last()?;
        let ratio = speed_ratio(fastest.ips, slowest.ips);
        let winner = fastest.label.clone();

        Some(Self {
            entries,
            winner,
            ratio,
        })
    }

    pub fn fastest(&self) -> Option<&MeasurementEntry> {
        self.entries.first()
    }

    /// 最速のエントリと比べて何倍遅いか
    pub fn slowdown_of(&self, entry: &MeasurementEntry) -> f64 {
        let fastest_ips = self.fastest().map_or(entry.ips, |fastest| fastest.ips);
        speed_ratio(fastest_ips, entry.ips)
    }

    pub fn entry(&self, label: &str) -> Option<&MeasurementEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }
}

fn speed_ratio(faster: f64, slower: f64) -> f64 {
    if slower > 0.0 {
        faster / slower
    } else if faster > 0.0 {
        f64::INFINITY
    } else {
        1.0
    }
}

/// 比率のJSON表現
///
/// JSONの数値は無限大を表せないので、有限でない比率は文字列 `"inf"` で書き出す。
mod ratio_format {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    const INFINITE: &str = "inf";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Finite(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(ratio: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if ratio.is_finite() {
            serializer.serialize_f64(*ratio)
        } else {
            serializer.serialize_str(INFINITE)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Finite(ratio) => Ok(ratio),
            Repr::Text(text) if text == INFINITE => Ok(f64::INFINITY),
            Repr::Text(text) => Err(D::Error::invalid_value(
                Unexpected::Str(&text),
                &"a number or \"inf\"",
            )),
        }
    }
}
