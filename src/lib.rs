pub mod benchmarks;
pub mod cli;
pub mod config;
pub mod core;
pub mod eval;
pub mod names;
pub mod strategies;
pub mod target;

use benchmarks::TimedComparator;
use config::{BenchConfig, TargetMode};
use crate::core::{AttachmentStrategy, BenchResult, BenchmarkReporter, ComparisonReport};
use names::NameGenerator;
use strategies::StrategyKind;
use target::MethodTable;
use tracing::info;

/// 1回分のベンチマーク結果
#[derive(Debug, Clone)]
pub struct BenchOutcome {
    pub names: Vec<String>,
    pub report: ComparisonReport,
}

// 設定と報告先を所有し、名前生成 → 方式A → 方式B → 比較 を順に実行する
pub struct MethodBench<R: BenchmarkReporter> {
    config: BenchConfig,
    reporter: R,
}

impl<R: BenchmarkReporter> MethodBench<R> {
    pub fn new(config: BenchConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 設定に従って名前を生成し、両方式を計測して比較する
    pub fn run(&self) -> BenchResult<BenchOutcome> {
        self.config.validate()?;

        let names =
            NameGenerator::from_seed_option(self.config.seed).generate(self.config.name_count);
        info!(count = names.len(), seed = ?self.config.seed, "generated method names");
        self.reporter.report_names(&names);

        let report = self.compare(&names)?;
        info!(winner = %report.winner, ratio = report.ratio, "comparison finished");

        Ok(BenchOutcome { names, report })
    }

    /// 与えられた名前で両方式を計測して比較する
    pub fn compare(&self, names: &[String]) -> BenchResult<ComparisonReport> {
        let mode = self.config.target_mode;
        let mut targets: Vec<MethodTable> = StrategyKind::ALL
            .iter()
            .map(|kind| MethodTable::new(kind.target_name()))
            .collect();

        let mut comparator = TimedComparator::new(self.config.budget(), &self.reporter);
        for (kind, target) in StrategyKind::ALL.iter().zip(targets.iter_mut()) {
            let strategy = kind.create();
            comparator.report(kind.label(), move || {
                attach_once(strategy.as_ref(), target, names, mode)
            });
        }
        comparator.compare()
    }
}

/// 計測対象の1回分の処理
fn attach_once(
    strategy: &dyn AttachmentStrategy,
    target: &mut MethodTable,
    names: &[String],
    mode: TargetMode,
) -> anyhow::Result<()> {
    match mode {
        TargetMode::Shared => strategy.attach(target, names)?,
        TargetMode::Fresh => {
            let mut fresh = MethodTable::new(target.name());
            strategy.attach(&mut fresh, names)?;
            std::hint::black_box(&fresh);
        }
    }
    Ok(())
}

/// 指定した方式で新しいターゲットにメソッドを取り付ける
pub fn build_target(kind: StrategyKind, names: &[String]) -> BenchResult<MethodTable> {
    let mut target = MethodTable::new(kind.target_name());
    kind.create().attach(&mut target, names)?;
    Ok(target)
}
