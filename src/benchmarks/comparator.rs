//! ラベル付き処理のスループット比較
//!
//! 時間予算ではウォームアップで1サイクル(約100ms)あたりの反復回数を見積もり、
//! 本計測ではサイクルごとにipsのサンプルを採取する。
//! 固定回数予算ではウォームアップを行わず、1サンプルのみ採取する。

use crate::core::{
    BenchError, BenchResult, BenchmarkReporter, ComparisonReport, MeasurementEntry, Phase,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// 1サイクルの目標時間
pub const CYCLE_TARGET: Duration = Duration::from_millis(100);

/// 計測予算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementBudget {
    Time { warmup: Duration, time: Duration },
    Iterations(u64),
}

type Operation<'a> = Box<dyn FnMut() -> anyhow::Result<()> + 'a>;

struct Job<'a> {
    label: String,
    operation: Operation<'a>,
}

impl Job<'_> {
    fn call(&mut self) -> BenchResult<()> {
        (self.operation)().map_err(|source| BenchError::operation(&self.label, source))
    }
}

/// ラベル付きの処理を計測して比較する
pub struct TimedComparator<'a, R: BenchmarkReporter> {
    budget: MeasurementBudget,
    reporter: R,
    jobs: Vec<Job<'a>>,
}

impl<'a, R: BenchmarkReporter> TimedComparator<'a, R> {
    pub fn new(budget: MeasurementBudget, reporter: R) -> Self {
        Self {
            budget,
            reporter,
            jobs: Vec::new(),
        }
    }

    /// 計測対象を登録する (計測は登録順)
    pub fn report<F>(&mut self, label: impl Into<String>, operation: F) -> &mut Self
    where
        F: FnMut() -> anyhow::Result<()> + 'a,
    {
        self.jobs.push(Job {
            label: label.into(),
            operation: Box::new(operation),
        });
        self
    }

    /// 全ての計測対象を計測し、比較結果を返す
    ///
    /// いずれかの処理が失敗した時点で中断し、そのエラーを返す。
    pub fn compare(mut self) -> BenchResult<ComparisonReport> {
        self.check()?;

        let cycles = match self.budget {
            MeasurementBudget::Time { warmup, .. } => {
                self.reporter.report_phase(Phase::Warmup);
                let mut cycles = Vec::with_capacity(self.jobs.len());
                for job in &mut self.jobs {
                    let cycle = warmup_job(job, warmup)?;
                    debug!(label = %job.label, cycle, "warmup finished");
                    self.reporter.report_warmup(&job.label, cycle);
                    cycles.push(cycle);
                }
                cycles
            }
            MeasurementBudget::Iterations(iterations) => vec![iterations; self.jobs.len()],
        };

        self.reporter.report_phase(Phase::Calculating);
        let mut entries = Vec::with_capacity(self.jobs.len());
        for (job, cycle) in self.jobs.iter_mut().zip(cycles) {
            let entry = measure_job(job, self.budget, cycle)?;
            debug!(label = %entry.label, ips = entry.ips, "measurement finished");
            self.reporter.report_entry(&entry);
            entries.push(entry);
        }

        let report = ComparisonReport::new(entries)
            .ok_or_else(|| BenchError::internal(anyhow::anyhow!("計測結果がありません")))?;
        self.reporter.report_comparison(&report);
        Ok(report)
    }

    fn check(&self) -> BenchResult<()> {
        if self.jobs.len() < 2 {
            return Err(BenchError::configuration(
                "比較には2つ以上の計測対象が必要です",
            ));
        }

        let mut seen = HashSet::new();
        if let Some(job) = self.jobs.iter().find(|job| !seen.insert(job.label.as_str())) {
            return Err(BenchError::configuration(format!(
                "ラベルが重複しています: {}",
                job.label
            )));
        }

        if self.budget == MeasurementBudget::Iterations(0) {
            return Err(BenchError::validation("iterations", "1以上である必要があります"));
        }
        Ok(())
    }
}

/// ウォームアップを行い、1サイクルあたりの反復回数を返す
///
/// ウォームアップ時間が0でも1回は実行して見積もる。
fn warmup_job(job: &mut Job<'_>, warmup: Duration) -> BenchResult<u64> {
    let start = Instant::now();
    let mut iterations: u64 = 0;
    loop {
        job.call()?;
        iterations += 1;
        if start.elapsed() >= warmup {
            break;
        }
    }
    Ok(cycle_size(iterations, start.elapsed()))
}

fn cycle_size(iterations: u64, elapsed: Duration) -> u64 {
    let per_iteration = elapsed.as_secs_f64() / iterations.max(1) as f64;
    if per_iteration <= 0.0 {
        return iterations.max(1);
    }
    ((CYCLE_TARGET.as_secs_f64() / per_iteration) as u64).max(1)
}

fn measure_job(
    job: &mut Job<'_>,
    budget: MeasurementBudget,
    cycle: u64,
) -> BenchResult<MeasurementEntry> {
    let mut samples = Vec::new();
    let mut iterations: u64 = 0;
    let mut elapsed = Duration::ZERO;

    let time = match budget {
        MeasurementBudget::Time { time, .. } => time,
        // 1サイクルで打ち切る
        MeasurementBudget::Iterations(_) => Duration::ZERO,
    };

    while samples.is_empty() || elapsed < time {
        let start = Instant::now();
        for _ in 0..cycle {
            job.call()?;
        }
        let cycle_elapsed = start.elapsed();

        iterations += cycle;
        elapsed += cycle_elapsed;
        samples.push(throughput(cycle, cycle_elapsed));
    }

    Ok(MeasurementEntry {
        label: job.label.clone(),
        iterations,
        elapsed,
        ips: throughput(iterations, elapsed),
        ips_stddev: stddev(&samples),
        samples: samples.len(),
        cycle_iterations: cycle,
    })
}

/// 毎秒の反復回数
pub fn throughput(iterations: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        iterations as f64 / secs
    } else {
        0.0
    }
}

/// 標本標準偏差
fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let variance = samples
        .iter()
        .map(|sample| (sample - mean).powi(2))
        .sum::<f64>()
        / (samples.len() - 1) as f64;
    variance.sqrt()
}
