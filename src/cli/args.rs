use crate::config::{BenchConfig, TargetMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "method_bench")]
#[command(about = "Compare define_method style binding against module_eval with string")]
#[command(version)]
pub struct Cli {
    /// Number of random method names to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for the name generator (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Warmup time in seconds
    #[arg(short, long)]
    pub warmup: Option<f64>,

    /// Measurement time in seconds
    #[arg(short, long)]
    pub time: Option<f64>,

    /// Run a fixed number of iterations instead of a time budget
    #[arg(short, long)]
    pub iterations: Option<u64>,

    /// Reuse one target per strategy (shared) or build a new one per iteration (fresh)
    #[arg(long, value_enum)]
    pub target_mode: Option<TargetMode>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the results as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Suppress the console report
    #[arg(short, long)]
    pub quiet: bool,

    /// Invoke every attached method once after the run
    #[arg(long)]
    pub verify: bool,
}

impl Cli {
    /// CLI引数で設定を上書きする
    pub fn apply_to(&self, mut config: BenchConfig) -> BenchConfig {
        if let Some(count) = self.count {
            config.name_count = count;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(warmup) = self.warmup {
            config.warmup_secs = warmup;
        }
        if let Some(time) = self.time {
            config.time_secs = time;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = Some(iterations);
        }
        if let Some(target_mode) = self.target_mode {
            config.target_mode = target_mode;
        }
        config
    }
}
