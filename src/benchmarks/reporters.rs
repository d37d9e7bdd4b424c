// 計測経過と結果のコンソール出力

use crate::core::{BenchmarkReporter, ComparisonReport, MeasurementEntry, Phase};

const LABEL_WIDTH: usize = 24;

/// コンソール出力による報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl BenchmarkReporter for ConsoleReporter {
    fn report_names(&self, names: &[String]) {
        if !self.quiet {
            println!("🔤 メソッド名 ({}件): {}", names.len(), names.join(", "));
        }
    }

    fn report_phase(&self, phase: Phase) {
        if !self.quiet {
            println!("{}", phase_header(phase));
        }
    }

    fn report_warmup(&self, label: &str, cycle_iterations: u64) {
        if !self.quiet {
            println!("{}", format_warmup_line(label, cycle_iterations));
        }
    }

    fn report_entry(&self, entry: &MeasurementEntry) {
        if !self.quiet {
            println!("{}", format_entry_line(entry));
        }
    }

    fn report_comparison(&self, report: &ComparisonReport) {
        if !self.quiet {
            println!();
            for line in format_comparison_lines(report) {
                println!("{line}");
            }
        }
    }
}

/// 何もしない報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkReporter for NoOpReporter {
    fn report_names(&self, _names: &[String]) {}

    fn report_phase(&self, _phase: Phase) {}

    fn report_warmup(&self, _label: &str, _cycle_iterations: u64) {}

    fn report_entry(&self, _entry: &MeasurementEntry) {}

    fn report_comparison(&self, _report: &ComparisonReport) {}
}

pub fn phase_header(phase: Phase) -> &'static str {
    match phase {
        Phase::Warmup => "Warming up --------------------------------------",
        Phase::Calculating => "Calculating -------------------------------------",
    }
}

pub fn format_warmup_line(label: &str, cycle_iterations: u64) -> String {
    format!(
        "{label:>LABEL_WIDTH$} {:>10} i/100ms",
        humanize(cycle_iterations as f64)
    )
}

pub fn format_entry_line(entry: &MeasurementEntry) -> String {
    format!(
        "{:>LABEL_WIDTH$} {:>10} (±{:>4.1}%) i/s - {:>10} in {:>10.6}s",
        entry.label,
        humanize(entry.ips),
        entry.stddev_percentage(),
        humanize(entry.iterations as f64),
        entry.elapsed.as_secs_f64(),
    )
}

/// 速い順の比較行
pub fn format_comparison_lines(report: &ComparisonReport) -> Vec<String> {
    let mut lines = vec!["Comparison:".to_string()];
    for (index, entry) in report.entries.iter().enumerate() {
        let base = format!("{:>LABEL_WIDTH$}: {:>12.1} i/s", entry.label, entry.ips);
        if index == 0 {
            lines.push(base);
        } else {
            lines.push(format!(
                "{base} - {:.2}x  slower",
                report.slowdown_of(entry)
            ));
        }
    }
    lines
}

/// 桁の大きい数値を k/M/B/T 付きで表示する
pub fn humanize(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "k")];

    if !value.is_finite() {
        return value.to_string();
    }
    UNITS
        .iter()
        .find(|(scale, _)| value.abs() >= *scale)
        .map_or_else(
            || format!("{value:.3}"),
            |(scale, unit)| format!("{:.3}{unit}", value / scale),
        )
}
