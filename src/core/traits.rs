// ベンチマークのトレイト定義
// 差し替え可能な抽象化インターフェースを定義

use super::error::BenchResult;
use super::types::{ComparisonReport, MeasurementEntry, Phase};
use crate::target::MethodTable;
use mockall::automock;

/// 名前付きの振る舞いをターゲットに取り付ける方式の抽象化
#[automock]
pub trait AttachmentStrategy: Send + Sync {
    /// レポートに表示するラベル
    fn label(&self) -> &'static str;

    /// 全ての名前についてメソッドを定義する
    ///
    /// 既存の名前は上書きされ、再定義はエラーにならない。
    fn attach(&self, target: &mut MethodTable, names: &[String]) -> BenchResult<()>;
}

impl AttachmentStrategy for Box<dyn AttachmentStrategy> {
    fn label(&self) -> &'static str {
        self.as_ref().label()
    }

    fn attach(&self, target: &mut MethodTable, names: &[String]) -> BenchResult<()> {
        self.as_ref().attach(target, names)
    }
}

/// 計測経過と結果報告の抽象化トレイト
#[automock]
pub trait BenchmarkReporter: Send + Sync {
    /// 生成した名前の報告
    fn report_names(&self, names: &[String]);

    /// フェーズ開始の報告
    fn report_phase(&self, phase: Phase);

    /// ウォームアップ完了の報告
    fn report_warmup(&self, label: &str, cycle_iterations: u64);

    /// 1件分の計測完了の報告
    fn report_entry(&self, entry: &MeasurementEntry);

    /// 比較結果の報告
    fn report_comparison(&self, report: &ComparisonReport);
}

impl<R: BenchmarkReporter + ?Sized> BenchmarkReporter for &R {
    fn report_names(&self, names: &[String]) {
        (**self).report_names(names)
    }

    fn report_phase(&self, phase: Phase) {
        (**self).report_phase(phase)
    }

    fn report_warmup(&self, label: &str, cycle_iterations: u64) {
        (**self).report_warmup(label, cycle_iterations)
    }

    fn report_entry(&self, entry: &MeasurementEntry) {
        (**self).report_entry(entry)
    }

    fn report_comparison(&self, report: &ComparisonReport) {
        (**self).report_comparison(report)
    }
}

impl BenchmarkReporter for Box<dyn BenchmarkReporter> {
    fn report_names(&self, names: &[String]) {
        self.as_ref().report_names(names)
    }

    fn report_phase(&self, phase: Phase) {
        self.as_ref().report_phase(phase)
    }

    fn report_warmup(&self, label: &str, cycle_iterations: u64) {
        self.as_ref().report_warmup(label, cycle_iterations)
    }

    fn report_entry(&self, entry: &MeasurementEntry) {
        self.as_ref().report_entry(entry)
    }

    fn report_comparison(&self, report: &ComparisonReport) {
        self.as_ref().report_comparison(report)
    }
}
