//! パフォーマンス測定とレポートモジュール
//!
//! メソッド取り付け方式ごとのスループット比較を提供

pub mod comparator;
pub mod json_report;
pub mod reporters;

pub use comparator::{MeasurementBudget, TimedComparator};
pub use json_report::JsonReport;
pub use reporters::{ConsoleReporter, NoOpReporter};
