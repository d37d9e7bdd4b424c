// ベンチマーク実行時のカスタムエラー型定義
// 失敗はすべて致命的で、回復やリトライは行わない

use crate::eval::EvalError;
use thiserror::Error;

/// ベンチマーク固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("評価エラー: {name} - {source}")]
    EvaluationError {
        name: String,
        #[source]
        source: EvalError,
    },

    #[error("計測対象の実行エラー: {label} - {source}")]
    OperationError {
        label: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("未定義メソッドエラー: {target}#{name}")]
    NoMethodError { target: String, name: String },

    #[error("メソッド実行エラー: {name} - {source}")]
    InvocationError {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("レポート出力エラー: {source}")]
    ReportError {
        #[source]
        source: anyhow::Error,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 評価エラーの作成
    pub fn evaluation(name: impl Into<String>, source: EvalError) -> Self {
        Self::EvaluationError {
            name: name.into(),
            source,
        }
    }

    /// 計測対象の実行エラーの作成
    pub fn operation(label: impl Into<String>, source: anyhow::Error) -> Self {
        Self::OperationError {
            label: label.into(),
            source,
        }
    }

    /// 未定義メソッドエラーの作成
    pub fn no_method(target: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NoMethodError {
            target: target.into(),
            name: name.into(),
        }
    }

    /// メソッド実行エラーの作成
    pub fn invocation(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::InvocationError {
            name: name.into(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// レポート出力エラーの作成
    pub fn report(source: anyhow::Error) -> Self {
        Self::ReportError { source }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::EvaluationError { .. } | Self::OperationError { .. } => ErrorSeverity::Critical,
            Self::NoMethodError { .. } | Self::InvocationError { .. } => ErrorSeverity::Medium,
            Self::ReportError { .. } => ErrorSeverity::Medium,
            Self::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::EvaluationError { name, .. } => ErrorContext::new("module_eval")
                .with_resource(name.clone())
                .with_suggestion("メソッド名が識別子として妥当か確認してください"),
            Self::OperationError { label, .. } => ErrorContext::new("measurement")
                .with_resource(label.clone())
                .with_suggestion("計測対象の処理が単体で成功するか確認してください"),
            Self::NoMethodError { target, name } => ErrorContext::new("invoke")
                .with_resource(format!("{target}#{name}"))
                .with_suggestion("同じ名前でメソッドが定義済みか確認してください"),
            Self::InvocationError { name, .. } => {
                ErrorContext::new("invoke").with_resource(name.clone())
            }
            Self::ConfigurationError { message } => ErrorContext::new("configuration")
                .with_suggestion(format!("設定を確認してください: {message}")),
            Self::ValidationError { field, .. } => {
                ErrorContext::new("validation").with_resource(field.clone())
            }
            Self::ReportError { .. } => ErrorContext::new("report")
                .with_suggestion("出力先のパスと書き込み権限を確認してください"),
            Self::InternalError { .. } => ErrorContext::new("unknown"),
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - 計測の中断
    Critical,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（メソッド名やラベル等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// ベンチマーク処理の結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// 検証結果 - バリデーション専用の結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// バリデーション専用エラー型
#[derive(Error, Debug, Clone)]
#[error("バリデーションエラー: {field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for BenchError {
    fn from(error: ValidationError) -> Self {
        BenchError::ValidationError {
            field: error.field,
            reason: error.reason,
        }
    }
}

impl From<anyhow::Error> for BenchError {
    fn from(error: anyhow::Error) -> Self {
        BenchError::InternalError { source: error }
    }
}
