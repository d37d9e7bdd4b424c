//! メソッド取り付け方式
//!
//! - `DefineMethod`: 関数ポインタをテーブルに直接登録する (定数コスト)
//! - `ModuleEval`: 名前ごとにソースを組み立て、字句解析・構文解析・コンパイルしてから登録する

pub mod define_method;
pub mod module_eval;

pub use define_method::DefineMethod;
pub use module_eval::ModuleEval;

use crate::core::AttachmentStrategy;
use serde::{Deserialize, Serialize};

/// 取り付けたメソッドが出力する固定メッセージ
pub const MESSAGE: &str = "win";

/// 方式の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    DefineMethod,
    ModuleEval,
}

impl StrategyKind {
    /// 計測順
    pub const ALL: [StrategyKind; 2] = [StrategyKind::DefineMethod, StrategyKind::ModuleEval];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DefineMethod => DefineMethod::LABEL,
            Self::ModuleEval => ModuleEval::LABEL,
        }
    }

    /// ターゲットとなるテーブル名
    pub fn target_name(&self) -> &'static str {
        match self {
            Self::DefineMethod => "SampleClassA",
            Self::ModuleEval => "SampleClassB",
        }
    }

    pub fn create(&self) -> Box<dyn AttachmentStrategy> {
        match self {
            Self::DefineMethod => Box::new(DefineMethod::new()),
            Self::ModuleEval => Box::new(ModuleEval::new()),
        }
    }
}
