// 方式B: 名前ごとにソーステキストを組み立て、評価してから取り付ける

use super::MESSAGE;
use crate::core::{AttachmentStrategy, BenchError, BenchResult};
use crate::eval;
use crate::target::{MethodBody, MethodTable};
use std::sync::Arc;

/// 文字列による `module_eval` 相当の方式
#[derive(Debug, Default, Clone, Copy)]
pub struct ModuleEval;

impl ModuleEval {
    pub const LABEL: &'static str = "module_eval with string";

    pub fn new() -> Self {
        Self
    }
}

impl AttachmentStrategy for ModuleEval {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn attach(&self, target: &mut MethodTable, names: &[String]) -> BenchResult<()> {
        for name in names {
            let source = eval::method_source(name, MESSAGE);
            let method = eval::compile_method(&source, name)
                .map_err(|source| BenchError::evaluation(name, source))?;
            target.define(name.as_str(), MethodBody::Compiled(Arc::new(method)));
        }
        Ok(())
    }
}
