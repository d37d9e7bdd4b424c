// 方式A: コンパイル済みの関数ポインタを名前に直接束縛する

use super::MESSAGE;
use crate::core::{AttachmentStrategy, BenchResult};
use crate::target::{MethodBody, MethodTable};
use std::io::Write;

fn say_message(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{MESSAGE}")
}

/// `define_method` 相当の方式
#[derive(Debug, Default, Clone, Copy)]
pub struct DefineMethod;

impl DefineMethod {
    pub const LABEL: &'static str = "define_method";

    pub fn new() -> Self {
        Self
    }
}

impl AttachmentStrategy for DefineMethod {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn attach(&self, target: &mut MethodTable, names: &[String]) -> BenchResult<()> {
        for name in names {
            target.define(name.as_str(), MethodBody::Native(say_message));
        }
        Ok(())
    }
}
