//! ソーステキスト評価によるメソッド定義
//!
//! テンプレートから組み立てたフラグメントを字句解析・構文解析し、
//! 実行可能な `CompiledMethod` に変換する。

pub mod lexer;
pub mod parser;

use parser::{MethodDef, Parser, Stmt};
use std::io::Write;
use thiserror::Error;

/// 評価時のエラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("予期しない文字 {ch:?} ({line}:{col})")]
    UnexpectedChar { ch: char, line: usize, col: usize },

    #[error("文字列が閉じられていません ({line}:{col})")]
    UnterminatedString { line: usize, col: usize },

    #[error("予期しないトークン `{found}`: {expected} が必要です ({line}:{col})")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        line: usize,
        col: usize,
    },

    #[error("入力が途中で終了しました: {expected} が必要です")]
    UnexpectedEof { expected: &'static str },

    #[error("メソッド定義が含まれていません")]
    EmptyFragment,

    #[error("`{expected}` のみを定義する必要があります (定義: {found})")]
    UnexpectedDefinition { expected: String, found: String },
}

/// コンパイル済みメソッドの命令
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// 改行付きで書き出す
    WriteLine(String),
}

/// 実行可能な形に変換したメソッド
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledMethod {
    pub name: String,
    pub code: Vec<Instruction>,
}

impl CompiledMethod {
    fn from_def(def: MethodDef) -> Self {
        let code = def
            .body
            .into_iter()
            .map(|stmt| match stmt {
                Stmt::Puts(text) => Instruction::WriteLine(text),
            })
            .collect();

        Self {
            name: def.name,
            code,
        }
    }

    pub fn run(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for instruction in &self.code {
            match instruction {
                Instruction::WriteLine(text) => {
                    // 既に改行で終わっている場合は改行を足さない
                    if text.ends_with('\n') {
                        out.write_all(text.as_bytes())?;
                    } else {
                        writeln!(out, "{text}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// フラグメントを解析してコンパイルする
pub fn compile(source: &str) -> Result<Vec<CompiledMethod>, EvalError> {
    let tokens = lexer::tokenize(source)?;
    let defs = Parser::new(tokens).parse_program()?;
    Ok(defs.into_iter().map(CompiledMethod::from_def).collect())
}

/// `name` ひとつだけを定義するフラグメントをコンパイルする
///
/// 名前に改行や `end` を含めて別の定義を紛れ込ませた場合はエラーになる。
pub fn compile_method(source: &str, name: &str) -> Result<CompiledMethod, EvalError> {
    let mut methods = compile(source)?;
    match methods.pop() {
        Some(method) if methods.is_empty() && method.name == name => Ok(method),
        last => {
            let found = methods
                .iter()
                .chain(last.as_ref())
                .map(|method| method.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Err(EvalError::UnexpectedDefinition {
                expected: name.to_string(),
                found,
            })
        }
    }
}

/// メソッド定義のソーステンプレートを展開する
pub fn method_source(name: &str, message: &str) -> String {
    format!(
        "\n        def {name}\n          puts \"{}\"\n        end\n      ",
        escape(message)
    )
}

fn escape(message: &str) -> String {
    message
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}
