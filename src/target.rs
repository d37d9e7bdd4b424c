// メソッドテーブル - 名前から呼び出し可能な振る舞いへの対応表
// 実行時のクラス書き換えの代わりにレジストリとして表現する

use crate::core::{BenchError, BenchResult};
use crate::eval::CompiledMethod;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

/// ネイティブ (コンパイル済み) メソッドの関数ポインタ
pub type NativeMethod = fn(&mut dyn Write) -> std::io::Result<()>;

/// メソッド本体
#[derive(Clone)]
pub enum MethodBody {
    /// 関数ポインタを直接束縛したもの
    Native(NativeMethod),
    /// ソーステキストを評価して得たもの
    Compiled(Arc<CompiledMethod>),
}

impl std::fmt::Debug for MethodBody {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Native(_) => f.write_str("Native"),
            Self::Compiled(method) => f.debug_tuple("Compiled").field(&method.name).finish(),
        }
    }
}

impl MethodBody {
    pub fn call(&self, out: &mut dyn Write) -> std::io::Result<()> {
        match self {
            Self::Native(method) => method(out),
            Self::Compiled(method) => method.run(out),
        }
    }
}

/// メソッドを取り付ける対象
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    name: String,
    methods: HashMap<String, MethodBody>,
    /// 再定義を含む累計の定義回数
    definitions: u64,
}

impl MethodTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// メソッドを定義する
    ///
    /// 同名のメソッドが既にあれば置き換え、以前の本体を返す。
    pub fn define(&mut self, name: impl Into<String>, body: MethodBody) -> Option<MethodBody> {
        self.definitions += 1;
        self.methods.insert(name.into(), body)
    }

    pub fn responds_to(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodBody> {
        self.methods.get(name)
    }

    /// 名前でメソッドを呼び出す
    pub fn invoke(&self, name: &str, out: &mut dyn Write) -> BenchResult<()> {
        let body = self
            .methods
            .get(name)
            .ok_or_else(|| BenchError::no_method(&self.name, name))?;
        body.call(out)
            .map_err(|source| BenchError::invocation(name, source))
    }

    /// 定義済みメソッド名 (昇順)
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn definitions(&self) -> u64 {
        self.definitions
    }
}
