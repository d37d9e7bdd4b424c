use crate::build_target;
use crate::strategies::StrategyKind;
use anyhow::Result;
use std::io::Write;

/// 両方式で取り付けたメソッドを1回ずつ呼び出し、出力を書き出す
pub fn execute_verify(names: &[String], out: &mut dyn Write) -> Result<()> {
    for kind in StrategyKind::ALL {
        let target = build_target(kind, names)?;
        writeln!(
            out,
            "🔎 {} ({}): {}件",
            kind.label(),
            target.name(),
            target.len()
        )?;
        for name in target.method_names() {
            write!(out, "   {name}: ")?;
            target.invoke(name, out)?;
        }
    }
    Ok(())
}
