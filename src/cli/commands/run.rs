use super::verify::execute_verify;
use crate::benchmarks::{ConsoleReporter, JsonReport};
use crate::cli::Cli;
use crate::config::BenchConfig;
use crate::core::BenchError;
use crate::MethodBench;
use anyhow::{Context, Result};
use tracing::{debug, error};

/// 設定ファイルとCLI引数から最終的な設定を組み立てる
pub fn resolve_config(cli: &Cli) -> Result<BenchConfig> {
    let base = match &cli.config {
        Some(path) => BenchConfig::from_json_file(path)?,
        None => BenchConfig::default(),
    };
    let config = cli.apply_to(base);
    config.validate().context("設定が不正です")?;
    debug!(?config, "resolved configuration");
    Ok(config)
}

/// ベンチマークを実行し、必要に応じてJSON出力と動作確認を行う
pub fn execute_run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let reporter = if cli.quiet {
        ConsoleReporter::quiet()
    } else {
        ConsoleReporter::new()
    };

    let bench = MethodBench::new(config, reporter);
    let outcome = bench
        .run()
        .map_err(log_failure)
        .context("ベンチマークの実行に失敗しました")?;

    if let Some(path) = &cli.json {
        JsonReport::new(bench.config().clone(), outcome.names.clone(), outcome.report)
            .write_to(path)
            .map_err(log_failure)?;
        if !cli.quiet {
            println!("📄 詳細レポートを出力しました: {}", path.display());
        }
    }

    if cli.verify {
        let stdout = std::io::stdout();
        execute_verify(&outcome.names, &mut stdout.lock())?;
    }

    Ok(())
}

/// 重要度とコンテキストを記録し、解決のヒントがあれば表示する
fn log_failure(err: BenchError) -> BenchError {
    let context = err.context();
    error!(
        severity = err.severity().as_str(),
        operation = %context.operation,
        resource = context.resource.as_deref().unwrap_or("-"),
        "{err}"
    );
    if let Some(suggestion) = &context.suggestion {
        eprintln!("💡 {suggestion}");
    }
    err
}
