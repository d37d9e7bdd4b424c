use clap::Parser;
use method_bench::cli::{execute_run, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // 診断ログは標準エラーへ (標準出力はレポート用)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("method_bench=warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(error) = execute_run(&cli) {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}
