// パフォーマンス関連の統合テスト
use method_bench::{
    benchmarks::{MeasurementBudget, NoOpReporter, TimedComparator},
    config::BenchConfig,
    core::AttachmentStrategy,
    names::NameGenerator,
    strategies::{DefineMethod, ModuleEval},
    target::MethodTable,
    MethodBench,
};
use std::time::{Duration, Instant};

/// 一定回数の取り付けにかかった時間
fn time_attach(strategy: &dyn AttachmentStrategy, names: &[String], rounds: u32) -> Duration {
    let mut target = MethodTable::new("Timed");
    let start = Instant::now();
    for _ in 0..rounds {
        strategy.attach(&mut target, names).unwrap();
    }
    start.elapsed()
}

#[test]
fn test_double_work_operation_loses() {
    let budget = MeasurementBudget::Time {
        warmup: Duration::from_millis(20),
        time: Duration::from_millis(100),
    };
    let mut comparator = TimedComparator::new(budget, NoOpReporter::new());
    comparator
        .report("single", || {
            std::thread::sleep(Duration::from_micros(500));
            Ok(())
        })
        .report("double", || {
            std::thread::sleep(Duration::from_micros(500));
            std::thread::sleep(Duration::from_micros(500));
            Ok(())
        });

    let report = comparator.compare().unwrap();

    assert_eq!(report.winner, "single");
    assert!(report.ratio >= 1.0);
    let single = report.entry("single").unwrap();
    let double = report.entry("double").unwrap();
    assert!(single.ips > double.ips);
}

#[test]
fn test_direct_binding_is_faster_than_evaluation() {
    let names = NameGenerator::with_seed(17).generate(10);

    // 計測の揺らぎを抑えるため十分な回数を回す
    let direct = time_attach(&DefineMethod::new(), &names, 2_000);
    let evaluated = time_attach(&ModuleEval::new(), &names, 2_000);

    println!("define_method: {direct:?}, module_eval: {evaluated:?}");
    assert!(direct < evaluated);
}

#[test]
fn test_time_budget_is_respected() {
    let config = BenchConfig::default()
        .with_seed(8)
        .with_warmup_secs(0.05)
        .with_time_secs(0.2);

    let start = Instant::now();
    let outcome = MethodBench::new(config, NoOpReporter::new()).run().unwrap();
    let total = start.elapsed();

    // ウォームアップ + 計測 (2方式分) に1サイクル分の超過を見込む
    assert!(total < Duration::from_secs(2), "took {total:?}");
    for entry in &outcome.report.entries {
        assert!(entry.elapsed >= Duration::from_millis(200));
        assert!(entry.samples >= 1);
        assert!(entry.cycle_iterations >= 1);
    }
}
