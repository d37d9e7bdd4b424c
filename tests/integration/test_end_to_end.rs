// 名前生成から比較までの統合テスト
use method_bench::{
    benchmarks::{JsonReport, NoOpReporter},
    build_target,
    config::{BenchConfig, TargetMode},
    core::AttachmentStrategy,
    names::{NameGenerator, NAME_LENGTH},
    strategies::{DefineMethod, ModuleEval, StrategyKind},
    target::MethodTable,
    MethodBench,
};
use tempfile::TempDir;

fn invoke_all(target: &MethodTable) -> Vec<(String, String)> {
    target
        .method_names()
        .into_iter()
        .map(|name| {
            let mut out = Vec::new();
            target.invoke(name, &mut out).unwrap();
            (name.to_string(), String::from_utf8(out).unwrap())
        })
        .collect()
}

#[test]
fn test_both_strategies_expose_the_same_methods() {
    let names = vec!["foo".to_string(), "bar".to_string()];

    let mut class_a = MethodTable::new("SampleClassA");
    let mut class_b = MethodTable::new("SampleClassB");
    DefineMethod::new().attach(&mut class_a, &names).unwrap();
    ModuleEval::new().attach(&mut class_b, &names).unwrap();

    let expected = vec![
        ("bar".to_string(), "win\n".to_string()),
        ("foo".to_string(), "win\n".to_string()),
    ];
    assert_eq!(invoke_all(&class_a), expected);
    assert_eq!(invoke_all(&class_b), expected);
}

#[test]
fn test_generated_names_work_with_both_strategies() {
    let names = NameGenerator::with_seed(2024).generate(50);
    assert!(names.iter().all(|name| name.len() == NAME_LENGTH));

    for kind in StrategyKind::ALL {
        let target = build_target(kind, &names).unwrap();
        for name in &names {
            assert!(target.responds_to(name), "{} に {name} がありません", kind.label());
        }
        assert!(invoke_all(&target).iter().all(|(_, output)| output == "win\n"));
    }
}

#[test]
fn test_overlapping_redefinition_does_not_fail() {
    let first = vec!["alpha".to_string(), "beta".to_string()];
    let second = vec!["beta".to_string(), "gamma".to_string(), "alpha".to_string()];

    for kind in StrategyKind::ALL {
        let strategy = kind.create();
        let mut target = MethodTable::new(kind.target_name());
        strategy.attach(&mut target, &first).unwrap();
        strategy.attach(&mut target, &second).unwrap();
        strategy.attach(&mut target, &second).unwrap();

        assert_eq!(target.method_names(), vec!["alpha", "beta", "gamma"]);
        assert_eq!(target.definitions(), 8);
    }
}

#[test]
fn test_full_run_with_fixed_iterations() {
    let config = BenchConfig::default()
        .with_seed(99)
        .with_name_count(10)
        .with_iterations(50);
    let bench = MethodBench::new(config, NoOpReporter::new());

    let outcome = bench.run().unwrap();

    assert_eq!(outcome.names, NameGenerator::with_seed(99).generate(10));
    assert_eq!(outcome.report.entries.len(), 2);
    assert!(outcome.report.ratio >= 1.0);
    for entry in &outcome.report.entries {
        assert_eq!(entry.iterations, 50);
        assert!(entry.ips > 0.0);
    }
}

#[test]
fn test_full_run_with_time_budget_and_fresh_targets() {
    let config = BenchConfig::default()
        .with_seed(5)
        .with_warmup_secs(0.05)
        .with_time_secs(0.1)
        .with_target_mode(TargetMode::Fresh);

    let outcome = MethodBench::new(config, NoOpReporter::new()).run().unwrap();

    let labels: Vec<&str> = outcome
        .report
        .entries
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    assert!(labels.contains(&"define_method"));
    assert!(labels.contains(&"module_eval with string"));
    assert!(outcome.report.entries.iter().all(|entry| entry.samples >= 1));
}

#[test]
fn test_zero_names_still_measures() {
    let config = BenchConfig::default().with_name_count(0).with_iterations(10);

    let outcome = MethodBench::new(config, NoOpReporter::new()).run().unwrap();

    assert!(outcome.names.is_empty());
    assert_eq!(outcome.report.entries.len(), 2);
}

#[test]
fn test_json_report_export() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.json");
    let config = BenchConfig::default().with_seed(1).with_iterations(20);
    let bench = MethodBench::new(config.clone(), NoOpReporter::new());
    let outcome = bench.run().unwrap();

    JsonReport::new(config, outcome.names.clone(), outcome.report.clone())
        .write_to(&path)
        .unwrap();

    let parsed: JsonReport =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.names, outcome.names);
    assert_eq!(parsed.results.winner, outcome.report.winner);
}
