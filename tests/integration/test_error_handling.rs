// エラーハンドリングの統合テスト
use method_bench::{
    benchmarks::{MeasurementBudget, NoOpReporter, TimedComparator},
    config::BenchConfig,
    core::{error::ErrorSeverity, AttachmentStrategy, BenchError},
    eval::{self, EvalError},
    strategies::ModuleEval,
    target::MethodTable,
    MethodBench,
};
use std::time::Duration;

#[test]
fn test_operation_error_propagates_with_label() {
    let mut comparator = TimedComparator::new(
        MeasurementBudget::Time {
            warmup: Duration::from_millis(10),
            time: Duration::from_millis(20),
        },
        NoOpReporter::new(),
    );
    comparator
        .report("healthy", || Ok(()))
        .report("faulty", || Err(anyhow::anyhow!("operation exploded")));

    let error = comparator.compare().unwrap_err();

    assert!(matches!(error, BenchError::OperationError { .. }));
    assert_eq!(error.severity(), ErrorSeverity::Critical);
    assert!(error.to_string().contains("faulty"));
    assert!(error.to_string().contains("operation exploded"));
    assert_eq!(error.context().resource, Some("faulty".to_string()));
}

#[test]
fn test_error_after_some_iterations_is_not_swallowed() {
    let mut remaining = 3u32;
    let mut comparator =
        TimedComparator::new(MeasurementBudget::Iterations(10), NoOpReporter::new());
    comparator.report("a", || Ok(())).report("b", move || {
        if remaining == 0 {
            anyhow::bail!("ran out");
        }
        remaining -= 1;
        Ok(())
    });

    let error = comparator.compare().unwrap_err();
    assert!(error.to_string().contains("ran out"));
}

#[test]
fn test_module_eval_rejects_malformed_names() {
    let cases = [
        ("1abc", "UnexpectedChar"),
        ("foo bar", "UnexpectedToken"),
        ("foo\"", "UnterminatedString"),
    ];

    for (name, expected) in cases {
        let mut target = MethodTable::new("SampleClassB");
        let error = ModuleEval::new()
            .attach(&mut target, &[name.to_string()])
            .unwrap_err();

        match error {
            BenchError::EvaluationError { name: failed, source } => {
                assert_eq!(failed, name);
                assert!(format!("{source:?}").starts_with(expected), "{name}: {source:?}");
            }
            other => panic!("unexpected error for {name}: {other}"),
        }
        assert!(target.is_empty());
    }
}

#[test]
fn test_evaluator_error_messages_include_position() {
    let error = eval::compile("def ok\n  puts win\nend").unwrap_err();

    assert_eq!(
        error,
        EvalError::UnexpectedToken {
            found: "win".to_string(),
            expected: "string literal",
            line: 2,
            col: 8,
        }
    );
    assert!(error.to_string().contains("(2:8)"));
}

#[test]
fn test_invalid_configuration_is_fatal() {
    let config = BenchConfig::default().with_iterations(0);
    let error = MethodBench::new(config, NoOpReporter::new())
        .run()
        .unwrap_err();

    assert!(matches!(error, BenchError::ValidationError { .. }));
    assert_eq!(error.severity(), ErrorSeverity::High);
}

#[test]
fn test_undefined_method_invocation() {
    let target = MethodTable::new("SampleClassA");
    let error = target.invoke("ghost", &mut std::io::sink()).unwrap_err();

    assert!(matches!(error, BenchError::NoMethodError { .. }));
    assert_eq!(
        error.context().resource,
        Some("SampleClassA#ghost".to_string())
    );
}
