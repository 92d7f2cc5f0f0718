use std::cell::Cell;

use crate::generator::{
    ConfigError, GenerationError, GeneratorConfig, NumberRanges, OperandCount, OperationSet,
    ProblemGenerator, Range, generate_batch_parallel, operator_combinations, retry,
    safe_generate, validate_bounds,
};
use crate::problem::{Answer, BlankPosition, Operator, Problem, evaluate_chain};

const SAMPLES: usize = 2_000;

fn config(
    operand: (i64, i64),
    result: (i64, i64),
    operators: &[Operator],
    operand_count: OperandCount,
) -> GeneratorConfig {
    GeneratorConfig {
        ranges: NumberRanges::new(operand.0, operand.1, result.0, result.1),
        operations: OperationSet::from_operators(operators),
        operand_count,
        ..GeneratorConfig::default()
    }
}

fn sample(config: GeneratorConfig, seed: u64) -> Vec<Problem> {
    let mut generator = ProblemGenerator::with_seed(config, seed);
    (0..SAMPLES).map(|_| generator.generate()).collect()
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// `(     ) + N = N`, `N + (     ) = N` or `N + N =`
fn matches_addition_layout(text: &str) -> bool {
    if let Some(lhs) = text.strip_suffix(" =") {
        return match lhs.split_once(" + ") {
            Some((a, b)) => is_number(a) && is_number(b),
            None => false,
        };
    }
    let Some((lhs, rhs)) = text.split_once(" = ") else {
        return false;
    };
    if !is_number(rhs) {
        return false;
    }
    if let Some(b) = lhs.strip_prefix("(     ) + ") {
        return is_number(b);
    }
    if let Some(a) = lhs.strip_suffix(" + (     )") {
        return is_number(a);
    }
    false
}

#[test]
fn test_range_normalization() {
    let range = Range::new(9, 2);
    assert_eq!(range.min(), 2);
    assert_eq!(range.max(), 9);
    assert!(range.contains(2));
    assert!(range.contains(9));
    assert!(!range.contains(10));
}

#[test]
fn test_update_ranges_swaps_and_is_idempotent() {
    let mut once = ProblemGenerator::with_seed(GeneratorConfig::default(), 1);
    once.update_ranges(50, 5, 80, 10);
    assert_eq!(once.ranges(), &NumberRanges::new(5, 50, 10, 80));

    let mut twice = ProblemGenerator::with_seed(GeneratorConfig::default(), 1);
    twice.update_ranges(50, 5, 80, 10);
    twice.update_ranges(50, 5, 80, 10);
    assert_eq!(once.ranges(), twice.ranges());
    assert_eq!(once.config(), twice.config());
}

#[test]
fn test_addition_properties() {
    let cfg = config((1, 20), (1, 20), &[Operator::Add], OperandCount::Two);
    for problem in sample(cfg, 11) {
        assert!(problem.is_consistent(), "inconsistent: {}", problem);
        if let Problem::Binary { a, op, b, result, .. } = problem {
            assert_eq!(op, Operator::Add);
            assert!((1..=20).contains(&a) && (1..=20).contains(&b));
            assert_eq!(result, Answer::Value(a + b));
            assert!(a + b <= 20);
        } else {
            panic!("expected a two-operand problem, got {}", problem);
        }
    }
}

#[test]
fn test_addition_layout_end_to_end() {
    let cfg = config((1, 20), (1, 20), &[Operator::Add], OperandCount::Two);
    let problems = sample(cfg, 12);
    for problem in &problems {
        let text = problem.to_string();
        assert!(matches_addition_layout(&text), "unexpected layout: {}", text);
    }
    // all three presentations show up
    for blank in BlankPosition::ALL {
        assert!(
            problems
                .iter()
                .any(|p| matches!(p, Problem::Binary { blank: b, .. } if *b == blank))
        );
    }
}

#[test]
fn test_subtraction_properties() {
    let cfg = config((1, 50), (1, 20), &[Operator::Sub], OperandCount::Two);
    for problem in sample(cfg, 21) {
        if let Problem::Binary { a, op, b, result, .. } = problem {
            assert_eq!(op, Operator::Sub);
            assert!(a - b > 0);
            assert!(a <= 50);
            assert_eq!(result, Answer::Value(a - b));
        } else {
            panic!("expected a two-operand problem, got {}", problem);
        }
    }
}

#[test]
fn test_subtraction_stays_positive_when_result_range_too_wide() {
    // differences cannot fit the operand range, exercising the shrink path
    let cfg = config((1, 10), (15, 20), &[Operator::Sub], OperandCount::Two);
    let mut binaries = 0;
    for problem in sample(cfg, 22) {
        match problem {
            Problem::Binary { a, b, result, .. } => {
                binaries += 1;
                assert!(a - b > 0);
                assert!(a <= 10, "minuend above operand maximum: {} - {}", a, b);
                assert!(b >= 1);
                assert_eq!(result, Answer::Value(a - b));
            }
            Problem::Fallback => {}
            other => panic!("expected a two-operand problem, got {}", other),
        }
    }
    assert!(binaries > SAMPLES / 2, "too many fallbacks: {}", binaries);
}

#[test]
fn test_every_operator_uses_all_blank_positions() {
    for op in Operator::ALL {
        let problems = sample(config((1, 50), (1, 100), &[op], OperandCount::Two), 23);
        for blank in BlankPosition::ALL {
            assert!(
                problems
                    .iter()
                    .any(|p| matches!(p, Problem::Binary { blank: b, .. } if *b == blank)),
                "{} never used {:?}",
                op,
                blank
            );
        }
    }
}

#[test]
fn test_multiplication_factors_stay_in_times_table() {
    for (operand, result) in [((1, 100), (1, 1000)), ((1, 100), (50, 100)), ((1, 9), (1, 81))] {
        let cfg = config(operand, result, &[Operator::Mul], OperandCount::Two);
        for problem in sample(cfg, 31) {
            if let Problem::Binary { a, op, b, result, .. } = problem {
                assert_eq!(op, Operator::Mul);
                assert!((2..=9).contains(&a), "factor {} out of table", a);
                assert!((2..=9).contains(&b), "factor {} out of table", b);
                assert_eq!(result, Answer::Value(a * b));
            } else {
                assert!(problem.is_fallback(), "unexpected {}", problem);
            }
        }
    }
}

#[test]
fn test_multiplication_end_to_end() {
    let cfg = config((1, 9), (1, 81), &[Operator::Mul], OperandCount::Two);
    for problem in sample(cfg, 32) {
        let Problem::Binary { a, b, result, .. } = problem else {
            panic!("expected a two-operand problem, got {}", problem);
        };
        assert!((2..=9).contains(&a) && (2..=9).contains(&b));
        assert_eq!(result, Answer::Value(a * b));
        let text = problem.to_string();
        assert!(text.contains(" x "));
    }
}

#[test]
fn test_division_properties() {
    for (operand, result) in [((1, 100), (1, 20)), ((1, 30), (5, 10)), ((3, 9), (1, 3))] {
        let cfg = config(operand, result, &[Operator::Div], OperandCount::Two);
        for problem in sample(cfg, 41) {
            match problem {
                Problem::Binary {
                    a,
                    op,
                    b,
                    result:
                        Answer::QuotientRemainder {
                            quotient,
                            remainder,
                        },
                    ..
                } => {
                    assert_eq!(op, Operator::Div);
                    assert_eq!(a, quotient * b + remainder);
                    assert!((0..b).contains(&remainder));
                    assert!(a <= operand.1);
                }
                Problem::Fallback => {}
                other => panic!("unexpected {}", other),
            }
        }
    }
}

#[test]
fn test_division_shows_zero_remainder() {
    let cfg = config((1, 100), (1, 20), &[Operator::Div], OperandCount::Two);
    let problems = sample(cfg, 42);
    let exact = problems.iter().find(|p| {
        matches!(
            p,
            Problem::Binary {
                result: Answer::QuotientRemainder { remainder: 0, .. },
                blank: BlankPosition::FirstOperand | BlankPosition::SecondOperand,
                ..
            }
        )
    });
    if let Some(problem) = exact {
        assert!(problem.to_string().ends_with("...0"));
    }
}

#[test]
fn test_infeasible_division_falls_back() {
    let cfg = config((2, 2), (100, 200), &[Operator::Div], OperandCount::Two);
    let mut generator = ProblemGenerator::with_seed(cfg, 51);
    for _ in 0..20 {
        let problem = generator.generate();
        assert_eq!(problem, Problem::Fallback);
        assert_eq!(problem.to_string(), "1 + 1 =");
    }
    assert!(matches!(
        generator.try_generate(),
        Err(GenerationError::InfeasibleRange { .. })
    ));
}

#[test]
fn test_no_operation_enabled() {
    let cfg = GeneratorConfig {
        operations: OperationSet::none(),
        ..GeneratorConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::NoOperationEnabled));

    let mut generator = ProblemGenerator::with_seed(cfg, 61);
    assert_eq!(generator.generate(), Problem::Fallback);
    assert_eq!(
        generator.generate_batch(5),
        Err(ConfigError::NoOperationEnabled)
    );
}

#[test]
fn test_batch_limit() {
    let mut generator = ProblemGenerator::with_seed(GeneratorConfig::default(), 62);
    assert_eq!(
        generator.generate_batch(10_001),
        Err(ConfigError::BatchTooLarge {
            requested: 10_001,
            limit: 10_000
        })
    );
    let batch = generator.generate_batch(250);
    assert!(matches!(batch, Ok(ref problems) if problems.len() == 250));
}

#[test]
fn test_seeded_generators_repeat() {
    let cfg = config(
        (1, 50),
        (1, 100),
        &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div],
        OperandCount::Two,
    );
    let first = ProblemGenerator::with_seed(cfg, 99).generate_batch(100);
    let second = ProblemGenerator::with_seed(cfg, 99).generate_batch(100);
    assert_eq!(first, second);
}

#[test]
fn test_operand_count_conversion() {
    assert_eq!(OperandCount::try_from(2), Ok(OperandCount::Two));
    assert_eq!(OperandCount::try_from(3), Ok(OperandCount::Three));
    assert_eq!(
        OperandCount::try_from(4),
        Err(ConfigError::InvalidOperandCount(4))
    );
    assert_eq!(OperandCount::Three.get(), 3);
}

#[test]
fn test_validate_bounds() {
    assert!(validate_bounds(1, 100, 1, 999).is_ok());
    assert!(matches!(
        validate_bounds(0, 100, 1, 100),
        Err(ConfigError::BoundOutOfRange { value: 0, .. })
    ));
    assert!(matches!(
        validate_bounds(1, 100, 1, 1000),
        Err(ConfigError::BoundOutOfRange { value: 1000, .. })
    ));
}

#[test]
fn test_operator_combinations() {
    let additive = operator_combinations(false, false);
    assert_eq!(additive.len(), 4);
    assert!(
        additive
            .iter()
            .all(|(a, b)| !a.is_multiplicative() && !b.is_multiplicative())
    );

    let multiply = operator_combinations(true, false);
    assert_eq!(multiply.len(), 4);
    assert!(multiply.contains(&(Operator::Mul, Operator::Add)));
    assert!(multiply.contains(&(Operator::Sub, Operator::Mul)));

    let both = operator_combinations(true, true);
    assert_eq!(both.len(), 8);
    assert!(
        both.iter()
            .all(|(a, b)| a.is_multiplicative() != b.is_multiplicative())
    );
}

#[test]
fn test_chains_never_go_negative() {
    for (has_mul, has_div) in [(false, false), (true, false), (false, true), (true, true)] {
        let mut operations = OperationSet::default();
        operations.multiplication = has_mul;
        operations.division = has_div;
        let cfg = GeneratorConfig {
            ranges: NumberRanges::new(1, 50, 1, 100),
            operations,
            mixed: true,
            operand_count: OperandCount::Three,
            ..GeneratorConfig::default()
        };

        let problems = sample(cfg, 71);
        let mut chains = 0;
        for problem in &problems {
            match problem {
                Problem::Chain {
                    a,
                    op1,
                    b,
                    op2,
                    c,
                    result,
                    ..
                } => {
                    chains += 1;
                    assert_eq!(evaluate_chain(*a, *op1, *b, *op2, *c), Ok(*result));
                    assert_eq!(
                        op1.is_multiplicative() || op2.is_multiplicative(),
                        has_mul || has_div
                    );
                }
                Problem::Fallback => {}
                other => panic!("expected a chain, got {}", other),
            }
        }
        assert!(chains > SAMPLES / 2, "too many fallbacks: {}", chains);
    }
}

#[test]
fn test_chain_results_stay_in_result_range() {
    let additive = [Operator::Add, Operator::Sub];
    let cases = [
        (config((1, 20), (1, 20), &additive, OperandCount::Three), false),
        (config((1, 100), (1, 10), &additive, OperandCount::Three), false),
        (config((1, 20), (1, 20), &[Operator::Mul], OperandCount::Three), true),
        (config((1, 50), (1, 100), &[Operator::Mul], OperandCount::Three), true),
        (config((1, 50), (1, 30), &[Operator::Div], OperandCount::Three), true),
        (config((5, 40), (10, 25), &Operator::ALL, OperandCount::Three), true),
    ];

    for (seed, (mut cfg, mixed)) in (101..).zip(cases) {
        cfg.mixed = mixed;
        let result_range = cfg.ranges.result;
        let mut chains = 0;
        for problem in sample(cfg, seed) {
            match &problem {
                Problem::Chain { result, .. } => {
                    chains += 1;
                    assert!(
                        result_range.contains(*result),
                        "{} gives {} outside [{}, {}]",
                        problem,
                        result,
                        result_range.min(),
                        result_range.max()
                    );
                }
                Problem::Fallback => {}
                other => panic!("expected a chain, got {}", other),
            }
        }
        assert!(chains > SAMPLES / 2, "too many fallbacks for seed {}: {}", seed, chains);
    }
}

#[test]
fn test_chain_rendering() {
    let mut cfg = config((1, 30), (1, 60), &[Operator::Add], OperandCount::Three);
    for problem in sample(cfg, 81) {
        if problem.is_fallback() {
            continue;
        }
        let text = problem.to_string();
        assert!(text.ends_with(" ="), "{}", text);
        assert_eq!(text.split(' ').count(), 6, "{}", text);
    }

    cfg.show_answer_inline = true;
    for problem in sample(cfg, 82) {
        if !problem.is_fallback() {
            assert!(problem.to_string().ends_with("= (     )"));
        }
    }
}

#[test]
fn test_single_operation_three_operands() {
    let cfg = config((1, 50), (1, 100), &[Operator::Mul], OperandCount::Three);
    for problem in sample(cfg, 91) {
        if let Problem::Chain { op1, op2, .. } = problem {
            assert!(op1 == Operator::Mul || op2 == Operator::Mul);
            assert!(op1 != Operator::Div && op2 != Operator::Div);
        }
    }
}

#[test]
fn test_mixed_two_operands_includes_additive() {
    let cfg = GeneratorConfig {
        operations: OperationSet::from_operators(&[Operator::Div]),
        mixed: true,
        ..GeneratorConfig::default()
    };
    let problems = sample(cfg, 92);
    for op in [Operator::Add, Operator::Sub, Operator::Div] {
        assert!(problems.iter().any(|p| p.operators() == vec![op]));
    }
    assert!(
        !problems
            .iter()
            .any(|p| p.operators() == vec![Operator::Mul])
    );
}

#[test]
fn test_retry_stops_at_first_success() {
    let calls = Cell::new(0);
    let problem = retry(
        || {
            calls.set(calls.get() + 1);
            if calls.get() < 4 {
                Err(GenerationError::NoCandidates)
            } else {
                Ok(Problem::Chain {
                    a: 1,
                    op1: Operator::Add,
                    b: 2,
                    op2: Operator::Add,
                    c: 3,
                    result: 6,
                    trailing_blank: false,
                })
            }
        },
        10,
    );
    assert!(matches!(problem, Ok(Problem::Chain { result: 6, .. })));
    assert_eq!(calls.get(), 4);
}

#[test]
fn test_retry_exhaustion() {
    let calls = Cell::new(0);
    let failing = || {
        calls.set(calls.get() + 1);
        Err(GenerationError::InfeasibleRange { lo: 3, hi: 1 })
    };
    assert_eq!(
        retry(failing, 10),
        Err(GenerationError::ExhaustedRetries { attempts: 10 })
    );
    assert_eq!(calls.get(), 10);

    let problem = safe_generate(|| Err(GenerationError::NoCandidates), 3);
    assert_eq!(problem, Problem::Fallback);
}

#[test]
fn test_parallel_batch() {
    let cfg = config(
        (1, 100),
        (1, 100),
        &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div],
        OperandCount::Two,
    );
    match generate_batch_parallel(&cfg, 500) {
        Ok(problems) => {
            assert_eq!(problems.len(), 500);
            assert!(problems.iter().all(Problem::is_consistent));
        }
        Err(e) => panic!("batch failed: {}", e),
    }
    assert!(matches!(
        generate_batch_parallel(&cfg, 20_000),
        Err(ConfigError::BatchTooLarge { .. })
    ));
}
