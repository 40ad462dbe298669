//! Self-check run by `suma-resta check`: the fixed scenarios plus the
//! algebraic properties over a sample of operands. Any mismatch is an error,
//! so the process exits non-zero and a CI step fails.

use crate::arithmetic::{Number, add, subtract};
use crate::error::{Error, Result};
use crate::operation::Operation;

/// (operation, a, b, expected)
pub const SCENARIOS: [(Operation, i64, i64, i64); 4] = [
    (Operation::Add, 1, 2, 3),
    (Operation::Subtract, 5, 3, 2),
    (Operation::Add, -1, -2, -3),
    (Operation::Subtract, 2, 5, -3),
];

fn samples() -> Vec<Number> {
    vec![
        Number::Int(0),
        Number::Int(1),
        Number::Int(-7),
        Number::Int(i64::MAX),
        Number::Int(i64::MIN),
        Number::Int((1 << 53) + 1),
        Number::Float(0.1),
        Number::Float(-2.5),
        Number::Float(1e300),
    ]
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CheckReport {
    pub scenarios: usize,
    pub properties: usize,
}

pub fn run() -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for (op, a, b, expected) in SCENARIOS {
        let actual = op.apply(Number::Int(a), Number::Int(b));
        let scenario = format!("{op}({a}, {b})");
        if actual != Number::Int(expected) {
            return Err(Error::check(scenario, expected, actual));
        }
        tracing::info!(%scenario, %actual, "ok");
        report.scenarios += 1;
    }

    let zero = Number::Int(0);
    let samples = samples();
    for &a in &samples {
        expect(format!("add({a}, 0)"), a, add(a, zero))?;
        expect(format!("subtract({a}, 0)"), a, subtract(a, zero))?;
        report.properties += 2;

        for &b in &samples {
            expect(format!("add({a}, {b}) == add({b}, {a})"), add(b, a), add(a, b))?;
            expect(
                format!("subtract({a}, {b}) == -subtract({b}, {a})"),
                -subtract(b, a),
                subtract(a, b),
            )?;
            report.properties += 2;
        }
    }
    tracing::info!(
        scenarios = report.scenarios,
        properties = report.properties,
        "self-check passed"
    );
    Ok(report)
}

fn expect(scenario: String, expected: Number, actual: Number) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::check(scenario, expected, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_check_passes() {
        let report = run().unwrap();
        assert_eq!(report.scenarios, 4);
        let n = samples().len();
        assert_eq!(report.properties, 2 * n + 2 * n * n);
    }

    #[test]
    fn mismatch_names_scenario() {
        let err = expect("add(1, 2)".into(), Number::Int(4), Number::Int(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Check failed (add(1, 2)): expected 4, got 3"
        );
    }
}
