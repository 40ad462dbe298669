use crate::arithmetic::{self, Number};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn apply(self, a: Number, b: Number) -> Number {
        match self {
            Self::Add => arithmetic::add(a, b),
            Self::Subtract => arithmetic::subtract(a, b),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Subtract => write!(f, "subtract"),
        }
    }
}

/// One evaluated operation, as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub operation: Operation,
    pub a: Number,
    pub b: Number,
    pub result: Number,
}

impl Calculation {
    pub fn evaluate(operation: Operation, a: Number, b: Number) -> Self {
        let result = operation.apply(a, b);
        tracing::debug!(%operation, %a, %b, %result, "evaluated");
        Self {
            operation,
            a,
            b,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_dispatches() {
        assert_eq!(
            Operation::Add.apply(Number::Int(1), Number::Int(2)),
            Number::Int(3)
        );
        assert_eq!(
            Operation::Subtract.apply(Number::Int(2), Number::Int(5)),
            Number::Int(-3)
        );
    }

    #[test]
    fn evaluate_records_operands() {
        let calc = Calculation::evaluate(Operation::Subtract, Number::Int(5), Number::Int(3));
        assert_eq!(calc.operation, Operation::Subtract);
        assert_eq!(calc.a, Number::Int(5));
        assert_eq!(calc.b, Number::Int(3));
        assert_eq!(calc.result, Number::Int(2));
    }

    #[test]
    fn operation_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Operation::Add).unwrap(), "\"add\"");
        assert_eq!(Operation::Subtract.to_string(), "subtract");
        assert_eq!(Operation::Subtract.symbol(), '-');
    }
}
