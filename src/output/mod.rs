use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::operation::Calculation;

/// Render a calculation for stdout: `1 + 2 = 3`, or the calculation as JSON.
pub fn render(calc: &Calculation, config: &OutputConfig) -> Result<String> {
    let out = match config.format {
        OutputFormat::Text => render_text(calc),
        OutputFormat::Json if config.pretty => serde_json::to_string_pretty(calc)?,
        OutputFormat::Json => serde_json::to_string(calc)?,
    };
    Ok(out)
}

pub fn render_text(calc: &Calculation) -> String {
    format!(
        "{} {} {} = {}",
        calc.a,
        calc.operation.symbol(),
        calc.b,
        calc.result
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Number;
    use crate::operation::Operation;

    #[test]
    fn text_prints_negative_operands_bare() {
        let calc = Calculation::evaluate(Operation::Add, Number::Int(-1), Number::Int(-2));
        assert_eq!(render_text(&calc), "-1 + -2 = -3");
    }

    #[test]
    fn compact_json_is_single_line() {
        let calc = Calculation::evaluate(Operation::Add, Number::Int(1), Number::Int(2));
        let config = OutputConfig {
            format: OutputFormat::Json,
            pretty: false,
        };
        assert_eq!(
            render(&calc, &config).unwrap(),
            r#"{"operation":"add","a":1,"b":2,"result":3}"#
        );
    }
}
