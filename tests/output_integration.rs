use suma_resta::arithmetic::Number;
use suma_resta::config::{OutputConfig, OutputFormat};
use suma_resta::operation::{Calculation, Operation};
use suma_resta::output;

fn parse(s: &str) -> Number {
    s.parse().unwrap()
}

#[test]
fn text_output_from_parsed_operands() {
    let calc = Calculation::evaluate(Operation::Subtract, parse("2"), parse("5"));
    let out = output::render(&calc, &OutputConfig::default()).unwrap();
    assert_eq!(out, "2 - 5 = -3");
}

#[test]
fn text_output_for_floats() {
    let calc = Calculation::evaluate(Operation::Add, parse("1.5"), parse("2"));
    let out = output::render(&calc, &OutputConfig::default()).unwrap();
    assert_eq!(out, "1.5 + 2 = 3.5");
}

#[test]
fn pretty_json_round_trips_through_value() {
    let calc = Calculation::evaluate(Operation::Add, parse("-1"), parse("-2"));
    let config = OutputConfig {
        format: OutputFormat::Json,
        pretty: true,
    };
    let out = output::render(&calc, &config).unwrap();
    assert!(out.contains('\n'), "pretty JSON should span lines");

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["operation"], "add");
    assert_eq!(value["a"], -1);
    assert_eq!(value["b"], -2);
    assert_eq!(value["result"], -3);
}

#[test]
fn bad_operand_is_a_parse_error() {
    let err = "tres".parse::<Number>().unwrap_err();
    assert!(
        matches!(err, suma_resta::error::Error::Parse(_)),
        "unexpected error: {err}"
    );
}
