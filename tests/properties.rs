//! Property-based tests for the formula pipeline.

use grapher::{
    interpreter::{
        formula::Formula,
        lexer::{Token, is_number, parse_number, tokenize},
        sampler::SampleGrid,
    },
    load_formula,
};
use proptest::prelude::*;

/// Reference model of a formula, rendered to text and evaluated with plain
/// Rust arithmetic.
#[derive(Debug, Clone)]
enum Model {
    X,
    Num(u32),
    Add(Box<Self>, Box<Self>),
    Mul(Box<Self>, Box<Self>),
    Sin(Box<Self>),
    Cos(Box<Self>),
}

impl Model {
    fn render(&self) -> String {
        match self {
            Self::X => "x".to_string(),
            Self::Num(n) => n.to_string(),
            Self::Add(l, r) => format!("(+ {} {})", l.render(), r.render()),
            Self::Mul(l, r) => format!("(* {} {})", l.render(), r.render()),
            Self::Sin(e) => format!("(sin {})", e.render()),
            Self::Cos(e) => format!("(cos {})", e.render()),
        }
    }

    fn eval(&self, x: f64) -> f64 {
        match self {
            Self::X => x,
            Self::Num(n) => f64::from(*n),
            Self::Add(l, r) => l.eval(x) + r.eval(x),
            Self::Mul(l, r) => l.eval(x) * r.eval(x),
            Self::Sin(e) => e.eval(x).sin(),
            Self::Cos(e) => e.eval(x).cos(),
        }
    }
}

fn model() -> impl Strategy<Value = Model> {
    let leaf = prop_oneof![Just(Model::X), (0u32..100).prop_map(Model::Num)];
    leaf.prop_recursive(5, 32, 2, |inner| {
            prop_oneof![(inner.clone(), inner.clone()).prop_map(|(l, r)| Model::Add(Box::new(l),
                                                                                    Box::new(r))),
                        (inner.clone(), inner.clone()).prop_map(|(l, r)| Model::Mul(Box::new(l),
                                                                                    Box::new(r))),
                        inner.clone().prop_map(|e| Model::Sin(Box::new(e))),
                        inner.prop_map(|e| Model::Cos(Box::new(e)))]
        })
}

proptest! {
    #[test]
    fn digit_words_are_numbers(word in "[0-9]{1,15}") {
        prop_assert!(is_number(&word));
        let expected: u64 = word.parse().unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = expected as f64;
        prop_assert_eq!(parse_number(&word, 0).unwrap(), expected);
        prop_assert_eq!(tokenize(&word).unwrap(), vec![Token::Number(expected)]);
    }

    #[test]
    fn words_with_a_non_digit_are_not_numbers(prefix in "[0-9]{0,5}", rest in "[a-z+*][0-9a-z]{0,5}") {
        let word = format!("{prefix}{rest}");
        prop_assert!(!is_number(&word));
    }

    #[test]
    fn evaluation_matches_reference(m in model(), x in -10.0f64..10.0) {
        let formula = load_formula(&m.render()).unwrap();
        prop_assert_eq!(formula.evaluate(x).unwrap().to_bits(), m.eval(x).to_bits());
    }

    #[test]
    fn display_reproduces_canonical_text(m in model()) {
        let text = m.render();
        let formula = Formula::parse(&text).unwrap();
        prop_assert_eq!(formula.to_string(), text);
    }

    #[test]
    fn binary_operators_need_two_operands(m in model(), op in prop_oneof![Just("+"), Just("*")]) {
        let text = format!("({op} {})", m.render());
        prop_assert!(load_formula(&text).is_err());
    }

    #[test]
    fn unary_operators_take_one_operand(m in model(), op in prop_oneof![Just("sin"), Just("cos")]) {
        let text = format!("({op} {} x)", m.render());
        prop_assert!(load_formula(&text).is_err());
    }

    #[test]
    fn sampling_is_ordered_and_exact(m in model(), count in 1u32..500, step in 0.001f64..1.0) {
        let formula = load_formula(&m.render()).unwrap();
        let points = formula.sample(SampleGrid::new(count, step)).unwrap();

        prop_assert_eq!(points.len(), count as usize);
        prop_assert!(points.windows(2).all(|pair| pair[0].x < pair[1].x));
        for point in &points {
            prop_assert_eq!(point.y.to_bits(), formula.evaluate(point.x).unwrap().to_bits());
        }
    }
}
