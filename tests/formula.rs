use std::f64::consts::FRAC_PI_2;

use grapher::{
    ast::{Node, Operator, Prefix},
    error::{EvalError, FormulaError, LexError, ParseError},
    interpreter::{
        arena::NodeArena,
        evaluator::core::{MAX_EVAL_DEPTH, evaluate},
        formula::{Formula, Session},
        lexer::{MAX_WORD_LEN, Token, tokenize, tokenize_with_offsets},
        parser::core::{MAX_DEPTH, parse},
        sampler::SampleGrid,
    },
    load_formula, sample_formula,
};

const TOLERANCE: f64 = 1e-12;

fn eval_at(src: &str, x: f64) -> f64 {
    let formula = load_formula(src).unwrap_or_else(|e| panic!("Formula {src:?} failed: {e}"));
    formula.evaluate(x)
           .unwrap_or_else(|e| panic!("Formula {src:?} failed at {x}: {e}"))
}

fn assert_close(src: &str, x: f64, expected: f64) {
    let got = eval_at(src, x);
    assert!((got - expected).abs() <= TOLERANCE,
            "{src} at x = {x}: expected {expected}, got {got}");
}

fn parse_error(src: &str) -> ParseError {
    match load_formula(src) {
        Err(FormulaError::Parse(e)) => e,
        Err(e) => panic!("Formula {src:?} failed with a non-parse error: {e}"),
        Ok(_) => panic!("Formula {src:?} parsed but was expected to fail"),
    }
}

fn lex_error(src: &str) -> LexError {
    match tokenize(src) {
        Err(e) => e,
        Ok(tokens) => panic!("Formula {src:?} tokenized to {tokens:?} but was expected to fail"),
    }
}

#[test]
fn reference_formulas() {
    assert_eq!(eval_at("(+ x 5)", 5.0), 10.0);
    assert_eq!(eval_at("(* x (+ x 1))", 3.0), 12.0);
    assert_eq!(eval_at("(sin x)", 0.0), 0.0);
    assert_close("(sin x)", FRAC_PI_2, 1.0);
    assert_eq!(eval_at("(cos (* x 2))", 0.0), 1.0);
}

#[test]
fn leaves_evaluate_directly() {
    assert_eq!(eval_at("42", 7.0), 42.0);
    assert_eq!(eval_at("x", 7.0), 7.0);
}

#[test]
fn nested_applications() {
    assert_close("(+ (sin x) (cos x))", 0.0, 1.0);
    assert_close("(* x (* (cos x) (sin x)))", 1.5, 1.5 * 1.5_f64.cos() * 1.5_f64.sin());
    assert_eq!(eval_at("(+ (+ 1 2) (* 3 4))", 0.0), 15.0);
}

#[test]
fn any_symbol_names_the_free_variable() {
    assert_eq!(eval_at("(+ y 1)", 2.0), 3.0);
    assert_eq!(eval_at("(+ xs 1)", 2.0), 3.0);
    assert_eq!(tokenize("value").unwrap(), vec![Token::Symbol('v')]);
}

#[test]
fn numbers_read_most_significant_digit_first() {
    assert_eq!(tokenize("12").unwrap(), vec![Token::Number(12.0)]);
    assert_eq!(tokenize("007").unwrap(), vec![Token::Number(7.0)]);
    assert_eq!(eval_at("(* 12 x)", 2.0), 24.0);
}

#[test]
fn whitespace_of_any_kind_separates_words() {
    assert_eq!(eval_at("(+\tx\n 1)", 1.0), 2.0);
    assert_eq!(eval_at("  (+ x 1)  ", 1.0), 2.0);
    assert_eq!(eval_at("(+ x 1)\n", 1.0), 2.0);
}

#[test]
fn open_paren_does_not_end_a_word() {
    let tokens = tokenize_with_offsets("ab(c").unwrap();
    assert_eq!(tokens, vec![(Token::Open, 2), (Token::Symbol('a'), 0)]);

    // `sin(` keeps accumulating, so the operator keyword is lost.
    assert!(matches!(parse_error("(sin(x))"), ParseError::ExpectedOperator { index: 1, .. }));
}

#[test]
fn close_paren_ends_a_word() {
    assert_eq!(tokenize("(sin x)").unwrap(),
               vec![Token::Open,
                    Token::Operator(Operator::Sine),
                    Token::Symbol('x'),
                    Token::Close]);
}

#[test]
fn operator_glued_to_operand_is_a_symbol() {
    assert_eq!(tokenize("+x").unwrap(), vec![Token::Symbol('+')]);
    assert!(matches!(parse_error("(+x 1)"), ParseError::ExpectedOperator { index: 1, .. }));
}

#[test]
fn lexer_limits() {
    let long = "a".repeat(MAX_WORD_LEN + 1);
    assert_eq!(lex_error(&format!("(+ {long} 1)")),
               LexError::WordTooLong { max:    MAX_WORD_LEN,
                                       offset: 3, });
    assert!(tokenize(&"a".repeat(MAX_WORD_LEN)).is_ok());

    assert!(tokenize("9007199254740991").is_ok());
    assert!(matches!(lex_error("9007199254740992"), LexError::LiteralTooLarge { offset: 0, .. }));
    assert!(matches!(lex_error("(+ x 123456789012345678901234567890)"),
                     LexError::LiteralTooLarge { offset: 5, .. }));

    assert!(matches!(load_formula("99999999999999999999"), Err(FormulaError::Lex(_))));
}

#[test]
fn binary_operator_with_one_operand_is_rejected() {
    assert_eq!(parse_error("(+ x)"),
               ParseError::MissingOperand { operator: Operator::Add,
                                            expected: 2,
                                            found:    1,
                                            index:    3, });
    assert!(matches!(parse_error("(* 2)"),
                     ParseError::MissingOperand { operator: Operator::Multiply,
                                                  .. }));
}

#[test]
fn operator_without_operands_is_rejected() {
    assert_eq!(parse_error("(sin)"),
               ParseError::MissingOperand { operator: Operator::Sine,
                                            expected: 1,
                                            found:    0,
                                            index:    2, });
}

#[test]
fn unary_operator_with_two_operands_is_rejected() {
    assert_eq!(parse_error("(sin x 1)"),
               ParseError::TooManyOperands { operator: Operator::Sine,
                                             expected: 1,
                                             index:    3, });
    assert!(matches!(parse_error("(+ x 1 2)"),
                     ParseError::TooManyOperands { operator: Operator::Add,
                                                   index: 4,
                                                   .. }));
}

#[test]
fn malformed_layouts_are_rejected() {
    assert_eq!(parse_error(""), ParseError::EmptyInput);
    assert_eq!(parse_error("   "), ParseError::EmptyInput);
    assert_eq!(parse_error("(+ x 1"), ParseError::UnexpectedEndOfInput { index: 4 });
    assert_eq!(parse_error("(+"), ParseError::UnexpectedEndOfInput { index: 2 });
    assert_eq!(parse_error("("), ParseError::UnexpectedEndOfInput { index: 1 });
    assert!(matches!(parse_error(")"), ParseError::UnexpectedToken { index: 0, .. }));
    assert!(matches!(parse_error("sin"), ParseError::UnexpectedToken { index: 0, .. }));
    assert!(matches!(parse_error("(x 1)"), ParseError::ExpectedOperator { index: 1, .. }));
    assert!(matches!(parse_error("(() 1)"), ParseError::ExpectedOperator { index: 1, .. }));
    assert!(matches!(parse_error("x 1"), ParseError::UnexpectedTrailingTokens { index: 1, .. }));
    assert!(matches!(parse_error("(+ x 1))"),
                     ParseError::UnexpectedTrailingTokens { index: 5, .. }));
}

#[test]
fn errors_render_for_users() {
    let message = load_formula("(+ x)").unwrap_err().to_string();
    assert!(message.contains("'+' takes 2 operand(s) but 1 were given"), "{message}");
}

#[test]
fn nesting_limit() {
    let nested = |levels: usize| format!("{}x{}", "(sin ".repeat(levels), ")".repeat(levels));

    let deepest = load_formula(&nested(MAX_DEPTH)).unwrap();
    assert_eq!(deepest.node_count(), MAX_DEPTH + 1);
    assert!(deepest.evaluate(0.5).is_ok());

    assert_eq!(parse_error(&nested(MAX_DEPTH + 1)),
               ParseError::NestingTooDeep { max:   MAX_DEPTH,
                                            index: 2 * MAX_DEPTH, });
}

#[test]
fn arena_capacity_bounds_the_tree() {
    let result = Formula::parse_in("(+ x 1)", NodeArena::with_capacity(2));
    assert_eq!(result.unwrap_err(),
               FormulaError::Parse(ParseError::ArenaExhausted { capacity: 2 }));

    let formula = Formula::parse_in("(+ x 1)", NodeArena::with_capacity(3)).unwrap();
    assert_eq!(formula.node_count(), 3);
    assert_eq!(formula.arena().capacity(), 3);
    assert_eq!(formula.arena().remaining(), 0);
}

#[test]
fn one_node_per_leaf_and_application() {
    let formula = load_formula("(* x (+ (sin x) 1))").unwrap();
    assert_eq!(formula.node_count(), 6);
}

#[test]
fn arena_release_frees_everything_at_once() {
    let mut arena = NodeArena::with_capacity(4);
    assert!(arena.is_empty());
    let root = parse(&tokenize("(cos x)").unwrap(), &mut arena).unwrap();
    assert_eq!(arena.len(), 2);
    assert_eq!(evaluate(&arena, root, 0.0).unwrap(), 1.0);
    arena.release();
}

#[test]
fn display_prints_prefix_form() {
    let formula = load_formula("(*   x\n(+ (sin x)   12))").unwrap();
    assert_eq!(formula.to_string(), "(* x (+ (sin x) 12))");
}

#[test]
fn mismatched_hand_built_nodes_are_internal_errors() {
    let mut arena = NodeArena::new();
    let x = arena.alloc(Node::Symbol('x')).unwrap();
    let bad_unary = arena.alloc(Node::Unary { op:      Operator::Add,
                                              operand: x, })
                         .unwrap();
    assert_eq!(evaluate(&arena, bad_unary, 1.0),
               Err(EvalError::ArityMismatch { operator: Operator::Add,
                                              expected: 2,
                                              found:    1, }));

    let bad_binary = arena.alloc(Node::Binary { op:    Operator::Cosine,
                                                left:  x,
                                                right: x, })
                          .unwrap();
    assert!(matches!(evaluate(&arena, bad_binary, 1.0),
                     Err(EvalError::ArityMismatch { operator: Operator::Cosine,
                                                    found: 2,
                                                    .. })));
}

#[test]
fn handles_from_another_arena_are_dangling() {
    let mut first = NodeArena::new();
    let foreign = first.alloc(Node::Number(1.0)).unwrap();
    let second = NodeArena::new();
    assert_eq!(evaluate(&second, foreign, 0.0), Err(EvalError::DanglingNode));
}

#[test]
fn evaluator_caps_recursion_on_hand_built_trees() {
    let mut arena = NodeArena::with_capacity(MAX_EVAL_DEPTH + 8);
    let mut node = arena.alloc(Node::Symbol('x')).unwrap();
    for _ in 0..=MAX_EVAL_DEPTH {
        node = arena.alloc(Node::Unary { op:      Operator::Sine,
                                         operand: node, })
                    .unwrap();
    }
    assert_eq!(evaluate(&arena, node, 0.0),
               Err(EvalError::DepthExceeded { max: MAX_EVAL_DEPTH }));
}

#[test]
fn display_elides_subtrees_past_the_depth_limit() {
    let levels = 200_000;
    let mut arena = NodeArena::with_capacity(levels + 1);
    let mut node = arena.alloc(Node::Symbol('x')).unwrap();
    for _ in 0..levels {
        node = arena.alloc(Node::Unary { op:      Operator::Sine,
                                         operand: node, })
                    .unwrap();
    }

    let text = Prefix::new(&arena, node).to_string();
    assert!(text.starts_with("(sin (sin "));
    assert!(text.contains('…'));
    assert!(!text.contains('x'));
    assert_eq!(text.matches("(sin ").count(), MAX_EVAL_DEPTH + 1);
}

#[test]
fn display_of_a_parsed_tree_starts_at_its_root() {
    let formula = load_formula("(+ (cos x) 2)").unwrap();
    let root = formula.arena().get(formula.root()).unwrap();
    assert!(matches!(root, Node::Binary { op: Operator::Add, .. }));
    assert_eq!(Prefix::new(formula.arena(), formula.root()).to_string(), formula.to_string());
}

#[test]
fn sampling_covers_the_default_grid() {
    let formula = load_formula("(* x (* (cos x) (sin x)))").unwrap();
    let points = formula.sample(SampleGrid::default()).unwrap();

    assert_eq!(points.len(), 4000);
    assert!((points[0].x + 20.0).abs() < 1e-9, "first sample at {}", points[0].x);
    assert!(points[2000].x.abs() < 1e-12, "middle sample at {}", points[2000].x);
    assert!(points.windows(2).all(|pair| pair[0].x < pair[1].x));
    for point in &points {
        assert_eq!(point.y, formula.evaluate(point.x).unwrap());
    }
}

#[test]
fn sampling_is_centred_on_zero() {
    let grid = SampleGrid::new(4, 0.5);
    let xs: Vec<f64> = grid.xs().collect();
    assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5]);

    assert!(SampleGrid::new(0, 0.5).xs().next().is_none());
}

#[test]
fn callable_matches_evaluate() {
    let formula = load_formula("(+ (* x x) 1)").unwrap();
    let f = formula.as_fn();
    assert_eq!(f(3.0).unwrap(), 10.0);
    assert_eq!(f(-2.0).unwrap(), formula.evaluate(-2.0).unwrap());
}

#[test]
fn sample_formula_reports_invalid_text() {
    assert!(sample_formula("(cos)", SampleGrid::default()).is_err());
    assert_eq!(sample_formula("x", SampleGrid::new(10, 1.0)).unwrap().len(), 10);
}

#[test]
fn session_swaps_formulas_only_on_success() {
    let mut session = Session::new();
    assert!(session.active().is_none());
    assert!(session.sample(SampleGrid::default()).unwrap().is_empty());

    session.load("(+ x 1)").unwrap();
    assert_eq!(session.active().unwrap().evaluate(1.0).unwrap(), 2.0);

    assert!(session.load("(+ x").is_err());
    assert_eq!(session.active().unwrap().to_string(), "(+ x 1)");

    session.load("(* x 3)").unwrap();
    let points = session.sample(SampleGrid::new(3, 1.0)).unwrap();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![-4.5, -1.5, 1.5]);

    session.clear();
    assert!(session.active().is_none());
}
