use rpncalc::{
    base::{self, SilentHandler, VoidHandler},
    evaluate::{self, DivisionByZero, Evaluator},
    lexical::{
        self,
        token::{Operator, Token},
        token_stream::TokenStream,
        ExpectedDigitAfterDecimalPoint, InvalidCharacter,
    },
    syntax::{self, postfix::Postfix},
    util::format_number,
};

/// Small deterministic generator so the generated cases are the same on every run.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }

    fn digits(&mut self, min_len: u64) -> String {
        let len = min_len + self.below(6);
        (0..len)
            .map(|_| char::from(b'0' + u8::try_from(self.below(10)).unwrap()))
            .collect()
    }
}

fn calculate(source: &str) -> (String, String, f64) {
    let evaluation = rpncalc::evaluate(source, &VoidHandler).expect("Failed to evaluate");
    (
        evaluation.tokens().to_string(),
        evaluation.postfix().to_string(),
        evaluation.value(),
    )
}

#[test]
fn precedence() {
    let (tokens, postfix, value) = calculate("1 + 2 * 3");
    assert_eq!(tokens, "1 + 2 * 3");
    assert_eq!(postfix, "1 2 3 * +");
    assert_eq!(value, 7.0);
}

#[test]
fn left_associativity() {
    let (_, postfix, value) = calculate("8 - 3 - 2");
    assert_eq!(postfix, "8 3 - 2 -");
    assert_eq!(value, 3.0);

    let (_, postfix, value) = calculate("16 / 4 / 2");
    assert_eq!(postfix, "16 4 / 2 /");
    assert_eq!(value, 2.0);
}

#[test]
fn parentheses_override_precedence() {
    let (tokens, postfix, value) = calculate("(1 + 2) * 3");
    assert_eq!(tokens, "( 1 + 2 ) * 3");
    assert_eq!(postfix, "1 2 + 3 *");
    assert_eq!(value, 9.0);
}

#[test]
fn nested_parentheses_and_whitespace() {
    let (_, postfix, value) = calculate("\t((2.5 + 0.5)*(10 -4))/ 3\n");
    assert_eq!(postfix, "2.5 0.5 + 10 4 - * 3 /");
    assert_eq!(value, 6.0);
}

#[test]
fn fractional_result() {
    let (_, _, value) = calculate("7 / 2");
    assert_eq!(format_number(value), "3.5");
}

#[test]
fn division_by_zero() {
    let postfix = [
        Token::Number(1.0),
        Token::Number(0.0),
        Token::Operator(Operator::Divide),
    ];

    assert_eq!(
        Evaluator::evaluate(&postfix),
        Err(evaluate::Error::DivisionByZero(DivisionByZero))
    );
}

#[test]
fn unmatched_left_parenthesis() {
    let err = rpncalc::evaluate("(1 + 2", &VoidHandler).expect_err("Expecting failure");
    assert!(matches!(
        err,
        base::Error::SyntaxError(syntax::Error::MismatchedParentheses(_))
    ));
}

#[test]
fn unmatched_right_parenthesis() {
    let err = rpncalc::evaluate("1 + 2)", &VoidHandler).expect_err("Expecting failure");
    assert!(matches!(
        err,
        base::Error::SyntaxError(syntax::Error::MismatchedParentheses(_))
    ));
}

#[test]
fn leading_unary_minus() {
    let err = rpncalc::evaluate("-3 + 1", &VoidHandler).expect_err("Expecting failure");
    assert_eq!(
        err,
        base::Error::SyntaxError(syntax::Error::UnaryMinusNotSupported(
            syntax::error::UnaryMinusNotSupported
        ))
    );
}

#[test]
fn operator_in_unary_position() {
    let err = rpncalc::evaluate("2 * / 3", &VoidHandler).expect_err("Expecting failure");
    assert_eq!(
        err,
        base::Error::SyntaxError(syntax::Error::OperatorInUnaryPosition(
            syntax::error::OperatorInUnaryPosition {
                operator: Operator::Divide
            }
        ))
    );
}

#[test]
fn invalid_character() {
    assert_eq!(
        TokenStream::tokenize("1 + a"),
        Err(lexical::Error::InvalidCharacter(InvalidCharacter {
            character: 'a',
            position: 4
        }))
    );
}

#[test]
fn malformed_decimal() {
    assert_eq!(
        TokenStream::tokenize("1."),
        Err(lexical::Error::ExpectedDigitAfterDecimalPoint(
            ExpectedDigitAfterDecimalPoint { position: 0 }
        ))
    );
}

#[test]
fn empty_expression() {
    let err = rpncalc::evaluate("  ", &VoidHandler).expect_err("Expecting failure");
    assert!(matches!(
        err,
        base::Error::EvaluateError(evaluate::Error::EmptyExpression(_))
    ));
}

#[test]
fn missing_operator_leaves_stack_items() {
    let err = rpncalc::evaluate("1 2 + 3", &VoidHandler).expect_err("Expecting failure");
    assert_eq!(
        err,
        base::Error::EvaluateError(
            evaluate::LeftoverStackItems {
                stack: vec![1.0, 5.0]
            }
            .into()
        )
    );
}

#[test]
fn handler_receives_only_the_failing_stage() {
    let handler = SilentHandler::new();
    let _ = rpncalc::evaluate("1 +", &handler);

    let received = handler.into_received();
    assert_eq!(received.len(), 1);
    assert!(matches!(
        received[0],
        base::Error::EvaluateError(evaluate::Error::StackUnderflow(_))
    ));
    assert!(received[0].to_string().contains("stack underflow"));
}

#[test]
fn number_literals_round_trip() {
    let mut rng = Lcg(0x5eed);

    for _ in 0..500 {
        let literal = if rng.below(2) == 0 {
            rng.digits(1)
        } else {
            format!("{}.{}", rng.digits(1), rng.digits(1))
        };

        let tokens = TokenStream::tokenize(&literal).expect("Failed to tokenize");
        let expected: f64 = literal.parse().unwrap();

        assert_eq!(tokens.len(), 1, "literal `{literal}`");
        assert_eq!(tokens[0], Token::Number(expected), "literal `{literal}`");

        let rendered = format_number(expected);
        let reparsed = TokenStream::tokenize(&rendered).expect("Failed to tokenize rendering");
        assert_eq!(reparsed[0], Token::Number(expected), "rendering `{rendered}`");
    }
}

/// Builds a random well-formed infix expression.
fn expression(rng: &mut Lcg, depth: u32, out: &mut String) {
    let terms = 1 + rng.below(3);

    for i in 0..terms {
        if i > 0 {
            let operator = ['+', '-', '*', '/'][usize::try_from(rng.below(4)).unwrap()];
            out.push(' ');
            out.push(operator);
            out.push(' ');
        }

        if depth > 0 && rng.below(3) == 0 {
            out.push('(');
            expression(rng, depth - 1, out);
            out.push(')');
        } else {
            out.push_str(&rng.digits(1));
        }
    }
}

#[test]
fn postfix_drops_only_parentheses() {
    let mut rng = Lcg(42);

    for _ in 0..300 {
        let mut source = String::new();
        expression(&mut rng, 4, &mut source);

        let tokens = TokenStream::tokenize(&source).expect("Failed to tokenize");
        let parentheses = tokens
            .iter()
            .filter(|token| token.is_left_parenthesis() || token.is_right_parenthesis())
            .count();

        let postfix = Postfix::from_infix(&tokens).expect("Failed to convert");

        assert_eq!(postfix.len(), tokens.len() - parentheses, "expression `{source}`");
        assert!(
            postfix
                .iter()
                .all(|token| token.is_number() || token.is_operator()),
            "expression `{source}`"
        );
    }
}
