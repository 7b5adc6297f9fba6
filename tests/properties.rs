use postfix_trainer::{convert, convert_with_steps, error::EvaluationError, evaluate, tokenize};
use proptest::{prelude::*, sample::select};

#[derive(Debug, Clone)]
enum Expr {
    Num(u8),
    Bin(Box<Expr>, char, Box<Expr>),
}

impl Expr {
    /// Renders the expression with every binary operation parenthesised.
    fn render(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Bin(left, op, right) => format!("({} {op} {})", left.render(), right.render()),
        }
    }

    /// Evaluates the tree directly; `None` on division by zero.
    fn value(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(f64::from(*n)),
            Self::Bin(left, op, right) => {
                let (a, b) = (left.value()?, right.value()?);
                match op {
                    '+' => Some(a + b),
                    '-' => Some(a - b),
                    '*' => Some(a * b),
                    '/' if b == 0.0 => None,
                    '/' => Some(a / b),
                    '^' => Some(a.powf(b)),
                    _ => unreachable!(),
                }
            },
        }
    }
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = (0u8..10).prop_map(Expr::Num);
    leaf.prop_recursive(4, 32, 2, |inner| {
            // Exponents stay small leaves so powers remain finite.
            prop_oneof![
                (inner.clone(), select(vec!['+', '-', '*', '/']), inner.clone())
                    .prop_map(|(left, op, right)| Expr::Bin(Box::new(left), op, Box::new(right))),
                (inner, 0u8..4)
                    .prop_map(|(base, exp)| Expr::Bin(Box::new(base), '^', Box::new(Expr::Num(exp)))),
            ]
        })
}

/// A parenthesis-free chain such as `3 + 4 * 2 - 7 / 5`.
fn flat_chain() -> impl Strategy<Value = (u8, Vec<(char, u8)>)> {
    (1u8..10, prop::collection::vec((select(vec!['+', '-', '*', '/']), 1u8..10), 0..6))
}

/// A parenthesis-free power tower such as `2 ^ 3 ^ 2`.
fn power_tower() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..4, 2..4)
}

/// Powers group from the right: `a ^ b ^ c` is `a ^ (b ^ c)`.
fn tower_value(numbers: &[u8]) -> f64 {
    numbers.iter()
           .rev()
           .map(|n| f64::from(*n))
           .reduce(|exp, base| base.powf(exp))
           .unwrap_or_default()
}

fn render_chain(first: u8, rest: &[(char, u8)]) -> String {
    let mut text = first.to_string();
    for (op, n) in rest {
        text.push_str(&format!(" {op} {n}"));
    }
    text
}

/// Standard arithmetic for `+ - * /` chains: products and quotients bind
/// before sums.
fn chain_value(first: u8, rest: &[(char, u8)]) -> f64 {
    let mut sum = 0.0;
    let mut sign = 1.0;
    let mut term = f64::from(first);
    for (op, n) in rest {
        let n = f64::from(*n);
        match op {
            '*' => term *= n,
            '/' => term /= n,
            '+' | '-' => {
                sum += sign * term;
                sign = if *op == '+' { 1.0 } else { -1.0 };
                term = n;
            },
            _ => unreachable!(),
        }
    }
    sum + sign * term
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-4 * a.abs().max(1.0)
}

proptest! {
    #[test]
    fn parenthesised_expressions_round_trip(tree in expr()) {
        let postfix = convert(&tree.render()).unwrap().postfix;

        match tree.value() {
            Some(expected) => {
                let value = evaluate(&postfix).unwrap();
                prop_assert!(close(value, expected), "{} = {value}, expected {expected}", tree.render());
            },
            None => {
                let divided_by_zero = matches!(evaluate(&postfix), Err(EvaluationError::DivisionByZero { .. }));
                prop_assert!(divided_by_zero);
            },
        }
    }

    #[test]
    fn chains_respect_precedence((first, rest) in flat_chain()) {
        let infix = render_chain(first, &rest);
        let value = evaluate(&convert(&infix).unwrap().postfix).unwrap();

        prop_assert!(close(value, chain_value(first, &rest)), "{infix} = {value}");
    }

    #[test]
    fn power_towers_group_from_the_right(numbers in power_tower()) {
        let infix = numbers.iter().map(u8::to_string).collect::<Vec<_>>().join(" ^ ");
        let postfix = convert(&infix).unwrap().postfix;

        let operands = numbers.iter().map(u8::to_string).collect::<Vec<_>>().join(" ");
        let operators = vec!["^"; numbers.len() - 1].join(" ");
        prop_assert_eq!(&postfix, &format!("{operands} {operators}"));

        let value = evaluate(&postfix).unwrap();
        prop_assert!(close(value, tower_value(&numbers)), "{infix} = {value}");
    }

    #[test]
    fn tokenizing_is_repeatable(input in "[0-9a-z+*/^() .-]{0,24}") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    #[test]
    fn trace_ends_with_final_postfix(tree in expr()) {
        let infix = tree.render();
        let plain = convert(&infix).unwrap();
        let traced = convert_with_steps(&infix).unwrap();
        let steps = traced.steps.unwrap();

        prop_assert_eq!(&plain.postfix, &traced.postfix);
        prop_assert_eq!(steps.len(), tokenize(&infix).len());
        prop_assert_eq!(&steps.last().unwrap().output, &plain.postfix);
    }

    #[test]
    fn chain_trace_has_one_flush_step((first, rest) in flat_chain()) {
        let infix = render_chain(first, &rest);
        let steps = convert_with_steps(&infix).unwrap().steps.unwrap();
        let flush = usize::from(!rest.is_empty());

        prop_assert_eq!(steps.len(), 2 * rest.len() + 1 + flush);
        prop_assert_eq!(steps.last().unwrap().token.is_none(), flush == 1);
    }
}
