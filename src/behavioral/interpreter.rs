//! Behavioral pattern: Interpreter
//! Example: evaluating `(5 + 3) - 2` from an expression tree
//!
//! Each grammar rule is one enum variant; interpretation is a recursive walk.

use std::fmt;

use crate::console::Console;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Box::new(left), Box::new(right))
    }

    pub fn sub(left: Expr, right: Expr) -> Self {
        Expr::Sub(Box::new(left), Box::new(right))
    }

    pub fn interpret(&self) -> i64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Add(left, right) => left.interpret().wrapping_add(right.interpret()),
            Expr::Sub(left, right) => left.interpret().wrapping_sub(right.interpret()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Add(left, right) => write!(f, "({left} + {right})"),
            Expr::Sub(left, right) => write!(f, "({left} - {right})"),
        }
    }
}

pub fn run(console: &mut Console<'_>) -> Result<()> {
    let expr = Expr::sub(Expr::add(Expr::Number(5), Expr::Number(3)), Expr::Number(2));

    console.line(format!("Expression: {expr}"))?;
    console.line(format!("Result: {}", expr.interpret()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_expression() {
        let expr = Expr::sub(Expr::add(Expr::Number(5), Expr::Number(3)), Expr::Number(2));
        assert_eq!(expr.interpret(), 6);
        assert_eq!(expr.to_string(), "((5 + 3) - 2)");
    }

    #[test]
    fn test_terminal() {
        assert_eq!(Expr::Number(-4).interpret(), -4);
    }

    #[test]
    fn test_narration() {
        assert_eq!(
            Console::capture(run).unwrap(),
            "Expression: ((5 + 3) - 2)\nResult: 6\n"
        );
    }

    fn arb_expr() -> impl Strategy<Value = Expr> {
        let leaf = (-1000i64..1000).prop_map(Expr::Number);
        leaf.prop_recursive(6, 64, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::add(l, r)),
                (inner.clone(), inner).prop_map(|(l, r)| Expr::sub(l, r)),
            ]
        })
    }

    /// Reference evaluation: fold the tree into a flat sum of signed leaves.
    fn signed_leaves(expr: &Expr, sign: i64, out: &mut Vec<i64>) {
        match expr {
            Expr::Number(n) => out.push(sign * n),
            Expr::Add(l, r) => {
                signed_leaves(l, sign, out);
                signed_leaves(r, sign, out);
            }
            Expr::Sub(l, r) => {
                signed_leaves(l, sign, out);
                signed_leaves(r, -sign, out);
            }
        }
    }

    proptest! {
        #[test]
        fn test_matches_signed_leaf_sum(expr in arb_expr()) {
            let mut leaves = Vec::new();
            signed_leaves(&expr, 1, &mut leaves);
            prop_assert_eq!(expr.interpret(), leaves.iter().sum::<i64>());
        }
    }
}
