use pest::Parser;
use tracing::trace;

use crate::errors::*;
use crate::stack::{Stack, UNARY_MINUS};
use crate::value::*;

#[derive(Parser)]
#[grammar = "calc.pest"]
pub struct CalcParser;

/// evaluates a given expression and returns either result or error
///
/// `+` and `-` right after another operator (or at the very start) are read
/// as signs, so `-5+2` and `2*-3` are valid. Any other operator in that
/// position, and numbers that follow each other without an operator, make
/// the expression invalid.
pub fn eval(expr: &str) -> CalcResult<Value> {
    let pairs = CalcParser::parse(Rule::expr, expr)
        .map_err(|e| CalcError::ParseFailed(format!("unexpected input at {:?}", e.location)))?;

    let mut is_last_value = false;
    let mut stk = Stack::new();
    for pair in pairs {
        let rule = pair.as_rule();
        let val = pair.as_span().as_str();
        trace!(?rule, token = val, "push");
        match rule {
            Rule::int | Rule::float => {
                if is_last_value {
                    return Err(CalcError::ParseFailed(format!("missing operator before '{}'", val)));
                }
                let v = if rule == Rule::int {
                    Value::from_str_integer(val)?
                } else {
                    Value::from_str_float(val)?
                };
                stk.push("", Some(v))?;
                is_last_value = true;
            }
            Rule::operator => {
                if is_last_value {
                    if !Stack::is_binary_op(val) {
                        return Err(CalcError::InvalidOp(val.to_string()));
                    }
                    stk.push(val, None)?;
                } else if val == "-" {
                    stk.push(UNARY_MINUS, None)?;
                } else if val != "+" {
                    return Err(CalcError::ParseFailed(format!("operator '{}' without left operand", val)));
                }
                is_last_value = false;
            }
            Rule::EOI => {}
            _ => return Err(CalcError::Unreachable),
        }
    }
    stk.calculate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn int(i: i64) -> CalcResult<Value> {
        Ok(Value::Int(BigInt::from(i)))
    }

    #[test]
    fn test_expr() {
        assert_eq!(eval("2+3"), int(5));
        assert_eq!(eval("2+3*4"), int(14));
        assert_eq!(eval("2*3+4"), int(10));
        assert_eq!(eval("10-4-3"), int(3));
        assert_eq!(eval("100/10/5"), int(2));
        assert_eq!(eval("7-2*3+8/4"), int(3));
        assert_eq!(eval("12"), int(12));
        assert_eq!(eval(" 2 + 3 "), int(5));
    }

    #[test]
    fn test_signs() {
        assert_eq!(eval("-5+2"), int(-3));
        assert_eq!(eval("2*-3"), int(-6));
        assert_eq!(eval("2--3"), int(5));
        assert_eq!(eval("+4"), int(4));
        assert_eq!(eval("2+-+3"), int(-1));
    }

    #[test]
    fn test_fractions_and_floats() {
        assert_eq!(
            eval("1/3"),
            Ok(Value::Ratio(BigRational::new(BigInt::from(1), BigInt::from(3))))
        );
        assert_eq!(eval("1/3*3"), int(1));
        assert_eq!(eval("2.5*2"), Ok(Value::Float(5.0)));
        assert_eq!(eval("9/2.0"), Ok(Value::Float(4.5)));
        assert_eq!(eval(".5+1"), Ok(Value::Float(1.5)));
        assert_eq!(eval("3.+1"), Ok(Value::Float(4.0)));
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(eval("2..3"), Err(CalcError::ParseFailed(..))));
        assert!(matches!(eval("1.2.3"), Err(CalcError::ParseFailed(..))));
        assert!(matches!(eval("2*/3"), Err(CalcError::ParseFailed(..))));
        assert!(matches!(eval("/3"), Err(CalcError::ParseFailed(..))));
        assert!(matches!(eval("2^3"), Err(CalcError::ParseFailed(..))));
        assert!(matches!(eval("(2+3)"), Err(CalcError::ParseFailed(..))));
        assert!(matches!(eval("2 3"), Err(CalcError::ParseFailed(..))));
        assert_eq!(eval(""), Err(CalcError::EmptyExpression));
        assert_eq!(eval("2+"), Err(CalcError::TooManyOps));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(eval("5/0"), Err(CalcError::DividedByZero("5".to_string())));
        assert_eq!(eval("1+6/0.0"), Err(CalcError::DividedByZero("6".to_string())));
        assert!(eval("5/(0)").is_err());
    }
}
