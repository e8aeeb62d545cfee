use crate::errors::*;
use crate::value::*;

use lazy_static::lazy_static;

#[derive(Clone, Debug)]
pub(crate) enum Entry {
    Val(Value),
    Op(String, i32, bool),
}

/// Operator stack and output queue of the shunting-yard algorithm
pub(crate) struct Stack {
    pub(crate) queue: Vec<Entry>,
    pub(crate) output: Vec<Entry>,
    values: Vec<Value>,
}

pub(crate) const UNARY_MINUS: &str = "---";

lazy_static! {
    /// Binary operators a button can put into the buffer
    pub(crate) static ref BINARY_OPS: Vec<&'static str> = ["+", "-", "*", "/"].to_vec();
}

macro_rules! one_arg_op {
    ($id:ident) => {
        fn $id(&mut self) -> CalcResult<()> {
            let v = self.values.pop().ok_or(CalcError::TooManyOps)?;
            let v = v.$id()?;
            self.values.push(v);
            Ok(())
        }
    };
}
macro_rules! two_arg_op {
    ($id:ident) => {
        fn $id(&mut self) -> CalcResult<()> {
            if self.values.len() < 2 {
                return Err(CalcError::TooManyOps);
            }

            let v2 = self.values.pop().ok_or(CalcError::Unreachable)?;
            let v1 = self.values.pop().ok_or(CalcError::Unreachable)?;
            let v = v1.$id(v2)?;
            self.values.push(v);
            Ok(())
        }
    };
}

impl Stack {
    fn priority(op: &str) -> (i32, bool) {
        match op {
            UNARY_MINUS => (20, true),     // negate
            "*" | "/" => (12, false), // mult, div
            "+" | "-" => (8, false),  // add, sub
            _ => (0, false),          // invalid op
        }
    }

    pub(crate) fn is_binary_op(s: &str) -> bool {
        BINARY_OPS.iter().any(|op| *op == s)
    }

    // move operators from the queue to output while the top operator in the
    // queue has equal or greater priority
    fn pop_while_priority(&mut self, priority: i32) {
        while let Some(e) = self.queue.pop() {
            match &e {
                Entry::Op(_, p, right) if *p > priority || (*p == priority && !*right) => {
                    self.output.push(e);
                }
                _ => {
                    self.queue.push(e);
                    return;
                }
            }
        }
    }

    // move all operators from queue to output
    // Must be called only after the expression ends.
    fn pop_all(&mut self) -> CalcResult<()> {
        while let Some(v) = self.queue.pop() {
            match &v {
                Entry::Op(..) => self.output.push(v),
                Entry::Val(..) => return Err(CalcError::Unreachable),
            }
        }
        Ok(())
    }

    // ------------ PUBLIC -----------------

    pub(crate) fn new() -> Self {
        Stack {
            queue: Vec::new(),
            output: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Pushes either a value (`op` is empty) or an operator
    pub(crate) fn push(&mut self, op: &str, val: Option<Value>) -> CalcResult<()> {
        if op.is_empty() {
            let v = val.ok_or(CalcError::EmptyValue)?;
            self.output.push(Entry::Val(v));
            return Ok(());
        }

        let (pri, right_assoc) = Stack::priority(op);
        if pri == 0 {
            return Err(CalcError::InvalidOp(op.to_owned()));
        }

        self.pop_while_priority(pri);
        self.queue.push(Entry::Op(op.to_owned(), pri, right_assoc));

        Ok(())
    }

    pub(crate) fn calculate(&mut self) -> CalcResult<Value> {
        self.pop_all()?;
        if self.output.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        self.values = Vec::new();
        let output = std::mem::take(&mut self.output);
        for o in output {
            match o {
                Entry::Val(v) => self.values.push(v),
                Entry::Op(op, ..) => self.process_operator(&op)?,
            }
        }

        if self.values.len() != 1 {
            return Err(CalcError::InsufficientOps);
        }

        self.values.pop().ok_or(CalcError::EmptyExpression)
    }

    fn process_operator(&mut self, op: &str) -> CalcResult<()> {
        match op {
            "/" => self.divide(),
            "*" => self.multiply(),
            "+" => self.addition(),
            "-" => self.subtract(),
            UNARY_MINUS => self.negate(),
            _ => Err(CalcError::InvalidOp(op.to_string())),
        }
    }

    one_arg_op!(negate);
    two_arg_op!(addition);
    two_arg_op!(subtract);
    two_arg_op!(multiply);
    two_arg_op!(divide);
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn int(i: i64) -> Option<Value> {
        Some(Value::Int(BigInt::from(i)))
    }

    #[test]
    fn test_simple_order() {
        let mut stack = Stack::new();
        // 2 + 3 * 2 + 5 = 13
        let _ = stack.push("", int(2));
        let _ = stack.push("+", None);
        let _ = stack.push("", int(3));
        let _ = stack.push("*", None);
        let _ = stack.push("", int(2));
        let _ = stack.push("+", None);
        let _ = stack.push("", int(5));
        let v = stack.calculate();
        assert_eq!(v, Ok(Value::Int(BigInt::from(13))));
    }

    #[test]
    fn test_left_assoc() {
        let mut stack = Stack::new();
        // 10 - 4 - 3 = 3
        let _ = stack.push("", int(10));
        let _ = stack.push("-", None);
        let _ = stack.push("", int(4));
        let _ = stack.push("-", None);
        let _ = stack.push("", int(3));
        assert_eq!(stack.calculate(), Ok(Value::Int(BigInt::from(3))));

        let mut stack = Stack::new();
        // 8 / 4 / 2 = 1
        let _ = stack.push("", int(8));
        let _ = stack.push("/", None);
        let _ = stack.push("", int(4));
        let _ = stack.push("/", None);
        let _ = stack.push("", int(2));
        assert_eq!(stack.calculate(), Ok(Value::Int(BigInt::from(1))));
    }

    #[test]
    fn test_unary_minus() {
        let mut stack = Stack::new();
        // 2 * -3 + 1 = -5
        let _ = stack.push("", int(2));
        let _ = stack.push("*", None);
        let _ = stack.push(UNARY_MINUS, None);
        let _ = stack.push("", int(3));
        let _ = stack.push("+", None);
        let _ = stack.push("", int(1));
        assert_eq!(stack.calculate(), Ok(Value::Int(BigInt::from(-5))));
    }

    #[test]
    fn test_fraction() {
        let mut stack = Stack::new();
        // 1 / 4 + 1 / 4 = 1/2
        let _ = stack.push("", int(1));
        let _ = stack.push("/", None);
        let _ = stack.push("", int(4));
        let _ = stack.push("+", None);
        let _ = stack.push("", int(1));
        let _ = stack.push("/", None);
        let _ = stack.push("", int(4));
        assert_eq!(
            stack.calculate(),
            Ok(Value::Ratio(BigRational::new(BigInt::from(1), BigInt::from(2))))
        );
    }

    #[test]
    fn test_errors() {
        let mut stack = Stack::new();
        assert_eq!(stack.calculate(), Err(CalcError::EmptyExpression));

        let mut stack = Stack::new();
        let _ = stack.push("", int(2));
        let _ = stack.push("+", None);
        assert_eq!(stack.calculate(), Err(CalcError::TooManyOps));

        let mut stack = Stack::new();
        let _ = stack.push("", int(2));
        let _ = stack.push("", int(3));
        assert_eq!(stack.calculate(), Err(CalcError::InsufficientOps));

        let mut stack = Stack::new();
        assert_eq!(stack.push("%", None), Err(CalcError::InvalidOp("%".to_string())));
        assert_eq!(stack.push("", None), Err(CalcError::EmptyValue));
    }
}
