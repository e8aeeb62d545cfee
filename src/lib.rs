//! # Button calculator core
//!
//! Digit and operator buttons append tokens to an expression buffer, the
//! equals button evaluates it, and the reset button clears it:
//!
//! ```
//! use tapcalc::{Calculator, Key, Operation};
//!
//! let mut calc = Calculator::new();
//! calc.press(Key::Digit(2));
//! calc.press(Key::Op(Operation::Add));
//! calc.press(Key::Digit(3));
//! calc.press(Key::Op(Operation::Multiply));
//! calc.press(Key::Digit(4));
//! assert_eq!(calc.press(Key::Equals), Some(Ok("14".to_string())));
//! ```
//!
//! Operators (starting from highest priority):
//! * `-` - unary minus (a `+` in the same position is ignored)
//! * `*`, `/` - multiplication, division
//! * `+`, `-` - addition, subtraction
//!
//! Operators of the same priority are evaluated left to right.
//!
//! An expression is evaluated only when it ends with a digit: pressing equals
//! after `2+` does nothing. Integer arithmetic is exact (`1/3*3` is `1`); a
//! number with a decimal point switches the calculation to floats.
//!
//! The result is shown without decimals if it is a whole number, and with two
//! decimal places otherwise: `4` and `4.50`. Division by zero and malformed
//! expressions produce a [`CalcError`] instead of a number.

#[macro_use]
extern crate pest_derive;

pub mod calculator;
pub mod errors;
pub mod format;
pub mod parse;
pub mod settings;
mod stack;
pub mod value;

pub use calculator::{evaluate_expression, is_evaluable, Calculator, Key, Operation};
pub use errors::{CalcError, CalcResult};
pub use format::format_result;
pub use settings::Settings;
