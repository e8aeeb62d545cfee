use std::str::FromStr;

use tracing::{debug, warn};

use crate::errors::*;
use crate::parse::eval;
use crate::settings::Settings;

/// Operation buttons. The discriminant is the button tag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Subtract = 12,
    Multiply = 13,
    Divide = 14,
    Reset = 15,
    Add = 18,
}

impl Operation {
    pub fn from_tag(tag: i32) -> Option<Operation> {
        match tag {
            12 => Some(Operation::Subtract),
            13 => Some(Operation::Multiply),
            14 => Some(Operation::Divide),
            15 => Some(Operation::Reset),
            18 => Some(Operation::Add),
            _ => None,
        }
    }

    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Text appended to the expression. Reset has none
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Reset => "",
        }
    }
}

/// A single button press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Op(Operation),
    /// Operation button given by its raw tag; unknown tags do nothing
    Tag(i32),
    Equals,
}

impl FromStr for Key {
    type Err = CalcError;

    /// `0`..`9`, `.`, `+ - * /`, `=`, `C` (or `AC`) and `#<tag>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "." | "," => Key::Point,
            "+" => Key::Op(Operation::Add),
            "-" => Key::Op(Operation::Subtract),
            "*" | "x" => Key::Op(Operation::Multiply),
            "/" => Key::Op(Operation::Divide),
            "=" => Key::Equals,
            "c" | "C" | "AC" | "ac" => Key::Op(Operation::Reset),
            _ => {
                if let Some(tag) = s.strip_prefix('#') {
                    let tag = tag.parse().map_err(|_| CalcError::UnknownKey(s.to_string()))?;
                    Key::Tag(tag)
                } else {
                    match s.parse::<u8>() {
                        Ok(d) if d <= 9 && s.len() == 1 => Key::Digit(d),
                        _ => return Err(CalcError::UnknownKey(s.to_string())),
                    }
                }
            }
        };
        Ok(key)
    }
}

/// Returns true if the expression can be evaluated: it must end with a digit
pub fn is_evaluable(buffer: &str) -> bool {
    buffer.chars().last().map_or(false, |c| c.is_ascii_digit())
}

/// Evaluates an expression to the number shown on the display
pub fn evaluate_expression(buffer: &str) -> CalcResult<f64> {
    let f = eval(buffer)?.to_f64()?;
    if !f.is_finite() {
        return Err(CalcError::NotFinite(f));
    }
    Ok(f)
}

/// Calculator screen state: the expression line and the result line
#[derive(Debug, Default)]
pub struct Calculator {
    buffer: String,
    result: String,
    settings: Settings,
}

impl Calculator {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Calculator {
            settings,
            ..Default::default()
        }
    }

    /// The accumulated expression
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Text of the result line: last formatted result, error message, or empty
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Appends a token to the expression as is. No syntax check is done
    pub fn append_token(&mut self, token: &str) {
        self.buffer.push_str(token);
    }

    /// Clears the expression and the result line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.result.clear();
    }

    /// Evaluates the expression.
    ///
    /// Returns `None` without touching the result line if the expression
    /// does not end with a digit. Otherwise returns the formatted result or
    /// the error, and the result line shows the same.
    pub fn evaluate(&mut self) -> Option<CalcResult<String>> {
        if !is_evaluable(&self.buffer) {
            debug!(buffer = %self.buffer, "nothing to evaluate");
            return None;
        }

        let res = evaluate_expression(&self.buffer).map(|f| self.settings.format(f));
        match &res {
            Ok(s) => self.result = s.clone(),
            Err(e) => {
                warn!(buffer = %self.buffer, error = %e, "evaluation failed");
                self.result = e.to_string();
            }
        }
        Some(res)
    }

    pub fn number_tap(&mut self, tag: u8) {
        debug!("TAG = {}", tag);
        self.append_token(&tag.to_string());
    }

    pub fn point_tap(&mut self) {
        debug!("TAG = .");
        self.append_token(".");
    }

    pub fn operation_tap(&mut self, tag: i32) {
        debug!("TAG = {}", tag);
        match Operation::from_tag(tag) {
            Some(Operation::Reset) => self.reset(),
            Some(op) => self.append_token(op.symbol()),
            None => debug!(tag, "unknown operation"),
        }
    }

    pub fn equals_tap(&mut self) -> Option<CalcResult<String>> {
        debug!("TAG = =");
        self.evaluate()
    }

    /// Dispatches a key to the matching tap. Only `Equals` returns a result
    pub fn press(&mut self, key: Key) -> Option<CalcResult<String>> {
        match key {
            Key::Digit(d) => self.number_tap(d),
            Key::Point => self.point_tap(),
            Key::Op(op) => self.operation_tap(op.tag()),
            Key::Tag(tag) => self.operation_tap(tag),
            Key::Equals => return self.equals_tap(),
        }
        None
    }
}
