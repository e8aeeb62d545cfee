use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use std::fmt;

use crate::errors::*;

/// Supported value types
#[derive(Clone)]
pub enum Value {
    /// Big integer number
    Int(BigInt),
    /// Float number
    Float(f64),
    /// Rational number (numerator and denominator are big integers)
    Ratio(BigRational),
}

fn format_f64(g: f64) -> String {
    if !g.is_finite() {
        return format!("{}", g);
    }
    let mut buf = dtoa::Buffer::new();
    buf.format(g).to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            Value::Int(ref i) => write!(f, "{}", i),
            Value::Float(ref g) => write!(f, "{}", format_f64(*g)),
            Value::Ratio(ref r) => write!(f, "{}/{}", r.numer(), r.denom()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            Value::Int(ref i) => write!(f, "Int({:?})", i),
            Value::Float(ref g) => write!(f, "Float({:?})", g),
            Value::Ratio(ref r) => write!(f, "Ratio({:?})", r),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, &other) {
            (Value::Int(ref i1), Value::Int(ref i2)) => i1 == i2,
            (Value::Float(ref f1), Value::Float(ref f2)) => f1 == f2,
            (Value::Ratio(ref r1), Value::Ratio(ref r2)) => r1 == r2,
            (_, _) => false,
        }
    }
}

fn int_to_f64(i: &BigInt) -> CalcResult<f64> {
    match i.to_f64() {
        Some(f) if f.is_finite() => Ok(f),
        Some(f) => Err(CalcError::NotFinite(f)),
        None => Err(CalcError::NotFinite(f64::INFINITY)),
    }
}

// bits of the fractional part kept when it is converted to f64
const FRACT_BITS: usize = 64;

fn ratio_to_f64(r: &BigRational) -> CalcResult<f64> {
    if r.is_zero() {
        return Ok(0.0);
    }
    // extract the integer part first to avoid float overflow
    // in case of very long numer and denom
    let i = int_to_f64(&r.to_integer())?;
    // |fract| < 1, so the scaled quotient always fits f64
    let fr = r.fract();
    let scaled = (fr.numer() << FRACT_BITS) / fr.denom();
    match scaled.to_f64() {
        Some(n) if n.is_finite() => Ok(i + n / 2f64.powi(FRACT_BITS as i32)),
        _ => Err(CalcError::RatioToFloat(r.clone())),
    }
}

fn str_to_bigint(s: &str) -> CalcResult<BigInt> {
    s.parse::<BigInt>().map_err(|_| CalcError::StrToInt(s.to_owned()))
}

fn str_to_f64(s: &str) -> CalcResult<f64> {
    s.parse::<f64>().map_err(|_| CalcError::StrToFloat(s.to_owned()))
}

macro_rules! basic_op {
    ($id:ident, $op:tt) => {
        pub fn $id(self, rhs: Value) -> CalcResult<Value> {
            match (&self, &rhs) {
                (Value::Float(..), ..) | (.., Value::Float(..)) => {
                    let f1 = self.into_raw_f64()?;
                    let f2 = rhs.into_raw_f64()?;
                    Ok(Value::Float(f1 $op f2))
                },
                (Value::Ratio(..), ..) | (.., Value::Ratio(..)) => {
                    let r1 = self.into_raw_ratio()?;
                    let r2 = rhs.into_raw_ratio()?;
                    Ok(Value::Ratio(r1 $op r2).normalize())
                },
                (Value::Int(i1), Value::Int(i2)) => Ok(Value::Int(i1 $op i2)),
            }
        }
    };
}

impl Value {
    /// Convert &str to big integer number. Only plain decimal digits are
    /// accepted: `123`
    pub fn from_str_integer(s: &str) -> CalcResult<Value> {
        let i = str_to_bigint(s)?;
        Ok(Value::Int(i))
    }

    /// Convert &str to float number
    /// Supported formats:
    /// * Regular - `1.023`
    /// * Without integer part - `.5`
    /// * Without fraction part - `5.`
    pub fn from_str_float(s: &str) -> CalcResult<Value> {
        let f = str_to_f64(s)?;
        Ok(Value::Float(f))
    }

    /// Returns true if the value is zero of any type
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(ref i) => i.is_zero(),
            Value::Float(ref f) => *f == 0.0,
            Value::Ratio(ref r) => r.is_zero(),
        }
    }

    /// Converts the value to f64, the type the display works with
    pub fn to_f64(&self) -> CalcResult<f64> {
        match self {
            Value::Int(ref i) => int_to_f64(i),
            Value::Float(ref f) => Ok(*f),
            Value::Ratio(ref r) => ratio_to_f64(r),
        }
    }

    pub(crate) fn into_raw_f64(self) -> CalcResult<f64> {
        self.to_f64()
    }

    pub(crate) fn into_raw_ratio(self) -> CalcResult<BigRational> {
        match self {
            Value::Int(i) => Ok(BigRational::from_integer(i)),
            Value::Ratio(r) => Ok(r),
            Value::Float(f) => BigRational::from_float(f).ok_or(CalcError::FloatToRatio(f)),
        }
    }

    // a fraction with denominator 1 turns back into an integer
    fn normalize(self) -> Value {
        match self {
            Value::Ratio(r) if r.denom().is_one() => Value::Int(r.to_integer()),
            v => v,
        }
    }

    basic_op!(addition, +);
    basic_op!(subtract, -);
    basic_op!(multiply, *);

    pub fn divide(self, rhs: Value) -> CalcResult<Value> {
        if rhs.is_zero() {
            return Err(CalcError::DividedByZero(format!("{}", self)));
        }
        match (&self, &rhs) {
            (Value::Float(..), ..) | (.., Value::Float(..)) => {
                let f2 = rhs.into_raw_f64()?;
                let f1 = self.into_raw_f64()?;
                Ok(Value::Float(f1 / f2))
            }
            _ => {
                let r2 = rhs.into_raw_ratio()?;
                let r1 = self.into_raw_ratio()?;
                Ok(Value::Ratio(r1 / r2).normalize())
            }
        }
    }

    pub fn negate(self) -> CalcResult<Value> {
        match self {
            Value::Int(i) => Ok(Value::Int(-i)),
            Value::Float(f) => Ok(Value::Float(-f)),
            Value::Ratio(r) => Ok(Value::Ratio(-r)),
        }
    }
}
