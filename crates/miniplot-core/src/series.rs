// File: crates/miniplot-core/src/series.rs
// Summary: Series model: ordered numeric/categorical values as they arrive from the host.
// Notes:
// - Parsing never fails. Tokens that are not finite numbers are kept as labels so
//   type checks can happen once, during spec validation.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Label(String),
}

impl Value {
    /// Parse one trimmed token; only finite floats become numbers.
    pub fn parse(token: &str) -> Self {
        let t = token.trim();
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() => Value::Number(v),
            _ => Value::Label(t.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(v) => Some(v),
            Value::Label(_) => None,
        }
    }

    /// Text shown on a categorical axis.
    pub fn label(&self) -> String {
        match self {
            Value::Number(v) => format_number(*v),
            Value::Label(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => f.write_str(&format_number(*v)),
            Value::Label(s) => f.write_str(s),
        }
    }
}

/// Integral values print without a fractional part ("30" rather than "30.0").
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Vec<Value>,
}

impl Series {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn from_numbers(data: &[f64]) -> Self {
        Self { values: data.iter().map(|&v| if v.is_finite() { Value::Number(v) } else { Value::Label(format!("{v}")) }).collect() }
    }

    /// Parse each token with the same rules as the text payload.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self { values: tokens.iter().map(|t| Value::parse(t.as_ref())).collect() }
    }

    /// One comma-separated payload line. A blank line is an empty series.
    pub fn parse_line(line: &str) -> Self {
        if line.trim().is_empty() {
            return Self::default();
        }
        Self { values: line.split(',').map(Value::parse).collect() }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn values(&self) -> &[Value] { &self.values }

    /// True when every value is numeric (vacuously true for an empty series).
    pub fn is_numeric(&self) -> bool {
        self.values.iter().all(|v| matches!(v, Value::Number(_)))
    }

    /// All values as numbers, or the position and text of the first label.
    pub fn numbers(&self) -> Result<Vec<f64>, (usize, String)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::Number(n) => Ok(*n),
                Value::Label(s) => Err((i, s.clone())),
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(Value::label).collect()
    }
}
