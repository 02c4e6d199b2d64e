//! Input validation
//!
//! Range validators for numeric text fields and the rule sets used by the
//! chat configuration panel.

pub mod rules;

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Numeric kind and inclusive bounds of a rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// Input must parse as a finite floating point number
    FloatRange { min: Option<f64>, max: Option<f64> },
    /// Input must parse as a base-10 integer
    IntegerRange { min: Option<i64>, max: Option<i64> },
}

/// A single field of a record that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Errors raised while validating input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid bounds: min ({min}) must be less than max ({max})")]
    InvalidBounds { min: String, max: String },
    #[error("invalid value {value:?} for {field}: {message}")]
    Field {
        field: &'static str,
        value: String,
        message: String,
    },
    #[error("invalid fields: {}", format_field_errors(.0))]
    Fields(Vec<FieldError>),
    #[error("invalid URL \"{0}\" - must be a valid http(s) URL")]
    ServerAddress(String),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Predicate over text input that checks a number against inclusive bounds.
///
/// Unlike a GUI toolkit validator, a rule never panics on non-numeric input:
/// anything that does not parse as the declared kind is simply invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    kind: RuleKind,
    allow_empty: bool,
    error_message: Cow<'static, str>,
}

impl ValidationRule {
    /// Build a float rule. Fails if both bounds are set and `min >= max`.
    pub fn float_range(
        error_message: impl Into<Cow<'static, str>>,
        allow_empty: bool,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self, ValidationError> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo.is_nan() || hi.is_nan() || lo >= hi {
                return Err(ValidationError::InvalidBounds {
                    min: lo.to_string(),
                    max: hi.to_string(),
                });
            }
        }
        Ok(Self {
            kind: RuleKind::FloatRange { min, max },
            allow_empty,
            error_message: error_message.into(),
        })
    }

    /// Build an integer rule. Fails if both bounds are set and `min >= max`.
    pub fn integer_range(
        error_message: impl Into<Cow<'static, str>>,
        allow_empty: bool,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Result<Self, ValidationError> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo >= hi {
                return Err(ValidationError::InvalidBounds {
                    min: lo.to_string(),
                    max: hi.to_string(),
                });
            }
        }
        Ok(Self {
            kind: RuleKind::IntegerRange { min, max },
            allow_empty,
            error_message: error_message.into(),
        })
    }

    // Bounds must already be ordered; only used for the constant rule sets.
    pub(crate) const fn float_const(
        error_message: &'static str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        Self {
            kind: RuleKind::FloatRange { min, max },
            allow_empty: false,
            error_message: Cow::Borrowed(error_message),
        }
    }

    pub(crate) const fn integer_const(
        error_message: &'static str,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Self {
        Self {
            kind: RuleKind::IntegerRange { min, max },
            allow_empty: false,
            error_message: Cow::Borrowed(error_message),
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn allow_empty(&self) -> bool {
        self.allow_empty
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Check a textual input against this rule
    pub fn is_valid(&self, input: &str) -> bool {
        let input = input.trim();
        if input.is_empty() {
            return self.allow_empty;
        }

        match self.kind {
            RuleKind::FloatRange { .. } => match input.parse::<f64>() {
                Ok(v) => self.contains_f64(v),
                Err(_) => false,
            },
            RuleKind::IntegerRange { .. } => match input.parse::<i64>() {
                Ok(v) => self.contains_i64(v),
                Err(_) => false,
            },
        }
    }

    /// Returns the error message if `input` is invalid
    pub fn check(&self, input: &str) -> Option<&str> {
        if self.is_valid(input) {
            None
        } else {
            Some(self.error_message())
        }
    }

    /// Check an already-parsed float against the bounds.
    ///
    /// Integer rules accept a float only if it has no fractional part.
    pub fn contains_f64(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self.kind {
            RuleKind::FloatRange { min, max } => {
                min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
            }
            RuleKind::IntegerRange { .. } => {
                value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value <= i64::MAX as f64
                    && self.contains_i64(value as i64)
            }
        }
    }

    /// Check an already-parsed integer against the bounds
    pub fn contains_i64(&self, value: i64) -> bool {
        match self.kind {
            RuleKind::FloatRange { .. } => self.contains_f64(value as f64),
            RuleKind::IntegerRange { min, max } => {
                min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
            }
        }
    }
}

/// Either one rule or a predefined rule set
#[derive(Debug, Clone, Copy)]
pub enum RuleRef<'a> {
    One(&'a ValidationRule),
    Many(&'a [ValidationRule]),
}

impl<'a> From<&'a ValidationRule> for RuleRef<'a> {
    fn from(rule: &'a ValidationRule) -> Self {
        RuleRef::One(rule)
    }
}

impl<'a> From<&'a [ValidationRule]> for RuleRef<'a> {
    fn from(rules: &'a [ValidationRule]) -> Self {
        RuleRef::Many(rules)
    }
}

impl<'a, const N: usize> From<&'a [ValidationRule; N]> for RuleRef<'a> {
    fn from(rules: &'a [ValidationRule; N]) -> Self {
        RuleRef::Many(rules.as_slice())
    }
}

fn flatten<'s, 'r: 's>(
    rules: &'s [RuleRef<'r>],
) -> impl Iterator<Item = &'r ValidationRule> + 's {
    rules.iter().flat_map(|r| match *r {
        RuleRef::One(rule) => std::slice::from_ref(rule).iter(),
        RuleRef::Many(set) => set.iter(),
    })
}

/// True only if every rule, with rule sets flattened one level, accepts `value`
pub fn validate_all(value: &str, rules: &[RuleRef<'_>]) -> bool {
    flatten(rules).all(|rule| rule.is_valid(value))
}

/// The error message of the first rule rejecting `value`, if any
pub fn first_error<'r>(value: &str, rules: &[RuleRef<'r>]) -> Option<&'r str> {
    flatten(rules).find_map(|rule| rule.check(value))
}
