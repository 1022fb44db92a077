//! WHERE condition rows and `<if test>` guard derivation
//!
//! A [`Condition`] is one row of the structured WHERE editor: a column, an
//! [`Operator`] and a free-text value. Values usually embed a MyBatis
//! placeholder such as `#{id}`; [`guard_expression`] turns that placeholder
//! into the null/empty check used by the surrounding `<if>` element.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised while parsing operators or `column OP value` text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionParseError {
    /// Operator token is not one of the supported comparison operators
    #[error("Unsupported operator: {0}")]
    UnknownOperator(String),

    /// Text does not have the `column OP value` shape
    #[error("Expected `column OPERATOR value`, got: {0}")]
    Malformed(String),
}

/// Comparison operator offered by the condition editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    /// `=`
    #[default]
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `LIKE`
    Like,
    /// `IN`
    In,
}

impl Operator {
    /// Every operator, in the order the editor lists them
    pub const ALL: [Self; 8] = [
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Lt,
        Self::Gte,
        Self::Lte,
        Self::Like,
        Self::In,
    ];

    /// SQL token for this operator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Like => "LIKE",
            Self::In => "IN",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ConditionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ConditionParseError::UnknownOperator(token.to_string()))
    }
}

impl TryFrom<String> for Operator {
    type Error = ConditionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}

/// One row of the structured WHERE editor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Condition {
    /// Column name, copied verbatim
    pub column: String,
    /// Comparison operator
    #[serde(default)]
    pub operator: Operator,
    /// Right-hand side, usually containing a `#{name}` placeholder
    pub value: String,
}

impl Condition {
    /// Create a condition row
    pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }

    /// Parse a single `column OP value` string, e.g. `name LIKE #{name}`.
    ///
    /// Symbolic operators may be written without surrounding spaces
    /// (`id=#{id}`); `LIKE` and `IN` must stand as separate words.
    pub fn parse(text: &str) -> Result<Self, ConditionParseError> {
        let captures = condition_pattern()
            .captures(text)
            .ok_or_else(|| ConditionParseError::Malformed(text.to_string()))?;

        let operator = captures
            .name("symbol")
            .or_else(|| captures.name("keyword"))
            .map_or("", |m| m.as_str())
            .parse()?;
        Ok(Self::new(&captures["column"], operator, &captures["value"]))
    }

    /// Whether the row carries both a column and a value
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.column.trim().is_empty() && !self.value.trim().is_empty()
    }

    /// `column OP value` line as it appears inside the `<if>` element
    #[must_use]
    pub fn to_sql(&self) -> String {
        format!(
            "{} {} {}",
            self.column.trim(),
            self.operator,
            self.value.trim()
        )
    }
}

impl FromStr for Condition {
    type Err = ConditionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Keep only complete rows, preserving their order.
#[must_use]
pub fn retain_complete(conditions: &[Condition]) -> Vec<&Condition> {
    conditions.iter().filter(|c| c.is_complete()).collect()
}

/// Name of the first `#{name}` placeholder in `value`, if any
#[must_use]
pub fn placeholder_name(value: &str) -> Option<&str> {
    placeholder_pattern()
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `test` attribute for the `<if>` wrapping a condition with this value.
///
/// A value holding `#{id}` yields `id != null and id != ''`; anything else
/// yields `true`.
#[must_use]
pub fn guard_expression(value: &str) -> String {
    placeholder_name(value).map_or_else(
        || "true".to_string(),
        |name| format!("{name} != null and {name} != ''"),
    )
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid"))
}

fn condition_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"^\s*(?P<column>\S+?)",
            r"(?:\s*(?P<symbol>>=|<=|!=|=|>|<)\s*|\s+(?P<keyword>(?i:LIKE|IN))\s+)",
            r"(?P<value>\S.*?)\s*$",
        ))
        .expect("condition pattern is valid")
    })
}
