//! Generation request model
//!
//! A [`GenerateRequest`] is assembled once per generation and handed to the
//! [`FragmentBuilder`](crate::builder::FragmentBuilder). It can also be
//! loaded from a `.toml` or `.json` request file.

use crate::columns::normalize_columns;
use crate::condition::Condition;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while loading a request file
#[derive(Debug, Error)]
pub enum RequestError {
    /// IO error occurred while reading the request file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error occurred
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error occurred
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("Unsupported request file format: {path}")]
    UnsupportedFormat {
        /// Offending path
        path: String,
    },
}

/// Operation text that is not select/insert/update/delete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported operation: {0}")]
pub struct UnsupportedOperation(pub String);

/// Mapper statement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `<select>`
    Select,
    /// `<insert>`
    Insert,
    /// `<update>`
    Update,
    /// `<delete>`
    Delete,
}

impl Operation {
    /// Lowercase name, also used as the XML element and id prefix
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnsupportedOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(Self::Select),
            "insert" => Ok(Self::Insert),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(UnsupportedOperation(other.to_string())),
        }
    }
}

/// WHERE input, in one of the two editor styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhereInput {
    /// Rows of `column OP value`, each wrapped in a guarded `<if>`
    Structured(Vec<Condition>),
    /// Raw text copied verbatim inside `<where>`
    FreeText(String),
}

impl Default for WhereInput {
    fn default() -> Self {
        Self::Structured(Vec::new())
    }
}

/// `LEFT JOIN` target for SELECT statements
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JoinSpec {
    /// Joined table
    pub table: String,
    /// Text after `ON`
    pub on: String,
}

impl JoinSpec {
    /// Create a join spec
    pub fn new(table: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            on: on.into(),
        }
    }

    /// Both the table and the ON clause are filled in
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.table.trim().is_empty() && !self.on.trim().is_empty()
    }
}

/// Attributes copied onto the statement element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementMeta {
    /// Statement id; derived from the operation and table when blank
    pub id: Option<String>,
    /// `parameterType` attribute
    pub parameter_type: Option<String>,
    /// `resultType` attribute (SELECT only)
    pub result_type: Option<String>,
}

/// Source of the INSERT `VALUES (...)` list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertValues {
    /// `#{column}` for every column
    #[default]
    Derived,
    /// Caller-supplied text placed between the parentheses
    Literal(String),
}

/// Source of the UPDATE `<set>` lines
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetInput {
    /// `column = #{column}` for every column
    #[default]
    Derived,
    /// Comma-separated assignments, one line each
    Literal(String),
}

impl SetInput {
    /// Assignment lines for the `<set>` block, without trailing commas
    #[must_use]
    pub fn lines(&self, columns: &[String]) -> Vec<String> {
        match self {
            Self::Derived => columns.iter().map(|col| format!("{col} = #{{{col}}}")).collect(),
            Self::Literal(text) => text
                .split(',')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Everything the builder needs for one statement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    /// Raw operation name as entered; see [`Operation`]
    pub operation: String,
    /// Table name
    pub table: String,
    /// Normalized column list; request files may give a list or comma text
    #[serde(deserialize_with = "deserialize_columns")]
    pub columns: Vec<String>,
    /// WHERE input
    #[serde(rename = "where")]
    pub where_input: WhereInput,
    /// Optional SELECT join
    pub join: Option<JoinSpec>,
    /// Statement attributes
    pub meta: StatementMeta,
    /// INSERT values source
    pub insert_values: InsertValues,
    /// UPDATE set source
    pub set: SetInput,
}

impl GenerateRequest {
    /// Start a request for `operation` on `table`
    pub fn new(operation: impl fmt::Display, table: impl Into<String>) -> Self {
        Self {
            operation: operation.to_string(),
            table: table.into(),
            ..Self::default()
        }
    }

    /// Load a request from a `.toml` or `.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RequestError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(&fs::read_to_string(path)?)?),
            Some("json") => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
            _ => Err(RequestError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Parsed operation, or the unrecognized text
    pub fn operation(&self) -> Result<Operation, UnsupportedOperation> {
        self.operation.parse()
    }

    /// Set the columns from an already split list
    ///
    /// Entries are trimmed and blank ones dropped.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.columns = normalize_entries(columns);
        self
    }

    /// Set the columns from raw comma-separated text
    #[must_use]
    pub fn column_text(mut self, raw: &str) -> Self {
        self.columns = normalize_columns(raw);
        self
    }

    /// Use structured WHERE rows
    #[must_use]
    pub fn conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.where_input = WhereInput::Structured(conditions);
        self
    }

    /// Use free-text WHERE content
    #[must_use]
    pub fn where_text(mut self, text: impl Into<String>) -> Self {
        self.where_input = WhereInput::FreeText(text.into());
        self
    }

    /// Add a LEFT JOIN (SELECT only)
    #[must_use]
    pub fn join(mut self, join: JoinSpec) -> Self {
        self.join = Some(join);
        self
    }

    /// Explicit statement id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.meta.id = Some(id.into());
        self
    }

    /// `parameterType` attribute
    #[must_use]
    pub fn parameter_type(mut self, parameter_type: impl Into<String>) -> Self {
        self.meta.parameter_type = Some(parameter_type.into());
        self
    }

    /// `resultType` attribute
    #[must_use]
    pub fn result_type(mut self, result_type: impl Into<String>) -> Self {
        self.meta.result_type = Some(result_type.into());
        self
    }

    /// Literal INSERT values text
    #[must_use]
    pub fn values(mut self, values: impl Into<String>) -> Self {
        self.insert_values = InsertValues::Literal(values.into());
        self
    }

    /// Literal UPDATE SET text
    #[must_use]
    pub fn set(mut self, set: impl Into<String>) -> Self {
        self.set = SetInput::Literal(set.into());
        self
    }

    /// Trimmed table name
    #[must_use]
    pub fn table_name(&self) -> &str {
        self.table.trim()
    }

    /// Explicit statement id, if one was given and is not blank
    #[must_use]
    pub fn explicit_id(&self) -> Option<&str> {
        non_blank(self.meta.id.as_deref())
    }
}

fn normalize_entries<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .flat_map(|entry| normalize_columns(entry.as_ref()))
        .collect()
}

fn deserialize_columns<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawColumns {
        List(Vec<String>),
        Text(String),
    }

    Ok(match RawColumns::deserialize(deserializer)? {
        RawColumns::List(entries) => normalize_entries(entries),
        RawColumns::Text(text) => normalize_columns(&text),
    })
}

/// Trimmed `value`, or `None` when it is missing or blank
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
