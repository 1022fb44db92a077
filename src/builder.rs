//! MyBatis mapper fragment builder
//!
//! [`FragmentBuilder`] turns a [`GenerateRequest`] into the XML text of one
//! mapper statement. Rendering is pure: no I/O, no shared state, and the same
//! request always yields byte-identical output.
//!
//! # Example
//! ```rust
//! use sqlmaker::{FragmentBuilder, GenerateRequest, Operation};
//!
//! let builder = FragmentBuilder::default();
//! let request = GenerateRequest::new(Operation::Select, "user").columns(["id", "name"]);
//!
//! assert_eq!(
//!     builder.build(&request),
//!     "<select id=\"selectuser\" resultType=\"map\">\n  SELECT id, name\n  FROM user\n</select>"
//! );
//! ```

use crate::condition::{guard_expression, retain_complete, Condition};
use crate::config::{Config, Messages};
use crate::request::{
    non_blank, GenerateRequest, InsertValues, Operation, UnsupportedOperation, WhereInput,
};
use std::fmt;
use thiserror::Error;

/// A required piece of input is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// Table name
    Table,
    /// Statement id
    StatementId,
    /// INSERT column list
    Columns,
    /// INSERT literal values
    Values,
    /// UPDATE set content
    Set,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table name",
            Self::StatementId => "statement id",
            Self::Columns => "columns",
            Self::Values => "insert values",
            Self::Set => "set values",
        };
        f.write_str(name)
    }
}

/// Reasons the builder renders a message instead of SQL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Table name is blank
    #[error("Table name is empty")]
    EmptyTableName,

    /// Operation text is not select/insert/update/delete
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A statement-specific field is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(RequiredField),
}

impl From<UnsupportedOperation> for BuildError {
    fn from(err: UnsupportedOperation) -> Self {
        Self::UnsupportedOperation(err.0)
    }
}

impl BuildError {
    /// User-facing text from `messages` for this error
    #[must_use]
    pub fn message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            Self::EmptyTableName | Self::MissingRequiredField(RequiredField::Table) => {
                messages.empty_table.as_str()
            }
            Self::UnsupportedOperation(_) => messages.unsupported_operation.as_str(),
            Self::MissingRequiredField(RequiredField::StatementId) => {
                messages.missing_statement_id.as_str()
            }
            Self::MissingRequiredField(RequiredField::Columns) => messages.missing_columns.as_str(),
            Self::MissingRequiredField(RequiredField::Values) => messages.missing_values.as_str(),
            Self::MissingRequiredField(RequiredField::Set) => messages.missing_set.as_str(),
        }
    }
}

/// Renders mapper statements
#[derive(Debug, Clone)]
pub struct FragmentBuilder {
    indent: String,
    default_result_type: Option<String>,
    messages: Messages,
}

impl Default for FragmentBuilder {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl FragmentBuilder {
    /// Create a builder using the layout, defaults and messages of `config`
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            indent: " ".repeat(usize::from(config.layout.indent)),
            default_result_type: non_blank(Some(config.defaults.result_type.as_str())).map(String::from),
            messages: config.messages(),
        }
    }

    /// Render `request`, or the matching message when it cannot be rendered
    #[must_use]
    pub fn build(&self, request: &GenerateRequest) -> String {
        self.try_build(request)
            .unwrap_or_else(|err| err.message(&self.messages).to_string())
    }

    /// Render `request`, reporting why it cannot be rendered
    pub fn try_build(&self, request: &GenerateRequest) -> Result<String, BuildError> {
        let table = request.table_name();
        if table.is_empty() {
            return Err(BuildError::EmptyTableName);
        }

        let operation = request.operation()?;

        let mut out = Statement::new(&self.indent);
        match operation {
            Operation::Select => self.select(&mut out, request, table),
            Operation::Insert => Self::insert(&mut out, request, table)?,
            Operation::Update => Self::update(&mut out, request, table)?,
            Operation::Delete => Self::delete(&mut out, request, table),
        }
        Ok(out.finish())
    }

    fn select(&self, out: &mut Statement<'_>, request: &GenerateRequest, table: &str) {
        let result_type = non_blank(request.meta.result_type.as_deref())
            .or(self.default_result_type.as_deref());
        out.open(Operation::Select, request, table, result_type);

        let columns = if request.columns.is_empty() {
            "*".to_string()
        } else {
            request.columns.join(", ")
        };
        out.line(1, &format!("SELECT {columns}"));
        out.line(1, &format!("FROM {table}"));

        if let Some(join) = request.join.as_ref().filter(|join| join.is_complete()) {
            out.line(
                1,
                &format!("LEFT JOIN {} ON {}", join.table.trim(), join.on.trim()),
            );
        }

        Self::where_block(out, &request.where_input);
        out.close(Operation::Select);
    }

    fn insert(
        out: &mut Statement<'_>,
        request: &GenerateRequest,
        table: &str,
    ) -> Result<(), BuildError> {
        if request.columns.is_empty() {
            return Err(BuildError::MissingRequiredField(RequiredField::Columns));
        }

        let values = match &request.insert_values {
            InsertValues::Derived => request
                .columns
                .iter()
                .map(|col| format!("#{{{col}}}"))
                .collect::<Vec<_>>()
                .join(", "),
            InsertValues::Literal(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(BuildError::MissingRequiredField(RequiredField::Values));
                }
                text.to_string()
            }
        };

        out.open(Operation::Insert, request, table, None);
        out.line(
            1,
            &format!("INSERT INTO {table} ({})", request.columns.join(", ")),
        );
        out.line(1, &format!("VALUES ({values})"));
        out.close(Operation::Insert);
        Ok(())
    }

    fn update(
        out: &mut Statement<'_>,
        request: &GenerateRequest,
        table: &str,
    ) -> Result<(), BuildError> {
        let assignments = request.set.lines(&request.columns);
        if assignments.is_empty() {
            return Err(BuildError::MissingRequiredField(RequiredField::Set));
        }

        out.open(Operation::Update, request, table, None);
        out.line(1, &format!("UPDATE {table}"));
        out.line(1, "<set>");
        let last = assignments.len() - 1;
        for (index, assignment) in assignments.iter().enumerate() {
            let separator = if index < last { "," } else { "" };
            out.line(2, &format!("{assignment}{separator}"));
        }
        out.line(1, "</set>");

        Self::where_block(out, &request.where_input);
        out.close(Operation::Update);
        Ok(())
    }

    fn delete(out: &mut Statement<'_>, request: &GenerateRequest, table: &str) {
        out.open(Operation::Delete, request, table, None);
        out.line(1, &format!("DELETE FROM {table}"));
        Self::where_block(out, &request.where_input);
        out.close(Operation::Delete);
    }

    fn where_block(out: &mut Statement<'_>, input: &WhereInput) {
        match input {
            WhereInput::Structured(conditions) => Self::structured_where(out, conditions),
            WhereInput::FreeText(text) => {
                if text.trim().is_empty() {
                    return;
                }
                out.line(1, "<where>");
                out.line(2, text);
                out.line(1, "</where>");
            }
        }
    }

    fn structured_where(out: &mut Statement<'_>, conditions: &[Condition]) {
        let retained = retain_complete(conditions);
        if retained.is_empty() {
            return;
        }

        out.line(1, "<where>");
        for (index, condition) in retained.iter().enumerate() {
            // The AND glue is always true, even when the neighbouring guards are not.
            if index > 0 {
                out.line(2, "<if test=\"true\">AND </if>");
            }
            out.line(
                2,
                &format!("<if test=\"{}\">", guard_expression(condition.value.trim())),
            );
            out.line(3, &condition.to_sql());
            out.line(2, "</if>");
        }
        out.line(1, "</where>");
    }
}

/// Line accumulator for one statement
struct Statement<'a> {
    indent: &'a str,
    lines: Vec<String>,
}

impl<'a> Statement<'a> {
    const fn new(indent: &'a str) -> Self {
        Self {
            indent,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.lines.push(format!("{}{text}", self.indent.repeat(depth)));
    }

    fn open(
        &mut self,
        operation: Operation,
        request: &GenerateRequest,
        table: &str,
        result_type: Option<&str>,
    ) {
        let id = request
            .explicit_id()
            .map_or_else(|| format!("{operation}{table}"), ToString::to_string);

        let mut tag = format!("<{operation} id=\"{id}\"");
        if let Some(result_type) = result_type {
            tag.push_str(&format!(" resultType=\"{result_type}\""));
        }
        if let Some(parameter_type) = non_blank(request.meta.parameter_type.as_deref()) {
            tag.push_str(&format!(" parameterType=\"{parameter_type}\""));
        }
        tag.push('>');
        self.lines.push(tag);
    }

    fn close(&mut self, operation: Operation) {
        self.lines.push(format!("</{operation}>"));
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}
