//! `sqlmaker` - MyBatis mapper SQL generator
//!
//! Turns a table name, a column list and WHERE conditions into the XML of a
//! MyBatis `<select>`, `<insert>`, `<update>` or `<delete>` statement.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Mapper statement rendering
pub mod builder;
/// Command line interface definitions
pub mod cli;
pub mod columns;
/// Command handlers
pub mod commands;
pub mod condition;
/// Configuration management for sqlmaker
pub mod config;
/// Crate-level error type
pub mod error;
pub mod request;
pub mod validate;

pub use builder::{BuildError, FragmentBuilder, RequiredField};
pub use columns::normalize_columns;
pub use condition::{guard_expression, Condition, Operator};
pub use config::{Config, Locale};
pub use request::{GenerateRequest, InsertValues, JoinSpec, Operation, SetInput, StatementMeta, WhereInput};
pub use validate::RequestValidator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
