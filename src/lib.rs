//! sqlkit：流式 SELECT 构建与参数收集库，附带轻量 DBAL 写入与执行契约。

pub mod clause;
pub mod delete;
pub mod insert;
#[cfg(test)]
mod insert_tests;
pub mod interpolate;
#[cfg(test)]
mod interpolate_tests;
pub mod predicate;
pub mod quote;
pub mod row;
pub mod runner;
pub mod select;
pub mod update;
#[cfg(test)]
mod update_delete_tests;
pub mod value;

pub use crate::clause::{
    BuilderError, ColumnSpec, GroupSpec, IntoColumns, IntoGroups, IntoStrings, JoinKind, JoinSpec,
    TableRef,
};
pub use crate::delete::Delete;
pub use crate::insert::Insert;
pub use crate::interpolate::{InterpolateError, quote_into};
pub use crate::predicate::{Connector, PredicateEntry, compose};
pub use crate::quote::QuoteStyle;
pub use crate::row::{FieldSetter, Row, RowError};
pub use crate::runner::{ColumnSource, RowData, Runner, RunnerError};
pub use crate::select::Select;
pub use crate::update::Update;
pub use crate::value::{FlattenIntoValues, SetValue, SqlValue};
