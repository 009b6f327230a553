//! Delete：构建 DELETE 语句。

use crate::clause::{BuilderError, check_table};
use crate::predicate::{Connector, PredicateEntry, compose};
use crate::runner::{Runner, RunnerError};
use crate::value::{FlattenIntoValues, SqlValue};

#[derive(Debug, Clone)]
pub struct Delete {
    table: String,
    where_entries: Vec<PredicateEntry>,
    parameters: Vec<SqlValue>,
}

impl Delete {
    pub fn new(table: &str) -> Result<Self, BuilderError> {
        check_table(table)?;
        Ok(Self {
            table: table.to_string(),
            where_entries: Vec::new(),
            parameters: Vec::new(),
        })
    }

    pub fn where_(
        &mut self,
        condition: impl Into<String>,
        bind: impl FlattenIntoValues,
    ) -> &mut Self {
        self.where_entries
            .push(PredicateEntry::new(Connector::And, condition, bind));
        self
    }

    pub fn or_where(
        &mut self,
        condition: impl Into<String>,
        bind: impl FlattenIntoValues,
    ) -> &mut Self {
        self.where_entries
            .push(PredicateEntry::new(Connector::Or, condition, bind));
        self
    }

    pub fn clear_where(&mut self) -> &mut Self {
        self.where_entries.clear();
        self
    }

    /// 渲染 SQL 并刷新参数快照；没有条件时落到恒假保护 `WHERE 0`。
    pub fn get_sql(&mut self) -> String {
        let (sql, parameters) = self.render();
        self.parameters = parameters;
        sql
    }

    pub fn get_parameters(&self) -> Vec<SqlValue> {
        self.parameters.clone()
    }

    pub fn get(&mut self) -> (String, Vec<SqlValue>) {
        let sql = self.get_sql();
        (sql, self.get_parameters())
    }

    /// 渲染并执行，返回受影响行数。
    pub fn execute<R: Runner>(&mut self, runner: &mut R) -> Result<u64, RunnerError> {
        let (sql, parameters) = self.get();
        runner.execute(&sql, &parameters)
    }

    fn render(&self) -> (String, Vec<SqlValue>) {
        let mut parameters = Vec::new();
        let where_body = if self.where_entries.is_empty() {
            "0".to_string()
        } else {
            let (body, values) = compose(&self.where_entries);
            parameters.extend(values);
            body
        };
        (
            format!("DELETE FROM {} WHERE {}", self.table, where_body),
            parameters,
        )
    }
}
