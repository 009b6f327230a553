//! Update：构建 UPDATE 语句；WHERE 复用谓词组合逻辑。

use crate::clause::{BuilderError, check_table};
use crate::predicate::{Connector, PredicateEntry, compose};
use crate::runner::{Runner, RunnerError};
use crate::value::{FlattenIntoValues, SetValue, SqlValue};

#[derive(Debug, Clone)]
pub struct Update {
    table: String,
    fields: Vec<(String, SetValue)>,
    where_entries: Vec<PredicateEntry>,
    parameters: Vec<SqlValue>,
}

impl Update {
    pub fn new(table: &str) -> Result<Self, BuilderError> {
        check_table(table)?;
        Ok(Self {
            table: table.to_string(),
            fields: Vec::new(),
            where_entries: Vec::new(),
            parameters: Vec::new(),
        })
    }

    pub fn set(&mut self, column: &str, value: impl Into<SqlValue>) -> &mut Self {
        self.fields
            .push((column.to_string(), SetValue::Bound(value.into())));
        self
    }

    /// 写一列原样表达式（如 `updated_at = NOW()`），不产生绑定参数。
    pub fn set_raw(&mut self, column: &str, expr: impl Into<String>) -> &mut Self {
        self.fields
            .push((column.to_string(), SetValue::Raw(expr.into())));
        self
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

    /// 渲染 SQL 并刷新参数快照；参数顺序是 SET 值在前、WHERE 绑定在后。
    /// 没有任何列时报 `EmptyDataset`；没有条件时落到恒假保护 `WHERE 0`。
    pub fn get_sql(&mut self) -> Result<String, BuilderError> {
        let (sql, parameters) = self.render()?;
        self.parameters = parameters;
        Ok(sql)
    }

    pub fn get_parameters(&self) -> Vec<SqlValue> {
        self.parameters.clone()
    }

    pub fn get(&mut self) -> Result<(String, Vec<SqlValue>), BuilderError> {
        let sql = self.get_sql()?;
        Ok((sql, self.get_parameters()))
    }

    /// 渲染并执行，返回受影响行数。
    pub fn execute<R: Runner>(&mut self, runner: &mut R) -> Result<u64, RunnerError> {
        let (sql, parameters) = self.get()?;
        runner.execute(&sql, &parameters)
    }

    fn render(&self) -> Result<(String, Vec<SqlValue>), BuilderError> {
        if self.fields.is_empty() {
            return Err(BuilderError::EmptyDataset);
        }

        let mut parameters = Vec::new();
        let mut assignments = Vec::new();
        for (column, value) in &self.fields {
            match value {
                SetValue::Bound(v) => {
                    assignments.push(format!("{column} = ?"));
                    parameters.push(v.clone());
                }
                SetValue::Raw(expr) => assignments.push(format!("{column} = {expr}")),
            }
        }

        let where_body = if self.where_entries.is_empty() {
            "0".to_string()
        } else {
            let (body, values) = compose(&self.where_entries);
            parameters.extend(values);
            body
        };

        let sql = format!(
            "UPDATE {} SET {} WHERE {}",
            self.table,
            assignments.join(", "),
            where_body
        );
        Ok((sql, parameters))
    }
}
