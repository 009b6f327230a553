//! Insert：构建 INSERT 语句，支持 IGNORE 与 ON DUPLICATE KEY UPDATE。

use crate::clause::{BuilderError, check_table};
use crate::runner::{Runner, RunnerError};
use crate::value::{SetValue, SqlValue};

#[derive(Debug, Clone)]
pub struct Insert {
    table: String,
    ignore: bool,
    upsert: bool,
    fields: Vec<(String, SetValue)>,
    parameters: Vec<SqlValue>,
}

impl Insert {
    pub fn new(table: &str) -> Result<Self, BuilderError> {
        check_table(table)?;
        Ok(Self {
            table: table.to_string(),
            ignore: false,
            upsert: false,
            fields: Vec::new(),
            parameters: Vec::new(),
        })
    }

    /// 改用 `INSERT IGNORE`。
    pub fn ignore(&mut self) -> &mut Self {
        self.ignore = true;
        self
    }

    /// 追加 `ON DUPLICATE KEY UPDATE`；全部列按同样的值再绑定一遍。
    pub fn on_duplicate_key_update(&mut self) -> &mut Self {
        self.upsert = true;
        self
    }

    /// 写一列，值绑定为参数。
    pub fn set(&mut self, column: &str, value: impl Into<SqlValue>) -> &mut Self {
        self.fields
            .push((column.to_string(), SetValue::Bound(value.into())));
        self
    }

    /// 写一列原样表达式（如 `NOW()`），不产生绑定参数。
    pub fn set_raw(&mut self, column: &str, expr: impl Into<String>) -> &mut Self {
        self.fields
            .push((column.to_string(), SetValue::Raw(expr.into())));
        self
    }

    /// 渲染 SQL 并刷新参数快照。没有任何列时报 `EmptyDataset`。
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
        let mut columns = Vec::new();
        let mut slots = Vec::new();
        for (column, value) in &self.fields {
            columns.push(column.as_str());
            match value {
                SetValue::Bound(v) => {
                    slots.push("?".to_string());
                    parameters.push(v.clone());
                }
                SetValue::Raw(expr) => slots.push(expr.clone()),
            }
        }

        let verb = if self.ignore {
            "INSERT IGNORE INTO"
        } else {
            "INSERT INTO"
        };
        let mut sql = format!(
            "{verb} {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            slots.join(", ")
        );

        if self.upsert {
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
            sql.push_str(" ON DUPLICATE KEY UPDATE ");
            sql.push_str(&assignments.join(", "));
        }

        Ok((sql, parameters))
    }
}
