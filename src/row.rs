//! Row：活动记录——一行数据加上按主键的 save/load。
//!
//! 字段写入钩子是显式注册的转换函数表，`set` 经过它、`set_raw` 绕过它；
//! 没有任何按名字合成方法的魔法。

use crate::clause::BuilderError;
use crate::insert::Insert;
use crate::runner::{Runner, RunnerError};
use crate::select::Select;
use crate::update::Update;
use crate::value::SqlValue;

/// 字段写入钩子。
pub type FieldSetter = fn(SqlValue) -> SqlValue;

#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("column \"{0}\" does not exist in this row")]
    UnknownColumn(String),
    #[error("row has no identifier value")]
    MissingId,
    #[error("no row found for the current identifier")]
    NotFound,
    #[error("write did not affect exactly one row")]
    NotSaved,
    #[error(transparent)]
    Builder(#[from] BuilderError),
    #[error(transparent)]
    Runner(#[from] RunnerError),
}

#[derive(Debug, Clone)]
pub struct Row {
    table: String,
    id_column: String,
    fields: Vec<(String, SqlValue)>,
    setters: Vec<(String, FieldSetter)>,
}

impl Row {
    pub fn new(table: &str) -> Result<Self, BuilderError> {
        crate::clause::check_table(table)?;
        Ok(Self {
            table: table.to_string(),
            id_column: "id".to_string(),
            fields: Vec::new(),
            setters: Vec::new(),
        })
    }

    /// 换掉自增主键列名（默认 `id`）。
    pub fn with_id_column(mut self, column: &str) -> Self {
        self.id_column = column.to_string();
        self
    }

    /// 注册字段写入钩子。
    pub fn with_setter(mut self, field: &str, setter: FieldSetter) -> Self {
        self.setters.push((field.to_string(), setter));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    /// 字段快照，按首次写入顺序。
    pub fn fields(&self) -> &[(String, SqlValue)] {
        &self.fields
    }

    /// 写字段；有注册钩子时先经过钩子。
    pub fn set(&mut self, field: &str, value: impl Into<SqlValue>) -> &mut Self {
        let mut value = value.into();
        if let Some((_, setter)) = self.setters.iter().find(|(name, _)| name == field) {
            value = setter(value);
        }
        self.store(field, value);
        self
    }

    /// 绕过钩子直接写。
    pub fn set_raw(&mut self, field: &str, value: impl Into<SqlValue>) -> &mut Self {
        self.store(field, value.into());
        self
    }

    fn store(&mut self, field: &str, value: SqlValue) {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field.to_string(), value)),
        }
    }

    /// 批量写入，逐字段经过 `set`。
    pub fn replace(&mut self, data: impl IntoIterator<Item = (String, SqlValue)>) -> &mut Self {
        for (field, value) in data {
            self.set(&field, value);
        }
        self
    }

    /// 读字段；不存在时报 `UnknownColumn`。
    pub fn get(&self, field: &str) -> Result<&SqlValue, RowError> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
            .ok_or_else(|| RowError::UnknownColumn(field.to_string()))
    }

    /// 主键值；未设置或为 Null 时视为没有。
    pub fn id(&self) -> Option<&SqlValue> {
        match self
            .fields
            .iter()
            .find(|(name, _)| name == &self.id_column)
            .map(|(_, value)| value)
        {
            Some(SqlValue::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    /// 只保留出现在给定列清单里的字段（配合 `ColumnSource::columns_of` 使用）。
    pub fn reduce(&mut self, columns: &[String]) -> &mut Self {
        self.fields
            .retain(|(name, _)| columns.iter().any(|column| column == name));
        self
    }

    /// 保存：没有主键值走 INSERT（必须恰好写入一行，随后通过钩子路径
    /// 采纳 `last_insert_id`）；有主键值走 UPDATE，仅在 `assert_update`
    /// 为真且没有行被更新时报错。返回主键值。
    pub fn save<R: Runner>(
        &mut self,
        runner: &mut R,
        assert_update: bool,
    ) -> Result<SqlValue, RowError> {
        match self.id().cloned() {
            None => {
                let mut insert = Insert::new(&self.table)?;
                for (field, value) in &self.fields {
                    insert.set(field, value.clone());
                }
                if insert.execute(runner)? != 1 {
                    return Err(RowError::NotSaved);
                }
                let id = runner.last_insert_id()?;
                let id_column = self.id_column.clone();
                self.set(&id_column, SqlValue::U64(id));
            }
            Some(id) => {
                let mut update = Update::new(&self.table)?;
                for (field, value) in &self.fields {
                    update.set(field, value.clone());
                }
                update.where_(format!("{} = ?", self.id_column), id);
                if update.execute(runner)? != 1 && assert_update {
                    return Err(RowError::NotSaved);
                }
            }
        }
        self.id().cloned().ok_or(RowError::MissingId)
    }

    /// 按主键重新加载整行。
    pub fn load<R: Runner>(&mut self, runner: &mut R) -> Result<&mut Self, RowError> {
        let id = self.id().cloned().ok_or(RowError::MissingId)?;
        let mut select = Select::make(&self.table)?;
        select.where_(format!("{} = ?", self.id_column), id);
        match select.fetch_one(runner)? {
            Some(row) => Ok(self.replace(row)),
            None => Err(RowError::NotFound),
        }
    }
}
