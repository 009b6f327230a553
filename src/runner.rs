//! 执行器契约：builder 只产出 `(sql, 参数)`，预编译、绑定与执行交给实现方。
//!
//! 这里只有 trait，不含任何驱动实现；宿主应用按自己的连接层实现它。

use crate::clause::BuilderError;
use crate::value::SqlValue;

/// 一行结果：按查询列顺序排列的 `(列名, 值)`。
pub type RowData = Vec<(String, SqlValue)>;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// 数据库引擎侧的执行失败（语法、约束等），由实现方转述。
    #[error("execution failed: {0}")]
    Execution(String),
    #[error(transparent)]
    Builder(#[from] BuilderError),
    #[error("operation not supported by this runner: {0}")]
    Unsupported(&'static str),
}

/// 语句执行器：预编译 `sql`，按给定顺序逐个绑定 `parameters`，执行并返回结果。
pub trait Runner {
    /// 执行写语句，返回受影响行数。
    fn execute(&mut self, sql: &str, parameters: &[SqlValue]) -> Result<u64, RunnerError>;

    /// 查询全部行。
    fn fetch_all(&mut self, sql: &str, parameters: &[SqlValue]) -> Result<Vec<RowData>, RunnerError>;

    /// 查询首行。
    fn fetch_one(
        &mut self,
        sql: &str,
        parameters: &[SqlValue],
    ) -> Result<Option<RowData>, RunnerError>;

    /// 查询首行首列。
    fn fetch_value(
        &mut self,
        sql: &str,
        parameters: &[SqlValue],
    ) -> Result<Option<SqlValue>, RunnerError> {
        Ok(self
            .fetch_one(sql, parameters)?
            .and_then(|row| row.into_iter().next().map(|(_, value)| value)))
    }

    /// 最近一次插入产生的自增 id。
    fn last_insert_id(&mut self) -> Result<u64, RunnerError>;
}

/// 表列名来源：带显式失效操作的列名缓存契约。
pub trait ColumnSource {
    /// 返回表的列名，按表定义顺序。
    fn columns_of(&mut self, table: &str) -> Result<Vec<String>, RunnerError>;

    /// 丢弃该表缓存的列名。
    fn invalidate(&mut self, table: &str);
}
