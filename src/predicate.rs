//! 谓词组合：把有序条件项拼成一个子句体，并按文本出现顺序收集参数。
//!
//! WHERE 与 HAVING 共用同一套逻辑；条件文本是调用方提供的原样 SQL，
//! 这里不做解析也不做转义。

use crate::value::{FlattenIntoValues, SqlValue};

/// 条件连接词。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// 一条 WHERE/HAVING 条件：连接词、条件文本与绑定值。
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateEntry {
    pub connector: Connector,
    pub condition: String,
    pub bind: Vec<SqlValue>,
}

impl PredicateEntry {
    pub fn new(
        connector: Connector,
        condition: impl Into<String>,
        bind: impl FlattenIntoValues,
    ) -> Self {
        let mut values = Vec::new();
        bind.flatten_into(&mut values);
        Self {
            connector,
            condition: condition.into(),
            bind: values,
        }
    }
}

/// 组合条件项：首项不带连接词，之后每项以自身连接词前缀；条件文本一律加括号。
///
/// 返回子句体与按出现顺序排列的参数。
pub fn compose(entries: &[PredicateEntry]) -> (String, Vec<SqlValue>) {
    let mut sql = String::new();
    let mut params = Vec::new();

    for entry in entries {
        if !sql.is_empty() {
            sql.push(' ');
            sql.push_str(entry.connector.as_sql());
            sql.push(' ');
        }
        sql.push('(');
        sql.push_str(&entry.condition);
        sql.push(')');
        params.extend(entry.bind.iter().cloned());
    }

    (sql, params)
}
