//! SQL 参数值类型。

use std::borrow::Cow;

/// SQL 绑定参数值。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    DateTime(time::OffsetDateTime),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

/// 写入值：要么绑定为参数，要么原样拼入 SQL（如 `NOW()`）。
#[derive(Debug, Clone, PartialEq)]
pub enum SetValue {
    Bound(SqlValue),
    Raw(String),
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

/// 绑定参数的展开：单值、值序列或 `()`（无参数）统一收集为有序 `Vec<SqlValue>`。
pub trait FlattenIntoValues {
    fn flatten_into(self, out: &mut Vec<SqlValue>);
}

impl<T: Into<SqlValue>> FlattenIntoValues for T {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        out.push(self.into());
    }
}

impl FlattenIntoValues for () {
    fn flatten_into(self, _out: &mut Vec<SqlValue>) {}
}

impl<T: FlattenIntoValues> FlattenIntoValues for Vec<T> {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        for v in self {
            v.flatten_into(out);
        }
    }
}

impl<T: FlattenIntoValues, const N: usize> FlattenIntoValues for [T; N] {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        for v in self {
            v.flatten_into(out);
        }
    }
}
