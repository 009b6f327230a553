//! 子句数据模型：表引用、列、JOIN、分组，以及各 builder 共用的输入转换。

/// builder 侧错误：配置错误立即在对应 setter 处抛出，不会拖到渲染时。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("table name must be a non-empty string")]
    MissingTable,
    #[error("no column data to write")]
    EmptyDataset,
}

pub(crate) fn check_table(table: &str) -> Result<(), BuilderError> {
    if table.trim().is_empty() {
        return Err(BuilderError::MissingTable);
    }
    Ok(())
}

/// 表引用：原始字符串可携带 `name AS alias` 形式的别名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    raw: String,
}

impl TableRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 列限定符：小写后按 ` as ` 切分取最后一段（有别名取别名，否则是小写表名）。
    pub fn qualifier(&self) -> String {
        let lowered = self.raw.to_lowercase();
        lowered
            .rsplit(" as ")
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

/// SELECT 列：星号、原样表达式或（可带别名的）命名列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    /// 渲染为 `<表限定符>.*`，即使关闭了表前缀。
    Star,
    /// 原样拼入，不加引号。
    Raw(String),
    Named {
        name: String,
        alias: Option<String>,
    },
}

impl ColumnSpec {
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for ColumnSpec {
    fn from(s: &str) -> Self {
        if s == "*" { Self::Star } else { Self::named(s) }
    }
}

impl From<String> for ColumnSpec {
    fn from(s: String) -> Self {
        if s == "*" { Self::Star } else { Self::named(s) }
    }
}

/// JOIN 类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Outer,
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Outer => "OUTER JOIN",
        }
    }
}

/// 一条 JOIN：表、ON 条件（原样信任）、该表要选的列、类型。插入顺序即渲染顺序。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSpec {
    pub table: TableRef,
    pub on: String,
    pub columns: Vec<ColumnSpec>,
    pub kind: JoinKind,
}

/// GROUP BY 项：普通片段走片段引号化，Raw 原样输出。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSpec {
    Fragment(String),
    Raw(String),
}

impl GroupSpec {
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }
}

impl From<&str> for GroupSpec {
    fn from(s: &str) -> Self {
        Self::Fragment(s.to_string())
    }
}

impl From<String> for GroupSpec {
    fn from(s: String) -> Self {
        Self::Fragment(s)
    }
}

/// 列清单输入：单个列、字符串、或它们的序列。
pub trait IntoColumns {
    fn extend_into_columns(self, dst: &mut Vec<ColumnSpec>);
}

impl IntoColumns for ColumnSpec {
    fn extend_into_columns(self, dst: &mut Vec<ColumnSpec>) {
        dst.push(self);
    }
}

impl IntoColumns for &str {
    fn extend_into_columns(self, dst: &mut Vec<ColumnSpec>) {
        dst.push(self.into());
    }
}

impl IntoColumns for String {
    fn extend_into_columns(self, dst: &mut Vec<ColumnSpec>) {
        dst.push(self.into());
    }
}

impl<T> IntoColumns for Vec<T>
where
    T: Into<ColumnSpec>,
{
    fn extend_into_columns(self, dst: &mut Vec<ColumnSpec>) {
        for item in self {
            dst.push(item.into());
        }
    }
}

impl<T, const N: usize> IntoColumns for [T; N]
where
    T: Into<ColumnSpec>,
{
    fn extend_into_columns(self, dst: &mut Vec<ColumnSpec>) {
        for item in self {
            dst.push(item.into());
        }
    }
}

pub(crate) fn collect_into_columns<T: IntoColumns>(value: T) -> Vec<ColumnSpec> {
    let mut dst = Vec::new();
    value.extend_into_columns(&mut dst);
    dst
}

/// GROUP BY 输入：单个片段、Raw 项、或它们的序列。
pub trait IntoGroups {
    fn extend_into_groups(self, dst: &mut Vec<GroupSpec>);
}

impl IntoGroups for GroupSpec {
    fn extend_into_groups(self, dst: &mut Vec<GroupSpec>) {
        dst.push(self);
    }
}

impl IntoGroups for &str {
    fn extend_into_groups(self, dst: &mut Vec<GroupSpec>) {
        dst.push(self.into());
    }
}

impl IntoGroups for String {
    fn extend_into_groups(self, dst: &mut Vec<GroupSpec>) {
        dst.push(self.into());
    }
}

impl<T> IntoGroups for Vec<T>
where
    T: Into<GroupSpec>,
{
    fn extend_into_groups(self, dst: &mut Vec<GroupSpec>) {
        for item in self {
            dst.push(item.into());
        }
    }
}

impl<T, const N: usize> IntoGroups for [T; N]
where
    T: Into<GroupSpec>,
{
    fn extend_into_groups(self, dst: &mut Vec<GroupSpec>) {
        for item in self {
            dst.push(item.into());
        }
    }
}

pub(crate) fn collect_into_groups<T: IntoGroups>(value: T) -> Vec<GroupSpec> {
    let mut dst = Vec::new();
    value.extend_into_groups(&mut dst);
    dst
}

/// 字符串清单输入（ORDER BY 用）。
pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for &str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_string());
    }
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl<T> IntoStrings for Vec<T>
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in self {
            dst.push(item.into());
        }
    }
}

impl<T, const N: usize> IntoStrings for [T; N]
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in self {
            dst.push(item.into());
        }
    }
}

pub(crate) fn collect_into_strings<T: IntoStrings>(value: T) -> Vec<String> {
    let mut dst = Vec::new();
    value.extend_into_strings(&mut dst);
    dst
}
