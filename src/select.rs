//! Select：流式构建 SELECT 语句，渲染时同步收集绑定参数。
//!
//! 所有 setter 返回 `&mut Self` 以支持链式调用；`get_sql` 每次都从当前
//! 子句状态完整重渲染，参数快照随之重建，因此状态不变时重复渲染
//! 逐字节一致。

use crate::clause::{
    BuilderError, ColumnSpec, GroupSpec, IntoColumns, IntoGroups, IntoStrings, JoinKind, JoinSpec,
    TableRef, check_table, collect_into_columns, collect_into_groups, collect_into_strings,
};
use crate::predicate::{Connector, PredicateEntry, compose};
use crate::quote::QuoteStyle;
use crate::runner::{RowData, Runner, RunnerError};
use crate::value::{FlattenIntoValues, SqlValue};

#[derive(Debug, Clone)]
pub struct Select {
    table: Option<TableRef>,
    columns: Vec<ColumnSpec>,
    prefix_columns_with_table: bool,
    joins: Vec<JoinSpec>,
    where_entries: Vec<PredicateEntry>,
    group_entries: Vec<GroupSpec>,
    having_entries: Vec<PredicateEntry>,
    order_entries: Vec<String>,
    limit: Option<i64>,
    offset: Option<i64>,
    quote_style: QuoteStyle,
    parameters: Vec<SqlValue>,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    pub fn new() -> Self {
        Self {
            table: None,
            columns: vec![ColumnSpec::Star],
            prefix_columns_with_table: true,
            joins: Vec::new(),
            where_entries: Vec::new(),
            group_entries: Vec::new(),
            having_entries: Vec::new(),
            order_entries: Vec::new(),
            limit: None,
            offset: None,
            quote_style: QuoteStyle::default(),
            parameters: Vec::new(),
        }
    }

    /// 绑定表名构造，等价于 `new` + `from`。
    pub fn make(table: &str) -> Result<Self, BuilderError> {
        let mut select = Self::new();
        select.from(table)?;
        Ok(select)
    }

    /// 设置主表。空白表名立即报配置错误，不会拖到渲染时。
    pub fn from(&mut self, table: &str) -> Result<&mut Self, BuilderError> {
        check_table(table)?;
        self.table = Some(TableRef::new(table));
        Ok(self)
    }

    /// 设置主表并替换列清单。
    pub fn from_columns(
        &mut self,
        table: &str,
        columns: impl IntoColumns,
    ) -> Result<&mut Self, BuilderError> {
        self.from(table)?;
        Ok(self.columns(columns, true))
    }

    /// 替换主表列清单；空清单只更新前缀开关，保留现有列。
    pub fn columns(&mut self, columns: impl IntoColumns, prefix_with_table: bool) -> &mut Self {
        let columns = collect_into_columns(columns);
        if !columns.is_empty() {
            self.columns = columns;
        }
        self.prefix_columns_with_table = prefix_with_table;
        self
    }

    pub fn add_column(&mut self, column: impl Into<ColumnSpec>) -> &mut Self {
        self.columns.push(column.into());
        self
    }

    /// 追加 JOIN；`on` 是原样信任的 SQL 文本。空列清单按星号处理。
    pub fn join(
        &mut self,
        table: &str,
        on: impl Into<String>,
        columns: impl IntoColumns,
        kind: JoinKind,
    ) -> &mut Self {
        let mut columns = collect_into_columns(columns);
        if columns.is_empty() {
            columns.push(ColumnSpec::Star);
        }
        self.joins.push(JoinSpec {
            table: TableRef::new(table),
            on: on.into(),
            columns,
            kind,
        });
        self
    }

    pub fn join_inner(
        &mut self,
        table: &str,
        on: impl Into<String>,
        columns: impl IntoColumns,
    ) -> &mut Self {
        self.join(table, on, columns, JoinKind::Inner)
    }

    pub fn join_left(
        &mut self,
        table: &str,
        on: impl Into<String>,
        columns: impl IntoColumns,
    ) -> &mut Self {
        self.join(table, on, columns, JoinKind::Left)
    }

    pub fn join_right(
        &mut self,
        table: &str,
        on: impl Into<String>,
        columns: impl IntoColumns,
    ) -> &mut Self {
        self.join(table, on, columns, JoinKind::Right)
    }

    pub fn join_outer(
        &mut self,
        table: &str,
        on: impl Into<String>,
        columns: impl IntoColumns,
    ) -> &mut Self {
        self.join(table, on, columns, JoinKind::Outer)
    }

    /// 追加 AND 条件；`bind` 接受单值、值序列或 `()`。
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

    pub fn having(
        &mut self,
        condition: impl Into<String>,
        bind: impl FlattenIntoValues,
    ) -> &mut Self {
        self.having_entries
            .push(PredicateEntry::new(Connector::And, condition, bind));
        self
    }

    pub fn or_having(
        &mut self,
        condition: impl Into<String>,
        bind: impl FlattenIntoValues,
    ) -> &mut Self {
        self.having_entries
            .push(PredicateEntry::new(Connector::Or, condition, bind));
        self
    }

    pub fn group(&mut self, group: impl IntoGroups) -> &mut Self {
        self.group_entries.extend(collect_into_groups(group));
        self
    }

    /// 追加排序项；含逗号的字符串先按逗号切成多项。
    pub fn order(&mut self, order: impl IntoStrings) -> &mut Self {
        for item in collect_into_strings(order) {
            if item.contains(',') {
                for segment in item.split(',') {
                    let segment = segment.trim();
                    if !segment.is_empty() {
                        self.order_entries.push(segment.to_string());
                    }
                }
            } else if !item.is_empty() {
                self.order_entries.push(item);
            }
        }
        self
    }

    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    /// 设置偏移。没有 limit 时偏移不会出现在 SQL 里。
    pub fn offset(&mut self, offset: i64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    pub fn clear_order(&mut self) -> &mut Self {
        self.order_entries.clear();
        self
    }

    pub fn clear_limit(&mut self) -> &mut Self {
        self.limit = None;
        self
    }

    pub fn clear_offset(&mut self) -> &mut Self {
        self.offset = None;
        self
    }

    pub fn clear_group(&mut self) -> &mut Self {
        self.group_entries.clear();
        self
    }

    pub fn clear_where(&mut self) -> &mut Self {
        self.where_entries.clear();
        self
    }

    pub fn clear_joins(&mut self) -> &mut Self {
        self.joins.clear();
        self
    }

    pub fn clear_having(&mut self) -> &mut Self {
        self.having_entries.clear();
        self
    }

    pub fn set_quote_style(&mut self, style: QuoteStyle) -> &mut Self {
        self.quote_style = style;
        self
    }

    pub fn quote_style(&self) -> QuoteStyle {
        self.quote_style
    }

    pub fn quote_identifier(&self, ident: &str) -> String {
        self.quote_style.quote(ident)
    }

    pub fn quote_identifier_in_fragment(&self, fragment: &str) -> String {
        self.quote_style.quote_fragment(fragment)
    }

    /// 渲染 SQL，同时重建参数快照。
    pub fn get_sql(&mut self) -> String {
        let (sql, parameters) = self.render();
        self.parameters = parameters;
        sql
    }

    /// 返回最近一次 `get_sql` 收集的参数；从未渲染时为空。
    pub fn get_parameters(&self) -> Vec<SqlValue> {
        self.parameters.clone()
    }

    /// 成对取 SQL 与参数，交给执行器按位置绑定。
    pub fn get(&mut self) -> (String, Vec<SqlValue>) {
        let sql = self.get_sql();
        (sql, self.get_parameters())
    }

    /// 渲染并取全部行。
    pub fn fetch_all<R: Runner>(&mut self, runner: &mut R) -> Result<Vec<RowData>, RunnerError> {
        let (sql, parameters) = self.get();
        runner.fetch_all(&sql, &parameters)
    }

    /// 渲染并取首行。
    pub fn fetch_one<R: Runner>(&mut self, runner: &mut R) -> Result<Option<RowData>, RunnerError> {
        let (sql, parameters) = self.get();
        runner.fetch_one(&sql, &parameters)
    }

    /// 渲染并取首行首列。
    pub fn fetch_value<R: Runner>(
        &mut self,
        runner: &mut R,
    ) -> Result<Option<SqlValue>, RunnerError> {
        let (sql, parameters) = self.get();
        runner.fetch_value(&sql, &parameters)
    }

    // 子句固定顺序：SELECT / FROM / JOIN / WHERE / GROUP BY / HAVING / ORDER BY / LIMIT。
    fn render(&self) -> (String, Vec<SqlValue>) {
        let mut parameters = Vec::new();
        let mut lines = Vec::new();

        lines.push(format!("SELECT {}", self.render_columns()));

        let table_raw = self.table.as_ref().map(TableRef::raw).unwrap_or_default();
        lines.push(format!("FROM {}", self.quote_style.quote(table_raw)));

        for join in &self.joins {
            lines.push(format!(
                "{} {} ON {}",
                join.kind.as_sql(),
                self.quote_style.quote_fragment(join.table.raw()),
                join.on
            ));
        }

        if !self.where_entries.is_empty() {
            let (body, values) = compose(&self.where_entries);
            lines.push(format!("WHERE {body}"));
            parameters.extend(values);
        }

        if !self.group_entries.is_empty() {
            lines.push(format!("GROUP BY {}", self.render_group()));
        }

        if !self.having_entries.is_empty() {
            let (body, values) = compose(&self.having_entries);
            lines.push(format!("HAVING {body}"));
            parameters.extend(values);
        }

        if !self.order_entries.is_empty() {
            lines.push(format!("ORDER BY {}", self.render_order()));
        }

        if let Some(limit) = self.limit {
            lines.push(match self.offset {
                Some(offset) => format!("LIMIT {offset},{limit}"),
                None => format!("LIMIT {limit}"),
            });
        }

        (lines.join("\n"), parameters)
    }

    fn render_columns(&self) -> String {
        let empty = TableRef::new("");
        let main = self.table.as_ref().unwrap_or(&empty);

        let mut tables: Vec<(&TableRef, &[ColumnSpec])> = vec![(main, &self.columns[..])];
        for join in &self.joins {
            tables.push((&join.table, &join.columns[..]));
        }

        let mut rendered = Vec::new();
        for (table, columns) in tables {
            let qualifier = self.quote_style.quote(&table.qualifier());
            for column in columns {
                match column {
                    // 星号必须带表限定，否则 JOIN 查询会因歧义列报错
                    ColumnSpec::Star => rendered.push(format!("{qualifier}.*")),
                    ColumnSpec::Raw(expr) => rendered.push(expr.clone()),
                    ColumnSpec::Named { name, alias } => {
                        let mut item = if self.prefix_columns_with_table {
                            format!("{qualifier}.{}", self.quote_style.quote_fragment(name))
                        } else {
                            self.quote_style.quote_fragment(name)
                        };
                        if let Some(alias) = alias {
                            item.push_str(" AS ");
                            item.push_str(&self.quote_style.quote(alias));
                        }
                        rendered.push(item);
                    }
                }
            }
        }
        rendered.join(",")
    }

    fn render_group(&self) -> String {
        self.group_entries
            .iter()
            .map(|group| match group {
                GroupSpec::Raw(expr) => expr.clone(),
                GroupSpec::Fragment(fragment) => self.quote_style.quote_fragment(fragment),
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn render_order(&self) -> String {
        self.order_entries
            .iter()
            .map(|entry| {
                let (column, direction) = match entry.find(' ') {
                    Some(pos) => (&entry[..pos], &entry[pos + 1..]),
                    None => (entry.as_str(), ""),
                };
                let direction = if direction.eq_ignore_ascii_case("DESC") {
                    "DESC"
                } else {
                    "ASC"
                };
                format!(
                    "{} {}",
                    self.quote_style.quote_fragment(column),
                    direction
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
