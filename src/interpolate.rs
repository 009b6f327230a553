//! 字面量插值：把引号区域之外的 `?` 依次替换为 SQL 字面量。
//!
//! 安全警告：插值永远不如预编译参数安全，仅用于日志与调试输出。

use crate::value::SqlValue;
use time::macros::format_description;

#[derive(Debug, thiserror::Error)]
pub enum InterpolateError {
    #[error("not enough bind values for the given placeholders")]
    MissingValues,
    #[error("{0}")]
    Format(#[from] time::error::Format),
}

/// 把 `sql` 中单引号/双引号/反引号区域之外的 `?` 依次替换为 `values` 的字面量。
///
/// 引号区域内的反斜杠转义会被尊重；占位符多于值时报 `MissingValues`，
/// 多余的值被忽略。
pub fn quote_into(sql: &str, values: &[SqlValue]) -> Result<String, InterpolateError> {
    let mut out = String::with_capacity(sql.len() + values.len() * 16);
    let mut quote: Option<char> = None;
    let mut escaping = false;
    let mut next = 0usize;

    for ch in sql.chars() {
        if escaping {
            out.push(ch);
            escaping = false;
            continue;
        }
        match ch {
            '\\' if quote.is_some() => {
                out.push(ch);
                escaping = true;
            }
            '\'' | '"' | '`' => {
                if quote == Some(ch) {
                    quote = None;
                } else if quote.is_none() {
                    quote = Some(ch);
                }
                out.push(ch);
            }
            '?' if quote.is_none() => {
                let value = values.get(next).ok_or(InterpolateError::MissingValues)?;
                encode_value(&mut out, value)?;
                next += 1;
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

fn encode_value(out: &mut String, value: &SqlValue) -> Result<(), InterpolateError> {
    match value {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => out.push_str(&n.to_string()),
        SqlValue::String(s) => quote_string(out, s),
        SqlValue::Bytes(data) => {
            out.push_str("X'");
            push_hex(out, data);
            out.push('\'');
        }
        SqlValue::DateTime(dt) => {
            let format = format_description!(
                "'[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]'"
            );
            out.push_str(&dt.format(format)?);
        }
    }
    Ok(())
}

fn quote_string(out: &mut String, s: &str) {
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\u{0000}' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{001a}' => out.push_str("\\Z"),
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in data {
        out.push(HEX[((b >> 4) & 0xF) as usize] as char);
        out.push(HEX[(b & 0xF) as usize] as char);
    }
}
