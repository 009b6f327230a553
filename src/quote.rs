//! 标识符引号：按方言符号对包裹表名/列名，内嵌符号以反斜杠转义。

/// 引号方言：决定包裹标识符的符号对。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuoteStyle {
    /// MySQL 反引号对。
    #[default]
    Backtick,
    /// SQL92 / SQLite 双引号对。
    DoubleQuote,
    /// SQL Server 方括号对。
    Bracket,
}

/// 片段引号化时跳过的记号（大小写不敏感）。
const SAFE_TOKENS: &[&str] = &[
    "as", " ", ".", "*", "and", "or", "(", ")", "=", "<", ">", "!=", "<>", ">=", "<=",
];

impl QuoteStyle {
    /// 返回 (开, 闭) 符号对。
    pub fn symbols(self) -> (char, char) {
        match self {
            Self::Backtick => ('`', '`'),
            Self::DoubleQuote => ('"', '"'),
            Self::Bracket => ('[', ']'),
        }
    }

    /// 把单个标识符包进符号对；内嵌的任一符号前加 `\` 转义。
    ///
    /// 空串输入得到裸符号对。
    pub fn quote(self, ident: &str) -> String {
        let (open, close) = self.symbols();
        let mut out = String::with_capacity(ident.len() + 2);
        out.push(open);
        for ch in ident.chars() {
            if ch == open || ch == close {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push(close);
        out
    }

    /// 引号化复合片段：按 `.` 与空白切分（分隔符原样保留），
    /// 白名单之外的片段逐个 `quote`。
    ///
    /// `"a.b = c.d"` 只会给 `a`、`b`、`c`、`d` 加引号，结构保持原样。
    pub fn quote_fragment(self, fragment: &str) -> String {
        let mut out = String::with_capacity(fragment.len() + 8);
        let mut piece = String::new();
        let mut delimiter = [0u8; 4];
        for ch in fragment.chars() {
            if ch == '.' || ch.is_whitespace() {
                self.push_piece(&mut out, &piece);
                piece.clear();
                self.push_piece(&mut out, ch.encode_utf8(&mut delimiter));
            } else {
                piece.push(ch);
            }
        }
        self.push_piece(&mut out, &piece);
        out
    }

    fn push_piece(self, out: &mut String, piece: &str) {
        if SAFE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(piece)) {
            out.push_str(piece);
        } else {
            out.push_str(&self.quote(piece));
        }
    }
}
