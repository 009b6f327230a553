#[cfg(test)]
mod tests {
    use crate::interpolate::InterpolateError;
    use crate::{SqlValue, quote_into};
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    #[test]
    fn replaces_placeholders_in_order() {
        let out = quote_into(
            "SELECT * FROM users WHERE id = ? AND name = ?",
            &[7.into(), "alice".into()],
        )
        .unwrap();
        assert_eq!(out, "SELECT * FROM users WHERE id = 7 AND name = 'alice'");
    }

    #[test]
    fn string_values_are_escaped() {
        let out = quote_into("name = ?", &["o'brien".into()]).unwrap();
        assert_eq!(out, "name = 'o\\'brien'");
    }

    #[test]
    fn placeholders_inside_quotes_are_untouched() {
        let out = quote_into("SELECT '?', ?", &[SqlValue::I64(1)]).unwrap();
        assert_eq!(out, "SELECT '?', 1");

        let out = quote_into("SELECT `a?b` FROM t WHERE x = ?", &[true.into()]).unwrap();
        assert_eq!(out, "SELECT `a?b` FROM t WHERE x = TRUE");
    }

    #[test]
    fn escaped_quote_does_not_close_the_run() {
        let out = quote_into("SELECT 'it\\'s ?', ?", &[5.into()]).unwrap();
        assert_eq!(out, "SELECT 'it\\'s ?', 5");
    }

    #[test]
    fn null_and_bool_literals() {
        let out = quote_into("a = ? AND b = ?", &[SqlValue::Null, false.into()]).unwrap();
        assert_eq!(out, "a = NULL AND b = FALSE");
    }

    #[test]
    fn bytes_render_as_hex_literal() {
        let out = quote_into("data = ?", &[vec![0x0A_u8, 0xFF].into()]).unwrap();
        assert_eq!(out, "data = X'0AFF'");
    }

    #[test]
    fn datetime_renders_with_microseconds() {
        let dt = datetime!(2024-05-06 07:08:09 UTC);
        let out = quote_into("created_at < ?", &[dt.into()]).unwrap();
        assert_eq!(out, "created_at < '2024-05-06 07:08:09.000000'");
    }

    #[test]
    fn missing_values_error() {
        let err = quote_into("a = ? AND b = ?", &[1.into()]).unwrap_err();
        assert!(matches!(err, InterpolateError::MissingValues));
    }

    #[test]
    fn extra_values_are_ignored() {
        let out = quote_into("a = ?", &[1.into(), 2.into()]).unwrap();
        assert_eq!(out, "a = 1");
    }
}
