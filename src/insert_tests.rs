#[cfg(test)]
mod tests {
    use crate::{BuilderError, Insert, SqlValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_binds_values_in_column_order() {
        let mut ins = Insert::new("users").unwrap();
        ins.set("name", "alice").set("age", 30);
        let (sql, params) = ins.get().unwrap();
        assert_eq!(sql, "INSERT INTO users (name, age) VALUES (?, ?)");
        assert_eq!(
            params,
            vec![SqlValue::String("alice".into()), SqlValue::I64(30)]
        );
    }

    #[test]
    fn raw_expression_is_spliced_without_binding() {
        let mut ins = Insert::new("users").unwrap();
        ins.set("name", "alice").set_raw("created_at", "NOW()");
        let (sql, params) = ins.get().unwrap();
        assert_eq!(
            sql,
            "INSERT INTO users (name, created_at) VALUES (?, NOW())"
        );
        assert_eq!(params, vec![SqlValue::String("alice".into())]);
    }

    #[test]
    fn ignore_switches_the_verb() {
        let mut ins = Insert::new("users").unwrap();
        ins.ignore().set("name", "alice");
        let (sql, _) = ins.get().unwrap();
        assert_eq!(sql, "INSERT IGNORE INTO users (name) VALUES (?)");
    }

    #[test]
    fn upsert_doubles_the_bound_parameters() {
        let mut ins = Insert::new("t").unwrap();
        ins.set("a", 1).set("b", 2).on_duplicate_key_update();
        let (sql, params) = ins.get().unwrap();
        assert_eq!(
            sql,
            "INSERT INTO t (a, b) VALUES (?, ?) ON DUPLICATE KEY UPDATE a = ?, b = ?"
        );
        assert_eq!(
            params,
            vec![
                SqlValue::I64(1),
                SqlValue::I64(2),
                SqlValue::I64(1),
                SqlValue::I64(2)
            ]
        );
    }

    #[test]
    fn upsert_keeps_raw_expressions_raw() {
        let mut ins = Insert::new("t").unwrap();
        ins.set("a", 1)
            .set_raw("b", "NOW()")
            .on_duplicate_key_update();
        let (sql, params) = ins.get().unwrap();
        assert_eq!(
            sql,
            "INSERT INTO t (a, b) VALUES (?, NOW()) ON DUPLICATE KEY UPDATE a = ?, b = NOW()"
        );
        assert_eq!(params, vec![SqlValue::I64(1), SqlValue::I64(1)]);
    }

    #[test]
    fn empty_dataset_is_rejected_at_render() {
        let mut ins = Insert::new("users").unwrap();
        assert_eq!(ins.get_sql(), Err(BuilderError::EmptyDataset));
    }

    #[test]
    fn blank_table_is_rejected_at_construction() {
        assert_eq!(Insert::new(" ").unwrap_err(), BuilderError::MissingTable);
    }

    #[test]
    fn repeated_renders_do_not_accumulate_parameters() {
        let mut ins = Insert::new("users").unwrap();
        ins.set("name", "alice");
        ins.get_sql().unwrap();
        ins.get_sql().unwrap();
        assert_eq!(
            ins.get_parameters(),
            vec![SqlValue::String("alice".into())]
        );
    }
}
