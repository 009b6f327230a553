#[cfg(test)]
mod tests {
    use crate::runner::{RowData, Runner, RunnerError};
    use crate::{BuilderError, Delete, SqlValue, Update};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingRunner {
        executed: Vec<(String, Vec<SqlValue>)>,
    }

    impl Runner for RecordingRunner {
        fn execute(&mut self, sql: &str, parameters: &[SqlValue]) -> Result<u64, RunnerError> {
            self.executed.push((sql.to_string(), parameters.to_vec()));
            Ok(3)
        }

        fn fetch_all(
            &mut self,
            _sql: &str,
            _parameters: &[SqlValue],
        ) -> Result<Vec<RowData>, RunnerError> {
            Ok(Vec::new())
        }

        fn fetch_one(
            &mut self,
            _sql: &str,
            _parameters: &[SqlValue],
        ) -> Result<Option<RowData>, RunnerError> {
            Ok(None)
        }

        fn last_insert_id(&mut self) -> Result<u64, RunnerError> {
            Ok(0)
        }
    }

    #[test]
    fn update_basic_set_where() {
        let mut up = Update::new("users").unwrap();
        up.set("name", "bob").where_("id = ?", 7);
        let (sql, params) = up.get().unwrap();
        assert_eq!(sql, "UPDATE users SET name = ? WHERE (id = ?)");
        assert_eq!(
            params,
            vec![SqlValue::String("bob".into()), SqlValue::I64(7)]
        );
    }

    #[test]
    fn update_raw_assignment_binds_nothing() {
        let mut up = Update::new("users").unwrap();
        up.set("name", "bob")
            .set_raw("updated_at", "NOW()")
            .where_("id = ?", 7);
        let (sql, params) = up.get().unwrap();
        assert_eq!(
            sql,
            "UPDATE users SET name = ?, updated_at = NOW() WHERE (id = ?)"
        );
        assert_eq!(
            params,
            vec![SqlValue::String("bob".into()), SqlValue::I64(7)]
        );
    }

    #[test]
    fn update_parameters_are_set_values_then_where_binds() {
        let mut up = Update::new("t").unwrap();
        up.set("a", 1).where_("x IN (?,?)", [2, 3]).set("b", 4);
        let (_, params) = up.get().unwrap();
        assert_eq!(
            params,
            vec![
                SqlValue::I64(1),
                SqlValue::I64(4),
                SqlValue::I64(2),
                SqlValue::I64(3)
            ]
        );
    }

    #[test]
    fn update_without_where_falls_back_to_never_matching_guard() {
        let mut up = Update::new("users").unwrap();
        up.set("name", "bob");
        let (sql, _) = up.get().unwrap();
        assert_eq!(sql, "UPDATE users SET name = ? WHERE 0");
    }

    #[test]
    fn update_or_where_uses_or_connector() {
        let mut up = Update::new("users").unwrap();
        up.set("name", "bob")
            .where_("a = ?", 1)
            .or_where("b = ?", 2);
        let (sql, _) = up.get().unwrap();
        assert!(sql.ends_with("WHERE (a = ?) OR (b = ?)"));
    }

    #[test]
    fn update_empty_dataset_is_rejected() {
        let mut up = Update::new("users").unwrap();
        up.where_("id = ?", 7);
        assert_eq!(up.get_sql(), Err(BuilderError::EmptyDataset));
    }

    #[test]
    fn update_blank_table_is_rejected() {
        assert_eq!(Update::new("").unwrap_err(), BuilderError::MissingTable);
    }

    #[test]
    fn delete_basic_where() {
        let mut del = Delete::new("users").unwrap();
        del.where_("id = ?", 7);
        let (sql, params) = del.get();
        assert_eq!(sql, "DELETE FROM users WHERE (id = ?)");
        assert_eq!(params, vec![SqlValue::I64(7)]);
    }

    #[test]
    fn delete_without_where_falls_back_to_never_matching_guard() {
        let mut del = Delete::new("users").unwrap();
        let (sql, params) = del.get();
        assert_eq!(sql, "DELETE FROM users WHERE 0");
        assert!(params.is_empty());
    }

    #[test]
    fn delete_mixed_connectors() {
        let mut del = Delete::new("users").unwrap();
        del.where_("a = ?", 1).or_where("b = ?", 2);
        let (sql, _) = del.get();
        assert_eq!(sql, "DELETE FROM users WHERE (a = ?) OR (b = ?)");
    }

    #[test]
    fn delete_execute_hands_rendered_pair_to_the_runner() {
        let mut runner = RecordingRunner::default();
        let mut del = Delete::new("users").unwrap();
        del.where_("id = ?", 7);
        assert_eq!(del.execute(&mut runner).unwrap(), 3);
        assert_eq!(
            runner.executed,
            vec![(
                "DELETE FROM users WHERE (id = ?)".to_string(),
                vec![SqlValue::I64(7)]
            )]
        );
    }

    #[test]
    fn delete_clear_where_restores_guard() {
        let mut del = Delete::new("users").unwrap();
        del.where_("a = ?", 1).clear_where();
        let (sql, params) = del.get();
        assert_eq!(sql, "DELETE FROM users WHERE 0");
        assert!(params.is_empty());
    }
}
