use sea_orm::{DatabaseConnection, Statement, Value};
use std::sync::Arc;

/// Drains every statement a mock connection received, in execution order.
/// The adapter holding the other `Arc` must be dropped first.
pub fn logged_statements(db: Arc<DatabaseConnection>) -> Vec<Statement> {
    let conn = match Arc::try_unwrap(db) {
        Ok(conn) => conn,
        Err(_) => panic!("mock connection is still shared"),
    };

    conn.into_transaction_log()
        .iter()
        .flat_map(|tx| tx.statements().to_vec())
        .collect()
}

/// Value bound to the `$n` placeholder directly after `fragment`.
///
/// `bound_value(&stmt, r#""meetings"."is_deleted" = "#)` yields
/// `Some(Value::Bool(Some(false)))` for an active-row filter.
pub fn bound_value(stmt: &Statement, fragment: &str) -> Option<Value> {
    let start = stmt.sql.find(fragment)? + fragment.len();
    let rest = stmt.sql[start..].strip_prefix('$')?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let index: usize = digits.parse().ok()?;

    stmt.values.as_ref()?.0.get(index.checked_sub(1)?).cloned()
}

pub const ACTIVE_FILTER: &str = r#""meetings"."is_deleted" = "#;
