use std::collections::HashMap;

use rusqlite::{types::ValueRef, Batch, Connection, Row, Statement as SqlStatement};

use crate::core::connection::StoreConfig;
use crate::core::types::{
    DbRow, ExecutionResult, MutationSummary, ResponseEnvelope, Statement, Value,
};
use crate::error::{AppError, AppResult};

pub const MUTATION_MESSAGE: &str = "Query executed successfully";
pub const MULTIPLE_STATEMENTS: &str = "You can only execute one statement at a time.";

/// Runs one caller-supplied statement per call on a fresh connection.
///
/// The SQL is handed to SQLite untouched. Nothing is bound, rewritten or
/// restricted; whatever the engine accepts is executed.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    store: StoreConfig,
}

impl QueryExecutor {
    pub fn new(store: StoreConfig) -> Self {
        Self { store }
    }

    pub fn execute(&self, statement: &Statement) -> ResponseEnvelope {
        match self.run(statement) {
            Ok(result) => {
                tracing::debug!(read = statement.is_read(), "statement executed");
                result.into()
            }
            Err(e) => {
                tracing::debug!(code = e.code(), error = %e, "statement failed");
                e.into()
            }
        }
    }

    fn run(&self, statement: &Statement) -> AppResult<ExecutionResult> {
        // Dropped on return, which closes the connection on every path.
        let conn = self.store.open()?;
        if statement.is_read() {
            run_select(&conn, statement.sql())
        } else {
            run_mutation(&conn, statement.sql())
        }
    }
}

/// Compiles the only statement in `sql`.
///
/// `None` means the text held nothing but separators or comments. A second
/// statement after the first is an error; nothing is run in that case.
fn prepare_single<'c>(conn: &'c Connection, sql: &str) -> AppResult<Option<SqlStatement<'c>>> {
    let mut batch = Batch::new(conn, sql);
    let Some(stmt) = batch.next()? else {
        return Ok(None);
    };
    if batch.next()?.is_some() {
        return Err(AppError::SqlError(MULTIPLE_STATEMENTS.to_string()));
    }
    Ok(Some(stmt))
}

pub fn run_select(conn: &Connection, sql: &str) -> AppResult<ExecutionResult> {
    let Some(mut stmt) = prepare_single(conn, sql)? else {
        return Ok(ExecutionResult::Projection {
            columns: Vec::new(),
            rows: Vec::new(),
        });
    };
    let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
    let temporal: Vec<bool> = stmt
        .columns()
        .iter()
        .map(|c| c.decl_type().is_some_and(is_temporal_decltype))
        .collect();

    let mut rows = Vec::new();
    let mut r = stmt.query([])?;
    while let Some(row) = r.next()? {
        rows.push(row_to_values(row, &columns, &temporal)?);
    }

    Ok(ExecutionResult::Projection { columns, rows })
}

pub fn run_mutation(conn: &Connection, sql: &str) -> AppResult<ExecutionResult> {
    if let Some(mut stmt) = prepare_single(conn, sql)? {
        // Statements like PRAGMA may yield rows here; they are stepped through
        // and discarded.
        let mut rows = stmt.query([])?;
        while rows.next()?.is_some() {}
    }
    let affected_rows = conn.changes() as u64;
    if !conn.is_autocommit() {
        conn.execute_batch("COMMIT")?;
    }
    Ok(ExecutionResult::Mutation(MutationSummary {
        affected_rows,
        message: MUTATION_MESSAGE,
    }))
}

fn is_temporal_decltype(decl: &str) -> bool {
    let decl = decl.to_ascii_uppercase();
    decl.contains("DATE") || decl.contains("TIME")
}

fn row_to_values(row: &Row<'_>, columns: &[String], temporal: &[bool]) -> AppResult<DbRow> {
    let mut out = HashMap::with_capacity(columns.len());
    for (i, name) in columns.iter().enumerate() {
        let v = match row.get_ref(i)? {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(x) => Value::Integer(x),
            ValueRef::Real(x) => Value::Real(x),
            ValueRef::Text(t) => {
                let s = String::from_utf8_lossy(t).into_owned();
                if temporal[i] {
                    Value::Temporal(s)
                } else {
                    Value::Text(s)
                }
            }
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        };
        out.insert(name.clone(), v);
    }
    Ok(out)
}
