use std::collections::BTreeMap;

use rusqlite::{Connection, Row};

use crate::core::connection::StoreConfig;
use crate::core::types::{ColumnInfo, SchemaDescription};
use crate::error::AppResult;

/// Reads table and column metadata from the live catalog on every call.
#[derive(Debug, Clone)]
pub struct SchemaInspector {
    store: StoreConfig,
}

impl SchemaInspector {
    pub fn new(store: StoreConfig) -> Self {
        Self { store }
    }

    pub fn describe_schema(&self) -> AppResult<SchemaDescription> {
        let conn = self.store.open()?;
        let mut schema = BTreeMap::new();
        for table in list_tables(&conn)? {
            let columns = list_columns(&conn, &table)?;
            schema.insert(table, columns);
        }
        tracing::debug!(tables = schema.len(), "schema described");
        Ok(schema)
    }
}

pub fn list_tables(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let rows = stmt
        .query_map([], |r| r.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn list_columns(conn: &Connection, table: &str) -> AppResult<Vec<ColumnInfo>> {
    // The table-valued form takes the name as a bound parameter, so no
    // identifier quoting is needed.
    let mut stmt = conn.prepare(
        "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid",
    )?;
    let cols = stmt
        .query_map([table], |row: &Row<'_>| {
            let not_null: bool = row.get("notnull")?;
            let pk: i64 = row.get("pk")?;
            Ok(ColumnInfo {
                name: row.get("name")?,
                decl_type: row.get("type")?,
                // INTEGER PRIMARY KEY aliases the rowid and never holds NULL.
                nullable: !not_null && pk == 0,
                primary_key: pk > 0,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::connection::test_support::{items_store, temp_store};
    use pretty_assertions::assert_eq;

    #[test]
    fn describes_fixture_table() {
        let (_dir, store) = items_store();
        let schema = SchemaInspector::new(store).describe_schema().unwrap();
        assert_eq!(
            schema["items"],
            vec![
                ColumnInfo {
                    name: "id".into(),
                    decl_type: "INTEGER".into(),
                    nullable: false,
                    primary_key: true,
                },
                ColumnInfo {
                    name: "name".into(),
                    decl_type: "TEXT".into(),
                    nullable: true,
                    primary_key: false,
                },
            ]
        );
    }

    #[test]
    fn internal_tables_are_hidden() {
        let (_dir, store) = temp_store();
        store
            .open()
            .unwrap()
            .execute_batch("CREATE TABLE seq (id INTEGER PRIMARY KEY AUTOINCREMENT, v TEXT NOT NULL);")
            .unwrap();
        let schema = SchemaInspector::new(store).describe_schema().unwrap();
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["seq"]);
        assert!(!schema["seq"][1].nullable);
    }

    #[test]
    fn empty_database_has_empty_schema() {
        let (_dir, store) = temp_store();
        let schema = SchemaInspector::new(store).describe_schema().unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn repeated_calls_agree() {
        let (_dir, store) = items_store();
        let inspector = SchemaInspector::new(store);
        assert_eq!(inspector.describe_schema().unwrap(), inspector.describe_schema().unwrap());
    }

    #[test]
    fn ddl_is_reflected_on_next_call() {
        let (_dir, store) = items_store();
        let inspector = SchemaInspector::new(store.clone());
        assert_eq!(inspector.describe_schema().unwrap().len(), 1);

        store
            .open()
            .unwrap()
            .execute_batch(
                "ALTER TABLE items ADD COLUMN added_on DATE DEFAULT CURRENT_DATE;
                 CREATE TABLE \"odd name\" (k TEXT, v TEXT, PRIMARY KEY (k, v));",
            )
            .unwrap();

        let schema = inspector.describe_schema().unwrap();
        assert_eq!(schema.len(), 2);
        let added = schema["items"].last().unwrap();
        assert_eq!(added.name, "added_on");
        assert_eq!(added.decl_type, "DATE");
        let odd = &schema["odd name"];
        assert!(odd.iter().all(|c| c.primary_key && !c.nullable));
    }

    #[test]
    fn unreachable_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = StoreConfig::new(
            &dir.path().join("missing-dir/x.db"),
            std::time::Duration::ZERO,
        )
        .unwrap();
        let err = SchemaInspector::new(store).describe_schema().unwrap_err();
        assert_eq!(err.code(), "DB_OPEN_FAILED");
    }
}
