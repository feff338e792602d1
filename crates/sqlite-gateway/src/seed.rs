//! Demo tables and rows so a fresh install has something to query.

use rusqlite::params;

use crate::{core::connection::StoreConfig, error::AppResult};

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS Sucursal (
    id_Sucursal INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre_Sucursal TEXT NOT NULL,
    direccion TEXT UNIQUE NOT NULL,
    fecha_registro DATE DEFAULT CURRENT_DATE
);
CREATE TABLE IF NOT EXISTS retiros (
    id_retiro INTEGER PRIMARY KEY AUTOINCREMENT,
    cantidad_retiros INTEGER NOT NULL,
    fecha_retiro DATE DEFAULT CURRENT_DATE
);
CREATE TABLE IF NOT EXISTS transaccion (
    id_deposito INTEGER PRIMARY KEY AUTOINCREMENT,
    cantidad_deposito INTEGER,
    monto_ingreso REAL,
    fecha_deposito DATETIME DEFAULT CURRENT_TIMESTAMP
);
";

const BRANCHES: [(&str, &str); 25] = [
    ("Sucursal Central", "Av. Principal 123"),
    ("Sucursal Norte", "Calle Secundaria 456"),
    ("Sucursal Sur", "Boulevard Tercero 789"),
    ("Sucursal Este", "Avenida Cuarto 101"),
    ("Sucursal Oeste", "Calle Quinta 202"),
    ("Sucursal Centro", "Calle Sexta 303"),
    ("Sucursal Internacional", "Avenida Séptima 404"),
    ("Sucursal Local", "Calle Octava 505"),
    ("Sucursal Urbana", "Boulevard Noveno 606"),
    ("Sucursal Rural", "Calle Décima 707"),
    ("Sucursal Metropolitana", "Avenida Once 808"),
    ("Sucursal Provincial", "Calle Doce 909"),
    ("Sucursal Regional", "Boulevard Trece 111"),
    ("Sucursal Nacional", "Avenida Catorce 222"),
    ("Sucursal Internacional II", "Calle Quince 333"),
    ("Sucursal Local II", "Boulevard Dieciséis 444"),
    ("Sucursal Urbana II", "Avenida Diecisiete 555"),
    ("Sucursal Rural II", "Calle Dieciocho 666"),
    ("Sucursal Metropolitana II", "Boulevard Diecinueve 777"),
    ("Sucursal Provincial II", "Avenida Veinte 888"),
    ("Sucursal Regional II", "Calle Veintiuno 999"),
    ("Sucursal Nacional II", "Boulevard Veintidós 121"),
    ("Sucursal Central III", "Avenida Veintitrés 232"),
    ("Sucursal Norte III", "Calle Veinticuatro 343"),
    ("Sucursal Sur III", "Boulevard Veinticinco 454"),
];

const DEPOSITS: [(i64, f64); 25] = [
    (100, 2500.00),
    (150, 3750.50),
    (200, 4200.00),
    (250, 5250.75),
    (300, 6000.00),
    (350, 7700.25),
    (400, 8200.00),
    (450, 9450.90),
    (500, 10000.00),
    (550, 11000.50),
    (600, 12100.00),
    (650, 13550.75),
    (700, 14000.00),
    (750, 15750.25),
    (800, 16000.00),
    (850, 17650.80),
    (900, 18000.00),
    (950, 19950.45),
    (1000, 20000.00),
    (1050, 22050.60),
    (1100, 23000.00),
    (1150, 24150.35),
    (1200, 25000.00),
    (1250, 27500.00),
    (1300, 28600.00),
];

/// Creates the demo tables and fills them once. Rows are only inserted
/// while `Sucursal` is empty, so rerunning on startup is harmless.
pub fn init_demo_data(store: &StoreConfig) -> AppResult<()> {
    store.ensure_parent_dir()?;
    let mut conn = store.open()?;
    conn.execute_batch(CREATE_TABLES)?;

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM Sucursal", [], |r| r.get(0))?;
    if existing > 0 {
        tracing::debug!(existing, "demo data already present");
        return Ok(());
    }

    let tx = conn.transaction()?;
    {
        let mut insert = tx.prepare("INSERT INTO Sucursal (nombre_Sucursal, direccion) VALUES (?1, ?2)")?;
        for (name, address) in BRANCHES {
            insert.execute(params![name, address])?;
        }

        // 5000, 5100, ... 7400
        let mut insert = tx.prepare("INSERT INTO retiros (cantidad_retiros) VALUES (?1)")?;
        for amount in (5000..=7400).step_by(100) {
            insert.execute(params![amount])?;
        }

        let mut insert =
            tx.prepare("INSERT INTO transaccion (cantidad_deposito, monto_ingreso) VALUES (?1, ?2)")?;
        for (count, amount) in DEPOSITS {
            insert.execute(params![count, amount])?;
        }
    }
    tx.commit()?;

    tracing::info!(path=%store.db_path.display(), "seeded demo data");
    Ok(())
}
