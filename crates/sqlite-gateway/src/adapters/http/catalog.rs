use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Example {
    pub title: &'static str,
    pub query: &'static str,
}

/// Sample statements against the demo tables, shown in the index page.
pub const EXAMPLES: &[Example] = &[
    Example {
        title: "List all branches",
        query: "SELECT * FROM Sucursal;",
    },
    Example {
        title: "Deposits above 10000",
        query: "SELECT * FROM transaccion WHERE monto_ingreso > 10000 ORDER BY monto_ingreso DESC;",
    },
    Example {
        title: "Withdrawals per date",
        query: "SELECT fecha_retiro, COUNT(*) AS retiros, SUM(cantidad_retiros) AS total FROM retiros GROUP BY fecha_retiro ORDER BY fecha_retiro;",
    },
    Example {
        title: "Branches with their nth withdrawal and deposit",
        query: "SELECT
    s.id_Sucursal AS sucursal_id,
    s.nombre_Sucursal AS sucursal,
    r.cantidad_retiros,
    t.monto_ingreso,
    t.fecha_deposito
FROM Sucursal s
JOIN retiros r ON r.id_retiro = s.id_Sucursal
JOIN transaccion t ON t.id_deposito = s.id_Sucursal
ORDER BY t.fecha_deposito DESC;",
    },
    Example {
        title: "Add a branch",
        query: "INSERT INTO Sucursal (nombre_Sucursal, direccion) VALUES ('Sucursal Nueva', 'Calle Nueva 1');",
    },
    Example {
        title: "Adjust a deposit amount",
        query: "UPDATE transaccion SET monto_ingreso = 899.99 WHERE id_deposito = 1;",
    },
];
