//! Shared constants and fixed SQL statements
//!
//! Provides:
//! - valid log level list `LOG_LEVELS`
//! - TiendaTech schema table names
//! - the six parameterless report queries

/// Valid log levels (single source of truth)
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// TiendaTech schema table names (the schema is owned by the database, not
/// by this tool; names are kept verbatim)
pub const TABLA_CLIENTES: &str = "clientes";
pub const TABLA_PROVEEDORES: &str = "proveedores";
pub const TABLA_CATEGORIAS: &str = "categorias";
pub const TABLA_PRODUCTOS: &str = "productos";
pub const TABLA_PEDIDOS: &str = "pedidos";
pub const TABLA_ITEMS_PEDIDO: &str = "items_pedido";
pub const TABLA_ERRORES_STOCK: &str = "errores_stock";

/// Stock at or above this count is considered healthy; below it the stock
/// report flags the product.
pub const LOW_STOCK_THRESHOLD: i32 = 30;

/// Base tables of the public schema, alphabetical.
pub const SQL_LIST_TABLES: &str = "
    SELECT table_name
    FROM information_schema.tables
    WHERE table_schema = 'public'
    AND table_type = 'BASE TABLE'
    ORDER BY table_name;
";

/// Top 5 customers by total spend. The window ranking keeps ties stable in
/// the database's row-numbering order. Spend is cast to float8 so the driver
/// maps it without NUMERIC support.
pub const SQL_TOP_SPENDERS: &str = "
    WITH gastos_clientes AS (
        SELECT
            c.cliente_id,
            c.nombre,
            c.email,
            SUM(ip.cantidad * ip.precio_unitario)::float8 AS total_gastado,
            ROW_NUMBER() OVER (ORDER BY SUM(ip.cantidad * ip.precio_unitario) DESC) AS ranking
        FROM clientes c
        INNER JOIN pedidos p ON c.cliente_id = p.cliente_id
        INNER JOIN items_pedido ip ON p.pedido_id = ip.pedido_id
        GROUP BY c.cliente_id, c.nombre, c.email
    )
    SELECT cliente_id, nombre, email, total_gastado
    FROM gastos_clientes
    WHERE ranking <= 5
    ORDER BY total_gastado DESC;
";

/// Full path per category across the 3-level hierarchy, with the count of
/// directly associated products. Levels deeper than 3 do not exist in the
/// schema, hence the fixed self-joins instead of a recursive CTE.
pub const SQL_CATEGORY_HIERARCHY: &str = "
    SELECT
        c1.categoria_id,
        CASE
            WHEN c1.nivel = 1 THEN c1.nombre
            WHEN c1.nivel = 2 THEN c2.nombre || ' > ' || c1.nombre
            WHEN c1.nivel = 3 THEN c3.nombre || ' > ' || c2.nombre || ' > ' || c1.nombre
        END AS ruta_completa,
        c1.nivel,
        COUNT(p.producto_id)::bigint AS total_productos
    FROM categorias c1
    LEFT JOIN categorias c2 ON c1.categoria_padre_id = c2.categoria_id
    LEFT JOIN categorias c3 ON c2.categoria_padre_id = c3.categoria_id
    LEFT JOIN productos p ON c1.categoria_id = p.categoria_id
    GROUP BY c1.categoria_id, c1.nombre, c1.nivel, c2.nombre, c3.nombre
    ORDER BY c1.nivel, ruta_completa;
";

/// Top 3 products by units sold over orders of the last year.
pub const SQL_BEST_SELLERS: &str = "
    SELECT
        p.producto_id,
        p.nombre,
        SUM(ip.cantidad)::bigint AS total_vendido
    FROM productos p
    INNER JOIN items_pedido ip ON p.producto_id = ip.producto_id
    INNER JOIN pedidos ped ON ip.pedido_id = ped.pedido_id
    WHERE ped.fecha_pedido >= CURRENT_DATE - INTERVAL '1 year'
    GROUP BY p.producto_id, p.nombre
    ORDER BY total_vendido DESC
    LIMIT 3;
";

/// Customers on a gmail address whose aggregate spend exceeds 1000.
pub const SQL_GMAIL_HIGH_SPENDERS: &str = "
    SELECT
        c.cliente_id,
        c.nombre,
        c.email
    FROM clientes c
    WHERE c.email LIKE '%@gmail.com'
    AND c.cliente_id IN (
        SELECT p.cliente_id
        FROM pedidos p
        INNER JOIN items_pedido ip ON p.pedido_id = ip.pedido_id
        GROUP BY p.cliente_id
        HAVING SUM(ip.cantidad * ip.precio_unitario) > 1000
    );
";

/// Every product with its current stock, lowest stock first.
pub const SQL_STOCK_REPORT: &str = "
    SELECT producto_id, nombre, stock_actual
    FROM productos
    ORDER BY stock_actual ASC;
";
