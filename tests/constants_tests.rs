/// Constants and fixed SQL statement tests
use tiendatech::constants::*;

// ==================== Log levels ====================

#[test]
fn test_log_levels_count_and_order() {
    assert_eq!(LOG_LEVELS.len(), 5);
    assert_eq!(LOG_LEVELS[0], "trace");
    assert_eq!(LOG_LEVELS[4], "error");
}

// ==================== Schema names ====================

#[test]
fn test_table_names() {
    assert_eq!(TABLA_CLIENTES, "clientes");
    assert_eq!(TABLA_PROVEEDORES, "proveedores");
    assert_eq!(TABLA_CATEGORIAS, "categorias");
    assert_eq!(TABLA_PRODUCTOS, "productos");
    assert_eq!(TABLA_PEDIDOS, "pedidos");
    assert_eq!(TABLA_ITEMS_PEDIDO, "items_pedido");
    assert_eq!(TABLA_ERRORES_STOCK, "errores_stock");
}

#[test]
fn test_low_stock_threshold() {
    assert_eq!(LOW_STOCK_THRESHOLD, 30);
}

// ==================== SQL statements ====================

#[test]
fn test_list_tables_targets_public_base_tables() {
    assert!(SQL_LIST_TABLES.contains("information_schema.tables"));
    assert!(SQL_LIST_TABLES.contains("table_schema = 'public'"));
    assert!(SQL_LIST_TABLES.contains("BASE TABLE"));
    assert!(SQL_LIST_TABLES.contains("ORDER BY table_name"));
}

#[test]
fn test_top_spenders_ranks_at_most_five() {
    assert!(SQL_TOP_SPENDERS.contains("ROW_NUMBER() OVER"));
    assert!(SQL_TOP_SPENDERS.contains("ranking <= 5"));
    assert!(SQL_TOP_SPENDERS.contains("SUM(ip.cantidad * ip.precio_unitario)"));
    assert!(SQL_TOP_SPENDERS.contains("ORDER BY total_gastado DESC"));
}

#[test]
fn test_top_spenders_casts_spend_to_float8() {
    assert!(SQL_TOP_SPENDERS.contains("::float8"));
}

#[test]
fn test_category_hierarchy_covers_three_levels() {
    assert!(SQL_CATEGORY_HIERARCHY.contains("c1.nivel = 1"));
    assert!(SQL_CATEGORY_HIERARCHY.contains("c1.nivel = 2"));
    assert!(SQL_CATEGORY_HIERARCHY.contains("c1.nivel = 3"));
    assert!(SQL_CATEGORY_HIERARCHY.contains("' > '"));
    assert!(SQL_CATEGORY_HIERARCHY.contains("categoria_padre_id"));
    assert!(SQL_CATEGORY_HIERARCHY.contains("ORDER BY c1.nivel, ruta_completa"));
}

#[test]
fn test_best_sellers_limits_to_three_recent() {
    assert!(SQL_BEST_SELLERS.contains("LIMIT 3"));
    assert!(SQL_BEST_SELLERS.contains("INTERVAL '1 year'"));
    assert!(SQL_BEST_SELLERS.contains("ORDER BY total_vendido DESC"));
}

#[test]
fn test_gmail_high_spenders_filters() {
    assert!(SQL_GMAIL_HIGH_SPENDERS.contains("LIKE '%@gmail.com'"));
    assert!(SQL_GMAIL_HIGH_SPENDERS.contains("> 1000"));
    assert!(SQL_GMAIL_HIGH_SPENDERS.contains("HAVING"));
}

#[test]
fn test_stock_report_orders_ascending() {
    assert!(SQL_STOCK_REPORT.contains("stock_actual"));
    assert!(SQL_STOCK_REPORT.contains("ORDER BY stock_actual ASC"));
}

#[test]
fn test_reports_are_parameterless() {
    // fixed statements only; nothing expects bound parameters
    for sql in [
        SQL_LIST_TABLES,
        SQL_TOP_SPENDERS,
        SQL_CATEGORY_HIERARCHY,
        SQL_BEST_SELLERS,
        SQL_GMAIL_HIGH_SPENDERS,
        SQL_STOCK_REPORT,
    ] {
        assert!(!sql.contains("$1"), "unexpected placeholder in: {sql}");
    }
}
