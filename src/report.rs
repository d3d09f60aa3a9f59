//! Report queries against the TiendaTech schema
//!
//! Six fixed, parameterless reports. Each returns `Result<Vec<_>>` so an
//! empty result set stays distinguishable from a failed query; the caller
//! decides what to surface.

use crate::constants::{
    SQL_BEST_SELLERS, SQL_CATEGORY_HIERARCHY, SQL_GMAIL_HIGH_SPENDERS, SQL_LIST_TABLES,
    SQL_STOCK_REPORT, SQL_TOP_SPENDERS,
};
use crate::db::Session;
use crate::error::Result;

/// One base table of the public schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub name: String,
}

/// A customer ranked by total spend.
#[derive(Debug, Clone, PartialEq)]
pub struct TopSpender {
    pub cliente_id: i32,
    pub nombre: String,
    pub email: String,
    pub total_gastado: f64,
}

/// A category with its full ancestor path and direct product count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPath {
    pub categoria_id: i32,
    /// Up to three level names joined with " > "; `None` only if the stored
    /// level falls outside 1..=3.
    pub ruta_completa: Option<String>,
    pub nivel: i32,
    pub total_productos: i64,
}

/// A product ranked by units sold over the last year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSeller {
    pub producto_id: i32,
    pub nombre: String,
    pub total_vendido: i64,
}

/// A gmail customer whose aggregate spend exceeds 1000.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GmailCustomer {
    pub cliente_id: i32,
    pub nombre: String,
    pub email: String,
}

/// A product with its current stock level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevel {
    pub producto_id: i32,
    pub nombre: String,
    pub stock_actual: i32,
}

/// Source of the six reports. The menu loop talks to this trait so it can
/// be exercised without a live database.
pub trait ReportSource {
    /// Base tables of the public schema, alphabetical.
    fn list_tables(&mut self) -> Result<Vec<TableInfo>>;

    /// Top 5 customers by total spend, descending.
    fn top_spenders(&mut self) -> Result<Vec<TopSpender>>;

    /// Every category with its full path and product count, ordered by
    /// level then path.
    fn category_hierarchy(&mut self) -> Result<Vec<CategoryPath>>;

    /// Top 3 products by units sold within the last year.
    fn best_sellers(&mut self) -> Result<Vec<BestSeller>>;

    /// Gmail customers with aggregate spend over 1000.
    fn gmail_high_spenders(&mut self) -> Result<Vec<GmailCustomer>>;

    /// All products with current stock, lowest first.
    fn stock_report(&mut self) -> Result<Vec<StockLevel>>;
}

impl ReportSource for Session {
    fn list_tables(&mut self) -> Result<Vec<TableInfo>> {
        let rows = self.run_report("list_tables", SQL_LIST_TABLES)?;
        Ok(rows
            .iter()
            .map(|row| TableInfo { name: row.get(0) })
            .collect())
    }

    fn top_spenders(&mut self) -> Result<Vec<TopSpender>> {
        let rows = self.run_report("top_spenders", SQL_TOP_SPENDERS)?;
        Ok(rows
            .iter()
            .map(|row| TopSpender {
                cliente_id: row.get(0),
                nombre: row.get(1),
                email: row.get(2),
                total_gastado: row.get(3),
            })
            .collect())
    }

    fn category_hierarchy(&mut self) -> Result<Vec<CategoryPath>> {
        let rows = self.run_report("category_hierarchy", SQL_CATEGORY_HIERARCHY)?;
        Ok(rows
            .iter()
            .map(|row| CategoryPath {
                categoria_id: row.get(0),
                ruta_completa: row.get(1),
                nivel: row.get(2),
                total_productos: row.get(3),
            })
            .collect())
    }

    fn best_sellers(&mut self) -> Result<Vec<BestSeller>> {
        let rows = self.run_report("best_sellers", SQL_BEST_SELLERS)?;
        Ok(rows
            .iter()
            .map(|row| BestSeller {
                producto_id: row.get(0),
                nombre: row.get(1),
                total_vendido: row.get(2),
            })
            .collect())
    }

    fn gmail_high_spenders(&mut self) -> Result<Vec<GmailCustomer>> {
        let rows = self.run_report("gmail_high_spenders", SQL_GMAIL_HIGH_SPENDERS)?;
        Ok(rows
            .iter()
            .map(|row| GmailCustomer {
                cliente_id: row.get(0),
                nombre: row.get(1),
                email: row.get(2),
            })
            .collect())
    }

    fn stock_report(&mut self) -> Result<Vec<StockLevel>> {
        let rows = self.run_report("stock_report", SQL_STOCK_REPORT)?;
        Ok(rows
            .iter()
            .map(|row| StockLevel {
                producto_id: row.get(0),
                nombre: row.get(1),
                stock_actual: row.get(2),
            })
            .collect())
    }
}
