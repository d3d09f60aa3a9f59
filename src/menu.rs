//! Interactive reporting menu
//!
//! A single-threaded loop over stdin: parse a choice, run the matching
//! report, print the rows. A failed report is printed and absorbed; the
//! loop keeps accepting input until the exit option or EOF.

use crate::constants::LOW_STOCK_THRESHOLD;
use crate::error::Result;
use crate::report::{
    BestSeller, CategoryPath, GmailCustomer, ReportSource, StockLevel, TableInfo, TopSpender,
};
use log::error;
use std::io::{BufRead, Write};

/// One menu option, as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListTables,
    TopSpenders,
    CategoryHierarchy,
    BestSellers,
    GmailHighSpenders,
    StockReport,
    Quit,
}

impl MenuChoice {
    /// Parse a raw input line. Surrounding whitespace is ignored; anything
    /// that is not a defined option code is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ListTables),
            "2" => Some(Self::TopSpenders),
            "3" => Some(Self::CategoryHierarchy),
            "4" => Some(Self::BestSellers),
            "5" => Some(Self::GmailHighSpenders),
            "6" => Some(Self::StockReport),
            "7" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Format a monetary amount with thousands separators and two decimals.
pub fn format_amount(value: f64) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-{int_grouped}.{frac_part}")
    } else {
        format!("{int_grouped}.{frac_part}")
    }
}

/// Display line for one listed table.
pub fn format_table(table: &TableInfo) -> String {
    format!("  - {}", table.name)
}

/// Display line for one ranked top spender.
pub fn format_top_spender(rank: usize, row: &TopSpender) -> String {
    format!(
        "  {rank}. {} ({}) - ${}",
        row.nombre,
        row.email,
        format_amount(row.total_gastado)
    )
}

/// Display line for one category path row.
pub fn format_category(row: &CategoryPath) -> String {
    let ruta = row.ruta_completa.as_deref().unwrap_or("(sin ruta)");
    format!(
        "  Nivel {}: {} ({} productos)",
        row.nivel, ruta, row.total_productos
    )
}

/// Display line for one ranked best seller.
pub fn format_best_seller(rank: usize, row: &BestSeller) -> String {
    format!(
        "  {rank}. {} - {} unidades vendidas",
        row.nombre, row.total_vendido
    )
}

/// Display line for one gmail high spender.
pub fn format_gmail_customer(row: &GmailCustomer) -> String {
    format!("  - {} ({})", row.nombre, row.email)
}

/// Display line for one stock row; stock under the threshold is flagged.
pub fn format_stock(row: &StockLevel) -> String {
    let status = if row.stock_actual < LOW_STOCK_THRESHOLD {
        "BAJO"
    } else {
        "OK"
    };
    format!("  {}: {} unidades [{status}]", row.nombre, row.stock_actual)
}

fn print_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "TIENDATECH - SISTEMA DE GESTIÓN")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "1. Listar tablas")?;
    writeln!(out, "2. Mostrar top 5 clientes con mayor gasto")?;
    writeln!(out, "3. Mostrar jerarquía de categorías")?;
    writeln!(out, "4. Mostrar productos más vendidos")?;
    writeln!(out, "5. Mostrar clientes Gmail con gasto > 1000")?;
    writeln!(out, "6. Verificar stock de productos")?;
    writeln!(out, "7. Salir")?;
    writeln!(out, "{}", "=".repeat(50))?;
    write!(out, "Ingrese su opción: ")?;
    out.flush()
}

fn print_rows<W: Write, T, F>(out: &mut W, rows: &[T], line: F) -> std::io::Result<()>
where
    F: Fn(&T) -> String,
{
    if rows.is_empty() {
        writeln!(out, "  (sin resultados)")?;
        return Ok(());
    }
    for row in rows {
        writeln!(out, "{}", line(row))?;
    }
    Ok(())
}

fn print_ranked<W: Write, T, F>(out: &mut W, rows: &[T], line: F) -> std::io::Result<()>
where
    F: Fn(usize, &T) -> String,
{
    if rows.is_empty() {
        writeln!(out, "  (sin resultados)")?;
        return Ok(());
    }
    for (i, row) in rows.iter().enumerate() {
        writeln!(out, "{}", line(i + 1, row))?;
    }
    Ok(())
}

/// Dispatch one choice against the report source. Returns `false` once the
/// loop should terminate. Report failures are printed and absorbed here so
/// the menu stays usable.
fn dispatch<S: ReportSource, W: Write>(
    choice: MenuChoice,
    source: &mut S,
    out: &mut W,
) -> Result<bool> {
    match choice {
        MenuChoice::ListTables => {
            writeln!(out, "\nListando tablas...")?;
            match source.list_tables() {
                Ok(rows) => print_rows(out, &rows, format_table)?,
                Err(e) => report_failed(out, &e)?,
            }
        }
        MenuChoice::TopSpenders => {
            writeln!(out, "\nTop 5 clientes con mayor gasto...")?;
            match source.top_spenders() {
                Ok(rows) => print_ranked(out, &rows, format_top_spender)?,
                Err(e) => report_failed(out, &e)?,
            }
        }
        MenuChoice::CategoryHierarchy => {
            writeln!(out, "\nJerarquía de categorías...")?;
            match source.category_hierarchy() {
                Ok(rows) => print_rows(out, &rows, format_category)?,
                Err(e) => report_failed(out, &e)?,
            }
        }
        MenuChoice::BestSellers => {
            writeln!(out, "\nProductos más vendidos del último año...")?;
            match source.best_sellers() {
                Ok(rows) => print_ranked(out, &rows, format_best_seller)?,
                Err(e) => report_failed(out, &e)?,
            }
        }
        MenuChoice::GmailHighSpenders => {
            writeln!(out, "\nClientes Gmail con gasto > $1000...")?;
            match source.gmail_high_spenders() {
                Ok(rows) => print_rows(out, &rows, format_gmail_customer)?,
                Err(e) => report_failed(out, &e)?,
            }
        }
        MenuChoice::StockReport => {
            writeln!(out, "\nStock de productos...")?;
            match source.stock_report() {
                Ok(rows) => print_rows(out, &rows, format_stock)?,
                Err(e) => report_failed(out, &e)?,
            }
        }
        MenuChoice::Quit => {
            writeln!(out, "\nCerrando conexión y saliendo...")?;
            return Ok(false);
        }
    }
    Ok(true)
}

fn report_failed<W: Write>(out: &mut W, e: &crate::error::Error) -> std::io::Result<()> {
    error!("Report failed: {e}");
    writeln!(out, "  Error al ejecutar la consulta: {e}")
}

/// Run the menu loop until the exit option or EOF on the input. The session
/// itself is closed by the caller once this returns.
pub fn run_menu<S, R, W>(source: &mut S, input: R, mut out: W) -> Result<()>
where
    S: ReportSource,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        print_menu(&mut out)?;

        let Some(line) = lines.next() else {
            // EOF: treat like the exit option
            writeln!(out, "\nCerrando conexión y saliendo...")?;
            return Ok(());
        };
        let line = line?;

        match MenuChoice::parse(&line) {
            Some(choice) => {
                if !dispatch(choice, source, &mut out)? {
                    return Ok(());
                }
            }
            None => {
                writeln!(out, "Opción inválida, por favor intente nuevamente.")?;
            }
        }
    }
}
