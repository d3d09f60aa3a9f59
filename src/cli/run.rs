use crate::config::Config;
use crate::db::Session;
use crate::error::Result;
use crate::menu;
use log::info;
use std::time::Instant;

/// Run the interactive reporting session: one connection, the menu loop,
/// then an explicit close.
pub fn handle_run(cfg: &Config) -> Result<()> {
    let total_start = Instant::now();

    info!("Starting TiendaTech reporting session");

    // Connection failure aborts before the menu ever starts.
    let mut session = match Session::connect(&cfg.database) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("No se pudo establecer la conexión. Programa terminado.");
            return Err(e);
        }
    };

    eprintln!("Conexión establecida correctamente");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run_menu(&mut session, stdin.lock(), stdout.lock())?;

    session.close();

    let total_elapsed = total_start.elapsed().as_secs_f64();

    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("✓ TiendaTech Reporting Session Finished");
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("  Database:  {}:{}/{}", cfg.database.host, cfg.database.port, cfg.database.database);
    eprintln!("  Elapsed:   {total_elapsed:.3} seconds");
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    info!("✓ Reporting session finished");

    Ok(())
}
