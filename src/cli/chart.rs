use crate::chart;
use crate::config::Config;
use crate::error::Result;
use log::info;

/// Render the calibration scatter chart to HTML, optionally opening it in
/// the browser.
pub fn handle_chart(cfg: &Config, output: Option<&str>, open: bool) -> Result<()> {
    let path = output.unwrap_or_else(|| cfg.chart.file());

    info!("Rendering calibration chart to {path}");
    chart::scatter_to_html(path)?;
    eprintln!("Gráfica generada: {path}");

    if open {
        info!("Opening chart in the default browser");
        chart::scatter_show();
    }

    Ok(())
}
