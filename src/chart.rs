//! Calibration chart
//!
//! Renders the fixed voltage/current measurement series as a plotly
//! scatter plot (markers only) and writes it as a standalone HTML page.

use crate::error::{ChartError, Error, FileError, Result};
use std::path::Path;

use plotly::common::{Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

/// Measured supply voltage, volts.
pub const VOLTAJE: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

/// Measured current at each voltage step, milliamps.
pub const CORRIENTE: [f64; 10] = [2.22, 7.07, 12.0, 17.0, 21.9, 26.9, 31.9, 36.9, 41.8, 46.8];

/// Build the scatter plot for the fixed dataset.
fn build_plot() -> Plot {
    let trace = Scatter::new(VOLTAJE.to_vec(), CORRIENTE.to_vec())
        .name("Mediciones")
        .mode(Mode::Markers)
        .marker(Marker::new().size(8));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title(Title::with_text("Curva Voltaje vs Corriente"))
            .x_axis(Axis::new().title("Voltaje (V)"))
            .y_axis(Axis::new().title("Corriente (mA)")),
    );

    plot
}

/// Render the calibration scatter to a standalone HTML file, creating the
/// parent directory if needed.
pub fn scatter_to_html<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::File(FileError::CreateDirectoryFailed {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })
        })?;
    }

    let html = build_plot().to_html();
    std::fs::write(path, html).map_err(|e| {
        Error::Chart(ChartError::RenderFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;
    Ok(())
}

/// Render the scatter and hand it to the default browser.
pub fn scatter_show() {
    build_plot().show();
}
