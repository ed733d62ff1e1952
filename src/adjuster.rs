use std::path::Path;

use log::info;

use crate::config::PadConfig;
use crate::error::Result;
use crate::icon_io::{load_icon, save_icon};
use crate::pad::{pad_image, PadOutcome};

/// Re-pads the icon at `input` and writes the result to `output` as PNG.
///
/// `output` is only touched once the padded icon has been fully encoded, so
/// on error it is left exactly as it was. `input` and `output` may be the
/// same file.
pub fn adjust<P, Q>(input: P, output: Q, config: &PadConfig) -> Result<PadOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let img = load_icon(input)?;
    info!(
        "Loaded {} ({}x{})",
        input.display(),
        img.width(),
        img.height()
    );

    let (padded, outcome) = pad_image(&img, config)?;
    save_icon(&padded, output)?;
    info!("Wrote {}", output.display());

    Ok(outcome)
}
