use anyhow::Result;
use tracing::{error, info};

use webhist::{cli, logging, pipeline};

fn main() -> Result<()> {
    logging::init_logging();

    let opts = cli::parse();
    info!(
        "starting export input={} output={}",
        opts.input.display(),
        opts.output.display()
    );

    match pipeline::run(&opts) {
        Ok(outcome) => {
            if outcome.records_exported == 0 {
                info!("no history or download data found");
            } else {
                info!(
                    "export complete: {} ({} records)",
                    outcome.output_path.display(),
                    outcome.records_exported
                );
            }
        }
        Err(err) if err.is_reportable() => error!("{err}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
