// src/bin/cli.rs
use statebb_scrape::{config::options::RunOptions, log, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let summary = runner::run(&RunOptions::default())?;
    println!(
        "Wrote {} ({} states)",
        summary.file_written.display(),
        summary.rows_written
    );
    Ok(())
}
