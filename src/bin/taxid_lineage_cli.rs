use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;

use taxid_lineage::{expand_taxonomy, LineageConfig};

fn spinner(color: &str, msg: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template(&format!("{{spinner:.{color}}} {{msg}}"))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(msg);
    spinner
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Paths are fixed: ./table.tsv in, ./taxonomy.tsv out, ./taxonomy/*.dmp
    let config = LineageConfig::default();

    // 1. Load, merge and resolve
    let spinner_resolve = spinner("green", "Resolving lineages...");
    let report = match expand_taxonomy(&config) {
        Ok(report) => report,
        Err(e) => {
            spinner_resolve.abandon_with_message("Lineage resolution failed.");
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    spinner_resolve.finish_with_message(format!(
        "Resolved {} taxid(s), {} merged.",
        report.row_count(),
        report.merges_applied
    ));

    // 2. Write the table
    let spinner_write = spinner("yellow", "Writing taxonomy table...");
    if let Err(e) = report.write_table(&config.output_path) {
        spinner_write.abandon_with_message("Could not write taxonomy table.");
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    spinner_write.finish_with_message(format!(
        "Taxonomy table written to {}.",
        config.output_path.display()
    ));

    ExitCode::SUCCESS
}
