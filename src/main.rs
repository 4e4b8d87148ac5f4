//! selfcert - Entry Point

use clap::Parser;
use selfcert::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ResolvedConfig,
};
use selfcert::export::{export_table, DirectorySink};
use selfcert::model::{AppError, ExportError, RecordId};
use selfcert::notify::TracingNotifier;
use selfcert::source::{JsonFileSource, RecordSource};
use selfcert::state::{AppState, PageSize, RecordTable, SearchScopeSetting, SortDirection, SortSpec};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Browse, search and export self-certification records
#[derive(Parser, Debug)]
#[command(name = "selfcert")]
#[command(version)]
#[command(about = "Browse, search and export self-certification records")]
pub struct Args {
    /// JSON file holding an array of certification records
    pub file: PathBuf,

    /// Initial search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Field to sort by (e.g. Country__c, Certification_Date__c)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Rows per page: a positive number or "all"
    #[arg(long)]
    pub page_size: Option<PageSize>,

    /// Page to open (1-based, clamped to the last page)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Record ids to select, comma separated
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// Write the CSV export into this directory and exit without the TUI
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Search only country, certifier and status
    #[arg(long)]
    pub restricted_search: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Apply the startup view options to a loaded table.
    ///
    /// Order matters: search and page size both return to page 1, so the
    /// page jump comes last.
    fn apply_to(&self, table: &mut RecordTable) {
        if let Some(term) = &self.search {
            table.set_search(term);
        }
        if let Some(field) = &self.sort {
            let direction = if self.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            table.sort_by(SortSpec::new(field.as_str(), direction));
        }
        table.go_to_page(self.page as usize);

        let ids = self.select.iter().filter_map(|raw| match RecordId::new(raw.as_str()) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "Skipping --select value");
                None
            }
        });
        table.set_selection(ids);
    }
}

fn resolve_config(args: &Args) -> Result<ResolvedConfig, ConfigError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);
    let scope_override = args.restricted_search.then_some(SearchScopeSetting::Restricted);

    Ok(apply_cli_overrides(
        with_env,
        args.page_size,
        scope_override,
        args.log_file.clone(),
    ))
}

fn main() -> ExitCode {
    let args = Args::parse();
    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> Result<(), AppError> {
    let config = resolve_config(args)?;

    selfcert::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let mut source = JsonFileSource::new(&args.file);
    let mut table = RecordTable::new(config.table_options());

    if let Some(dir) = &args.export {
        // Headless: a failed fetch is fatal
        table.load(source.fetch()?);
        args.apply_to(&mut table);

        let mut sink = DirectorySink::new(dir);
        let report = export_table(
            &mut table,
            &config.export_options(),
            &mut sink,
            &mut TracingNotifier,
        )?
        .ok_or(ExportError::NothingToExport)?;

        println!(
            "Exported {} records to {}",
            report.rows,
            sink.path_for(&report.file_name).display()
        );
        return Ok(());
    }

    // Interactive: a failed fetch is shown in the table
    table.refresh(&mut source);
    args.apply_to(&mut table);

    let export_dir = std::env::current_dir()?;
    let state = AppState::new(table, config.export_options());
    selfcert::view::run(
        state,
        Box::new(source),
        Box::new(DirectorySink::new(export_dir)),
    )?;

    Ok(())
}
