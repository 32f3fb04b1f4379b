//! List command implementation.
//!
//! Enumerates processes in the selected privilege mode and prints them.

use serde::Serialize;
use tracing::info;

use crate::cli::{ModeArg, OutputFormat};
use crate::config::Config;
use process_finder::service::ProcfsProcessService;
use process_finder::{ProcessEnumerator, ProcessRecord};

/// One output row.
#[derive(Debug, Serialize)]
struct ListedProcess<'a> {
    display_name: String,
    #[serde(flatten)]
    record: &'a ProcessRecord,
}

/// Renders records in the requested format.
fn render(records: &[ProcessRecord], format: OutputFormat) -> anyhow::Result<String> {
    let rows: Vec<ListedProcess<'_>> = records
        .iter()
        .map(|record| ListedProcess {
            display_name: record.display_name(),
            record,
        })
        .collect();

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Yaml => serde_yaml::to_string(&rows)?,
        OutputFormat::Table => {
            let width = rows
                .iter()
                .map(|r| r.display_name.chars().count())
                .max()
                .unwrap_or(0)
                .max("NAME".len());
            let mut out = format!("{:<width$}  PROCESS\n", "NAME", width = width);
            for row in &rows {
                out.push_str(&format!(
                    "{:<width$}  {}\n",
                    row.display_name,
                    row.record.process_name(),
                    width = width
                ));
            }
            out
        }
    };
    Ok(output)
}

/// Lists running processes.
pub fn command_list(
    mode: Option<ModeArg>,
    format: OutputFormat,
    config: &Config,
) -> anyhow::Result<()> {
    let mode = config.effective_mode(mode);
    let procfs = config.procfs();
    let enumerator = ProcessEnumerator::new(
        procfs.clone(),
        ProcfsProcessService::new(procfs),
        config.build_resolver()?,
        config.own_identifier(),
    );

    let records = enumerator.enumerate(mode);
    info!("Listed {} processes in {} mode", records.len(), mode);

    print!("{}", render(&records, format)?);
    Ok(())
}
