// conform/src/commands/check.rs
//
// USE CASE: audit row files against the specification.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::Table;

use conform_core::application::{AuditSummary, run_audit};
use conform_core::domain::UNKNOWN_ENTITY;
use conform_core::infrastructure::config::{AuditConfig, load_audit_config};
use conform_core::infrastructure::ingest::{DataDiscovery, JsonlRowSource};
use conform_core::ports::RowSource;

pub fn execute(
    spec: PathBuf,
    data: Vec<PathBuf>,
    data_dir: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the specification (Infra)
    println!("⚙️  Loading specification...");
    let config = load_audit_config(&spec)
        .with_context(|| format!("Failed to load specification from {:?}", spec))?;
    println!(
        "   Audit: {} ({} column checks)",
        config.name,
        config.specification.len()
    );

    // B. Assemble the row sources (explicit files + discovered directory)
    let mut sources: Vec<Box<dyn RowSource>> = data
        .iter()
        .map(|p| Box::new(JsonlRowSource::new(p)) as Box<dyn RowSource>)
        .collect();
    if let Some(dir) = &data_dir {
        for source in DataDiscovery::discover(dir)
            .with_context(|| format!("Failed to discover data files in {:?}", dir))?
        {
            sources.push(Box::new(source));
        }
    }
    if sources.is_empty() {
        anyhow::bail!("No data to audit. Pass --data <file> or --data-dir <dir>.");
    }

    // C. Run the audit (Application Layer)
    let summary = run_audit(&sources, &config)?;

    // D. Render
    match format.as_str() {
        "json" => {
            let payload = serde_json::to_string_pretty(&summary)?;
            match &output {
                Some(path) => {
                    std::fs::write(path, payload)
                        .with_context(|| format!("Failed to write report to {:?}", path))?;
                    println!("📝 Report written to {}", path.display());
                }
                None => println!("{}", payload),
            }
        }
        "table" => render_tables(&summary, &config),
        other => anyhow::bail!("Unknown format '{}'. Expected 'table' or 'json'.", other),
    }

    if summary.is_clean() {
        println!(
            "\n✨ All {} rows within specification ({:.2?})",
            summary.rows_evaluated,
            start.elapsed()
        );
        Ok(())
    } else {
        eprintln!(
            "\n❌ {} rows out of specification.",
            summary.report.flagged.len()
        );
        // Exit with error code for CI/CD
        std::process::exit(1);
    }
}

fn render_tables(summary: &AuditSummary, config: &AuditConfig) {
    println!(
        "\n📋 Audit '{}' — {} rows from {} source(s)",
        summary.name,
        summary.rows_evaluated,
        summary.sources.len()
    );

    if summary.is_clean() {
        return;
    }
    let report = &summary.report;

    let mut by_column = Table::new();
    by_column.set_header(vec!["Parameter", "Violations"]);
    for (column, count) in &report.counts_by_column {
        by_column.add_row(vec![column.clone(), count.to_string()]);
    }
    println!("\n📊 Violations by parameter:\n{by_column}");

    let mut by_entity = Table::new();
    by_entity.set_header(vec!["Entity", "Violations"]);
    for (entity, count) in &report.counts_by_entity {
        by_entity.add_row(vec![entity.clone(), count.to_string()]);
    }
    println!("\n🏷️  Violations by entity:\n{by_entity}");

    let mut flagged = Table::new();
    let mut header = vec![
        config
            .entity_key
            .clone()
            .unwrap_or_else(|| "Entity".to_string()),
    ];
    header.extend(config.carry.iter().cloned());
    header.push("Out of spec".to_string());
    flagged.set_header(header);

    for flag in &report.flagged {
        let mut cells = Vec::with_capacity(config.carry.len() + 2);

        let entity = config
            .entity_key
            .as_deref()
            .and_then(|c| flag.row.get(c))
            .map(|v| v.to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_ENTITY.to_string());
        cells.push(entity);

        for carry in &config.carry {
            cells.push(
                flag.row
                    .get(carry)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            );
        }

        let details = flag
            .violations
            .iter()
            .map(|column| match flag.row.numeric(column) {
                Some(value) => format!("{column}={value}"),
                None => column.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        cells.push(details);

        flagged.add_row(cells);
    }
    println!("\n🚩 Flagged rows:\n{flagged}");
}
