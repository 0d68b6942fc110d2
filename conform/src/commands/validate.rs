// conform/src/commands/validate.rs
//
// USE CASE: validate a specification file without touching any data.

use std::path::PathBuf;

use conform_core::infrastructure::config::load_audit_config;

pub fn execute(spec: PathBuf) -> anyhow::Result<()> {
    println!("🔎 Validating specification at {}...", spec.display());

    match load_audit_config(&spec) {
        Ok(config) => {
            println!(
                "✅ '{}' is valid: {} column checks",
                config.name,
                config.specification.len()
            );
            if let Some(key) = &config.entity_key {
                println!("   Entity key: {}", key);
            }
            Ok(())
        }
        Err(e) => {
            // Fancy diagnostic (code + help) on stderr, CI-friendly exit code
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
