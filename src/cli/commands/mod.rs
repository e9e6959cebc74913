//! CLI command implementations
//!
//! Every command reads text from `--input` or stdin and writes its result
//! to stdout. Logs and reports go to stderr.

pub mod anonymize;
pub mod hits;
pub mod mask;
pub mod scan;
pub mod validate;

use crate::anonymization::audit::AuditLogger;
use crate::anonymization::ScanEngine;
use crate::config::LeakscanConfig;
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Exit code when findings were reported and `--fail-on-findings` is set
pub const EXIT_FINDINGS: i32 = 1;

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Text source shared by the scanning commands
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// File to read; stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Read the whole input as UTF-8
    pub fn read(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display())),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

/// Build the engine described by the configuration, audit logger included
pub fn build_engine(config: &LeakscanConfig) -> anyhow::Result<ScanEngine> {
    let rules = config
        .catalog
        .build_rule_set()
        .context("Invalid rule catalog")?;
    let mut engine = ScanEngine::new(rules);

    if config.audit.enabled {
        let logger = AuditLogger::new(config.audit.log_path.clone(), config.audit.json_format)
            .context("Failed to open audit log")?;
        engine = engine.with_audit_logger(logger);
    }

    Ok(engine)
}
