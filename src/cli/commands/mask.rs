//! Mask command implementation

use super::{build_engine, InputArgs};
use crate::config::LeakscanConfig;
use crate::log_scan_complete;
use clap::Args;
use std::time::Instant;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl MaskArgs {
    /// Replace every word matched by any rule with `<MASKED>`
    pub fn execute(&self, config: &LeakscanConfig) -> anyhow::Result<i32> {
        let engine = build_engine(config)?;
        let text = self.input.read()?;

        let start = Instant::now();
        let masked = engine.mask_findings(&text);
        log_scan_complete!("mask", usize::from(masked != text), start.elapsed());

        print!("{masked}");
        Ok(0)
    }
}
