use crate::check_executor::{execute_check, ExecutionContext};
use crate::config::ServiceUrls;
use crate::plan::service_checks;
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub fn run_service_checks(output: &PathBuf, urls: &ServiceUrls) -> Result<()> {
    // The one unguarded failure path: no transcript file, no run.
    let file = File::create(output)
        .context(format!("while creating transcript file {}", output.display()))?;
    let mut out = BufWriter::new(file);

    let context = ExecutionContext::new()?;
    info!("writing transcript to {}", output.display());
    write_transcript(&mut out, urls, &context)?;
    out.flush()
        .context(format!("while flushing transcript file {}", output.display()))?;
    info!("done");
    return Ok(());
}

// Every check runs, in order, no matter what the previous ones did; a failed
// call ends up as a "problem" block instead of a capture.
pub fn write_transcript<W: Write>(
    out: &mut W,
    urls: &ServiceUrls,
    context: &ExecutionContext,
) -> Result<()> {
    for (label, url) in urls.labeled() {
        writeln!(out, "{}={}", label, url)?;
    }
    writeln!(out)?;

    for check in service_checks(urls)?.iter() {
        let header = format!("testing {}", check.title);
        writeln!(out, "{}", header)?;
        writeln!(out, "{}", "-".repeat(header.len()))?;

        match execute_check(check, context) {
            Ok(capture) => {
                writeln!(out, "url={}", capture.url)?;
                writeln!(out, "data.status_code={}", capture.status_code)?;
                out.write_all(&capture.body)?;
                writeln!(out)?;
                if check.print_text {
                    writeln!(out, "data.text={}", capture.text())?;
                }
            }
            Err(e) => {
                warn!("check {} failed: {}", check.name(), e);
                writeln!(out, "problem")?;
                writeln!(out, "{}", e)?;
            }
        }
        writeln!(out)?;
        writeln!(out)?;
    }
    return Ok(());
}
