//! `vaultmask roundtrip -- <command>`: redact, pipe through an external
//! program, restore its output. The session lives only in this process.

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

use vaultmask_core::RedactionPipeline;

use crate::commands::refuse;
use crate::ui::theme::ThemeMap;
use crate::utils::input::write_text;

pub fn run_roundtrip(
    pipeline: &mut RedactionPipeline,
    input: &str,
    command: &[String],
    theme: &ThemeMap,
) -> Result<()> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| anyhow!("No external command given after `--`."))?;

    let redacted = pipeline.try_redact(input).map_err(|e| refuse(e, theme))?;
    info!("Piping {} redacted bytes through '{}'.", redacted.len(), program);

    let reply = run_external(program, args, redacted)?;
    debug!("External command returned {} bytes.", reply.len());

    let restored = pipeline.try_restore(&reply).map_err(|e| refuse(e, theme))?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_text(&mut writer, &restored)?;
    writer.flush()?;
    info!("Roundtrip completed.");
    Ok(())
}

/// Feeds `stdin_text` to the program on a separate thread so a chatty child
/// cannot deadlock on a full stdout pipe.
fn run_external(program: &str, args: &[String], stdin_text: String) -> Result<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .with_context(|| format!("Failed to start external command '{}'", program))?;

    let mut stdin = child
        .stdin
        .take()
        .context("Failed to open stdin of external command")?;
    let writer = thread::spawn(move || stdin.write_all(stdin_text.as_bytes()));

    let output = child
        .wait_with_output()
        .with_context(|| format!("Failed to wait for external command '{}'", program))?;

    match writer.join() {
        Ok(Ok(())) => {}
        // The child may exit without reading all of its input.
        Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => debug!("External command closed stdin early."),
        Ok(Err(e)) => return Err(e).context("Failed to write to external command"),
        Err(_) => bail!("Writer thread for external command panicked"),
    }

    if !output.status.success() {
        bail!("External command '{}' exited with {}", program, output.status);
    }
    String::from_utf8(output.stdout).context("External command produced non-UTF-8 output")
}
