//! PDF to Markdown conversion via an external interpreter script.
//!
//! The conversion itself lives in a script; this wrapper owns the process
//! lifecycle: spawn, bounded wait, output relay, and cleanup of partial
//! results. Script output is relayed to the log for diagnostics and is never
//! parsed as a contract.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{info, warn};

use crate::error::{RowmapError, RowmapResult};

/// How long a conversion may run before the child is killed
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Lines of stderr kept for the error message when a conversion fails
const STDERR_TAIL_LINES: usize = 8;

/// Runs `interpreter script input output` with a bounded wait.
pub struct PdfConverter {
    interpreter: String,
    script: PathBuf,
    timeout: Duration,
}

impl PdfConverter {
    /// Converter using `python3` and [`DEFAULT_TIMEOUT`]
    pub fn new<P: AsRef<Path>>(script: P) -> Self {
        Self {
            interpreter: "python3".to_string(),
            script: script.as_ref().to_path_buf(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the interpreter binary
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Override the kill deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Convert `input` (a PDF) into `output` (a Markdown file).
    ///
    /// Any failure (spawn error, non-zero exit, deadline hit) removes a
    /// partially written output file before the error returns, so callers
    /// never see a half-converted document.
    pub async fn convert(&self, input: &Path, output: &Path) -> RowmapResult<()> {
        let mut child = Command::new(&self.interpreter)
            .arg(&self.script)
            .arg(input)
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                RowmapError::Convert(format!(
                    "Failed to spawn {} {}: {}",
                    self.interpreter,
                    self.script.display(),
                    e
                ))
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let stdout_task = tokio::spawn(async move {
            if let Some(stdout) = stdout {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    info!(target: "rowmap::convert", "{}", line);
                }
            }
        });

        let stderr_task = tokio::spawn(async move {
            let mut tail: Vec<String> = Vec::new();
            if let Some(stderr) = stderr {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    warn!(target: "rowmap::convert", "{}", line);
                    if tail.len() == STDERR_TAIL_LINES {
                        tail.remove(0);
                    }
                    tail.push(line);
                }
            }
            tail
        });

        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                discard_partial(output);
                return Err(RowmapError::Convert(format!(
                    "Failed to wait on converter: {}",
                    e
                )));
            }
            Err(_) => {
                // deadline hit: the child must not outlive the request
                let _ = child.kill().await;
                discard_partial(output);
                return Err(RowmapError::Convert(format!(
                    "Conversion timed out after {:?}",
                    self.timeout
                )));
            }
        };

        let _ = stdout_task.await;
        let tail = stderr_task.await.unwrap_or_default();

        if !status.success() {
            discard_partial(output);
            let detail = if tail.is_empty() {
                String::new()
            } else {
                format!(": {}", tail.join(" | "))
            };
            return Err(RowmapError::Convert(format!(
                "Converter exited with {}{}",
                status, detail
            )));
        }

        Ok(())
    }
}

/// A failed conversion must not leave a half-written output behind
fn discard_partial(output: &Path) {
    let _ = std::fs::remove_file(output);
}
