/// Output formatting: stdout summaries, stderr errors, debug diagnostics.
use std::io::Write;
use std::path::Path;

use crate::params::{DuplicateKey, ParamsError};

/// Output context passed to all commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    /// When true, print step timing and notes to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print a `[debug]` line to stderr when `--debug` is set.
    pub fn note(&self, message: &str) {
        if self.debug {
            eprintln!("[debug] {message}");
        }
    }

    /// Report keys that were overwritten while building the mapping.
    pub fn note_duplicates(&self, duplicates: &[DuplicateKey<'_>]) {
        for dup in duplicates {
            self.note(&format!(
                "duplicate ParameterKey '{}' ({} occurrences); last value wins",
                dup.key, dup.occurrences
            ));
        }
    }
}

// --- Command summaries ---

/// Write the `convert-params` confirmation and the mapping itself to stdout.
///
/// # Errors
///
/// Returns `ParamsError::WriteStdout` if stdout is closed or full.
pub fn write_convert_summary(output: &Path, json: &str) -> Result<(), ParamsError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_convert_summary(&mut out, output, json)
        .and_then(|()| out.flush())
        .map_err(|source| ParamsError::WriteStdout { source })
}

fn render_convert_summary(out: &mut impl Write, output: &Path, json: &str) -> std::io::Result<()> {
    writeln!(out, "Converted parameters saved to {}", output.display())?;
    writeln!(
        out,
        "Use this content directly in the ParameterOverrides field in CodePipeline"
    )?;
    writeln!(out)?;
    writeln!(out, "JSON string for direct use in ParameterOverrides:")?;
    writeln!(out, "{json}")
}

/// Write the `create-template-config` confirmation to stdout.
///
/// # Errors
///
/// Returns `ParamsError::WriteStdout` if stdout is closed or full.
pub fn write_template_summary(output: &Path) -> Result<(), ParamsError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_template_summary(&mut out, output)
        .and_then(|()| out.flush())
        .map_err(|source| ParamsError::WriteStdout { source })
}

fn render_template_summary(out: &mut impl Write, output: &Path) -> std::io::Result<()> {
    writeln!(out, "Template configuration saved to {}", output.display())?;
    writeln!(
        out,
        "Use this file with CodePipeline's TemplateConfiguration parameter"
    )
}

// --- Error output ---

/// Write an error to stderr.
pub fn write_error(err: &ParamsError) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_summary_text() {
        let mut buf = Vec::new();
        render_convert_summary(&mut buf, Path::new("out/params.json"), r#"{"Env":"prod"}"#)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Converted parameters saved to out/params.json\n\
             Use this content directly in the ParameterOverrides field in CodePipeline\n\
             \n\
             JSON string for direct use in ParameterOverrides:\n\
             {\"Env\":\"prod\"}\n"
        );
    }

    #[test]
    fn test_template_summary_text() {
        let mut buf = Vec::new();
        render_template_summary(&mut buf, Path::new("cfg.json")).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Template configuration saved to cfg.json\n\
             Use this file with CodePipeline's TemplateConfiguration parameter\n"
        );
    }

    struct FullWriter;

    impl Write for FullWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::StorageFull, "no space"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_summary_reports_write_failure() {
        assert!(render_convert_summary(&mut FullWriter, Path::new("o.json"), "{}").is_err());
        assert!(render_template_summary(&mut FullWriter, Path::new("o.json")).is_err());
    }
}
