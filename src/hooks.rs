use log::debug;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// A rendered hook line ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookCommand {
    /// The line after rendering, quoting intact
    pub line: String,
    /// Program followed by its arguments
    pub words: Vec<String>,
}

/// Renders a hook line and splits it into program and arguments.
///
/// Quoting follows POSIX shell word rules: `notify-send "Theme changed"`
/// becomes `["notify-send", "Theme changed"]`.
pub fn parse_hook(
    engine: &dyn TemplateRenderer,
    line: &str,
    context: &serde_json::Value,
) -> Result<HookCommand> {
    let command_error = |reason: String| Error::HookCommandError {
        command: line.to_string(),
        reason,
    };

    let rendered = engine.render(line, context).map_err(|e| command_error(e.to_string()))?;
    let words = shell_words::split(&rendered).map_err(|e| command_error(e.to_string()))?;
    if words.is_empty() {
        return Err(command_error("empty command".to_string()));
    }
    Ok(HookCommand { line: rendered, words })
}

/// Runs a single hook line and waits for it to exit.
///
/// The child gets no stdin. Its output is captured and logged at debug level.
pub fn run_hook(
    engine: &dyn TemplateRenderer,
    line: &str,
    context: &serde_json::Value,
) -> Result<()> {
    let HookCommand { line: command, words } = parse_hook(engine, line, context)?;
    debug!("Running hook: {:?}", words);

    let output = Command::new(&words[0])
        .args(&words[1..])
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::HookCommandError { command: command.clone(), reason: e.to_string() })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stdout.trim().is_empty() {
        debug!("[{command}] stdout: {}", stdout.trim_end());
    }
    if !stderr.trim().is_empty() {
        debug!("[{command}] stderr: {}", stderr.trim_end());
    }

    if !output.status.success() {
        if !stderr.trim().is_empty() {
            log::error!("[{command}] {}", stderr.trim_end());
        }
        return Err(Error::HookError { command, code: output.status.code() });
    }

    Ok(())
}

/// Runs hook lines in order, stopping at the first failure.
pub fn run_hooks<S: AsRef<str>>(
    engine: &dyn TemplateRenderer,
    lines: &[S],
    context: &serde_json::Value,
) -> Result<()> {
    for line in lines {
        run_hook(engine, line.as_ref(), context)?;
    }
    Ok(())
}
