use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool available (tried {0})")]
    Unavailable(String),

    #[error("Failed to write to {program}: {source}")]
    Write {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("{0} exited with error")]
    Failed(&'static str),
}

type Tool = (&'static str, &'static [&'static str]);

const MACOS_TOOLS: &[Tool] = &[("pbcopy", &[])];
const WINDOWS_TOOLS: &[Tool] = &[("clip", &[])];
const UNIX_TOOLS: &[Tool] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Clipboard commands tried in order for the current platform.
fn candidates() -> &'static [Tool] {
    if cfg!(target_os = "macos") {
        MACOS_TOOLS
    } else if cfg!(target_os = "windows") {
        WINDOWS_TOOLS
    } else {
        UNIX_TOOLS
    }
}

/// Copies text to the system clipboard through the platform's clipboard tool.
/// - macOS: pbcopy
/// - Linux: wl-copy, then xclip, then xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let tools = candidates();

    for &(program, args) in tools {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match child {
            Ok(child) => child,
            Err(e) => {
                log::debug!("Clipboard tool {} not usable: {}", program, e);
                continue;
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|source| ClipboardError::Write { program, source })?;
        }

        let status = child
            .wait()
            .map_err(|source| ClipboardError::Write { program, source })?;

        return if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Failed(program))
        };
    }

    let tried: Vec<&str> = tools.iter().map(|(program, _)| *program).collect();
    Err(ClipboardError::Unavailable(tried.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_not_empty() {
        assert!(!candidates().is_empty());
    }

    #[test]
    fn test_unavailable_message_lists_tools() {
        let err = ClipboardError::Unavailable("xclip, xsel".to_string());
        assert_eq!(err.to_string(), "No clipboard tool available (tried xclip, xsel)");
    }
}
