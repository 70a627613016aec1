//! System clipboard access for copying wallet addresses.
//!
//! On Linux, external tools (`wl-copy`, `xclip`, `xsel`) are tried before
//! the `arboard` crate because they keep the clipboard content alive after
//! the process exits.

use std::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone)]
pub enum ClipboardError {
    /// No clipboard backend is usable on this system.
    NotAvailable,
    /// The copy itself failed.
    CopyFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "Clipboard not available"),
            Self::CopyFailed(msg) => write!(f, "Failed to copy: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

// ============================================================================
// Clipboard Manager
// ============================================================================

/// Cross-platform clipboard wrapper.
#[derive(Debug, Default)]
pub struct ClipboardManager {
    _private: (),
}

impl ClipboardManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy text to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard backend is available or the copy
    /// fails.
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        if Self::copy_with_external_tool(text) {
            return Ok(());
        }

        let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        // Wayland first, then the X11 tools
        Self::try_tool("wl-copy", &[], text)
            || Self::try_tool("xclip", &["-selection", "clipboard"], text)
            || Self::try_tool("xsel", &["--clipboard", "--input"], text)
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

// ============================================================================
// Tests
// ============================================================================
