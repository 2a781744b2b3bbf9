//! Best-effort copy to clipboard with a terminal fallback and a manual escape hatch.
//! Failures are reported as a `CopyResult`, never as an error.

use crate::error::{OutcomesError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::{IsTerminal, Write};
use std::process::{Command, Stdio};

pub const MANUAL_REASON: &str = "permissions policy blocked or insecure context";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    DirectClipboard,
    LegacySelectionCopy,
    Manual,
}

impl CopyMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyMethod::DirectClipboard => "direct-clipboard",
            CopyMethod::LegacySelectionCopy => "legacy-selection-copy",
            CopyMethod::Manual => "manual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub ok: bool,
    pub method: CopyMethod,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CopyOptions {
    /// Skip the direct clipboard and go straight to the fallback.
    pub force_fallback: bool,
}

pub trait ClipboardStrategy {
    fn write(&self, text: &str) -> Result<()>;
}

/// Native clipboard through the platform's copy utility.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: Vec<(&'static str, Vec<&'static str>)>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        let mut candidates: Vec<(&'static str, Vec<&'static str>)> = Vec::new();
        if cfg!(target_os = "macos") {
            candidates.push(("pbcopy", vec![]));
        } else if cfg!(target_os = "windows") {
            candidates.push(("clip.exe", vec![]));
        } else {
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                candidates.push(("wl-copy", vec![]));
            }
            if std::env::var_os("DISPLAY").is_some() {
                candidates.push(("xclip", vec!["-selection", "clipboard"]));
                candidates.push(("xsel", vec!["--clipboard", "--input"]));
            }
        }
        Self { candidates }
    }
}

impl SystemClipboard {
    fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| OutcomesError::Clipboard {
                message: format!("{}: {}", program, e),
            })?;
        // stdin is closed at the end of the arm so the child sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        // Reap the child even when the write failed.
        let status = child.wait().map_err(|e| OutcomesError::Clipboard {
            message: format!("{}: {}", program, e),
        })?;
        written.map_err(|e| OutcomesError::Clipboard {
            message: format!("{}: {}", program, e),
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(OutcomesError::Clipboard {
                message: format!("{} exited with {}", program, status),
            })
        }
    }
}

impl ClipboardStrategy for SystemClipboard {
    fn write(&self, text: &str) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(OutcomesError::Clipboard {
                message: "no clipboard utility available".into(),
            });
        }
        let mut last = None;
        for (program, args) in &self.candidates {
            match Self::pipe_to(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!("Clipboard via {} failed: {}", program, e);
                    last = Some(e);
                }
            }
        }
        Err(last.unwrap_or(OutcomesError::Clipboard {
            message: "clipboard unavailable".into(),
        }))
    }
}

/// Terminal selection copy through the OSC 52 escape sequence.
#[derive(Debug, Clone, Default)]
pub struct TerminalSelection;

impl ClipboardStrategy for TerminalSelection {
    fn write(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(OutcomesError::Clipboard {
                message: "stdout is not a terminal".into(),
            });
        }
        write!(stdout, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        stdout.flush()?;
        Ok(())
    }
}

pub struct Clipboard {
    direct: Box<dyn ClipboardStrategy>,
    fallback: Box<dyn ClipboardStrategy>,
}

impl Clipboard {
    pub fn new(direct: Box<dyn ClipboardStrategy>, fallback: Box<dyn ClipboardStrategy>) -> Self {
        Self { direct, fallback }
    }

    pub fn system() -> Self {
        Self::new(
            Box::new(SystemClipboard::default()),
            Box::new(TerminalSelection),
        )
    }

    /// Try the direct clipboard, then the terminal fallback. First success wins.
    pub fn copy_text(&self, text: &str, opts: CopyOptions) -> CopyResult {
        if !opts.force_fallback {
            match self.direct.write(text) {
                Ok(()) => {
                    return CopyResult {
                        ok: true,
                        method: CopyMethod::DirectClipboard,
                        reason: None,
                    };
                }
                Err(e) => tracing::debug!("Direct clipboard failed: {}", e),
            }
        }
        match self.fallback.write(text) {
            Ok(()) => CopyResult {
                ok: true,
                method: CopyMethod::LegacySelectionCopy,
                reason: None,
            },
            Err(e) => {
                tracing::warn!("Clipboard fallback failed, manual copy needed: {}", e);
                CopyResult {
                    ok: false,
                    method: CopyMethod::Manual,
                    reason: Some(MANUAL_REASON.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[cfg(unix)]
    #[test]
    fn pipe_reports_write_failure_after_child_exits() {
        // `true` never reads stdin, so a large payload hits a closed pipe.
        let big = "x".repeat(1 << 20);
        let err = SystemClipboard::pipe_to("true", &[], &big).unwrap_err();
        assert!(err.to_string().contains("true:"));
    }

    #[cfg(unix)]
    #[test]
    fn pipe_succeeds_when_child_reads_everything() {
        assert!(SystemClipboard::pipe_to("cat", &[], "hola").is_ok());
    }

    struct Fake {
        succeed: bool,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl ClipboardStrategy for Fake {
        fn write(&self, text: &str) -> Result<()> {
            self.calls.borrow_mut().push(text.to_string());
            if self.succeed {
                Ok(())
            } else {
                Err(OutcomesError::Clipboard {
                    message: "denied".into(),
                })
            }
        }
    }

    type Calls = Rc<RefCell<Vec<String>>>;

    fn clipboard(direct: bool, fallback: bool) -> (Clipboard, Calls, Calls) {
        let d = Rc::new(RefCell::new(Vec::new()));
        let f = Rc::new(RefCell::new(Vec::new()));
        let cb = Clipboard::new(
            Box::new(Fake {
                succeed: direct,
                calls: d.clone(),
            }),
            Box::new(Fake {
                succeed: fallback,
                calls: f.clone(),
            }),
        );
        (cb, d, f)
    }

    #[test]
    fn direct_success_skips_fallback() {
        let (cb, d, f) = clipboard(true, true);
        let res = cb.copy_text("hola", CopyOptions::default());
        assert!(res.ok);
        assert_eq!(res.method, CopyMethod::DirectClipboard);
        assert_eq!(d.borrow().len(), 1);
        assert!(f.borrow().is_empty());
    }

    #[test]
    fn direct_failure_uses_fallback() {
        let (cb, _, f) = clipboard(false, true);
        let res = cb.copy_text("hola", CopyOptions::default());
        assert_eq!(res.method, CopyMethod::LegacySelectionCopy);
        assert_eq!(*f.borrow(), vec!["hola".to_string()]);
    }

    #[test]
    fn force_fallback_never_touches_direct() {
        let (cb, d, _) = clipboard(true, true);
        let res = cb.copy_text("x", CopyOptions { force_fallback: true });
        assert_eq!(res.method, CopyMethod::LegacySelectionCopy);
        assert!(d.borrow().is_empty());
    }

    #[test]
    fn both_failing_reports_manual() {
        let (cb, _, _) = clipboard(false, false);
        let res = cb.copy_text("x", CopyOptions::default());
        assert!(!res.ok);
        assert_eq!(res.method, CopyMethod::Manual);
        assert_eq!(res.reason.as_deref(), Some(MANUAL_REASON));
    }
}
