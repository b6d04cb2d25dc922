//! External syntax check run before structural parsing
//!
//! The check is an external collaborator (typically a toolchain invocation)
//! and may hang. With a timeout configured it runs on a helper thread and
//! the caller waits on a channel for at most that long.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::error::{ContentError, Severity};

/// Outcome of an external syntax check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Success,
    Error { title: String, detail: String },
    Abort { title: String, detail: String },
}

pub trait SyntaxValidator: Send + Sync {
    fn validate_syntax(&self, text: &str) -> Validation;
}

/// Accepts everything; used when no toolchain is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl SyntaxValidator for AcceptAll {
    fn validate_syntax(&self, _text: &str) -> Validation {
        Validation::Success
    }
}

impl<F> SyntaxValidator for F
where
    F: Fn(&str) -> Validation + Send + Sync,
{
    fn validate_syntax(&self, text: &str) -> Validation {
        self(text)
    }
}

/// Run `validator` on `text`, bounded by `timeout` when given
pub(crate) fn run_precheck(
    validator: &Arc<dyn SyntaxValidator>,
    text: &str,
    timeout: Option<Duration>,
) -> Result<(), ContentError> {
    let outcome = match timeout {
        None => validator.validate_syntax(text),
        Some(limit) => run_bounded(validator, text, limit)?,
    };

    match outcome {
        Validation::Success => Ok(()),
        Validation::Error { title, detail } => Err(ContentError::SyntaxPrecheck {
            severity: Severity::Error,
            title,
            detail,
        }),
        Validation::Abort { title, detail } => Err(ContentError::SyntaxPrecheck {
            severity: Severity::Abort,
            title,
            detail,
        }),
    }
}

fn run_bounded(
    validator: &Arc<dyn SyntaxValidator>,
    text: &str,
    limit: Duration,
) -> Result<Validation, ContentError> {
    let (tx, rx) = mpsc::channel();
    let worker = Arc::clone(validator);
    let owned = text.to_owned();

    let spawned = thread::Builder::new()
        .name("syntax-precheck".into())
        .spawn(move || {
            // The receiver is gone if we already timed out
            let _ = tx.send(worker.validate_syntax(&owned));
        });
    if let Err(err) = spawned {
        debug!("cannot spawn syntax check thread ({}), running inline", err);
        return Ok(validator.validate_syntax(text));
    }

    match rx.recv_timeout(limit) {
        Ok(outcome) => Ok(outcome),
        Err(RecvTimeoutError::Timeout) => {
            warn!(?limit, "syntax check timed out");
            Err(ContentError::PrecheckTimeout(limit))
        }
        Err(RecvTimeoutError::Disconnected) => Ok(Validation::Error {
            title: "Syntax check failed".to_string(),
            detail: "the syntax checker stopped without reporting a result".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(v: impl SyntaxValidator + 'static) -> Arc<dyn SyntaxValidator> {
        Arc::new(v)
    }

    #[test]
    fn test_accept_all() {
        assert_eq!(run_precheck(&boxed(AcceptAll), "x", None), Ok(()));
    }

    #[test]
    fn test_error_and_abort_keep_title_and_detail() {
        let reject = boxed(|_: &str| Validation::Error {
            title: "vlog".into(),
            detail: "line 3: syntax error".into(),
        });
        let err = run_precheck(&reject, "x", Some(Duration::from_secs(5))).unwrap_err();
        assert_eq!(err.title(), "vlog");
        assert_eq!(err.message(), "line 3: syntax error");
        assert_eq!(err.severity(), Severity::Error);

        let abort = boxed(|_: &str| Validation::Abort {
            title: "vlog".into(),
            detail: "tool not found".into(),
        });
        let err = run_precheck(&abort, "x", None).unwrap_err();
        assert_eq!(err.severity(), Severity::Abort);
    }

    #[test]
    fn test_hang_becomes_timeout() {
        let slow = boxed(|_: &str| {
            thread::sleep(Duration::from_millis(500));
            Validation::Success
        });
        let err = run_precheck(&slow, "x", Some(Duration::from_millis(20))).unwrap_err();
        assert_eq!(err, ContentError::PrecheckTimeout(Duration::from_millis(20)));
    }

    #[test]
    fn test_panicking_checker_is_reported() {
        let broken = boxed(|_: &str| -> Validation { panic!("checker crashed") });
        let err = run_precheck(&broken, "x", Some(Duration::from_secs(5))).unwrap_err();
        assert!(matches!(err, ContentError::SyntaxPrecheck { severity: Severity::Error, .. }));
    }
}
