//! Error types for the event system.
use std::error::Error as StdError;
use std::fmt;

/// Error returned by an [`EventHandler`](crate::EventHandler) and propagated
/// unchanged by [`EventDispatcher::notify`](crate::EventDispatcher::notify).
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: EventErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum EventErrorKind {
    // A handler failed to carry out its side effect
    Handler(String),
}

impl Error {
    pub fn handler(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: EventErrorKind::Handler(message.into()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            EventErrorKind::Handler(message) => write!(f, "Event handler failed: {message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
