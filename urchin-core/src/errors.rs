use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UrchinError>;

#[derive(Debug, Error)]
pub enum UrchinError {
    #[error("Fatal protocol error: {0}")]
    FatalProtocol(ProtocolError),
}

/// The request that failed, as far as the window manager cares.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    SetInputFocus,
    ConfigureWindow,
    GrabButton,
    GrabKey,
    CopyArea,
    PolyText8,
    PolyFillRectangle,
    PolySegment,
    Other(u8),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    BadWindow,
    BadMatch,
    BadAccess,
    BadDrawable,
    Other(u8),
}

/// An error the display server reported for one of our requests.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{code:?} in reply to {request:?}")]
pub struct ProtocolError {
    pub request: RequestKind,
    pub code: ErrorCode,
}

impl ProtocolError {
    /// Errors caused by racing a client that went away or changed under us. There
    /// is no way to avoid them, so they are dropped.
    #[must_use]
    pub const fn is_benign(&self) -> bool {
        use ErrorCode::{BadAccess, BadDrawable, BadMatch, BadWindow};
        use RequestKind::{
            ConfigureWindow, CopyArea, GrabButton, GrabKey, PolyFillRectangle, PolySegment,
            PolyText8, SetInputFocus,
        };
        matches!(
            (self.request, self.code),
            (_, BadWindow)
                | (SetInputFocus | ConfigureWindow, BadMatch)
                | (GrabButton | GrabKey, BadAccess)
                | (
                    CopyArea | PolyText8 | PolyFillRectangle | PolySegment,
                    BadDrawable
                )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(request: RequestKind, code: ErrorCode) -> ProtocolError {
        ProtocolError { request, code }
    }

    #[test]
    fn vanished_windows_are_always_benign() {
        assert!(error(RequestKind::Other(12), ErrorCode::BadWindow).is_benign());
        assert!(error(RequestKind::GrabKey, ErrorCode::BadWindow).is_benign());
    }

    #[test]
    fn allow_list_pairs_are_benign() {
        assert!(error(RequestKind::SetInputFocus, ErrorCode::BadMatch).is_benign());
        assert!(error(RequestKind::ConfigureWindow, ErrorCode::BadMatch).is_benign());
        assert!(error(RequestKind::GrabButton, ErrorCode::BadAccess).is_benign());
        assert!(error(RequestKind::PolySegment, ErrorCode::BadDrawable).is_benign());
    }

    #[test]
    fn everything_else_is_fatal() {
        assert!(!error(RequestKind::SetInputFocus, ErrorCode::BadAccess).is_benign());
        assert!(!error(RequestKind::GrabKey, ErrorCode::BadMatch).is_benign());
        assert!(!error(RequestKind::Other(1), ErrorCode::BadDrawable).is_benign());
        assert!(!error(RequestKind::CopyArea, ErrorCode::Other(9)).is_benign());
    }
}
