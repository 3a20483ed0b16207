use serde_json::{json, Value};

use crate::{app_types::WindowKind, FILES_CHOSEN_EVENT, SESSION_CLOSED_EVENT};

/// Host to content signals. Content to host signals are the bridge commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellSignal {
    SessionClosed,
    FilesChosen(Vec<String>),
}

impl ShellSignal {
    pub(crate) fn event_name(&self) -> &'static str {
        match self {
            Self::SessionClosed => SESSION_CLOSED_EVENT,
            Self::FilesChosen(_) => FILES_CHOSEN_EVENT,
        }
    }

    pub(crate) fn payload(&self) -> Value {
        match self {
            Self::SessionClosed => Value::Null,
            Self::FilesChosen(paths) => json!(paths),
        }
    }
}

/// Windows that receive `files-chosen`: the requester, then the session
/// window when it is live. No window is listed twice.
pub(crate) fn files_chosen_recipients(
    requester: Option<WindowKind>,
    session_live: bool,
) -> Vec<WindowKind> {
    let mut recipients = Vec::with_capacity(2);
    if let Some(requester) = requester {
        recipients.push(requester);
    }
    if session_live && !recipients.contains(&WindowKind::Session) {
        recipients.push(WindowKind::Session);
    }
    recipients
}
