// SPDX-License-Identifier: MPL-2.0
//! Status line shown under the generation form.

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// A localizable status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    /// Fluent message key.
    pub key: &'static str,
    /// Named arguments for the message.
    pub args: Vec<(&'static str, String)>,
}

impl StatusLine {
    #[must_use]
    pub fn success(key: &'static str, args: Vec<(&'static str, String)>) -> Self {
        Self {
            kind: StatusKind::Success,
            key,
            args,
        }
    }

    #[must_use]
    pub fn error(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            key,
            args: vec![("message", message.into())],
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }

    /// Value of a named argument, if present.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}
