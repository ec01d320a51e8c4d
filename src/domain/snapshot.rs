// Snapshot decoded from one fetch of a remote state endpoint.

use super::state::Vec3;
use std::fmt;

/// Optional-field view of one remote JSON document.
///
/// Every field is independent: `None` means the key was absent (or rejected) and the
/// matching actor state must be left untouched.
#[derive(Debug, Default)]
pub struct RemoteSnapshot {
    pub position: Option<Vec3>,
    pub panoramic_mode: Option<bool>,
    pub override_mode: Option<bool>,
    /// Index-aligned with tracked cameras; `None` entries carry no `locked` value.
    pub camera_locks: Option<Vec<Option<bool>>>,
    pub guard_calls_police: Option<bool>,
    // Informational fields, logged but never applied.
    pub detection: Option<serde_json::Value>,
    pub time_counter: Option<u64>,
    /// Field-level failures from this decode; siblings still apply.
    pub rejected: Vec<DecodeError>,
}

impl RemoteSnapshot {
    /// True when no applicable field was decoded.
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
            && self.panoramic_mode.is_none()
            && self.override_mode.is_none()
            && self.camera_locks.is_none()
            && self.guard_calls_police.is_none()
    }
}

#[derive(Debug)]
pub enum DecodeError {
    /// The document is not valid JSON.
    Malformed(serde_json::Error),
    /// The document is valid JSON but not an object.
    NotAnObject,
    /// A recognized key carried a value of the wrong shape.
    Field { field: &'static str, reason: String },
}

impl DecodeError {
    pub(crate) fn field(field: &'static str, reason: impl Into<String>) -> Self {
        DecodeError::Field {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is a field-level error.
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            DecodeError::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Malformed(err) => write!(f, "malformed snapshot document: {err}"),
            DecodeError::NotAnObject => write!(f, "snapshot document is not a JSON object"),
            DecodeError::Field { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Malformed(err) => Some(err),
            _ => None,
        }
    }
}
