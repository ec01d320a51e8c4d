// Field-by-field decoding of remote state documents.
//
// Each recognized key is decoded on its own: a wrong shape rejects that field only and
// the rest of the snapshot still applies.

use crate::domain::{DecodeError, RemoteSnapshot, Vec3};
use serde_json::{Map, Value};

pub const POSITION_KEY: &str = "current_position";
pub const PANORAMIC_KEY: &str = "panoramic";
pub const OVERRIDE_KEY: &str = "drone_override";
pub const CAMERAS_KEY: &str = "cameras";
pub const CAMERA_LOCKED_KEY: &str = "locked";
pub const GUARD_KEY: &str = "guard";
pub const CALL_POLICE_KEY: &str = "callTheCops";
// Spelling used by the simulation's own guard payload.
pub const CALL_POLICE_FALLBACK_KEY: &str = "call_cops";
pub const DETECTION_KEY: &str = "detection";
pub const TIME_COUNTER_KEY: &str = "time_counter";

type Fields = Map<String, Value>;

/// Decodes one state document. Only a malformed top-level document is an error; field
/// problems are collected in [`RemoteSnapshot::rejected`].
pub fn decode(bytes: &[u8]) -> Result<RemoteSnapshot, DecodeError> {
    let document: Value = serde_json::from_slice(bytes).map_err(DecodeError::Malformed)?;
    let Value::Object(fields) = document else {
        return Err(DecodeError::NotAnObject);
    };

    let mut rejected = Vec::new();
    let snapshot = RemoteSnapshot {
        position: keep(&mut rejected, decode_position(&fields)),
        panoramic_mode: keep(&mut rejected, decode_bool(&fields, PANORAMIC_KEY)),
        override_mode: keep(&mut rejected, decode_bool(&fields, OVERRIDE_KEY)),
        camera_locks: keep(&mut rejected, decode_camera_locks(&fields)),
        guard_calls_police: keep(&mut rejected, decode_guard_calls_police(&fields)),
        detection: present(&fields, DETECTION_KEY).cloned(),
        time_counter: keep(&mut rejected, decode_time_counter(&fields)),
        rejected,
    };
    Ok(snapshot)
}

// JSON null counts as absent.
fn present<'a>(fields: &'a Fields, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

fn keep<T>(rejected: &mut Vec<DecodeError>, field: Result<Option<T>, DecodeError>) -> Option<T> {
    match field {
        Ok(value) => value,
        Err(err) => {
            rejected.push(err);
            None
        }
    }
}

fn decode_position(fields: &Fields) -> Result<Option<Vec3>, DecodeError> {
    let Some(value) = present(fields, POSITION_KEY) else {
        return Ok(None);
    };
    let items = value
        .as_array()
        .ok_or_else(|| DecodeError::field(POSITION_KEY, "expected an array of 3 numbers"))?;
    if items.len() != 3 {
        return Err(DecodeError::field(
            POSITION_KEY,
            format!("expected 3 values, got {}", items.len()),
        ));
    }

    let mut axes = [0.0_f32; 3];
    for (axis, item) in axes.iter_mut().zip(items) {
        let value = item.as_f64().ok_or_else(|| {
            DecodeError::field(POSITION_KEY, format!("`{item}` is not a number"))
        })?;
        *axis = value as f32;
    }
    Ok(Some(Vec3::new(axes[0], axes[1], axes[2])))
}

fn decode_bool(fields: &Fields, key: &'static str) -> Result<Option<bool>, DecodeError> {
    match present(fields, key) {
        None => Ok(None),
        Some(value) => value.as_bool().map(Some).ok_or_else(|| {
            DecodeError::field(key, format!("expected a boolean, got `{value}`"))
        }),
    }
}

fn decode_camera_locks(fields: &Fields) -> Result<Option<Vec<Option<bool>>>, DecodeError> {
    let Some(value) = present(fields, CAMERAS_KEY) else {
        return Ok(None);
    };
    let entries = value
        .as_array()
        .ok_or_else(|| DecodeError::field(CAMERAS_KEY, "expected an array of camera objects"))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let camera = entry.as_object().ok_or_else(|| {
                DecodeError::field(CAMERAS_KEY, format!("entry {index} is not an object"))
            })?;
            match present(camera, CAMERA_LOCKED_KEY) {
                None => Ok(None),
                Some(locked) => locked.as_bool().map(Some).ok_or_else(|| {
                    DecodeError::field(
                        CAMERAS_KEY,
                        format!("entry {index} has non-boolean `locked`: `{locked}`"),
                    )
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn decode_guard_calls_police(fields: &Fields) -> Result<Option<bool>, DecodeError> {
    let Some(value) = present(fields, GUARD_KEY) else {
        return Ok(None);
    };
    let guard = value
        .as_object()
        .ok_or_else(|| DecodeError::field(GUARD_KEY, "expected an object"))?;

    let call = present(guard, CALL_POLICE_KEY)
        .or_else(|| present(guard, CALL_POLICE_FALLBACK_KEY));
    match call {
        None => Ok(None),
        Some(flag) => flag.as_bool().map(Some).ok_or_else(|| {
            DecodeError::field(CALL_POLICE_KEY, format!("expected a boolean, got `{flag}`"))
        }),
    }
}

fn decode_time_counter(fields: &Fields) -> Result<Option<u64>, DecodeError> {
    match present(fields, TIME_COUNTER_KEY) {
        None => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or_else(|| {
            DecodeError::field(TIME_COUNTER_KEY, format!("expected a counter, got `{value}`"))
        }),
    }
}
