//! Lenient decoding of creation snapshots fetched from an external source.

use atelier_core::Creation;

/// Decode a JSON snapshot into creation records.
///
/// The snapshot is expected to be an array; any other shape yields an
/// empty list. Elements that fail to deserialize are skipped with a
/// warning. Data-shape problems never surface as errors — an unreadable
/// snapshot and an empty one are the same observable outcome.
#[must_use]
pub fn decode_snapshot(value: &serde_json::Value) -> Vec<Creation> {
    let Some(items) = value.as_array() else {
        tracing::warn!("creation snapshot is not an array; treating as empty");
        return Vec::new();
    };

    let mut creations = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<Creation>(item.clone()) {
            Ok(c) => creations.push(c),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed creation record");
            }
        }
    }
    creations
}
