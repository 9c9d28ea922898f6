//! Parsing of the `translate_a/single` response
//!
//! The endpoint answers with nested positional arrays. With `dt=t` the
//! first element is a list of segments, each of the shape
//! `[translated, original, ...]`:
//!
//! ```text
//! [[["A imagem mostra ", "The image shows ", null, null, 10], ["um cão.", "a dog.", ...]], null, "en"]
//! ```

use serde_json::Value;

/// Concatenate the translated part of every segment
///
/// Returns `None` when the payload does not have the expected shape or
/// carries no translated text.
pub(crate) fn join_segments(payload: &Value) -> Option<String> {
    let segments = payload.get(0)?.as_array()?;
    if segments.is_empty() {
        return None;
    }

    let translated = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect::<String>();

    if translated.trim().is_empty() {
        return None;
    }

    Some(translated)
}

/// Source language detected by the service, if reported
pub(crate) fn detected_language(payload: &Value) -> Option<&str> {
    payload.get(2).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn joins_all_segments_in_order() {
        let payload = json!([
            [
                ["A imagem mostra um homem. ", "The image shows a man. ", null, null, 10],
                ["A cena contém Pessoa.", "The scene contains Person.", null, null, 10]
            ],
            null,
            "en"
        ]);

        assert_eq!(
            join_segments(&payload).as_deref(),
            Some("A imagem mostra um homem. A cena contém Pessoa.")
        );
        assert_eq!(detected_language(&payload), Some("en"));
    }

    #[test]
    fn empty_segment_list_is_none() {
        assert!(join_segments(&json!([[], null, "en"])).is_none());
    }

    #[test]
    fn wrong_shape_is_none() {
        assert!(join_segments(&json!({"sentences": []})).is_none());
        assert!(join_segments(&json!([null])).is_none());
        assert!(join_segments(&json!([])).is_none());
    }

    #[test]
    fn segments_without_text_are_skipped() {
        let payload = json!([[["Olá", "Hello"], [null, null, "Ola"]]]);
        assert_eq!(join_segments(&payload).as_deref(), Some("Olá"));
    }

    #[test]
    fn segments_without_any_text_are_none() {
        let payload = json!([[[null, "The scene contains Dog."]], null, "en"]);
        assert!(join_segments(&payload).is_none());

        let blank = json!([[["  ", "The scene contains Dog."]], null, "en"]);
        assert!(join_segments(&blank).is_none());
    }

    #[test]
    fn missing_detected_language() {
        assert!(detected_language(&json!([[["a", "a"]]])).is_none());
    }
}
