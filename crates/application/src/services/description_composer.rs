//! Description composer - turns vision results into an English sentence
//!
//! Output shape:
//!
//! ```text
//! The image shows a man around 25 to 35 years old looking happy. The scene contains Person, Dog, Park.
//! ```
//!
//! Each fragment is optional. Without a face and without labels the result
//! is the degenerate `"."`, which is still passed downstream.

use domain::{FaceDetails, VisionResult};

/// Maximum number of labels mentioned in the scene sentence
pub const MAX_DESCRIBED_LABELS: usize = 3;

/// Compose the English description for a vision result
///
/// # Examples
///
/// ```
/// use application::compose_description;
/// use domain::{Label, VisionResult};
///
/// let result = VisionResult::new(vec![Label::new("Dog", 99.0)], None);
/// assert_eq!(compose_description(&result), "The scene contains Dog.");
///
/// assert_eq!(compose_description(&VisionResult::empty()), ".");
/// ```
#[must_use]
pub fn compose_description(result: &VisionResult) -> String {
    let mut fragments = Vec::with_capacity(2);

    if let Some(face) = result.face() {
        fragments.push(face_fragment(face));
    }

    if let Some(scene) = scene_fragment(result) {
        fragments.push(scene);
    }

    let mut description = fragments.join(". ");
    description.push('.');
    description
}

fn face_fragment(face: &FaceDetails) -> String {
    let mut fragment = format!("The image shows {}", face.gender().noun_phrase());

    if let Some(age) = face.age_range() {
        fragment.push_str(&format!(" around {} to {} years old", age.low, age.high));
    }

    if let Some(emotion) = face.dominant_emotion() {
        fragment.push_str(" looking ");
        fragment.push_str(&emotion.kind.to_lowercase());
    }

    fragment
}

fn scene_fragment(result: &VisionResult) -> Option<String> {
    let names: Vec<&str> = result
        .top_labels(MAX_DESCRIBED_LABELS)
        .map(|label| label.name.as_str())
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(format!("The scene contains {}", names.join(", ")))
    }
}
