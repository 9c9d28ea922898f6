//! Property-based tests for domain types
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    AgeRange, Emotion, FaceDetails, Gender, Label, LanguageCode, UploadedImage, VisionResult,
    VoiceId,
};
use proptest::prelude::*;

// ============================================================================
// VisionResult Property Tests
// ============================================================================

mod vision_result_tests {
    use super::*;

    fn label_strategy() -> impl Strategy<Value = Label> {
        ("[A-Z][a-z]{2,10}", 0.0f32..=100.0f32).prop_map(|(name, conf)| Label::new(name, conf))
    }

    proptest! {
        #[test]
        fn labels_are_sorted_descending(labels in prop::collection::vec(label_strategy(), 0..20)) {
            let result = VisionResult::new(labels, None);
            for pair in result.labels().windows(2) {
                prop_assert!(pair[0].confidence >= pair[1].confidence);
            }
        }

        #[test]
        fn sorting_preserves_labels(labels in prop::collection::vec(label_strategy(), 0..20)) {
            let count = labels.len();
            let result = VisionResult::new(labels, None);
            prop_assert_eq!(result.labels().len(), count);
        }

        #[test]
        fn top_labels_never_exceeds_n(
            labels in prop::collection::vec(label_strategy(), 0..20),
            n in 0usize..15
        ) {
            let result = VisionResult::new(labels, None);
            let taken = result.top_labels(n).count();
            prop_assert!(taken <= n);
            prop_assert_eq!(taken, n.min(result.labels().len()));
        }

        #[test]
        fn dominant_emotion_has_max_confidence(
            confidences in prop::collection::vec(0.0f32..=100.0f32, 1..8)
        ) {
            let emotions = confidences
                .iter()
                .enumerate()
                .map(|(i, c)| Emotion::new(format!("E{i}"), *c))
                .collect();
            let face = FaceDetails::new(Gender::Male, None, emotions);
            let max = confidences.iter().copied().fold(f32::MIN, f32::max);
            let dominant = face.dominant_emotion().map(|e| e.confidence);
            prop_assert_eq!(dominant, Some(max));
        }

        #[test]
        fn age_range_low_never_exceeds_high(a in 0u32..120, b in 0u32..120) {
            let range = AgeRange::new(a, b);
            prop_assert!(range.low <= range.high);
        }
    }
}

// ============================================================================
// Gender Property Tests
// ============================================================================

mod gender_tests {
    use super::*;

    proptest! {
        #[test]
        fn anything_but_male_is_female(value in "[a-zA-Z]{0,12}") {
            prop_assume!(!value.eq_ignore_ascii_case("male"));
            prop_assert_eq!(Gender::from_service_value(Some(&value)), Gender::Female);
        }
    }
}

// ============================================================================
// UploadedImage Property Tests
// ============================================================================

mod uploaded_image_tests {
    use super::*;

    proptest! {
        #[test]
        fn image_types_within_limit_accepted(
            subtype in "(png|jpeg|gif|webp|bmp)",
            size in 1usize..4096
        ) {
            let result = UploadedImage::with_limit(vec![0; size], Some(format!("image/{subtype}")), 4096);
            prop_assert!(result.is_ok());
        }

        #[test]
        fn oversized_images_rejected(limit in 1usize..1024, extra in 1usize..64) {
            let result = UploadedImage::with_limit(vec![0; limit + extra], None, limit);
            prop_assert!(result.is_err());
            prop_assert!(result.unwrap_err().is_too_large());
        }

        #[test]
        fn non_image_types_rejected(major in "(text|audio|video|font)", minor in "[a-z]{2,8}") {
            let result = UploadedImage::new(vec![1, 2, 3], Some(format!("{major}/{minor}")));
            prop_assert!(result.is_err());
        }
    }
}

// ============================================================================
// VoiceId / LanguageCode Property Tests
// ============================================================================

mod value_object_tests {
    use super::*;

    proptest! {
        #[test]
        fn voice_id_is_trimmed(name in "[A-Za-z]{1,12}", pad in " {0,4}") {
            let voice = VoiceId::new(format!("{pad}{name}{pad}")).unwrap();
            prop_assert_eq!(voice.as_str(), name.as_str());
        }

        #[test]
        fn blank_voice_ids_are_absent(blank in "[ \t]{0,6}") {
            prop_assert!(VoiceId::parse_optional(Some(&blank)).is_none());
        }

        #[test]
        fn language_codes_normalize(primary in "[a-zA-Z]{2,3}", region in "[a-zA-Z]{2}") {
            let code = LanguageCode::new(format!("{primary}-{region}")).unwrap();
            let expected = format!("{}-{}", primary.to_ascii_lowercase(), region.to_ascii_uppercase());
            prop_assert_eq!(code.as_str(), expected.as_str());
        }
    }
}
