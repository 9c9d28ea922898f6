//! Vision analysis results
//!
//! Labels and face attributes extracted from an uploaded image. Orderings
//! are established at construction time so consumers can rely on
//! "highest confidence first" without re-sorting.

use std::fmt;

use serde::Serialize;

/// A detected object or scene tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    /// Label name as reported by the vision service (e.g. "Dog")
    pub name: String,
    /// Confidence in percent (0.0 - 100.0)
    pub confidence: f32,
}

impl Label {
    /// Create a new label
    #[must_use]
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Binary gender classification used for the description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Classified as male
    Male,
    /// Classified as female, or unclassified
    Female,
}

impl Gender {
    /// Map a vision-service gender value; anything but "male" is `Female`
    #[must_use]
    pub fn from_service_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("male") => Self::Male,
            _ => Self::Female,
        }
    }

    /// Noun phrase used in descriptions
    #[must_use]
    pub const fn noun_phrase(&self) -> &'static str {
        match self {
            Self::Male => "a man",
            Self::Female => "a woman",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Estimated age range in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgeRange {
    /// Lower bound
    pub low: u32,
    /// Upper bound
    pub high: u32,
}

impl AgeRange {
    /// Create an age range, swapping the bounds if given in reverse
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }
}

/// A detected emotion with its confidence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emotion {
    /// Emotion type as reported by the vision service (e.g. "HAPPY")
    pub kind: String,
    /// Confidence in percent (0.0 - 100.0)
    pub confidence: f32,
}

impl Emotion {
    /// Create a new emotion
    #[must_use]
    pub fn new(kind: impl Into<String>, confidence: f32) -> Self {
        Self {
            kind: kind.into(),
            confidence,
        }
    }
}

/// Attributes of the primary face found in an image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceDetails {
    gender: Gender,
    age_range: Option<AgeRange>,
    emotions: Vec<Emotion>,
}

impl FaceDetails {
    /// Create face details; emotions are ranked by confidence, highest first
    #[must_use]
    pub fn new(gender: Gender, age_range: Option<AgeRange>, mut emotions: Vec<Emotion>) -> Self {
        emotions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Self {
            gender,
            age_range,
            emotions,
        }
    }

    /// Classified gender
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Estimated age range, if the service reported one
    #[must_use]
    pub const fn age_range(&self) -> Option<AgeRange> {
        self.age_range
    }

    /// Ranked emotions, highest confidence first
    #[must_use]
    pub fn emotions(&self) -> &[Emotion] {
        &self.emotions
    }

    /// The emotion with the highest confidence
    #[must_use]
    pub fn dominant_emotion(&self) -> Option<&Emotion> {
        self.emotions.first()
    }
}

/// Combined output of label and face detection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VisionResult {
    labels: Vec<Label>,
    face: Option<FaceDetails>,
}

impl VisionResult {
    /// Create a vision result; labels are ranked by confidence, highest first
    ///
    /// The sort is stable, so labels with equal confidence keep the order
    /// the service reported them in.
    #[must_use]
    pub fn new(mut labels: Vec<Label>, face: Option<FaceDetails>) -> Self {
        labels.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Self { labels, face }
    }

    /// A result with nothing detected
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ranked labels, highest confidence first
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The primary face, if one was found
    #[must_use]
    pub const fn face(&self) -> Option<&FaceDetails> {
        self.face.as_ref()
    }

    /// The `n` highest-confidence labels
    pub fn top_labels(&self, n: usize) -> impl Iterator<Item = &Label> {
        self.labels.iter().take(n)
    }

    /// Check whether nothing was detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.face.is_none()
    }
}
