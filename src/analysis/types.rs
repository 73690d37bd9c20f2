use serde::Serialize;

/// Label set returned by the mock analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Emotion {
    Happy,
    Sad,
    Anxious,
    Excited,
    Angry,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Anxious,
        Emotion::Excited,
        Emotion::Angry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Anxious => "Anxious",
            Emotion::Excited => "Excited",
            Emotion::Angry => "Angry",
        }
    }
}

/// One mock analysis result. Both fields come from the thread-local RNG;
/// the input text is never consulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub emotion: Emotion,
    pub confidence: f64,
}
