mod types;

pub use types::*;

use rand::Rng;

/// Lower bound of the mock confidence range.
pub const CONFIDENCE_MIN: f64 = 0.70;
/// Upper bound of the mock confidence range.
pub const CONFIDENCE_MAX: f64 = 0.99;

/// Draws a mock analysis: a uniformly chosen label and a confidence
/// from [CONFIDENCE_MIN, CONFIDENCE_MAX], rounded to two decimals.
pub fn analyze() -> Analysis {
    let mut rng = rand::thread_rng();

    let emotion = Emotion::ALL[rng.gen_range(0..Emotion::ALL.len())];
    let confidence = round_to_cents(rng.gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX));

    Analysis {
        emotion,
        confidence,
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(0.7), 0.7);
        assert_eq!(round_to_cents(0.987654), 0.99);
        assert_eq!(round_to_cents(0.8449), 0.84);
        assert_eq!(round_to_cents(0.845001), 0.85);
    }

    #[test]
    fn test_analyze_confidence_stays_in_range() {
        for _ in 0..1000 {
            let analysis = analyze();
            assert!(analysis.confidence >= CONFIDENCE_MIN);
            assert!(analysis.confidence <= CONFIDENCE_MAX);
        }
    }

    #[test]
    fn test_analyze_confidence_has_two_decimals() {
        for _ in 0..1000 {
            let scaled = analyze().confidence * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_analyze_emotion_is_from_label_set() {
        for _ in 0..1000 {
            let analysis = analyze();
            assert!(Emotion::ALL.contains(&analysis.emotion));
        }
    }

    #[test]
    fn test_emotion_serializes_to_variant_name() {
        let labels: Vec<String> = Emotion::ALL
            .iter()
            .map(|e| serde_json::to_string(e).unwrap())
            .collect();

        assert_eq!(
            labels,
            vec![
                "\"Happy\"",
                "\"Sad\"",
                "\"Anxious\"",
                "\"Excited\"",
                "\"Angry\""
            ]
        );
    }
}
