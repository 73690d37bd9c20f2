use crate::analysis::Emotion;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub emotion: Emotion,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub hello: &'static str,
}
