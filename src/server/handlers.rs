use super::types::{AnalysisRequest, AnalysisResponse, HelloResponse};
use crate::analysis;
use axum::response::Json;
use tracing::info;

pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse { hello: "world" })
}

pub async fn analyze(Json(request): Json<AnalysisRequest>) -> Json<AnalysisResponse> {
    let analysis = analysis::analyze();

    info!(
        "Analyzed {} byte(s) of text: {} ({:.2})",
        request.text.len(),
        analysis.emotion.as_str(),
        analysis.confidence
    );

    Json(AnalysisResponse {
        emotion: analysis.emotion,
        confidence: analysis.confidence,
    })
}
