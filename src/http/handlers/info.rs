//! Service description and liveness.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Describe the API and its endpoints.
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "name": "PDDIKTI REST API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST API wrapper for PDDIKTI (Pangkalan Data Pendidikan Tinggi) Indonesia",
        "endpoints": {
            "universities": {
                "search": "/api/v1/universities/search?q=<keyword>",
                "detail": "/api/v1/universities/<university_id>",
                "programs": "/api/v1/universities/<university_id>/programs?semester=<semester>",
                "logo": "/api/v1/universities/<university_id>/logo",
                "statistics": "/api/v1/universities/<university_id>/stats"
            },
            "students": {
                "search": "/api/v1/students/search?q=<keyword>",
                "detail": "/api/v1/students/<student_id>"
            },
            "lecturers": {
                "search": "/api/v1/lecturers/search?q=<keyword>",
                "profile": "/api/v1/lecturers/<lecturer_id>",
                "research": "/api/v1/lecturers/<lecturer_id>/research"
            },
            "programs": {
                "search": "/api/v1/programs/search?q=<keyword>",
                "detail": "/api/v1/programs/<program_id>"
            },
            "search": {
                "all": "/api/v1/search?q=<keyword>"
            },
            "statistics": {
                "counts": "/api/v1/statistics/counts",
                "visualizations": "/api/v1/statistics/visualizations?category=<category>"
            },
            "health": "/health"
        }
    }))
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
