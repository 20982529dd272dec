use serde::Serialize;

/// Error payloads carry a single error field, whatever the status code.
#[derive(Debug, Serialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfoDto {
    pub service: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub version: String,
}
