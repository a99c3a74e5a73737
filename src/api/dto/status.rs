/*
 * Responsibility
 * - GET / の response DTO
 * - 固定値 (project / language / note) はここに集約する
 */
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

pub const PROJECT: &str = "py-hello";
pub const LANGUAGE: &str = "python";
pub const NOTE: &str = "If you can see this JSON, Docker networking + port mapping works.";

/// Identification document returned by the root endpoint.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub project: &'static str,
    pub language: &'static str,
    pub hostname: String,
    pub time_utc: String,
    pub note: &'static str,
}

impl StatusPayload {
    pub fn new(hostname: String, now: DateTime<Utc>) -> Self {
        Self {
            project: PROJECT,
            language: LANGUAGE,
            hostname,
            // e.g. 2026-10-18T09:15:02.123456+00:00
            time_utc: now.to_rfc3339_opts(SecondsFormat::Micros, false),
            note: NOTE,
        }
    }
}
