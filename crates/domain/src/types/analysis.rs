//! Text and photo meal analysis records

use serde::{Deserialize, Serialize};

use crate::constants::{PHOTO_FILE_NAME, PHOTO_MIME_TYPE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysisRequest {
    pub description: String,
}

/// Envelope shared by `/analysis/text` and `/analysis/photo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<AnalysisResult>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Estimated nutrition for an analysed dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub calories: i64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Image bytes for the multipart `file` field.
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

impl PhotoUpload {
    /// JPEG upload named `photo.jpg`.
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            file_name: PHOTO_FILE_NAME.to_string(),
            mime_type: PHOTO_MIME_TYPE.to_string(),
        }
    }
}

impl std::fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("len", &self.bytes.len())
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .finish()
    }
}
