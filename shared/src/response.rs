use serde::{Deserialize, Serialize};

/// Body returned by `POST /upload_and_process` on success.
///
/// Image fields carry base64 encoded PNG bytes, not data URLs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProcessResponse {
    pub original_image: String,
    pub enhanced_only_image: String,
    /// Enhanced image with the detection boxes already drawn by the server.
    pub processed_image: String,
    #[serde(default)]
    pub detections: Vec<Detection>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Detection {
    /// `[x, y, width, height]` in source image pixels, top-left origin.
    pub bbox: [f64; 4],
    pub label: String,
    pub score: f64,
}

/// Error body the server attaches to non-2xx responses. The field may be missing.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

pub fn png_data_url(base64_payload: &str) -> String {
    format!("data:image/png;base64,{}", base64_payload)
}

impl ProcessResponse {
    pub fn original_url(&self) -> String {
        png_data_url(&self.original_image)
    }

    pub fn enhanced_url(&self) -> String {
        png_data_url(&self.enhanced_only_image)
    }

    pub fn processed_url(&self) -> String {
        png_data_url(&self.processed_image)
    }
}
