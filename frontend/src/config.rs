/// Base URL of the processing service. Override at build time with
/// `LUNGSCAN_BACKEND_URL=https://host:port trunk build`.
pub const BACKEND_URL: &str = match option_env!("LUNGSCAN_BACKEND_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:5000",
};

pub const PROCESS_PATH: &str = "/upload_and_process";

/// Multipart field the server reads the upload from.
pub const UPLOAD_FIELD: &str = "image";

/// DICOM is read server side, so `.dcm` is offered next to regular images.
pub const ACCEPTED_TYPES: &str = "image/*,.dcm";

pub fn process_url() -> String {
    format!("{}{}", BACKEND_URL.trim_end_matches('/'), PROCESS_PATH)
}
