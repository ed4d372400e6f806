pub mod error;
pub mod format;
pub mod navigation;
pub mod response;
pub mod state;
pub mod zoom;

pub use error::ProcessError;
pub use navigation::Page;
pub use response::{Detection, ErrorBody, ProcessResponse};
pub use state::{AnalyzerState, DetectionList, DrawTicket, PanelId, PanelStatus};
