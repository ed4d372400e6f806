//! Geometry and styling for the zoomed-detection canvas.
//!
//! The frontend decodes the enhanced image, reads its natural size and asks
//! [`plan_zoom`] what to paint. Keeping the decision here lets it be tested
//! without a browser.

use crate::format::zoom_caption;
use crate::response::Detection;

pub const CAPTION_FONT: &str = "24px Arial";
pub const CAPTION_COLOR: &str = "#FF0000";
pub const CAPTION_LINE_WIDTH: f64 = 2.0;
pub const CAPTION_ORIGIN: (f64, f64) = (10.0, 30.0);

pub const EMPTY_WIDTH: u32 = 300;
pub const EMPTY_HEIGHT: u32 = 200;
pub const EMPTY_FONT: &str = "16px Inter, sans-serif";
pub const EMPTY_COLOR: &str = "#95a5a6";
pub const EMPTY_MESSAGE: &str = "Tidak ada abnormalitas terdeteksi";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// `None` when the box has no area or carries non-finite values.
    pub fn from_bbox(bbox: [f64; 4]) -> Option<Rect> {
        let [x, y, width, height] = bbox;
        if bbox.iter().any(|v| !v.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Rect { x, y, width, height })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ZoomPlan {
    /// Stretch `source` over a `width` x `height` canvas, then paint `caption`.
    Crop {
        source: Rect,
        width: u32,
        height: u32,
        caption: String,
    },
    /// Fixed-size canvas with a centered [`EMPTY_MESSAGE`].
    Empty { width: u32, height: u32 },
}

/// Detection the zoom panel magnifies. This is the first entry as sent by the
/// server, which is not necessarily the highest score.
pub fn zoom_target(detections: &[Detection]) -> Option<&Detection> {
    detections.first()
}

pub fn plan_zoom(detections: &[Detection], natural_width: u32, natural_height: u32) -> ZoomPlan {
    let Some(detection) = zoom_target(detections) else {
        return ZoomPlan::Empty {
            width: EMPTY_WIDTH,
            height: EMPTY_HEIGHT,
        };
    };

    let source = Rect::from_bbox(detection.bbox).unwrap_or_else(|| {
        log::warn!(
            "degenerate bbox {:?} for '{}', zooming whole image",
            detection.bbox,
            detection.label
        );
        Rect {
            x: 0.0,
            y: 0.0,
            width: natural_width as f64,
            height: natural_height as f64,
        }
    });

    ZoomPlan::Crop {
        source,
        width: natural_width,
        height: natural_height,
        caption: zoom_caption(detection),
    }
}
