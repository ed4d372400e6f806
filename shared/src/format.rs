use crate::response::Detection;

/// `0.873` -> `"87.3"`. Ties round away from zero, so `0.8725` -> `"87.3"`.
pub fn confidence_percent(score: f64) -> String {
    let percent = score * 100.0;
    format!("{:.1}", (percent * 10.0).round() / 10.0)
}

/// Line shown in the detection list.
pub fn detection_line(detection: &Detection) -> String {
    format!(
        "{} (Confidence: {}%)",
        detection.label,
        confidence_percent(detection.score)
    )
}

/// Caption painted over the zoomed crop.
pub fn zoom_caption(detection: &Detection) -> String {
    format!("{} ({}%)", detection.label, confidence_percent(detection.score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodule() -> Detection {
        Detection {
            bbox: [10.0, 20.0, 30.0, 40.0],
            label: "Nodule".into(),
            score: 0.873,
        }
    }

    #[test]
    fn formats_list_line() {
        assert_eq!(detection_line(&nodule()), "Nodule (Confidence: 87.3%)");
    }

    #[test]
    fn formats_caption() {
        assert_eq!(zoom_caption(&nodule()), "Nodule (87.3%)");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(confidence_percent(1.0), "100.0");
        assert_eq!(confidence_percent(0.0), "0.0");
        assert_eq!(confidence_percent(0.5), "50.0");
    }

    #[test]
    fn percent_rounds_ties_up() {
        assert_eq!(confidence_percent(0.8725), "87.3");
        assert_eq!(confidence_percent(0.1225), "12.3");
        assert_eq!(confidence_percent(0.0025), "0.3");
        assert_eq!(confidence_percent(0.0125), "1.3");
    }

    #[test]
    fn list_line_and_caption_share_tie_rounding() {
        let detection = Detection {
            bbox: [0.0, 0.0, 8.0, 8.0],
            label: "Nodule".into(),
            score: 0.8725,
        };
        assert_eq!(detection_line(&detection), "Nodule (Confidence: 87.3%)");
        assert_eq!(zoom_caption(&detection), "Nodule (87.3%)");
    }
}
