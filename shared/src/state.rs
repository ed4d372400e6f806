use crate::error::ProcessError;
use crate::format::detection_line;
use crate::navigation::Page;
use crate::response::ProcessResponse;
use derive_more::Display;
use std::cell::Cell;
use std::rc::Rc;
use strum_macros::EnumIter;

pub const NO_FILE_LABEL: &str = "Belum ada file dipilih";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum PanelId {
    #[display(fmt = "original")]
    Original,
    #[display(fmt = "enhanced")]
    Enhanced,
    #[display(fmt = "detections-overlay")]
    Overlay,
    #[display(fmt = "detection-zoom")]
    Zoom,
}

impl PanelId {
    /// Overlay and zoom are painted on a canvas after an async decode.
    pub fn is_canvas(self) -> bool {
        matches!(self, PanelId::Overlay | PanelId::Zoom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelStatus {
    Placeholder,
    Cleared,
    Drawing,
    Visible,
}

impl PanelStatus {
    pub fn shows_placeholder(self) -> bool {
        self == PanelStatus::Placeholder
    }

    pub fn shows_content(self) -> bool {
        self == PanelStatus::Visible
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panels {
    pub original: PanelStatus,
    pub enhanced: PanelStatus,
    pub overlay: PanelStatus,
    pub zoom: PanelStatus,
}

impl Panels {
    fn all(status: PanelStatus) -> Self {
        Self {
            original: status,
            enhanced: status,
            overlay: status,
            zoom: status,
        }
    }

    pub fn get(&self, id: PanelId) -> PanelStatus {
        match id {
            PanelId::Original => self.original,
            PanelId::Enhanced => self.enhanced,
            PanelId::Overlay => self.overlay,
            PanelId::Zoom => self.zoom,
        }
    }

    fn get_mut(&mut self, id: PanelId) -> &mut PanelStatus {
        match id {
            PanelId::Original => &mut self.original,
            PanelId::Enhanced => &mut self.enhanced,
            PanelId::Overlay => &mut self.overlay,
            PanelId::Zoom => &mut self.zoom,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetectionList {
    Idle,
    Processing,
    Entries(Vec<String>),
    NoneDetected,
    Failed,
}

impl DetectionList {
    pub fn lines(&self) -> Vec<String> {
        match self {
            DetectionList::Idle => vec![
                "Belum ada deteksi. Unggah dan proses citra untuk melihat hasilnya.".to_string(),
            ],
            DetectionList::Processing => vec!["Memproses citra...".to_string()],
            DetectionList::Entries(lines) => lines.clone(),
            DetectionList::NoneDetected => {
                vec!["Tidak ada abnormalitas yang terdeteksi.".to_string()]
            }
            DetectionList::Failed => vec!["Terjadi kesalahan saat memproses citra.".to_string()],
        }
    }
}

/// Permission for an async canvas draw. It goes stale as soon as the
/// selection changes or a new submission starts.
#[derive(Clone, Debug)]
pub struct DrawTicket {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl DrawTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.get() == self.generation
    }
}

/// View state of the analysis page.
///
/// `F` is the selected file handle; the browser build uses `gloo_file::File`.
/// Transitions never touch the DOM, the frontend renders from this and runs
/// the side effects the transitions hand back.
#[derive(Clone, Debug)]
pub struct AnalyzerState<F> {
    pub page: Page,
    selected_file: Option<F>,
    pub file_label: String,
    pub busy: bool,
    pub error: Option<String>,
    pub panels: Panels,
    pub detections: DetectionList,
    pub result: Option<Rc<ProcessResponse>>,
    generation: Rc<Cell<u64>>,
}

impl<F: Clone> Default for AnalyzerState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> AnalyzerState<F> {
    pub fn new() -> Self {
        Self {
            page: Page::DEFAULT,
            selected_file: None,
            file_label: NO_FILE_LABEL.to_string(),
            busy: false,
            error: None,
            panels: Panels::all(PanelStatus::Placeholder),
            detections: DetectionList::Idle,
            result: None,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    fn bump_generation(&mut self) {
        self.generation.set(self.generation.get() + 1);
    }

    /// Ticket for drawing the current result. Draw tasks check it after their
    /// decode and before painting.
    pub fn draw_ticket(&self) -> DrawTicket {
        DrawTicket {
            generation: self.generation(),
            current: Rc::clone(&self.generation),
        }
    }

    /// Whether `page` is the one shown, and so whose nav controls carry `active`.
    pub fn is_active(&self, page: Page) -> bool {
        self.page == page
    }

    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.busy
    }

    /// Switches to the page behind `nav_key`. Unknown keys leave the state alone.
    pub fn navigate(&mut self, nav_key: &str) -> bool {
        match Page::from_nav_key(nav_key) {
            Some(page) => {
                self.page = page;
                true
            }
            None => {
                log::error!("Page with key '{}' not found.", nav_key);
                false
            }
        }
    }

    pub fn select_file(&mut self, file: Option<F>, name: Option<String>) {
        self.bump_generation();
        match file {
            Some(file) => {
                self.selected_file = Some(file);
                self.file_label = name.unwrap_or_default();
                self.error = None;
                self.panels = Panels::all(PanelStatus::Cleared);
                self.detections = DetectionList::Idle;
                self.result = None;
            }
            None => {
                self.selected_file = None;
                self.file_label = NO_FILE_LABEL.to_string();
            }
        }
    }

    /// Starts a submission and returns the file to upload.
    pub fn begin_submit(&mut self) -> Result<F, ProcessError> {
        let Some(file) = self.selected_file.clone() else {
            let err = ProcessError::NoFileSelected;
            self.error = Some(err.user_message());
            return Err(err);
        };

        self.bump_generation();
        self.busy = true;
        self.error = None;
        self.panels = Panels::all(PanelStatus::Cleared);
        self.detections = DetectionList::Processing;
        self.result = None;
        Ok(file)
    }

    /// Applies the outcome of a submission. On success the returned response
    /// is what the canvas panels should be drawn from.
    pub fn finish_submit(
        &mut self,
        outcome: Result<ProcessResponse, ProcessError>,
    ) -> Option<Rc<ProcessResponse>> {
        self.busy = false;

        match outcome {
            Ok(response) => {
                self.detections = if response.detections.is_empty() {
                    DetectionList::NoneDetected
                } else {
                    DetectionList::Entries(response.detections.iter().map(detection_line).collect())
                };
                self.panels = Panels {
                    original: PanelStatus::Visible,
                    enhanced: PanelStatus::Visible,
                    overlay: PanelStatus::Drawing,
                    zoom: PanelStatus::Drawing,
                };
                let response = Rc::new(response);
                self.result = Some(response.clone());
                Some(response)
            }
            Err(err) => {
                log::error!("processing failed: {:?}", err);
                self.error = Some(err.user_message());
                self.detections = DetectionList::Failed;
                self.panels = Panels::all(PanelStatus::Placeholder);
                self.result = None;
                None
            }
        }
    }

    /// Marks a canvas panel as painted. Completions from an older generation
    /// are dropped and reported as `false`.
    pub fn panel_drawn(&mut self, generation: u64, panel: PanelId) -> bool {
        if generation != self.generation() || !panel.is_canvas() {
            return false;
        }
        let status = self.panels.get_mut(panel);
        if *status != PanelStatus::Drawing {
            return false;
        }
        *status = PanelStatus::Visible;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Detection;
    use strum::IntoEnumIterator;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    fn select(state: &mut AnalyzerState<FakeFile>, name: &'static str) {
        state.select_file(Some(FakeFile(name)), Some(name.to_string()));
    }

    fn response(detections: Vec<Detection>) -> ProcessResponse {
        serde_json::from_value(serde_json::json!({
            "original_image": "b3JpZw==",
            "enhanced_only_image": "ZW5o",
            "processed_image": "cHJvYw==",
            "detections": detections,
        }))
        .unwrap()
    }

    fn detection(label: &str, score: f64) -> Detection {
        Detection {
            bbox: [10.0, 20.0, 30.0, 40.0],
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn starts_on_dashboard_with_placeholders() {
        let state = AnalyzerState::<FakeFile>::new();
        assert_eq!(state.page, Page::Dashboard);
        assert!(!state.can_submit());
        assert_eq!(state.file_label, NO_FILE_LABEL);
        for id in PanelId::iter() {
            assert!(state.panels.get(id).shows_placeholder());
        }
    }

    #[test]
    fn navigation_keeps_one_active_page() {
        let mut state = AnalyzerState::<FakeFile>::new();
        assert!(state.navigate("image-processing"));
        assert_eq!(state.page, Page::ImageProcessing);

        assert!(!state.navigate("does-not-exist"));
        assert_eq!(state.page, Page::ImageProcessing);

        assert!(state.navigate("about"));
        let active: Vec<Page> = Page::iter().filter(|p| state.is_active(*p)).collect();
        assert_eq!(active, vec![Page::About]);
    }

    #[test]
    fn every_key_activates_only_its_own_page() {
        let mut state = AnalyzerState::<FakeFile>::new();
        for (key, page) in crate::navigation::NAV_TABLE {
            assert!(state.navigate(key));
            for other in Page::iter() {
                assert_eq!(state.is_active(other), other == page, "{} vs {:?}", key, other);
            }
        }
    }

    #[test]
    fn selecting_a_file_enables_submit_and_clears_results() {
        let mut state = AnalyzerState::new();
        select(&mut state, "a.png");
        let _ = state.begin_submit().unwrap();
        state.finish_submit(Err(ProcessError::Network("offline".into())));
        assert!(state.error.is_some());

        select(&mut state, "b.png");
        assert!(state.can_submit());
        assert_eq!(state.file_label, "b.png");
        assert_eq!(state.error, None);
        assert_eq!(state.detections, DetectionList::Idle);
        for id in PanelId::iter() {
            assert_eq!(state.panels.get(id), PanelStatus::Cleared);
        }
    }

    #[test]
    fn clearing_selection_disables_submit() {
        let mut state = AnalyzerState::new();
        select(&mut state, "a.png");
        state.select_file(None, None);
        assert!(!state.can_submit());
        assert_eq!(state.file_label, NO_FILE_LABEL);
    }

    #[test]
    fn submit_without_file_is_a_validation_error() {
        let mut state = AnalyzerState::<FakeFile>::new();
        assert_eq!(state.begin_submit(), Err(ProcessError::NoFileSelected));
        assert_eq!(state.error.as_deref(), Some("Pilih file citra terlebih dahulu."));
        assert!(!state.busy);
        assert_eq!(state.detections, DetectionList::Idle);
    }

    #[test]
    fn submit_disables_until_finished() {
        let mut state = AnalyzerState::new();
        select(&mut state, "scan.dcm");
        assert_eq!(state.begin_submit(), Ok(FakeFile("scan.dcm")));
        assert!(state.busy);
        assert!(!state.can_submit());
        assert_eq!(state.detections, DetectionList::Processing);

        state.finish_submit(Ok(response(vec![])));
        assert!(!state.busy);
        assert!(state.can_submit());
    }

    #[test]
    fn lists_every_detection() {
        let mut state = AnalyzerState::new();
        select(&mut state, "scan.png");
        state.begin_submit().unwrap();
        let drawn = state.finish_submit(Ok(response(vec![
            detection("Nodule", 0.873),
            detection("Mass", 0.5),
            detection("Effusion", 0.125),
        ])));

        assert!(drawn.is_some());
        assert_eq!(
            state.detections.lines(),
            vec![
                "Nodule (Confidence: 87.3%)",
                "Mass (Confidence: 50.0%)",
                "Effusion (Confidence: 12.5%)",
            ]
        );
        assert_eq!(state.panels.original, PanelStatus::Visible);
        assert_eq!(state.panels.overlay, PanelStatus::Drawing);
    }

    #[test]
    fn empty_detections_show_single_fallback_line() {
        let mut state = AnalyzerState::new();
        select(&mut state, "scan.png");
        state.begin_submit().unwrap();
        state.finish_submit(Ok(response(vec![])));
        assert_eq!(
            state.detections.lines(),
            vec!["Tidak ada abnormalitas yang terdeteksi."]
        );
    }

    #[test]
    fn server_error_reverts_panels_to_placeholders() {
        let mut state = AnalyzerState::new();
        select(&mut state, "scan.png");
        state.begin_submit().unwrap();

        let body: crate::ErrorBody = serde_json::from_str(r#"{"error":"bad file"}"#).unwrap();
        state.finish_submit(Err(ProcessError::from_server(400, "BAD REQUEST", body.error)));

        assert_eq!(state.error.as_deref(), Some("Terjadi kesalahan: bad file."));
        assert_eq!(state.detections, DetectionList::Failed);
        for id in PanelId::iter() {
            assert_eq!(state.panels.get(id), PanelStatus::Placeholder);
        }
        assert!(!state.busy);
    }

    #[test]
    fn stale_draw_completions_are_ignored() {
        let mut state = AnalyzerState::new();
        select(&mut state, "scan.png");
        state.begin_submit().unwrap();
        let generation = state.generation();
        state.finish_submit(Ok(response(vec![detection("Nodule", 0.9)])));

        assert!(state.panel_drawn(generation, PanelId::Zoom));
        assert_eq!(state.panels.zoom, PanelStatus::Visible);

        select(&mut state, "other.png");
        assert!(!state.panel_drawn(generation, PanelId::Overlay));
        assert_eq!(state.panels.overlay, PanelStatus::Cleared);
    }

    #[test]
    fn draw_ticket_expires_on_new_selection_or_submit() {
        let mut state = AnalyzerState::new();
        select(&mut state, "first.png");
        state.begin_submit().unwrap();
        state.finish_submit(Ok(response(vec![detection("Nodule", 0.9)])));

        let ticket = state.draw_ticket();
        assert!(ticket.is_current());
        assert_eq!(ticket.generation(), state.generation());

        state.begin_submit().unwrap();
        assert!(!ticket.is_current());

        let second = state.draw_ticket();
        select(&mut state, "second.png");
        assert!(!second.is_current());
    }

    #[test]
    fn cloned_state_shares_draw_generation() {
        let mut state = AnalyzerState::new();
        select(&mut state, "scan.png");
        let ticket = state.clone().draw_ticket();
        select(&mut state, "other.png");
        assert!(!ticket.is_current());
    }

    #[test]
    fn image_panels_are_not_canvas_drawn() {
        let mut state = AnalyzerState::new();
        select(&mut state, "scan.png");
        state.begin_submit().unwrap();
        let generation = state.generation();
        state.finish_submit(Ok(response(vec![])));
        assert!(!state.panel_drawn(generation, PanelId::Original));
    }
}
