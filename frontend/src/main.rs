mod api;
mod canvas;
mod components;
mod config;

use components::handlers;
use components::header::render_header;
use components::navbar::render_navbar;
use components::pages::render_pages;
use gloo_file::File as GlooFile;
use shared::{AnalyzerState, PanelId, ProcessError, ProcessResponse};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Navigation
    Navigate(String),

    // File operations
    FileChanged(Option<GlooFile>),

    // Analysis operations
    Process,
    ProcessFinished(Result<ProcessResponse, ProcessError>),
    PanelDrawn(u64, PanelId),
}

// Main component
pub struct Model {
    state: AnalyzerState<GlooFile>,
    overlay_canvas: NodeRef,
    zoom_canvas: NodeRef,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        log::info!("Showing default page '{}'", shared::Page::DEFAULT.element_id());
        Self {
            state: AnalyzerState::new(),
            overlay_canvas: NodeRef::default(),
            zoom_canvas: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(key) => handlers::handle_navigate(self, &key),

            Msg::FileChanged(file) => handlers::handle_file_changed(self, file),

            Msg::Process => handlers::handle_process(self, ctx),
            Msg::ProcessFinished(outcome) => handlers::handle_process_finished(self, ctx, outcome),
            Msg::PanelDrawn(generation, panel) => {
                handlers::handle_panel_drawn(self, generation, panel)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }
                { render_navbar(self, ctx) }

                <main class="main-content">
                    { render_pages(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Analisis Citra X-Ray Paru | Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting, backend at {}", config::BACKEND_URL);
    yew::Renderer::<Model>::new().render();
}
