use super::super::Model;
use super::utils::display;
use shared::{PanelId, PanelStatus};
use yew::prelude::*;

pub fn render_panels(model: &Model) -> Html {
    let panels = &model.state.panels;
    let result = model.state.result.as_deref();

    html! {
        <div class="image-grid">
            { image_panel(
                "Citra Asli",
                "originalImage",
                panels.get(PanelId::Original),
                result.map(|r| r.original_url()),
            ) }
            { image_panel(
                "Perbaikan Citra",
                "enhancedOnlyImage",
                panels.get(PanelId::Enhanced),
                result.map(|r| r.enhanced_url()),
            ) }
            { canvas_panel(
                "Perbaikan Citra & Deteksi",
                "processedWithDetectionsCanvas",
                panels.get(PanelId::Overlay),
                &model.overlay_canvas,
            ) }
            { canvas_panel(
                "Zoom Deteksi",
                "originalWithDetectionsCanvas",
                panels.get(PanelId::Zoom),
                &model.zoom_canvas,
            ) }
        </div>
    }
}

fn placeholder(id: &str, status: PanelStatus) -> Html {
    html! {
        <p
            id={format!("{}Placeholder", id)}
            class="image-placeholder"
            style={display(status.shows_placeholder())}
        >
            {"Citra akan ditampilkan di sini"}
        </p>
    }
}

fn image_panel(title: &str, id: &'static str, status: PanelStatus, src: Option<String>) -> Html {
    let visible = status.shows_content() && src.is_some();

    html! {
        <div class="image-card">
            <h3>{ title }</h3>
            { placeholder(id, status) }
            {
                if let Some(src) = src {
                    html! { <img id={id} src={src} alt={title.to_string()} style={display(visible)} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Canvases stay mounted so the draw tasks can reach them through their `NodeRef`.
fn canvas_panel(title: &str, id: &'static str, status: PanelStatus, node_ref: &NodeRef) -> Html {
    html! {
        <div class="image-card">
            <h3>{ title }</h3>
            { placeholder(id, status) }
            <canvas id={id} ref={node_ref.clone()} style={display(status.shows_content())}></canvas>
        </div>
    }
}
