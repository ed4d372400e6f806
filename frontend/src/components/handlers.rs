use super::super::{Model, Msg};
use crate::api;
use crate::canvas::{self, DrawError};
use gloo_file::File as GlooFile;
use shared::{DrawTicket, PanelId, ProcessError, ProcessResponse};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

pub fn handle_navigate(model: &mut Model, key: &str) -> bool {
    model.state.navigate(key)
}

pub fn handle_file_changed(model: &mut Model, file: Option<GlooFile>) -> bool {
    let name = file.as_ref().map(|f| f.name());
    if let Some(name) = &name {
        log::info!("Selected file '{}'", name);
    }
    model.state.select_file(file, name);
    true
}

pub fn handle_process(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.state.begin_submit() {
        Ok(file) => {
            send_process_request(ctx, file);
        }
        Err(e) => {
            log::warn!("Process requested without a file: {}", e);
        }
    }
    true
}

pub fn send_process_request(ctx: &Context<Model>, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = api::upload_and_process(&file).await;
            link.send_message(Msg::ProcessFinished(outcome));
        }
    });
}

pub fn handle_process_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    outcome: Result<ProcessResponse, ProcessError>,
) -> bool {
    if let Some(response) = model.state.finish_submit(outcome) {
        log::info!(
            "Processing finished with {} detection(s)",
            response.detections.len()
        );
        spawn_panel_draws(model, ctx, response);
    }
    true
}

/// Starts the overlay and zoom draws. They run independently and report back
/// in whatever order their decodes finish.
fn spawn_panel_draws(model: &Model, ctx: &Context<Model>, response: Rc<ProcessResponse>) {
    let ticket = model.state.draw_ticket();

    spawn_local({
        let link = ctx.link().clone();
        let canvas_ref = model.overlay_canvas.clone();
        let ticket = ticket.clone();
        let src = response.processed_url();

        async move {
            let outcome = canvas::draw_overlay(&canvas_ref, &ticket, &src).await;
            report_draw(&link, &ticket, PanelId::Overlay, outcome);
        }
    });

    spawn_local({
        let link = ctx.link().clone();
        let canvas_ref = model.zoom_canvas.clone();
        let src = response.enhanced_url();

        async move {
            let outcome = canvas::draw_zoom(&canvas_ref, &ticket, &src, &response.detections).await;
            report_draw(&link, &ticket, PanelId::Zoom, outcome);
        }
    });
}

fn report_draw(
    link: &Scope<Model>,
    ticket: &DrawTicket,
    panel: PanelId,
    outcome: Result<(), DrawError>,
) {
    match outcome {
        Ok(()) => link.send_message(Msg::PanelDrawn(ticket.generation(), panel)),
        Err(DrawError::Superseded) => log::debug!("Skipped stale draw of {} panel", panel),
        Err(e) => log::error!("{} panel not drawn: {}", panel, e),
    }
}

pub fn handle_panel_drawn(model: &mut Model, generation: u64, panel: PanelId) -> bool {
    let shown = model.state.panel_drawn(generation, panel);
    if !shown {
        log::debug!("Dropped stale draw of {} panel", panel);
    }
    shown
}
