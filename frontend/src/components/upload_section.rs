use super::super::{Model, Msg};
use super::utils::display;
use crate::config::ACCEPTED_TYPES;
use gloo_file::File as GlooFile;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input
            .files()
            .and_then(|files| files.item(0))
            .map(GlooFile::from);
        Msg::FileChanged(file)
    });

    let trigger_file_input = Callback::from(|_: MouseEvent| {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("imageUpload"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <div class="upload-section">
            <input
                type="file"
                id="imageUpload"
                accept={ACCEPTED_TYPES}
                style="display: none;"
                onchange={handle_change}
            />

            <button id="upload-button" class="analyze-btn" onclick={trigger_file_input}>
                <i class="fa-solid fa-folder-open"></i>{" Pilih Citra"}
            </button>
            <span id="fileNameDisplay" class="file-name">{ &model.state.file_label }</span>

            <button
                id="processButton"
                class="analyze-btn"
                onclick={link.callback(|_| Msg::Process)}
                disabled={!model.state.can_submit()}
            >
                { render_process_button_content(model) }
            </button>

            <div id="loadingSpinner" class="loading-spinner" style={display(model.state.busy)}>
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            </div>
        </div>
    }
}

fn render_process_button_content(model: &Model) -> Html {
    if model.state.busy {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Memproses..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Proses Citra"}</> }
    }
}
