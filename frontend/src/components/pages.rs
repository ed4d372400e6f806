use super::super::Model;
use super::detection_list::render_detection_list;
use super::panels::render_panels;
use super::upload_section::render_upload_section;
use super::utils::{nav_callback, render_error_message};
use shared::Page;
use yew::prelude::*;

/// Every page stays mounted; only the active one carries the `active` class.
/// The canvases inside the processing page must exist before a result arrives.
pub fn render_pages(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <>
            { page_section(model, Page::Dashboard, render_dashboard(ctx)) }
            { page_section(model, Page::ImageProcessing, render_image_processing(model, ctx)) }
            { page_section(model, Page::About, render_about()) }
        </>
    }
}

fn page_section(model: &Model, page: Page, body: Html) -> Html {
    html! {
        <section
            id={page.element_id()}
            class={classes!("page", model.state.is_active(page).then_some("active"))}
        >
            { body }
        </section>
    }
}

fn render_dashboard(ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="dashboard">
            <h2>{"Selamat datang"}</h2>
            <p>{"Unggah citra X-ray paru (PNG, JPG atau DICOM) untuk melihat hasil perbaikan citra dan deteksi abnormalitas."}</p>
            <div class="button-container">
                <button
                    class="dashboard-action-button analyze-btn"
                    data-page="image-processing"
                    onclick={nav_callback(link, "image-processing")}
                >
                    <i class="fa-solid fa-upload"></i>{" Mulai Analisis"}
                </button>
                <button
                    class="dashboard-action-button analyze-btn"
                    data-page="about"
                    onclick={nav_callback(link, "about")}
                >
                    <i class="fa-solid fa-circle-info"></i>{" Tentang Aplikasi"}
                </button>
            </div>
        </div>
    }
}

fn render_image_processing(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <>
            { render_upload_section(model, ctx) }
            { render_error_message(model) }
            { render_panels(model) }
            { render_detection_list(model) }
        </>
    }
}

fn render_about() -> Html {
    html! {
        <div class="about">
            <h2>{"Tentang"}</h2>
            <p>{"Citra diproses di server: perbaikan kontras dan filter derau, lalu deteksi abnormalitas. Halaman ini hanya menampilkan hasilnya."}</p>
            <p>{"Hasil deteksi bukan diagnosis medis."}</p>
        </div>
    }
}
