use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-lungs"></i> {" Analisis Citra X-Ray Paru"}</h1>
            <p class="subtitle">{"Perbaikan citra dan deteksi abnormalitas"}</p>
        </header>
    }
}
