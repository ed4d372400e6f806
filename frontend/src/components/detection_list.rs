use super::super::Model;
use yew::prelude::*;

pub fn render_detection_list(model: &Model) -> Html {
    html! {
        <div class="detection-results">
            <h3>{"Hasil Deteksi"}</h3>
            <ul id="detectionList">
                { for model.state.detections.lines().into_iter().map(|line| html! { <li>{ line }</li> }) }
            </ul>
        </div>
    }
}
