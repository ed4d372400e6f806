use super::super::{Model, Msg};
use yew::html::Scope;
use yew::prelude::*;

/// Inline `display` rule for elements that are toggled rather than unmounted.
pub fn display(visible: bool) -> &'static str {
    if visible { "display: block;" } else { "display: none;" }
}

/// Click handler for anything carrying a navigation key.
pub fn nav_callback(link: &Scope<Model>, key: &'static str) -> Callback<MouseEvent> {
    link.callback(move |e: MouseEvent| {
        e.prevent_default();
        Msg::Navigate(key.to_string())
    })
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = &model.state.error {
        html! {
            <div id="errorMessage" class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
