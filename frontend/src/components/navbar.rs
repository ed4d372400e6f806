use super::super::Model;
use super::utils::nav_callback;
use shared::Page;
use strum::IntoEnumIterator;
use yew::prelude::*;

pub fn render_navbar(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <nav class="navbar">
            <ul class="nav-links">
                { for Page::iter().map(|page| {
                    let key = page.nav_key();
                    html! {
                        <li>
                            <a
                                href="#"
                                class={classes!("nav-link", model.state.is_active(page).then_some("active"))}
                                data-page={key}
                                onclick={nav_callback(link, key)}
                            >
                                { page.to_string() }
                            </a>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
