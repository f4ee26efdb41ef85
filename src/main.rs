mod api;
mod config;
mod detail;
mod dialog;
mod listing;
mod map_view;
mod models;
mod router;
#[cfg(test)]
mod testing;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config::AppConfig,
    router::{switch, Route},
};

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(|| {
        let config = AppConfig::default();
        log::info!("Talking to {}", config.api.base());
        config
    });

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}
