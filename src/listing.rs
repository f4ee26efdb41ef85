use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_effect_once;
use yew_router::prelude::*;

use crate::{
    api::ApiClient,
    config::AppConfig,
    models::{Map, MapId},
    router::Route,
};

pub async fn load_maps(api: &ApiClient) -> anyhow::Result<Vec<Map>> {
    log::info!("Loading maps");
    api.list_maps().await
}

/// Loads the list for display. A failure is only logged and yields `None`,
/// so the caller keeps whatever list it already shows.
pub async fn refresh_maps(api: &ApiClient) -> Option<Vec<Map>> {
    match load_maps(api).await {
        Ok(list) => Some(list),
        Err(why) => {
            log::warn!("Could not load maps: {why:#}");
            None
        }
    }
}

/// Creates a map. Blank names are ignored without touching the network;
/// the result says whether a create call went out and succeeded.
pub async fn create_map(api: &ApiClient, name: &str) -> anyhow::Result<bool> {
    if name.trim().is_empty() {
        return Ok(false);
    }
    api.create_map(name).await?;
    Ok(true)
}

/// The click handler of one card's "open" button.
pub fn card_opener(on_open: &Callback<MapId>, id: MapId) -> Callback<()> {
    on_open.reform(move |()| id)
}

#[function_component]
pub fn ListingScreen() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let maps = use_state(Vec::<Map>::new);
    let new_name = use_state(String::new);
    let navigator = use_navigator();

    {
        let api = config.api.clone();
        let maps = maps.clone();
        use_effect_once(move || {
            prokio::spawn_local(async move {
                if let Some(list) = refresh_maps(&api).await {
                    maps.set(list);
                }
            });
            || ()
        });
    }

    let oninput = {
        let new_name = new_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_name.set(input.value());
        })
    };

    let onsubmit = {
        let api = config.api.clone();
        let maps = maps.clone();
        let new_name = new_name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let maps = maps.clone();
            let new_name = new_name.clone();
            prokio::spawn_local(async move {
                match create_map(&api, &new_name).await {
                    Ok(true) => {
                        new_name.set(String::new());
                        if let Some(list) = refresh_maps(&api).await {
                            maps.set(list);
                        }
                    }
                    Ok(false) => {}
                    Err(why) => log::error!("Could not create map: {why:#}"),
                }
            });
        })
    };

    let on_open = Callback::from(move |id: MapId| match &navigator {
        Some(navigator) => navigator.push(&Route::Map { id }),
        None => log::error!("No router around the listing screen"),
    });

    html! {
        <div class="container-center">
            <header class="main-header">
                <h1>{"Mapas"}</h1>
                <p class="text-secondary">{"Crie um mapa e adicione lugares!"}</p>
            </header>

            <section class="create-section">
                <form {onsubmit} class="flex-gap">
                    <input
                        class="input-field no-margin"
                        value={(*new_name).clone()}
                        {oninput}
                        placeholder="Ex: Museus em SP, Restaurantes..."
                    />
                    <button type="submit" class="btn btn-primary">{" + Novo Mapa "}</button>
                </form>
            </section>

            <MapGrid maps={(*maps).clone()} {on_open} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MapGridProps {
    pub maps: Vec<Map>,
    pub on_open: Callback<MapId>,
}

#[function_component]
pub fn MapGrid(props: &MapGridProps) -> Html {
    if props.maps.is_empty() {
        return html! {
            <div class="card-grid">
                <div class="empty-message">{"Nenhum mapa encontrado."}</div>
            </div>
        };
    }

    let cards = props.maps.iter().map(|map| {
        let open = card_opener(&props.on_open, map.id).reform(|_: MouseEvent| ());
        html! {
            <div key={map.id} class="map-card">
                <div>
                    <h3>{&map.name}</h3>
                    <div class="map-card-info">{format!("Criado em: {}", map.created_on())}</div>
                </div>
                <div class="map-card-footer">
                    <span class="badge-count">{map.point_count_label()}</span>
                    <button onclick={open} class="btn btn-primary btn-sm">{"Abrir Mapa"}</button>
                </div>
            </div>
        }
    });

    html! {
        <div class="card-grid">
            { for cards }
        </div>
    }
}
