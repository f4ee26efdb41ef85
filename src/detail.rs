pub mod state;

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use self::state::{DetailAction, DetailState, Dialog};
use crate::{
    api::ApiClient,
    config::AppConfig,
    dialog::{ConfirmDialog, PromptDialog},
    map_view::MapComponent,
    models::{point_count_label, Coordinates, MapDetail, MapId, Point, PointId},
    router::Route,
};

// Every confirmed dialog is followed by a full reload of the map. Nothing is
// applied optimistically and overlapping reloads land in arrival order.

pub async fn load_detail(api: &ApiClient, map: MapId) -> anyhow::Result<MapDetail> {
    log::info!("Loading map {map}");
    api.map_detail(map).await
}

/// Loads the map for display; a failure is logged and yields `None`.
pub async fn refresh_detail(api: &ApiClient, map: MapId) -> Option<MapDetail> {
    match load_detail(api, map).await {
        Ok(detail) => Some(detail),
        Err(why) => {
            log::error!("Could not load map {map}: {why:#}");
            None
        }
    }
}

/// The new name to send, if the rename dialog's answer warrants a call at all.
pub fn rename_target<'a>(current: &str, answer: &'a str) -> Option<&'a str> {
    Some(answer).filter(|name| !name.trim().is_empty() && *name != current)
}

/// Sends the change a confirmed dialog asks for. Returns whether anything was
/// sent; the caller reloads the map afterwards.
pub async fn confirm(api: &ApiClient, map: MapId, dialog: &Dialog) -> anyhow::Result<bool> {
    match dialog {
        Dialog::Closed => return Ok(false),
        Dialog::NewPoint(draft) => api.create_point(map, &draft.name, draft.position).await?,
        Dialog::Rename { point, current, input } => {
            let Some(name) = rename_target(current, input) else {
                return Ok(false);
            };
            api.rename_point(*point, name).await?
        }
        Dialog::DeletePoint(point) => api.delete_point(*point).await?,
        Dialog::ClearPoints => api.clear_points(map).await?,
    }
    Ok(true)
}

fn failure_label(dialog: &Dialog) -> &'static str {
    match dialog {
        Dialog::Closed => "do nothing",
        Dialog::NewPoint(_) => "save the point",
        Dialog::Rename { .. } => "rename the point",
        Dialog::DeletePoint(_) => "delete the point",
        Dialog::ClearPoints => "clear the map",
    }
}

fn spawn_reload(api: Rc<ApiClient>, map: MapId, dispatcher: UseReducerDispatcher<DetailState>) {
    prokio::spawn_local(async move {
        if let Some(detail) = refresh_detail(&api, map).await {
            dispatcher.dispatch(DetailAction::Loaded(detail));
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct DetailProps {
    pub id: MapId,
}

#[function_component]
pub fn DetailScreen(props: &DetailProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let state = use_reducer_eq(DetailState::default);
    let id = props.id;

    {
        let api = config.api.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |id: &MapId| {
                spawn_reload(api, *id, dispatcher);
                || ()
            },
            id,
        );
    }

    let on_map_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |at: Coordinates| dispatcher.dispatch(DetailAction::MapClicked(at)))
    };
    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |text: String| dispatcher.dispatch(DetailAction::Input(text)))
    };
    let on_cancel = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DetailAction::Close))
    };
    let on_rename = {
        let dispatcher = state.dispatcher();
        Callback::from(move |point: Point| dispatcher.dispatch(DetailAction::StartRename(point)))
    };
    let on_delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |point: PointId| dispatcher.dispatch(DetailAction::AskDelete(point)))
    };
    let on_clear = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DetailAction::AskClear))
    };

    let on_confirm = {
        let api = config.api.clone();
        let dispatcher = state.dispatcher();
        let dialog = state.dialog.clone();
        Callback::from(move |_: ()| {
            let dialog = dialog.clone();
            // The new-point dialog stays up until its create call went through.
            if !matches!(dialog, Dialog::NewPoint(_)) {
                dispatcher.dispatch(DetailAction::Close);
            }
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            prokio::spawn_local(async move {
                match confirm(&api, id, &dialog).await {
                    Ok(true) => {
                        if let Dialog::NewPoint(draft) = &dialog {
                            dispatcher.dispatch(DetailAction::PointSaved(draft.position));
                        }
                        spawn_reload(api, id, dispatcher);
                    }
                    Ok(false) => {}
                    Err(why) => log::error!("Could not {}: {why:#}", failure_label(&dialog)),
                }
            });
        })
    };

    let dialog = match &state.dialog {
        Dialog::Closed => html!(),
        Dialog::NewPoint(draft) => html! {
            <PromptDialog
                title="Novo Ponto"
                hint="De um nome para o ponto"
                detail={Some(AttrValue::from(draft.position.to_string()))}
                value={draft.name.clone()}
                on_input={on_input.clone()}
                on_confirm={on_confirm.clone()}
                on_cancel={on_cancel.clone()}
            />
        },
        Dialog::Rename { input, .. } => html! {
            <PromptDialog
                title="Novo nome do ponto"
                value={input.clone()}
                on_input={on_input.clone()}
                on_confirm={on_confirm.clone()}
                on_cancel={on_cancel.clone()}
            />
        },
        Dialog::DeletePoint(_) => html! {
            <ConfirmDialog
                message="Excluir este ponto?"
                on_confirm={on_confirm.clone()}
                on_cancel={on_cancel.clone()}
            />
        },
        Dialog::ClearPoints => html! {
            <ConfirmDialog
                message="Excluir TODOS os pontos deste mapa?"
                confirm_label="Limpar"
                on_confirm={on_confirm.clone()}
                on_cancel={on_cancel.clone()}
            />
        },
    };

    html! {
        <div class="dashboard-container">
            <header class="header">
                <div class="flex-align">
                    <Link<Route> to={Route::Listing} classes={classes!("btn-back")}>{"← Voltar"}</Link<Route>>
                    <span class="map-title">{state.title()}</span>
                </div>
                <div class="flex-align gap-20">
                    <span class="badge">{format!("📍 {} Pontos", state.points.len())}</span>
                    <button onclick={on_clear} class="btn btn-outline-danger">{"Limpar Mapa"}</button>
                </div>
            </header>

            <main class="main-content">
                <div class="map-wrapper">
                    <MapComponent
                        points={state.points.clone()}
                        viewport={config.viewport}
                        icon={config.marker_icon.clone()}
                        tiles={config.tiles.clone()}
                        on_click={on_map_click}
                        style="height: 100%; width: 100%; min-height: 100%;"
                    />
                </div>
                <PointList points={state.points.clone()} {on_rename} {on_delete} />
            </main>

            {dialog}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PointListProps {
    pub points: Vec<Point>,
    pub on_rename: Callback<Point>,
    pub on_delete: Callback<PointId>,
}

/// Sidebar mirroring the markers, with per-point rename and delete.
#[function_component]
pub fn PointList(props: &PointListProps) -> Html {
    let cards = props.points.iter().map(|point| {
        let rename = {
            let point = point.clone();
            props.on_rename.reform(move |_: MouseEvent| point.clone())
        };
        let id = point.id;
        let delete = props.on_delete.reform(move |_: MouseEvent| id);
        html! {
            <div key={point.id} class="point-card">
                <div>
                    <div class="point-name">{&point.name}</div>
                    <div class="point-coords">{point.position().to_string()}</div>
                </div>
                <div class="flex-gap-8">
                    <button onclick={rename} class="btn-icon" title="Renomear">{"✏️"}</button>
                    <button onclick={delete} class="btn-icon btn-delete" title="Excluir">{"🗑️"}</button>
                </div>
            </div>
        }
    });

    html! {
        <aside class="sidebar">
            <h2>{"Pontos no Mapa"}</h2>
            <span class="text-secondary small">{point_count_label(props.points.len() as u64)}</span>
            if props.points.is_empty() {
                <p class="text-secondary">{"Clique no mapa para adicionar pontos."}</p>
            }
            { for cards }
        </aside>
    }
}
