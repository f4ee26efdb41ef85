use yew::prelude::*;
use yew_router::prelude::*;

use crate::{detail::DetailScreen, listing::ListingScreen, models::MapId};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Listing,
    #[at("/mapa/:id")]
    Map { id: MapId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Listing => html! { <ListingScreen /> },
        Route::Map { id } => html! { <DetailScreen {id} /> },
        Route::NotFound => html! {
            <div class="container-center">
                <p class="empty-message">{"Página não encontrada."}</p>
                <Link<Route> to={Route::Listing}>{"← Voltar"}</Link<Route>>
            </div>
        },
    }
}
