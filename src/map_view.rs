pub mod bindings;
pub mod icons;
pub mod layers;

use std::{cell::RefCell, rc::Rc};

use gloo_utils::document;
use leaflet::{Icon, LatLng, Map};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{HtmlElement, Node};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use self::{
    bindings::{ClickEvent, MapSurface, PointMarker},
    icons::MarkerIcon,
    layers::TileSource,
};
use crate::models::{Coordinates, Point};

/// Where the map opens. It never moves to fit the plotted points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: Coordinates,
    pub zoom: f64,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub points: Vec<Point>,
    pub viewport: Viewport,
    pub icon: MarkerIcon,
    pub tiles: TileSource,
    /// Fired with the clicked position, rounded to six decimals.
    #[prop_or_default]
    pub on_click: Callback<Coordinates>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
}

type ClickTarget = Rc<RefCell<Callback<Coordinates>>>;

struct LeafletHandle {
    map: Map,
    container: HtmlElement,
    icon: Icon,
    markers: RefCell<Vec<PointMarker>>,
    _on_click: Closure<dyn FnMut(ClickEvent)>,
}

impl LeafletHandle {
    fn create(props: &Props, click_target: ClickTarget) -> Result<Self, JsValue> {
        // Leaflet draws into a detached element that yew then mounts as a VRef.
        let container: HtmlElement = document().create_element("div")?.dyn_into()?;
        container.set_class_name("map");

        let map = Map::new_with_element(&container, &JsValue::NULL);
        let center = props.viewport.center;
        map.setView(&LatLng::new(center.lat, center.lng), props.viewport.zoom);
        props.tiles.layer()?.addTo(&map);

        let on_click = Closure::<dyn FnMut(ClickEvent)>::new(move |event: ClickEvent| {
            let position = event.latlng();
            let at = Coordinates::rounded(position.lat(), position.lng());
            let callback = click_target.borrow().clone();
            callback.emit(at);
        });
        map.unchecked_ref::<MapSurface>()
            .on("click", on_click.as_ref());

        Ok(Self {
            map,
            container,
            icon: props.icon.load()?,
            markers: RefCell::new(Vec::new()),
            _on_click: on_click,
        })
    }

    fn surface(&self) -> &MapSurface {
        self.map.unchecked_ref()
    }

    /// Replaces every marker with one per point, each with a name popup.
    fn show_points(&self, points: &[Point]) {
        let mut markers = self.markers.borrow_mut();
        for marker in markers.drain(..) {
            marker.detach();
        }
        for point in points {
            let marker = bindings::point_marker(&LatLng::new(point.latitude, point.longitude));
            marker.set_icon(&self.icon);
            marker.bind_popup(&point.name);
            marker.add_to(&self.map);
            markers.push(marker);
        }
    }
}

#[function_component]
pub fn MapComponent(props: &Props) -> Html {
    let click_target = use_mut_ref(Callback::<Coordinates>::default);
    *click_target.borrow_mut() = props.on_click.clone();

    let leaflet = use_state({
        let click_target = click_target.clone();
        move || match LeafletHandle::create(props, click_target) {
            Ok(handle) => Some(Rc::new(handle)),
            Err(why) => {
                log::error!("Could not set up the map: {why:?}");
                None
            }
        }
    });

    {
        let leaflet = (*leaflet).clone();
        use_effect_once(move || {
            // The container only gets its real size once mounted.
            if let Some(handle) = &leaflet {
                handle.surface().invalidate_size();
            }
            move || {
                if let Some(handle) = leaflet {
                    handle.surface().destroy();
                }
            }
        });
    }

    {
        let leaflet = (*leaflet).clone();
        use_effect_with_deps(
            move |points: &Vec<Point>| {
                if let Some(handle) = leaflet {
                    handle.show_points(points);
                }
                || ()
            },
            props.points.clone(),
        );
    }

    let Some(handle) = (*leaflet).clone() else {
        return html! {
            <div class={classes!("map-container", props.class.clone())} style={&props.style}>
                {"Não foi possível carregar o mapa."}
            </div>
        };
    };

    let node: Node = handle.container.clone().into();
    html! {
        <div class={classes!("map-container", props.class.clone())} style={&props.style}>
            {Html::VRef(node)}
        </div>
    }
}
