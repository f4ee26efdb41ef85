use std::rc::Rc;

use yew::Reducible;

use crate::models::{Coordinates, Map, MapDetail, Point, PointId};

/// A point the user clicked on but hasn't named yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointDraft {
    pub name: String,
    pub position: Coordinates,
}

impl PointDraft {
    pub fn at(position: Coordinates) -> Self {
        Self {
            name: String::new(),
            position,
        }
    }
}

/// The one dialog that may be open over the detail screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Dialog {
    #[default]
    Closed,
    NewPoint(PointDraft),
    Rename {
        point: PointId,
        current: String,
        input: String,
    },
    DeletePoint(PointId),
    ClearPoints,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub map: Option<Map>,
    pub points: Vec<Point>,
    pub dialog: Dialog,
}

pub enum DetailAction {
    /// A fresh `GET /mapas/{id}` answer; replaces map and points wholesale.
    Loaded(MapDetail),
    MapClicked(Coordinates),
    /// Text typed into whichever dialog has an input.
    Input(String),
    StartRename(Point),
    AskDelete(PointId),
    AskClear,
    Close,
    /// The point drafted at this position was created. Closes the new-point
    /// dialog if it is still the one showing that draft.
    PointSaved(Coordinates),
}

impl Reducible for DetailState {
    type Action = DetailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DetailAction::Loaded(detail) => {
                next.map = detail.map;
                next.points = detail.points;
            }
            DetailAction::MapClicked(at) => next.dialog = Dialog::NewPoint(PointDraft::at(at)),
            DetailAction::Input(text) => match &mut next.dialog {
                Dialog::NewPoint(draft) => draft.name = text,
                Dialog::Rename { input, .. } => *input = text,
                _ => return self,
            },
            DetailAction::StartRename(point) => {
                next.dialog = Dialog::Rename {
                    point: point.id,
                    input: point.name.clone(),
                    current: point.name,
                }
            }
            DetailAction::AskDelete(id) => next.dialog = Dialog::DeletePoint(id),
            DetailAction::AskClear => next.dialog = Dialog::ClearPoints,
            DetailAction::Close => next.dialog = Dialog::Closed,
            DetailAction::PointSaved(at) => match &next.dialog {
                Dialog::NewPoint(draft) if draft.position == at => next.dialog = Dialog::Closed,
                _ => return self,
            },
        }
        next.into()
    }
}

impl DetailState {
    pub fn title(&self) -> &str {
        self.map.as_ref().map(|map| map.name.as_str()).unwrap_or_default()
    }
}
