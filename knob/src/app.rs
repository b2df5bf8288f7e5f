mod subscription;
mod update;
mod view;

use std::rc::Rc;

use iced::{Element, Subscription, Task, Theme};
use knob_model::ecs::SelectionController;
use knob_model::graph::Selection;
use knob_ui_controls::radio::{RadioButton, RadioEvent};
use knob_ui_tree::property::{
    EcsPropertyTree, EcsSelection, GraphPropertyTree, GraphSelection,
    PropertyTreeEvent,
};

use crate::scene::Scene;
use crate::settings::{self, InspectorKind, SettingsData, SettingsStore};
use crate::widgets::controls::{ControlsEvent, ControlsPanel};
use crate::widgets::selection::SelectionEvent;

pub(crate) const WINDOW_WIDTH: f32 = 1040.0;
pub(crate) const WINDOW_HEIGHT: f32 = 640.0;

/// Messages of the inspector window.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    Selection(SelectionEvent),
    Inspector {
        kind: InspectorKind,
        event: RadioEvent,
    },
    EcsTree(PropertyTreeEvent),
    GraphTree(PropertyTreeEvent),
    Controls(ControlsEvent),
    Keyboard(iced::keyboard::Event),
    Pointer(iced::mouse::Event),
    Window(iced::window::Event),
}

pub(crate) struct App {
    store: SettingsStore,
    settings: SettingsData,
    scene: Scene,
    controller: Rc<SelectionController>,
    selection: Rc<Selection>,
    ecs_tree: EcsPropertyTree,
    graph_tree: GraphPropertyTree,
    inspectors: Vec<(InspectorKind, RadioButton)>,
    controls: ControlsPanel,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let store = SettingsStore::user();
        let settings = settings::load_initial_settings(&store);
        let controller = Rc::new(SelectionController::new());
        let selection = Rc::new(Selection::new());

        let mut ecs_tree = EcsPropertyTree::new(
            EcsSelection::new(Rc::clone(&controller)),
            settings.field(),
        );
        ecs_tree.connect();
        let mut graph_tree = GraphPropertyTree::new(
            GraphSelection::new(Rc::clone(&selection)),
            settings.field(),
        );
        graph_tree.connect();

        let inspectors = InspectorKind::ALL
            .into_iter()
            .map(|kind| {
                let radio = RadioButton::new(kind.label())
                    .with_checked(kind == settings.inspector());
                (kind, radio)
            })
            .collect();

        let app = App {
            store,
            settings,
            scene: Scene::demo(),
            controller,
            selection,
            ecs_tree,
            graph_tree,
            inspectors,
            controls: ControlsPanel::default(),
        };

        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        String::from("knob inspector")
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }
}
