use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context};

use crate::kg::{GraphData, demo_graph, load_graph_file};

mod ui;
mod viewer;

use viewer::{GraphViewer, ViewerEvent};

#[derive(Clone, Debug)]
pub enum GraphSource {
    File(PathBuf),
    Demo { seed: u64 },
}

impl GraphSource {
    fn load(&self) -> Result<GraphData, String> {
        match self {
            Self::File(path) => load_graph_file(path).map_err(|error| format!("{error:#}")),
            Self::Demo { seed } => Ok(demo_graph(*seed)),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Demo { seed } => format!("built-in demo (seed {seed})"),
        }
    }
}

pub struct KgViewApp {
    source: GraphSource,
    state: AppState,
    reload_rx: Option<Receiver<Result<GraphData, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<GraphData, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    graph: GraphData,
    viewer: GraphViewer,
    search: String,
    selected: Option<String>,
}

impl KgViewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, source: GraphSource) -> Self {
        let state = Self::start_load(source.clone());
        Self {
            source,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(source: GraphSource) -> Receiver<Result<GraphData, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(source.load());
        });

        rx
    }

    fn start_load(source: GraphSource) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(source),
        }
    }
}

impl eframe::App for KgViewApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(graph) => AppState::Ready(Box::new(ViewModel::new(graph))),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading knowledge graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
                ctx.request_repaint();
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load knowledge graph");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.source.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                let source_text = self.source.describe();
                model.show(ctx, &source_text, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.source.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(Ok(graph)) => model.replace_graph(graph),
                        Ok(Err(error)) => transition = Some(AppState::Error(error)),
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                            ctx.request_repaint();
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition = Some(AppState::Error(
                                "background load worker disconnected".to_owned(),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}

impl ViewModel {
    fn new(graph: GraphData) -> Self {
        Self {
            graph,
            viewer: GraphViewer::default(),
            search: String::new(),
            selected: None,
        }
    }

    /// Swap in a freshly loaded graph. View state survives; selection and
    /// hover are kept only while their ids still resolve.
    fn replace_graph(&mut self, graph: GraphData) {
        if self
            .selected
            .as_deref()
            .is_some_and(|id| !graph.contains(id))
        {
            self.selected = None;
        }
        self.viewer.graph_replaced(&graph);
        self.graph = graph;
    }

    fn set_selected(&mut self, selected: Option<String>) {
        self.selected = selected;
    }

    fn focus_on(&mut self, id: String) {
        if let Some(node) = self.graph.node(&id) {
            self.viewer.center_on_node(node);
        }
        self.set_selected(Some(id));
    }

    fn handle_viewer_events(&mut self, events: Vec<ViewerEvent>) {
        for event in events {
            match event {
                ViewerEvent::NodeClicked(id) => self.set_selected(Some(id)),
                ViewerEvent::BackgroundClicked => self.set_selected(None),
                ViewerEvent::HoverChanged(hovered) => {
                    if let Some(id) = hovered {
                        log::debug!("hover {id}");
                    }
                }
            }
        }
    }
}
