use eframe::egui::{self, Align, Context, Layout};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        source_text: &str,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("biokg-view");
                    ui.separator();
                    ui.label(self.graph.name.as_str());
                    ui.label(format!("source: {source_text}"));
                    ui.label(format!("nodes: {}", self.graph.node_count()));
                    ui.label(format!("edges: {}", self.graph.edge_count()));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload graph"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("zoom {:.0}%", self.viewer.zoom() * 100.0));
                        if let Some(hovered) = self.viewer.hovered()
                            && let Some(node) = self.graph.node(hovered)
                        {
                            ui.label(format!("{} ({})", node.label, node.kind.label()));
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Reloading knowledge graph...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                let events = self
                    .viewer
                    .show(ui, &self.graph, self.selected.as_deref());
                self.handle_viewer_events(events);
            }
        });
    }
}
