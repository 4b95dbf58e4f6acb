use eframe::egui::{RichText, ScrollArea, Ui};

use crate::util::truncate_label;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Selection");
        ui.add_space(6.0);

        let Some(selected_id) = self.selected.clone() else {
            ui.label("Click a node in the graph or a search result.");
            return;
        };

        let Some(node) = self.graph.node(&selected_id) else {
            ui.label("Selected node is not part of the current graph.");
            return;
        };

        let label = node.label.clone();
        let kind = node.kind;
        let size = node.size;
        let position = (node.x, node.y);

        ui.label(RichText::new(label).strong());
        ui.small(selected_id.as_str());
        ui.add_space(6.0);
        ui.label(format!("kind: {}", kind.label()));
        ui.label(format!("radius: {size:.1}"));
        ui.label(format!("position: ({:.0}, {:.0})", position.0, position.1));

        ui.separator();
        ui.label(RichText::new("Neighbors").strong());

        let neighbors = self
            .graph
            .neighbors(&selected_id)
            .into_iter()
            .map(|neighbor| (neighbor.id.clone(), neighbor.label.clone(), neighbor.kind))
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            ui.label("No connected nodes.");
            return;
        }

        ui.small(format!("{} connected", neighbors.len()));
        let mut focus = None;
        ScrollArea::vertical().show(ui, |ui| {
            for (id, label, kind) in neighbors {
                let row = format!("{}  ({})", truncate_label(&label, 28), kind.label());
                if ui.selectable_label(false, row).clicked() {
                    focus = Some(id);
                }
            }
        });
        if let Some(id) = focus {
            self.focus_on(id);
        }
    }
}
