use eframe::egui::{self, Ui, vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::kg::NodeKind;
use crate::util::truncate_label;

use super::super::ViewModel;
use super::super::viewer::kind_color;

const SEARCH_RESULT_LIMIT: usize = 20;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Search");
        ui.add_space(4.0);
        ui.text_edit_singleline(&mut self.search);

        let query = self.search.trim().to_owned();
        if !query.is_empty() {
            let matcher = SkimMatcherV2::default();
            let mut ranked = self
                .graph
                .nodes
                .iter()
                .filter_map(|node| {
                    let score = matcher
                        .fuzzy_match(&node.label, &query)
                        .or_else(|| matcher.fuzzy_match(&node.id, &query))?;
                    Some((score, node.id.clone(), node.label.clone(), node.kind))
                })
                .collect::<Vec<_>>();
            ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
            ranked.truncate(SEARCH_RESULT_LIMIT);

            ui.add_space(4.0);
            if ranked.is_empty() {
                ui.small("no matches");
            }

            let mut focus = None;
            for (_score, id, label, kind) in ranked {
                let row = format!("{}  ({})", truncate_label(&label, 28), kind.label());
                let is_selected = self.selected.as_deref() == Some(id.as_str());
                if ui.selectable_label(is_selected, row).clicked() {
                    focus = Some(id);
                }
            }
            if let Some(id) = focus {
                self.focus_on(id);
            }
        }

        ui.separator();
        ui.heading("View");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Zoom in").clicked() {
                self.viewer.zoom_in();
            }
            if ui.button("Zoom out").clicked() {
                self.viewer.zoom_out();
            }
        });
        ui.horizontal(|ui| {
            if ui.button("Reset view").clicked() {
                self.viewer.reset_view(&self.graph);
            }
            if ui.button("Center graph").clicked() {
                self.viewer.center_graph(&self.graph);
            }
        });

        ui.separator();
        ui.heading("Legend");
        ui.add_space(4.0);
        let counts = self.graph.kind_counts();
        for kind in NodeKind::ALL {
            let Some(count) = counts.get(&kind).copied() else {
                continue;
            };
            ui.horizontal(|ui| {
                let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter().circle_filled(swatch.center(), 5.0, kind_color(kind));
                ui.label(format!("{} ({count})", kind.label()));
            });
        }
    }
}
