use eframe::egui::{Color32, Stroke};

use crate::kg::NodeKind;

pub const EDGE_BASE_WIDTH: f32 = 1.0;
pub const EDGE_WIDTH_SCALE: f32 = 2.5;
pub const HIGHLIGHT_SCALE: f32 = 1.2;
pub const HALO_SCALE: f32 = 1.6;
pub const LABEL_FONT_BASE: f32 = 12.0;
pub const LABEL_FONT_FLOOR: f32 = 10.0;

pub fn kind_color(kind: NodeKind) -> Color32 {
    match kind {
        NodeKind::Gene => Color32::from_rgb(74, 222, 128),
        NodeKind::Drug => Color32::from_rgb(251, 146, 60),
        NodeKind::Disease => Color32::from_rgb(248, 113, 113),
        NodeKind::Protein => Color32::from_rgb(96, 165, 250),
        NodeKind::Pathway => Color32::from_rgb(167, 139, 250),
        NodeKind::Organism => Color32::from_rgb(45, 212, 191),
        NodeKind::Unknown => Color32::from_rgb(148, 163, 184),
    }
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub fn lighten(color: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let lift = |channel: u8| {
        (channel as f32 + (255.0 - channel as f32) * amount) as u8
    };
    Color32::from_rgb(lift(color.r()), lift(color.g()), lift(color.b()))
}

/// Heavier weights read as thicker and more opaque lines.
pub fn edge_stroke(weight: f32) -> Stroke {
    let weight = weight.clamp(0.0, 1.0);
    let alpha = (90.0 + weight * 140.0) as u8;
    Stroke::new(
        EDGE_BASE_WIDTH + weight * EDGE_WIDTH_SCALE,
        Color32::from_rgba_unmultiplied(148, 163, 184, alpha),
    )
}

/// Label size tracks zoom but never shrinks below the legibility floor.
pub fn label_font_size(zoom: f32) -> f32 {
    (LABEL_FONT_BASE * zoom).max(LABEL_FONT_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_stroke_grows_with_weight() {
        let weak = edge_stroke(0.1);
        let strong = edge_stroke(0.9);
        assert!(strong.width > weak.width);
        assert!(strong.color.a() > weak.color.a());
    }

    #[test]
    fn edge_stroke_tolerates_out_of_range_weights() {
        assert_eq!(edge_stroke(7.5).width, edge_stroke(1.0).width);
        assert_eq!(edge_stroke(-2.0).width, edge_stroke(0.0).width);
    }

    #[test]
    fn label_font_has_a_floor() {
        assert_eq!(label_font_size(0.2), LABEL_FONT_FLOOR);
        assert!(label_font_size(2.0) > LABEL_FONT_BASE);
    }

    #[test]
    fn lighten_moves_toward_white() {
        let base = kind_color(NodeKind::Protein);
        let light = lighten(base, 0.5);
        assert!(light.r() > base.r());
        assert_eq!(lighten(base, 1.0), Color32::from_rgb(255, 255, 255));
    }
}
