use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }

    let kept = label
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    format!("{kept}\u{2026}")
}

/// Deterministic pseudo-random pair in [-1, 1] derived from an id.
pub fn stable_pair(id: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    let x = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let y = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    ((x * 2.0) - 1.0, (y * 2.0) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_label_keeps_short_strings() {
        assert_eq!(truncate_label("TP53", 8), "TP53");
    }

    #[test]
    fn truncate_label_appends_ellipsis() {
        let out = truncate_label("acetylsalicylic acid", 8);
        assert_eq!(out.chars().count(), 8);
        assert!(out.ends_with('\u{2026}'));
    }

    #[test]
    fn stable_pair_is_bounded_and_deterministic() {
        for id in ["tp53", "il6", "aspirin", ""] {
            let (x, y) = stable_pair(id);
            assert!((-1.0..=1.0).contains(&x));
            assert!((-1.0..=1.0).contains(&y));
            assert_eq!(stable_pair(id), (x, y));
        }
    }
}
