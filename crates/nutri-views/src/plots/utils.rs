//! Utilities for plot views

pub mod colors;
pub mod stats;

// Re-export commonly used items
pub use colors::{light_palette, GREEN, LIGHT_GREEN_GRAY, DENSITY_COLOR};
pub use stats::{calculate_quartiles, median, mean, BoxStats};

/// Tick label for a categorical axis where category `i` sits at x = i.
///
/// Positions between categories get no label.
pub fn category_tick_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tick_label() {
        let labels = vec!["Hot".to_string(), "Iced".to_string()];
        assert_eq!(category_tick_label(&labels, 0.0), "Hot");
        assert_eq!(category_tick_label(&labels, 1.0), "Iced");
        assert_eq!(category_tick_label(&labels, 0.5), "");
        assert_eq!(category_tick_label(&labels, 2.0), "");
        assert_eq!(category_tick_label(&labels, -1.0), "");
    }
}
