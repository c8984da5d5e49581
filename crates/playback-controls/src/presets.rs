use playback_controls_types::{PresetRate, RateMenuItem};

use crate::tolerance::{RATE_EPSILON, nearly_equal};

/// Speed presets in display order.
pub static PRESET_RATES: [PresetRate; 5] = [
    PresetRate { value: 0.25, label: ".25x" },
    PresetRate { value: 0.5, label: ".5x" },
    PresetRate { value: 0.75, label: ".75x" },
    PresetRate { value: 1.0, label: "1x" },
    PresetRate { value: 2.0, label: "2x" },
];

/// Index into [`PRESET_RATES`] returned when a rate matches no preset.
pub const FALLBACK_PRESET_INDEX: usize = 1;

/// Entries of the speed menu, in the order they are offered.
pub static RATE_MENU: [RateMenuItem; 5] = [
    RateMenuItem { label: ".25x", value: 0.25 },
    RateMenuItem { label: ".5x", value: 0.5 },
    RateMenuItem { label: ".75x", value: 0.75 },
    RateMenuItem { label: "1.0x", value: 1.0 },
    RateMenuItem { label: "2.0x", value: 2.0 },
];

/// First preset whose value is nearly equal to `rate`, if any.
pub fn match_preset(rate: f64) -> Option<&'static PresetRate> {
    PRESET_RATES
        .iter()
        .find(|preset| nearly_equal(rate, preset.value, RATE_EPSILON))
}

/// Resolve `rate` to the preset shown on the speed button.
///
/// This is not a nearest-neighbour search: a rate that matches no preset
/// within [`RATE_EPSILON`] resolves to the fixed fallback (`.5x`).
pub fn nearest_preset_label(rate: f64) -> &'static PresetRate {
    match match_preset(rate) {
        Some(preset) => preset,
        None => {
            let fallback = &PRESET_RATES[FALLBACK_PRESET_INDEX];
            tracing::debug!(rate, fallback = fallback.label, "rate matches no preset");
            fallback
        }
    }
}

/// Text of the speed menu button for `rate`.
pub fn speed_button_label(rate: f64) -> String {
    format!("Speed {}", nearest_preset_label(rate).label)
}

/// Look up a menu entry by its label, e.g. `"1.0x"`.
pub fn menu_item(label: &str) -> Option<&'static RateMenuItem> {
    RATE_MENU.iter().find(|item| item.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_resolves_to_itself() {
        for preset in &PRESET_RATES {
            assert_eq!(nearest_preset_label(preset.value), preset);
        }
    }

    #[test]
    fn half_speed_is_an_exact_match() {
        assert_eq!(match_preset(0.5), Some(&PRESET_RATES[1]));
        let preset = nearest_preset_label(0.5);
        assert_eq!(preset.value, 0.5);
        assert_eq!(preset.label, ".5x");
    }

    #[test]
    fn unmatched_rate_uses_fixed_fallback() {
        assert_eq!(match_preset(3.0), None);
        let preset = nearest_preset_label(3.0);
        assert_eq!(preset.value, 0.5);
        assert_eq!(preset.label, ".5x");
    }

    #[test]
    fn fallback_is_not_nearest_neighbour() {
        // 1.9 is closest to 2x but outside the tolerance
        assert_eq!(nearest_preset_label(1.9).label, ".5x");
    }

    #[test]
    fn rounding_noise_still_matches() {
        assert_eq!(nearest_preset_label(0.1 + 0.2 + 0.45).label, ".75x");
        assert_eq!(nearest_preset_label(1.0004).label, "1x");
        assert_eq!(nearest_preset_label(0.2501).label, ".25x");
    }

    #[test]
    fn non_finite_rates_fall_back() {
        assert_eq!(nearest_preset_label(f64::NAN).label, ".5x");
        assert_eq!(nearest_preset_label(f64::INFINITY).label, ".5x");
        assert_eq!(nearest_preset_label(f64::NEG_INFINITY).label, ".5x");
        assert_eq!(nearest_preset_label(0.0).label, ".5x");
    }

    #[test]
    fn resolution_is_repeatable() {
        for rate in [0.25, 0.6, 2.0, -1.0] {
            assert_eq!(nearest_preset_label(rate), nearest_preset_label(rate));
        }
    }

    #[test]
    fn button_label_uses_preset_label() {
        assert_eq!(speed_button_label(1.0), "Speed 1x");
        assert_eq!(speed_button_label(2.0), "Speed 2x");
        assert_eq!(speed_button_label(7.0), "Speed .5x");
    }

    #[test]
    fn menu_items_resolve_to_presets() {
        for (item, preset) in RATE_MENU.iter().zip(PRESET_RATES.iter()) {
            assert_eq!(nearest_preset_label(item.value), preset);
        }
        assert_eq!(menu_item("1.0x").map(|item| item.value), Some(1.0));
        assert!(menu_item("3x").is_none());
    }
}
