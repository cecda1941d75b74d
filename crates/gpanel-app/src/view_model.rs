//! Render-ready projections of [`AppState`]
//!
//! Views never read the mirrors directly for anything that needs
//! formatting or mapping; they ask for a projection here. Keeps the brand
//! encoding in one place: the AC dropdown uses `custom_`-prefixed values,
//! the learning dropdown uses raw names, and the manager shows decoded
//! names.

use gpanel_core::{
    decode_brand_name, format_kib, format_uptime, tab_matches, Brand, LedEffect, PresetBrand,
    Rgb, SystemStats, CUSTOM_BRAND_PREFIX, RING_SIZE,
};

use crate::state::AppState;

/// Marker in front of custom brands in the AC dropdown.
pub const CUSTOM_BRAND_ICON: &str = "🔧 ";

/// Shown for metrics the firmware does not report.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandOption {
    /// Underlying option value
    pub value: String,
    pub label: String,
    pub custom: bool,
}

/// AC dropdown: presets by id, customs as `custom_<raw>`.
pub fn ac_brand_options(custom_brands: &[String]) -> Vec<BrandOption> {
    let presets = PresetBrand::ALL.into_iter().map(|p| BrandOption {
        value: p.id().to_string(),
        label: p.label().to_string(),
        custom: false,
    });
    let customs = custom_brands.iter().map(|raw| BrandOption {
        value: format!("{CUSTOM_BRAND_PREFIX}{raw}"),
        label: format!("{CUSTOM_BRAND_ICON}{}", decode_brand_name(raw)),
        custom: true,
    });
    presets.chain(customs).collect()
}

/// Learning dropdown: presets by lowercase name, customs by raw name.
pub fn learn_brand_options(custom_brands: &[String]) -> Vec<BrandOption> {
    let presets = PresetBrand::ALL.into_iter().map(|p| BrandOption {
        value: p.learn_value().to_string(),
        label: p.label().to_string(),
        custom: false,
    });
    let customs = custom_brands.iter().map(|raw| BrandOption {
        value: raw.clone(),
        label: decode_brand_name(raw),
        custom: true,
    });
    presets.chain(customs).collect()
}

/// Brand manager rows: decoded names.
pub fn manager_entries(custom_brands: &[String]) -> Vec<String> {
    custom_brands.iter().map(|raw| decode_brand_name(raw)).collect()
}

/// Case-insensitive substring filter on option labels.
pub fn filter_options(options: Vec<BrandOption>, filter: &str) -> Vec<BrandOption> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return options;
    }
    options
        .into_iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .collect()
}

/// AC brand options after applying the current filter.
pub fn visible_ac_brands(state: &AppState) -> Vec<BrandOption> {
    filter_options(ac_brand_options(&state.brands.list), &state.brands.filter)
}

/// Option value the AC dropdown shows as selected.
pub fn current_ac_brand_value(state: &AppState) -> String {
    state.ac.mirror.brand.select_value()
}

/// The option `step` places away from the current brand within the visible
/// options, wrapping at both ends.
pub fn step_ac_brand(state: &AppState, step: isize) -> Option<String> {
    let options = visible_ac_brands(state);
    if options.is_empty() {
        return None;
    }
    let current = current_ac_brand_value(state);
    let len = options.len() as isize;
    let next = match options.iter().position(|o| o.value == current) {
        Some(i) => (i as isize + step).rem_euclid(len),
        None => 0,
    };
    options.get(next as usize).map(|o| o.value.clone())
}

/// Value used for key-name generation from the learning brand index.
pub fn learn_brand_value(state: &AppState) -> Option<String> {
    learn_brand_options(&state.brands.list)
        .get(state.learn.brand_index)
        .map(|o| o.value.clone())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTab {
    pub tag: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Effect tabs in display order, with the active one marked.
pub fn effect_tabs(current_effect: &str) -> Vec<EffectTab> {
    LedEffect::ALL
        .into_iter()
        .map(|e| EffectTab {
            tag: e.tag(),
            label: e.label(),
            active: tab_matches(e.label(), current_effect),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingCell {
    pub index: usize,
    pub color: Rgb,
    pub selected: bool,
    /// Offset from the ring center, in layout units
    pub x: f64,
    pub y: f64,
}

/// The eight ring positions ready to draw. Empty until the view has been
/// entered once.
pub fn ring_cells(state: &AppState) -> Vec<RingCell> {
    let Some(geometry) = state.led.geometry else {
        return Vec::new();
    };
    geometry
        .iter()
        .take(RING_SIZE)
        .map(|p| RingCell {
            index: p.index,
            color: state.led.colors.get(p.index).unwrap_or(Rgb::BLACK),
            selected: state.led.selected == Some(p.index),
            x: p.x,
            y: p.y,
        })
        .collect()
}

/// Always-visible dashboard gauges.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardGauges {
    pub temp_text: String,
    pub temp_percent: f64,
    pub ram_text: String,
    pub ram_percent: f64,
    pub uptime: String,
    pub version: String,
    pub rssi: String,
}

/// Extra gauges shown in debug mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugGauges {
    pub free_heap: String,
    pub min_free_heap: String,
    pub cpu: &'static str,
    pub psram: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub gauges: Option<DashboardGauges>,
    pub debug: Option<DebugGauges>,
    pub show_ram_chart: bool,
}

pub fn dashboard_view(state: &AppState) -> DashboardView {
    let stats = state.dashboard.stats.as_ref();
    DashboardView {
        gauges: stats.map(|s| gauges(s, state.debug_mode)),
        debug: stats
            .filter(|_| state.debug_mode)
            .map(debug_gauges),
        show_ram_chart: state.debug_mode,
    }
}

fn gauges(stats: &SystemStats, debug_mode: bool) -> DashboardGauges {
    DashboardGauges {
        temp_text: stats.temp_text(),
        temp_percent: stats.temp_percent(),
        ram_text: stats.ram_text(),
        ram_percent: stats.ram.clamp(0.0, 100.0),
        uptime: format_uptime(stats.uptime, debug_mode),
        version: format!("v{}", stats.firmware_version()),
        rssi: format!("{} dBm", stats.rssi),
    }
}

fn debug_gauges(stats: &SystemStats) -> DebugGauges {
    DebugGauges {
        free_heap: format_kib(stats.free_heap),
        min_free_heap: format_kib(stats.min_free_heap),
        cpu: NOT_AVAILABLE,
        psram: NOT_AVAILABLE,
    }
}

/// Label for the AC brand shown in the header of the controls view.
pub fn ac_brand_label(brand: &Brand) -> String {
    match brand {
        Brand::Custom(_) => format!("{CUSTOM_BRAND_ICON}{}", brand.display_name()),
        Brand::Preset(_) => brand.display_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpanel_gateway::test_utils::sample_stats;

    fn customs() -> Vec<String> {
        vec!["My%20Split".to_string(), "Gree".to_string()]
    }

    #[test]
    fn test_ac_options_prefix_customs() {
        let opts = ac_brand_options(&customs());
        assert_eq!(opts.len(), 7);
        assert_eq!(opts[0].value, "0");
        assert_eq!(opts[4].label, "LG");
        assert_eq!(opts[5].value, "custom_My%20Split");
        assert_eq!(opts[5].label, "🔧 My Split");
        assert!(opts[5].custom);
    }

    #[test]
    fn test_ac_option_values_decode_to_wire_brand() {
        for opt in ac_brand_options(&customs()) {
            let brand = Brand::from_select_value(&opt.value).unwrap();
            assert_eq!(brand.is_custom(), opt.custom);
            assert_eq!(brand.select_value(), opt.value);
        }
    }

    #[test]
    fn test_learn_options_use_raw_values() {
        let opts = learn_brand_options(&customs());
        assert_eq!(opts[0].value, "daikin");
        assert_eq!(opts[5].value, "My%20Split");
        assert_eq!(opts[5].label, "My Split");
    }

    #[test]
    fn test_manager_entries_decoded() {
        assert_eq!(manager_entries(&customs()), vec!["My Split", "Gree"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filtered = filter_options(ac_brand_options(&customs()), "SPLIT");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, "custom_My%20Split");

        let all = filter_options(ac_brand_options(&customs()), "  ");
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn test_step_brand_wraps() {
        let mut state = AppState::default();
        state.brands.list = customs();
        assert_eq!(step_ac_brand(&state, 1).as_deref(), Some("1"));
        assert_eq!(step_ac_brand(&state, -1).as_deref(), Some("custom_Gree"));
    }

    #[test]
    fn test_effect_tabs_lenient_match() {
        let tabs = effect_tabs("knight_rider");
        let active: Vec<_> = tabs.iter().filter(|t| t.active).map(|t| t.tag).collect();
        assert_eq!(active, vec!["knight_rider"]);
    }

    #[test]
    fn test_ring_cells_require_init() {
        let mut state = AppState::default();
        assert!(ring_cells(&state).is_empty());

        state.led.init_ring(120.0);
        state.led.selected = Some(2);
        let cells = ring_cells(&state);
        assert_eq!(cells.len(), 8);
        assert!(cells[2].selected);
        assert!(cells[0].y < 0.0);
    }

    #[test]
    fn test_dashboard_debug_extras() {
        let mut state = AppState::default();
        state.dashboard.apply_stats(sample_stats());

        let view = dashboard_view(&state);
        assert!(view.debug.is_none());
        assert!(!view.show_ram_chart);
        let gauges = view.gauges.unwrap();
        assert_eq!(gauges.uptime, "Uptime: 1h 2m");
        assert_eq!(gauges.version, "v2.1.0");

        state.debug_mode = true;
        let view = dashboard_view(&state);
        let debug = view.debug.unwrap();
        assert_eq!(debug.free_heap, "150.0 KB");
        assert_eq!(debug.cpu, "N/A");
        assert!(view.show_ram_chart);
        assert_eq!(view.gauges.unwrap().uptime, "Uptime: 1h 2m 5s");
    }
}
