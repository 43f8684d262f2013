//! Variety palette - cultivar names to fill colours.
//!
//! Orchard registers spell the same cultivar several ways (upper case, title
//! case, trade names). Every spelling is listed literally because the engine's
//! `match` is case-sensitive. Varieties outside these groups get the fallback.

use super::expression::{Predicate, RuleTable, StyleContext};
use crate::constants::{FALLBACK_VARIETY_COLOR, LEGEND_OTHER_LABEL, VARIETY_PROPERTY};
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Map, Value};

/// One legend row: a cultivar group, its colour and the labels mapped to it.
#[derive(Debug, Clone, Copy)]
pub struct VarietyGroup {
    pub name: &'static str,
    pub color: &'static str,
    pub labels: &'static [&'static str],
}

/// Priority order matters only for display; labels are disjoint.
pub const VARIETY_GROUPS: &[VarietyGroup] = &[
    VarietyGroup {
        name: "Golden Delicious",
        color: "#ffd128",
        labels: &["GOLDEN", "GOLDEN DELICIOUS", "Golden Delicious", "Golden"],
    },
    VarietyGroup {
        name: "Gala",
        color: "#a50518",
        labels: &["GALA", "Gala", "ROYAL GALA", "Royal Gala"],
    },
];

static VARIETY_FILL: Lazy<RuleTable<&'static str>> = Lazy::new(|| {
    VARIETY_GROUPS
        .iter()
        .fold(RuleTable::new(FALLBACK_VARIETY_COLOR), |table, group| {
            table.rule(
                Predicate::category_in(VARIETY_PROPERTY, group.labels.iter().copied()),
                group.color,
            )
        })
});

/// Fill colour table keyed on the `variety` attribute.
pub fn variety_fill_color() -> &'static RuleTable<&'static str> {
    &VARIETY_FILL
}

/// Colour for a single variety label.
pub fn color_for_variety(label: &str) -> &'static str {
    let mut properties = Map::new();
    properties.insert(VARIETY_PROPERTY.to_string(), Value::from(label));
    *variety_fill_color().resolve(&StyleContext::with_properties(&properties))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Rows for the legend control: one per group plus the fallback.
pub fn legend_entries() -> Vec<LegendEntry> {
    VARIETY_GROUPS
        .iter()
        .map(|group| LegendEntry {
            label: group.name.to_string(),
            color: group.color.to_string(),
        })
        .chain(std::iter::once(LegendEntry {
            label: LEGEND_OTHER_LABEL.to_string(),
            color: FALLBACK_VARIETY_COLOR.to_string(),
        }))
        .collect()
}
