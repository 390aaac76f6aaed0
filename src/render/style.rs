use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Ordered style properties of one slot (`"flex": 1`, `"width": 60`, ...).
pub type StyleProps = IndexMap<String, Value>;

/// Width of the time-label column; windows take the remaining surface width.
pub const TIME_COLUMN_WIDTH_PX: f64 = 60.0;

/// Slots that carry defaults and accept merged overrides.
pub const STYLE_SLOTS: [&str; 7] = [
    "container",
    "header",
    "scrollViewContent",
    "timeColumn",
    "timeLabel",
    "timeText",
    "dateViewStyle",
];

/// Slot forwarded to the Events renderer as-is; it has no defaults.
pub const EVENT_STYLE_SLOT: &str = "eventStyle";

/// Named style slots resolved for one view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    slots: IndexMap<String, StyleProps>,
}

impl StyleSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn week_view_defaults() -> Self {
        Self::new()
            .with_slot("container", props([("flex", json!(1))]))
            .with_slot(
                "header",
                props([("height", json!(50)), ("justifyContent", json!("center"))]),
            )
            .with_slot("scrollViewContent", props([("flexDirection", json!("row"))]))
            .with_slot(
                "timeColumn",
                props([
                    ("width", json!(TIME_COLUMN_WIDTH_PX)),
                    ("paddingTop", json!(10)),
                ]),
            )
            .with_slot(
                "timeLabel",
                props([("flex", json!(-1)), ("height", json!(40))]),
            )
            .with_slot(
                "timeText",
                props([
                    ("fontSize", json!(12)),
                    ("textAlign", json!("center")),
                ]),
            )
            .with_slot("dateViewStyle", props([("flex", json!(1))]))
    }

    /// Merges `overrides` property-by-property over `defaults`.
    ///
    /// Only slots known to `defaults` are merged; unknown override slots are
    /// dropped. `eventStyle` bypasses merging and is copied from `overrides`.
    #[must_use]
    pub fn merged(defaults: &StyleSheet, overrides: &StyleSheet) -> Self {
        let mut slots: IndexMap<String, StyleProps> = defaults
            .slots
            .iter()
            .map(|(name, base)| {
                let mut merged = base.clone();
                if let Some(custom) = overrides.slots.get(name) {
                    for (key, value) in custom {
                        merged.insert(key.clone(), value.clone());
                    }
                }
                (name.clone(), merged)
            })
            .collect();

        slots.shift_remove(EVENT_STYLE_SLOT);
        if let Some(event_style) = overrides.slots.get(EVENT_STYLE_SLOT) {
            slots.insert(EVENT_STYLE_SLOT.to_owned(), event_style.clone());
        }

        Self { slots }
    }

    #[must_use]
    pub fn with_slot(mut self, name: impl Into<String>, props: StyleProps) -> Self {
        self.slots.insert(name.into(), props);
        self
    }

    pub fn set_property(&mut self, slot: &str, key: impl Into<String>, value: Value) {
        self.slots
            .entry(slot.to_owned())
            .or_default()
            .insert(key.into(), value);
    }

    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&StyleProps> {
        self.slots.get(name)
    }

    #[must_use]
    pub fn event_style(&self) -> Option<&StyleProps> {
        self.slots.get(EVENT_STYLE_SLOT)
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn props<const N: usize>(entries: [(&str, Value); N]) -> StyleProps {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}
