use knob_ui_field::FieldSettings;
use serde::Serialize;

/// Which property tree the inspector shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum InspectorKind {
    #[default]
    Ecs,
    Graph,
}

impl InspectorKind {
    pub(crate) const ALL: [InspectorKind; 2] = [InspectorKind::Ecs, InspectorKind::Graph];

    pub(crate) fn label(self) -> &'static str {
        match self {
            InspectorKind::Ecs => "Entities",
            InspectorKind::Graph => "Graph",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "ecs" => Some(InspectorKind::Ecs),
            "graph" => Some(InspectorKind::Graph),
            _ => None,
        }
    }
}

/// Typed settings payload used for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub(crate) struct SettingsData {
    field: FieldSettings,
    inspector: InspectorKind,
}

impl SettingsData {
    pub(crate) fn field(&self) -> FieldSettings {
        self.field
    }

    pub(crate) fn inspector(&self) -> InspectorKind {
        self.inspector
    }

    pub(crate) fn set_inspector(&mut self, inspector: InspectorKind) {
        self.inspector = inspector;
    }

    /// Read settings from JSON, keeping the default for every field that is
    /// missing or out of range.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = SettingsData::default();

        if let Some(field) = value.get("field") {
            let target = &mut settings.field;
            if let Some(precision) = read_u64(field, "default_precision")
                .filter(|precision| *precision <= 16)
            {
                target.default_precision = precision as u32;
            }
            if let Some(step) = read_positive(field, "default_step") {
                target.default_step = step;
            }
            if let Some(threshold) = read_positive(field, "drag_threshold") {
                target.drag_threshold = threshold as f32;
            }
            if let Some(factor) = read_positive(field, "fine_factor") {
                target.fine_factor = factor;
            }
            if let Some(factor) = read_positive(field, "coarse_factor") {
                target.coarse_factor = factor;
            }
            if let Some(precision) = read_u64(field, "edit_precision")
                .filter(|precision| *precision <= 16)
            {
                target.edit_precision = precision as usize;
            }
            if let Some(width) = read_positive(field, "width") {
                target.width = width as f32;
            }
        }

        if let Some(inspector) = value
            .get("inspector")
            .and_then(serde_json::Value::as_str)
            .and_then(InspectorKind::from_name)
        {
            settings.inspector = inspector;
        }

        settings
    }
}

fn read_u64(value: &serde_json::Value, key: &str) -> Option<u64> {
    value.get(key).and_then(serde_json::Value::as_u64)
}

fn read_positive(value: &serde_json::Value, key: &str) -> Option<f64> {
    value
        .get(key)
        .and_then(serde_json::Value::as_f64)
        .filter(|value| value.is_finite() && *value > 0.0)
}
