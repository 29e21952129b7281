//! The editing session: one owner for the document, the chosen variant, the scale
//! settings and the store that remembers fields between sessions.

use crate::diploma::{DiplomaDocument, FieldRole};
use crate::layout::{PreviewRenderer, Scene};
use crate::settings::{ScaleSettings, SettingsPanel, SliderRow};
use crate::sizing::RenderedSizes;
use crate::store::KeyValueStore;
use crate::style::{StylePicker, TemplateVariant};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// A row of the editing form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorField {
    pub role: FieldRole,
    pub label: &'static str,
    pub value: String,
}

pub struct Studio<S: KeyValueStore> {
    store: S,
    document: DiplomaDocument,
    picker: StylePicker,
    settings: ScaleSettings,
    panel: SettingsPanel,
}

impl<S: KeyValueStore> Studio<S> {
    /// Start a session dated today
    pub fn open(store: S) -> Studio<S> {
        Studio::open_on(store, chrono::Local::now().date_naive())
    }

    /// Start a session dated `today`. Remembered fields come from the store; the
    /// rest start as placeholders.
    pub fn open_on(store: S, today: NaiveDate) -> Studio<S> {
        let mut document = DiplomaDocument::with_placeholders(today);
        for role in FieldRole::ALL {
            if let Some(value) = role.storage_key().and_then(|key| store.get(key)) {
                debug!(field = %role, "restored remembered field");
                document.set(role, value);
            }
        }

        Studio {
            store,
            document,
            picker: StylePicker::default(),
            settings: ScaleSettings::default(),
            panel: SettingsPanel::default(),
        }
    }

    pub fn document(&self) -> &DiplomaDocument {
        &self.document
    }

    /// Replace a field's value. Remembered fields are written through to the store;
    /// a failed write is logged and the edit still applies.
    pub fn edit<V: Into<String>>(&mut self, role: FieldRole, value: V) {
        let value = value.into();
        if let Some(key) = role.storage_key() {
            if let Err(e) = self.store.set(key, &value) {
                warn!(field = %role, error = %e, "failed to remember field");
            }
        }
        self.document.set(role, value);
    }

    pub fn editor_fields(&self) -> Vec<EditorField> {
        FieldRole::ALL
            .into_iter()
            .map(|role| EditorField {
                role,
                label: role.label(),
                value: self.document.get(role).to_string(),
            })
            .collect()
    }

    pub fn style_picker(&self) -> &StylePicker {
        &self.picker
    }

    pub fn select_variant(&mut self, variant: TemplateVariant) -> TemplateVariant {
        self.picker.select(variant)
    }

    pub fn variant(&self) -> TemplateVariant {
        self.picker.selected()
    }

    pub fn settings(&self) -> &ScaleSettings {
        &self.settings
    }

    pub fn open_settings(&mut self) {
        self.panel.open();
    }

    pub fn close_settings(&mut self) {
        self.panel.close();
    }

    pub fn settings_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn sliders(&self) -> Vec<SliderRow> {
        self.panel.sliders(&self.settings)
    }

    /// Move a scale slider; ignored unless the settings panel is open
    pub fn set_scale(&mut self, role: FieldRole, value: f32) -> Option<f32> {
        self.panel.set_slider(&mut self.settings, role, value)
    }

    pub fn rendered_sizes(&self) -> RenderedSizes {
        RenderedSizes::compute(&self.document, self.variant(), &self.settings)
    }

    pub fn preview(&self, renderer: &PreviewRenderer) -> Scene {
        renderer.render(&self.document, self.variant(), &self.settings)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
