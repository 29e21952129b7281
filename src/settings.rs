//! Per-field font scale multipliers and the panel that edits them.

use crate::diploma::FieldRole;

pub const SLIDER_MIN: f32 = 0.5;
pub const SLIDER_MAX: f32 = 2.5;
pub const SLIDER_STEP: f32 = 0.1;

/// Six independent multipliers, one per rendered text field, applied on top of the
/// template's base font size. Every value lies in `[SLIDER_MIN, SLIDER_MAX]` on a
/// `SLIDER_STEP` grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleSettings {
    pub student_name: f32,
    pub course_grade: f32,
    pub course_name: f32,
    pub date: f32,
    pub director_name: f32,
    pub secretary_name: f32,
}

impl Default for ScaleSettings {
    fn default() -> Self {
        ScaleSettings {
            student_name: 1.0,
            course_grade: 1.0,
            course_name: 1.0,
            date: 1.0,
            director_name: 1.0,
            secretary_name: 1.0,
        }
    }
}

/// Clamp into the slider range and snap to the slider step
pub fn snap(value: f32) -> f32 {
    let steps = (value.clamp(SLIDER_MIN, SLIDER_MAX) / SLIDER_STEP).round();
    steps / 10.0
}

impl ScaleSettings {
    pub fn get(&self, role: FieldRole) -> f32 {
        match role {
            FieldRole::StudentName => self.student_name,
            FieldRole::CourseGrade => self.course_grade,
            FieldRole::CourseName => self.course_name,
            FieldRole::Date => self.date,
            FieldRole::DirectorName => self.director_name,
            FieldRole::SecretaryName => self.secretary_name,
        }
    }

    /// Set a multiplier, returning the value actually stored. Non-finite input is
    /// ignored and leaves the current value in place.
    pub fn set(&mut self, role: FieldRole, value: f32) -> f32 {
        if !value.is_finite() {
            return self.get(role);
        }
        let value = snap(value);
        let slot = match role {
            FieldRole::StudentName => &mut self.student_name,
            FieldRole::CourseGrade => &mut self.course_grade,
            FieldRole::CourseName => &mut self.course_name,
            FieldRole::Date => &mut self.date,
            FieldRole::DirectorName => &mut self.director_name,
            FieldRole::SecretaryName => &mut self.secretary_name,
        };
        *slot = value;
        value
    }

    pub fn reset(&mut self) {
        *self = ScaleSettings::default();
    }
}

/// One slider row of the settings panel
#[derive(Debug, Clone, PartialEq)]
pub struct SliderRow {
    pub role: FieldRole,
    pub label: &'static str,
    pub value: f32,
    /// The value as shown next to the slider, e.g. `1.4x`
    pub readout: String,
}

fn slider_label(role: FieldRole) -> &'static str {
    match role {
        FieldRole::StudentName => "Nombre del Alumno",
        FieldRole::CourseGrade => "Grado del Curso",
        FieldRole::CourseName => "Nombre del Curso",
        FieldRole::Date => "Fecha",
        FieldRole::DirectorName => "Director",
        FieldRole::SecretaryName => "Secretario",
    }
}

/// The dismissible "Configuración de Texto" panel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SettingsPanel {
    open: bool,
}

impl SettingsPanel {
    pub const TITLE: &'static str = "Configuración de Texto";

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn sliders(&self, settings: &ScaleSettings) -> Vec<SliderRow> {
        FieldRole::ALL
            .into_iter()
            .map(|role| {
                let value = settings.get(role);
                SliderRow {
                    role,
                    label: slider_label(role),
                    value,
                    readout: format!("{value:.1}x"),
                }
            })
            .collect()
    }

    /// Move a slider. Sliders can only be moved while the panel is open; returns the
    /// stored value if the change was applied.
    pub fn set_slider(
        &self,
        settings: &mut ScaleSettings,
        role: FieldRole,
        value: f32,
    ) -> Option<f32> {
        self.open.then(|| settings.set(role, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_one() {
        let settings = ScaleSettings::default();
        for role in FieldRole::ALL {
            assert_eq!(settings.get(role), 1.0);
        }
    }

    #[test]
    fn values_are_clamped_and_snapped() {
        let mut settings = ScaleSettings::default();
        assert_eq!(settings.set(FieldRole::CourseName, 1.43), 1.4);
        assert_eq!(settings.get(FieldRole::CourseName), 1.4);
        assert_eq!(settings.set(FieldRole::Date, 0.1), 0.5);
        assert_eq!(settings.set(FieldRole::Date, 9.0), 2.5);
        assert_eq!(settings.set(FieldRole::Date, 1.96), 2.0);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let mut settings = ScaleSettings::default();
        settings.set(FieldRole::StudentName, 1.2);
        assert_eq!(settings.set(FieldRole::StudentName, f32::NAN), 1.2);
        assert_eq!(settings.set(FieldRole::StudentName, f32::INFINITY), 1.2);
    }

    #[test]
    fn roles_are_independent() {
        let mut settings = ScaleSettings::default();
        settings.set(FieldRole::DirectorName, 2.0);
        assert_eq!(settings.get(FieldRole::DirectorName), 2.0);
        assert_eq!(settings.get(FieldRole::SecretaryName), 1.0);
        settings.reset();
        assert_eq!(settings, ScaleSettings::default());
    }

    #[test]
    fn closed_panel_ignores_slider_moves() {
        let mut settings = ScaleSettings::default();
        let mut panel = SettingsPanel::default();
        assert!(!panel.is_open());
        assert_eq!(panel.set_slider(&mut settings, FieldRole::Date, 2.0), None);
        assert_eq!(settings.get(FieldRole::Date), 1.0);

        panel.open();
        assert_eq!(
            panel.set_slider(&mut settings, FieldRole::Date, 2.0),
            Some(2.0)
        );
        panel.close();
        assert!(!panel.is_open());
    }

    #[test]
    fn slider_rows_show_one_decimal() {
        let mut settings = ScaleSettings::default();
        settings.set(FieldRole::StudentName, 1.4);
        let rows = SettingsPanel::default().sliders(&settings);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].label, "Nombre del Alumno");
        assert_eq!(rows[0].readout, "1.4x");
        assert_eq!(rows[5].label, "Secretario");
        assert_eq!(rows[5].readout, "1.0x");
    }
}
