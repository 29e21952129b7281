//! Base font sizes per template variant, and the student-name auto-fit table.
//!
//! Every rendered size is `base × multiplier`, where the base comes from the
//! tables below and the multiplier from [ScaleSettings]. Nothing else feeds
//! into a font size.

use crate::diploma::{DiplomaDocument, FieldRole};
use crate::settings::ScaleSettings;
use crate::style::TemplateVariant;
use crate::units::Rem;

/// Padding appended to the student name so script-font flourishes are not clipped
pub const NAME_PADDING: &str = "  ";

/// A non-increasing step function over text length: the first breakpoint the
/// length falls below selects its size, anything longer gets the tail size.
#[derive(Debug)]
pub struct StepTable {
    pub steps: &'static [(usize, Rem)],
    pub tail: Rem,
}

impl StepTable {
    pub fn lookup(&self, length: usize) -> Rem {
        self.steps
            .iter()
            .find(|(below, _)| length < *below)
            .map(|&(_, size)| size)
            .unwrap_or(self.tail)
    }
}

/// Formal is uppercase with wide tracking, so it needs smaller sizes to fit one line
pub const FORMAL_NAME_SIZES: StepTable = StepTable {
    steps: &[
        (15, Rem(3.0)),
        (25, Rem(2.5)),
        (35, Rem(1.8)),
        (45, Rem(1.4)),
        (55, Rem(1.1)),
    ],
    tail: Rem(0.9),
};

pub const DEFAULT_NAME_SIZES: StepTable = StepTable {
    steps: &[
        (20, Rem(4.0)),
        (30, Rem(3.0)),
        (40, Rem(2.5)),
        (50, Rem(2.0)),
        (60, Rem(1.5)),
    ],
    tail: Rem(1.25),
};

pub fn name_table(variant: TemplateVariant) -> &'static StepTable {
    match variant {
        TemplateVariant::Formal => &FORMAL_NAME_SIZES,
        TemplateVariant::Classic | TemplateVariant::Modern | TemplateVariant::Elegant => {
            &DEFAULT_NAME_SIZES
        }
    }
}

/// Auto-fit base size for a student name of `length` characters
pub fn auto_fit_size(length: usize, variant: TemplateVariant) -> Rem {
    name_table(variant).lookup(length)
}

/// The student name as it is displayed, with its trailing padding
pub fn padded_name(name: &str) -> String {
    format!("{name}{NAME_PADDING}")
}

/// Auto-fit base size for the given student name. Length is counted in UTF-16 code
/// units of the padded name, so characters outside the basic plane (emoji) count
/// twice.
pub fn student_name_size(name: &str, variant: TemplateVariant) -> Rem {
    auto_fit_size(padded_name(name).encode_utf16().count(), variant)
}

/// Fixed base sizes of the fields that don't auto-fit
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BaseSizes {
    pub course_grade: Rem,
    pub course_name: Rem,
    pub date: Rem,
    /// Director and secretary names
    pub sign_name: Rem,
    /// The "Director" / "Secretario" captions under the names
    pub sign_title: Rem,
}

impl BaseSizes {
    pub fn for_variant(variant: TemplateVariant) -> BaseSizes {
        match variant {
            TemplateVariant::Classic | TemplateVariant::Elegant => BaseSizes {
                course_grade: Rem(1.2),
                course_name: Rem(2.25),
                date: Rem(0.9),
                sign_name: Rem(1.1),
                sign_title: Rem(0.75),
            },
            // Modern and Formal share identical values
            TemplateVariant::Modern | TemplateVariant::Formal => BaseSizes {
                course_grade: Rem(1.2),
                course_name: Rem(1.8),
                date: Rem(0.9),
                sign_name: Rem(1.1),
                sign_title: Rem(0.75),
            },
        }
    }
}

/// Base size of a field before the user's multiplier. `student_name` is only
/// consulted for [FieldRole::StudentName].
pub fn base_size(role: FieldRole, variant: TemplateVariant, student_name: &str) -> Rem {
    let base = BaseSizes::for_variant(variant);
    match role {
        FieldRole::StudentName => student_name_size(student_name, variant),
        FieldRole::CourseGrade => base.course_grade,
        FieldRole::CourseName => base.course_name,
        FieldRole::Date => base.date,
        FieldRole::DirectorName | FieldRole::SecretaryName => base.sign_name,
    }
}

/// Final font size of a field: base size times the field's multiplier
pub fn rendered_size(
    role: FieldRole,
    variant: TemplateVariant,
    student_name: &str,
    settings: &ScaleSettings,
) -> Rem {
    base_size(role, variant, student_name) * settings.get(role)
}

/// Rendered font sizes of all six fields
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderedSizes {
    pub student_name: Rem,
    pub course_grade: Rem,
    pub course_name: Rem,
    pub date: Rem,
    pub director_name: Rem,
    pub secretary_name: Rem,
}

impl RenderedSizes {
    pub fn compute(
        doc: &DiplomaDocument,
        variant: TemplateVariant,
        settings: &ScaleSettings,
    ) -> RenderedSizes {
        let size = |role| rendered_size(role, variant, &doc.student_name, settings);
        RenderedSizes {
            student_name: size(FieldRole::StudentName),
            course_grade: size(FieldRole::CourseGrade),
            course_name: size(FieldRole::CourseName),
            date: size(FieldRole::Date),
            director_name: size(FieldRole::DirectorName),
            secretary_name: size(FieldRole::SecretaryName),
        }
    }

    pub fn get(&self, role: FieldRole) -> Rem {
        match role {
            FieldRole::StudentName => self.student_name,
            FieldRole::CourseGrade => self.course_grade,
            FieldRole::CourseName => self.course_name,
            FieldRole::Date => self.date,
            FieldRole::DirectorName => self.director_name,
            FieldRole::SecretaryName => self.secretary_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formal_breakpoints() {
        let formal = TemplateVariant::Formal;
        assert_eq!(auto_fit_size(0, formal), Rem(3.0));
        assert_eq!(auto_fit_size(14, formal), Rem(3.0));
        assert_eq!(auto_fit_size(15, formal), Rem(2.5));
        assert_eq!(auto_fit_size(24, formal), Rem(2.5));
        assert_eq!(auto_fit_size(25, formal), Rem(1.8));
        assert_eq!(auto_fit_size(35, formal), Rem(1.4));
        assert_eq!(auto_fit_size(45, formal), Rem(1.1));
        assert_eq!(auto_fit_size(54, formal), Rem(1.1));
        assert_eq!(auto_fit_size(55, formal), Rem(0.9));
        assert_eq!(auto_fit_size(10_000, formal), Rem(0.9));
    }

    #[test]
    fn default_breakpoints() {
        for variant in [
            TemplateVariant::Classic,
            TemplateVariant::Modern,
            TemplateVariant::Elegant,
        ] {
            assert_eq!(auto_fit_size(19, variant), Rem(4.0));
            assert_eq!(auto_fit_size(20, variant), Rem(3.0));
            assert_eq!(auto_fit_size(30, variant), Rem(2.5));
            assert_eq!(auto_fit_size(40, variant), Rem(2.0));
            assert_eq!(auto_fit_size(50, variant), Rem(1.5));
            assert_eq!(auto_fit_size(59, variant), Rem(1.5));
            assert_eq!(auto_fit_size(60, variant), Rem(1.25));
        }
    }

    #[test]
    fn auto_fit_never_grows_with_length() {
        for variant in TemplateVariant::ALL {
            let mut previous = auto_fit_size(0, variant);
            for length in 1..200 {
                let size = auto_fit_size(length, variant);
                assert!(size <= previous, "{variant} grew at length {length}");
                previous = size;
            }
        }
    }

    #[test]
    fn student_name_counts_padding_and_characters() {
        // 12 characters + 2 padding = 14 -> still the first Formal bucket
        assert_eq!(
            student_name_size("Juan Pérez M", TemplateVariant::Formal),
            Rem(3.0)
        );
        // 13 + 2 = 15 -> next bucket
        assert_eq!(
            student_name_size("Juan Pérez Mo", TemplateVariant::Formal),
            Rem(2.5)
        );
        assert_eq!(padded_name("Ana"), "Ana  ");
    }

    #[test]
    fn astral_characters_count_as_two() {
        // 12 chars but 13 UTF-16 units, + 2 padding = 15
        assert_eq!(
            student_name_size("Juan Pérez \u{1F600}", TemplateVariant::Formal),
            Rem(2.5)
        );
    }

    #[test]
    fn course_name_base_depends_on_variant_group() {
        let course = |v| BaseSizes::for_variant(v).course_name;
        assert_eq!(course(TemplateVariant::Classic), Rem(2.25));
        assert_eq!(course(TemplateVariant::Elegant), Rem(2.25));
        assert_eq!(course(TemplateVariant::Modern), Rem(1.8));
        assert_eq!(course(TemplateVariant::Formal), Rem(1.8));
    }

    #[test]
    fn rendered_size_is_base_times_multiplier() {
        let mut settings = ScaleSettings::default();
        settings.set(FieldRole::CourseName, 1.4);
        let size = rendered_size(
            FieldRole::CourseName,
            TemplateVariant::Classic,
            "",
            &settings,
        );
        assert_eq!(size, Rem(2.25 * 1.4));
        assert!((size.0 - 3.15).abs() < 1e-5);
    }

    #[test]
    fn every_field_obeys_the_product_rule() {
        let doc = DiplomaDocument::with_placeholders(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let mut settings = ScaleSettings::default();
        for (i, role) in FieldRole::ALL.into_iter().enumerate() {
            settings.set(role, 0.5 + 0.3 * i as f32);
        }
        for variant in TemplateVariant::ALL {
            let sizes = RenderedSizes::compute(&doc, variant, &settings);
            for role in FieldRole::ALL {
                let expected = base_size(role, variant, &doc.student_name) * settings.get(role);
                assert_eq!(sizes.get(role), expected);
            }
        }
    }

    #[test]
    fn signature_names_share_a_base() {
        for variant in TemplateVariant::ALL {
            assert_eq!(
                base_size(FieldRole::DirectorName, variant, ""),
                base_size(FieldRole::SecretaryName, variant, "")
            );
        }
    }
}
