//! The diploma's text content: six free-text fields, each identified by a [FieldRole].

use chrono::{Locale, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six user-editable text fields on a diploma
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldRole {
    StudentName,
    CourseGrade,
    CourseName,
    Date,
    DirectorName,
    SecretaryName,
}

impl FieldRole {
    /// All roles, in the order the editor presents them
    pub const ALL: [FieldRole; 6] = [
        FieldRole::StudentName,
        FieldRole::CourseGrade,
        FieldRole::CourseName,
        FieldRole::Date,
        FieldRole::DirectorName,
        FieldRole::SecretaryName,
    ];

    /// The form label shown next to the field's input
    pub fn label(self) -> &'static str {
        match self {
            FieldRole::StudentName => "Nombre del Alumno",
            FieldRole::CourseGrade => "Grado del Curso",
            FieldRole::CourseName => "Nombre del Curso",
            FieldRole::Date => "Fecha",
            FieldRole::DirectorName => "Nombre del Director",
            FieldRole::SecretaryName => "Nombre del Secretario",
        }
    }

    /// The key the field is remembered under between sessions. Session-only fields
    /// (student name and date) have no key.
    pub fn storage_key(self) -> Option<&'static str> {
        match self {
            FieldRole::StudentName | FieldRole::Date => None,
            FieldRole::CourseGrade => Some("diploma_courseGrade"),
            FieldRole::CourseName => Some("diploma_courseName"),
            FieldRole::DirectorName => Some("diploma_directorName"),
            FieldRole::SecretaryName => Some("diploma_secretaryName"),
        }
    }

    pub fn is_remembered(self) -> bool {
        self.storage_key().is_some()
    }

    /// Short, command-line friendly name
    pub fn name(self) -> &'static str {
        match self {
            FieldRole::StudentName => "student",
            FieldRole::CourseGrade => "grade",
            FieldRole::CourseName => "course",
            FieldRole::Date => "date",
            FieldRole::DirectorName => "director",
            FieldRole::SecretaryName => "secretary",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FieldRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldRole::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = FieldRole::ALL.iter().map(|r| r.name()).collect();
                format!("unknown field '{s}', expected one of: {}", names.join(", "))
            })
    }
}

pub const DEFAULT_STUDENT_NAME: &str = "Nombre del Alumno";
pub const DEFAULT_COURSE_GRADE: &str = "GRADO DEL CURSO";
pub const DEFAULT_COURSE_NAME: &str = "NOMBRE DEL CURSO";
pub const DEFAULT_DIRECTOR_NAME: &str = "Dr. J. Armando Guzmán Zuarth";
pub const DEFAULT_SECRETARY_NAME: &str = "Rev. Manuel Sánchez Velásquez";

/// Format a date the way the diploma prints it, e.g. `15 de diciembre de 2025`
pub fn spanish_long_date(date: NaiveDate) -> String {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    Utc.from_utc_datetime(&midnight)
        .format_localized("%-d de %B de %Y", Locale::es_ES)
        .to_string()
}

/// The text content of a diploma. Any string, including an empty one, is a valid
/// value for every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiplomaDocument {
    pub student_name: String,
    pub course_grade: String,
    pub course_name: String,
    pub date: String,
    pub director_name: String,
    pub secretary_name: String,
}

impl DiplomaDocument {
    /// A document holding the placeholder text, dated `today`
    pub fn with_placeholders(today: NaiveDate) -> DiplomaDocument {
        DiplomaDocument {
            student_name: DEFAULT_STUDENT_NAME.to_string(),
            course_grade: DEFAULT_COURSE_GRADE.to_string(),
            course_name: DEFAULT_COURSE_NAME.to_string(),
            date: spanish_long_date(today),
            director_name: DEFAULT_DIRECTOR_NAME.to_string(),
            secretary_name: DEFAULT_SECRETARY_NAME.to_string(),
        }
    }

    pub fn get(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::StudentName => &self.student_name,
            FieldRole::CourseGrade => &self.course_grade,
            FieldRole::CourseName => &self.course_name,
            FieldRole::Date => &self.date,
            FieldRole::DirectorName => &self.director_name,
            FieldRole::SecretaryName => &self.secretary_name,
        }
    }

    pub fn set<S: Into<String>>(&mut self, role: FieldRole, value: S) {
        let value = value.into();
        match role {
            FieldRole::StudentName => self.student_name = value,
            FieldRole::CourseGrade => self.course_grade = value,
            FieldRole::CourseName => self.course_name = value,
            FieldRole::Date => self.date = value,
            FieldRole::DirectorName => self.director_name = value,
            FieldRole::SecretaryName => self.secretary_name = value,
        }
    }
}

impl Default for DiplomaDocument {
    fn default() -> Self {
        DiplomaDocument::with_placeholders(chrono::Local::now().date_naive())
    }
}
