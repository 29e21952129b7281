//! Template variants and how each one dresses the page.

use crate::colour::{colours, Colour};
use crate::units::Px;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named visual theme applied to the diploma layout
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    Classic,
    Modern,
    Elegant,
    Formal,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 4] = [
        TemplateVariant::Classic,
        TemplateVariant::Modern,
        TemplateVariant::Elegant,
        TemplateVariant::Formal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemplateVariant::Classic => "Classic",
            TemplateVariant::Modern => "Modern",
            TemplateVariant::Elegant => "Elegant",
            TemplateVariant::Formal => "Formal",
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TemplateVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateVariant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown style '{s}', expected one of: Classic, Modern, Elegant, Formal")
            })
    }
}

/// Typeface families the diploma is set in
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// Dancing Script
    Script,
    /// Cormorant
    Cormorant,
    /// EB Garamond
    Garamond,
    /// Lato
    Lato,
    /// Generic serif body face
    Serif,
}

#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Letter-spacing presets, in em
pub mod tracking {
    pub const NORMAL: f32 = 0.0;
    pub const WIDE: f32 = 0.025;
    pub const WIDER: f32 = 0.05;
    pub const WIDEST: f32 = 0.1;
    pub const SPACED: f32 = 0.2;
}

/// Typographic treatment of a text run
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: FontWeight,
    /// Extra space after each glyph, in em
    pub tracking: f32,
    pub uppercase: bool,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(family: FontFamily, weight: FontWeight, colour: Colour) -> TextStyle {
        TextStyle {
            family,
            weight,
            tracking: tracking::NORMAL,
            uppercase: false,
            colour,
        }
    }

    pub fn tracking(mut self, tracking: f32) -> TextStyle {
        self.tracking = tracking;
        self
    }

    pub fn uppercase(mut self) -> TextStyle {
        self.uppercase = true;
        self
    }

    /// The text as it should be displayed; the source string is never modified
    pub fn display(&self, text: &str) -> String {
        if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}

/// A border drawn inside the edge of a box
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Border {
    /// Two lines, each a third of the total width, with a gap between them
    Double { width: Px, colour: Colour },
    Solid { width: Px, colour: Colour },
    /// Bars on the left and right edges only
    Sides { width: Px, colour: Colour },
}

impl Border {
    /// How far the border eats into the box on each side: (top, right, bottom, left)
    pub fn insets(&self) -> (Px, Px, Px, Px) {
        match *self {
            Border::Double { width, .. } | Border::Solid { width, .. } => {
                (width, width, width, width)
            }
            Border::Sides { width, .. } => (Px(0.0), width, Px(0.0), width),
        }
    }
}

/// Everything a template variant changes about the page
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VariantStyle {
    pub container_border: Border,
    pub inner_border: Option<Border>,
    pub student: TextStyle,
    pub course: TextStyle,
}

impl VariantStyle {
    pub fn for_variant(variant: TemplateVariant) -> VariantStyle {
        use FontFamily::*;
        use FontWeight::*;

        match variant {
            TemplateVariant::Classic => VariantStyle {
                container_border: Border::Double {
                    width: Px(6.0),
                    colour: colours::GRAY_800,
                },
                inner_border: Some(Border::Solid {
                    width: Px(1.0),
                    colour: colours::GRAY_600,
                }),
                student: TextStyle::new(Script, Regular, colours::GRAY_900),
                course: TextStyle::new(Cormorant, Bold, colours::GRAY_800)
                    .tracking(tracking::WIDE),
            },
            TemplateVariant::Modern => VariantStyle {
                container_border: Border::Sides {
                    width: Px(24.0),
                    colour: colours::BLUE_900,
                },
                inner_border: None,
                student: TextStyle::new(Lato, Bold, colours::BLUE_900)
                    .tracking(tracking::WIDER)
                    .uppercase(),
                course: TextStyle::new(Lato, Bold, colours::BLUE_800)
                    .tracking(tracking::WIDER)
                    .uppercase(),
            },
            TemplateVariant::Elegant => VariantStyle {
                container_border: Border::Solid {
                    width: Px(1.0),
                    colour: colours::GRAY_300,
                },
                inner_border: Some(Border::Solid {
                    width: Px(1.0),
                    colour: colours::GRAY_800,
                }),
                student: TextStyle::new(Script, Regular, colours::GRAY_900),
                course: TextStyle::new(Garamond, Bold, colours::GRAY_800)
                    .tracking(tracking::SPACED),
            },
            TemplateVariant::Formal => VariantStyle {
                container_border: Border::Solid {
                    width: Px(1.0),
                    colour: colours::YELLOW_500,
                },
                inner_border: Some(Border::Solid {
                    width: Px(4.0),
                    colour: colours::YELLOW_400,
                }),
                student: TextStyle::new(Garamond, Regular, colours::BLUE_900)
                    .tracking(tracking::WIDEST)
                    .uppercase(),
                course: TextStyle::new(Garamond, Regular, colours::RED_900)
                    .tracking(tracking::SPACED)
                    .uppercase(),
            },
        }
    }
}

/// One entry of the style picker
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOption {
    pub variant: TemplateVariant,
    pub label: &'static str,
    pub selected: bool,
}

/// Enumerates the template variants and tracks which one is selected
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StylePicker {
    selected: TemplateVariant,
}

impl StylePicker {
    pub fn new(selected: TemplateVariant) -> StylePicker {
        StylePicker { selected }
    }

    pub fn options(&self) -> Vec<StyleOption> {
        TemplateVariant::ALL
            .into_iter()
            .map(|variant| StyleOption {
                variant,
                label: variant.name(),
                selected: variant == self.selected,
            })
            .collect()
    }

    pub fn select(&mut self, variant: TemplateVariant) -> TemplateVariant {
        self.selected = variant;
        self.selected
    }

    pub fn selected(&self) -> TemplateVariant {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_is_the_default() {
        assert_eq!(TemplateVariant::default(), TemplateVariant::Classic);
        assert_eq!(StylePicker::default().selected(), TemplateVariant::Classic);
    }

    #[test]
    fn picker_lists_all_four_with_one_selected() {
        let mut picker = StylePicker::default();
        picker.select(TemplateVariant::Elegant);
        let options = picker.options();
        assert_eq!(
            options.iter().map(|o| o.label).collect::<Vec<_>>(),
            vec!["Classic", "Modern", "Elegant", "Formal"]
        );
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].variant, TemplateVariant::Elegant);
    }

    #[test]
    fn variants_parse_case_insensitively() {
        assert_eq!("formal".parse::<TemplateVariant>(), Ok(TemplateVariant::Formal));
        assert_eq!(" MODERN ".parse::<TemplateVariant>(), Ok(TemplateVariant::Modern));
        assert!("baroque".parse::<TemplateVariant>().is_err());
    }

    #[test]
    fn uppercase_styles_only_change_the_displayed_text() {
        let style = VariantStyle::for_variant(TemplateVariant::Formal).student;
        let source = String::from("Juan Pérez");
        assert_eq!(style.display(&source), "JUAN PÉREZ");
        assert_eq!(source, "Juan Pérez");

        let classic = VariantStyle::for_variant(TemplateVariant::Classic).student;
        assert_eq!(classic.display(&source), "Juan Pérez");
    }

    #[test]
    fn side_borders_only_inset_horizontally() {
        let border = VariantStyle::for_variant(TemplateVariant::Modern).container_border;
        assert_eq!(border.insets(), (Px(0.0), Px(24.0), Px(0.0), Px(24.0)));
    }
}
