use super::margins::Margins;
use super::scene::{Element, Scene, TextRun};
use crate::colour::colours;
use crate::config::Letterhead;
use crate::diploma::{DiplomaDocument, FieldRole};
use crate::rect::Rect;
use crate::settings::ScaleSettings;
use crate::sizing::{padded_name, BaseSizes, RenderedSizes};
use crate::style::{tracking, FontFamily, FontWeight, TemplateVariant, TextStyle, VariantStyle};
use crate::units::Px;

/// Width of the preview surface
pub const PREVIEW_WIDTH: Px = Px(896.0);
/// Height of the preview surface; letter landscape proportions (11 x 8.5)
pub const PREVIEW_HEIGHT: Px = Px(896.0 * 8.5 / 11.0);

const PADDING: Px = Px(24.0);
const LOGO_HEIGHT: Px = Px(64.0);

// line-height multipliers
const LEADING_NONE: f32 = 1.0;
const LEADING_TIGHT: f32 = 1.25;
const LEADING_NORMAL: f32 = 1.5;

// fixed text sizes (size, line height) in px
const TEXT_4XL: Px = Px(36.0);
const TEXT_SM: (Px, Px) = (Px(14.0), Px(20.0));
const TEXT_XS: (Px, Px) = (Px(12.0), Px(16.0));

fn serif(weight: FontWeight, colour: crate::Colour) -> TextStyle {
    TextStyle::new(FontFamily::Serif, weight, colour)
}

fn fixed_run(text: &str, style: TextStyle, (size, line_height): (Px, Px)) -> TextRun {
    let mut run = TextRun::new(style.display(text), &style, size, 1.0);
    run.line_height = line_height;
    run
}

/// Composes the diploma text, the template variant and the scale multipliers into
/// a [Scene]. Rendering is pure: the same inputs always produce the same scene.
#[derive(Debug, Default, Clone)]
pub struct PreviewRenderer {
    pub letterhead: Letterhead,
}

impl PreviewRenderer {
    pub fn new(letterhead: Letterhead) -> PreviewRenderer {
        PreviewRenderer { letterhead }
    }

    pub fn render(
        &self,
        doc: &DiplomaDocument,
        variant: TemplateVariant,
        settings: &ScaleSettings,
    ) -> Scene {
        let style = VariantStyle::for_variant(variant);
        let sizes = RenderedSizes::compute(doc, variant, settings);
        let base = BaseSizes::for_variant(variant);

        let mut scene = Scene::new(PREVIEW_WIDTH, PREVIEW_HEIGHT);
        let page = scene.bounds();
        scene.fill(page, colours::WHITE);
        scene.border(page, style.container_border);

        let frame = Margins::from(style.container_border.insets())
            .plus(Margins::all(PADDING))
            .apply(page);

        let mut inner = Margins::all(PADDING);
        if let Some(border) = style.inner_border {
            scene.border(frame, border);
            inner = inner.plus(border.insets().into());
        }
        let content = inner.apply(frame);
        let center_x = content.x1 + content.width() / 2.0;

        let header_bottom = self.header(&mut scene, content, center_x);
        let footer_top = self.footer(&mut scene, content, doc, &sizes, &base);
        self.body(
            &mut scene,
            header_bottom + Px(8.0),
            footer_top - Px(8.0),
            center_x,
            doc,
            &sizes,
            &style,
        );

        scene
    }

    /// Logo, institution name, subtitle and address. Returns the bottom edge.
    fn header(&self, scene: &mut Scene, content: Rect<Px>, center_x: Px) -> Px {
        let lh = &self.letterhead;
        let mut y = content.y1;

        scene.push(Element::Logo {
            slot: Rect::new(content.x1, y, content.x2, y + LOGO_HEIGHT),
        });
        y += LOGO_HEIGHT + Px(8.0);

        let title = TextStyle::new(FontFamily::Cormorant, FontWeight::Bold, colours::GRAY_900)
            .tracking(tracking::WIDER);
        let run = TextRun::new(title.display(&lh.institution), &title, TEXT_4XL, LEADING_NONE)
            .at(center_x, y);
        y = run.bottom() + Px(4.0);
        scene.text(run);

        let subtitle = serif(FontWeight::Bold, colours::GRAY_700).tracking(tracking::WIDE);
        let run = fixed_run(&lh.subtitle, subtitle, TEXT_SM).at(center_x, y);
        y = run.bottom() + Px(2.0);
        scene.text(run);

        let run = fixed_run(&lh.address, serif(FontWeight::Regular, colours::GRAY_500), TEXT_XS)
            .at(center_x, y);
        y = run.bottom();
        scene.text(run);

        y
    }

    /// Two signature columns, bottom-aligned, centred at one and three quarters of the
    /// width. Returns the top edge of the footer.
    fn footer(
        &self,
        scene: &mut Scene,
        content: Rect<Px>,
        doc: &DiplomaDocument,
        sizes: &RenderedSizes,
        base: &BaseSizes,
    ) -> Px {
        let bottom = content.y2 - Px(8.0);
        let column_width = content.width() / 3.0;
        let name_style = serif(FontWeight::Regular, colours::GRAY_800);
        let title_style = serif(FontWeight::Bold, colours::GRAY_500)
            .tracking(tracking::WIDER)
            .uppercase();
        let title_size = Px::from(base.sign_title);

        let columns = [
            (
                content.x1 + content.width() / 4.0,
                FieldRole::DirectorName,
                &self.letterhead.director_title,
            ),
            (
                content.x1 + content.width() * 3.0 / 4.0,
                FieldRole::SecretaryName,
                &self.letterhead.secretary_title,
            ),
        ];

        let mut top = bottom;
        for (cx, role, title) in columns {
            let title_run = fixed_run(title, title_style, (title_size, TEXT_XS.1));
            let title_top = bottom - title_run.line_height;

            let name_size = Px::from(sizes.get(role));
            let name_top = title_top - Px(4.0) - name_size * LEADING_NONE;
            let rule_top = name_top - Px(8.0) - Px(1.0);

            scene.fill(
                Rect::new(
                    cx - column_width / 2.0,
                    rule_top,
                    cx + column_width / 2.0,
                    rule_top + Px(1.0),
                ),
                colours::GRAY_400,
            );
            scene.text(
                TextRun::new(
                    name_style.display(doc.get(role)),
                    &name_style,
                    name_size,
                    LEADING_NONE,
                )
                .for_field(role)
                .at(cx, name_top),
            );
            scene.text(title_run.at(cx, title_top));

            if rule_top < top {
                top = rule_top;
            }
        }

        top - Px(8.0)
    }

    /// The vertically centred middle block, from the presentation line down to the date
    #[allow(clippy::too_many_arguments)]
    fn body(
        &self,
        scene: &mut Scene,
        top: Px,
        bottom: Px,
        center_x: Px,
        doc: &DiplomaDocument,
        sizes: &RenderedSizes,
        style: &VariantStyle,
    ) {
        let lh = &self.letterhead;
        let grey_caption = serif(FontWeight::Regular, colours::GRAY_600);
        let grade_style = serif(FontWeight::Bold, colours::GRAY_800);

        // (top margin, run, bottom margin)
        let rows: Vec<(Px, TextRun, Px)> = vec![
            (
                Px(0.0),
                fixed_run(
                    &lh.presentation,
                    grey_caption.tracking(tracking::SPACED),
                    TEXT_SM,
                ),
                Px(8.0),
            ),
            (
                Px(4.0),
                TextRun::new(
                    style.student.display(&padded_name(&doc.student_name)),
                    &style.student,
                    sizes.student_name.into(),
                    LEADING_TIGHT,
                )
                .for_field(FieldRole::StudentName),
                Px(4.0),
            ),
            (
                Px(8.0),
                fixed_run(
                    &lh.completion,
                    grey_caption.tracking(tracking::WIDE),
                    TEXT_XS,
                ),
                Px(0.0),
            ),
            (
                Px(8.0),
                TextRun::new(
                    grade_style.display(&doc.course_grade),
                    &grade_style,
                    sizes.course_grade.into(),
                    LEADING_TIGHT,
                )
                .for_field(FieldRole::CourseGrade),
                Px(0.0),
            ),
            (
                Px(4.0),
                TextRun::new(
                    style.course.display(&doc.course_name),
                    &style.course,
                    sizes.course_name.into(),
                    LEADING_NONE,
                )
                .for_field(FieldRole::CourseName),
                Px(4.0),
            ),
            (
                Px(8.0),
                TextRun::new(
                    grey_caption.display(&doc.date),
                    &grey_caption,
                    sizes.date.into(),
                    LEADING_NORMAL,
                )
                .for_field(FieldRole::Date),
                Px(0.0),
            ),
        ];

        let total: Px = rows
            .iter()
            .map(|(before, run, after)| *before + run.line_height + *after)
            .sum();
        let mut y = top + ((bottom - top) - total) / 2.0;

        for (before, run, after) in rows {
            y += before;
            let run = run.at(center_x, y);
            y = run.bottom() + after;
            scene.text(run);
        }
    }
}
