use crate::colour::Colour;
use crate::diploma::FieldRole;
use crate::rect::Rect;
use crate::style::{Border, FontFamily, FontWeight, TextStyle};
use crate::units::Px;

/// A single line of centred text
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The document field this run displays, if any; fixed letterhead text has none
    pub role: Option<FieldRole>,
    /// The text exactly as displayed (already cased)
    pub text: String,
    pub family: FontFamily,
    pub weight: FontWeight,
    /// Font size (em size)
    pub size: Px,
    /// Height of the line box; the glyphs are centred vertically within it
    pub line_height: Px,
    /// Extra space after each glyph, in em
    pub tracking: f32,
    pub colour: Colour,
    /// Horizontal centre of the line
    pub center_x: Px,
    /// Top of the line box
    pub top: Px,
}

impl TextRun {
    pub fn new(text: String, style: &TextStyle, size: Px, line_height: f32) -> TextRun {
        TextRun {
            role: None,
            text,
            family: style.family,
            weight: style.weight,
            size,
            line_height: size * line_height,
            tracking: style.tracking,
            colour: style.colour,
            center_x: Px(0.0),
            top: Px(0.0),
        }
    }

    pub fn for_field(mut self, role: FieldRole) -> TextRun {
        self.role = Some(role);
        self
    }

    pub fn at(mut self, center_x: Px, top: Px) -> TextRun {
        self.center_x = center_x;
        self.top = top;
        self
    }

    pub fn bottom(&self) -> Px {
        self.top + self.line_height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A solid rectangle
    Fill { rect: Rect<Px>, colour: Colour },
    Text(TextRun),
    /// Where the institution logo goes; it is scaled to the slot's height and centred
    Logo { slot: Rect<Px> },
}

/// The rendered preview: a display list in preview pixels, top-left origin, painted
/// in order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: Px,
    pub height: Px,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: Px, height: Px) -> Scene {
        Scene {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rect<Px> {
        Rect::new(Px(0.0), Px(0.0), self.width, self.height)
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn fill(&mut self, rect: Rect<Px>, colour: Colour) {
        self.push(Element::Fill { rect, colour });
    }

    pub fn text(&mut self, run: TextRun) {
        self.push(Element::Text(run));
    }

    /// An outline of `width` drawn just inside `rect`
    pub fn stroke(&mut self, rect: Rect<Px>, width: Px, colour: Colour) {
        let Rect { x1, y1, x2, y2 } = rect;
        self.fill(Rect::new(x1, y1, x2, y1 + width), colour);
        self.fill(Rect::new(x1, y2 - width, x2, y2), colour);
        self.fill(Rect::new(x1, y1 + width, x1 + width, y2 - width), colour);
        self.fill(Rect::new(x2 - width, y1 + width, x2, y2 - width), colour);
    }

    pub fn border(&mut self, rect: Rect<Px>, border: Border) {
        match border {
            Border::Solid { width, colour } => self.stroke(rect, width, colour),
            Border::Double { width, colour } => {
                let line = width / 3.0;
                self.stroke(rect, line, colour);
                self.stroke(rect.inset_all(line * 2.0), line, colour);
            }
            Border::Sides { width, colour } => {
                let Rect { x1, y1, x2, y2 } = rect;
                self.fill(Rect::new(x1, y1, x1 + width, y2), colour);
                self.fill(Rect::new(x2 - width, y1, x2, y2), colour);
            }
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(run) => Some(run),
            _ => None,
        })
    }

    /// The run displaying a document field
    pub fn field(&self, role: FieldRole) -> Option<&TextRun> {
        self.texts().find(|run| run.role == Some(role))
    }
}
