use serde_derive::{Deserialize, Serialize};

use crate::{
    color::Color,
    font::BuiltinFont,
    text::escape,
    units::{Point, Pt, Rect},
};

/// How a rectangle path is painted
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaintMode {
    /// `f`: fill with the current fill color
    #[default]
    Fill,
    /// `S`: stroke with the current outline color and thickness
    Stroke,
    /// `B`: fill, then stroke
    FillStroke,
}

impl PaintMode {
    fn operator(&self) -> &'static str {
        match self {
            PaintMode::Fill => "f",
            PaintMode::Stroke => "S",
            PaintMode::FillStroke => "B",
        }
    }
}

/// Drawing commands that make up the content stream of one page
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "cmd", content = "args")]
pub enum Op {
    /// `q`: saves the graphics state (colors, line width) on the stack
    SaveGraphicsState,
    /// `Q`: pops the last saved graphics state
    RestoreGraphicsState,
    /// Sets the fill color for texts / rectangles
    SetFillColor { col: Color },
    /// Sets the outline color for lines / rectangles
    SetOutlineColor { col: Color },
    /// `w`: sets the outline thickness for lines / rectangles
    SetOutlineThickness { pt: Pt },
    /// Adds a rectangle to the path and paints it
    DrawRectangle { rect: Rect, mode: PaintMode },
    /// Strokes a straight line
    DrawLine { from: Point, to: Point },
    /// Writes a single line of text with its baseline starting at `pos`.
    ///
    /// Expands to a self-contained `BT .. ET` text object, so no text state
    /// leaks from one command into the next.
    WriteText {
        font: BuiltinFont,
        size: Pt,
        pos: Point,
        text: String,
    },
}

impl Op {
    /// The text of a `WriteText` command
    pub fn text(&self) -> Option<&str> {
        match self {
            Op::WriteText { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    fn encode_into(&self, out: &mut String) {
        match self {
            Op::SaveGraphicsState => out.push('q'),
            Op::RestoreGraphicsState => out.push('Q'),
            Op::SetFillColor { col } => out.push_str(&col.to_operation(true)),
            Op::SetOutlineColor { col } => out.push_str(&col.to_operation(false)),
            Op::SetOutlineThickness { pt } => {
                out.push_str(&pt.to_pdf_number());
                out.push_str(" w");
            }
            Op::DrawRectangle { rect, mode } => {
                out.push_str(&format!(
                    "{} {} {} {} re {}",
                    rect.x.to_pdf_number(),
                    rect.y.to_pdf_number(),
                    rect.width.to_pdf_number(),
                    rect.height.to_pdf_number(),
                    mode.operator(),
                ));
            }
            Op::DrawLine { from, to } => {
                out.push_str(&format!(
                    "{} {} m {} {} l S",
                    from.x.to_pdf_number(),
                    from.y.to_pdf_number(),
                    to.x.to_pdf_number(),
                    to.y.to_pdf_number(),
                ));
            }
            Op::WriteText {
                font,
                size,
                pos,
                text,
            } => {
                out.push_str(&format!(
                    "BT /{} {} Tf {} {} Td ({}) Tj ET",
                    font.get_pdf_id(),
                    size.to_pdf_number(),
                    pos.x.to_pdf_number(),
                    pos.y.to_pdf_number(),
                    escape(text),
                ));
            }
        }
    }
}

/// Encodes the commands into content stream bytes, one operation per line.
///
/// Text is sanitized and escaped here, so every byte of the result is
/// printable ASCII or a newline.
pub fn encode_ops(ops: &[Op]) -> Vec<u8> {
    let mut out = String::new();
    for (i, op) in ops.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        op.encode_into(&mut out);
    }
    out.into_bytes()
}
