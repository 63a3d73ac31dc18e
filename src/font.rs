use serde_derive::{Deserialize, Serialize};

/// The two standard Type1 fonts the report uses. Every conforming reader
/// ships these, so no font program is embedded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 2] = [BuiltinFont::Helvetica, BuiltinFont::HelveticaBold];

    /// Resource name used in the page /Resources dictionary and by `Tf`
    pub fn get_pdf_id(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
        }
    }

    /// The /BaseFont name of the standard font
    pub fn get_id(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Font dictionary body, written as-is into the font object
    pub fn get_dict(&self) -> String {
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
            self.get_id()
        )
    }

    /// Rough advance width of one character, as a fraction of the font size.
    ///
    /// Only used to center or right-align short labels, never for wrapping.
    pub fn average_char_width(&self) -> f32 {
        match self {
            BuiltinFont::Helvetica => 0.5,
            BuiltinFont::HelveticaBold => 0.55,
        }
    }
}
