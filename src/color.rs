//! Device colors used by the report (RGB or greyscale)

use serde_derive::{Deserialize, Serialize};

use crate::units::format_number;

/// Set the stroking color space to DeviceGray
const OP_COLOR_SET_STROKE_CS_DEVICEGRAY: &str = "G";
/// Set the fill color space to DeviceGray
const OP_COLOR_SET_FILL_CS_DEVICEGRAY: &str = "g";
/// Set the stroking color space to DeviceRGB
const OP_COLOR_SET_STROKE_CS_DEVICERGB: &str = "RG";
/// Set the fill color space to DeviceRGB
const OP_COLOR_SET_FILL_CS_DEVICERGB: &str = "rg";

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "data")]
pub enum Color {
    Rgb(Rgb),
    Greyscale(Greyscale),
}

impl Color {
    /// Components in the range 0.0 - 1.0
    pub fn into_vec(&self) -> Vec<f32> {
        match self {
            Color::Rgb(rgb) => vec![rgb.r, rgb.g, rgb.b],
            Color::Greyscale(gs) => vec![gs.percent],
        }
    }

    /// Content stream operation that sets this color for fills (`fill == true`)
    /// or for strokes
    pub(crate) fn to_operation(&self, fill: bool) -> String {
        let operator = match (self, fill) {
            (Color::Rgb(_), true) => OP_COLOR_SET_FILL_CS_DEVICERGB,
            (Color::Rgb(_), false) => OP_COLOR_SET_STROKE_CS_DEVICERGB,
            (Color::Greyscale(_), true) => OP_COLOR_SET_FILL_CS_DEVICEGRAY,
            (Color::Greyscale(_), false) => OP_COLOR_SET_STROKE_CS_DEVICEGRAY,
        };
        let mut parts = self
            .into_vec()
            .into_iter()
            .map(|c| format_number(c.clamp(0.0, 1.0)))
            .collect::<Vec<_>>();
        parts.push(operator.to_string());
        parts.join(" ")
    }
}

/// RGB color
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Greyscale color, 0.0 is black and 1.0 is white
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greyscale {
    pub percent: f32,
}

impl Greyscale {
    pub const fn new(percent: f32) -> Self {
        Self { percent }
    }
}
