use std::{num::FpCategory, ops::Add};

use serde_derive::{Deserialize, Serialize};

macro_rules! impl_partialeq {
    ($t:ty) => {
        impl PartialEq for $t {
            // custom compare function because of floating point inaccuracy
            fn eq(&self, other: &$t) -> bool {
                if (self.0.classify() == FpCategory::Zero
                    || self.0.classify() == FpCategory::Normal)
                    && (other.0.classify() == FpCategory::Zero
                        || other.0.classify() == FpCategory::Normal)
                {
                    // two decimal places are all a content stream ever carries
                    (self.0 * 100.0).round() == (other.0 * 100.0).round()
                } else {
                    false
                }
            }
        }
    };
}

/// Scale in point (1/72 inch), the unit of PDF user space
#[derive(Debug, Default, Copy, Clone, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pt(pub f32);

impl Eq for Pt {}

impl_partialeq!(Pt);

impl Pt {
    /// Formats the value as a PDF number: at most two decimals, no trailing zeros.
    ///
    /// `595.28` stays `595.28`, `60.0` becomes `60`, `-0.0` becomes `0`.
    pub fn to_pdf_number(self) -> String {
        format_number(self.0)
    }
}

pub(crate) fn format_number(value: f32) -> String {
    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

impl Add for Pt {
    type Output = Pt;
    fn add(self, other: Pt) -> Pt {
        Pt(self.0 + other.0)
    }
}

/// A position in page space, origin at the bottom left corner
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: Pt,
    pub y: Pt,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x: Pt(x), y: Pt(y) }
    }
}

/// Axis-aligned rectangle, `(x, y)` is the lower left corner
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: Pt,
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: Pt(x),
            y: Pt(y),
            width: Pt(width),
            height: Pt(height),
        }
    }

    pub fn from_wh(width: Pt, height: Pt) -> Self {
        Self {
            x: Pt(0.0),
            y: Pt(0.0),
            width,
            height,
        }
    }

    /// `[llx lly urx ury]`, the array form used by /MediaBox
    pub fn to_pdf_array(&self) -> String {
        format!(
            "[{} {} {} {}]",
            self.x.to_pdf_number(),
            self.y.to_pdf_number(),
            (self.x + self.width).to_pdf_number(),
            (self.y + self.height).to_pdf_number(),
        )
    }
}
