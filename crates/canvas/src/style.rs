use crate::LineCap;
use color::ColorSelection;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fill(pub ColorSelection);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: ColorSelection,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap: Option<LineCap>,
}

impl Stroke {
    pub fn new(color: impl Into<ColorSelection>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            cap: None,
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = Some(cap);
        self
    }
}

/// How one draw call paints its geometry.
///
/// With neither fill nor stroke the path is traced but nothing is painted.
/// `close` overrides the geometry's default (closed for circles, rectangles
/// and free paths, open for lines and curves).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<bool>,
}

impl Style {
    pub fn filled(color: impl Into<ColorSelection>) -> Self {
        Self::default().with_fill(color)
    }

    pub fn stroked(color: impl Into<ColorSelection>, width: f64) -> Self {
        Self::default().with_stroke(Stroke::new(color, width))
    }

    pub fn with_fill(mut self, color: impl Into<ColorSelection>) -> Self {
        self.fill = Some(Fill(color.into()));
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn closed(mut self, close: bool) -> Self {
        self.close = Some(close);
        self
    }
}
