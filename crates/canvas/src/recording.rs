//! A surface that records calls instead of drawing.
//!
//! Recorded ops serialize to JSON, one object per call tagged by `"op"`:
//!
//! ```json
//! [{"op": "begin_path"}, {"op": "move_to", "x": 5.0, "y": 0.0}]
//! ```

use crate::{BlendMode, LineCap, Surface, SurfaceHost};
use serde::{Deserialize, Serialize};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        cpx: f64,
        cpy: f64,
        x: f64,
        y: f64,
    },
    BezierCurveTo {
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    },
    ClosePath,
    SetFillStyle {
        color: String,
    },
    Fill,
    SetStrokeStyle {
        color: String,
    },
    SetLineWidth {
        width: f64,
    },
    SetLineCap {
        cap: LineCap,
    },
    Stroke,
    Save,
    Restore,
    Translate {
        x: f64,
        y: f64,
    },
    Rotate {
        angle: f64,
    },
    Scale {
        x: f64,
        y: f64,
    },
    SetBlendMode {
        mode: BlendMode,
    },
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// A composited layer and everything that was drawn on it.
    DrawLayer {
        ops: Vec<DrawOp>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Remove and return everything recorded so far.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    fn record(&mut self, op: DrawOp) {
        log::trace!("surface: {op:?}");
        self.ops.push(op);
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn begin_path(&mut self) {
        self.record(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(DrawOp::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.record(DrawOp::QuadraticCurveTo { cpx, cpy, x, y });
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.record(DrawOp::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        });
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        self.record(DrawOp::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn close_path(&mut self) {
        self.record(DrawOp::ClosePath);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.record(DrawOp::SetFillStyle {
            color: color.to_string(),
        });
    }

    fn fill(&mut self) {
        self.record(DrawOp::Fill);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.record(DrawOp::SetStrokeStyle {
            color: color.to_string(),
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.record(DrawOp::SetLineWidth { width });
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.record(DrawOp::SetLineCap { cap });
    }

    fn stroke(&mut self) {
        self.record(DrawOp::Stroke);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(DrawOp::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(DrawOp::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn save(&mut self) {
        self.record(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.record(DrawOp::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.record(DrawOp::Translate { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.record(DrawOp::Rotate { angle });
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.record(DrawOp::Scale { x, y });
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.record(DrawOp::SetBlendMode { mode });
    }

    fn create_layer(&self) -> Self {
        RecordingSurface::new(self.width, self.height)
    }

    fn draw_layer(&mut self, layer: &Self) {
        self.record(DrawOp::DrawLayer {
            ops: layer.ops.clone(),
        });
    }
}

/// Hands out [`RecordingSurface`]s, or nothing when built with
/// [`RecordingHost::unavailable`].
#[derive(Clone, Debug)]
pub struct RecordingHost {
    width: f64,
    height: f64,
    available: bool,
}

impl RecordingHost {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            available: false,
        }
    }
}

impl SurfaceHost for RecordingHost {
    type Surface = RecordingSurface;

    fn context_2d(&mut self) -> Option<RecordingSurface> {
        self.available
            .then(|| RecordingSurface::new(self.width, self.height))
    }
}
