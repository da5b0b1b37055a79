// Draw calls compiled against a recording surface.

use canvas::{Canvas, Draw, DrawOp, LineCap, RecordingSurface, Stroke, Style};
use color::Color;
use geometry::{Bezier2, Circle, Line, Path, Rect};
use math::{Vec2, TAU};

fn canvas() -> Canvas<RecordingSurface> {
    Canvas::new(RecordingSurface::new(100.0, 100.0))
}

fn position(ops: &[DrawOp], wanted: &DrawOp) -> Option<usize> {
    ops.iter().position(|op| op == wanted)
}

#[test]
fn test_fill_only_circle_never_strokes() {
    let mut canvas = canvas();
    canvas.draw().circle(
        Circle {
            center: Vec2::new(0.0, 0.0),
            radius: 5.0,
        },
        &Style::filled("red"),
    );

    let ops = canvas.surface().ops();
    assert_eq!(ops.iter().filter(|op| **op == DrawOp::Fill).count(), 1);
    assert!(
        !ops.contains(&DrawOp::Stroke),
        "a fill-only style must not stroke: {ops:?}"
    );
    assert!(!ops
        .iter()
        .any(|op| matches!(op, DrawOp::SetStrokeStyle { .. })));
}

#[test]
fn test_fill_runs_before_stroke() {
    let mut canvas = canvas();
    let style = Style::filled("white").with_stroke(Stroke::new("black", 2.0));
    canvas.draw().circle(
        Circle {
            center: Vec2::new(50.0, 50.0),
            radius: 10.0,
        },
        &style,
    );

    let ops = canvas.surface().ops();
    let fill = position(ops, &DrawOp::Fill).expect("fill was called");
    let stroke = position(ops, &DrawOp::Stroke).expect("stroke was called");
    assert!(fill < stroke, "fill must come before stroke: {ops:?}");
}

#[test]
fn test_circle_compiles_to_closed_arc() {
    let mut canvas = canvas();
    canvas.draw().circle(
        Circle {
            center: Vec2::new(10.0, 20.0),
            radius: 5.0,
        },
        &Style::stroked("blue", 1.0),
    );

    let ops = canvas.surface().ops();
    assert_eq!(ops[0], DrawOp::BeginPath);
    assert_eq!(ops[1], DrawOp::MoveTo { x: 15.0, y: 20.0 });
    assert_eq!(
        ops[2],
        DrawOp::Arc {
            x: 10.0,
            y: 20.0,
            radius: 5.0,
            start_angle: 0.0,
            end_angle: TAU,
            counterclockwise: false,
        }
    );
    assert_eq!(ops[3], DrawOp::ClosePath);
}

#[test]
fn test_negative_arc_runs_counterclockwise() {
    let mut canvas = canvas();
    let path = Path::new(Vec2::new(0.0, 10.0)).arc(Vec2::origin(), -TAU / 4.0);
    canvas.draw().path(&path, &Style::default().closed(false));

    let arc = canvas
        .surface()
        .ops()
        .iter()
        .find_map(|op| match op {
            DrawOp::Arc {
                start_angle,
                end_angle,
                counterclockwise,
                ..
            } => Some((*start_angle, *end_angle, *counterclockwise)),
            _ => None,
        })
        .expect("an arc op");
    assert!((arc.0 - TAU / 4.0).abs() < 1e-12);
    assert!(arc.1.abs() < 1e-12);
    assert!(arc.2);
    assert!(!canvas.surface().ops().contains(&DrawOp::ClosePath));
}

#[test]
fn test_rect_and_line_closing_defaults() {
    let mut canvas = canvas();
    let style = Style::stroked("black", 1.0);
    canvas.draw().rect(
        Rect {
            point: Vec2::origin(),
            width: 10.0,
            height: 5.0,
        },
        &style,
    );
    let rect_ops = canvas.surface_mut().take_ops();
    assert_eq!(
        rect_ops
            .iter()
            .filter(|op| matches!(op, DrawOp::LineTo { .. }))
            .count(),
        4
    );
    assert!(rect_ops.contains(&DrawOp::ClosePath));

    canvas.draw().line(
        Line {
            start: Vec2::origin(),
            end: Vec2::new(10.0, 10.0),
        },
        &style,
    );
    assert!(!canvas.surface().ops().contains(&DrawOp::ClosePath));

    canvas.surface_mut().take_ops();
    canvas.draw().line(
        Line {
            start: Vec2::origin(),
            end: Vec2::new(10.0, 10.0),
        },
        &style.clone().closed(true),
    );
    assert!(canvas.surface().ops().contains(&DrawOp::ClosePath));
}

#[test]
fn test_every_segment_kind_maps_to_one_call() {
    let mut canvas = canvas();
    let path = Path::new(Vec2::origin())
        .line(Vec2::new(10.0, 0.0))
        .move_to(Vec2::new(20.0, 0.0))
        .bez2(Vec2::new(25.0, 10.0), Vec2::new(30.0, 0.0))
        .bez3(Vec2::new(35.0, 10.0), Vec2::new(40.0, -10.0), Vec2::new(45.0, 0.0))
        .arc(Vec2::new(50.0, 0.0), TAU / 2.0);
    canvas.draw().path(&path, &Style::default());

    let ops = canvas.surface().ops();
    assert_eq!(
        &ops[2..7],
        &[
            DrawOp::LineTo { x: 10.0, y: 0.0 },
            DrawOp::MoveTo { x: 20.0, y: 0.0 },
            DrawOp::QuadraticCurveTo {
                cpx: 25.0,
                cpy: 10.0,
                x: 30.0,
                y: 0.0
            },
            DrawOp::BezierCurveTo {
                cp1x: 35.0,
                cp1y: 10.0,
                cp2x: 40.0,
                cp2y: -10.0,
                x: 45.0,
                y: 0.0
            },
            DrawOp::Arc {
                x: 50.0,
                y: 0.0,
                radius: 5.0,
                start_angle: TAU / 2.0,
                end_angle: TAU,
                counterclockwise: false,
            },
        ]
    );
    // no style, nothing painted
    assert!(!ops.contains(&DrawOp::Fill) && !ops.contains(&DrawOp::Stroke));
}

#[test]
fn test_stroke_sets_width_and_cap() {
    let mut canvas = canvas();
    let stroke = Stroke::new(Color::parse("#00ff00").unwrap(), 3.0).with_cap(LineCap::Round);
    canvas.draw().bez2(
        Bezier2 {
            start: Vec2::origin(),
            control: Vec2::new(5.0, 5.0),
            end: Vec2::new(10.0, 0.0),
        },
        &Style::default().with_stroke(stroke),
    );

    let ops = canvas.surface().ops();
    let tail = &ops[ops.len() - 4..];
    assert_eq!(
        tail,
        &[
            DrawOp::SetLineWidth { width: 3.0 },
            DrawOp::SetLineCap {
                cap: LineCap::Round
            },
            DrawOp::SetStrokeStyle {
                color: "rgb(0, 255, 0)".into()
            },
            DrawOp::Stroke,
        ]
    );
}

#[test]
fn test_brush_runs_once_after_paint() {
    let mut canvas = canvas();
    let mut calls = 0;
    let circle = Circle {
        center: Vec2::new(50.0, 50.0),
        radius: 10.0,
    };

    canvas.draw().with_brush(
        circle,
        &Style::filled("black").with_stroke(Stroke::new("white", 1.0)),
        |path: &Path, draw: &mut Draw<'_, RecordingSurface>| {
            calls += 1;
            assert_eq!(path.start(), Vec2::new(60.0, 50.0));
            draw.line(
                Line {
                    start: path.start(),
                    end: path.bounds().center(),
                },
                &Style::stroked("red", 0.5),
            );
        },
    );

    assert_eq!(calls, 1);
    let ops = canvas.surface().ops();
    let first_stroke = position(ops, &DrawOp::Stroke).expect("shape stroke");
    let brush_line = ops
        .iter()
        .position(|op| matches!(op, DrawOp::LineTo { .. }))
        .expect("brush drew a line");
    assert!(first_stroke < brush_line, "brush must run after painting");
    assert_eq!(ops.iter().filter(|op| **op == DrawOp::Fill).count(), 1);
}

#[test]
fn test_unparsable_css_passes_through() {
    let mut canvas = canvas();
    canvas.draw().circle(
        Circle {
            center: Vec2::origin(),
            radius: 1.0,
        },
        &Style::filled("var(--ink)"),
    );
    assert!(canvas.surface().ops().contains(&DrawOp::SetFillStyle {
        color: "var(--ink)".into()
    }));
}
