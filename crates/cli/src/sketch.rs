//! The built-in sketches `easel render` can draw.
//!
//! Every sketch draws through [`Canvas`] and pulls randomness from one
//! [`Random`] seeded with the run seed, so a seed names a drawing.

use crate::config::SketchConfig;
use anyhow::{Context, Result};
use canvas::{BlendMode, Canvas, DrawOp, LineCap, RecordingHost, Stroke, Style, Surface};
use color::Color;
use geometry::{Circle, Path, Rect};
use math::{Vec2, TAU};
use random::{curl, CurlOptions, Random, Simplex3};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SketchKind {
    /// Circles of random size and palette color.
    #[default]
    Scatter,
    /// Lines traced along the curl of a noise field.
    Flow,
    /// A jittered grid of squares composited with multiply.
    Grid,
}

/// Render `config` with `seed` and return every recorded surface call.
pub fn render(config: &SketchConfig, seed: &str) -> Result<Vec<DrawOp>> {
    let mut host = RecordingHost::new(config.width, config.height);
    let mut canvas = Canvas::from_host(&mut host).context("Failed to acquire a drawing surface")?;
    let mut random = Random::new("sketch", Some(seed));

    log::info!(
        "Rendering {} at {}x{} with seed {:?}",
        config.sketch,
        config.width,
        config.height,
        seed
    );

    canvas.fill_background(config.background.as_str());
    match config.sketch {
        SketchKind::Scatter => scatter(&mut canvas, &mut random, config)?,
        SketchKind::Flow => flow(&mut canvas, &mut random, config),
        SketchKind::Grid => grid(&mut canvas, &mut random, config),
    }

    let ops = canvas.into_surface().into_ops();
    log::debug!("Recorded {} ops", ops.len());
    Ok(ops)
}

fn scatter<S: Surface>(
    canvas: &mut Canvas<S>,
    random: &mut Random,
    config: &SketchConfig,
) -> Result<()> {
    let palette: Vec<Color> = random.with_context("palette", None, |random| {
        (0..5).map(|_| Color::random(random)).collect()
    });
    let base_radius = canvas.min_dim() / 40.0;

    for _ in 0..config.count {
        let center = Vec2::new(
            random.next() * canvas.width(),
            random.next() * canvas.height(),
        );
        let radius = random.fuzzy(base_radius).float(base_radius * 0.75).max(0.5);
        let color = *random.choose_one(&palette)?;
        let mut style = Style::filled(color);
        if random.bool(0.3) {
            style = style.with_stroke(Stroke::new("black", config.stroke_width));
        }
        canvas.draw().circle(Circle { center, radius }, &style);
    }
    Ok(())
}

fn flow<S: Surface>(canvas: &mut Canvas<S>, random: &mut Random, config: &SketchConfig) {
    let field = Simplex3::from_random(random, config.noise.clone());
    let (cold, warm) = random.with_context("palette", None, |random| {
        (Color::random(random), Color::random(random))
    });
    let step = canvas.min_dim() / 100.0;
    let steps = 40;

    for _ in 0..config.count {
        let start = Vec2::new(
            random.next() * canvas.width(),
            random.next() * canvas.height(),
        );
        let mut path = Path::new(start);
        let mut position = start;
        for _ in 0..steps {
            let angle = curl(position, &field, CurlOptions::default());
            position = position.add(Vec2::unit().rotate(angle).scale(step));
            path = path.line(position);
        }

        let tint = Color::mix(&cold, &warm, (start.y() / canvas.height()) as f32);
        let stroke = Stroke::new(tint, config.stroke_width).with_cap(LineCap::Round);
        canvas
            .draw()
            .path(&path, &Style::default().with_stroke(stroke).closed(false));
    }
}

fn grid<S: Surface>(canvas: &mut Canvas<S>, random: &mut Random, config: &SketchConfig) {
    let cells = (config.count as f64).sqrt().ceil().max(1.0) as usize;
    let size = canvas.min_dim() / cells as f64;
    let positions: Vec<(usize, usize)> = (0..cells)
        .flat_map(|row| (0..cells).map(move |col| (row, col)))
        .collect();
    let order = random.shuffle(&positions);
    let colors = random.with_context("palette", None, |random| {
        [Color::random(random), Color::random(random)]
    });

    canvas.layer(BlendMode::Multiply, |layer| {
        for (i, (row, col)) in order.iter().take(config.count).enumerate() {
            let center = Vec2::new((*col as f64 + 0.5) * size, (*row as f64 + 0.5) * size);
            let angle = random.fuzzy(0.0).float(0.2) * TAU / 8.0;
            let side = size * (0.6 + 0.3 * random.next());

            let mut transform = layer.transform();
            transform.translate(center).rotate(angle);
            transform.draw().rect(
                Rect {
                    point: Vec2::splat(-side / 2.0),
                    width: side,
                    height: side,
                },
                &Style::filled(colors[i % colors.len()])
                    .with_stroke(Stroke::new("black", config.stroke_width)),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn config(sketch: SketchKind) -> SketchConfig {
        SketchConfig {
            width: 120.0,
            height: 80.0,
            sketch,
            count: 12,
            ..SketchConfig::default()
        }
    }

    #[test]
    fn test_same_seed_same_drawing() {
        for kind in SketchKind::iter() {
            let first = render(&config(kind), "lichen").unwrap();
            let second = render(&config(kind), "lichen").unwrap();
            assert_eq!(first, second, "{kind} is not deterministic");
        }
    }

    #[test]
    fn test_seed_changes_drawing() {
        let first = render(&config(SketchKind::Scatter), "lichen").unwrap();
        let second = render(&config(SketchKind::Scatter), "moss").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_background_comes_first() {
        let ops = render(&config(SketchKind::Flow), "fern").unwrap();
        assert_eq!(
            ops[0],
            DrawOp::SetFillStyle {
                color: "rgb(255, 255, 255)".into()
            }
        );
        assert!(matches!(ops[1], DrawOp::FillRect { .. }));
    }

    #[test]
    fn test_scatter_draws_count_circles() {
        let ops = render(&config(SketchKind::Scatter), "lichen").unwrap();
        let circles = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Arc { .. }))
            .count();
        assert_eq!(circles, 12);
    }

    #[test]
    fn test_grid_is_one_balanced_layer() {
        let ops = render(&config(SketchKind::Grid), "slate").unwrap();
        let layers: Vec<&Vec<DrawOp>> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::DrawLayer { ops } => Some(ops),
                _ => None,
            })
            .collect();
        assert_eq!(layers.len(), 1);

        let saves = layers[0].iter().filter(|op| **op == DrawOp::Save).count();
        let restores = layers[0].iter().filter(|op| **op == DrawOp::Restore).count();
        assert_eq!(saves, 12);
        assert_eq!(saves, restores);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SketchKind::Flow.to_string(), "flow");
        assert_eq!("grid".parse::<SketchKind>().unwrap(), SketchKind::Grid);
    }
}
