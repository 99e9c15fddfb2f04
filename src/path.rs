use serde::{Deserialize, Serialize};

use crate::compiler::Stroke;
use crate::geometry::{Point, Rect};

/// One renderable path operation, in the target coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    /// Close the outline back to its start, signaling fill semantics to the
    /// renderer.
    Close,
}

/// Vertical axis convention of the target coordinate space. Render targets
/// disagree on which way y grows, so this is an explicit flag rather than a
/// baked-in choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxis {
    /// Centered Cartesian space: y grows upward, points pass through
    /// untouched.
    #[default]
    Up,
    /// Screen space with a top-left origin: y is sign-flipped.
    Down,
}

/// Coordinate transform applied to every compiled point:
/// `rendered = center + (x, ±y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Where the turtle's origin lands in the target space.
    pub center: Point,
    pub y_axis: YAxis,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            center: Point::ZERO,
            y_axis: YAxis::Up,
        }
    }
}

impl PathConfig {
    fn transform(&self, p: Point) -> Point {
        let y = match self.y_axis {
            YAxis::Up => p.y,
            YAxis::Down => -p.y,
        };
        self.center + Point::new(p.x, y)
    }
}

/// Translate compiled strokes into renderable path operations.
///
/// Strokes with fewer than two points carry no visible geometry and are
/// dropped. Each remaining stroke becomes a `MoveTo` followed by `LineTo`s.
/// When the first point of the first emitted stroke equals the first point
/// of the last emitted stroke (exact equality, before the transform), a
/// final `Close` marks the outline as closed.
pub fn build_path(strokes: &[Stroke], config: &PathConfig) -> Vec<PathOp> {
    let visible: Vec<&Stroke> = strokes.iter().filter(|s| s.len() >= 2).collect();

    let mut ops = Vec::new();
    for stroke in &visible {
        let mut points = stroke.iter();
        if let Some(first) = points.next() {
            ops.push(PathOp::MoveTo(config.transform(*first)));
            for point in points {
                ops.push(PathOp::LineTo(config.transform(*point)));
            }
        }
    }

    if let (Some(first), Some(last)) = (visible.first(), visible.last()) {
        if first.first() == last.first() {
            ops.push(PathOp::Close);
        }
    }

    ops
}

/// Untransformed bounding box of everything `build_path` would emit, or
/// `None` when no stroke is visible. Lets a renderer size its viewport
/// before picking a [`PathConfig`] center.
pub fn bounds(strokes: &[Stroke]) -> Option<Rect> {
    let mut rect: Option<Rect> = None;
    for stroke in strokes.iter().filter(|s| s.len() >= 2) {
        for point in stroke {
            rect = Some(match rect {
                Some(r) => r.union_point(*point),
                None => Rect::from_point(*point),
            });
        }
    }
    rect
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::command::{forward, left, loop_, pen_down, pen_up, set_position};
    use crate::compiler::compile;

    fn square() -> Vec<Stroke> {
        compile(&[pen_down(), loop_(4, vec![forward(40), left(90)])]).unwrap()
    }

    #[test]
    fn square_emits_move_lines_and_close() {
        let ops = build_path(&square(), &PathConfig::default());
        assert_eq!(ops.len(), 6);
        assert!(matches!(ops[0], PathOp::MoveTo(_)));
        assert!(ops[1..5].iter().all(|op| matches!(op, PathOp::LineTo(_))));
        assert_eq!(ops[5], PathOp::Close);
    }

    #[test]
    fn disjoint_strokes_do_not_close() {
        let strokes = compile(&[
            pen_down(),
            forward(10),
            pen_up(),
            set_position(50, 50),
            pen_down(),
            forward(10),
        ])
        .unwrap();
        let ops = build_path(&strokes, &PathConfig::default());
        assert_eq!(ops.len(), 4);
        assert!(!ops.contains(&PathOp::Close));
    }

    #[test]
    fn single_stroke_always_reports_closed() {
        // With one visible stroke the first and last stroke coincide, so
        // the close rule trivially holds even for an open polyline.
        let strokes = compile(&[pen_down(), forward(10)]).unwrap();
        let ops = build_path(&strokes, &PathConfig::default());
        assert_eq!(ops.last(), Some(&PathOp::Close));
    }

    #[test]
    fn degenerate_strokes_are_dropped() {
        let strokes = compile(&[pen_down(), pen_up(), pen_down(), forward(10)]).unwrap();
        assert_eq!(strokes.len(), 2);
        let ops = build_path(&strokes, &PathConfig::default());
        // Only the two-point stroke survives.
        assert!(matches!(ops[0], PathOp::MoveTo(_)));
        assert!(matches!(ops[1], PathOp::LineTo(_)));
    }

    #[test]
    fn empty_and_invisible_programs_emit_nothing() {
        assert!(build_path(&[], &PathConfig::default()).is_empty());
        let pen_up_only = compile(&[forward(10), forward(-3)]).unwrap();
        assert!(build_path(&pen_up_only, &PathConfig::default()).is_empty());
    }

    #[test]
    fn center_offsets_every_point() {
        let config = PathConfig {
            center: Point::new(100.0, 200.0),
            y_axis: YAxis::Up,
        };
        let strokes = compile(&[pen_down(), forward(10)]).unwrap();
        let ops = build_path(&strokes, &config);
        assert_eq!(ops[0], PathOp::MoveTo(Point::new(100.0, 200.0)));
        assert_eq!(ops[1], PathOp::LineTo(Point::new(100.0, 210.0)));
    }

    #[test]
    fn y_down_mirrors_vertically() {
        let strokes = compile(&[pen_down(), forward(10)]).unwrap();
        let up = build_path(&strokes, &PathConfig::default());
        let down = build_path(
            &strokes,
            &PathConfig {
                center: Point::ZERO,
                y_axis: YAxis::Down,
            },
        );
        assert_eq!(up[1], PathOp::LineTo(Point::new(0.0, 10.0)));
        assert_eq!(down[1], PathOp::LineTo(Point::new(0.0, -10.0)));
    }

    #[test]
    fn bounds_covers_all_visible_strokes() {
        let rect = bounds(&square()).unwrap();
        assert!((rect.min.x - -40.0).abs() < 1e-9);
        assert!((rect.min.y - 0.0).abs() < 1e-9);
        assert!((rect.max.x - 0.0).abs() < 1e-9);
        assert!((rect.max.y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_ignores_degenerate_strokes_and_pen_up_travel() {
        let strokes = compile(&[forward(500), pen_down(), pen_up()]).unwrap();
        assert_eq!(bounds(&strokes), None);
    }

    #[test]
    fn path_ops_serde_roundtrip() {
        let ops = build_path(&square(), &PathConfig::default());
        let json = serde_json::to_string(&ops).unwrap();
        let back: Vec<PathOp> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ops);
    }
}
