use indexmap::IndexMap;

use crate::command::Command;
use crate::error::CompileError;
use crate::geometry::Point;

/// Default cap on loop/macro nesting depth.
const DEFAULT_MAX_DEPTH: usize = 256;
/// Default cap on total emitted points across all strokes.
const DEFAULT_MAX_POINTS: usize = 1_000_000;

/// A contiguous pen-down run of points, rendered as one connected polyline.
pub type Stroke = Vec<Point>;

/// Guards against pathological programs. Compilation is structurally
/// recursive over a finite command tree, so it always terminates — but a
/// macro that replays itself nests without bound, and enormous loop counts
/// can emit points faster than anyone can render them. Exceeding either
/// limit fails the whole `compile` call; there is no partial output.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum loop/macro nesting depth.
    pub max_depth: usize,
    /// Maximum total points emitted across all strokes.
    pub max_points: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

/// Compile a turtle program into strokes with default [`Limits`].
///
/// The turtle starts at the origin facing north (90°), pen up. Output is
/// uncompacted: strokes with fewer than two points are kept and are the
/// output adapter's job to drop.
pub fn compile(program: &[Command]) -> Result<Vec<Stroke>, CompileError> {
    compile_with_limits(program, &Limits::default())
}

/// Compile with caller-chosen [`Limits`].
pub fn compile_with_limits(
    program: &[Command],
    limits: &Limits,
) -> Result<Vec<Stroke>, CompileError> {
    let mut interp = Interpreter::new(limits.clone());
    interp.run(program, 0)?;
    Ok(interp.strokes)
}

fn deg2rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Mutable compiler state for one run. Heading, position and pen state are
/// shared across loop and macro bodies — a macro replayed inside a loop sees
/// and mutates the same turtle as the enclosing scope, and macros defined
/// anywhere are global for the rest of the run.
struct Interpreter {
    /// Current direction in radians. Accumulates across turns, never
    /// normalized.
    heading: f64,
    position: Point,
    pen_down: bool,
    strokes: Vec<Stroke>,
    macros: IndexMap<String, Vec<Command>>,
    limits: Limits,
    points_emitted: usize,
}

impl Interpreter {
    fn new(limits: Limits) -> Self {
        Self {
            heading: deg2rad(90.0),
            position: Point::ZERO,
            pen_down: false,
            strokes: Vec::new(),
            macros: IndexMap::new(),
            limits,
            points_emitted: 0,
        }
    }

    fn run(&mut self, commands: &[Command], depth: usize) -> Result<(), CompileError> {
        if depth >= self.limits.max_depth {
            return Err(CompileError::RecursionLimitExceeded {
                limit: self.limits.max_depth,
            });
        }
        for command in commands {
            self.exec(command, depth)?;
        }
        Ok(())
    }

    // The ±1.0 comparisons implement the axis-snap rule and must be exact.
    #[allow(clippy::float_cmp)]
    fn exec(&mut self, command: &Command, depth: usize) -> Result<(), CompileError> {
        match command {
            Command::Pass => {}
            Command::PenUp => self.pen_down = false,
            Command::PenDown => {
                if !self.pen_down {
                    // Seed the new stroke with the current position so the
                    // upcoming segment has a visible start point.
                    self.charge_point()?;
                    self.strokes.push(vec![self.position]);
                }
                self.pen_down = true;
            }
            Command::Center => {
                let next = Point::ZERO;
                if self.pen_down {
                    self.append(next)?;
                }
                self.position = next;
            }
            Command::ResetHeading => self.heading = deg2rad(90.0),
            Command::SetHeading(degrees) => {
                self.heading = deg2rad(90.0 + f64::from(*degrees));
            }
            Command::SetPosition(x, y) => {
                let next = Point::new(f64::from(*x), f64::from(*y));
                if next == self.position {
                    return Ok(());
                }
                if self.pen_down {
                    self.append(next)?;
                }
                self.position = next;
            }
            Command::Turn(degrees) => self.heading += deg2rad(f64::from(*degrees)),
            Command::Forward(length) => {
                let mut dx = self.heading.cos();
                let mut dy = self.heading.sin();
                if dx.abs() == 1.0 {
                    dy = 0.0;
                } else if dy.abs() == 1.0 {
                    dx = 0.0;
                }
                let len = f64::from(*length);
                let next = self.position + Point::new(dx * len, dy * len);
                if self.pen_down {
                    self.append(next)?;
                }
                self.position = next;
            }
            Command::Loop(count, body) => {
                // A negative count runs zero times.
                for _ in 0..(*count).max(0) {
                    self.run(body, depth + 1)?;
                }
            }
            Command::SetMacro(name, body) => {
                self.macros.insert(name.clone(), body.clone());
            }
            Command::PlayMacro(name) => {
                // An unknown macro name is a silent no-op.
                let body = self.macros.get(name).cloned();
                if let Some(body) = body {
                    self.run(&body, depth + 1)?;
                }
            }
        }
        Ok(())
    }

    /// Append a point to the current stroke.
    fn append(&mut self, point: Point) -> Result<(), CompileError> {
        self.charge_point()?;
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(point);
        }
        Ok(())
    }

    fn charge_point(&mut self) -> Result<(), CompileError> {
        self.points_emitted += 1;
        if self.points_emitted > self.limits.max_points {
            return Err(CompileError::PointLimitExceeded {
                limit: self.limits.max_points,
            });
        }
        Ok(())
    }
}
