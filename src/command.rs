use serde::{Deserialize, Serialize};

/// One turtle instruction. A program is an ordered `Vec<Command>`; order is
/// significant, and `Loop`/macro bodies nest commands into a tree.
///
/// Commands are pure data — no validation happens at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Does nothing.
    Pass,
    /// Move the turtle back to the origin.
    Center,
    /// Reset the heading to the initial "north" direction.
    ResetHeading,
    /// Set the heading, in degrees relative to the north baseline.
    SetHeading(i32),
    /// Teleport the turtle to the given coordinates.
    SetPosition(i32, i32),
    /// Stop drawing.
    PenUp,
    /// Start drawing; opens a new stroke.
    PenDown,
    /// Turn left by the given angle in degrees.
    Turn(i32),
    /// Move forward by the given distance.
    Forward(i32),
    /// Run the body the given number of times.
    Loop(i32, Vec<Command>),
    /// Register a named macro.
    SetMacro(String, Vec<Command>),
    /// Replay a previously registered macro.
    PlayMacro(String),
}

/// A complete turtle program.
pub type Program = Vec<Command>;

// Free constructor helpers so literal programs read like the command
// language itself: `vec![pen_down(), forward(40), left(90)]`.

/// Does nothing.
pub fn pass() -> Command {
    Command::Pass
}

/// Move the turtle back to the origin.
pub fn center() -> Command {
    Command::Center
}

/// Reset the heading to the initial "north" direction.
pub fn reset_heading() -> Command {
    Command::ResetHeading
}

/// Set the heading, in degrees relative to the north baseline.
pub fn set_heading(degrees: i32) -> Command {
    Command::SetHeading(degrees)
}

/// Teleport the turtle to the given coordinates.
pub fn set_position(x: i32, y: i32) -> Command {
    Command::SetPosition(x, y)
}

/// Move without drawing.
pub fn pen_up() -> Command {
    Command::PenUp
}

/// Move with drawing.
pub fn pen_down() -> Command {
    Command::PenDown
}

/// Turn left by the given angle.
pub fn left(degrees: i32) -> Command {
    Command::Turn(degrees)
}

/// Turn right by the given angle.
pub fn right(degrees: i32) -> Command {
    Command::Turn(-degrees)
}

/// Move forward by the given distance.
pub fn forward(length: i32) -> Command {
    Command::Forward(length)
}

/// Run `body` `count` times.
pub fn loop_(count: i32, body: Vec<Command>) -> Command {
    Command::Loop(count, body)
}

/// Register a named macro.
pub fn set_macro(name: impl Into<String>, body: Vec<Command>) -> Command {
    Command::SetMacro(name.into(), body)
}

/// Replay a previously registered macro.
pub fn play_macro(name: impl Into<String>) -> Command {
    Command::PlayMacro(name.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn helpers_build_the_same_commands_as_literals() {
        assert_eq!(forward(40), Command::Forward(40));
        assert_eq!(left(90), Command::Turn(90));
        assert_eq!(right(90), Command::Turn(-90));
        assert_eq!(
            loop_(4, vec![forward(10), left(90)]),
            Command::Loop(4, vec![Command::Forward(10), Command::Turn(90)])
        );
        assert_eq!(
            set_macro("square", vec![forward(10)]),
            Command::SetMacro("square".to_string(), vec![Command::Forward(10)])
        );
    }

    #[test]
    fn serde_roundtrip() {
        let program = vec![
            pen_down(),
            loop_(4, vec![forward(10), right(90)]),
            set_macro("m", vec![center()]),
            play_macro("m"),
            pen_up(),
        ];
        let json = serde_json::to_string(&program).unwrap();
        let back: Vec<Command> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, program);
    }

    #[test]
    fn json_shape_is_snake_case() {
        let json = serde_json::to_string(&vec![pen_down(), forward(40)]).unwrap();
        assert_eq!(json, r#"["pen_down",{"forward":40}]"#);
    }
}
