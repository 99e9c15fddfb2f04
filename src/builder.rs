use crate::command::Command;

/// Block-structured assembly for turtle programs.
///
/// This is sugar over building a `Vec<Command>` by hand: every method appends
/// exactly one command, nested blocks become `Loop` bodies, and the compiler
/// cannot tell builder output apart from a literal command list.
///
/// ```
/// use turtle_path::ProgramBuilder;
///
/// let program = ProgramBuilder::new()
///     .pen_down()
///     .repeat(4, |b| b.forward(40).left(90))
///     .pen_up()
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    commands: Vec<Command>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal command.
    pub fn push(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn pass(self) -> Self {
        self.push(Command::Pass)
    }

    pub fn center(self) -> Self {
        self.push(Command::Center)
    }

    pub fn reset_heading(self) -> Self {
        self.push(Command::ResetHeading)
    }

    pub fn set_heading(self, degrees: i32) -> Self {
        self.push(Command::SetHeading(degrees))
    }

    pub fn set_position(self, x: i32, y: i32) -> Self {
        self.push(Command::SetPosition(x, y))
    }

    pub fn pen_up(self) -> Self {
        self.push(Command::PenUp)
    }

    pub fn pen_down(self) -> Self {
        self.push(Command::PenDown)
    }

    pub fn left(self, degrees: i32) -> Self {
        self.push(Command::Turn(degrees))
    }

    pub fn right(self, degrees: i32) -> Self {
        self.push(Command::Turn(-degrees))
    }

    pub fn forward(self, length: i32) -> Self {
        self.push(Command::Forward(length))
    }

    /// Run the block `count` times: appends a single `Loop` command wrapping
    /// the block's commands.
    pub fn repeat(self, count: i32, block: impl FnOnce(Self) -> Self) -> Self {
        let body = block(Self::new()).build();
        self.push(Command::Loop(count, body))
    }

    /// Conditionally include a block. When `condition` holds the block is
    /// wrapped in `Loop(1, body)`; otherwise a `Pass` is appended, so the
    /// program shape stays one-command-per-statement either way.
    pub fn when(self, condition: bool, block: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            let body = block(Self::new()).build();
            self.push(Command::Loop(1, body))
        } else {
            self.push(Command::Pass)
        }
    }

    /// Include one of two blocks depending on `condition`. The chosen block
    /// is wrapped in `Loop(1, body)`.
    pub fn branch(
        self,
        condition: bool,
        then_block: impl FnOnce(Self) -> Self,
        else_block: impl FnOnce(Self) -> Self,
    ) -> Self {
        let body = if condition {
            then_block(Self::new()).build()
        } else {
            else_block(Self::new()).build()
        };
        self.push(Command::Loop(1, body))
    }

    /// Register a macro whose body is built from the block.
    pub fn set_macro(self, name: impl Into<String>, block: impl FnOnce(Self) -> Self) -> Self {
        let body = block(Self::new()).build();
        self.push(Command::SetMacro(name.into(), body))
    }

    pub fn play_macro(self, name: impl Into<String>) -> Self {
        self.push(Command::PlayMacro(name.into()))
    }

    /// Finish, yielding the ordered command list.
    pub fn build(self) -> Vec<Command> {
        self.commands
    }
}
