// CLI binary — panicking on unrecoverable errors is standard for CLI tools.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::io::Read;
use std::process;

use clap::{Parser, Subcommand};

use turtle_path::{build_path, compile, Command, PathConfig, Point, Stroke, YAxis};

// ── CLI argument parsing ─────────────────────────────────────────

#[derive(Parser)]
#[command(name = "turtlepath-cli", about = "Turtle program compiler", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a program and print the raw strokes
    Compile {
        /// Program JSON file, or "-" for stdin
        program: String,
    },
    /// Compile a program and print renderable path operations
    Path {
        /// Program JSON file, or "-" for stdin
        program: String,
        /// X coordinate the turtle origin maps to
        #[arg(long, default_value_t = 0.0)]
        center_x: f64,
        /// Y coordinate the turtle origin maps to
        #[arg(long, default_value_t = 0.0)]
        center_y: f64,
        /// Flip the y axis for top-left-origin coordinate spaces
        #[arg(long)]
        flip_y: bool,
    },
    /// Compile a program and print the visible bounding box
    Bounds {
        /// Program JSON file, or "-" for stdin
        program: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let output = match &cli.command {
        Commands::Compile { program } => {
            let strokes = compile_program(program);
            to_json(&strokes, cli.pretty)
        }
        Commands::Path {
            program,
            center_x,
            center_y,
            flip_y,
        } => {
            let strokes = compile_program(program);
            let config = PathConfig {
                center: Point::new(*center_x, *center_y),
                y_axis: if *flip_y { YAxis::Down } else { YAxis::Up },
            };
            to_json(&build_path(&strokes, &config), cli.pretty)
        }
        Commands::Bounds { program } => {
            let strokes = compile_program(program);
            to_json(&turtle_path::bounds(&strokes), cli.pretty)
        }
    };

    println!("{output}");
}

/// Read, parse and compile the program, exiting with a diagnostic on any
/// failure.
fn compile_program(source: &str) -> Vec<Stroke> {
    let text = read_input(source);
    let program: Vec<Command> = match serde_json::from_str(&text) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("error: invalid program JSON: {e}");
            process::exit(1);
        }
    };
    match compile(&program) {
        Ok(strokes) => strokes,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn read_input(source: &str) -> String {
    if source == "-" {
        let mut text = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut text) {
            eprintln!("error: failed to read stdin: {e}");
            process::exit(1);
        }
        text
    } else {
        match fs::read_to_string(source) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("error: failed to read {source}: {e}");
                process::exit(1);
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(value).unwrap()
    } else {
        serde_json::to_string(value).unwrap()
    }
}
