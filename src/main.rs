//! # domcanvas CLI
//!
//! Usage:
//!   domcanvas layout.json -o records.json
//!   cat layout.json | domcanvas --outline
//!   domcanvas layout.json --text none --defaults theme.json
//!   domcanvas --example > layout.json

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use thiserror::Error;

use domcanvas::build::{BuildDefaults, TextBackend};
use domcanvas::host::StaticHost;
use domcanvas::logging::{init_logging, LoggingConfig};
use domcanvas::{import_json, Import, ImportError};

const USAGE: &str = "usage: domcanvas [input.json] [-o output.json] [--defaults defaults.json] \
[--text rich|basic|none] [--outline] [--example]";

#[derive(Debug, Error)]
enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
struct Options {
    input: Option<String>,
    output: Option<String>,
    defaults: Option<String>,
    text: Option<TextBackend>,
    outline: bool,
    example: bool,
    help: bool,
}

fn main() {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("✗ {}", msg);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if options.help {
        println!("{}", USAGE);
        return;
    }

    if options.example {
        print!("{}", example_layout_json());
        return;
    }

    if let Err(e) = run(&options) {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        text: Some(TextBackend::Rich),
        ..Default::default()
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => options.output = Some(value_of(arg, iter.next())?),
            "--defaults" => options.defaults = Some(value_of(arg, iter.next())?),
            "--text" => {
                options.text = match value_of(arg, iter.next())?.as_str() {
                    "rich" => Some(TextBackend::Rich),
                    "basic" => Some(TextBackend::Basic),
                    "none" => None,
                    other => return Err(format!("unknown text backend '{}'", other)),
                }
            }
            "--outline" => options.outline = true,
            "--example" => options.example = true,
            "-h" | "--help" => options.help = true,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{}'", flag)),
            path => {
                if options.input.replace(path.to_string()).is_some() {
                    return Err("more than one input file given".to_string());
                }
            }
        }
    }
    Ok(options)
}

fn value_of(flag: &str, value: Option<&String>) -> Result<String, String> {
    value
        .cloned()
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn run(options: &Options) -> Result<(), CliError> {
    let input = match &options.input {
        Some(path) => read_file(path)?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            buf
        }
    };

    let defaults = match &options.defaults {
        Some(path) => BuildDefaults::from_json(&read_file(path)?)?,
        None => BuildDefaults::default(),
    };

    let host = StaticHost { text: options.text };
    let import = import_json(&input, &host, &defaults)?;

    let rendered = if options.outline {
        outline(&import)
    } else {
        let mut json = serde_json::to_string_pretty(&import)?;
        json.push('\n');
        json
    };

    match &options.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            eprintln!("✓ Written {} records to {}", import.record_count(), path);
        }
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(|source| CliError::Write {
                path: "<stdout>".to_string(),
                source,
            })?,
    }
    Ok(())
}

fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

fn outline(import: &Import) -> String {
    let mut out = format!("Canvas \"{}\"\n", import.canvas.name);
    if let Some(root) = &import.root {
        for line in root.to_string().lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    for diagnostic in &import.diagnostics {
        out.push_str(&format!("! {}\n", diagnostic));
    }
    out
}

fn example_layout_json() -> &'static str {
    r##"{
  "root": {
    "type": "panel",
    "name": "Settings",
    "style": { "backgroundColor": { "r": 0.12, "g": 0.12, "b": 0.16, "a": 1 } },
    "layout": {
      "type": "vertical",
      "padding": { "left": 24, "right": 24, "top": 32, "bottom": 32 },
      "spacing": 12,
      "alignment": "upperCenter"
    },
    "children": [
      {
        "type": "text",
        "name": "Title",
        "text": "Settings",
        "style": { "fontSize": 32, "textColor": { "r": 1, "g": 1, "b": 1 } },
        "size": { "preferredHeight": 48 }
      },
      {
        "type": "container",
        "name": "Toggles",
        "layout": { "type": "grid", "columns": 2, "spacing": 8, "cellSize": { "x": 240, "y": 64 } },
        "children": [
          { "type": "button", "name": "Sound", "text": "Sound: On" },
          { "type": "button", "name": "Music", "text": "Music: Off" },
          { "type": "button", "name": "Vibration", "text": "Vibration: On" },
          { "type": "button", "name": "Hints", "text": "Hints: On" }
        ]
      },
      {
        "type": "image",
        "name": "Divider",
        "image": "ui/divider.png",
        "style": { "backgroundColor": { "r": 1, "g": 1, "b": 1, "a": 0.2 } },
        "size": { "preferredWidth": 480, "preferredHeight": 2 }
      },
      {
        "type": "container",
        "name": "Footer",
        "layout": { "type": "horizontal", "spacing": 16, "alignment": "middleRight" },
        "children": [
          {
            "type": "button",
            "name": "Cancel",
            "text": "Cancel",
            "size": { "preferredWidth": 160, "preferredHeight": 56 }
          },
          {
            "type": "button",
            "name": "Save",
            "text": "Save",
            "style": {
              "backgroundColor": { "r": 0.3, "g": 0.43, "b": 0.96, "a": 1 },
              "textColor": { "r": 1, "g": 1, "b": 1 },
              "fontSize": 20
            },
            "size": { "preferredWidth": 160, "preferredHeight": 56 }
          }
        ]
      }
    ]
  }
}"##
}
