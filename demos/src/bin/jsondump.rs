// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use skipjson::{parse, parse_array_from_str, parse_object_from_str, tokenize, Value};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// Pick array or object from the first token
    Auto,
    Array,
    Object,
}

/// Print the token stream or value tree skipjson reads from a file.
#[derive(Parser, Debug)]
#[command(name = "jsondump", version, about)]
struct Args {
    /// Input file, or `-` for stdin
    path: PathBuf,

    /// Print tokens, one per line, instead of the parsed value
    #[arg(long)]
    tokens: bool,

    /// Root kind to parse as
    #[arg(long, value_enum, default_value = "auto")]
    mode: Mode,
}

fn read_input(path: &Path) -> std::io::Result<String> {
    let mut s = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin().read_to_string(&mut s)?;
    } else {
        File::open(path)?.read_to_string(&mut s)?;
    }
    Ok(s)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let s = match read_input(&args.path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: Unable to read '{}': {}", args.path.display(), e);
            std::process::exit(1);
        }
    };

    let result = if args.tokens {
        tokenize(&s).map(|tokens| {
            for (i, token) in tokens.iter().enumerate() {
                println!("{i:>5} {token}");
            }
        })
    } else {
        let value = match args.mode {
            Mode::Auto => parse(&s),
            Mode::Array => parse_array_from_str(&s).map(Value::Array),
            Mode::Object => parse_object_from_str(&s).map(Value::Object),
        };
        value.map(|value| println!("{value}"))
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
