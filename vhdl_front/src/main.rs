// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

#[macro_use]
extern crate log;

use clap::Parser;
use std::path::PathBuf;
use vhdl_front::{Error, Source, VHDLParser};

/// Tokenize and parse a VHDL file, printing the syntax tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The VHDL source file to parse
    file: PathBuf,

    /// Print every token before the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Do not print the syntax tree
    #[arg(long)]
    no_tree: bool,
}

fn run(args: &Args) -> Result<(), Error> {
    let parser = VHDLParser::new();
    let source = Source::from_file(&args.file).map_err(|err| Error::Io {
        path: args.file.clone(),
        source: err,
    })?;

    let tokens = parser
        .tokenize(&source)
        .map_err(|diagnostic| Error::Parse {
            file: source.clone(),
            diagnostic,
        })?;
    if args.tokens {
        for token in &tokens {
            println!("{}", token.debug_string());
        }
    }

    let design_file = parser
        .parse_tokens(tokens)
        .map_err(|diagnostic| Error::Parse {
            file: source.clone(),
            diagnostic,
        })?;
    info!("Parsed {}", args.file.display());

    if !args.no_tree {
        println!("{design_file}");
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
