//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use optscan::{OptSpec, OptionResult, OptionScanner, PROJECT_NAME};

/// getopt - parse command options into canonical form
#[derive(Parser)]
#[command(
    author,
    version,
    about,
    long_about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(
        allow_hyphen_values = true,
        help = gettext("Option letters to recognize; a letter followed by ':' takes a value")
    )]
    optstring: String,
}

/// Render `parameters` as recognized options, then `--`, then the
/// operands.  Returns the rendered line and whether any option was bad.
fn canonicalize(spec: &OptSpec, parameters: &[String]) -> (String, bool) {
    let mut argv = Vec::with_capacity(parameters.len() + 1);
    argv.push(String::from("getopt"));
    argv.extend_from_slice(parameters);

    let mut scanner = OptionScanner::new();
    let mut line = String::new();
    let mut failed = false;

    loop {
        match scanner.next(&argv, spec) {
            OptionResult::Found(c) => match scanner.optarg() {
                Some(value) => line.push_str(&format!(" -{} {}", c, value)),
                None => line.push_str(&format!(" -{}", c)),
            },
            OptionResult::Done => break,
            OptionResult::Unknown(_) | OptionResult::MissingValue(_) => failed = true,
        }
    }

    line.push_str(" --");
    for operand in scanner.operands(&argv) {
        line.push(' ');
        line.push_str(operand);
    }

    (line, failed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // only the option string goes through clap; the parameters reach the
    // scanner as written, including `--`, `-h` and `-V`
    let raw: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let args = Args::parse_from(raw.iter().take(2));
    let parameters = raw.get(2..).unwrap_or(&[]);

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let spec = match OptSpec::new(&args.optstring) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("getopt: {}", e);
            std::process::exit(2);
        }
    };

    let (line, failed) = canonicalize(&spec, parameters);
    println!("{}", line);

    std::process::exit(if failed { 1 } else { 0 })
}
