//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Single-pass scanner for POSIX-style short options.
//!
//! All scan state lives in an [`OptionScanner`] owned by the caller, so
//! independent argument vectors can be scanned at the same time.

use crate::spec::{ArgKind, OptSpec};
use gettextrs::gettext;
use std::io::{self, Write};

/// Classic return code for the end of the options.
pub const END_OF_OPTIONS: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionResult {
    /// A recognized option; `optarg` holds its value if it takes one
    Found(char),
    /// No more options; operands start at `optind`
    Done,
    Unknown(char),
    MissingValue(char),
}

impl OptionResult {
    /// The integer a C `getopt` would have returned.
    pub fn code(&self, spec: &OptSpec) -> i32 {
        match self {
            OptionResult::Found(c) => *c as i32,
            OptionResult::Done => END_OF_OPTIONS,
            OptionResult::Unknown(_) => '?' as i32,
            OptionResult::MissingValue(_) if spec.is_silent() => ':' as i32,
            OptionResult::MissingValue(_) => '?' as i32,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            OptionResult::Unknown(_) | OptionResult::MissingValue(_)
        )
    }
}

pub struct OptionScanner<W: Write = io::Stderr> {
    optind: usize,
    // byte offset of the next option character in argv[optind];
    // 1 means positioned at an element boundary
    pos: usize,
    optarg: Option<String>,
    optopt: Option<char>,
    opterr: bool,
    done: bool,
    err: W,
}

impl Default for OptionScanner<io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionScanner<io::Stderr> {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl<W: Write> OptionScanner<W> {
    /// Scanner that writes its diagnostics to `err` instead of stderr.
    pub fn with_writer(err: W) -> Self {
        OptionScanner {
            optind: 1,
            pos: 1,
            optarg: None,
            optopt: None,
            opterr: true,
            done: false,
            err,
        }
    }

    pub fn optind(&self) -> usize {
        self.optind
    }

    /// Restart scanning at element `optind`.
    pub fn set_optind(&mut self, optind: usize) {
        self.optind = optind;
        self.pos = 1;
        self.done = false;
    }

    pub fn optarg(&self) -> Option<&str> {
        self.optarg.as_deref()
    }

    pub fn optopt(&self) -> Option<char> {
        self.optopt
    }

    pub fn opterr(&self) -> bool {
        self.opterr
    }

    pub fn set_opterr(&mut self, opterr: bool) {
        self.opterr = opterr;
    }

    pub fn writer(&self) -> &W {
        &self.err
    }

    pub fn into_writer(self) -> W {
        self.err
    }

    /// Forget all progress and start a fresh scan sequence.
    pub fn reset(&mut self) {
        self.set_optind(1);
        self.optarg = None;
        self.optopt = None;
    }

    /// Elements not consumed as options or option values.
    pub fn operands<'a, S: AsRef<str>>(&self, argv: &'a [S]) -> &'a [S] {
        argv.get(self.optind..).unwrap_or(&[])
    }

    fn next_element(&mut self) {
        self.optind += 1;
        self.pos = 1;
    }

    fn diagnose<S: AsRef<str>>(&mut self, argv: &[S], spec: &OptSpec, msg: &str, c: char) {
        if !self.opterr || spec.is_silent() {
            return;
        }
        let prog = argv.first().map(|s| s.as_ref()).unwrap_or_default();
        // nothing sensible to do if the diagnostic stream fails
        let _ = writeln!(self.err, "{}: {} -- {}", prog, msg, c);
    }

    /// Scan the next option in `argv`.
    ///
    /// `argv[0]` is the program name and is never scanned.  `argv` and
    /// `spec` should stay the same for the whole scan sequence.
    pub fn next<S: AsRef<str>>(&mut self, argv: &[S], spec: &OptSpec) -> OptionResult {
        self.optarg = None;
        if self.done {
            return OptionResult::Done;
        }

        loop {
            let Some(arg) = argv.get(self.optind).map(|s| s.as_ref()) else {
                self.done = true;
                return OptionResult::Done;
            };

            if self.pos == 1 {
                if arg == "--" {
                    self.optind += 1;
                    self.done = true;
                    return OptionResult::Done;
                }
                if !arg.starts_with('-') || arg.len() == 1 {
                    self.done = true;
                    return OptionResult::Done;
                }
            }

            let Some(c) = arg.get(self.pos..).and_then(|rest| rest.chars().next()) else {
                // element ran out underneath us
                self.next_element();
                continue;
            };
            let end = self.pos + c.len_utf8();

            return match spec.lookup(c) {
                None => {
                    self.optopt = Some(c);
                    self.diagnose(argv, spec, &gettext("illegal option"), c);
                    self.next_element();
                    OptionResult::Unknown(c)
                }
                Some(ArgKind::Value) => {
                    if end < arg.len() {
                        self.optarg = Some(arg[end..].to_string());
                        self.next_element();
                        OptionResult::Found(c)
                    } else if let Some(value) = argv.get(self.optind + 1) {
                        self.optarg = Some(value.as_ref().to_string());
                        self.optind += 2;
                        self.pos = 1;
                        OptionResult::Found(c)
                    } else {
                        self.optopt = Some(c);
                        self.diagnose(argv, spec, &gettext("option requires an argument"), c);
                        self.next_element();
                        OptionResult::MissingValue(c)
                    }
                }
                Some(ArgKind::Flag) => {
                    if end < arg.len() {
                        self.pos = end;
                    } else {
                        self.next_element();
                    }
                    OptionResult::Found(c)
                }
            };
        }
    }
}
