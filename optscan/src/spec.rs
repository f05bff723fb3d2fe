//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Option specification strings, e.g. `"ab:c"`.
//!
//! Each character names a recognized option; a character followed by `:`
//! takes a value.  A leading `:` selects silent mode.

use std::fmt;
use std::str::FromStr;

/// Whether an option stands alone or requires a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Flag,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// No option characters were given
    Empty,
    /// A `:` that does not follow an option character (byte offset)
    StrayColon(usize),
    /// Character that cannot name an option
    InvalidOption(char),
    /// Option character listed more than once
    Duplicate(char),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::Empty => write!(f, "empty option string"),
            SpecError::StrayColon(pos) => {
                write!(f, "unexpected ':' at offset {} in option string", pos)
            }
            SpecError::InvalidOption(c) => write!(f, "invalid option character: {:?}", c),
            SpecError::Duplicate(c) => write!(f, "option character listed twice: {}", c),
        }
    }
}

impl std::error::Error for SpecError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptSpec {
    options: Vec<(char, ArgKind)>,
    silent: bool,
}

fn valid_option_char(c: char) -> bool {
    c != ':' && c != '-' && !c.is_whitespace() && !c.is_control()
}

impl OptSpec {
    pub fn new(optstring: &str) -> Result<Self, SpecError> {
        let silent = optstring.starts_with(':');
        let body = &optstring[silent as usize..];
        if body.is_empty() {
            return Err(SpecError::Empty);
        }

        let mut options: Vec<(char, ArgKind)> = Vec::new();
        let mut chars = body.char_indices().peekable();
        while let Some((pos, c)) = chars.next() {
            if c == ':' {
                return Err(SpecError::StrayColon(pos + silent as usize));
            }
            if !valid_option_char(c) {
                return Err(SpecError::InvalidOption(c));
            }
            if options.iter().any(|(o, _)| *o == c) {
                return Err(SpecError::Duplicate(c));
            }

            let kind = if chars.next_if(|(_, next)| *next == ':').is_some() {
                ArgKind::Value
            } else {
                ArgKind::Flag
            };
            options.push((c, kind));
        }

        Ok(OptSpec { options, silent })
    }

    pub fn lookup(&self, c: char) -> Option<ArgKind> {
        self.options
            .iter()
            .find(|(o, _)| *o == c)
            .map(|(_, kind)| *kind)
    }

    /// True if the option string began with `:`.
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn options(&self) -> impl Iterator<Item = (char, ArgKind)> + '_ {
        self.options.iter().copied()
    }
}

impl FromStr for OptSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptSpec::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flags_and_values() {
        let spec = OptSpec::new("ab:c").unwrap();
        assert!(!spec.is_silent());
        assert_eq!(spec.lookup('a'), Some(ArgKind::Flag));
        assert_eq!(spec.lookup('b'), Some(ArgKind::Value));
        assert_eq!(spec.lookup('c'), Some(ArgKind::Flag));
        assert_eq!(spec.lookup('x'), None);
        assert_eq!(spec.lookup(':'), None);
        assert_eq!(
            spec.options().collect::<Vec<_>>(),
            vec![('a', ArgKind::Flag), ('b', ArgKind::Value), ('c', ArgKind::Flag)]
        );
    }

    #[test]
    fn leading_colon_selects_silent_mode() {
        let spec: OptSpec = ":b:".parse().unwrap();
        assert!(spec.is_silent());
        assert_eq!(spec.lookup('b'), Some(ArgKind::Value));
    }

    #[test]
    fn reject_empty() {
        assert_eq!(OptSpec::new(""), Err(SpecError::Empty));
        assert_eq!(OptSpec::new(":"), Err(SpecError::Empty));
    }

    #[test]
    fn reject_stray_colon() {
        assert_eq!(OptSpec::new("a::"), Err(SpecError::StrayColon(2)));
        assert_eq!(OptSpec::new("::a"), Err(SpecError::StrayColon(1)));
    }

    #[test]
    fn reject_bad_option_chars() {
        assert_eq!(OptSpec::new("a-b"), Err(SpecError::InvalidOption('-')));
        assert_eq!(OptSpec::new("a b"), Err(SpecError::InvalidOption(' ')));
        assert_eq!(OptSpec::new("aba"), Err(SpecError::Duplicate('a')));
        assert_eq!(OptSpec::new("a:a"), Err(SpecError::Duplicate('a')));
    }

    #[test]
    fn error_messages() {
        assert_eq!(SpecError::Empty.to_string(), "empty option string");
        assert_eq!(
            SpecError::Duplicate('q').to_string(),
            "option character listed twice: q"
        );
    }
}
