//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! The traditional process-wide `getopt` interface.
//!
//! One shared [`OptionScanner`] stands in for the `optind`, `optarg`,
//! `optopt` and `opterr` globals.  Only one scan sequence may be active at
//! a time; code that needs more should own an [`OptionScanner`] directly.

use crate::scanner::OptionScanner;
use crate::spec::{OptSpec, SpecError};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static SCANNER: LazyLock<Mutex<OptionScanner>> =
    LazyLock::new(|| Mutex::new(OptionScanner::new()));

fn scanner() -> MutexGuard<'static, OptionScanner> {
    SCANNER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Return the next option character in `argv`, `?` or `:` on error, or
/// [`END_OF_OPTIONS`](crate::END_OF_OPTIONS) once the options are exhausted.
pub fn getopt<S: AsRef<str>>(argv: &[S], optstring: &str) -> Result<i32, SpecError> {
    let spec = OptSpec::new(optstring)?;
    Ok(scanner().next(argv, &spec).code(&spec))
}

pub fn optind() -> usize {
    scanner().optind()
}

/// Setting `optind` restarts scanning at that element.
pub fn set_optind(optind: usize) {
    scanner().set_optind(optind);
}

pub fn optarg() -> Option<String> {
    scanner().optarg().map(String::from)
}

pub fn optopt() -> Option<char> {
    scanner().optopt()
}

pub fn opterr() -> bool {
    scanner().opterr()
}

pub fn set_opterr(opterr: bool) {
    scanner().set_opterr(opterr);
}

pub fn reset() {
    scanner().reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::END_OF_OPTIONS;

    // all checks share the process-wide scanner, so keep them in one test
    #[test]
    fn classic_scan_sequence() {
        reset();
        set_opterr(false);
        assert!(!opterr());

        let args = vec!["prog", "-a", "-bval", "-x", "-c", "file"];
        assert_eq!(getopt(&args, "ab:c"), Ok('a' as i32));
        assert_eq!(optind(), 2);
        assert_eq!(optarg(), None);
        assert_eq!(getopt(&args, "ab:c"), Ok('b' as i32));
        assert_eq!(optarg().as_deref(), Some("val"));
        assert_eq!(getopt(&args, "ab:c"), Ok('?' as i32));
        assert_eq!(optopt(), Some('x'));
        assert_eq!(getopt(&args, "ab:c"), Ok('c' as i32));
        assert_eq!(getopt(&args, "ab:c"), Ok(END_OF_OPTIONS));
        assert_eq!(optind(), 5);

        let args = vec!["prog", "-b"];
        set_optind(1);
        assert_eq!(getopt(&args, ":b:"), Ok(':' as i32));
        assert_eq!(optopt(), Some('b'));

        assert_eq!(getopt(&args, ""), Err(SpecError::Empty));

        reset();
        set_opterr(true);
        assert_eq!(optind(), 1);
    }
}
