//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod compat;
pub mod scanner;
pub mod spec;
pub mod testing;

pub const PROJECT_NAME: &'static str = "posixutils-rs";

pub use scanner::{OptionResult, OptionScanner, END_OF_OPTIONS};
pub use spec::{ArgKind, OptSpec, SpecError};
pub use testing::*;
