// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate log;

pub mod ast;
mod data;
mod error;
mod syntax;

pub use crate::data::{
    ContentReader, Diagnostic, DiagnosticResult, ErrorCode, Position, ReaderState, Source,
};
pub use crate::error::Error;
pub use crate::syntax::{
    classify, is_identifier, is_keyword, is_operator, is_symbol, tokenize, Kind, ParseResult,
    ParserResult, Token, TokenStream, Tokenizer, VHDLParser,
};
