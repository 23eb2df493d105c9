// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2019, Olof Kraigher olof.kraigher@gmail.com

mod tokens;

mod common;
mod declarative_part;
mod design_unit;
mod interface_declaration;
mod parser;

#[cfg(test)]
pub mod test;

pub use common::ParseResult;
pub use parser::{ParserResult, VHDLParser};
pub use tokens::{
    classify, is_identifier, is_keyword, is_operator, is_symbol, tokenize, Kind, Token,
    TokenStream, Tokenizer,
};
