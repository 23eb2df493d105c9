// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use super::tokens::{Kind::*, TokenStream};
use crate::data::Diagnostic;

pub type ParseResult<T> = Result<T, Diagnostic>;

/// Parse optional part preceded by a keyword
pub fn parse_optional<F, R>(
    stream: &TokenStream,
    keyword: &str,
    parse_fun: F,
) -> ParseResult<Option<R>>
where
    F: FnOnce(&TokenStream) -> ParseResult<R>,
{
    let optional = {
        if stream.pop_if_keyword(keyword) {
            Some(parse_fun(stream)?)
        } else {
            None
        }
    };

    Ok(optional)
}

/// identifier { , identifier }
pub fn parse_identifier_list(stream: &TokenStream) -> ParseResult<Vec<String>> {
    let mut idents = vec![stream.expect_ident()?];
    while stream.pop_if_symbol(",") {
        idents.push(stream.expect_ident()?);
    }
    Ok(idents)
}

/// A literal or a simple name standing for a value
pub fn parse_simple_value(stream: &TokenStream) -> ParseResult<String> {
    let token = stream.peek();
    match token.kind {
        Literal | Identifier => {
            stream.skip();
            Ok(token.value.clone())
        }
        _ => Err(token.syntax_error("Expected literal or identifier")),
    }
}

pub fn parse_optional_assignment(stream: &TokenStream) -> ParseResult<Option<String>> {
    if stream.pop_if_operator(":=") {
        Ok(Some(parse_simple_value(stream)?))
    } else {
        Ok(None)
    }
}
