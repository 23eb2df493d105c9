// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Test utilities for parsing snippets of code

use super::common::ParseResult;
use super::design_unit::parse_design_file;
use super::tokens::{tokenize, Kind, Token, TokenStream};
use crate::ast::DesignFile;
use crate::data::*;
use std::fmt::Debug;

/// A snippet of source code under test
#[derive(Clone)]
pub struct Code {
    source: Source,
}

impl Code {
    pub fn new(code: &str) -> Code {
        Code::new_with_file_name(Path::new("{unknown file}"), code)
    }

    pub fn new_with_file_name(file_name: &Path, code: &str) -> Code {
        Code {
            source: Source::inline(file_name, code),
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn tokenize(&self) -> Vec<Token> {
        match tokenize(&self.source) {
            Ok(tokens) => tokens,
            Err(diagnostic) => panic!("{}", diagnostic.show(&self.source)),
        }
    }

    pub fn kinds(&self) -> Vec<Kind> {
        self.tokenize().into_iter().map(|token| token.kind).collect()
    }

    pub fn stream(&self) -> TokenStream {
        TokenStream::new(self.tokenize())
    }

    /// Parse with `parse_fun` without requiring the whole snippet to be consumed
    pub fn with_partial_stream<F, R>(&self, parse_fun: F) -> R
    where
        F: FnOnce(&TokenStream) -> R,
    {
        let stream = self.stream();
        parse_fun(&stream)
    }

    /// Parse with `parse_fun` and require success and that the whole snippet was consumed
    pub fn with_stream<F, R>(&self, parse_fun: F) -> R
    where
        R: Debug,
        F: FnOnce(&TokenStream) -> ParseResult<R>,
    {
        let stream = self.stream();
        match parse_fun(&stream) {
            Ok(result) => {
                let token = stream.peek();
                if token.kind != Kind::EndOfFile {
                    panic!("Expected EOF got {}, result = {result:?}", token.debug_string());
                }
                result
            }
            Err(diagnostic) => panic!("{}", diagnostic.show(&self.source)),
        }
    }

    pub fn with_stream_err<F, R>(&self, parse_fun: F) -> Diagnostic
    where
        R: Debug,
        F: FnOnce(&TokenStream) -> ParseResult<R>,
    {
        let stream = self.stream();
        match parse_fun(&stream) {
            Ok(result) => panic!("Expected an error, got {result:?}"),
            Err(diagnostic) => diagnostic,
        }
    }

    pub fn design_file(&self) -> DesignFile {
        self.with_stream(parse_design_file)
    }

    /// Position of the first occurrence of `substr`
    pub fn pos_of(&self, substr: &str) -> Position {
        let contents = self.source.contents();
        let Some(idx) = contents.find(substr) else {
            panic!("Could not find '{substr}' in '{contents}'");
        };
        contents[..idx]
            .chars()
            .fold(Position::default(), Position::after_char)
    }
}

#[test]
fn pos_of_counts_lines_and_columns() {
    let code = Code::new("entity foo is\n  port");
    assert_eq!(code.pos_of("entity"), Position::new(1, 0));
    assert_eq!(code.pos_of("foo"), Position::new(1, 7));
    assert_eq!(code.pos_of("port"), Position::new(2, 2));
}

#[test]
#[should_panic]
fn with_stream_requires_full_consumption() {
    Code::new("a b").with_stream(|stream| stream.expect_ident());
}
