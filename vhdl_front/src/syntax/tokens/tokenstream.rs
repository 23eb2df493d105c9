// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use std::cell::Cell;

use super::tokenizer::Kind::*;
use super::tokenizer::*;
use crate::data::{DiagnosticResult, Position};

/// The finalized token sequence together with the parser's cursor.
///
/// The cursor moves forward unless it is restored to an earlier state.
/// End of line tokens are never observed by the parser, the cursor steps
/// over them whenever it moves.
pub struct TokenStream {
    tokens: Vec<Token>,
    idx: Cell<usize>,
    /// Returned by `peek` once the cursor is past the last token
    eof: Token,
}

fn describe(kind: Kind) -> &'static str {
    match kind {
        Identifier => "identifier",
        Keyword => "keyword",
        Literal => "literal",
        Operator => "operator",
        Symbol => "symbol",
        EndOfLine => "end of line",
        EndOfFile => "end of file",
        Error => "error",
    }
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        let eof_pos = tokens
            .last()
            .map_or_else(Position::default, |token| token.pos);
        let stream = TokenStream {
            tokens,
            idx: Cell::new(0),
            eof: Token::eof(eof_pos),
        };
        stream.skip_newlines();
        stream
    }

    pub fn state(&self) -> usize {
        self.idx.get()
    }

    /// Restore a state returned by `state`
    pub fn set_state(&self, state: usize) {
        self.idx.set(state);
    }

    fn skip_newlines(&self) {
        while self
            .tokens
            .get(self.idx.get())
            .is_some_and(|token| token.kind == EndOfLine)
        {
            self.idx.set(self.idx.get() + 1);
        }
    }

    /// Move past the current token and the end of lines following it
    pub fn skip(&self) {
        self.idx.set(self.idx.get() + 1);
        self.skip_newlines();
    }

    pub fn peek(&self) -> &Token {
        self.tokens.get(self.idx.get()).unwrap_or(&self.eof)
    }

    /// The token after the current one, ignoring end of lines
    pub fn peek_next(&self) -> &Token {
        self.tokens
            .iter()
            .skip(self.idx.get() + 1)
            .find(|token| token.kind != EndOfLine)
            .unwrap_or(&self.eof)
    }

    pub fn peek_kind(&self) -> Kind {
        self.peek().kind
    }

    pub fn is_at_end(&self) -> bool {
        self.peek_kind() == EndOfFile
    }

    pub fn next_kind_is(&self, kind: Kind) -> bool {
        self.peek_kind() == kind
    }

    pub fn next_is_keyword(&self, keyword: &str) -> bool {
        self.peek().is_keyword(keyword)
    }

    pub fn next_is_symbol(&self, symbol: &str) -> bool {
        self.peek().is_symbol(symbol)
    }

    pub fn next_is_operator(&self, operator: &str) -> bool {
        self.peek().is_operator(operator)
    }

    /// Returns the current token and advances if it is of a particular kind
    pub fn pop_if_kind(&self, kind: Kind) -> Option<&Token> {
        let token = self.peek();
        if token.kind == kind {
            self.skip();
            Some(token)
        } else {
            None
        }
    }

    pub fn pop_if_keyword(&self, keyword: &str) -> bool {
        let found = self.next_is_keyword(keyword);
        if found {
            self.skip();
        }
        found
    }

    pub fn pop_if_symbol(&self, symbol: &str) -> bool {
        let found = self.next_is_symbol(symbol);
        if found {
            self.skip();
        }
        found
    }

    pub fn pop_if_operator(&self, operator: &str) -> bool {
        let found = self.next_is_operator(operator);
        if found {
            self.skip();
        }
        found
    }

    pub fn pop_optional_ident(&self) -> Option<String> {
        self.pop_if_kind(Identifier).map(|token| token.value.clone())
    }

    pub fn expect_kind(&self, kind: Kind) -> DiagnosticResult<&Token> {
        self.pop_if_kind(kind)
            .ok_or_else(|| self.peek().syntax_error(format!("Expected {}", describe(kind))))
    }

    pub fn expect_keyword(&self, keyword: &str) -> DiagnosticResult<()> {
        if self.pop_if_keyword(keyword) {
            Ok(())
        } else {
            Err(self.peek().syntax_error(format!("Expected '{keyword}'")))
        }
    }

    pub fn expect_symbol(&self, symbol: &str) -> DiagnosticResult<()> {
        if self.pop_if_symbol(symbol) {
            Ok(())
        } else {
            Err(self.peek().syntax_error(format!("Expected '{symbol}'")))
        }
    }

    pub fn expect_ident(&self) -> DiagnosticResult<String> {
        self.expect_kind(Identifier).map(|token| token.value.clone())
    }

    /// Skip tokens until `cond` holds for the current one or the end is reached
    pub fn skip_until(&self, cond: impl Fn(&Token) -> bool) {
        while !self.is_at_end() && !cond(self.peek()) {
            self.skip();
        }
    }
}
