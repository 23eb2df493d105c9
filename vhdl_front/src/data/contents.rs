// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use super::Position;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ReaderState {
    pos: Position,
    idx: usize,
}

impl ReaderState {
    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn idx(&self) -> usize {
        self.idx
    }
}

/// Forward reader over source text keeping track of the line and column
#[derive(Clone)]
pub struct ContentReader<'a> {
    contents: &'a str,
    state: ReaderState,
}

impl<'a> ContentReader<'a> {
    pub fn new(contents: &'a str) -> ContentReader<'a> {
        ContentReader {
            contents,
            state: ReaderState {
                pos: Position::default(),
                idx: 0,
            },
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.contents[self.state.idx..].chars().next()
    }

    /// Look `offset` characters past the current one
    #[must_use]
    pub fn peek_nth(&self, offset: usize) -> Option<char> {
        self.contents[self.state.idx..].chars().nth(offset)
    }

    #[must_use]
    pub fn pop(&mut self) -> Option<char> {
        let chr = self.peek()?;
        self.state.pos.move_after_char(chr);
        self.state.idx += chr.len_utf8();
        Some(chr)
    }

    pub fn skip(&mut self) {
        let _ = self.pop();
    }

    pub fn skip_if(&mut self, value: char) -> bool {
        if self.peek() == Some(value) {
            self.skip();
            true
        } else {
            false
        }
    }

    pub fn skip_while(&mut self, cond: impl Fn(char) -> bool) {
        while let Some(chr) = self.peek() {
            if !cond(chr) {
                break;
            }
            self.skip();
        }
    }

    pub fn has_more(&self) -> bool {
        self.state.idx < self.contents.len()
    }

    pub fn pos(&self) -> Position {
        self.state.pos
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// The text consumed since `state` was taken
    pub fn text_since(&self, state: ReaderState) -> &'a str {
        &self.contents[state.idx..self.state.idx]
    }
}
