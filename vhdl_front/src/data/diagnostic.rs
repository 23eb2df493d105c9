// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use super::{Position, Source};
use std::fmt;

#[derive(PartialEq, Debug, Clone, Copy, Eq, Hash, strum::Display, strum::IntoStaticStr)]
pub enum ErrorCode {
    /// The tokenizer found a malformed literal or an unknown character.
    ///
    /// # Example
    /// ```vhdl
    /// constant c : integer := 16#FF;
    ///                         ~~ missing closing '#'
    /// ```
    #[strum(serialize = "lexical error")]
    LexicalError,
    /// The parser expected another token.
    ///
    /// # Example
    /// ```vhdl
    /// entity foo is
    /// end entity foo
    ///               ~ Expected ';'
    /// ```
    #[strum(serialize = "syntax error")]
    SyntaxError,
}

#[must_use]
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Diagnostic {
    pub pos: Position,
    pub message: String,
    /// The lexeme that was found instead of the expected one
    pub found: Option<String>,
    pub code: ErrorCode,
}

impl Diagnostic {
    pub fn new(pos: Position, msg: impl Into<String>, code: ErrorCode) -> Diagnostic {
        Diagnostic {
            pos,
            message: msg.into(),
            found: None,
            code,
        }
    }

    pub fn lexical_error(pos: Position, msg: impl Into<String>) -> Diagnostic {
        Self::new(pos, msg, ErrorCode::LexicalError)
    }

    pub fn syntax_error(
        pos: Position,
        msg: impl Into<String>,
        found: impl Into<String>,
    ) -> Diagnostic {
        Diagnostic {
            found: Some(found.into()),
            ..Self::new(pos, msg, ErrorCode::SyntaxError)
        }
    }

    fn width(&self) -> usize {
        self.found
            .as_ref()
            .map_or(1, |found| found.chars().count().max(1))
    }

    /// Render the diagnostic together with the offending source lines
    pub fn show(&self, source: &Source) -> String {
        source.show(self.pos, self.width(), &format!("{}: {}", self.code, self))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}", self.message, self.pos)?;
        if let Some(ref found) = self.found {
            write!(f, " - got '{found}'")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

pub type DiagnosticResult<T> = Result<T, Diagnostic>;
