// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use super::tokens::{tokenize, Token, TokenStream};
use crate::ast::DesignFile;
use crate::data::*;
use crate::syntax::design_unit::parse_design_file;
use crate::Error;

/// Runs the two phases, the whole source is tokenized before parsing starts
#[derive(Default)]
pub struct VHDLParser {}

pub type ParserResult = Result<(Source, DesignFile), Error>;

impl VHDLParser {
    pub fn new() -> VHDLParser {
        VHDLParser::default()
    }

    pub fn tokenize(&self, source: &Source) -> DiagnosticResult<Vec<Token>> {
        tokenize(source)
    }

    pub fn parse_tokens(&self, tokens: Vec<Token>) -> DiagnosticResult<DesignFile> {
        let stream = TokenStream::new(tokens);
        parse_design_file(&stream)
    }

    pub fn parse_design_source(&self, source: &Source) -> DiagnosticResult<DesignFile> {
        let tokens = self.tokenize(source)?;
        debug!(
            "Tokenized {} into {} tokens",
            source.file_name().display(),
            tokens.len()
        );
        self.parse_tokens(tokens)
    }

    pub fn parse_design_file(&self, file_name: &Path) -> ParserResult {
        let source = Source::from_file(file_name).map_err(|err| Error::Io {
            path: file_name.to_owned(),
            source: err,
        })?;
        match self.parse_design_source(&source) {
            Ok(design_file) => Ok((source, design_file)),
            Err(diagnostic) => Err(Error::Parse {
                file: source,
                diagnostic,
            }),
        }
    }
}
