// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use fnv::FnvHashSet;
use pad::PadStr;
use std::fmt;
use std::sync::LazyLock;

use crate::data::*;

/// The kind of a Token
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, strum::Display, strum::IntoStaticStr)]
pub enum Kind {
    Identifier,
    Keyword,
    Literal,
    Operator,
    Symbol,
    #[strum(serialize = "EoL")]
    EndOfLine,
    #[strum(serialize = "EoF")]
    EndOfFile,
    Error,
}
use self::Kind::*;

/// IEEE 1076-1993 reserved words
static KEYWORDS: LazyLock<FnvHashSet<&'static str>> = LazyLock::new(|| {
    [
        "access",
        "after",
        "alias",
        "all",
        "architecture",
        "array",
        "assert",
        "attribute",
        "begin",
        "block",
        "body",
        "buffer",
        "bus",
        "case",
        "component",
        "configuration",
        "constant",
        "disconnect",
        "downto",
        "else",
        "elsif",
        "end",
        "entity",
        "exit",
        "file",
        "for",
        "function",
        "generate",
        "generic",
        "group",
        "guarded",
        "if",
        "impure",
        "in",
        "inertial",
        "inout",
        "is",
        "label",
        "library",
        "linkage",
        "literal",
        "loop",
        "map",
        "mod",
        "nand",
        "new",
        "next",
        "nor",
        "not",
        "null",
        "of",
        "on",
        "open",
        "or",
        "others",
        "out",
        "package",
        "port",
        "postponed",
        "procedure",
        "process",
        "pure",
        "range",
        "record",
        "reject",
        "rem",
        "report",
        "return",
        "rol",
        "ror",
        "select",
        "severity",
        "signal",
        "shared",
        "sla",
        "sll",
        "sra",
        "srl",
        "subtype",
        "then",
        "to",
        "transport",
        "type",
        "unaffected",
        "units",
        "until",
        "use",
        "variable",
        "wait",
        "when",
        "while",
        "with",
        "xnor",
        "xor",
    ]
    .into_iter()
    .collect()
});

static OPERATORS: LazyLock<FnvHashSet<&'static str>> = LazyLock::new(|| {
    [
        "+", "-", "*", "/", "&", "=", "/=", "<", "<=", ">", ">=", "=>", "**", ":=", "mod", "rem",
        "and", "or", "nand", "nor", "xor", "xnor", "not", "rol", "ror", "sla", "sll", "sra",
        "srl", "in", "not in", "abs", "??",
    ]
    .into_iter()
    .collect()
});

static SYMBOLS: LazyLock<FnvHashSet<&'static str>> = LazyLock::new(|| {
    ["(", ")", ",", ".", ":", ";", "'", "[", "]"]
        .into_iter()
        .collect()
});

/// Characters that may start a one or two character operator
const OPERATOR_LEADS: &str = "+-*/&=<>:?";

pub fn is_keyword(lexeme: &str) -> bool {
    KEYWORDS.contains(lexeme)
}

pub fn is_operator(lexeme: &str) -> bool {
    OPERATORS.contains(lexeme)
}

pub fn is_symbol(lexeme: &str) -> bool {
    SYMBOLS.contains(lexeme)
}

/// LRM 15.4.2 Basic identifiers, without the underline placement rules
pub fn is_identifier(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|chr| chr.is_ascii_alphanumeric() || chr == '_')
        }
        _ => false,
    }
}

/// Decide the kind of an already lowercased lexeme
pub fn classify(lexeme: &str) -> Kind {
    if lexeme.is_empty() {
        EndOfFile
    } else if lexeme == "\n" {
        EndOfLine
    } else if is_keyword(lexeme) {
        Keyword
    } else if is_operator(lexeme) {
        Operator
    } else if is_symbol(lexeme) {
        Symbol
    } else if is_identifier(lexeme) {
        Identifier
    } else {
        Literal
    }
}

/// A Token
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct Token {
    pub kind: Kind,
    /// The lowercased lexeme, or the message of an error token
    pub value: String,
    /// Start of the lexeme
    pub pos: Position,
}

impl Token {
    /// Create a token whose kind is decided by the lexeme
    pub fn new(lexeme: &str, pos: Position) -> Token {
        let value = lexeme.to_lowercase();
        Token {
            kind: classify(&value),
            value,
            pos,
        }
    }

    pub fn with_kind(kind: Kind, lexeme: &str, pos: Position) -> Token {
        Token {
            kind,
            value: lexeme.to_lowercase(),
            pos,
        }
    }

    pub fn eof(pos: Position) -> Token {
        Token::new("", pos)
    }

    /// Error tokens keep their message verbatim
    pub fn error(message: impl Into<String>, pos: Position) -> Token {
        Token {
            kind: Error,
            value: message.into(),
            pos,
        }
    }

    pub fn line(&self) -> u32 {
        self.pos.line
    }

    pub fn column(&self) -> u32 {
        self.pos.column
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == Keyword && self.value == keyword
    }

    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == Symbol && self.value == symbol
    }

    pub fn is_operator(&self, operator: &str) -> bool {
        self.kind == Operator && self.value == operator
    }

    /// Fixed width kind label, quoted lexeme and position
    pub fn debug_string(&self) -> String {
        let label: &'static str = self.kind.into();
        format!(
            "{} \"{}\"  at {}:{}",
            label.pad_to_width(10),
            self,
            self.pos.line,
            self.pos.column
        )
    }

    /// The lexeme as it is reported when this token was not expected
    pub fn found(&self) -> String {
        match self.kind {
            EndOfFile => "{end of file}".to_owned(),
            _ => self.to_string(),
        }
    }

    pub fn syntax_error(&self, message: impl Into<String>) -> Diagnostic {
        Diagnostic::syntax_error(self.pos, message, self.found())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == EndOfLine {
            write!(f, "\\n")
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// LRM 15.5.3 Based literals, digits and the exponent characters
fn is_based_literal_char(chr: char) -> bool {
    chr.is_ascii_alphanumeric() || matches!(chr, '.' | '-' | '+')
}

pub struct Tokenizer<'a> {
    reader: ContentReader<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(contents: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            reader: ContentReader::new(contents),
        }
    }

    /// True while the position is before the end of the input.
    /// Trailing whitespace and comments still count as input.
    pub fn has_more(&self) -> bool {
        self.reader.has_more()
    }

    /// Skip whitespace but not newline
    fn skip_whitespace_in_line(&mut self) {
        self.reader
            .skip_while(|chr| matches!(chr, ' ' | '\t' | '\r'));
    }

    /// Skip a -- comment up to but not including the newline
    fn skip_comment(&mut self) -> bool {
        if self.reader.peek() == Some('-') && self.reader.peek_nth(1) == Some('-') {
            self.reader.skip_while(|chr| chr != '\n');
            true
        } else {
            false
        }
    }

    /// LRM 15.5 Abstract literals, decimal and based
    fn parse_abstract_literal(&mut self, start: ReaderState) -> Token {
        self.reader.skip_while(|chr| chr.is_ascii_digit());

        if self.reader.skip_if('.') {
            self.reader.skip_while(|chr| chr.is_ascii_digit());
        } else if self.reader.skip_if('#') {
            loop {
                match self.reader.peek() {
                    Some('#') => {
                        self.reader.skip();
                        break;
                    }
                    Some(chr) if is_based_literal_char(chr) => self.reader.skip(),
                    Some(_) => {
                        return Token::error(
                            "Err: invalid character in based literal",
                            start.pos(),
                        );
                    }
                    None => return Token::error("Err: missing closing '#'", start.pos()),
                }
            }
        }

        Token::new(self.reader.text_since(start), start.pos())
    }

    /// LRM 15.7 String literals, doubled quotes are not supported
    fn parse_string(&mut self, start: ReaderState) -> Token {
        self.reader.skip();
        self.reader.skip_while(|chr| chr != '"');
        if self.reader.skip_if('"') {
            Token::new(self.reader.text_since(start), start.pos())
        } else {
            Token::error("Err: missing closing quote", start.pos())
        }
    }

    /// LRM 15.6 Character literals, restricted to a single alphanumeric
    fn parse_character_literal(&mut self, start: ReaderState) -> Token {
        self.reader.skip();
        match self.reader.peek() {
            Some(chr) if chr.is_ascii_alphanumeric() => self.reader.skip(),
            _ => return Token::error("Err: invalid char literal", start.pos()),
        }
        if self.reader.skip_if('\'') {
            Token::new(self.reader.text_since(start), start.pos())
        } else {
            Token::error("Err: missing closing single quote", start.pos())
        }
    }

    /// Two character operators take priority over their one character prefix
    fn parse_operator(&mut self, start: ReaderState, first: char) -> Option<Token> {
        if let Some(second) = self.reader.peek_nth(1) {
            let pair: String = [first, second].iter().collect();
            if is_operator(&pair) {
                self.reader.skip();
                self.reader.skip();
                return Some(Token::new(&pair, start.pos()));
            }
        }

        let mut buffer = [0; 4];
        let single = first.encode_utf8(&mut buffer);
        if is_operator(single) {
            self.reader.skip();
            Some(Token::new(single, start.pos()))
        } else {
            None
        }
    }

    /// Return the next token, end of file is returned repeatedly once the input is consumed
    pub fn pop(&mut self) -> Token {
        loop {
            self.skip_whitespace_in_line();
            if !self.skip_comment() {
                break;
            }
        }

        let start = self.reader.state();
        let Some(chr) = self.reader.peek() else {
            return Token::eof(start.pos());
        };

        match chr {
            'a'..='z' | 'A'..='Z' => {
                self.reader
                    .skip_while(|chr| chr.is_ascii_alphanumeric() || chr == '_');
                Token::new(self.reader.text_since(start), start.pos())
            }
            '0'..='9' => self.parse_abstract_literal(start),
            '"' => self.parse_string(start),
            '\'' => self.parse_character_literal(start),
            '\n' => {
                self.reader.skip();
                Token::new("\n", start.pos())
            }
            _ => {
                if OPERATOR_LEADS.contains(chr) {
                    if let Some(token) = self.parse_operator(start, chr) {
                        return token;
                    }
                }

                let mut buffer = [0; 4];
                let single = chr.encode_utf8(&mut buffer);
                self.reader.skip();
                if is_symbol(single) {
                    Token::new(single, start.pos())
                } else {
                    Token::error("Err: unknown token", start.pos())
                }
            }
        }
    }
}

/// Tokenize the whole source, the result ends with exactly one end of file token.
/// The first error token aborts tokenization.
pub fn tokenize(source: &Source) -> DiagnosticResult<Vec<Token>> {
    let mut tokenizer = Tokenizer::new(source.contents());
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.pop();
        trace!("{}", token.debug_string());
        match token.kind {
            Error => return Err(Diagnostic::lexical_error(token.pos, token.value)),
            EndOfFile => {
                tokens.push(token);
                break;
            }
            _ => tokens.push(token),
        }
    }
    Ok(tokens)
}
