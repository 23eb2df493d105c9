// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use pad::{Alignment, PadStr};
use std::fmt;
use std::fmt::Write;
use std::fs;
use std::io;
pub use std::path::Path;
use std::sync::Arc;

/// A lexical position (line, column) in a source.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Position {
    /// Line (one-based).
    pub line: u32,
    /// Column (zero-based).
    pub column: u32,
}

impl Default for Position {
    fn default() -> Position {
        Position { line: 1, column: 0 }
    }
}

impl Position {
    pub fn new(line: u32, column: u32) -> Position {
        Position { line, column }
    }

    pub fn move_after_char(&mut self, chr: char) {
        if chr == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    pub fn after_char(mut self, chr: char) -> Position {
        self.move_after_char(chr);
        self
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A named, in-memory source text.
/// Cloning is cheap, clones share the same contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    file_name: Arc<Path>,
    contents: Arc<str>,
}

impl Source {
    /// Creates a source from a (virtual) name and in-memory contents.
    pub fn inline(file_name: &Path, contents: &str) -> Source {
        Source {
            file_name: Arc::from(file_name),
            contents: Arc::from(contents),
        }
    }

    pub fn from_file(file_name: &Path) -> io::Result<Source> {
        let contents = fs::read_to_string(file_name)?;
        Ok(Source::inline(file_name, &contents))
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// Returns the text of a one-based line without its line break
    pub fn get_line(&self, line: u32) -> Option<&str> {
        let idx = usize::try_from(line).ok()?.checked_sub(1)?;
        self.contents
            .split('\n')
            .nth(idx)
            .map(|line| line.trim_end_matches('\r'))
    }

    const LINE_CONTEXT: u32 = 2;

    fn code_context(&self, pos: Position, width: usize) -> (usize, String) {
        let first = pos.line.saturating_sub(Self::LINE_CONTEXT).max(1);
        let lineno_len = pos.line.to_string().len();

        let mut result = String::new();
        for lineno in first..=pos.line {
            let Some(line) = self.get_line(lineno) else {
                break;
            };
            let lineno_str = lineno
                .to_string()
                .pad_to_width_with_alignment(lineno_len, Alignment::Right);

            if lineno == pos.line {
                let _ = writeln!(result, "{lineno_str} --> {}", line.trim_end());
                result.push_str(&" ".repeat(lineno_len));
                result.push_str("  |  ");
                for chr in line.chars().take(pos.column as usize) {
                    result.push(if chr == '\t' { '\t' } else { ' ' });
                }
                result.push_str(&"~".repeat(width.max(1)));
                result.push('\n');
            } else {
                let _ = writeln!(result, "{lineno_str}  |  {}", line.trim_end());
            }
        }
        (lineno_len, result)
    }

    /// Create a string for pretty printing a message at a position.
    /// `width` is the number of characters to underline.
    pub fn show(&self, pos: Position, width: usize, message: &str) -> String {
        let (lineno_len, pretty_str) = self.code_context(pos, width);
        let mut result = String::new();

        let _ = writeln!(result, "{message}");
        result.push_str(&" ".repeat(lineno_len));
        let _ = writeln!(
            result,
            " --> {}:{}",
            self.file_name.to_string_lossy(),
            pos.line
        );
        result.push_str(&" ".repeat(lineno_len));
        result.push_str("  |\n");
        result.push_str(&pretty_str);
        result
    }
}
