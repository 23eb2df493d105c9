// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use super::common::{parse_identifier_list, ParseResult};
use super::interface_declaration::parse_range_constraint;
use super::tokens::TokenStream;
use crate::ast::*;

/// Lexemes up to a `;` or `begin` outside parentheses, or up to `:=` when asked
fn take_until_delimiter(stream: &TokenStream, stop_at_assignment: bool) -> Vec<String> {
    let mut lexemes = Vec::new();
    let mut depth = 0usize;

    while !stream.is_at_end() {
        let token = stream.peek();
        if depth == 0
            && (token.is_symbol(";")
                || token.is_keyword("begin")
                || (stop_at_assignment && token.is_operator(":=")))
        {
            break;
        }
        if token.is_symbol("(") {
            depth += 1;
        } else if token.is_symbol(")") {
            if depth == 0 {
                break;
            }
            depth -= 1;
        }
        lexemes.push(token.value.clone());
        stream.skip();
    }

    lexemes
}

/// type_mark [constraint], a constraint other than a literal range is skipped
fn parse_subtype_indication(stream: &TokenStream) -> ParseResult<InterfaceType> {
    let type_mark = stream.expect_ident()?;

    let mut range = None;
    if stream.next_is_symbol("(") {
        let state = stream.state();
        match parse_range_constraint(stream) {
            Ok(constraint) => range = Some(constraint),
            Err(_) => stream.set_state(state),
        }
    }

    let skipped = take_until_delimiter(stream, true);
    if !skipped.is_empty() {
        trace!("Skipped constraint '{}' on {type_mark}", skipped.join(" "));
    }

    Ok(InterfaceType { type_mark, range })
}

/// [:= expression], the expression is kept as its lexemes joined by spaces
fn parse_optional_value(stream: &TokenStream) -> ParseResult<Option<String>> {
    if !stream.pop_if_operator(":=") {
        return Ok(None);
    }
    let lexemes = take_until_delimiter(stream, false);
    if lexemes.is_empty() {
        return Err(stream.peek().syntax_error("Expected expression"));
    }
    Ok(Some(lexemes.join(" ")))
}

/// identifier_list : subtype_indication [:= expression] ;
fn parse_object_declaration(
    stream: &TokenStream,
) -> ParseResult<(Vec<String>, InterfaceType, Option<String>)> {
    let idents = parse_identifier_list(stream)?;
    stream.expect_symbol(":")?;
    let subtype = parse_subtype_indication(stream)?;
    let value = parse_optional_value(stream)?;
    stream.expect_symbol(";")?;
    Ok((idents, subtype, value))
}

/// One declaration may name several objects, they become one item each
pub fn parse_declarative_item(
    stream: &TokenStream,
) -> ParseResult<Option<Vec<DeclarativeItem>>> {
    let items = if stream.pop_if_keyword("constant") {
        let (idents, subtype, value) = parse_object_declaration(stream)?;
        idents
            .into_iter()
            .map(|ident| {
                DeclarativeItem::Constant(ConstantDeclaration {
                    ident,
                    subtype: subtype.clone(),
                    value: value.clone(),
                })
            })
            .collect()
    } else if stream.pop_if_keyword("signal") {
        let (idents, subtype, value) = parse_object_declaration(stream)?;
        idents
            .into_iter()
            .map(|ident| {
                DeclarativeItem::Signal(SignalDeclaration {
                    ident,
                    subtype: subtype.clone(),
                    value: value.clone(),
                })
            })
            .collect()
    } else {
        return Ok(None);
    };
    Ok(Some(items))
}

/// Items up to the first token that does not start a declaration
pub fn parse_declarative_part(stream: &TokenStream) -> ParseResult<Vec<DeclarativeItem>> {
    let mut decl = Vec::new();
    while let Some(items) = parse_declarative_item(stream)? {
        decl.extend(items);
    }
    Ok(decl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::test::Code;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_constant() {
        let item = Code::new("constant WIDTH : integer := 8;").with_stream(parse_declarative_item);
        assert_eq!(
            item,
            Some(vec![DeclarativeItem::Constant(ConstantDeclaration {
                ident: "width".to_owned(),
                subtype: InterfaceType::new("integer"),
                value: Some("8".to_owned()),
            })])
        );
    }

    #[test]
    fn parses_signal_with_range() {
        let item =
            Code::new("signal s : bit_vector(3 downto 0);").with_stream(parse_declarative_item);
        assert_matches!(
            item.as_deref(),
            Some([DeclarativeItem::Signal(SignalDeclaration { ident, subtype, value: None })])
                if ident == "s" && subtype.upper() == Some("3") && subtype.lower() == Some("0")
        );
    }

    fn signal(ident: &str, subtype: InterfaceType) -> DeclarativeItem {
        DeclarativeItem::Signal(SignalDeclaration {
            ident: ident.to_owned(),
            subtype,
            value: None,
        })
    }

    fn constant(ident: &str, type_mark: &str, value: &str) -> DeclarativeItem {
        DeclarativeItem::Constant(ConstantDeclaration {
            ident: ident.to_owned(),
            subtype: InterfaceType::new(type_mark),
            value: Some(value.to_owned()),
        })
    }

    #[test]
    fn signal_identifier_list_expands_in_order() {
        let item = Code::new("signal x, y : bit;").with_stream(parse_declarative_item);
        assert_eq!(
            item,
            Some(vec![
                signal("x", InterfaceType::new("bit")),
                signal("y", InterfaceType::new("bit"))
            ])
        );
    }

    #[test]
    fn constant_value_is_an_expression() {
        let item = Code::new("constant c : integer := 2 + 3;").with_stream(parse_declarative_item);
        assert_eq!(item, Some(vec![constant("c", "integer", "2 + 3")]));
    }

    #[test]
    fn constant_with_string_value() {
        let item =
            Code::new("constant c : bit_vector := \"0101\";").with_stream(parse_declarative_item);
        assert_eq!(item, Some(vec![constant("c", "bit_vector", "\"0101\"")]));
    }

    #[test]
    fn aggregate_value_keeps_its_parentheses() {
        let item = Code::new("signal s : bit_vector(3 downto 0) := (others => '0');")
            .with_stream(parse_declarative_item);
        assert_matches!(
            item.as_deref(),
            Some([DeclarativeItem::Signal(SignalDeclaration { value: Some(value), .. })])
                if value == "( others => '0' )"
        );
    }

    #[test]
    fn range_constraint_is_skipped() {
        let code = Code::new("signal s : integer range 0 to 7;\nbegin");
        let decl = code.with_partial_stream(|stream| {
            let decl = parse_declarative_part(stream);
            assert!(stream.next_is_keyword("begin"));
            decl
        });
        assert_eq!(decl, Ok(vec![signal("s", InterfaceType::new("integer"))]));
    }

    #[test]
    fn expression_bounds_are_skipped() {
        let code = Code::new("signal s : bit_vector(w - 1 downto 0);\nbegin");
        let decl = code.with_partial_stream(|stream| {
            let decl = parse_declarative_part(stream);
            assert!(stream.next_is_keyword("begin"));
            decl
        });
        assert_eq!(decl, Ok(vec![signal("s", InterfaceType::new("bit_vector"))]));
    }

    #[test]
    fn assignment_requires_expression() {
        let code = Code::new("constant c : integer := ;");
        let err = code.with_stream_err(parse_declarative_part);
        assert_eq!(err.message, "Expected expression");
        assert_eq!(err.pos, code.pos_of(";"));
        assert_eq!(err.found, Some(";".to_owned()));
    }

    #[test]
    fn other_tokens_end_declarative_part() {
        let code = Code::new(
            "\
signal a : bit;
constant c : bit := '1';
begin",
        );
        let decl = code.with_partial_stream(|stream| {
            let decl = parse_declarative_part(stream);
            assert!(stream.next_is_keyword("begin"));
            decl
        });
        assert_matches!(
            decl.as_deref(),
            Ok([DeclarativeItem::Signal(_), DeclarativeItem::Constant(_)])
        );
    }

    #[test]
    fn empty_declarative_part() {
        let code = Code::new("begin");
        let decl = code.with_partial_stream(parse_declarative_part);
        assert_eq!(decl, Ok(Vec::new()));
    }

    #[test]
    fn declaration_requires_semicolon() {
        let code = Code::new("signal s : bit\nbegin");
        let err = code.with_stream_err(parse_declarative_part);
        assert_eq!(err.message, "Expected ';'");
        assert_eq!(err.pos, code.pos_of("begin"));
        assert_eq!(err.found, Some("begin".to_owned()));
    }
}
