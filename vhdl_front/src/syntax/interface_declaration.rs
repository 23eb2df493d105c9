// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use super::common::{parse_identifier_list, parse_optional_assignment, ParseResult};
use super::tokens::{Kind::*, *};
// LRM 6.5 Interface declarations
use crate::ast::*;
use std::str::FromStr;

/// Parse a keyword into `T` and advance, leaving the stream untouched otherwise
fn pop_if_keyword_as<T: FromStr>(stream: &TokenStream) -> Option<T> {
    let token = stream.peek();
    if token.kind != Keyword {
        return None;
    }
    let value = T::from_str(&token.value).ok()?;
    stream.skip();
    Some(value)
}

pub fn parse_optional_mode(stream: &TokenStream) -> Option<Mode> {
    pop_if_keyword_as(stream)
}

fn parse_optional_object_class(stream: &TokenStream) -> Option<ObjectClass> {
    pop_if_keyword_as(stream)
}

fn parse_direction(stream: &TokenStream) -> ParseResult<Direction> {
    pop_if_keyword_as(stream)
        .ok_or_else(|| stream.peek().syntax_error("Expected 'to' or 'downto'"))
}

fn parse_bound(stream: &TokenStream, which: &str) -> ParseResult<String> {
    stream
        .pop_if_kind(Literal)
        .map(|token| token.value.clone())
        .ok_or_else(|| stream.peek().syntax_error(format!("Expected {which} bound")))
}

/// ( upper to|downto lower ), both bounds are literals
pub fn parse_range_constraint(stream: &TokenStream) -> ParseResult<RangeConstraint> {
    stream.expect_symbol("(")?;
    let upper = parse_bound(stream, "upper")?;
    let direction = parse_direction(stream)?;
    let lower = parse_bound(stream, "lower")?;
    stream.expect_symbol(")")?;

    Ok(RangeConstraint {
        upper,
        direction,
        lower,
    })
}

/// A type mark, `bit_vector` must be constrained and any other type mark may be
pub fn parse_interface_type(stream: &TokenStream) -> ParseResult<InterfaceType> {
    let type_mark = stream.expect_ident()?;
    let range = if type_mark == "bit_vector" || stream.next_is_symbol("(") {
        Some(parse_range_constraint(stream)?)
    } else {
        None
    };

    Ok(InterfaceType { type_mark, range })
}

/// One declaration may name several objects, they become one element each
pub fn parse_interface_element(stream: &TokenStream) -> ParseResult<Vec<InterfaceElement>> {
    let class = parse_optional_object_class(stream);
    let idents = parse_identifier_list(stream)?;
    stream.expect_symbol(":")?;
    let mode = parse_optional_mode(stream);
    let interface_type = parse_interface_type(stream)?;
    let default = parse_optional_assignment(stream)?;

    Ok(idents
        .into_iter()
        .map(|ident| InterfaceElement {
            ident,
            class,
            mode,
            interface_type: interface_type.clone(),
            default: default.clone(),
        })
        .collect())
}

/// ( element { ; element } [;] )
pub fn parse_interface_list(stream: &TokenStream) -> ParseResult<InterfaceList> {
    stream.expect_symbol("(")?;

    let mut elements = Vec::new();
    while !stream.next_is_symbol(")") {
        elements.extend(parse_interface_element(stream)?);
        if !stream.pop_if_symbol(";") {
            break;
        }
    }
    stream.expect_symbol(")")?;

    Ok(InterfaceList { elements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::test::Code;
    use pretty_assertions::assert_eq;

    fn element(ident: &str, mode: Option<Mode>, type_mark: &str) -> InterfaceElement {
        InterfaceElement {
            ident: ident.to_owned(),
            class: None,
            mode,
            interface_type: InterfaceType::new(type_mark),
            default: None,
        }
    }

    #[test]
    fn parses_modes() {
        for (code, mode) in [
            ("in", Mode::In),
            ("out", Mode::Out),
            ("INOUT", Mode::InOut),
            ("buffer", Mode::Buffer),
            ("linkage", Mode::Linkage),
        ] {
            let parsed = Code::new(code).with_stream(|stream| Ok(parse_optional_mode(stream)));
            assert_eq!(parsed, Some(mode));
        }
    }

    #[test]
    fn mode_is_optional() {
        let code = Code::new("bit");
        let mode = code.with_partial_stream(|stream| {
            let mode = parse_optional_mode(stream);
            assert!(stream.next_kind_is(Identifier));
            mode
        });
        assert_eq!(mode, None);
    }

    #[test]
    fn parses_simple_element() {
        assert_eq!(
            Code::new("a : in bit").with_stream(parse_interface_element),
            vec![element("a", Some(Mode::In), "bit")]
        );
    }

    #[test]
    fn parses_element_without_mode() {
        assert_eq!(
            Code::new("width : integer").with_stream(parse_interface_element),
            vec![element("width", None, "integer")]
        );
    }

    #[test]
    fn identifier_list_expands_in_order() {
        assert_eq!(
            Code::new("a, b : in bit").with_stream(parse_interface_element),
            vec![
                element("a", Some(Mode::In), "bit"),
                element("b", Some(Mode::In), "bit")
            ]
        );
    }

    #[test]
    fn parses_class_and_default() {
        let elements =
            Code::new("signal clk : in bit := '0'").with_stream(parse_interface_element);
        assert_eq!(
            elements,
            vec![InterfaceElement {
                ident: "clk".to_owned(),
                class: Some(ObjectClass::Signal),
                mode: Some(Mode::In),
                interface_type: InterfaceType::new("bit"),
                default: Some("'0'".to_owned()),
            }]
        );
    }

    #[test]
    fn parses_bit_vector_bounds() {
        let typ = Code::new("bit_vector ( 7 downto 0 )").with_stream(parse_interface_type);
        assert_eq!(typ.type_mark, "bit_vector");
        assert_eq!(typ.upper(), Some("7"));
        assert_eq!(typ.direction(), Some(Direction::Downto));
        assert_eq!(typ.lower(), Some("0"));
    }

    #[test]
    fn parses_ascending_range_on_other_type_mark() {
        let typ = Code::new("std_logic_vector(0 TO 3)").with_stream(parse_interface_type);
        assert_eq!(
            typ.range,
            Some(RangeConstraint {
                upper: "0".to_owned(),
                direction: Direction::To,
                lower: "3".to_owned(),
            })
        );
    }

    #[test]
    fn unconstrained_type_has_no_bounds() {
        let typ = Code::new("bit").with_stream(parse_interface_type);
        assert_eq!(typ.range, None);
        assert_eq!(typ.upper(), None);
        assert_eq!(typ.direction(), None);
        assert_eq!(typ.lower(), None);
    }

    #[test]
    fn bit_vector_requires_range() {
        let err = Code::new("bit_vector;").with_stream_err(parse_interface_type);
        assert_eq!(err.message, "Expected '('");
        assert_eq!(err.found, Some(";".to_owned()));
    }

    #[test]
    fn range_requires_direction() {
        let code = Code::new("bit_vector(7 of 0)");
        let err = code.with_stream_err(parse_interface_type);
        assert_eq!(err.message, "Expected 'to' or 'downto'");
        assert_eq!(err.pos, code.pos_of("of"));
    }

    #[test]
    fn bounds_must_be_literals() {
        let code = Code::new("bit_vector(n downto 0)");
        let err = code.with_stream_err(parse_interface_type);
        assert_eq!(err.message, "Expected upper bound");
        assert_eq!(err.pos, code.pos_of("n "));
        assert_eq!(err.found, Some("n".to_owned()));

        let err = Code::new("bit_vector(7 downto m)").with_stream_err(parse_interface_type);
        assert_eq!(err.message, "Expected lower bound");
        assert_eq!(err.found, Some("m".to_owned()));
    }

    #[test]
    fn parses_interface_list() {
        let list = Code::new(
            "(
    a : in bit;
    b : in bit;
    c : out bit
)",
        )
        .with_stream(parse_interface_list);
        assert_eq!(
            list.elements,
            vec![
                element("a", Some(Mode::In), "bit"),
                element("b", Some(Mode::In), "bit"),
                element("c", Some(Mode::Out), "bit")
            ]
        );
    }

    #[test]
    fn trailing_semicolon_ends_list() {
        let list = Code::new("(a : in bit;)").with_stream(parse_interface_list);
        assert_eq!(list.elements, vec![element("a", Some(Mode::In), "bit")]);
    }

    #[test]
    fn empty_interface_list() {
        let list = Code::new("()").with_stream(parse_interface_list);
        assert_eq!(list, InterfaceList::default());
    }

    #[test]
    fn elements_must_be_separated() {
        let code = Code::new("(a : in bit b : in bit)");
        let err = code.with_stream_err(parse_interface_list);
        assert_eq!(err.message, "Expected ')'");
        assert_eq!(err.pos, code.pos_of("b :"));
        assert_eq!(err.found, Some("b".to_owned()));
    }

    #[test]
    fn element_requires_colon() {
        let err = Code::new("(a in bit)").with_stream_err(parse_interface_list);
        assert_eq!(err.message, "Expected ':'");
        assert_eq!(err.found, Some("in".to_owned()));
    }
}
