// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

use super::common::{parse_optional, ParseResult};
use super::declarative_part::parse_declarative_part;
use super::interface_declaration::parse_interface_list;
use super::tokens::{Kind::*, *};
use crate::ast::*;

/// ( list ) ;
fn parse_interface_clause(stream: &TokenStream) -> ParseResult<InterfaceList> {
    let list = parse_interface_list(stream)?;
    stream.expect_symbol(";")?;
    Ok(list)
}

pub fn parse_entity_header(stream: &TokenStream) -> ParseResult<EntityHeader> {
    let generic_list = parse_optional(stream, "generic", parse_interface_clause)?;
    let port_list = parse_optional(stream, "port", parse_interface_clause)?;

    Ok(EntityHeader {
        generic_list,
        port_list,
    })
}

/// LRM 3.2 Entity declaration
pub fn parse_entity_declaration(stream: &TokenStream) -> ParseResult<EntityDeclaration> {
    stream.expect_keyword("entity")?;
    let ident = stream.expect_ident()?;
    stream.expect_keyword("is")?;
    let header = parse_entity_header(stream)?;
    stream.expect_keyword("end")?;
    stream.pop_if_keyword("entity");
    let end_ident = stream.pop_optional_ident();
    stream.expect_symbol(";")?;

    debug!("Parsed entity {ident}");
    Ok(EntityDeclaration {
        ident,
        end_ident,
        header,
    })
}

/// An `end` closing the architecture rather than a nested statement
fn is_architecture_end(stream: &TokenStream) -> bool {
    if !stream.next_is_keyword("end") {
        return false;
    }
    let next = stream.peek_next();
    next.is_keyword("architecture") || next.kind == Identifier || next.is_symbol(";")
}

/// LRM 3.3 Architecture bodies, the statement part is skipped
pub fn parse_architecture_declaration(
    stream: &TokenStream,
) -> ParseResult<ArchitectureDeclaration> {
    stream.expect_keyword("architecture")?;
    let ident = stream.expect_ident()?;
    let entity_name = parse_optional(stream, "of", |stream| stream.expect_ident())?;
    stream.expect_keyword("is")?;
    let decl = parse_declarative_part(stream)?;

    let mut end_ident = None;
    if stream.pop_if_keyword("begin") {
        stream.skip_until(|_| is_architecture_end(stream));
        stream.expect_keyword("end")?;
        stream.pop_if_keyword("architecture");
        end_ident = stream.pop_optional_ident();
        stream.expect_symbol(";")?;
    } else {
        trace!(
            "Declarative part of architecture {ident} ended at '{}'",
            stream.peek()
        );
    }

    debug!("Parsed architecture {ident}");
    Ok(ArchitectureDeclaration {
        ident,
        entity_name,
        end_ident,
        decl,
    })
}

pub fn parse_design_file(stream: &TokenStream) -> ParseResult<DesignFile> {
    let mut design_file = DesignFile::default();

    while !stream.is_at_end() {
        let token = stream.peek();
        if token.is_keyword("entity") {
            design_file.entity = Some(parse_entity_declaration(stream)?);
        } else if token.is_keyword("architecture") {
            design_file.architecture = Some(parse_architecture_declaration(stream)?);
        } else {
            // Neither `end entity` nor `label : entity work.foo` opens a new unit
            let closes = token.is_keyword("end") || token.is_symbol(":");
            stream.skip();
            if closes
                && (stream.next_is_keyword("entity") || stream.next_is_keyword("architecture"))
            {
                stream.skip();
            }
        }
    }

    Ok(design_file)
}
