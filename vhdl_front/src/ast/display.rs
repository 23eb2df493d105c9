// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Implementation of Display

use super::*;
use itertools::Itertools;
use std::fmt::{Display, Formatter, Result};

/// A borrowed reference to any node of the tree
#[derive(Clone, Copy, Debug)]
pub enum AnyNode<'a> {
    DesignFile(&'a DesignFile),
    Entity(&'a EntityDeclaration),
    EntityHeader(&'a EntityHeader),
    InterfaceList(&'a InterfaceList),
    InterfaceElement(&'a InterfaceElement),
    InterfaceType(&'a InterfaceType),
    Architecture(&'a ArchitectureDeclaration),
    DeclarativeItem(&'a DeclarativeItem),
}

const INDENT: &str = "  ";

fn push_line(out: &mut String, depth: usize, line: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(line);
    out.push('\n');
}

fn with_range(type_mark: &str, range: Option<&RangeConstraint>) -> String {
    match range {
        Some(range) => format!(
            "{type_mark}({} {} {})",
            range.upper, range.direction, range.lower
        ),
        None => type_mark.to_owned(),
    }
}

fn with_value(text: String, value: Option<&String>) -> String {
    match value {
        Some(value) => format!("{text} := {value}"),
        None => text,
    }
}

fn list_heading(list: &InterfaceList) -> String {
    format!("InterfaceList[{} elements]", list.elements.len())
}

fn element_heading(element: &InterfaceElement) -> String {
    let name = match element.class {
        Some(class) => format!("{class} {}", element.ident),
        None => element.ident.clone(),
    };
    let fields = std::iter::once(name)
        .chain(element.mode.map(|mode| mode.to_string()))
        .join(", ");
    with_value(
        format!(
            "InterfaceElement({fields}) : {}",
            with_range(
                &element.interface_type.type_mark,
                element.interface_type.range.as_ref()
            )
        ),
        element.default.as_ref(),
    )
}

fn declaration_heading(item: &DeclarativeItem) -> String {
    let (label, ident, subtype, value) = match item {
        DeclarativeItem::Constant(decl) => {
            ("ConstantDeclaration", &decl.ident, &decl.subtype, &decl.value)
        }
        DeclarativeItem::Signal(decl) => {
            ("SignalDeclaration", &decl.ident, &decl.subtype, &decl.value)
        }
    };
    let body = with_value(
        format!(
            "{ident} : {}",
            with_range(&subtype.type_mark, subtype.range.as_ref())
        ),
        value.as_ref(),
    );
    format!("{label}({body})")
}

fn render_elements(out: &mut String, depth: usize, list: &InterfaceList) {
    for element in &list.elements {
        push_line(out, depth, &element_heading(element));
    }
}

fn render_labeled_list(out: &mut String, depth: usize, label: &str, list: Option<&InterfaceList>) {
    match list {
        Some(list) => {
            push_line(out, depth, &format!("{label}: {}", list_heading(list)));
            render_elements(out, depth + 1, list);
        }
        None => push_line(out, depth, &format!("{label}: none")),
    }
}

fn render_into(out: &mut String, depth: usize, node: AnyNode<'_>) {
    match node {
        AnyNode::DesignFile(file) => {
            push_line(out, depth, "DesignFile");
            if let Some(ref entity) = file.entity {
                render_into(out, depth + 1, AnyNode::Entity(entity));
            }
            if let Some(ref architecture) = file.architecture {
                render_into(out, depth + 1, AnyNode::Architecture(architecture));
            }
        }
        AnyNode::Entity(entity) => {
            let heading = match entity.end_ident {
                Some(ref end_ident) => {
                    format!("EntityDeclaration({}, end {end_ident})", entity.ident)
                }
                None => format!("EntityDeclaration({})", entity.ident),
            };
            push_line(out, depth, &heading);
            render_into(out, depth + 1, AnyNode::EntityHeader(&entity.header));
        }
        AnyNode::EntityHeader(header) => {
            push_line(out, depth, "EntityHeader");
            render_labeled_list(out, depth + 1, "generics", header.generic_list.as_ref());
            render_labeled_list(out, depth + 1, "ports", header.port_list.as_ref());
        }
        AnyNode::InterfaceList(list) => {
            push_line(out, depth, &list_heading(list));
            render_elements(out, depth + 1, list);
        }
        AnyNode::InterfaceElement(element) => {
            push_line(out, depth, &element_heading(element));
        }
        AnyNode::InterfaceType(typ) => {
            push_line(out, depth, &with_range(&typ.type_mark, typ.range.as_ref()));
        }
        AnyNode::Architecture(architecture) => {
            let mut fields = architecture.ident.clone();
            if let Some(ref entity_name) = architecture.entity_name {
                fields = format!("{fields} of {entity_name}");
            }
            if let Some(ref end_ident) = architecture.end_ident {
                fields = format!("{fields}, end {end_ident}");
            }
            push_line(out, depth, &format!("ArchitectureDeclaration({fields})"));
            push_line(
                out,
                depth + 1,
                &format!("DeclarativePart[{} items]", architecture.decl.len()),
            );
            for item in &architecture.decl {
                render_into(out, depth + 2, AnyNode::DeclarativeItem(item));
            }
        }
        AnyNode::DeclarativeItem(item) => {
            push_line(out, depth, &declaration_heading(item));
        }
    }
}

/// Render a node and all of its children as an indented multi-line dump.
/// The output is meant for inspection and is not parsed back.
pub fn render(node: AnyNode<'_>) -> String {
    let mut out = String::new();
    render_into(&mut out, 0, node);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

macro_rules! impl_any_node {
    ($($typ:ident => $variant:ident),+ $(,)?) => {
        $(
            impl<'a> From<&'a $typ> for AnyNode<'a> {
                fn from(node: &'a $typ) -> AnyNode<'a> {
                    AnyNode::$variant(node)
                }
            }

            impl Display for $typ {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    write!(f, "{}", render(AnyNode::from(self)))
                }
            }
        )+
    };
}

impl_any_node!(
    DesignFile => DesignFile,
    EntityDeclaration => Entity,
    EntityHeader => EntityHeader,
    InterfaceList => InterfaceList,
    InterfaceElement => InterfaceElement,
    InterfaceType => InterfaceType,
    ArchitectureDeclaration => Architecture,
    DeclarativeItem => DeclarativeItem,
);
