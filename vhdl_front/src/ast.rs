// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this file,
// You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2018, Olof Kraigher olof.kraigher@gmail.com

//! Syntax tree of the supported declaration subset.
//!
//! Every node exclusively owns its children. All identifiers and keywords
//! stored in the tree are lowercase.

mod display;

pub use display::{render, AnyNode};

/// LRM 6.5.2 Interface object declarations
#[derive(
    PartialEq,
    Eq,
    Debug,
    Clone,
    Copy,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    In,
    Out,
    InOut,
    Buffer,
    Linkage,
}

#[derive(
    PartialEq,
    Eq,
    Debug,
    Clone,
    Copy,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ObjectClass {
    Constant,
    Signal,
    Variable,
}

/// LRM 5.2.1 Range direction
#[derive(
    PartialEq,
    Eq,
    Debug,
    Clone,
    Copy,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    To,
    Downto,
}

/// An explicit `(upper to|downto lower)` constraint
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RangeConstraint {
    pub upper: String,
    pub direction: Direction,
    pub lower: String,
}

/// A type mark with an optional range.
/// The bounds only exist together, as one `RangeConstraint`.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct InterfaceType {
    pub type_mark: String,
    pub range: Option<RangeConstraint>,
}

impl InterfaceType {
    pub fn new(type_mark: impl Into<String>) -> InterfaceType {
        InterfaceType {
            type_mark: type_mark.into(),
            range: None,
        }
    }

    pub fn upper(&self) -> Option<&str> {
        self.range.as_ref().map(|range| range.upper.as_str())
    }

    pub fn direction(&self) -> Option<Direction> {
        self.range.as_ref().map(|range| range.direction)
    }

    pub fn lower(&self) -> Option<&str> {
        self.range.as_ref().map(|range| range.lower.as_str())
    }
}

/// One name of a port or generic together with its type
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct InterfaceElement {
    pub ident: String,
    pub class: Option<ObjectClass>,
    pub mode: Option<Mode>,
    pub interface_type: InterfaceType,
    /// Literal or name following `:=`
    pub default: Option<String>,
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct InterfaceList {
    pub elements: Vec<InterfaceElement>,
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct EntityHeader {
    pub generic_list: Option<InterfaceList>,
    pub port_list: Option<InterfaceList>,
}

/// LRM 3.2 Entity declarations
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct EntityDeclaration {
    pub ident: String,
    /// Trailing simple name, never compared to `ident`
    pub end_ident: Option<String>,
    pub header: EntityHeader,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ConstantDeclaration {
    pub ident: String,
    pub subtype: InterfaceType,
    pub value: Option<String>,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SignalDeclaration {
    pub ident: String,
    pub subtype: InterfaceType,
    /// Initial value expression, lexemes joined by single spaces
    pub value: Option<String>,
}

/// LRM 3.3.2 Architecture declarative part
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum DeclarativeItem {
    Constant(ConstantDeclaration),
    Signal(SignalDeclaration),
}

/// LRM 3.3 Architecture bodies
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ArchitectureDeclaration {
    pub ident: String,
    pub entity_name: Option<String>,
    pub end_ident: Option<String>,
    pub decl: Vec<DeclarativeItem>,
}

/// Root of the tree, keeps the last entity and architecture of a file
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct DesignFile {
    pub entity: Option<EntityDeclaration>,
    pub architecture: Option<ArchitectureDeclaration>,
}
