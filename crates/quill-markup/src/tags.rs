//! The known tag-name set and tag shapes.
//!
//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
//!
//! The engine never decides on its own which names are tags: bulk tag
//! operations iterate [`HtmlTag`], and single-tag operations take a
//! [`TagSpec`], which may also name a custom element.

use std::str::FromStr;

use quill_common::MarkupError;
use quill_common::warning::warn_once;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::grammar::{ConstructKind, NamePattern};

/// The three tag shapes, each with its own grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TagType {
    /// `<p>`
    Open,
    /// `</p>`
    Close,
    /// `<br/>`
    SelfClosing,
}

impl TagType {
    /// The construct kind whose grammar recognizes this shape.
    #[must_use]
    pub const fn construct_kind(self) -> ConstructKind {
        match self {
            Self::Open => ConstructKind::OpenTag,
            Self::Close => ConstructKind::CloseTag,
            Self::SelfClosing => ConstructKind::SelfClosingTag,
        }
    }

    /// `Some(ty)` selects one shape; `None` selects all three, self-closing
    /// first, then open, then close.
    #[must_use]
    pub fn selection(ty: Option<Self>) -> Vec<Self> {
        ty.map_or_else(
            || vec![Self::SelfClosing, Self::Open, Self::Close],
            |ty| vec![ty],
        )
    }

    /// Parse `open`, `close` or `self-closing` (any case).
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownTagType`] for anything else.
    pub fn parse(text: &str) -> Result<Self, MarkupError> {
        Self::from_str(text).map_err(|_| MarkupError::UnknownTagType(text.to_string()))
    }
}

/// Every element name of the HTML Living Standard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HtmlTag {
    /// `<a>`
    A,
    /// `<abbr>`
    Abbr,
    /// `<address>`
    Address,
    /// `<area>`
    Area,
    /// `<article>`
    Article,
    /// `<aside>`
    Aside,
    /// `<audio>`
    Audio,
    /// `<b>`
    B,
    /// `<base>`
    Base,
    /// `<bdi>`
    Bdi,
    /// `<bdo>`
    Bdo,
    /// `<blockquote>`
    Blockquote,
    /// `<body>`
    Body,
    /// `<br>`
    Br,
    /// `<button>`
    Button,
    /// `<canvas>`
    Canvas,
    /// `<caption>`
    Caption,
    /// `<cite>`
    Cite,
    /// `<code>`
    Code,
    /// `<col>`
    Col,
    /// `<colgroup>`
    Colgroup,
    /// `<data>`
    Data,
    /// `<datalist>`
    Datalist,
    /// `<dd>`
    Dd,
    /// `<del>`
    Del,
    /// `<details>`
    Details,
    /// `<dfn>`
    Dfn,
    /// `<dialog>`
    Dialog,
    /// `<div>`
    Div,
    /// `<dl>`
    Dl,
    /// `<dt>`
    Dt,
    /// `<em>`
    Em,
    /// `<embed>`
    Embed,
    /// `<fieldset>`
    Fieldset,
    /// `<figcaption>`
    Figcaption,
    /// `<figure>`
    Figure,
    /// `<footer>`
    Footer,
    /// `<form>`
    Form,
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<head>`
    Head,
    /// `<header>`
    Header,
    /// `<hgroup>`
    Hgroup,
    /// `<hr>`
    Hr,
    /// `<html>`
    Html,
    /// `<i>`
    I,
    /// `<iframe>`
    Iframe,
    /// `<img>`
    Img,
    /// `<input>`
    Input,
    /// `<ins>`
    Ins,
    /// `<kbd>`
    Kbd,
    /// `<label>`
    Label,
    /// `<legend>`
    Legend,
    /// `<li>`
    Li,
    /// `<link>`
    Link,
    /// `<main>`
    Main,
    /// `<map>`
    Map,
    /// `<mark>`
    Mark,
    /// `<menu>`
    Menu,
    /// `<meta>`
    Meta,
    /// `<meter>`
    Meter,
    /// `<nav>`
    Nav,
    /// `<noscript>`
    Noscript,
    /// `<object>`
    Object,
    /// `<ol>`
    Ol,
    /// `<optgroup>`
    Optgroup,
    /// `<option>`
    Option,
    /// `<output>`
    Output,
    /// `<p>`
    P,
    /// `<param>`
    Param,
    /// `<picture>`
    Picture,
    /// `<pre>`
    Pre,
    /// `<progress>`
    Progress,
    /// `<q>`
    Q,
    /// `<rp>`
    Rp,
    /// `<rt>`
    Rt,
    /// `<ruby>`
    Ruby,
    /// `<s>`
    S,
    /// `<samp>`
    Samp,
    /// `<script>`
    Script,
    /// `<search>`
    Search,
    /// `<section>`
    Section,
    /// `<select>`
    Select,
    /// `<slot>`
    Slot,
    /// `<small>`
    Small,
    /// `<source>`
    Source,
    /// `<span>`
    Span,
    /// `<strong>`
    Strong,
    /// `<style>`
    Style,
    /// `<sub>`
    Sub,
    /// `<summary>`
    Summary,
    /// `<sup>`
    Sup,
    /// `<table>`
    Table,
    /// `<tbody>`
    Tbody,
    /// `<td>`
    Td,
    /// `<template>`
    Template,
    /// `<textarea>`
    Textarea,
    /// `<tfoot>`
    Tfoot,
    /// `<th>`
    Th,
    /// `<thead>`
    Thead,
    /// `<time>`
    Time,
    /// `<title>`
    Title,
    /// `<tr>`
    Tr,
    /// `<track>`
    Track,
    /// `<u>`
    U,
    /// `<ul>`
    Ul,
    /// `<var>`
    Var,
    /// `<video>`
    Video,
    /// `<wbr>`
    Wbr,
}

impl HtmlTag {
    /// The lowercase tag name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up a tag by name (any case).
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownTag`] if the name is not in the set.
    pub fn parse(name: &str) -> Result<Self, MarkupError> {
        Self::from_str(name).map_err(|_| MarkupError::UnknownTag(name.to_string()))
    }

    /// Every known tag, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// One tag name in one shape: the key a tag rule is specialized on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagSpec {
    name: String,
    tag_type: TagType,
}

impl TagSpec {
    /// A spec for a tag of the known set.
    #[must_use]
    pub fn known(tag: HtmlTag, tag_type: TagType) -> Self {
        Self {
            name: tag.name().to_string(),
            tag_type,
        }
    }

    /// A spec for any tag name, including custom elements.
    ///
    /// The name is lowercased. A name outside [`HtmlTag`] is accepted with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidTagName`] unless the name is non-empty
    /// ASCII letters and digits.
    pub fn new(name: &str, tag_type: TagType) -> Result<Self, MarkupError> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MarkupError::InvalidTagName(name.to_string()));
        }
        if HtmlTag::parse(name).is_err() {
            warn_once(
                "Tags",
                &format!("`{name}` is not a known HTML tag; matching it literally"),
            );
        }
        Ok(Self {
            name: name.to_ascii_lowercase(),
            tag_type,
        })
    }

    /// The tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag shape.
    #[must_use]
    pub const fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// The construct kind this spec specializes.
    #[must_use]
    pub const fn construct_kind(&self) -> ConstructKind {
        self.tag_type.construct_kind()
    }

    /// The name region matching only this tag.
    #[must_use]
    pub fn name_pattern(&self) -> NamePattern {
        NamePattern::literal(&self.name)
    }
}
