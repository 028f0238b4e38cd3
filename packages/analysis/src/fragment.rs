//! DTS fragment serializer.
//!
//! Wraps a node or a plain string in a `dts:fragment` envelope:
//!
//! ```text
//! <dts:fragment xmlns:dts="https://w3id.org/dts/api#">
//!     <p xmlns="http://www.tei-c.org/ns/1.0" xml:id="p1">...</p>
//! </dts:fragment>
//! ```
//!
//! Element subtrees keep their names and attributes; comments and
//! processing instructions are dropped.

use std::borrow::Cow;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use roxmltree::Node;

use crate::error::{AnalysisError, Result};
use crate::namespace::DTS_NS;

const FRAGMENT_TAG: &str = "dts:fragment";

/// Content to wrap in a fragment.
#[derive(Debug, Clone, Copy)]
pub enum FragmentContent<'a, 'input: 'a> {
    Node(Node<'a, 'input>),
    Text(&'a str),
}

impl<'a, 'input: 'a> From<Node<'a, 'input>> for FragmentContent<'a, 'input> {
    fn from(node: Node<'a, 'input>) -> Self {
        Self::Node(node)
    }
}

impl<'a, 'input: 'a> From<&'a str> for FragmentContent<'a, 'input> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// Serialize content wrapped in a `dts:fragment` element.
///
/// # Examples
/// ```
/// use teidocs_analysis::fragment::wrap_in_dts_fragment;
///
/// let xml = wrap_in_dts_fragment("a < b").unwrap();
/// assert_eq!(
///     xml,
///     r#"<dts:fragment xmlns:dts="https://w3id.org/dts/api#">a &lt; b</dts:fragment>"#
/// );
/// ```
pub fn wrap_in_dts_fragment<'a, 'input: 'a>(
    content: impl Into<FragmentContent<'a, 'input>>,
) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_fragment(&mut writer, content.into())?;
    into_string(writer)
}

/// Like [`wrap_in_dts_fragment`], preceded by an XML declaration.
pub fn make_dts_fragment_string<'a, 'input: 'a>(
    content: impl Into<FragmentContent<'a, 'input>>,
) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_fragment(&mut writer, content.into())?;
    into_string(writer)
}

fn write_fragment(writer: &mut Writer<Vec<u8>>, content: FragmentContent<'_, '_>) -> Result<()> {
    let mut start = BytesStart::new(FRAGMENT_TAG);
    start.push_attribute(("xmlns:dts", DTS_NS));
    write(writer, Event::Start(start))?;

    match content {
        FragmentContent::Node(node) if node.is_element() => write_element(writer, node, true)?,
        FragmentContent::Node(node) => {
            if let Some(text) = node.text() {
                write(writer, Event::Text(BytesText::new(text)))?;
            }
        }
        FragmentContent::Text(text) => write(writer, Event::Text(BytesText::new(text)))?,
    }

    write(writer, Event::End(BytesEnd::new(FRAGMENT_TAG)))
}

/// Write an element subtree.
fn write_element(writer: &mut Writer<Vec<u8>>, node: Node<'_, '_>, is_root: bool) -> Result<()> {
    let name = qualified_name(node, node.tag_name().namespace(), node.tag_name().name(), true);
    let mut start = BytesStart::new(name.clone());

    for (prefix, uri) in namespace_declarations(node, is_root) {
        match prefix {
            Some(prefix) => start.push_attribute((format!("xmlns:{prefix}").as_str(), uri)),
            None => start.push_attribute(("xmlns", uri)),
        }
    }
    for attr in node.attributes() {
        let key = qualified_name(node, attr.namespace(), attr.name(), false);
        start.push_attribute((&*key, attr.value()));
    }

    if !node.has_children() {
        return write(writer, Event::Empty(start));
    }

    write(writer, Event::Start(start))?;
    for child in node.children() {
        if child.is_element() {
            write_element(writer, child, false)?;
        } else if child.is_text() {
            if let Some(text) = child.text() {
                write(writer, Event::Text(BytesText::new(text)))?;
            }
        }
    }
    write(writer, Event::End(BytesEnd::new(name)))
}

/// Namespace bindings an element has to declare.
///
/// The outermost element declares its whole scope so the fragment stands on
/// its own; nested elements declare only what differs from their parent,
/// including an undeclared default namespace (`xmlns=""`).
fn namespace_declarations<'a>(
    node: Node<'a, '_>,
    is_root: bool,
) -> Vec<(Option<&'a str>, &'a str)> {
    let parent = node.parent_element().filter(|_| !is_root);
    let inherited = |prefix: Option<&str>, uri: &str| {
        parent.is_some_and(|p| p.lookup_namespace_uri(prefix) == Some(uri))
    };

    let mut declarations: Vec<_> = node
        .namespaces()
        .filter(|ns| ns.name() != Some("xml") && !inherited(ns.name(), ns.uri()))
        .map(|ns| (ns.name(), ns.uri()))
        .collect();

    if let Some(parent) = parent {
        let lost_default = node.lookup_namespace_uri(None).is_none()
            && parent.lookup_namespace_uri(None).is_some();
        if lost_default {
            declarations.push((None, ""));
        }
    }
    declarations
}

/// Prefix a local name with the prefix bound to its namespace in scope.
///
/// Elements in the default namespace stay unprefixed; attributes have no
/// default namespace.
fn qualified_name<'n>(
    node: Node<'_, '_>,
    namespace: Option<&str>,
    local: &'n str,
    is_element: bool,
) -> Cow<'n, str> {
    let Some(uri) = namespace else {
        return Cow::Borrowed(local);
    };
    match node.lookup_prefix(uri) {
        Some(prefix) => Cow::Owned(format!("{prefix}:{local}")),
        None if is_element => Cow::Borrowed(local),
        None => {
            tracing::warn!(namespace = %uri, attribute = %local, "No prefix bound for attribute namespace");
            Cow::Borrowed(local)
        }
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| AnalysisError::Serialize(e.to_string()))
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner()).map_err(|e| AnalysisError::Serialize(e.to_string()))
}
