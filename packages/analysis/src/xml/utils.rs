//! XML utility functions for navigating and testing TEI DOM trees.
//!
//! All lookups are namespace-qualified through [`QName`], so a `<div>`
//! outside the TEI namespace never matches `tei:div`.

use std::iter::successors;

use roxmltree::{Node, NodeType};

use crate::namespace::{tei, QName, XML_NS};

/// The kinds of node found in a parsed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Element,
    Comment,
    ProcessingInstruction,
    Text,
}

/// Determine the kind of a node.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use teidocs_analysis::xml::{node_kind, NodeKind};
///
/// let doc = Document::parse("<root><!-- note --><?pi data?>text</root>").unwrap();
/// let kinds: Vec<_> = doc.root_element().children().map(node_kind).collect();
/// assert_eq!(
///     kinds,
///     vec![NodeKind::Comment, NodeKind::ProcessingInstruction, NodeKind::Text]
/// );
/// ```
#[must_use]
pub fn node_kind(node: Node<'_, '_>) -> NodeKind {
    match node.node_type() {
        NodeType::Root => NodeKind::Root,
        NodeType::Element => NodeKind::Element,
        NodeType::Comment => NodeKind::Comment,
        NodeType::PI => NodeKind::ProcessingInstruction,
        NodeType::Text => NodeKind::Text,
    }
}

/// Check if a node is an element (not a comment, PI, text or the root).
#[must_use]
pub fn is_element(node: Node<'_, '_>) -> bool {
    node_kind(node) == NodeKind::Element
}

/// Check if a node is a comment.
#[must_use]
pub fn is_comment(node: Node<'_, '_>) -> bool {
    node_kind(node) == NodeKind::Comment
}

/// Check if a node is a processing instruction.
#[must_use]
pub fn is_processing_instruction(node: Node<'_, '_>) -> bool {
    node_kind(node) == NodeKind::ProcessingInstruction
}

/// Check if a node is a text node.
#[must_use]
pub fn is_text_node(node: Node<'_, '_>) -> bool {
    node_kind(node) == NodeKind::Text
}

/// Check if a node is an element with the given qualified name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use teidocs_analysis::namespace::tei;
/// use teidocs_analysis::xml::has_tag;
///
/// let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert!(has_tag(doc.root_element(), tei("TEI")));
/// assert!(!has_tag(doc.root_element(), tei("text")));
/// ```
#[must_use]
pub fn has_tag(node: Node<'_, '_>, name: QName) -> bool {
    node.is_element()
        && node.tag_name().name() == name.local
        && node.tag_name().namespace() == Some(name.namespace)
}

/// Iterate over the element ancestors of a node, nearest first.
///
/// Unlike `Node::ancestors`, the node itself is not included.
pub fn ancestor_elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    successors(node.parent_element(), |n| n.parent_element())
}

/// Iterate over the preceding element siblings of a node, nearest first.
pub fn preceding_sibling_elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    successors(node.prev_sibling_element(), |n| n.prev_sibling_element())
}

/// Check if any element ancestor satisfies the predicate.
pub fn has_ancestor(node: Node<'_, '_>, predicate: impl Fn(Node<'_, '_>) -> bool) -> bool {
    ancestor_elements(node).any(|anc| predicate(anc))
}

/// Get the `xml:id` of a node.
///
/// Returns the empty string when absent; callers treat `""` as "no id".
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use teidocs_analysis::xml::get_xml_id;
///
/// let doc = Document::parse(r#"<p xml:id="p-1"><hi/></p>"#).unwrap();
/// let p = doc.root_element();
/// assert_eq!(get_xml_id(p), "p-1");
/// assert_eq!(get_xml_id(p.first_element_child().unwrap()), "");
/// ```
#[must_use]
pub fn get_xml_id<'a>(node: Node<'a, '_>) -> &'a str {
    node.attribute((XML_NS, "id")).unwrap_or_default()
}

/// Get the `xml:lang` of a node itself (not inherited).
#[must_use]
pub fn get_xml_lang<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((XML_NS, "lang"))
}

/// Get the list type applying to a node.
///
/// A `tei:list` with a `type` attribute yields its own type; any other node
/// yields the type of the nearest typed `tei:list` ancestor; otherwise `""`.
#[must_use]
pub fn get_list_type<'a>(node: Node<'a, '_>) -> &'a str {
    if is_typed_list(node) {
        return node.attribute("type").unwrap_or_default();
    }
    ancestor_elements(node)
        .find(|anc| is_typed_list(*anc))
        .and_then(|list| list.attribute("type"))
        .unwrap_or_default()
}

fn is_typed_list(node: Node<'_, '_>) -> bool {
    has_tag(node, tei("list")) && node.has_attribute("type")
}

/// Check whether a string contains at least one non-whitespace character.
#[must_use]
pub fn is_more_than_whitespace(s: &str) -> bool {
    s.chars().any(|c| !c.is_whitespace())
}

/// Collapse whitespace runs into single spaces and trim the ends.
///
/// # Examples
/// ```
/// use teidocs_analysis::xml::normalize_space;
///
/// assert_eq!(normalize_space("  Editorial\n   guidelines "), "Editorial guidelines");
/// ```
#[must_use]
pub fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Find the first child element with the given name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, name: QName) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, name))
}

/// Find all child elements with the given name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    name: QName,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, name))
}

/// Follow a path of child element names.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use teidocs_analysis::namespace::tei;
/// use teidocs_analysis::xml::{find_by_path, string_value};
///
/// let xml = r#"<teiHeader xmlns="http://www.tei-c.org/ns/1.0">
///     <fileDesc><titleStmt><title>Special characters</title></titleStmt></fileDesc>
/// </teiHeader>"#;
/// let doc = Document::parse(xml).unwrap();
/// let path = [tei("fileDesc"), tei("titleStmt"), tei("title")];
/// let title = find_by_path(doc.root_element(), &path).unwrap();
/// assert_eq!(string_value(title), "Special characters");
/// ```
pub fn find_by_path<'a, 'input>(
    node: Node<'a, 'input>,
    path: &[QName],
) -> Option<Node<'a, 'input>> {
    path.iter()
        .try_fold(node, |current, name| find_child(current, *name))
}

/// Concatenate all descendant text of a node, in document order.
#[must_use]
pub fn string_value(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Find the element carrying the given `xml:id` anywhere in the tree.
pub fn get_node_by_xml_id<'a, 'input>(
    node: Node<'a, 'input>,
    xml_id: &str,
) -> Option<Node<'a, 'input>> {
    node.document()
        .descendants()
        .find(|n| n.is_element() && get_xml_id(*n) == xml_id)
}

/// Find the element with the given `xml:id` inside the `tei:text` of the
/// `tei:TEI` document enclosing `node`.
pub fn get_target_node<'a, 'input>(
    node: Node<'a, 'input>,
    xml_id: &str,
) -> Option<Node<'a, 'input>> {
    let tei_root = if has_tag(node, tei("TEI")) {
        node
    } else {
        ancestor_elements(node).find(|anc| has_tag(*anc, tei("TEI")))?
    };
    find_children(tei_root, tei("text"))
        .flat_map(|text| text.descendants().skip(1))
        .find(|n| n.is_element() && get_xml_id(*n) == xml_id)
}
