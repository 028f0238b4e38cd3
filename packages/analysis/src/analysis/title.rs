//! Title extraction helpers and the title language policy.

use roxmltree::Node;

use crate::xml::{get_xml_lang, is_more_than_whitespace, normalize_space, string_value};

/// Pick one of several language variants of a title source.
///
/// Order of preference: the first language of `langs` present, then the
/// next ones, then a candidate without `xml:lang`, then the first candidate.
pub fn select_by_lang<'a, 'input>(
    candidates: impl IntoIterator<Item = Node<'a, 'input>>,
    langs: &[&str],
) -> Option<Node<'a, 'input>> {
    let candidates: Vec<_> = candidates.into_iter().collect();

    langs
        .iter()
        .find_map(|lang| {
            candidates
                .iter()
                .find(|c| get_xml_lang(**c) == Some(*lang))
        })
        .or_else(|| candidates.iter().find(|c| get_xml_lang(**c).is_none()))
        .or_else(|| candidates.first())
        .copied()
}

/// Whitespace-normalized text of a node, or `None` if it has no text.
#[must_use]
pub fn title_text(node: Node<'_, '_>) -> Option<String> {
    let text = string_value(node);
    is_more_than_whitespace(&text).then(|| normalize_space(&text))
}
