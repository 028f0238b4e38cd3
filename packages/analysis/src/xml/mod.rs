//! Node predicate library: tree navigation and boolean tests over TEI nodes.

mod utils;

pub use utils::{
    ancestor_elements, find_by_path, find_child, find_children, get_list_type,
    get_node_by_xml_id, get_target_node, get_xml_id, get_xml_lang, has_ancestor,
    has_tag, is_comment, is_element, is_more_than_whitespace, is_processing_instruction,
    is_text_node, node_kind, normalize_space, preceding_sibling_elements, string_value,
    NodeKind,
};
