//! Canonical text form of a markup tree.
//!
//! Each node goes on its own line, indented with one tab per depth. The
//! output is stable and is what snapshot tests compare against.

use crate::{Node, NodeType};

/// Render `node` and its descendants as indented markup.
///
/// ```
/// use easel_dom::{AttributesMap, Node, print_tree};
///
/// let tree = Node::element("p", AttributesMap::new(), vec![Node::text("hi")]);
/// assert_eq!(print_tree(&tree), "<p>\n\thi\n</p>\n");
/// ```
#[must_use]
pub fn print_tree(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, 0, &mut out);
    out
}

fn write_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "\t".repeat(depth);
    match &node.node_type {
        NodeType::Element(data) => {
            out.push_str(&indent);
            out.push('<');
            out.push_str(&data.tag_name);
            for (name, value) in data.attrs.iter() {
                out.push_str(&format!(" {name}=\"{value}\""));
            }
            out.push_str(">\n");
            for child in &node.children {
                write_node(child, depth + 1, out);
            }
            out.push_str(&format!("{indent}</{}>\n", data.tag_name));
        }
        NodeType::Text(text) => out.push_str(&format!("{indent}{text}\n")),
        NodeType::Comment(text) => out.push_str(&format!("{indent}<!-- {text} -->\n")),
    }
}
