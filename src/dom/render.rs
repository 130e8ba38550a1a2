//! Rendering a mount subtree for output
//!
//! Three views of the same subtree:
//! - [`to_html`]: indented markup for `pageboard render --format html`
//! - [`outline`]: one line per element, for quick inspection
//! - [`snapshot`]: serde structure emitted as JSON

use super::{MountTree, NodeId};
use serde::Serialize;

/// Elements rendered without a closing tag
const VOID_TAGS: &[&str] = &["img", "input", "br", "hr"];

/// Serializable copy of a subtree
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Snapshot {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub attrs: std::collections::BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Snapshot>,
}

/// Capture `node` and everything under it
pub fn snapshot(tree: &MountTree, node: NodeId) -> Option<Snapshot> {
    let element = tree.element(node)?;
    Some(Snapshot {
        tag: element.tag.clone(),
        classes: element.classes.clone(),
        attrs: element.attrs.clone(),
        text: element.text.clone(),
        children: tree
            .children(node)
            .iter()
            .filter_map(|child| snapshot(tree, *child))
            .collect(),
    })
}

/// Render `node` as indented markup (two spaces per level)
pub fn to_html(tree: &MountTree, node: NodeId) -> String {
    let mut out = String::new();
    write_html(tree, node, 0, &mut out);
    out
}

fn write_html(tree: &MountTree, node: NodeId, depth: usize, out: &mut String) {
    let Some(element) = tree.element(node) else {
        return;
    };
    let indent = "  ".repeat(depth);

    out.push_str(&indent);
    out.push('<');
    out.push_str(&element.tag);
    if !element.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape(&element.classes.join(" "))));
    }
    for (key, value) in &element.attrs {
        out.push_str(&format!(" {}=\"{}\"", key, escape(value)));
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        out.push('\n');
        return;
    }

    let children = tree.children(node);
    let text = element.text.as_deref().map(escape);

    if children.is_empty() {
        // Leaf: keep text inline
        if let Some(text) = text {
            out.push_str(&text);
        }
    } else {
        out.push('\n');
        if let Some(text) = text {
            out.push_str(&format!("{}  {}\n", indent, text));
        }
        for child in children {
            write_html(tree, *child, depth + 1, out);
        }
        out.push_str(&indent);
    }

    out.push_str(&format!("</{}>\n", element.tag));
}

/// One line per element: `tag.class1.class2 "text"`, indented by depth
pub fn outline(tree: &MountTree, node: NodeId) -> Vec<String> {
    let mut lines = Vec::new();
    write_outline(tree, node, 0, &mut lines);
    lines
}

fn write_outline(tree: &MountTree, node: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(element) = tree.element(node) else {
        return;
    };

    let mut line = format!("{}{}", "  ".repeat(depth), element.tag);
    for class in &element.classes {
        line.push('.');
        line.push_str(class);
    }
    if let Some(text) = element.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        line.push_str(&format!(" {:?}", text));
    }
    lines.push(line);

    for child in tree.children(node) {
        write_outline(tree, *child, depth + 1, lines);
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, Template};

    fn sample(tree: &mut MountTree) -> NodeId {
        let template = Template::new(Element::new("ul").class("page")).child(
            Template::new(Element::new("li").class("page-item"))
                .child(Element::new("img").attr("src", "a.png").into())
                .child(Element::new("h2").text("Tom & <Jerry>").into()),
        );
        tree.build(&template)
    }

    #[test]
    fn test_to_html_indents_and_escapes() {
        let mut tree = MountTree::new();
        let root = sample(&mut tree);
        let html = to_html(&tree, root);

        let expected = "<ul class=\"page\">\n  <li class=\"page-item\">\n    <img src=\"a.png\">\n    <h2>Tom &amp; &lt;Jerry&gt;</h2>\n  </li>\n</ul>\n";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_outline() {
        let mut tree = MountTree::new();
        let root = sample(&mut tree);
        let lines = outline(&tree, root);
        assert_eq!(
            lines,
            vec![
                "ul.page".to_string(),
                "  li.page-item".to_string(),
                "    img".to_string(),
                "    h2 \"Tom & <Jerry>\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut tree = MountTree::new();
        let root = sample(&mut tree);
        let snap = snapshot(&tree, root).unwrap();
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["tag"], "ul");
        assert_eq!(json["children"][0]["classes"][0], "page-item");
        assert_eq!(json["children"][0]["children"][0]["attrs"]["src"], "a.png");
        assert!(json["children"][0]["children"][0].get("children").is_none());
    }
}
