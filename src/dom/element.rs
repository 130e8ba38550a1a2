//! Element data and subtree templates

use std::collections::BTreeMap;

/// A single element stored in the mount tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    /// Attributes, kept sorted so rendered output is deterministic
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Element plus child templates, built into a detached subtree by
/// [`MountTree::build`](super::MountTree::build)
///
/// ```ignore
/// let template = Template::new(Element::new("li").class("page-item"))
///     .child(Template::new(Element::new("section").class("page-item__body")));
/// let root = tree.build(&template);
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    pub element: Element,
    pub children: Vec<Template>,
}

impl Template {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: Template) -> Self {
        self.children.push(child);
        self
    }
}

impl From<Element> for Template {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}
