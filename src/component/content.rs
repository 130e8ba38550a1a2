//! Content components placed inside page slots
//!
//! Four kinds, each a plain [`Component`] built from a fixed template:
//! image, video, note, and todo. [`ContentSpec`] is their serializable form,
//! used by board files and the compose dialog.

use super::{BaseComponent, Component};
use crate::dom::{Element, MountTree, NodeId, Position, Template};
use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Matches YouTube watch, short-link, shorts, and embed URLs; group 1 is the video id
const YOUTUBE_PATTERN: &str = r"^(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/(?:watch\?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})";

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Convert a YouTube link into its embeddable form
///
/// Anything that isn't recognized as a YouTube link is returned unchanged.
pub fn embed_url(url: &str) -> String {
    static YOUTUBE: OnceLock<Option<Regex>> = OnceLock::new();
    let pattern = YOUTUBE.get_or_init(|| Regex::new(YOUTUBE_PATTERN).ok());

    pattern
        .as_ref()
        .and_then(|re| re.captures(url.trim()))
        .and_then(|caps| caps.get(1))
        .map(|id| format!("{}{}", YOUTUBE_EMBED_BASE, id.as_str()))
        .unwrap_or_else(|| url.to_string())
}

macro_rules! delegate_component {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Component for $ty {
                fn attach_to(
                    &self,
                    tree: &mut MountTree,
                    host: NodeId,
                    position: Position,
                ) -> Result<()> {
                    self.base.attach_to(tree, host, position)
                }
            }

            #[cfg(test)]
            impl $ty {
                pub fn element(&self) -> NodeId {
                    self.base.element()
                }
            }
        )+
    };
}

/// Picture with a caption
#[derive(Debug, Clone)]
pub struct ImageComponent {
    base: BaseComponent,
}

impl ImageComponent {
    pub fn new(tree: &mut MountTree, title: &str, url: &str) -> Self {
        let template = Template::new(Element::new("section").class("image"))
            .child(
                Template::new(Element::new("div").class("image__holder")).child(
                    Element::new("img")
                        .class("image__thumbnail")
                        .attr("src", url)
                        .attr("alt", title)
                        .into(),
                ),
            )
            .child(Element::new("h2").class("image__title").text(title).into());
        Self {
            base: BaseComponent::new(tree, &template),
        }
    }
}

/// Embedded video player with a caption
#[derive(Debug, Clone)]
pub struct VideoComponent {
    base: BaseComponent,
}

impl VideoComponent {
    pub fn new(tree: &mut MountTree, title: &str, url: &str) -> Self {
        let template = Template::new(Element::new("section").class("video"))
            .child(
                Template::new(Element::new("div").class("video__player")).child(
                    Element::new("iframe")
                        .class("video__iframe")
                        .attr("src", embed_url(url))
                        .attr("title", title)
                        .into(),
                ),
            )
            .child(Element::new("h3").class("video__title").text(title).into());
        Self {
            base: BaseComponent::new(tree, &template),
        }
    }
}

/// Titled free-text note
#[derive(Debug, Clone)]
pub struct NoteComponent {
    base: BaseComponent,
}

impl NoteComponent {
    pub fn new(tree: &mut MountTree, title: &str, body: &str) -> Self {
        let template = Template::new(Element::new("section").class("note"))
            .child(Element::new("h2").class("note__title").text(title).into())
            .child(Element::new("p").class("note__body").text(body).into());
        Self {
            base: BaseComponent::new(tree, &template),
        }
    }
}

/// Titled checklist entry
#[derive(Debug, Clone)]
pub struct TodoComponent {
    base: BaseComponent,
}

impl TodoComponent {
    pub fn new(tree: &mut MountTree, title: &str, body: &str) -> Self {
        let template = Template::new(Element::new("section").class("todo"))
            .child(Element::new("h2").class("todo__title").text(title).into())
            .child(
                Element::new("input")
                    .class("todo-checkbox")
                    .attr("type", "checkbox")
                    .into(),
            )
            .child(Element::new("label").class("todo-label").text(body).into());
        Self {
            base: BaseComponent::new(tree, &template),
        }
    }
}

delegate_component!(ImageComponent, VideoComponent, NoteComponent, TodoComponent);

/// The four content kinds, without their data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    Video,
    Note,
    Todo,
}

impl ContentKind {
    pub fn all() -> &'static [ContentKind] {
        &[
            ContentKind::Image,
            ContentKind::Video,
            ContentKind::Note,
            ContentKind::Todo,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Note => "Note",
            Self::Todo => "Todo",
        }
    }

    /// Block class on the content root ("image", "video", ...)
    pub fn class(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Note => "note",
            Self::Todo => "todo",
        }
    }

    /// Class of the element holding the content's title
    pub fn title_class(&self) -> String {
        format!("{}__title", self.class())
    }

    /// Recognize a content root by its block class
    pub fn from_class(class: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.class() == class)
    }

    /// TUI key that opens the compose dialog for this kind
    pub fn key(&self) -> char {
        match self {
            Self::Image => 'i',
            Self::Video => 'v',
            Self::Note => 'n',
            Self::Todo => 't',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.key() == key)
    }

    /// Label of the second input field (the first is always the title)
    pub fn detail_label(&self) -> &'static str {
        match self {
            Self::Image | Self::Video => "URL",
            Self::Note | Self::Todo => "Body",
        }
    }

    /// Pair this kind with user-entered data
    pub fn spec(self, title: impl Into<String>, detail: impl Into<String>) -> ContentSpec {
        let title = title.into();
        let detail = detail.into();
        match self {
            Self::Image => ContentSpec::Image { title, url: detail },
            Self::Video => ContentSpec::Video { title, url: detail },
            Self::Note => ContentSpec::Note { title, body: detail },
            Self::Todo => ContentSpec::Todo { title, body: detail },
        }
    }
}

/// Serializable description of one piece of content
///
/// ```toml
/// [[items]]
/// kind = "note"
/// title = "Groceries"
/// body = "eggs, milk"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentSpec {
    Image { title: String, url: String },
    Video { title: String, url: String },
    Note { title: String, body: String },
    Todo { title: String, body: String },
}

impl ContentSpec {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Image { .. } => ContentKind::Image,
            Self::Video { .. } => ContentKind::Video,
            Self::Note { .. } => ContentKind::Note,
            Self::Todo { .. } => ContentKind::Todo,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Image { title, .. }
            | Self::Video { title, .. }
            | Self::Note { title, .. }
            | Self::Todo { title, .. } => title,
        }
    }

    /// Build the matching component into `tree` (detached)
    pub fn build(&self, tree: &mut MountTree) -> Box<dyn Component> {
        match self {
            Self::Image { title, url } => Box::new(ImageComponent::new(tree, title, url)),
            Self::Video { title, url } => Box::new(VideoComponent::new(tree, title, url)),
            Self::Note { title, body } => Box::new(NoteComponent::new(tree, title, body)),
            Self::Todo { title, body } => Box::new(TodoComponent::new(tree, title, body)),
        }
    }
}
