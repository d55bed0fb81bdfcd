//! Backend-neutral view-model produced by the renderer.
//!
//! A [`Node`] tree describes what to show, never how: the HTML backend in
//! [`crate::html`] and the desktop painter both walk the same tree. Interactive
//! nodes carry an [`Action`] that the host routes back into the controller.

use serde::Serialize;

use crate::project::{Progress, ProjectStatus};
use crate::view::{Icon, ViewId};

/// Interaction a host should route back to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "view", rename_all = "snake_case")]
pub enum Action {
    SwitchView(ViewId),
    OpenCreateDialog,
    CloseCreateDialog,
    SubmitNewProject,
}

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Ghost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: Option<String>,
    pub icon: Option<Icon>,
    pub variant: ButtonVariant,
    pub action: Action,
}

/// Flavour of a card, used by backends for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Plain,
    Project,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub kind: CardKind,
    /// Stable identity of the record the card shows, if any.
    pub key: Option<u64>,
    pub children: Vec<Node>,
}

/// One sidebar entry as rendered for a given active view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub view: ViewId,
    pub label: String,
    pub icon: Icon,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dialog {
    pub title: String,
    pub body: Vec<Node>,
    pub footer: Vec<Node>,
    /// Action fired by the close control and by clicks on the backdrop.
    pub dismiss: Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Children laid out top to bottom.
    Stack { children: Vec<Node> },
    /// Leading node pushed left, trailing node pushed right.
    Toolbar {
        leading: Box<Node>,
        trailing: Box<Node>,
    },
    /// Responsive grid of equally sized children.
    Grid { children: Vec<Node> },
    Card(Card),
    CardHeader { icon: Icon, title: String },
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Button(Button),
    Nav { entries: Vec<NavEntry> },
    /// Status pill; the text is the status slug.
    Badge { status: ProjectStatus },
    /// Labelled progress bar filled to `value / 100`.
    Meter { label: String, value: Progress },
    /// Free-text input bound to the controller's draft prompt.
    Prompt { value: String, placeholder: String },
    Dialog(Dialog),
}

impl Node {
    pub fn stack(children: Vec<Node>) -> Self {
        Node::Stack { children }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph { text: text.into() }
    }

    pub fn button(
        label: Option<&str>,
        icon: Option<Icon>,
        variant: ButtonVariant,
        action: Action,
    ) -> Self {
        Node::Button(Button {
            label: label.map(String::from),
            icon,
            variant,
            action,
        })
    }

    /// Direct children of this node, in paint order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Stack { children } | Node::Grid { children } => {
                children.iter().collect()
            },
            Node::Toolbar { leading, trailing } => {
                vec![leading.as_ref(), trailing.as_ref()]
            },
            Node::Card(card) => card.children.iter().collect(),
            Node::Dialog(dialog) => {
                dialog.body.iter().chain(dialog.footer.iter()).collect()
            },
            Node::CardHeader { .. }
            | Node::Heading { .. }
            | Node::Paragraph { .. }
            | Node::Button(_)
            | Node::Nav { .. }
            | Node::Badge { .. }
            | Node::Meter { .. }
            | Node::Prompt { .. } => Vec::new(),
        }
    }

    /// Visit this node and every descendant depth-first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Every action reachable from this subtree.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.walk(&mut |node| match node {
            Node::Button(button) => actions.push(button.action),
            Node::Nav { entries } => actions.extend(
                entries.iter().map(|entry| Action::SwitchView(entry.view)),
            ),
            Node::Dialog(dialog) => actions.push(dialog.dismiss),
            _ => {},
        });
        actions
    }

    /// Visible text of this subtree, in paint order.
    pub fn text_content(&self) -> Vec<String> {
        let mut texts = Vec::new();
        self.walk(&mut |node| match node {
            Node::CardHeader { title, .. } => texts.push(title.clone()),
            Node::Heading { text, .. } | Node::Paragraph { text } => {
                texts.push(text.clone())
            },
            Node::Button(button) => texts.extend(button.label.clone()),
            Node::Nav { entries } => {
                texts.extend(entries.iter().map(|entry| entry.label.clone()))
            },
            Node::Badge { status } => texts.push(status.slug().to_string()),
            Node::Meter { label, value } => {
                texts.push(label.clone());
                texts.push(format!("{}%", value.percent()));
            },
            Node::Dialog(dialog) => texts.push(dialog.title.clone()),
            _ => {},
        });
        texts
    }
}
