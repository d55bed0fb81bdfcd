//! Pure functions mapping dashboard state to [`Node`] trees.

use crate::markup::{
    Action, ButtonVariant, Card, CardKind, Dialog, NavEntry, Node,
};
use crate::project::ProjectRecord;
use crate::view::{Icon, NavItem, ViewId};

pub const PROJECTS_HEADING: &str = "All Projects";
pub const NEW_PROJECT_LABEL: &str = "New Project";
pub const DIALOG_TITLE: &str = "Create New Project";
pub const PROMPT_PLACEHOLDER: &str =
    "Describe your project, e.g. \"Launch the Q3 marketing site\"";

/// Upper-case the first character and leave the rest untouched.
///
/// `"intelligence"` becomes `"Intelligence"` and `"aBC"` becomes `"ABC"`;
/// nothing after the first character is lowered.
pub fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sidebar navigation with the entry for `active` selected.
pub fn render_sidebar(items: &[NavItem], active: ViewId) -> Node {
    Node::Nav {
        entries: items
            .iter()
            .map(|item| NavEntry {
                view: item.view,
                label: item.label.to_string(),
                icon: item.icon,
                active: item.view == active,
            })
            .collect(),
    }
}

pub fn render_dashboard() -> Node {
    Node::Card(Card {
        kind: CardKind::Plain,
        key: None,
        children: vec![
            Node::CardHeader {
                icon: Icon::Sparkles,
                title: String::from("Nexus Suggestions"),
            },
            Node::paragraph("Suggestion content goes here..."),
        ],
    })
}

/// Project grid with a toolbar that opens the creation dialog.
pub fn render_projects(projects: &[ProjectRecord]) -> Node {
    let toolbar = Node::Toolbar {
        leading: Box::new(Node::heading(2, PROJECTS_HEADING)),
        trailing: Box::new(Node::button(
            Some(NEW_PROJECT_LABEL),
            Some(Icon::Plus),
            ButtonVariant::Primary,
            Action::OpenCreateDialog,
        )),
    };

    let grid = Node::Grid {
        children: projects.iter().map(project_card).collect(),
    };

    Node::stack(vec![toolbar, grid])
}

/// Placeholder card for views without dedicated content.
pub fn render_generic(view: ViewId) -> Node {
    let id = view.as_str();
    Node::Card(Card {
        kind: CardKind::Plain,
        key: None,
        children: vec![
            Node::heading(2, title_case(id)),
            Node::paragraph(format!("Content for {id} goes here.")),
        ],
    })
}

/// Modal form collecting the description of a new project.
pub fn render_create_dialog(prompt: &str) -> Node {
    Node::Dialog(Dialog {
        title: String::from(DIALOG_TITLE),
        body: vec![Node::Prompt {
            value: prompt.to_string(),
            placeholder: String::from(PROMPT_PLACEHOLDER),
        }],
        footer: vec![
            Node::button(
                Some("Cancel"),
                None,
                ButtonVariant::Secondary,
                Action::CloseCreateDialog,
            ),
            Node::button(
                Some("Generate Project"),
                Some(Icon::Sparkles),
                ButtonVariant::Primary,
                Action::SubmitNewProject,
            ),
        ],
        dismiss: Action::CloseCreateDialog,
    })
}

fn project_card(project: &ProjectRecord) -> Node {
    let header = Node::Toolbar {
        leading: Box::new(Node::heading(3, project.name.clone())),
        trailing: Box::new(Node::Badge {
            status: project.status,
        }),
    };

    Node::Card(Card {
        kind: CardKind::Project,
        key: Some(project.id),
        children: vec![
            header,
            Node::Meter {
                label: String::from("Progress"),
                value: project.progress,
            },
        ],
    })
}
