//! String markup backend for [`Node`] trees.
//!
//! Output uses the dashboard stylesheet's class names and `data-*` hooks: nav
//! buttons carry `data-view`, icons are `<i data-lucide="…">` placeholders
//! for the host's icon library, and project cards carry
//! `data-project-id`. All text and attribute values are HTML-escaped.

use std::fmt::Write;

use v_htmlescape::escape;

use crate::controller::Frame;
use crate::markup::{Action, Button, ButtonVariant, Card, CardKind, Node};
use crate::view::Icon;

/// Render a node tree to an HTML fragment.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Render each region of a frame, keyed by the element id it belongs in.
pub fn frame_regions(frame: &Frame) -> Vec<(&'static str, String)> {
    let mut regions = vec![
        ("header-title", escape(&frame.header).to_string()),
        ("sidebar-nav", to_html(&frame.sidebar)),
        ("view-container", to_html(&frame.content)),
    ];
    if let Some(dialog) = &frame.dialog {
        regions.push(("new-project-modal", to_html(dialog)));
    }
    regions
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Stack { children } => {
            out.push_str("<div class=\"stack\">");
            write_children(out, children);
            out.push_str("</div>");
        },
        Node::Toolbar { leading, trailing } => {
            out.push_str("<div class=\"toolbar\">");
            write_node(out, leading);
            write_node(out, trailing);
            out.push_str("</div>");
        },
        Node::Grid { children } => {
            out.push_str("<div class=\"projects-grid\">");
            write_children(out, children);
            out.push_str("</div>");
        },
        Node::Card(card) => write_card(out, card),
        Node::CardHeader { icon, title } => {
            out.push_str("<div class=\"card-header\">");
            write_icon(out, *icon);
            out.push_str(&escape(title).to_string());
            out.push_str("</div>");
        },
        Node::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            let _ = write!(out, "<h{level}>{}</h{level}>", escape(text));
        },
        Node::Paragraph { text } => {
            let _ = write!(out, "<p>{}</p>", escape(text));
        },
        Node::Button(button) => write_button(out, button),
        Node::Nav { entries } => {
            for entry in entries {
                let active = if entry.active { " active" } else { "" };
                let _ = write!(
                    out,
                    "<button class=\"nav-item{active}\" data-view=\"{}\">",
                    entry.view
                );
                write_icon(out, entry.icon);
                let _ = write!(
                    out,
                    "<span class=\"nav-item-label\">{}</span></button>",
                    escape(&entry.label)
                );
            }
        },
        Node::Badge { status } => {
            let _ = write!(
                out,
                "<span class=\"status-badge {status}\">{status}</span>"
            );
        },
        Node::Meter { label, value } => {
            let percent = value.percent();
            let _ = write!(
                out,
                "<div class=\"project-card-details\">\
                 <div class=\"progress-label\">\
                 <span>{}</span><span>{percent}%</span></div>\
                 <div class=\"progress-bar\">\
                 <div class=\"progress-bar-inner\" \
                 style=\"width: {percent}%;\"></div>\
                 </div></div>",
                escape(label)
            );
        },
        Node::Prompt { value, placeholder } => {
            let _ = write!(
                out,
                "<textarea id=\"project-prompt\" \
                 placeholder=\"{}\">{}</textarea>",
                escape(placeholder),
                escape(value)
            );
        },
        Node::Dialog(dialog) => {
            let _ = write!(
                out,
                "<div class=\"modal-content\" data-dismiss=\"{}\">\
                 <div class=\"modal-header\"><h3>{}</h3>",
                action_name(dialog.dismiss),
                escape(&dialog.title)
            );
            write_button(
                out,
                &Button {
                    label: None,
                    icon: Some(Icon::Close),
                    variant: ButtonVariant::Ghost,
                    action: dialog.dismiss,
                },
            );
            out.push_str("</div><div class=\"modal-body\">");
            write_children(out, &dialog.body);
            out.push_str("</div><div class=\"modal-footer\">");
            write_children(out, &dialog.footer);
            out.push_str("</div></div>");
        },
    }
}

fn write_children(out: &mut String, children: &[Node]) {
    for child in children {
        write_node(out, child);
    }
}

fn write_card(out: &mut String, card: &Card) {
    match (card.kind, card.key) {
        (CardKind::Project, Some(id)) => {
            let _ = write!(
                out,
                "<div class=\"card project-card\" data-project-id=\"{id}\">"
            );
        },
        (CardKind::Project, None) => {
            out.push_str("<div class=\"card project-card\">");
        },
        (CardKind::Plain, _) => out.push_str("<div class=\"card\">"),
    }
    write_children(out, &card.children);
    out.push_str("</div>");
}

fn write_button(out: &mut String, button: &Button) {
    let variant = match button.variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Secondary => "btn btn-secondary",
        ButtonVariant::Ghost => "btn btn-ghost",
    };
    let _ = write!(
        out,
        "<button class=\"{variant}\" data-action=\"{}\"",
        action_name(button.action)
    );
    if let Action::SwitchView(view) = button.action {
        let _ = write!(out, " data-view=\"{view}\"");
    }
    out.push('>');
    if let Some(icon) = button.icon {
        write_icon(out, icon);
    }
    if let Some(label) = &button.label {
        if button.icon.is_some() {
            out.push(' ');
        }
        out.push_str(&escape(label).to_string());
    }
    out.push_str("</button>");
}

fn write_icon(out: &mut String, icon: Icon) {
    let _ = write!(out, "<i data-lucide=\"{}\"></i>", icon.name());
}

fn action_name(action: Action) -> &'static str {
    match action {
        Action::SwitchView(_) => "switch-view",
        Action::OpenCreateDialog => "open-create-dialog",
        Action::CloseCreateDialog => "close-create-dialog",
        Action::SubmitNewProject => "submit-new-project",
    }
}

#[cfg(test)]
mod tests {
    use super::{frame_regions, to_html};
    use crate::controller::ViewController;
    use crate::markup::Node;
    use crate::project::{ProjectStore, sample_projects};
    use crate::render::{render_projects, render_sidebar};
    use crate::view::{NAV_ITEMS, ViewId};

    #[test]
    fn given_sidebar_when_rendering_html_then_active_entry_has_active_class() {
        let html = to_html(&render_sidebar(&NAV_ITEMS, ViewId::Projects));

        assert!(html.contains(
            "<button class=\"nav-item active\" data-view=\"projects\">"
        ));
        assert!(
            html.contains("<button class=\"nav-item\" data-view=\"goals\">")
        );
        assert_eq!(html.matches("nav-item active").count(), 1);
        assert!(html.contains("<i data-lucide=\"brain\"></i>"));
    }

    #[test]
    fn given_projects_when_rendering_html_then_cards_show_badge_and_bar() {
        let html = to_html(&render_projects(&sample_projects()));

        assert!(html.contains("data-project-id=\"2\""));
        assert!(html.contains(
            "<span class=\"status-badge at-risk\">at-risk</span>"
        ));
        assert!(html.contains("style=\"width: 65%;\""));
        assert!(html.contains("data-action=\"open-create-dialog\""));
    }

    #[test]
    fn given_markup_characters_when_rendering_html_then_text_is_escaped() {
        let html = to_html(&Node::paragraph("<script>alert(1)</script>"));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn given_open_dialog_when_rendering_frame_then_modal_region_is_present() {
        let mut controller = ViewController::new(
            ProjectStore::with_projects(sample_projects()),
            ViewId::Projects,
        );
        assert_eq!(frame_regions(controller.frame()).len(), 3);

        let _ = controller.open_create_dialog();
        let regions = frame_regions(controller.frame());

        let modal = regions
            .iter()
            .find(|(id, _)| *id == "new-project-modal")
            .map(|(_, html)| html.as_str());
        assert!(
            modal.is_some_and(|html| html.contains("id=\"project-prompt\""))
        );
    }
}
