use std::collections::HashMap;

use iced::widget::svg;
use nexus_core::{Icon, Node};

pub(crate) const HOME: &[u8] = include_bytes!("../assets/svg/home.svg");
pub(crate) const FOLDER: &[u8] = include_bytes!("../assets/svg/folder.svg");
pub(crate) const TARGET: &[u8] = include_bytes!("../assets/svg/target.svg");
pub(crate) const BRAIN: &[u8] = include_bytes!("../assets/svg/brain.svg");
pub(crate) const SETTINGS: &[u8] =
    include_bytes!("../assets/svg/settings.svg");
pub(crate) const SPARKLES: &[u8] =
    include_bytes!("../assets/svg/sparkles.svg");
pub(crate) const PLUS: &[u8] = include_bytes!("../assets/svg/plus.svg");
pub(crate) const CLOSE: &[u8] = include_bytes!("../assets/svg/x.svg");

/// Embedded SVG source for an icon.
pub(crate) fn bytes(icon: Icon) -> &'static [u8] {
    match icon {
        Icon::Home => HOME,
        Icon::Folder => FOLDER,
        Icon::Target => TARGET,
        Icon::Brain => BRAIN,
        Icon::Settings => SETTINGS,
        Icon::Sparkles => SPARKLES,
        Icon::Plus => PLUS,
        Icon::Close => CLOSE,
    }
}

/// Materialized SVG handles, keyed by icon.
///
/// A handle keeps its rasterization cache across frames, so icons are
/// materialized once and reused until the next refresh.
#[derive(Debug, Default)]
pub(crate) struct IconCache {
    handles: HashMap<Icon, svg::Handle>,
}

impl IconCache {
    /// Materialize every icon referenced by `nodes` that is not cached yet.
    ///
    /// Returns the number of newly created handles.
    pub(crate) fn materialize<'a>(
        &mut self,
        nodes: impl IntoIterator<Item = &'a Node>,
    ) -> usize {
        let mut created = 0;
        for node in nodes {
            node.walk(&mut |node| {
                for icon in icons_of(node) {
                    if !self.handles.contains_key(&icon) {
                        self.handles.insert(
                            icon,
                            svg::Handle::from_memory(bytes(icon)),
                        );
                        created += 1;
                    }
                }
            });
        }
        created
    }

    /// Handle for `icon`, built on the fly when it was never materialized.
    pub(crate) fn handle(&self, icon: Icon) -> svg::Handle {
        self.handles
            .get(&icon)
            .cloned()
            .unwrap_or_else(|| svg::Handle::from_memory(bytes(icon)))
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }
}

fn icons_of(node: &Node) -> Vec<Icon> {
    match node {
        Node::CardHeader { icon, .. } => vec![*icon],
        Node::Button(button) => button.icon.into_iter().collect(),
        Node::Nav { entries } => {
            entries.iter().map(|entry| entry.icon).collect()
        },
        Node::Dialog(_) => vec![Icon::Close],
        _ => Vec::new(),
    }
}
