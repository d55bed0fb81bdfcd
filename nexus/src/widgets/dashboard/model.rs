use nexus_core::Node;

pub(crate) const SIDEBAR_COLLAPSED_WIDTH: f32 = 72.0;
pub(crate) const SIDEBAR_EXPANDED_WIDTH: f32 = 220.0;

/// Read-only snapshot of the dashboard for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DashboardViewModel<'a> {
    pub(crate) header: &'a str,
    pub(crate) sidebar: &'a Node,
    pub(crate) content: &'a Node,
    pub(crate) dialog: Option<&'a Node>,
    pub(crate) sidebar_expanded: bool,
    /// Blocking message shown above everything else.
    pub(crate) notice: Option<&'a str>,
}
