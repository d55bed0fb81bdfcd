use nexus_core::Action;

/// Intent events handled by the dashboard presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum DashboardIntent {
    /// An action carried by a painted node.
    Action(Action),
    PromptChanged(String),
    SidebarHovered(bool),
    DismissNotice,
}

/// Effect events produced by the dashboard reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DashboardEffect {
    /// Icons referenced by the current frame need materializing.
    RefreshIcons,
}

/// Dashboard event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum DashboardEvent {
    /// Intent event reduced by the dashboard widget.
    Intent(DashboardIntent),
    /// External effect orchestrated by app-level routing.
    Effect(DashboardEffect),
}
