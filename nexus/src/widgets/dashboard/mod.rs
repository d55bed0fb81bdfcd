mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{DashboardEffect, DashboardEvent, DashboardIntent};
use iced::Task;
use model::DashboardViewModel;
use nexus_core::{Node, ProjectStore, ViewController, ViewId};
pub(crate) use reducer::DashboardCtx;
use state::DashboardState;

/// Dashboard widget owning the view controller and its chrome state.
pub(crate) struct DashboardWidget {
    state: DashboardState,
}

impl DashboardWidget {
    /// Construct the dashboard over `store`, showing `initial` first.
    pub(crate) fn new(store: ProjectStore, initial: ViewId) -> Self {
        Self {
            state: DashboardState::new(ViewController::new(store, initial)),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: DashboardIntent,
        ctx: &DashboardCtx,
    ) -> Task<DashboardEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> DashboardViewModel<'_> {
        let frame = self.state.controller().frame();
        DashboardViewModel {
            header: &frame.header,
            sidebar: &frame.sidebar,
            content: &frame.content,
            dialog: frame.dialog.as_ref(),
            sidebar_expanded: self.state.is_sidebar_expanded(),
            notice: self.state.notice(),
        }
    }

    /// Every node painted by the current frame.
    pub(crate) fn frame_nodes(&self) -> Vec<&Node> {
        let frame = self.state.controller().frame();
        let mut nodes = vec![&frame.sidebar, &frame.content];
        nodes.extend(frame.dialog.as_ref());
        nodes
    }

    pub(crate) fn active_view(&self) -> ViewId {
        self.state.controller().active_view()
    }

    pub(crate) fn project_count(&self) -> usize {
        self.state.controller().projects().len()
    }

    /// Draft description typed into the create dialog.
    pub(crate) fn prompt(&self) -> &str {
        self.state.controller().prompt()
    }
}
