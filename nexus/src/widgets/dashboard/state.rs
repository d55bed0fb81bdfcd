use nexus_core::ViewController;

/// Internal runtime state for the dashboard widget.
#[derive(Debug)]
pub(super) struct DashboardState {
    controller: ViewController,
    sidebar_expanded: bool,
    notice: Option<String>,
}

impl DashboardState {
    pub(super) fn new(controller: ViewController) -> Self {
        Self {
            controller,
            sidebar_expanded: false,
            notice: None,
        }
    }

    pub(super) fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub(super) fn controller_mut(&mut self) -> &mut ViewController {
        &mut self.controller
    }

    pub(super) fn is_sidebar_expanded(&self) -> bool {
        self.sidebar_expanded
    }

    pub(super) fn set_sidebar_expanded(&mut self, expanded: bool) {
        self.sidebar_expanded = expanded;
    }

    pub(super) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub(super) fn show_notice(&mut self, message: String) {
        self.notice = Some(message);
    }

    pub(super) fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
