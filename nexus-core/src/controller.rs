use serde::Serialize;

use crate::error::CreateProjectError;
use crate::markup::{Action, Node};
use crate::project::{ProjectRecord, ProjectStore};
use crate::registry::{RenderCtx, ViewRegistry};
use crate::render;
use crate::view::{NAV_ITEMS, ViewId};

/// Longest project name derived from a description, in characters.
pub const MAX_PROJECT_NAME_CHARS: usize = 30;
/// Suffix appended to truncated project names.
pub const ELLIPSIS: &str = "...";

/// Requests from the controller to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The frame changed and should be painted again.
    Repaint,
    /// Icons in freshly painted markup need materializing.
    RefreshIcons,
}

/// Everything the host paints after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub header: String,
    pub sidebar: Node,
    pub content: Node,
    pub dialog: Option<Node>,
}

/// Owner of the active view, the project store and the create dialog.
#[derive(Debug, Clone)]
pub struct ViewController {
    active_view: ViewId,
    store: ProjectStore,
    registry: ViewRegistry,
    dialog_open: bool,
    prompt: String,
    frame: Frame,
}

impl ViewController {
    /// Build a controller showing `initial` over `store`.
    pub fn new(store: ProjectStore, initial: ViewId) -> Self {
        let registry = ViewRegistry::new();
        let frame = compose(&registry, initial, store.all());
        let controller = Self {
            active_view: initial,
            store,
            registry,
            dialog_open: false,
            prompt: String::new(),
            frame,
        };
        log::debug!("controller started on {initial}");
        controller
    }

    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        self.store.all()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Current draft of the project description.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Last rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Make `raw` the active view and re-render.
    ///
    /// Unknown ids behave exactly like `"dashboard"`. Calling this twice with
    /// the same id yields the same frame.
    pub fn switch_view(&mut self, raw: &str) -> Vec<Effect> {
        let view = ViewId::parse(raw);
        if view.as_str() != raw {
            log::debug!("unknown view {raw:?}, showing {view}");
        }
        self.switch_to(view)
    }

    /// Typed form of [`ViewController::switch_view`].
    pub fn switch_to(&mut self, view: ViewId) -> Vec<Effect> {
        log::debug!("switching view {} -> {view}", self.active_view);
        self.active_view = view;

        let ctx = RenderCtx {
            view,
            projects: self.store.all(),
        };
        self.frame.header = render::title_case(view.as_str());
        self.frame.content = self.registry.renderer(view)(&ctx);
        self.frame.sidebar = render::render_sidebar(&NAV_ITEMS, view);

        vec![Effect::Repaint, Effect::RefreshIcons]
    }

    pub fn open_create_dialog(&mut self) -> Vec<Effect> {
        self.dialog_open = true;
        self.sync_dialog();
        vec![Effect::Repaint, Effect::RefreshIcons]
    }

    pub fn close_create_dialog(&mut self) -> Vec<Effect> {
        self.dialog_open = false;
        self.sync_dialog();
        vec![Effect::Repaint]
    }

    /// Replace the draft description typed into the dialog.
    pub fn edit_prompt(&mut self, text: impl Into<String>) -> Vec<Effect> {
        self.prompt = text.into();
        self.sync_dialog();
        vec![Effect::Repaint]
    }

    /// Create a project from `raw` and return to the projects view.
    ///
    /// A description that trims to nothing is rejected and leaves every piece
    /// of state, including the open dialog and the draft, untouched.
    pub fn submit_new_project(
        &mut self,
        raw: &str,
    ) -> Result<(ProjectRecord, Vec<Effect>), CreateProjectError> {
        let description = raw.trim();
        if description.is_empty() {
            log::warn!("new project rejected: empty description");
            return Err(CreateProjectError::EmptyDescription);
        }

        let record = self.store.add(project_name(description))?;
        self.prompt.clear();
        self.dialog_open = false;
        self.sync_dialog();

        let effects = self.switch_to(ViewId::Projects);
        Ok((record, effects))
    }

    /// Submit the controller's own draft.
    pub fn submit_prompt(
        &mut self,
    ) -> Result<(ProjectRecord, Vec<Effect>), CreateProjectError> {
        let draft = self.prompt.clone();
        self.submit_new_project(&draft)
    }

    /// Route an action carried by a rendered node.
    pub fn dispatch(
        &mut self,
        action: Action,
    ) -> Result<Vec<Effect>, CreateProjectError> {
        match action {
            Action::SwitchView(view) => Ok(self.switch_to(view)),
            Action::OpenCreateDialog => Ok(self.open_create_dialog()),
            Action::CloseCreateDialog => Ok(self.close_create_dialog()),
            Action::SubmitNewProject => {
                self.submit_prompt().map(|(_, effects)| effects)
            },
        }
    }

    fn sync_dialog(&mut self) {
        self.frame.dialog = self
            .dialog_open
            .then(|| render::render_create_dialog(&self.prompt));
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(ProjectStore::new(), ViewId::default())
    }
}

/// Derive a project name from a trimmed description.
///
/// Names longer than [`MAX_PROJECT_NAME_CHARS`] characters are cut and
/// suffixed with [`ELLIPSIS`].
pub fn project_name(description: &str) -> String {
    let mut chars = description.char_indices();
    match chars.nth(MAX_PROJECT_NAME_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &description[..cut]),
        None => description.to_string(),
    }
}

fn compose(
    registry: &ViewRegistry,
    view: ViewId,
    projects: &[ProjectRecord],
) -> Frame {
    let ctx = RenderCtx { view, projects };
    Frame {
        header: render::title_case(view.as_str()),
        sidebar: render::render_sidebar(&NAV_ITEMS, view),
        content: registry.renderer(view)(&ctx),
        dialog: None,
    }
}
