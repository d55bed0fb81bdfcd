use crate::markup::Node;
use crate::project::ProjectRecord;
use crate::render;
use crate::view::ViewId;

/// Read-only state handed to content renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx<'a> {
    pub view: ViewId,
    pub projects: &'a [ProjectRecord],
}

/// Content renderer for one view.
pub type RenderFn = fn(&RenderCtx<'_>) -> Node;

/// Fixed mapping from view identifier to content renderer.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    entries: [(ViewId, RenderFn); 5],
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            entries: [
                (ViewId::Dashboard, dashboard as RenderFn),
                (ViewId::Projects, projects as RenderFn),
                (ViewId::Goals, generic as RenderFn),
                (ViewId::Intelligence, generic as RenderFn),
                (ViewId::Settings, generic as RenderFn),
            ],
        }
    }

    /// Renderer for a raw view id, falling back to the dashboard renderer.
    pub fn resolve(&self, raw: &str) -> RenderFn {
        self.renderer(ViewId::parse(raw))
    }

    /// Renderer for an already parsed view.
    pub fn renderer(&self, view: ViewId) -> RenderFn {
        self.entries
            .iter()
            .find(|(id, _)| *id == view)
            .map_or(dashboard as RenderFn, |(_, render)| *render)
    }

    /// Known view ids in navigation order.
    pub fn known_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn is_known(&self, raw: &str) -> bool {
        self.known_ids().any(|id| id == raw)
    }
}

fn dashboard(_ctx: &RenderCtx<'_>) -> Node {
    render::render_dashboard()
}

fn projects(ctx: &RenderCtx<'_>) -> Node {
    render::render_projects(ctx.projects)
}

fn generic(ctx: &RenderCtx<'_>) -> Node {
    render::render_generic(ctx.view)
}
