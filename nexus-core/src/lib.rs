//! View-switching core of the Nexus dashboard.
//!
//! The crate is split into three layers that never touch a GUI toolkit:
//! - state ([`ProjectStore`], [`ViewController`]) owned by explicit values;
//! - pure rendering ([`render`], [`ViewRegistry`]) producing a [`Node`]
//!   view-model;
//! - backends that turn a [`Node`] into output ([`html`]; the desktop painter
//!   lives in the `nexus` binary).
//!
//! # Quick Example
//!
//! ```
//! use nexus_core::{ProjectStore, ViewController, ViewId};
//!
//! let mut controller =
//!     ViewController::new(ProjectStore::new(), ViewId::Dashboard);
//! controller.open_create_dialog();
//! let (record, _effects) = controller
//!     .submit_new_project("Build a rocket")
//!     .expect("description is not empty");
//!
//! assert_eq!(record.name, "Build a rocket");
//! assert_eq!(controller.active_view(), ViewId::Projects);
//! assert_eq!(controller.frame().header, "Projects");
//! ```

mod controller;
mod error;
pub mod html;
mod markup;
mod project;
mod registry;
pub mod render;
mod view;

pub use controller::{
    ELLIPSIS, Effect, Frame, MAX_PROJECT_NAME_CHARS, ViewController,
    project_name,
};
pub use error::CreateProjectError;
pub use markup::{
    Action, Button, ButtonVariant, Card, CardKind, Dialog, NavEntry, Node,
};
pub use project::{
    DEFAULT_TEAM_MEMBER, Progress, ProjectRecord, ProjectStatus, ProjectStore,
    sample_projects,
};
pub use registry::{RenderCtx, RenderFn, ViewRegistry};
pub use view::{Icon, NAV_ITEMS, NavItem, ViewId};
