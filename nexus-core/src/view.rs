use std::fmt;

use serde::Serialize;

/// Screens that can occupy the main content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Dashboard,
    Projects,
    Goals,
    Intelligence,
    Settings,
}

impl ViewId {
    /// Every view in navigation order.
    pub const ALL: [ViewId; 5] = [
        ViewId::Dashboard,
        ViewId::Projects,
        ViewId::Goals,
        ViewId::Intelligence,
        ViewId::Settings,
    ];

    /// Parse a raw view identifier.
    ///
    /// Matching is exact. Anything that is not one of the five known ids
    /// resolves to [`ViewId::Dashboard`]; unknown ids are never an error.
    pub fn parse(raw: &str) -> Self {
        Self::recognize(raw).unwrap_or(ViewId::Dashboard)
    }

    /// Parse a raw view identifier without the dashboard fallback.
    pub fn recognize(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.as_str() == raw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Projects => "projects",
            ViewId::Goals => "goals",
            ViewId::Intelligence => "intelligence",
            ViewId::Settings => "settings",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon identifiers understood by every rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Folder,
    Target,
    Brain,
    Settings,
    Sparkles,
    Plus,
    Close,
}

impl Icon {
    /// Icon-library name of the glyph.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Folder => "folder",
            Icon::Target => "target",
            Icon::Brain => "brain",
            Icon::Settings => "settings",
            Icon::Sparkles => "sparkles",
            Icon::Plus => "plus",
            Icon::Close => "x",
        }
    }
}

/// Static sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub view: ViewId,
    pub label: &'static str,
    pub icon: Icon,
}

/// Sidebar navigation, one entry per view.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        view: ViewId::Dashboard,
        label: "Dashboard",
        icon: Icon::Home,
    },
    NavItem {
        view: ViewId::Projects,
        label: "Projects",
        icon: Icon::Folder,
    },
    NavItem {
        view: ViewId::Goals,
        label: "Goals",
        icon: Icon::Target,
    },
    NavItem {
        view: ViewId::Intelligence,
        label: "Intelligence",
        icon: Icon::Brain,
    },
    NavItem {
        view: ViewId::Settings,
        label: "Settings",
        icon: Icon::Settings,
    },
];
