#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Task, Theme};

use crate::config::ConfigData;
use crate::icons::IconCache;
use crate::theme::AppTheme;
use crate::widgets::Widgets;
use crate::widgets::dashboard::{DashboardEvent, DashboardWidget};

const WINDOW_TITLE: &str = "Nexus";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Dashboard widget
    Dashboard(DashboardEvent),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) icons: IconCache,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(config: ConfigData) -> (Self, Task<AppEvent>) {
        let widgets = Widgets {
            dashboard: DashboardWidget::new(
                config.project_store(),
                config.initial_view(),
            ),
        };

        log::info!(
            "dashboard ready on {} with {} projects",
            widgets.dashboard.active_view(),
            widgets.dashboard.project_count()
        );

        let app = App {
            theme: AppTheme::new(config.theme()),
            icons: IconCache::default(),
            widgets,
        };

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Return the window title for the active view.
    pub(crate) fn title(&self) -> String {
        let vm = self.widgets.dashboard.vm();
        format!("{WINDOW_TITLE} - {}", vm.header)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
