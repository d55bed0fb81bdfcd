use iced::{Element, Theme};

use super::{App, AppEvent};
use crate::theme::ThemeProps;
use crate::widgets::dashboard::view::{
    self as dashboard_view, DashboardViewProps,
};
use crate::widgets::dashboard::{DashboardEvent, DashboardIntent};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props: ThemeProps<'_> = ThemeProps::new(&app.theme);

    dashboard_view::view(DashboardViewProps {
        vm: app.widgets.dashboard.vm(),
        theme: theme_props,
        icons: &app.icons,
    })
    .map(|intent: DashboardIntent| {
        AppEvent::Dashboard(DashboardEvent::Intent(intent))
    })
}
