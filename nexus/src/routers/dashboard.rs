use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::dashboard::{
    DashboardCtx, DashboardEffect, DashboardEvent, DashboardIntent,
};

/// Route a dashboard event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: DashboardEvent) -> Task<AppEvent> {
    match event {
        DashboardEvent::Intent(intent) => route_intent(app, intent),
        DashboardEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Materialize every icon referenced by the dashboard's current frame.
pub(crate) fn refresh_icons(app: &mut App) {
    let created = app.icons.materialize(app.widgets.dashboard.frame_nodes());
    if created > 0 {
        log::debug!(
            "materialized {created} icons ({} cached)",
            app.icons.len()
        );
    }
}

fn route_intent(app: &mut App, intent: DashboardIntent) -> Task<AppEvent> {
    app.widgets
        .dashboard
        .reduce(intent, &DashboardCtx)
        .map(AppEvent::Dashboard)
}

fn route_effect(app: &mut App, effect: DashboardEffect) -> Task<AppEvent> {
    match effect {
        DashboardEffect::RefreshIcons => {
            refresh_icons(app);
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use nexus_core::{Action, NAV_ITEMS, ViewId};

    use super::{refresh_icons, route};
    use crate::app::App;
    use crate::config::ConfigData;
    use crate::widgets::dashboard::{
        DashboardEffect, DashboardEvent, DashboardIntent,
    };

    #[test]
    fn given_fresh_app_when_icons_refreshed_then_frame_icons_are_cached() {
        let (mut app, _task) = App::new(ConfigData::default());

        refresh_icons(&mut app);

        // Sidebar icons plus the sparkles on the suggestions card.
        assert_eq!(app.icons.len(), NAV_ITEMS.len() + 1);
    }

    #[test]
    fn given_open_dialog_when_refresh_effect_routed_then_dialog_icons_join() {
        let (mut app, _task) = App::new(ConfigData::default());
        refresh_icons(&mut app);
        let before = app.icons.len();

        let _task = route(
            &mut app,
            DashboardEvent::Intent(DashboardIntent::Action(
                Action::SwitchView(ViewId::Projects),
            )),
        );
        let _task = route(
            &mut app,
            DashboardEvent::Intent(DashboardIntent::Action(
                Action::OpenCreateDialog,
            )),
        );
        let _task = route(
            &mut app,
            DashboardEvent::Effect(DashboardEffect::RefreshIcons),
        );

        assert!(app.icons.len() > before);
        assert_eq!(app.widgets.dashboard.active_view(), ViewId::Projects);
    }
}
