use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod dashboard;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => {
            dashboard::refresh_icons(app);
            Task::none()
        },
        // Dashboard widget
        AppEvent::Dashboard(event) => dashboard::route(app, event),
    }
}
