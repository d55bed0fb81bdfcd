use iced::Task;
use nexus_core::{CreateProjectError, Effect};

use super::event::{DashboardEffect, DashboardEvent, DashboardIntent};
use super::state::DashboardState;

/// Read-only context for dashboard reduction.
pub(crate) struct DashboardCtx;

/// Reduce a dashboard intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut DashboardState,
    intent: DashboardIntent,
    _ctx: &DashboardCtx,
) -> Task<DashboardEvent> {
    if state.notice().is_some() && is_blocked_by_notice(&intent) {
        log::debug!("ignoring {intent:?} while a notice is shown");
        return Task::none();
    }

    match intent {
        DashboardIntent::Action(action) => {
            match state.controller_mut().dispatch(action) {
                Ok(effects) => effect_task(&effects),
                Err(err) => {
                    reject(state, err);
                    Task::none()
                },
            }
        },
        DashboardIntent::PromptChanged(text) => {
            let effects = state.controller_mut().edit_prompt(text);
            effect_task(&effects)
        },
        DashboardIntent::SidebarHovered(expanded) => {
            state.set_sidebar_expanded(expanded);
            Task::none()
        },
        DashboardIntent::DismissNotice => {
            state.dismiss_notice();
            Task::none()
        },
    }
}

/// The notice is modal: only hover and its own dismissal get through.
fn is_blocked_by_notice(intent: &DashboardIntent) -> bool {
    matches!(
        intent,
        DashboardIntent::Action(_) | DashboardIntent::PromptChanged(_)
    )
}

fn reject(state: &mut DashboardState, err: CreateProjectError) {
    log::info!("project creation rejected: {err}");
    state.show_notice(err.to_string());
}

/// Repaints happen after every update, so only icon refreshes need routing.
fn effect_task(effects: &[Effect]) -> Task<DashboardEvent> {
    if effects.contains(&Effect::RefreshIcons) {
        Task::done(DashboardEvent::Effect(DashboardEffect::RefreshIcons))
    } else {
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use nexus_core::{
        Action, ProjectStore, ViewId, sample_projects,
    };

    use super::DashboardCtx;
    use crate::widgets::dashboard::{DashboardIntent, DashboardWidget};

    fn widget() -> DashboardWidget {
        DashboardWidget::new(
            ProjectStore::with_projects(sample_projects()),
            ViewId::Dashboard,
        )
    }

    #[test]
    fn given_switch_action_when_reduced_then_header_and_sidebar_follow() {
        let mut widget = widget();

        let _task = widget.reduce(
            DashboardIntent::Action(Action::SwitchView(ViewId::Intelligence)),
            &DashboardCtx,
        );

        let vm = widget.vm();
        assert_eq!(vm.header, "Intelligence");
        assert_eq!(widget.active_view(), ViewId::Intelligence);
    }

    #[test]
    fn given_hover_intents_when_reduced_then_sidebar_expands_and_collapses() {
        let mut widget = widget();

        let _task =
            widget.reduce(DashboardIntent::SidebarHovered(true), &DashboardCtx);
        assert!(widget.vm().sidebar_expanded);

        let _task = widget
            .reduce(DashboardIntent::SidebarHovered(false), &DashboardCtx);
        assert!(!widget.vm().sidebar_expanded);
    }

    #[test]
    fn given_blank_prompt_when_submitted_then_notice_is_shown_and_dialog_stays()
    {
        let mut widget = widget();
        let _task = widget.reduce(
            DashboardIntent::Action(Action::OpenCreateDialog),
            &DashboardCtx,
        );
        let _task = widget.reduce(
            DashboardIntent::PromptChanged(String::from("  ")),
            &DashboardCtx,
        );

        let _task = widget.reduce(
            DashboardIntent::Action(Action::SubmitNewProject),
            &DashboardCtx,
        );

        let vm = widget.vm();
        assert_eq!(vm.notice, Some("Please describe your project."));
        assert!(vm.dialog.is_some());
        assert_eq!(widget.project_count(), 2);

        let _task =
            widget.reduce(DashboardIntent::DismissNotice, &DashboardCtx);
        assert!(widget.vm().notice.is_none());
    }

    #[test]
    fn given_typed_prompt_when_submitted_then_projects_view_lists_new_card() {
        let mut widget = widget();
        let _task = widget.reduce(
            DashboardIntent::Action(Action::OpenCreateDialog),
            &DashboardCtx,
        );
        let _task = widget.reduce(
            DashboardIntent::PromptChanged(String::from("Build a rocket")),
            &DashboardCtx,
        );

        let _task = widget.reduce(
            DashboardIntent::Action(Action::SubmitNewProject),
            &DashboardCtx,
        );

        let vm = widget.vm();
        assert!(vm.dialog.is_none());
        assert!(vm.notice.is_none());
        assert_eq!(vm.header, "Projects");
        assert!(
            vm.content
                .text_content()
                .iter()
                .any(|text| text == "Build a rocket")
        );
        assert_eq!(widget.project_count(), 3);
    }

    #[test]
    fn given_open_dialog_when_close_action_reduced_then_dialog_is_hidden() {
        let mut widget = widget();
        let _task = widget.reduce(
            DashboardIntent::Action(Action::OpenCreateDialog),
            &DashboardCtx,
        );
        assert!(widget.vm().dialog.is_some());

        let _task = widget.reduce(
            DashboardIntent::Action(Action::CloseCreateDialog),
            &DashboardCtx,
        );

        assert!(widget.vm().dialog.is_none());
    }

    #[test]
    fn given_shown_notice_when_typing_or_submitting_then_nothing_changes() {
        let mut widget = widget();
        let _task = widget.reduce(
            DashboardIntent::Action(Action::OpenCreateDialog),
            &DashboardCtx,
        );
        let _task = widget.reduce(
            DashboardIntent::Action(Action::SubmitNewProject),
            &DashboardCtx,
        );
        assert!(widget.vm().notice.is_some());

        let _task = widget.reduce(
            DashboardIntent::PromptChanged(String::from("Build a rocket")),
            &DashboardCtx,
        );
        let _task = widget.reduce(
            DashboardIntent::Action(Action::SubmitNewProject),
            &DashboardCtx,
        );

        assert_eq!(widget.project_count(), 2);
        assert_eq!(widget.prompt(), "");
        assert!(widget.vm().dialog.is_some());

        let _task =
            widget.reduce(DashboardIntent::DismissNotice, &DashboardCtx);
        let _task = widget.reduce(
            DashboardIntent::PromptChanged(String::from("Build a rocket")),
            &DashboardCtx,
        );
        assert_eq!(widget.prompt(), "Build a rocket");
    }
}
