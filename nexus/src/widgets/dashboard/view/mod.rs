pub(crate) mod markup;
pub(crate) mod notice;
pub(crate) mod sidebar_nav;

use iced::widget::{
    Stack, column, container, mouse_area, opaque, row, text,
};
use iced::{Element, Length, Theme, alignment};
use nexus_core::{Action, Node};

use super::event::DashboardIntent;
use super::model::DashboardViewModel;
use crate::icons::IconCache;
use crate::theme::ThemeProps;

const HEADER_FONT_SIZE: f32 = 28.0;
const CONTENT_PADDING: f32 = 32.0;
const CONTENT_SPACING: f32 = 24.0;

/// Props for the dashboard view aggregator.
#[derive(Clone, Copy)]
pub(crate) struct DashboardViewProps<'a> {
    pub(crate) vm: DashboardViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) icons: &'a IconCache,
}

/// Compose sidebar, header, content and the modal layers above them.
pub(crate) fn view(
    props: DashboardViewProps<'_>,
) -> Element<'_, DashboardIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();

    let sidebar = sidebar_nav::view(sidebar_nav::SidebarNavProps {
        nav: props.vm.sidebar,
        expanded: props.vm.sidebar_expanded,
        theme: props.theme,
        icons: props.icons,
    });

    let content = markup::view(markup::MarkupProps {
        node: props.vm.content,
        theme: props.theme,
        icons: props.icons,
    });
    let main = container(
        column![text(props.vm.header).size(HEADER_FONT_SIZE), content]
            .spacing(CONTENT_SPACING),
    )
    .padding(CONTENT_PADDING)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        ..Default::default()
    });

    let mut layers: Vec<Element<'_, DashboardIntent, Theme, iced::Renderer>> =
        vec![row![sidebar, main].into()];

    if let Some(dialog) = props.vm.dialog {
        let dismiss = match dialog {
            Node::Dialog(model) => model.dismiss,
            _ => Action::CloseCreateDialog,
        };
        let dialog = opaque(markup::view(markup::MarkupProps {
            node: dialog,
            theme: props.theme,
            icons: props.icons,
        }));
        let backdrop = mouse_area(centered(dialog, props.theme))
            .on_press(DashboardIntent::Action(dismiss));
        layers.push(opaque(backdrop));
    }

    if let Some(message) = props.vm.notice {
        let notice = notice::view(notice::NoticeProps {
            message,
            theme: props.theme,
        });
        layers.push(opaque(centered(notice, props.theme)));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn centered<'a>(
    content: impl Into<Element<'a, DashboardIntent, Theme, iced::Renderer>>,
    theme: ThemeProps<'a>,
) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
    let overlay = theme.theme.iced_palette().overlay;
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(overlay.into()),
            ..Default::default()
        })
        .into()
}
