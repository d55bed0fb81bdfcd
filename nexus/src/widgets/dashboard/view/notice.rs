use iced::widget::{Space, button, column, container, row, text};
use iced::{Border, Element, Length, Theme, alignment};

use crate::theme::ThemeProps;
use crate::widgets::dashboard::event::DashboardIntent;

const NOTICE_WIDTH: f32 = 360.0;
const NOTICE_PADDING: f32 = 24.0;
const NOTICE_RADIUS: f32 = 12.0;
const DISMISS_LABEL: &str = "OK";

/// Props for the blocking notice box.
#[derive(Clone, Copy)]
pub(crate) struct NoticeProps<'a> {
    pub(crate) message: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view(
    props: NoticeProps<'_>,
) -> Element<'_, DashboardIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();

    let dismiss = button(text(DISMISS_LABEL).size(14))
        .on_press(DashboardIntent::DismissNotice)
        .padding([8.0, 18.0])
        .style(move |_, _| iced::widget::button::Style {
            background: Some(palette.accent.into()),
            text_color: palette.on_accent,
            border: Border {
                radius: 8.0_f32.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let content = column![
        text(props.message).size(15),
        row![Space::new().width(Length::Fill), dismiss]
            .align_y(alignment::Vertical::Center),
    ]
    .spacing(20);

    container(content)
        .padding(NOTICE_PADDING)
        .width(Length::Fixed(NOTICE_WIDTH))
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            border: Border {
                width: 1.0,
                color: palette.border,
                radius: NOTICE_RADIUS.into(),
            },
            ..Default::default()
        })
        .into()
}
