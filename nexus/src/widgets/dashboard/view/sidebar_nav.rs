use iced::widget::button::Status as ButtonStatus;
use iced::widget::{
    Column, button, column, container, mouse_area, row, svg, text,
};
use iced::{Border, Color, Element, Length, Theme, alignment};
use nexus_core::{Action, Icon, NavEntry, Node};

use crate::icons::IconCache;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::dashboard::event::DashboardIntent;
use crate::widgets::dashboard::model::{
    SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_EXPANDED_WIDTH,
};

const BRAND_TITLE: &str = "Nexus";
const BRAND_HEIGHT: f32 = 64.0;
const ENTRY_HEIGHT: f32 = 44.0;
const ENTRY_ICON_SIZE: f32 = 20.0;
const ENTRY_SPACING: f32 = 4.0;
const ENTRY_RADIUS: f32 = 8.0;
const ENTRY_PADDING_X: f32 = 14.0;
const LABEL_FONT_SIZE: f32 = 14.0;
const RAIL_PADDING: f32 = 12.0;

/// Props for the sidebar navigation rail.
#[derive(Clone, Copy)]
pub(crate) struct SidebarNavProps<'a> {
    pub(crate) nav: &'a Node,
    pub(crate) expanded: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) icons: &'a IconCache,
}

/// Render the navigation rail; labels show only while the rail is hovered.
pub(crate) fn view(
    props: SidebarNavProps<'_>,
) -> Element<'_, DashboardIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let entries: &[NavEntry] = match props.nav {
        Node::Nav { entries } => entries.as_slice(),
        _ => &[],
    };

    let brand = brand_row(props.expanded, &palette, props.icons);
    let menu = Column::with_children(entries.iter().map(|entry| {
        nav_button(entry, props.expanded, &palette, props.icons)
    }))
    .spacing(ENTRY_SPACING)
    .width(Length::Fill);

    let width = if props.expanded {
        SIDEBAR_EXPANDED_WIDTH
    } else {
        SIDEBAR_COLLAPSED_WIDTH
    };

    let rail = container(column![brand, menu].spacing(ENTRY_SPACING))
        .padding(RAIL_PADDING)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.sidebar.into()),
            ..Default::default()
        });

    mouse_area(rail)
        .on_enter(DashboardIntent::SidebarHovered(true))
        .on_exit(DashboardIntent::SidebarHovered(false))
        .into()
}

fn brand_row<'a>(
    expanded: bool,
    palette: &IcedColorPalette,
    icons: &IconCache,
) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
    let mut content = row![icon(icons, Icon::Sparkles, palette.accent)]
        .spacing(10)
        .align_y(alignment::Vertical::Center);
    if expanded {
        let color = palette.on_accent;
        content = content.push(text(BRAND_TITLE).size(18).style(move |_| {
            iced::widget::text::Style { color: Some(color) }
        }));
    }

    container(content)
        .padding([0.0, ENTRY_PADDING_X])
        .height(Length::Fixed(BRAND_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}

fn nav_button<'a>(
    entry: &'a NavEntry,
    expanded: bool,
    palette: &IcedColorPalette,
    icons: &IconCache,
) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
    let palette = *palette;
    let is_active = entry.active;
    let color = if is_active {
        palette.on_accent
    } else {
        palette.dim_foreground
    };

    let mut content = row![icon(icons, entry.icon, color)]
        .spacing(12)
        .align_y(alignment::Vertical::Center);
    if expanded {
        content = content.push(
            text(&entry.label)
                .size(LABEL_FONT_SIZE)
                .style(move |_| iced::widget::text::Style {
                    color: Some(color),
                }),
        );
    }

    button(
        container(content)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(DashboardIntent::Action(Action::SwitchView(entry.view)))
    .padding([0.0, ENTRY_PADDING_X])
    .width(Length::Fill)
    .height(Length::Fixed(ENTRY_HEIGHT))
    .style(move |_, status| entry_style(&palette, is_active, status))
    .into()
}

fn icon<'a>(
    icons: &IconCache,
    icon: Icon,
    color: Color,
) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
    svg::Svg::new(icons.handle(icon))
        .width(Length::Fixed(ENTRY_ICON_SIZE))
        .height(Length::Fixed(ENTRY_ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}

fn entry_style(
    palette: &IcedColorPalette,
    is_active: bool,
    status: ButtonStatus,
) -> iced::widget::button::Style {
    let background = if is_active {
        Some(palette.accent)
    } else if matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed)
    {
        Some(Color {
            a: 0.08,
            ..palette.on_accent
        })
    } else {
        None
    };

    iced::widget::button::Style {
        background: background.map(Into::into),
        text_color: palette.on_accent,
        border: Border {
            radius: ENTRY_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
