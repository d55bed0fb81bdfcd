use iced::widget::button::Status as ButtonStatus;
use iced::widget::{
    Column, Row, Space, button, column, container, row, svg, text, text_input,
};
use iced::{Border, Color, Element, Length, Theme, alignment};
use nexus_core::{
    Action, Button, ButtonVariant, Card, CardKind, Dialog, Icon, Node,
    Progress, ProjectStatus,
};

use crate::icons::IconCache;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::dashboard::event::DashboardIntent;

const STACK_SPACING: f32 = 24.0;
const GRID_SPACING: f32 = 20.0;
const GRID_CARD_WIDTH: f32 = 300.0;
const CARD_PADDING: f32 = 20.0;
const PLAIN_CARD_PADDING: f32 = 24.0;
const CARD_SPACING: f32 = 12.0;
const CARD_RADIUS: f32 = 12.0;
const ICON_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 14.0;
const SMALL_FONT_SIZE: f32 = 12.0;
const BUTTON_PADDING: [f32; 2] = [8.0, 14.0];
const BUTTON_RADIUS: f32 = 8.0;
const BADGE_FONT_SIZE: f32 = 11.0;
const BADGE_PADDING: [f32; 2] = [2.0, 8.0];
const BADGE_RADIUS: f32 = 10.0;
const METER_HEIGHT: f32 = 6.0;
const PROMPT_PADDING: f32 = 12.0;
const DIALOG_WIDTH: f32 = 480.0;
const DIALOG_PADDING: f32 = 24.0;

/// Props for painting one node tree.
#[derive(Clone, Copy)]
pub(crate) struct MarkupProps<'a> {
    pub(crate) node: &'a Node,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) icons: &'a IconCache,
}

/// Paint a node tree with the dashboard's desktop styling.
pub(crate) fn view(
    props: MarkupProps<'_>,
) -> Element<'_, DashboardIntent, Theme, iced::Renderer> {
    let painter = Painter {
        palette: *props.theme.theme.iced_palette(),
        icons: props.icons,
    };
    painter.node(props.node)
}

#[derive(Clone, Copy)]
struct Painter<'a> {
    palette: IcedColorPalette,
    icons: &'a IconCache,
}

impl<'a> Painter<'a> {
    fn node(
        self,
        node: &'a Node,
    ) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
        match node {
            Node::Stack { children } => Column::with_children(
                children.iter().map(|child| self.node(child)),
            )
            .spacing(STACK_SPACING)
            .width(Length::Fill)
            .into(),
            Node::Toolbar { leading, trailing } => row![
                self.node(leading),
                Space::new().width(Length::Fill),
                self.node(trailing),
            ]
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill)
            .into(),
            Node::Grid { children } => Row::with_children(children.iter().map(
                |child| {
                    container(self.node(child))
                        .width(Length::Fixed(GRID_CARD_WIDTH))
                        .into()
                },
            ))
            .spacing(GRID_SPACING)
            .wrap()
            .vertical_spacing(GRID_SPACING)
            .into(),
            Node::Card(card) => self.card(card),
            Node::CardHeader { icon, title } => row![
                self.icon(*icon, self.palette.accent),
                text(title).size(16),
            ]
            .spacing(8)
            .align_y(alignment::Vertical::Center)
            .into(),
            Node::Heading { level, text: value } => {
                text(value).size(heading_size(*level)).into()
            },
            Node::Paragraph { text: value } => {
                let color = self.palette.dim_foreground;
                text(value)
                    .size(BODY_FONT_SIZE)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(color),
                    })
                    .into()
            },
            Node::Button(model) => self.button(model),
            // Navigation belongs to the sidebar rail.
            Node::Nav { .. } => Space::new().into(),
            Node::Badge { status } => self.badge(*status),
            Node::Meter { label, value } => self.meter(label, *value),
            Node::Prompt { value, placeholder } => {
                let palette = self.palette;
                text_input(placeholder, value)
                    .on_input(DashboardIntent::PromptChanged)
                    .on_submit(DashboardIntent::Action(
                        Action::SubmitNewProject,
                    ))
                    .padding(PROMPT_PADDING)
                    .size(BODY_FONT_SIZE)
                    .width(Length::Fill)
                    .style(move |base: &Theme, status| {
                        let mut style =
                            iced::widget::text_input::default(base, status);
                        style.background = palette.background.into();
                        style.selection = palette.accent;
                        style
                    })
                    .into()
            },
            Node::Dialog(dialog) => self.dialog(dialog),
        }
    }

    fn card(
        self,
        card: &'a Card,
    ) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
        let palette = self.palette;
        let padding = match card.kind {
            CardKind::Plain => PLAIN_CARD_PADDING,
            CardKind::Project => CARD_PADDING,
        };
        let body = Column::with_children(
            card.children.iter().map(|child| self.node(child)),
        )
        .spacing(CARD_SPACING);

        container(body)
            .padding(padding)
            .width(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(palette.surface.into()),
                border: Border {
                    width: 1.0,
                    color: palette.border,
                    radius: CARD_RADIUS.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn button(
        self,
        model: &'a Button,
    ) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
        let palette = self.palette;
        let variant = model.variant;
        let content_color = match variant {
            ButtonVariant::Primary => palette.on_accent,
            ButtonVariant::Secondary | ButtonVariant::Ghost => {
                palette.foreground
            },
        };

        let mut content = Row::new()
            .spacing(6)
            .align_y(alignment::Vertical::Center);
        if let Some(icon) = model.icon {
            content = content.push(self.icon(icon, content_color));
        }
        if let Some(label) = &model.label {
            content = content.push(text(label).size(BODY_FONT_SIZE));
        }

        let padding = if model.label.is_some() {
            BUTTON_PADDING
        } else {
            [6.0, 6.0]
        };

        button(content)
            .on_press(DashboardIntent::Action(model.action))
            .padding(padding)
            .style(move |_, status| button_style(&palette, variant, status))
            .into()
    }

    fn badge(
        self,
        status: ProjectStatus,
    ) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
        let color = self.palette.status(status);
        let tint = Color { a: 0.15, ..color };

        container(text(status.slug()).size(BADGE_FONT_SIZE))
            .padding(BADGE_PADDING)
            .style(move |_| iced::widget::container::Style {
                background: Some(tint.into()),
                text_color: Some(color),
                border: Border {
                    radius: BADGE_RADIUS.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    }

    fn meter(
        self,
        label: &'a str,
        value: Progress,
    ) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
        let palette = self.palette;
        let percent = value.percent();
        let caption = row![
            text(label).size(SMALL_FONT_SIZE),
            Space::new().width(Length::Fill),
            text(format!("{percent}%")).size(SMALL_FONT_SIZE),
        ];

        let mut track = Row::new().height(Length::Fixed(METER_HEIGHT));
        if percent > 0 {
            track = track.push(
                container(Space::new())
                    .width(Length::FillPortion(u16::from(percent)))
                    .height(Length::Fill)
                    .style(move |_| iced::widget::container::Style {
                        background: Some(palette.accent.into()),
                        border: Border {
                            radius: (METER_HEIGHT / 2.0).into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            );
        }
        let rest = Progress::MAX - percent;
        if rest > 0 {
            track = track.push(
                Space::new().width(Length::FillPortion(u16::from(rest))),
            );
        }

        let bar = container(track)
            .width(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(palette.border.into()),
                border: Border {
                    radius: (METER_HEIGHT / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        column![caption, bar].spacing(6).into()
    }

    fn dialog(
        self,
        dialog: &'a Dialog,
    ) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
        let palette = self.palette;
        let close = button(self.icon(Icon::Close, palette.dim_foreground))
            .on_press(DashboardIntent::Action(dialog.dismiss))
            .padding(4)
            .style(move |_, status| {
                button_style(&palette, ButtonVariant::Ghost, status)
            });
        let header = row![
            text(&dialog.title).size(18),
            Space::new().width(Length::Fill),
            close,
        ]
        .align_y(alignment::Vertical::Center);

        let body = Column::with_children(
            dialog.body.iter().map(|child| self.node(child)),
        )
        .spacing(CARD_SPACING);

        let mut footer = Row::new()
            .spacing(CARD_SPACING)
            .align_y(alignment::Vertical::Center)
            .push(Space::new().width(Length::Fill));
        for child in &dialog.footer {
            footer = footer.push(self.node(child));
        }

        container(column![header, body, footer].spacing(STACK_SPACING))
            .padding(DIALOG_PADDING)
            .width(Length::Fixed(DIALOG_WIDTH))
            .style(move |_| iced::widget::container::Style {
                background: Some(palette.surface.into()),
                text_color: Some(palette.foreground),
                border: Border {
                    width: 1.0,
                    color: palette.border,
                    radius: CARD_RADIUS.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn icon(
        self,
        icon: Icon,
        color: Color,
    ) -> Element<'a, DashboardIntent, Theme, iced::Renderer> {
        svg::Svg::new(self.icons.handle(icon))
            .width(Length::Fixed(ICON_SIZE))
            .height(Length::Fixed(ICON_SIZE))
            .style(move |_, _| svg::Style { color: Some(color) })
            .into()
    }
}

fn heading_size(level: u8) -> f32 {
    match level {
        1 => 28.0,
        2 => 22.0,
        3 => 16.0,
        _ => BODY_FONT_SIZE,
    }
}

fn button_style(
    palette: &IcedColorPalette,
    variant: ButtonVariant,
    status: ButtonStatus,
) -> iced::widget::button::Style {
    let hovered =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);
    let (background, text_color, border_color) = match variant {
        ButtonVariant::Primary => {
            let mut accent = palette.accent;
            if hovered {
                accent.a = 0.85;
            }
            (Some(accent), palette.on_accent, Color::TRANSPARENT)
        },
        ButtonVariant::Secondary => (
            hovered.then_some(palette.border),
            palette.foreground,
            palette.border,
        ),
        ButtonVariant::Ghost => (
            hovered.then_some(palette.border),
            palette.foreground,
            Color::TRANSPARENT,
        ),
    };

    iced::widget::button::Style {
        background: background.map(Into::into),
        text_color,
        border: Border {
            width: 1.0,
            color: border_color,
            radius: BUTTON_RADIUS.into(),
        },
        ..Default::default()
    }
}
