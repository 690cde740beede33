//! Modal dialog overlay.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Alignment, Border, Color, Element, Length, Shadow, Vector};
use iced_fonts::lucide;

use crate::theme::{
    BACKDROP, BORDER_RADIUS_LG, ERROR, GRAY_200, GRAY_500, GRAY_900, MODAL_WIDTH_MD,
    SHADOW_STRONG, SPACING_LG, SPACING_MD, SPACING_SM, SUCCESS, WARNING, WHITE, button_ghost,
    button_primary,
};

/// Visual tone of a modal, shown as the header icon color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTone {
    Success,
    Warning,
    Error,
}

impl ModalTone {
    fn color(self) -> Color {
        match self {
            Self::Success => SUCCESS,
            Self::Warning => WARNING,
            Self::Error => ERROR,
        }
    }
}

/// Overlay a dialog on top of `base`.
///
/// The backdrop swallows clicks; only the close and OK buttons dismiss.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    tone: ModalTone,
    title: &'a str,
    body: &'a str,
    on_close: M,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(BACKDROP.into()),
            ..Default::default()
        });

    let icon = match tone {
        ModalTone::Success => lucide::circle_check(),
        ModalTone::Warning => lucide::triangle_alert(),
        ModalTone::Error => lucide::circle_x(),
    };

    let header = row![
        icon.size(20).color(tone.color()),
        text(title).size(18).color(GRAY_900),
        space::horizontal(),
        button(lucide::x().size(20).color(GRAY_500))
            .on_press(on_close.clone())
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let actions = row![
        space::horizontal(),
        button(text("OK"))
            .on_press(on_close)
            .padding([10.0, 24.0])
            .style(button_primary),
    ];

    let dialog = container(
        column![header, text(body).size(14), actions].spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(|_theme| container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: Shadow {
            color: SHADOW_STRONG,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    stack![base, opaque(backdrop), center(dialog)].into()
}
