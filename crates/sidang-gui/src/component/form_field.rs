//! Labeled form inputs.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::theme::style::text_input_error;
use crate::theme::{GRAY_600, SPACING_XS, button_ghost, text_input_default};

/// Put a small gray label above any widget.
pub fn labeled<'a, M: 'a>(label: &'a str, content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    column![text(label).size(13).color(GRAY_600), content.into()]
        .spacing(SPACING_XS)
        .width(Length::Fill)
        .into()
}

/// Text field with label. `invalid` outlines the input in the danger color.
///
/// ```rust,ignore
/// form_field("NPM", &form.student_number, "2010511001", FormMessage::StudentNumberChanged, false)
/// ```
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    invalid: bool,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10.0)
        .width(Length::Fill)
        .style(if invalid {
            text_input_error
        } else {
            text_input_default
        });

    container(labeled(label, input)).width(Length::Fill).into()
}

/// Integer field with minus/plus buttons. `text` is shown as typed;
/// `value` is the last accepted number, stepped within `range`.
pub fn stepper_field<'a, M: Clone + 'a>(
    label: &'a str,
    text: &'a str,
    value: u32,
    range: (u32, u32),
    on_input: impl Fn(String) -> M + 'a,
    on_step: impl Fn(u32) -> M + 'a,
) -> Element<'a, M> {
    let (min, max) = range;
    let input = text_input("1", text)
        .on_input(on_input)
        .padding(10.0)
        .width(Length::Fixed(72.0))
        .style(text_input_default);

    let minus = button(lucide::circle_minus().size(16))
        .padding([6.0, 8.0])
        .style(button_ghost)
        .on_press_maybe((value > min).then(|| on_step(value - 1)));
    let plus = button(lucide::plus().size(16))
        .padding([6.0, 8.0])
        .style(button_ghost)
        .on_press_maybe((value < max).then(|| on_step(value + 1)));

    labeled(
        label,
        row![minus, input, plus]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
}
