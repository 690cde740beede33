//! Action bar and status line.

use iced::widget::{button, column, row, space, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use crate::message::{Message, ResourceMessage};
use crate::state::AppState;
use crate::theme::{GRAY_600, SPACING_SM, SPACING_XS, button_primary, button_secondary};

fn action_button<'a>(
    icon: iced::widget::Text<'a>,
    label: &'a str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    button(
        row![icon.size(14), text(label).size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([8.0, 14.0])
    .style(button_secondary)
    .on_press_maybe(on_press)
    .into()
}

pub fn view_actions(state: &AppState) -> Element<'_, Message> {
    let idle = !state.is_busy;
    let resource = |msg: ResourceMessage| idle.then_some(Message::Resources(msg));

    let generate = button(
        row![lucide::file_output().size(16), text("Generate").size(15)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([10.0, 24.0])
    .style(button_primary)
    .on_press_maybe(idle.then_some(Message::Generate));

    let buttons = row![
        action_button(
            lucide::table(),
            "Load Excel Dosen",
            resource(ResourceMessage::PickSpreadsheet),
        ),
        action_button(
            lucide::folder_open(),
            "Folder Template",
            resource(ResourceMessage::PickTemplateDir),
        ),
        action_button(
            lucide::folder(),
            "Folder Output",
            resource(ResourceMessage::PickOutputRoot),
        ),
        space::horizontal(),
        generate,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let locations = text(format!(
        "Template: {}  |  Output: {}",
        state.settings.template_dir().display(),
        state.settings.output_root().display()
    ))
    .size(12)
    .color(GRAY_600);

    column![
        buttons,
        text(&state.status).size(13).color(GRAY_600),
        locations
    ]
    .spacing(SPACING_XS)
    .into()
}
