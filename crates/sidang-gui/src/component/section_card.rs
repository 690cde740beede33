//! Titled section card.
//!
//! ```rust,ignore
//! SectionCard::new("Data Mahasiswa", content)
//!     .icon(lucide::user().size(14).color(PRIMARY_500))
//!     .view()
//! ```

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Border, Element, Length};

use crate::theme::{BORDER_RADIUS_SM, GRAY_200, GRAY_700, SPACING_MD, SPACING_SM, WHITE};

/// A titled card grouping related form fields.
pub struct SectionCard<'a, M> {
    title: String,
    icon: Option<Element<'a, M>>,
    content: Element<'a, M>,
}

impl<'a, M: 'a> SectionCard<'a, M> {
    pub fn new(title: impl Into<String>, content: impl Into<Element<'a, M>>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            content: content.into(),
        }
    }

    /// Add an icon to the header.
    pub fn icon(mut self, icon: impl Into<Element<'a, M>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let title = text(self.title).size(15).color(GRAY_700);
        let header: Element<'a, M> = match self.icon {
            Some(icon) => row![icon, Space::new().width(SPACING_SM), title]
                .align_y(Alignment::Center)
                .into(),
            None => title.into(),
        };

        container(
            column![header, Space::new().height(SPACING_SM), self.content].width(Length::Fill),
        )
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(|_| container::Style {
            background: Some(WHITE.into()),
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                color: GRAY_200,
                width: 1.0,
            },
            ..Default::default()
        })
        .into()
    }
}
