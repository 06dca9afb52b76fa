// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the form header above the scrollable gallery. The lightbox is
//! stacked on top of the page while open.

use super::{App, Message};
use crate::gallery::StatusLine;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{form, gallery, lightbox, theme};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

impl App {
    pub(super) fn render(&self) -> Element<'_, Message> {
        let mut header = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(self.i18n.tr("window-title")).size(typography::TITLE_LG))
            .push(
                form::view(
                    &self.form,
                    form::ViewContext {
                        i18n: &self.i18n,
                        submitting: self.gallery.is_submitting(),
                        spinner_rotation: self.spinner_rotation,
                    },
                )
                .map(Message::Form),
            );

        if let Some(status) = self.gallery.status() {
            header = header.push(status_line(&self.i18n, status));
        }

        let gallery = gallery::view(
            &self.gallery,
            gallery::ViewContext {
                i18n: &self.i18n,
                thumbnails: &self.thumbnails,
                scroll_lock: self.navigator.scroll_lock(),
                scrollbar_width: self.config.lightbox.scrollbar_width(),
                spinner_rotation: self.spinner_rotation,
            },
        )
        .map(Message::Lightbox);

        let page = Column::new()
            .push(Container::new(header).padding(spacing::MD))
            .push(gallery)
            .width(Length::Fill)
            .height(Length::Fill);

        let overlay = lightbox::view(
            &self.navigator,
            lightbox::ViewContext {
                i18n: &self.i18n,
                thumbnails: &self.thumbnails,
            },
        );

        // The page stays the first layer in both states so the gallery keeps its
        // scroll offset while the overlay is shown.
        let mut layers = Stack::new().push(page);
        if let Some(overlay) = overlay {
            layers = layers.push(overlay.map(Message::Lightbox));
        }
        layers.into()
    }
}

fn status_line<'a>(i18n: &I18n, status: &StatusLine) -> Element<'a, Message> {
    Text::new(i18n.tr_with_args(status.key, &status.args))
        .size(typography::BODY)
        .color(theme::status_color(status.kind))
        .into()
}
