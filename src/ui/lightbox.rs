// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay drawn above the gallery while the navigator is open.
//!
//! Pressing the dimmed backdrop closes the overlay; presses on the framed
//! content are absorbed so they never reach the backdrop.

use crate::i18n::fluent::I18n;
use crate::lightbox::{Message, Navigator};
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::gallery::Thumbnail;
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, opaque, tooltip, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length};
use std::collections::HashMap;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub thumbnails: &'a HashMap<String, Thumbnail>,
}

/// Renders the overlay, or `None` while the navigator is closed.
pub fn view<'a>(navigator: &'a Navigator, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let controls = navigator.controls()?;
    let i18n = ctx.i18n;

    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let picture: Element<'a, Message> = match ctx.thumbnails.get(&controls.image.filename) {
        Some(Thumbnail::Ready(handle)) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .into(),
        Some(Thumbnail::Failed) => Text::new(i18n.tr("gallery-image-unavailable"))
            .color(theme::overlay_control_color())
            .into(),
        None => Text::new(i18n.tr("gallery-image-loading"))
            .color(theme::overlay_control_color())
            .into(),
    };

    let previous = nav_button(
        "‹",
        i18n.tr("lightbox-previous"),
        controls.previous_enabled.then_some(Message::PreviousPressed),
    );
    let next = nav_button(
        "›",
        i18n.tr("lightbox-next"),
        controls.next_enabled.then_some(Message::NextPressed),
    );
    let close = nav_button("✕", i18n.tr("lightbox-close"), Some(Message::CloseRequested));

    let counter = Container::new(Text::new(controls.counter).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::counter);

    let stage = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(picture)
        .push(next);

    let frame = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Container::new(close)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        )
        .push(stage)
        .push(counter);

    let content = Container::new(opaque(frame))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Some(Stack::new().push(backdrop).push(content).into())
}

fn nav_button<'a>(
    glyph: &'a str,
    label: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let control = button(Text::new(glyph).size(typography::TITLE_LG))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_overlay(
            theme::overlay_control_color(),
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .on_press_maybe(on_press);

    tooltip(
        control,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::overlay::counter),
        tooltip::Position::Bottom,
    )
    .into()
}
