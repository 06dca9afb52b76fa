// SPDX-License-Identifier: MPL-2.0
//! Gallery page: batch groups, generation placeholders and the empty notice.
//!
//! Image cards emit [`lightbox::Message::Open`] so the lightbox can resolve the
//! card's batch as its navigation group.

use crate::gallery::{BatchGroup, Gallery, SkeletonGroup};
use crate::generation::AspectRatio;
use crate::i18n::fluent::I18n;
use crate::lightbox::{self, ImageRef, ScrollLock};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::{scroll_guard, AnimatedSpinner};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{ContentFit, Element, Length, Padding};
use std::collections::HashMap;

/// Downloaded image bytes, keyed by file name in the view context.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Ready(Handle),
    Failed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub thumbnails: &'a HashMap<String, Thumbnail>,
    pub scroll_lock: &'a ScrollLock,
    pub scrollbar_width: f32,
    pub spinner_rotation: f32,
}

pub fn view<'a>(gallery: &'a Gallery, ctx: ViewContext<'a>) -> Element<'a, lightbox::Message> {
    let mut content = Column::new().spacing(spacing::LG).width(Length::Fill);

    if let Some(skeleton) = gallery.skeleton() {
        content = content.push(skeleton_group(skeleton, ctx.i18n, ctx.spinner_rotation));
    }

    for group in gallery.groups() {
        content = content.push(batch_group(group, &ctx));
    }

    if gallery.shows_empty_notice() {
        content = content.push(
            Container::new(
                Text::new(ctx.i18n.tr("gallery-empty"))
                    .size(typography::BODY)
                    .color(theme::muted_text_color()),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::XL),
        );
    }

    // Padding stands in for the hidden scrollbar so the layout does not shift.
    let padded = Container::new(content).padding(Padding {
        top: spacing::MD,
        right: spacing::MD + ctx.scroll_lock.padding_right(),
        bottom: spacing::MD,
        left: spacing::MD,
    });

    let suppressed = ctx.scroll_lock.is_scroll_suppressed();
    let scrollbar = if suppressed {
        Scrollbar::hidden()
    } else {
        Scrollbar::new()
            .width(ctx.scrollbar_width)
            .scroller_width(ctx.scrollbar_width)
            .spacing(0.0)
    };

    let scrollable = Scrollable::new(padded)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(scrollbar));

    scroll_guard(scrollable).engaged(suppressed).into()
}

fn batch_group<'a>(group: &'a BatchGroup, ctx: &ViewContext<'a>) -> Element<'a, lightbox::Message> {
    let batch = &group.batch;
    let card_height =
        sizing::CARD_WIDTH * AspectRatio::from_label(&batch.aspect_ratio).height_factor();

    let meta = Row::new()
        .spacing(spacing::MD)
        .push(meta_text(
            ctx.i18n
                .tr_with_args("gallery-batch-id", &[("batch_id", batch.id.clone())]),
        ))
        .push(meta_text(batch.created_display()))
        .push(meta_text(group.summary()));

    let grid = group
        .images
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, image| {
            row.push(image_card(image, card_height, ctx))
        })
        .wrap()
        .vertical_spacing(spacing::SM);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(batch.prompt.as_str()).size(typography::TITLE_MD))
            .push(meta)
            .push(grid),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

fn image_card<'a>(
    image: &'a ImageRef,
    height: f32,
    ctx: &ViewContext<'a>,
) -> Element<'a, lightbox::Message> {
    let width = Length::Fixed(sizing::CARD_WIDTH);
    let height = Length::Fixed(height);

    let face: Element<'a, lightbox::Message> = match ctx.thumbnails.get(&image.filename) {
        Some(Thumbnail::Ready(handle)) => Image::new(handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => placeholder(ctx.i18n.tr("gallery-image-unavailable"), width, height),
        None => placeholder(ctx.i18n.tr("gallery-image-loading"), width, height),
    };

    button(face)
        .padding(0)
        .style(styles::button::card)
        .on_press(lightbox::Message::Open(image.clone()))
        .into()
}

fn placeholder<'a>(label: String, width: Length, height: Length) -> Element<'a, lightbox::Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(width)
        .height(height)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::image_placeholder)
        .into()
}

fn skeleton_group<'a>(
    skeleton: &'a SkeletonGroup,
    i18n: &I18n,
    spinner_rotation: f32,
) -> Element<'a, lightbox::Message> {
    let card_label = i18n.tr("gallery-skeleton-card");
    let cards = (0..skeleton.cards)
        .fold(Row::new().spacing(spacing::SM), |row, _| {
            row.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XS)
                        .align_x(Horizontal::Center)
                        .push(
                            AnimatedSpinner::new(theme::muted_text_color(), spinner_rotation)
                                .into_element(),
                        )
                        .push(
                            Text::new(card_label.clone())
                                .size(typography::CAPTION)
                                .color(theme::muted_text_color()),
                        ),
                )
                .width(Length::Fixed(sizing::CARD_WIDTH))
                .height(Length::Fixed(skeleton.card_height))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::skeleton),
            )
        })
        .wrap()
        .vertical_spacing(spacing::SM);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(skeleton.label.as_str()).size(typography::TITLE_MD))
            .push(cards),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

fn meta_text<'a>(text: String) -> Element<'a, lightbox::Message> {
    Text::new(text)
        .size(typography::CAPTION)
        .color(theme::muted_text_color())
        .into()
}
