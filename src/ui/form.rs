// SPDX-License-Identifier: MPL-2.0
//! Generation form: prompt, aspect ratio and image count.

use crate::config::FormConfig;
use crate::generation::{parse_num_images, AspectRatio, GenerationRequest};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Vertical;
use iced::widget::{button, pick_list, text_input, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub submitting: bool,
    pub spinner_rotation: f32,
}

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    PromptChanged(String),
    AspectRatioSelected(AspectRatio),
    NumImagesChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submit(GenerationRequest),
}

#[derive(Debug, Clone)]
pub struct State {
    prompt: String,
    aspect_ratio: AspectRatio,
    num_images: String,
}

impl Default for State {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

impl State {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            prompt: String::new(),
            aspect_ratio: config.default_aspect_ratio.unwrap_or_default(),
            num_images: config.num_images().to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PromptChanged(prompt) => {
                self.prompt = prompt;
                Event::None
            }
            Message::AspectRatioSelected(ratio) => {
                self.aspect_ratio = ratio;
                Event::None
            }
            Message::NumImagesChanged(raw) => {
                if raw.chars().all(|c| c.is_ascii_digit()) {
                    self.num_images = raw;
                }
                Event::None
            }
            Message::Submit => Event::Submit(self.request()),
        }
    }

    /// The request this form submits. The prompt is sent as typed, even
    /// when empty; the backend substitutes its own default.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            prompt: self.prompt.clone(),
            aspect_ratio: self.aspect_ratio,
            num_images: parse_num_images(&self.num_images),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut prompt = text_input(&i18n.tr("form-prompt-placeholder"), &state.prompt)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fill);
    let mut num_images = text_input("1", &state.num_images)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::NUM_INPUT_WIDTH));
    if !ctx.submitting {
        prompt = prompt
            .on_input(Message::PromptChanged)
            .on_submit(Message::Submit);
        num_images = num_images.on_input(Message::NumImagesChanged);
    }

    let ratio_picker = pick_list(
        AspectRatio::ALL,
        Some(state.aspect_ratio),
        Message::AspectRatioSelected,
    )
    .text_size(typography::BODY)
    .padding(spacing::XS);

    let submit_label = if ctx.submitting {
        i18n.tr("form-submitting")
    } else {
        i18n.tr("form-submit")
    };
    let submit = button(Text::new(submit_label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button_primary);
    let submit = if !ctx.submitting {
        submit.on_press(Message::Submit)
    } else {
        submit
    };

    let mut options = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(labelled(i18n.tr("form-aspect-ratio-label"), ratio_picker))
        .push(labelled(i18n.tr("form-num-images-label"), num_images))
        .push(submit);

    if ctx.submitting {
        options = options.push(
            AnimatedSpinner::new(theme::muted_text_color(), ctx.spinner_rotation)
                .size(sizing::ICON_SM * 1.5)
                .into_element(),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("form-prompt-label")).size(typography::BODY))
        .push(prompt)
        .push(options)
        .into()
}

fn labelled<'a>(
    label: String,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY))
        .push(control)
        .into()
}
