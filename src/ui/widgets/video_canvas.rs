// SPDX-License-Identifier: MPL-2.0
//! Widget for rendering video frames.
//!
//! Frames are drawn with Iced's Image widget, stretched to cover the whole
//! area behind the quiz.

use crate::ui::styles;
use iced::widget::{container, image, Space};
use iced::{ContentFit, Element, Length};
use std::sync::Arc;

/// Latest decoded frame, ready for display.
#[derive(Debug, Default)]
pub struct VideoCanvas {
    frame_handle: Option<image::Handle>,
    width: u32,
    height: u32,
}

impl VideoCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed frame with RGBA data.
    pub fn set_frame(&mut self, rgba_data: Arc<Vec<u8>>, width: u32, height: u32) {
        // Take ownership of the buffer when no one else holds it
        let data = Arc::try_unwrap(rgba_data).unwrap_or_else(|arc| (*arc).clone());
        self.frame_handle = Some(image::Handle::from_rgba(width, height, data));
        self.width = width;
        self.height = height;
    }

    /// Drops the current frame; the canvas renders black.
    pub fn clear(&mut self) {
        self.frame_handle = None;
        self.width = 0;
        self.height = 0;
    }

    pub fn has_frame(&self) -> bool {
        self.frame_handle.is_some()
    }

    /// Frame size in pixels, `(0, 0)` when empty.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Renders the frame filling the available space.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let content: Element<'a, Message> = match &self.frame_handle {
            Some(handle) => image::Image::new(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::video_backdrop)
            .into()
    }
}
