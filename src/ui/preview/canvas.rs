// SPDX-License-Identifier: MPL-2.0
//! Canvas program that paints the ticket and forwards pointer input.
//!
//! The canvas itself is dumb: it reports raw pointer events and lets the
//! preview state machine decide what they mean.

use super::gesture::{handle_rect, section_rect};
use super::layout::GeometryModel;
use super::messages::Message;
use super::sections::SectionId;
use crate::ticket::design::ColorScheme;
use crate::ticket::qr::{self, CodeMatrix};
use crate::ticket::{format_date, format_time, EventData};
use crate::ui::design_tokens::{border, typography};
use crate::ui::theme;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Point, Rectangle, Size};

/// Number of horizontal bands used to approximate the background gradient.
const GRADIENT_STRIPS: u32 = 32;

/// Side length of one code matrix module, in surface pixels.
const MODULE_SIZE: f32 = 4.0;
/// Padding of the white card around the code matrix.
const CODE_PADDING: f32 = 4.0;

pub struct TicketCanvas<'a> {
    pub geometry: &'a GeometryModel,
    pub event: &'a EventData,
    pub colors: ColorScheme,
    pub ticket_id: &'a str,
    pub code: &'a CodeMatrix,
    pub background_image: Option<&'a iced::widget::image::Handle>,
    pub overlay_image: Option<&'a iced::widget::image::Handle>,
    pub dragging_section: Option<SectionId>,
}

impl canvas::Program<Message> for TicketCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            // Leaving the canvas ends any gesture in flight.
            iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                return Some(Action::publish(Message::PointerLeft).and_capture());
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    return Some(
                        Action::publish(Message::PointerPressed {
                            position,
                            bounds: bounds.size(),
                        })
                        .and_capture(),
                    );
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                match cursor.position_in(bounds) {
                    Some(position) => {
                        return Some(
                            Action::publish(Message::PointerMoved {
                                position,
                                bounds: bounds.size(),
                            })
                            .and_capture(),
                        );
                    }
                    None => {
                        return Some(Action::publish(Message::PointerLeft).and_capture());
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                return Some(Action::publish(Message::PointerReleased).and_capture());
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        self.draw_background(&mut frame, bounds.size());

        for &id in &SectionId::ALL {
            if id.is_visible(self.event) {
                self.draw_section(&mut frame, id);
            }
        }

        if self.overlay_image.is_some() {
            self.draw_overlay(&mut frame);
        }

        vec![frame.into_geometry()]
    }
}

impl TicketCanvas<'_> {
    /// Left-to-right gradient from the primary to the secondary color,
    /// approximated with vertical bands. A picked background image draws
    /// over the gradient, stretched to the full surface.
    fn draw_background(&self, frame: &mut Frame, size: Size) {
        let from = self.colors.primary_color();
        let to = self.colors.secondary_color();
        let strip_width = size.width / GRADIENT_STRIPS as f32;

        for i in 0..GRADIENT_STRIPS {
            let t = i as f32 / (GRADIENT_STRIPS - 1) as f32;
            frame.fill_rectangle(
                Point::new(i as f32 * strip_width, 0.0),
                Size::new(strip_width + 1.0, size.height),
                lerp_color(from, to, t),
            );
        }

        if let Some(handle) = self.background_image {
            let surface = Rectangle {
                x: 0.0,
                y: 0.0,
                width: size.width,
                height: size.height,
            };
            frame.draw_image(surface, canvas::Image::new(handle.clone()));
        }
    }

    fn draw_section(&self, frame: &mut Frame, id: SectionId) {
        if self.dragging_section == Some(id) {
            let rect = section_rect(self.geometry, id);
            frame.fill_rectangle(
                Point::new(rect.x, rect.y),
                rect.size(),
                theme::section_drag_highlight_color(),
            );
        }

        let position = self.geometry.section_position(id);
        let origin = Point::new(position.x, position.y);
        let text_color = self.colors.text_color();

        match id {
            SectionId::EventName => {
                let content = non_empty(&self.event.event_name, "Event Name");
                self.fill_text(frame, content, origin, text_color, typography::TITLE_SM);
            }
            SectionId::Venue => {
                let content = non_empty(&self.event.venue, "Venue Name");
                self.fill_text(frame, content, origin, text_color, typography::BODY);
            }
            SectionId::DateTime => {
                let content = format!(
                    "{} \u{b7} {}",
                    format_date(&self.event.date),
                    format_time(&self.event.time)
                );
                self.fill_text(frame, content, origin, text_color, typography::BODY);
            }
            SectionId::Category => {
                let label = self.event.category.to_string().to_uppercase();
                let badge_width = 14.0 + label.len() as f32 * 8.0;
                frame.fill_rectangle(
                    origin,
                    Size::new(badge_width, 22.0),
                    self.colors.accent_color(),
                );
                self.fill_text(
                    frame,
                    label,
                    Point::new(origin.x + 7.0, origin.y + 4.0),
                    contrast_color(self.colors.accent_color()),
                    typography::CAPTION,
                );
            }
            SectionId::SeatInfo => {
                self.fill_text(
                    frame,
                    self.event.seat_label(),
                    origin,
                    text_color,
                    typography::BODY,
                );
                if !self.event.seat_type.is_empty() {
                    self.fill_text(
                        frame,
                        self.event.seat_type.clone(),
                        Point::new(origin.x, origin.y + 18.0),
                        faded(text_color),
                        typography::CAPTION,
                    );
                }
            }
            SectionId::Price => {
                let content = format!("${}", self.event.price);
                self.fill_text(frame, content, origin, self.colors.accent_color(), typography::TITLE_SM);
            }
            SectionId::TicketId => {
                let content = format!("#{}", self.ticket_id);
                self.fill_text(frame, content, origin, faded(text_color), typography::CAPTION);
            }
            SectionId::QrCode => {
                self.draw_code_matrix(frame, origin);
            }
        }
    }

    fn draw_code_matrix(&self, frame: &mut Frame, origin: Point) {
        let side = qr::MODULES as f32 * MODULE_SIZE + CODE_PADDING * 2.0;
        frame.fill_rectangle(origin, Size::new(side, side), Color::WHITE);

        for y in 0..qr::MODULES {
            for x in 0..qr::MODULES {
                if self.code.get(x, y) {
                    frame.fill_rectangle(
                        Point::new(
                            origin.x + CODE_PADDING + x as f32 * MODULE_SIZE,
                            origin.y + CODE_PADDING + y as f32 * MODULE_SIZE,
                        ),
                        Size::new(MODULE_SIZE, MODULE_SIZE),
                        Color::BLACK,
                    );
                }
            }
        }
    }

    fn draw_overlay(&self, frame: &mut Frame) {
        let overlay = self.geometry.overlay();
        let rect = Rectangle {
            x: overlay.x,
            y: overlay.y,
            width: overlay.width,
            height: overlay.height,
        };

        if let Some(handle) = self.overlay_image {
            frame.draw_image(rect, canvas::Image::new(handle.clone()));
        } else {
            frame.fill_rectangle(
                Point::new(rect.x, rect.y),
                rect.size(),
                theme::overlay_placeholder_color(),
            );
        }

        let outline = Path::rectangle(Point::new(rect.x, rect.y), rect.size());
        frame.stroke(
            &outline,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(theme::overlay_border_color()),
        );

        let handle_area = handle_rect(overlay);
        let handle_path = Path::rectangle(
            Point::new(handle_area.x, handle_area.y),
            handle_area.size(),
        );
        frame.fill(&handle_path, theme::overlay_handle_color());
        frame.stroke(
            &handle_path,
            Stroke::default()
                .with_width(border::WIDTH_SM)
                .with_color(theme::overlay_handle_border_color()),
        );
    }

    fn fill_text(
        &self,
        frame: &mut Frame,
        content: String,
        position: Point,
        color: Color,
        size: f32,
    ) {
        frame.fill_text(canvas::Text {
            content,
            position,
            color,
            size: size.into(),
            ..canvas::Text::default()
        });
    }
}

fn non_empty(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: 1.0,
    }
}

/// Black or white, whichever reads better on the given background.
fn contrast_color(background: Color) -> Color {
    let luminance = 0.299 * background.r + 0.587 * background.g + 0.114 * background.b;
    if luminance > 0.6 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

fn faded(color: Color) -> Color {
    Color { a: 0.7, ..color }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_return_inputs() {
        let from = Color::from_rgb(0.0, 1.0, 0.0);
        let to = Color::from_rgb(0.0, 0.0, 1.0);
        assert_eq!(lerp_color(from, to, 0.0), from);
        assert_eq!(lerp_color(from, to, 1.0), to);
    }

    #[test]
    fn contrast_flips_between_black_and_white() {
        assert_eq!(contrast_color(Color::WHITE), Color::BLACK);
        assert_eq!(contrast_color(Color::BLACK), Color::WHITE);
    }
}
