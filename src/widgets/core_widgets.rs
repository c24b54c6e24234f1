//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::draw_context::widget_color;
use crate::*;
use std::fmt;

impl<R: Renderer> Context<R> {
    /// Draws a line of text at the cursor.
    pub fn text(&mut self, text: &str) {
        if self.skip_items() {
            return;
        }
        let size = self.measure(text);
        let bb = rect_at(self.cursor(), size);
        self.item_size(size);
        self.draw(|dc| dc.draw_text(text, bb, TextAlign::Left));
    }

    /// Formatted variant of [`Context::text`], capped at [`TEXT_BUF_LEN`] bytes.
    pub fn text_fmt(&mut self, args: fmt::Arguments<'_>) {
        let text = format_bounded(TEXT_BUF_LEN, args);
        self.text(&text);
    }

    /// Button sized to its label; returns `true` on the frame it is released over.
    pub fn button(&mut self, label: &str) -> bool { self.button_sized(label, vec2(0.0, 0.0)) }

    /// Button with an explicit content size; a zero component follows the label.
    #[inline(never)]
    pub fn button_sized(&mut self, label: &str, size: Vec2f) -> bool {
        if self.skip_items() {
            return false;
        }
        let id = self.get_id(label);
        let display = Label::parse(label).display();
        let text_size = self.measure(display);
        let content = vec2(if size.x == 0.0 { text_size.x } else { size.x }, if size.y == 0.0 { text_size.y } else { size.y });
        let fp = self.style.frame_padding;
        let bb = rect_at(self.cursor(), vec2(content.x + fp.x * 2.0, content.y + fp.y * 2.0));
        self.item_size(vec2(bb.width, bb.height));

        let i = self.widget_interaction(bb, id, false);
        let role = widget_color(i.held, i.hovered, ControlColor::Button, ControlColor::ButtonHovered, ControlColor::ButtonActive);
        self.draw(|dc| {
            dc.draw_frame(bb, role);
            dc.draw_text(display, bb, TextAlign::Center);
        });
        i.pressed
    }

    /// Lays out a square toggle followed by its label; returns the toggle box and label box.
    fn toggle_layout(&mut self, label_size: Vec2f, shrink: f32) -> (Rectf, Rectf) {
        let fp = self.style.frame_padding;
        let inner = self.style.item_inner_spacing;
        let side = label_size.y + fp.y * 2.0 - shrink;
        let check_bb = rect_at(self.cursor(), vec2(side, side));
        self.item_size(vec2(side, side));
        self.same_line_ex(0.0, Some(inner.x));
        let c = self.cursor();
        let text_bb = rect(c.x, c.y + fp.y, label_size.x, fp.y + label_size.y);
        self.item_size(vec2(text_bb.width, text_bb.height));
        (check_bb, text_bb)
    }

    /// Check box bound to `value`; flips it on the click edge and returns `true` then.
    #[inline(never)]
    pub fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        if self.skip_items() {
            return false;
        }
        let id = self.get_id(label);
        let display = Label::parse(label).display();
        let label_size = self.measure(display);
        let (check_bb, text_bb) = self.toggle_layout(label_size, 0.0);

        let i = self.click_interaction(check_bb, id);
        if i.pressed {
            *value = !*value;
            self.active_id = None;
        }

        let checked = *value;
        let mark = self.style.color(ControlColor::WidgetActive);
        self.draw(|dc| {
            dc.draw_frame(check_bb, ControlColor::WidgetBg);
            if checked {
                dc.fill_rect(rect(check_bb.x + 4.0, check_bb.y + 4.0, check_bb.width - 8.0, check_bb.height - 8.0), mark);
            }
            if !display.is_empty() {
                dc.draw_text(display, text_bb, TextAlign::Center);
            }
        });
        i.pressed
    }

    /// Radio button drawn as selected when `active`; returns `true` on the click edge.
    #[inline(never)]
    pub fn radio_button(&mut self, label: &str, active: bool) -> bool {
        if self.skip_items() {
            return false;
        }
        let id = self.get_id(label);
        let display = Label::parse(label).display();
        let label_size = self.measure(display);
        let (check_bb, text_bb) = self.toggle_layout(label_size, 1.0);

        let center = vec2((check_bb.x + check_bb.width / 2.0).floor() + 0.5, (check_bb.y + check_bb.height / 2.0).floor() + 0.5);
        let radius = check_bb.height * 0.5;
        let i = self.click_interaction(check_bb, id);

        let (bg, dot, border) = (
            self.style.color(ControlColor::WidgetBg),
            self.style.color(ControlColor::WidgetActive),
            self.style.color(ControlColor::Border),
        );
        self.draw(|dc| {
            dc.draw_ellipse(center, radius, bg, true);
            if active {
                dc.draw_ellipse(center, radius - 4.0, dot, true);
            }
            if dc.has_borders() {
                dc.draw_ellipse(center, radius, border, false);
            }
            if !display.is_empty() {
                dc.draw_text(display, text_bb, TextAlign::Center);
            }
        });
        i.pressed
    }

    /// Radio button selecting `button_value` into `value`.
    pub fn radio_button_value(&mut self, label: &str, value: &mut i32, button_value: i32) -> bool {
        let pressed = self.radio_button(label, *value == button_value);
        if pressed {
            *value = button_value;
        }
        pressed
    }
}
