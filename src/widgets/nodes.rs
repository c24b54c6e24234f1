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

impl<R: Renderer> Context<R> {
    /// Framed collapsing header, closed by default; returns whether it is open.
    pub fn collapse(&mut self, label: &str) -> bool { self.collapse_ex(label, None, true, false) }

    /// Collapsing header whose open state lives in the window storage.
    ///
    /// The state is keyed by `str_id`, or by `label` when absent, and starts
    /// at `default_open`. Clicking the header toggles it.
    #[inline(never)]
    pub fn collapse_ex(&mut self, label: &str, str_id: Option<&str>, display_frame: bool, default_open: bool) -> bool {
        if self.skip_items() {
            return false;
        }
        let id = self.get_id(str_id.unwrap_or(label));
        let mut opened = self.current_window().storage.get_value(id, default_open as i32) != 0;

        let display = Label::parse(label).display();
        let text_size = self.measure(display);
        let pos = self.cursor();
        let fp = self.style.frame_padding;
        let font_size = self.style.font_size;
        let width = self.current_window().rect.width - self.style.window_padding.x * 2.0;

        let mut bb = rect(pos.x, pos.y, width, text_size.y);
        if display_frame {
            bb.x -= fp.x * 0.5;
            bb.width += fp.x;
            bb.height += fp.y * 2.0;
        }
        let label_bb = rect(bb.x + font_size + 10.0, bb.y, bb.width - font_size - 10.0, bb.height);
        let text_bb = rect(bb.x, bb.y, font_size + fp.x * 4.0 + text_size.x, text_size.y);
        self.item_size(vec2(text_bb.width, bb.height));

        let i = self.widget_interaction(if display_frame { bb } else { text_bb }, id, false);
        if i.pressed {
            opened = !opened;
            self.current_window_mut().storage.set_value(id, opened as i32);
        }

        let role = widget_color(i.held, i.hovered, ControlColor::Collapse, ControlColor::CollapseHovered, ControlColor::CollapseActive);
        let fill = self.style.color(role);
        self.draw(|dc| {
            if display_frame {
                dc.draw_frame(bb, role);
            } else if i.hovered {
                dc.fill_rect(bb, fill);
            }
            dc.draw_collapse_arrow(pos, bb.width - 50.0, bb.height, opened);
            dc.draw_text(display, label_bb, TextAlign::Left);
        });
        opened
    }
}
