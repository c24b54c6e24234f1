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
use crate::*;

/// Picks the active, hovered or idle variant of a widget color.
pub(crate) fn widget_color(held: bool, hovered: bool, idle: ControlColor, hover: ControlColor, active: ControlColor) -> ControlColor {
    if held && hovered {
        active
    } else if hovered {
        hover
    } else {
        idle
    }
}

/// Draw helper bound to one window surface for the duration of a call.
///
/// A window whose surface could not be allocated has no target; every draw
/// then silently does nothing.
pub(crate) struct DrawCtx<'a, R: Renderer> {
    renderer: &'a mut R,
    target: Option<Target>,
    style: &'a Style,
    borders: bool,
}

impl<'a, R: Renderer> DrawCtx<'a, R> {
    pub(crate) fn new(renderer: &'a mut R, target: Option<Target>, style: &'a Style, borders: bool) -> Self { Self { renderer, target, style, borders } }

    pub(crate) fn style(&self) -> &Style { self.style }

    pub(crate) fn has_borders(&self) -> bool { self.borders }

    fn color(&self, role: ControlColor) -> Color { self.style.color(role) }

    pub(crate) fn push_clip(&mut self, rect: Rectf) {
        if let Some(target) = self.target {
            self.renderer.push_clip(target, rect);
        }
    }

    pub(crate) fn pop_clip(&mut self) {
        if let Some(target) = self.target {
            self.renderer.pop_clip(target);
        }
    }

    pub(crate) fn fill_rect(&mut self, rect: Rectf, color: Color) {
        if let Some(target) = self.target {
            self.renderer.draw_rect(target, color, rect, true);
        }
    }

    pub(crate) fn draw_box(&mut self, rect: Rectf, color: Color) {
        if let Some(target) = self.target {
            self.renderer.draw_rect(target, color, rect, false);
        }
    }

    pub(crate) fn fill_rounded_rect(&mut self, rect: Rectf, radius: f32, color: Color) {
        if let Some(target) = self.target {
            self.renderer.draw_rounded_rect(target, color, rect, vec2(radius, radius), true);
        }
    }

    pub(crate) fn draw_line(&mut self, from: Vec2f, to: Vec2f, color: Color) {
        if let Some(target) = self.target {
            self.renderer.draw_line(target, color, from, to);
        }
    }

    pub(crate) fn draw_ellipse(&mut self, center: Vec2f, radius: f32, color: Color, filled: bool) {
        if let Some(target) = self.target {
            self.renderer.draw_ellipse(target, color, center, vec2(radius, radius), filled);
        }
    }

    pub(crate) fn fill_triangle(&mut self, a: Vec2f, b: Vec2f, c: Vec2f, color: Color) {
        if let Some(target) = self.target {
            self.renderer.draw_triangle(target, color, a, b, c);
        }
    }

    pub(crate) fn draw_polyline(&mut self, points: &[Vec2f], color: Color) {
        if let Some(target) = self.target {
            self.renderer.draw_polyline(target, color, points);
        }
    }

    pub(crate) fn draw_text(&mut self, text: &str, rect: Rectf, align: TextAlign) {
        let color = self.color(ControlColor::Text);
        if let Some(target) = self.target {
            self.renderer.draw_text(target, color, text, rect, align);
        }
    }

    /// Fills `rect` with the role color and outlines it when the window shows borders.
    pub(crate) fn draw_frame(&mut self, rect: Rectf, role: ControlColor) {
        self.fill_rect(rect, self.color(role));
        if self.borders {
            self.draw_box(rect, self.color(ControlColor::Border));
        }
    }

    /// Chevron in front of a collapsing header; points down when open.
    pub(crate) fn draw_collapse_arrow(&mut self, pos: Vec2f, offset: f32, height: f32, open: bool) {
        let length = height * 0.8;
        let base = vec2(pos.x, pos.y + height * 0.1);
        let pts = if open {
            let shift = vec2(base.x - (length * 0.5 - 4.0), base.y - 4.0);
            [
                vec2(offset + shift.x, length / 2.0 + shift.y),
                vec2(offset + length / 2.0 + shift.x, length / 2.0 + 8.0 + shift.y),
                vec2(offset + length + shift.x, length / 2.0 + shift.y),
            ]
        } else {
            [vec2(offset + base.x, base.y), vec2(offset + 8.0 + base.x, length / 2.0 + base.y), vec2(offset + base.x, length + base.y)]
        };
        let color = self.color(ControlColor::Text);
        self.draw_polyline(&pts, color);
    }

    /// Box at the left of the title bar: a minus when expanded, a plus when collapsed.
    pub(crate) fn draw_window_state(&mut self, collapsed: bool) {
        let radius = 6.0;
        let half = self.style.title_bar_height / 2.0;
        let center = vec2(half, half);
        let text = self.color(ControlColor::Text);
        let bg = self.color(ControlColor::WindowBg);
        self.fill_rect(rect(half - radius, half - radius, radius * 2.0, radius * 2.0), text);
        self.draw_line(vec2(center.x - 4.0, center.y), vec2(center.x + 4.0, center.y), bg);
        if collapsed {
            self.draw_line(vec2(center.x, center.y - 4.0), vec2(center.x, center.y + 4.0), bg);
        }
    }

    /// Close button glyph: a filled square crossed by two diagonals.
    pub(crate) fn draw_close_glyph(&mut self, bb: Rectf, role: ControlColor) {
        self.fill_rect(bb, self.color(role));
        let text = self.color(ControlColor::Text);
        self.draw_line(vec2(bb.x + 4.0, bb.y + 4.0), vec2(bb.x + bb.width - 4.0, bb.y + bb.height - 4.0), text);
        self.draw_line(vec2(bb.x + bb.width - 4.0, bb.y + 4.0), vec2(bb.x + 4.0, bb.y + bb.height - 4.0), text);
    }
}
