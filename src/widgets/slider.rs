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

/// Maps between a slider value and the normalized position of its grab.
///
/// With `power != 1` the response is exponential on both sides of zero, so
/// a range straddling zero gets the same resolution near zero from either
/// direction. Both directions share one curve, which keeps the grab still
/// when a value set from outside is mapped back to the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderMapping {
    min: f32,
    max: f32,
    power: f32,
    precision: usize,
}

fn lerp(a: f32, b: f32, t: f32) -> f32 { a + (b - a) * t }

impl SliderMapping {
    /// Creates a mapping over `[min, max]`; `precision` is the number of decimals kept.
    pub fn new(min: f32, max: f32, power: f32, precision: usize) -> Self {
        assert!(power > 0.0, "slider power must be positive, got {}", power);
        Self { min, max, power, precision: precision.min(MAX_PRECISION) }
    }

    /// Either bound is at the `f32::MAX` sentinel; such sliders cannot be dragged.
    pub fn is_unbound(&self) -> bool { self.min == -f32::MAX || self.min == f32::MAX || self.max == -f32::MAX || self.max == f32::MAX }

    /// Normalized position of the value zero.
    pub fn linear_zero_pos(&self) -> f32 {
        if self.is_unbound() {
            return 0.0;
        }
        if self.min * self.max < 0.0 {
            let to_min = self.min.abs().powf(1.0 / self.power);
            let to_max = self.max.abs().powf(1.0 / self.power);
            to_min / (to_min + to_max)
        } else if self.min < 0.0 {
            1.0
        } else {
            0.0
        }
    }

    /// Value at the normalized position `t`, before rounding.
    pub fn value_from_normalized(&self, t: f32) -> f32 {
        let t = t.max(0.0).min(1.0);
        let zero = self.linear_zero_pos();
        if t < zero {
            let a = (1.0 - t / zero).powf(self.power);
            lerp(self.max.min(0.0), self.min, a)
        } else {
            let mut a = t;
            if (zero - 1.0).abs() > 1.0e-6 {
                a = (a - zero) / (1.0 - zero);
            }
            lerp(self.min.max(0.0), self.max, a.powf(self.power))
        }
    }

    /// Normalized position of `v`, clamped to the range first.
    pub fn normalized_from_value(&self, v: f32) -> f32 {
        let zero = self.linear_zero_pos();
        let v = v.max(self.min).min(self.max);
        if v < 0.0 {
            let span = self.max.min(0.0) - self.min;
            let f = if span > 0.0 { 1.0 - (v - self.min) / span } else { 0.0 };
            (1.0 - f.powf(1.0 / self.power)) * zero
        } else {
            let span = self.max - self.min.max(0.0);
            let f = if span > 0.0 { (v - self.min.max(0.0)) / span } else { 0.0 };
            zero + f.powf(1.0 / self.power) * (1.0 - zero)
        }
    }

    /// Rounds `v` to the step of the precision; exact halves round down.
    pub fn round(&self, v: f32) -> f32 {
        let step = 1.0 / 10f32.powi(self.precision as i32);
        let rem = v.rem_euclid(step);
        if rem <= step * 0.5 { v - rem } else { v + (step - rem) }
    }

    /// Width of the grab for a slider `width` pixels wide.
    pub fn grab_size(&self, width: f32) -> f32 {
        if self.precision > 0 || self.is_unbound() {
            10.0
        } else {
            (width / (self.max - self.min + 1.0)).max(8.0)
        }
    }
}

impl<R: Renderer> Context<R> {
    /// Slider over `[min, max]` with three decimals.
    pub fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool { self.slider_float_ex(label, value, min, max, "%.3f", 1.0) }

    /// Slider with a display `format` and an exponential response `power`.
    ///
    /// `format` is a printf-like pattern holding one `%f` conversion; its
    /// precision also sets the rounding step of dragged values. Passing
    /// `f32::MAX` or `-f32::MAX` as a bound disables dragging. Returns `true`
    /// when a drag changed the value this frame.
    #[inline(never)]
    pub fn slider_float_ex(&mut self, label: &str, value: &mut f32, min: f32, max: f32, format: &str, power: f32) -> bool {
        if self.skip_items() {
            return false;
        }
        let id = self.get_id(label);
        let display = Label::parse(label).display();
        let fp = self.style.frame_padding;
        let inner = self.style.item_inner_spacing;
        let w = self.item_width();
        let text_size = self.measure(display);

        let frame_bb = rect_at(self.cursor(), vec2(w + fp.x * 2.0, text_size.y + fp.y * 2.0));
        let slider_bb = rect(frame_bb.x + fp.x, frame_bb.y + fp.y, frame_bb.width - fp.x * 2.0, frame_bb.height - fp.y * 2.0);

        let mapping = SliderMapping::new(min, max, power, decimal_precision(format));
        let grab = mapping.grab_size(w);
        let effective_w = slider_bb.width - grab;
        let x1 = slider_bb.x + grab * 0.5;
        let x2 = slider_bb.x + slider_bb.width - grab * 0.5;

        let i = self.widget_interaction(slider_bb, id, false);
        self.item_size(vec2(frame_bb.width + inner.x + text_size.x, frame_bb.height));

        let mut changed = false;
        if i.held && !mapping.is_unbound() {
            let local = self.current_window().to_local(self.event.mouse_pos);
            let t = if effective_w > 0.0 { ((local.x - x1) / effective_w).max(0.0).min(1.0) } else { 0.0 };
            let new_value = mapping.round(mapping.value_from_normalized(t));
            if *value != new_value {
                *value = new_value;
                changed = true;
            }
        }

        let grab_bb = if mapping.is_unbound() {
            None
        } else {
            let grab_x = lerp(x1, x2, mapping.normalized_from_value(*value));
            let role = if self.active_id == Some(id) { ControlColor::SliderActive } else { ControlColor::Slider };
            Some((rect(grab_x - grab * 0.5, frame_bb.y + 2.0, grab, frame_bb.height - 3.0), self.style.color(role)))
        };

        let value_text = format_value(format, *value);
        let value_text = Label::parse(&value_text).display().to_string();
        let value_size = self.measure(&value_text);
        let value_bb = rect(slider_bb.x + slider_bb.width / 2.0 - value_size.x * 0.5, frame_bb.y + fp.y, value_size.x, value_size.y);
        let label_bb = rect(frame_bb.x + frame_bb.width + inner.x + fp.x, slider_bb.y, text_size.x, text_size.y);

        self.draw(|dc| {
            dc.draw_frame(frame_bb, ControlColor::WidgetBg);
            if let Some((bb, color)) = grab_bb {
                dc.fill_rect(bb, color);
            }
            if !value_text.is_empty() {
                dc.draw_text(&value_text, value_bb, TextAlign::Left);
            }
            if !display.is_empty() {
                dc.draw_text(display, label_bb, TextAlign::Left);
            }
        });
        changed
    }

    /// Integer slider showing the value without decimals.
    pub fn slider_int(&mut self, label: &str, value: &mut i32, min: i32, max: i32) -> bool { self.slider_int_ex(label, value, min, max, "%.0f") }

    /// Integer slider with a display `format`; dragged values are truncated toward zero.
    pub fn slider_int_ex(&mut self, label: &str, value: &mut i32, min: i32, max: i32, format: &str) -> bool {
        let mut v = *value as f32;
        let changed = self.slider_float_ex(label, &mut v, min as f32, max as f32, format, 1.0);
        *value = v as i32;
        changed
    }
}
