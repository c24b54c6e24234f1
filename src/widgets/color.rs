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

const CHANNELS: [(&str, &str); 4] = [("X", "R:%3.0f"), ("Y", "G:%3.0f"), ("Z", "B:%3.0f"), ("W", "A:%3.0f")];

fn to_byte(v: f32) -> i32 { (v * 255.0 + 0.5) as i32 }

impl<R: Renderer> Context<R> {
    /// Color swatch; hovering it shows the components in a tooltip.
    ///
    /// Returns `true` on the click edge. `small_height` drops the vertical
    /// frame padding and `outline_border` draws a widget-background rim.
    #[inline(never)]
    pub fn color_button(&mut self, col: Color, small_height: bool, outline_border: bool) -> bool {
        if self.skip_items() {
            return false;
        }
        let fp = self.style.frame_padding;
        let square = self.measure("").y;
        let bb = rect_at(self.cursor(), vec2(square + fp.x * 2.0, square + if small_height { 0.0 } else { fp.y * 2.0 }));
        self.item_size(vec2(bb.width, bb.height));

        let idx = self.current_index();
        let hovered = self.is_hovered(idx, bb);
        let pressed = hovered && self.event.mouse_clicked;

        let rim = self.style.color(ControlColor::WidgetBg);
        self.draw(|dc| {
            if outline_border {
                dc.fill_rect(bb, rim);
                dc.fill_rect(rect(bb.x + 1.0, bb.y + 1.0, bb.width - 2.0, bb.height - 2.0), col);
            } else {
                dc.fill_rect(bb, col);
            }
        });

        if hovered {
            self.tooltip_fmt(format_args!(
                "Color:\n({:.2},{:.2},{:.2},{:.2})\n#{:02X}{:02X}{:02X}{:02X}",
                col.r,
                col.g,
                col.b,
                col.a,
                to_byte(col.r),
                to_byte(col.g),
                to_byte(col.b),
                to_byte(col.a)
            ));
        }
        pressed
    }

    /// RGB editor; see [`Context::color_edit4`].
    pub fn color_edit3(&mut self, label: &str, col: &mut [f32; 3]) -> bool {
        let mut col4 = [col[0], col[1], col[2], 1.0];
        let changed = self.color_edit4(label, &mut col4, false);
        col.copy_from_slice(&col4[..3]);
        changed
    }

    /// Per-channel 0..255 sliders followed by a swatch and the label.
    ///
    /// The alpha slider is only shown, and alpha only written back, when
    /// `alpha` is set. `col` is updated only when a slider moved.
    #[inline(never)]
    pub fn color_edit4(&mut self, label: &str, col: &mut [f32; 4], alpha: bool) -> bool {
        if self.skip_items() {
            return false;
        }
        let fp = self.style.frame_padding;
        let inner = self.style.item_inner_spacing;
        let square = self.style.font_size + fp.x * 2.0;
        let display = Label::parse(label).display();
        let text_size = self.measure(display);

        let mut bytes = col.map(to_byte);
        let components = if alpha { 4 } else { 3 };
        let n = components as f32;

        let w_all = self.item_width() - (square + inner.x);
        let w_one = ((w_all - (fp.x * 2.0 + inner.x) * (n - 1.0)) / n).trunc().max(1.0);
        let w_last = (w_all - (w_one + fp.x * 2.0 + inner.x) * (n - 1.0)).trunc().max(1.0);

        let mut changed = false;
        self.push_item_width(w_one);
        for (c, (suffix, format)) in CHANNELS.iter().enumerate().take(components) {
            if c + 1 == components {
                self.push_item_width(w_last);
            }
            let slider = format!("##{}_{}", label, suffix);
            changed |= self.slider_int_ex(&slider, &mut bytes[c], 0, 255, format);
            if c + 1 < components {
                self.same_line_ex(0.0, Some(0.0));
            }
        }
        self.pop_item_width();
        self.pop_item_width();

        self.same_line_ex(0.0, Some(0.0));
        self.color_button(color(col[0], col[1], col[2], 1.0), false, true);

        if !display.is_empty() {
            self.same_line();
            let c = self.cursor();
            let bb = rect(c.x, c.y + fp.y, text_size.x, text_size.y);
            self.draw(|dc| dc.draw_text(display, bb, TextAlign::Left));
            self.item_size(text_size);
        }

        if changed {
            for c in 0..components {
                col[c] = bytes[c] as f32 / 255.0;
            }
        }
        changed
    }

    /// Editor window body listing every style color with a revert button.
    #[inline(never)]
    pub fn show_style_editor(&mut self) {
        let defaults = Style::default();
        if self.button("Revert Style") {
            self.set_style(&defaults);
        }
        for role in ControlColor::ALL {
            let mut rgba = self.style.color(role).to_array();
            if self.color_edit4(role.name(), &mut rgba, true) {
                self.style.set_color(role, Color::from_array(rgba));
            }
            if self.style.color(role) != defaults.color(role) {
                self.same_line();
                if self.button(&format!("Revert##{}", role.name())) {
                    self.style.set_color(role, defaults.color(role));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_renderer::*;
    use crate::*;

    fn opts() -> WindowOptions { WindowOptions::default().pos(0.0, 0.0).size(400.0, 600.0) }

    #[test]
    fn swatch_shows_tooltip_while_hovered() {
        let mut ctx = test_context();
        let swatch = color(1.0, 0.5, 0.0, 1.0);
        ctx.input.mousemove(12.0, 35.0);
        ctx.frame(|ctx| ctx.window("W", None, opts(), |ctx| {
            ctx.color_button(swatch, false, true);
        }));
        ctx.renderer_handle().scope_mut(|r| r.clear_calls());
        ctx.frame(|ctx| ctx.window("W", None, opts(), |ctx| {
            ctx.color_button(swatch, false, true);
            assert_eq!(ctx.cursor().y, 28.0 + 22.0 + 5.0);
        }));
        let texts = ctx.renderer_handle().scope(|r| r.texts_on(Target::Main));
        assert_eq!(texts, vec![String::from("Color:\n(1.00,0.50,0.00,1.00)\n#FF8000FF")]);
        // swatches never claim the hovered widget
        assert_eq!(ctx.hovered_id(), None);

        let inner = ctx.renderer_handle().scope(|r| r.filled_rects(swatch));
        assert_eq!(inner, vec![[9.0, 29.0, 22.0, 20.0]]);
    }

    #[test]
    fn small_swatch_without_outline() {
        let mut ctx = test_context();
        let swatch = color(0.2, 0.4, 0.6, 1.0);
        ctx.frame(|ctx| ctx.window("W", None, opts(), |ctx| {
            ctx.color_button(swatch, true, false);
        }));
        let rects = ctx.renderer_handle().scope(|r| r.filled_rects(swatch));
        assert_eq!(rects, vec![[8.0, 28.0, 24.0, 14.0]]);
    }

    fn edit_frame(ctx: &mut TestContext, col: &mut [f32; 4]) -> bool {
        let mut changed = false;
        ctx.frame(|ctx| ctx.window("W", None, opts(), |ctx| changed = ctx.color_edit4("Tint", col, true)));
        changed
    }

    #[test]
    fn color_edit_writes_back_dragged_channel() {
        let mut ctx = test_context();
        let mut col = [0.0, 0.0, 0.0, 1.0];
        assert!(!edit_frame(&mut ctx, &mut col));
        assert_eq!(col, [0.0, 0.0, 0.0, 1.0]);

        // red slider starts at the window padding; drag far left then far right
        ctx.input.mousemove(20.0, 35.0);
        edit_frame(&mut ctx, &mut col);
        ctx.input.mousedown(20.0, 35.0);
        edit_frame(&mut ctx, &mut col);
        ctx.input.mousemove(-100.0, 35.0);
        edit_frame(&mut ctx, &mut col);
        assert_eq!(col[0], 0.0);
        ctx.input.mousemove(1000.0, 35.0);
        assert!(edit_frame(&mut ctx, &mut col));
        assert_eq!(col, [1.0, 0.0, 0.0, 1.0]);
        ctx.input.mouseup(1000.0, 35.0);
        edit_frame(&mut ctx, &mut col);

        let texts = ctx.renderer_handle().scope(|r| r.all_texts());
        assert!(texts.contains(&String::from("R:255")));
        assert!(texts.contains(&String::from("A:255")));
        assert!(texts.contains(&String::from("Tint")));
        assert!(texts.iter().all(|t| !t.contains("##")));
    }

    #[test]
    fn color_edit3_keeps_three_channels() {
        let mut ctx = test_context();
        let mut col = [0.25, 0.5, 0.75];
        ctx.frame(|ctx| ctx.window("W", None, opts(), |ctx| {
            assert!(!ctx.color_edit3("Rgb", &mut col));
        }));
        assert_eq!(col, [0.25, 0.5, 0.75]);
        let texts = ctx.renderer_handle().scope(|r| r.all_texts());
        assert!(texts.contains(&String::from("B:191")));
        assert!(!texts.iter().any(|t| t.starts_with("A:")));
    }

    #[test]
    fn style_editor_reverts_changed_colors() {
        let mut ctx = test_context();
        ctx.style_mut().set_color(ControlColor::Border, color(0.0, 1.0, 0.0, 1.0));
        ctx.frame(|ctx| ctx.window("Style", None, opts(), |ctx| ctx.show_style_editor()));
        let texts = ctx.renderer_handle().scope(|r| r.all_texts());
        assert_eq!(texts.iter().filter(|t| t.as_str() == "Revert").count(), 1);
        assert!(texts.contains(&String::from("Color_TooltipBg")));

        ctx.style_mut().set_color(ControlColor::Text, color(1.0, 0.0, 0.0, 1.0));
        // the "Revert Style" button sits at the top left
        ctx.input.mousemove(20.0, 35.0);
        ctx.frame(|ctx| ctx.window("Style", None, opts(), |ctx| ctx.show_style_editor()));
        ctx.input.mousedown(20.0, 35.0);
        ctx.frame(|ctx| ctx.window("Style", None, opts(), |ctx| ctx.show_style_editor()));
        ctx.input.mouseup(20.0, 35.0);
        ctx.frame(|ctx| ctx.window("Style", None, opts(), |ctx| ctx.show_style_editor()));
        assert_eq!(ctx.style().color(ControlColor::Border), Style::default().color(ControlColor::Border));
        assert_eq!(ctx.style().color(ControlColor::Text), Style::default().color(ControlColor::Text));
    }

    #[test]
    fn style_revert_reaches_renderer() {
        let mut ctx = test_context();
        let mut mono = Style::default();
        mono.font_name = String::from("Mono");
        mono.font_size = 20.0;
        ctx.set_style(&mono);
        assert_eq!(ctx.renderer_handle().scope(|r| r.font.clone()), Some((String::from("Mono"), 20.0)));

        // font size does not move the button under the fixed-width test renderer
        ctx.input.mousemove(20.0, 35.0);
        ctx.frame(|ctx| ctx.window("Style", None, opts(), |ctx| ctx.show_style_editor()));
        ctx.input.mousedown(20.0, 35.0);
        ctx.frame(|ctx| ctx.window("Style", None, opts(), |ctx| ctx.show_style_editor()));
        ctx.input.mouseup(20.0, 35.0);
        ctx.frame(|ctx| ctx.window("Style", None, opts(), |ctx| ctx.show_style_editor()));

        let defaults = Style::default();
        assert_eq!(ctx.style().font_name, defaults.font_name);
        assert_eq!(ctx.renderer_handle().scope(|r| r.font.clone()), Some((defaults.font_name.clone(), defaults.font_size)));
    }
}
