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
use super::*;
use crate::draw_context::{widget_color, DrawCtx};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Outcome of hit-testing one widget this frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    /// The button was released over the widget that captured it.
    pub pressed: bool,
    /// The cursor is over the widget in the top-most window.
    pub hovered: bool,
    /// The widget owns the mouse and the button is still down.
    pub held: bool,
}

const FPS_SAMPLES: usize = 10;

struct FpsCounter {
    stamps: VecDeque<Instant>,
    last_shown: Option<Instant>,
    fps: f32,
}

impl FpsCounter {
    fn new() -> Self { Self { stamps: VecDeque::with_capacity(FPS_SAMPLES + 1), last_shown: None, fps: 0.0 } }

    fn tick(&mut self, now: Instant) {
        self.stamps.push_back(now);
        if self.stamps.len() > FPS_SAMPLES {
            self.stamps.pop_front();
        }
        let due = self.last_shown.is_none_or(|t| now.duration_since(t) > Duration::from_secs(1));
        if due && self.stamps.len() > 1 {
            let span = now.duration_since(self.stamps[0]).as_secs_f32();
            if span > 0.0 {
                self.fps = (self.stamps.len() - 1) as f32 / span;
                self.last_shown = Some(now);
            }
        }
    }
}

/// Primary entry point used to drive the UI over a renderer implementation.
pub struct Context<R: Renderer> {
    pub(crate) canvas: Canvas<R>,
    pub(crate) style: Style,
    pub(crate) event: Event,
    pub(crate) id_seed: IdSeed,
    pub(crate) hovered_id: Option<Id>,
    pub(crate) active_id: Option<Id>,
    pub(crate) hovered_window: Option<usize>,
    /// Back-to-front; the last window is drawn on top.
    pub(crate) windows: Vec<Window<R>>,
    pub(crate) current: Option<usize>,
    pub(crate) tooltip: String,
    bg_image: Option<String>,
    fps: FpsCounter,
    frame: usize,

    /// Raw input fed by the platform layer.
    pub input: Input,
}

impl<R: Renderer> Context<R> {
    /// Creates a new UI context around the provided renderer.
    pub fn new(renderer: RendererHandle<R>) -> Self {
        let style = Style::default();
        let mut canvas = Canvas::from(renderer);
        canvas.apply_style(&style);
        Self {
            canvas,
            style,
            event: Event::default(),
            id_seed: IdSeed::default(),
            hovered_id: None,
            active_id: None,
            hovered_window: None,
            windows: Vec::new(),
            current: None,
            tooltip: String::new(),
            bg_image: None,
            fps: FpsCounter::new(),
            frame: 0,
            input: Input::default(),
        }
    }

    /// Returns a handle to the underlying renderer.
    pub fn renderer_handle(&self) -> RendererHandle<R> { self.canvas.renderer_handle() }

    /// Returns the underlying canvas.
    pub fn canvas(&self) -> &Canvas<R> { &self.canvas }

    /// Returns the underlying canvas mutably, e.g. to register images.
    pub fn canvas_mut(&mut self) -> &mut Canvas<R> { &mut self.canvas }

    /// Current style.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the style and forwards font and stroke settings to the renderer.
    pub fn set_style(&mut self, style: &Style) {
        self.style = style.clone();
        self.canvas.apply_style(&self.style);
    }

    /// Mutable access to the style. Font and stroke changes only reach the
    /// renderer through [`Context::set_style`].
    pub fn style_mut(&mut self) -> &mut Style { &mut self.style }

    /// Mouse snapshot of the current frame.
    pub fn event(&self) -> &Event { &self.event }

    /// Number of frames started so far.
    pub fn frame_count(&self) -> usize { self.frame }

    /// Frames per second averaged over the last few frames, refreshed once a second.
    pub fn fps(&self) -> f32 { self.fps.fps }

    /// Widget under the cursor, as reported by the widgets declared so far this frame.
    pub fn hovered_id(&self) -> Option<Id> { self.hovered_id }

    /// Widget that owns the mouse.
    pub fn active_id(&self) -> Option<Id> { self.active_id }

    /// Name of the top-most window under the cursor.
    pub fn hovered_window(&self) -> Option<&str> { self.hovered_window.map(|idx| self.windows[idx].name()) }

    /// Every window, back-to-front.
    pub fn windows(&self) -> impl Iterator<Item = &Window<R>> { self.windows.iter() }

    /// Looks a window up by name.
    pub fn find_window(&self, name: &str) -> Option<&Window<R>> { self.windows.iter().find(|w| w.name == name) }

    /// Image stretched over the whole output behind every window; `None` removes it.
    pub fn set_bg_image(&mut self, name: Option<&str>) { self.bg_image = name.map(str::to_string); }

    /// Forwards a change of output size to the renderer.
    pub fn resize(&mut self, width: f32, height: f32) { self.canvas.with_renderer(|r| r.resize(width, height)); }

    /// Starts drawing into the main target and clears it.
    pub fn begin(&mut self, clear: Color) {
        self.canvas.with_renderer(|r| {
            r.begin_draw(Target::Main);
            r.clear(Target::Main, clear);
        });
    }

    /// Finishes drawing into the main target.
    pub fn end(&mut self) { self.canvas.with_renderer(|r| r.end_draw(Target::Main)); }

    /// Runs one whole frame: [`Context::new_frame`], `f`, then [`Context::render`].
    pub fn frame<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.new_frame();
        f(self);
        self.render();
    }

    /// Starts a frame: derives this frame's mouse event, finds the hovered
    /// window and brings it to the front when it was clicked.
    #[inline(never)]
    pub fn new_frame(&mut self) {
        assert!(self.current.is_none(), "new_frame called while window `{}` is still open", self.current_window().name);
        self.frame += 1;
        self.hovered_id = None;
        self.tooltip.clear();
        self.fps.tick(Instant::now());

        self.event.normalize(&self.input);
        self.input.epilogue();

        for w in &mut self.windows {
            w.was_visible = w.visible;
            w.visible = false;
        }

        let pos = self.event.mouse_pos;
        self.hovered_window = self.windows.iter().rposition(|w| w.was_visible && pt_in_rect(pos, w.hit_rect(self.style.title_bar_height)));

        if self.event.mouse_clicked {
            if let Some(idx) = self.hovered_window {
                self.bring_to_front(idx);
                self.hovered_window = Some(self.windows.len() - 1);
            }
        }
    }

    fn bring_to_front(&mut self, idx: usize) {
        if idx + 1 == self.windows.len() {
            return;
        }
        let window = self.windows.remove(idx);
        log::trace!("window `{}` brought to front", window.name);
        self.windows.push(window);
    }

    /// Composites every window declared this frame, then the tooltip.
    #[inline(never)]
    pub fn render(&mut self) {
        assert!(self.current.is_none(), "render called while window `{}` is still open", self.current_window().name);

        if let Some(bg) = &self.bg_image {
            let size = self.canvas.output_size();
            self.canvas.draw_image(Target::Main, bg, rect(0.0, 0.0, size.x, size.y));
        }

        let composites: Vec<_> = self
            .windows
            .iter()
            .filter(|w| w.visible)
            .filter_map(|w| w.surface().map(|s| (s.id(), w.rect, w.opacity)))
            .collect();
        self.canvas.with_renderer(|r| {
            for (id, rect, opacity) in composites {
                r.draw_surface(id, rect, opacity);
            }
        });

        if !self.tooltip.is_empty() {
            let size = self.canvas.measure_text(&self.tooltip);
            let pad = vec2(self.style.frame_padding.x * 2.0, self.style.frame_padding.y * 2.0);
            let pos = vec2(self.event.mouse_pos.x + 32.0, self.event.mouse_pos.y + 16.0);
            let bb = rect(pos.x - pad.x, pos.y - pad.y, size.x + pad.x, size.y + pad.y);
            let (bg, fg) = (self.style.color(ControlColor::TooltipBg), self.style.color(ControlColor::Text));
            let tooltip = &self.tooltip;
            self.canvas.with_renderer(|r| {
                r.draw_rounded_rect(Target::Main, bg, bb, vec2(5.0, 5.0), true);
                r.draw_text(Target::Main, fg, tooltip, bb, TextAlign::Center);
            });
        }

        // a widget that captured the mouse and was not declared again cannot release it
        if !self.event.mouse_down && self.active_id.is_some() {
            log::trace!("dropping stale active widget {:?}", self.active_id);
            self.active_id = None;
        }
    }

    fn create_window(&mut self, name: &str, opts: &WindowOptions) -> usize {
        let pos = opts.pos.unwrap_or(vec2(DEFAULT_WINDOW_POS.0, DEFAULT_WINDOW_POS.1));
        let size = opts.size.unwrap_or(vec2(DEFAULT_WINDOW_SIZE.0, DEFAULT_WINDOW_SIZE.1));
        let surface = match self.canvas.create_surface(size) {
            Ok(surface) => Some(surface),
            Err(e) => {
                log::error!("cannot allocate surface for window `{}`: {}", name, e);
                None
            }
        };
        log::debug!("creating window `{}` at ({}, {}) size {}x{}", name, pos.x, pos.y, size.x, size.y);
        self.windows.push(Window::new(name, rect_at(pos, size), surface));
        self.windows.len() - 1
    }

    /// Opens the window `name` for widget declarations, creating it on first use.
    ///
    /// Returns `false` when the window is collapsed; widgets declared anyway
    /// are skipped. [`Context::end_window`] must be called in both cases.
    /// When `open` is given the title bar shows a close button that toggles it.
    #[inline(never)]
    pub fn begin_window(&mut self, name: &str, open: Option<&mut bool>, opts: WindowOptions) -> bool {
        if let Some(idx) = self.current {
            panic!("begin_window(`{}`) while window `{}` is still open", name, self.windows[idx].name);
        }
        let idx = match self.windows.iter().position(|w| w.name == name) {
            Some(idx) => idx,
            None => self.create_window(name, &opts),
        };
        self.current = Some(idx);

        let default_alpha = self.style.default_window_alpha;
        let window = &mut self.windows[idx];
        window.flags = opts.flags;
        window.opacity = match opts.opacity {
            Some(alpha) if alpha >= 0.0 => alpha,
            _ => default_alpha,
        };
        window.visible = true;
        window.item_width_default = if window.rect.width > 0.0 { (window.rect.width * 0.65).floor() } else { 250.0 };

        self.update_collapse(idx);
        self.update_move(idx);
        let grip = self.update_resize(idx);

        let title_h = if opts.flags.has_title_bar() { self.style.title_bar_height } else { 0.0 };
        let start = vec2(self.style.window_padding.x, title_h + self.style.window_padding.y);
        let window = &mut self.windows[idx];
        window.layout.reset(start, self.style.item_spacing, window.item_width_default);

        self.draw_window_chrome(idx, grip);
        if opts.flags.has_title_bar() {
            if let Some(open) = open {
                self.close_button(idx, open);
            }
        }
        let size = self.windows[idx].rect;
        self.draw(|dc| dc.push_clip(rect(0.0, title_h, size.width, (size.height - title_h).max(0.0))));
        !self.windows[idx].collapsed
    }

    fn update_collapse(&mut self, idx: usize) {
        let hovered = self.hovered_window == Some(idx);
        let window = &mut self.windows[idx];
        if !window.flags.has_title_bar() {
            window.collapsed = false;
            return;
        }
        let title = rect(window.rect.x, window.rect.y, window.rect.width, self.style.title_bar_height);
        if hovered && self.event.mouse_double_clicked && pt_in_rect(self.event.mouse_pos, title) {
            window.collapsed = !window.collapsed;
            log::trace!("window `{}` collapsed: {}", window.name, window.collapsed);
        }
    }

    fn update_move(&mut self, idx: usize) {
        let move_id = self.windows[idx].part_id(&mut self.id_seed, WindowPart::Move);
        if self.active_id != Some(move_id) {
            return;
        }
        if self.event.mouse_down {
            let window = &mut self.windows[idx];
            if window.flags.is_movable() {
                window.rect = translate_rect(window.rect, self.event.mouse_delta);
            }
        } else {
            self.active_id = None;
        }
    }

    /// Handles the resize grip; returns its color when it is shown.
    fn update_resize(&mut self, idx: usize) -> Option<Color> {
        let window = &self.windows[idx];
        if window.collapsed || !window.flags.is_resizable() {
            return None;
        }
        let grip = self.style.resize_grip_size;
        let local = rect(window.rect.width - grip.x, window.rect.height - grip.y, grip.x, grip.y);
        let id = self.windows[idx].part_id(&mut self.id_seed, WindowPart::Resize);
        let i = self.interact(idx, local, id, false);
        if i.held {
            let window = &self.windows[idx];
            let min = self.style.window_min_size;
            let size = vec2(
                (window.rect.width + self.event.mouse_delta.x).max(min.x),
                (window.rect.height + self.event.mouse_delta.y).max(min.y),
            );
            if size.x != window.rect.width || size.y != window.rect.height {
                self.windows[idx].resize(&mut self.canvas, size);
            }
        }
        let role = if i.held {
            ControlColor::ResizeGripActive
        } else if i.hovered {
            ControlColor::ResizeGripHovered
        } else {
            ControlColor::ResizeGrip
        };
        Some(self.style.color(role))
    }

    fn draw_window_chrome(&mut self, idx: usize, grip: Option<Color>) {
        let window = &self.windows[idx];
        let (w, h) = (window.rect.width, window.rect.height);
        let collapsed = window.collapsed;
        let flags = window.flags;
        let caption = Label::parse(&window.name).display().to_string();
        let target = window.target();
        if let Some(target) = target {
            self.canvas.with_renderer(|r| {
                r.begin_draw(target);
                r.clear(target, color(0.0, 0.0, 0.0, 0.0));
            });
        }
        self.draw(|dc| {
            let style = dc.style();
            let title_bar = rect(0.0, 0.0, w, style.title_bar_height);
            let title_text = rect(20.0, 0.0, w, style.title_bar_height);
            let (border, title_collapsed, bg, title, rounding) = (
                style.color(ControlColor::Border),
                style.color(ControlColor::TitleBarCollapsed),
                style.color(ControlColor::WindowBg),
                style.color(ControlColor::TitleBar),
                style.window_rounding,
            );
            let grip_size = style.resize_grip_size;
            if collapsed {
                dc.fill_rect(title_bar, title_collapsed);
                if flags.has_border() {
                    dc.draw_box(title_bar, border);
                }
            } else {
                let body = rect(0.0, 0.0, w, h);
                if rounding > 0.0 {
                    dc.fill_rounded_rect(body, rounding, bg);
                } else {
                    dc.fill_rect(body, bg);
                }
                if let Some(grip) = grip {
                    dc.fill_triangle(vec2(w - grip_size.x, h), vec2(w, h), vec2(w, h - grip_size.y), grip);
                }
                if flags.has_title_bar() {
                    dc.fill_rect(title_bar, title);
                }
                if flags.has_border() {
                    dc.draw_box(body, border);
                }
            }
            if flags.has_title_bar() {
                dc.draw_window_state(collapsed);
                dc.draw_text(&caption, title_text, TextAlign::Left);
            }
        });
    }

    fn close_button(&mut self, idx: usize, open: &mut bool) -> bool {
        let id = self.windows[idx].part_id(&mut self.id_seed, WindowPart::Close);
        let th = self.style.title_bar_height;
        let bb = rect(self.windows[idx].rect.width - 20.0 + 2.0, 2.0, th - 4.0, th - 4.0);
        let i = self.interact(idx, bb, id, false);
        let role = widget_color(i.held, i.hovered, ControlColor::Button, ControlColor::ButtonHovered, ControlColor::ButtonActive);
        self.draw(|dc| dc.draw_close_glyph(bb, role));
        if i.pressed {
            *open = !*open;
            log::trace!("close button of `{}` toggled open to {}", self.windows[idx].name, *open);
        }
        i.pressed
    }

    /// Closes the window opened by the matching [`Context::begin_window`].
    ///
    /// A click on the window that no widget claimed starts dragging it.
    #[inline(never)]
    pub fn end_window(&mut self) {
        let idx = self.current.expect("end_window called without a matching begin_window");
        self.draw(|dc| dc.pop_clip());
        if let Some(target) = self.windows[idx].target() {
            self.canvas.with_renderer(|r| r.end_draw(target));
        }
        let hit = self.windows[idx].hit_rect(self.style.title_bar_height);
        if self.active_id.is_none()
            && self.hovered_id.is_none()
            && self.hovered_window == Some(idx)
            && self.event.mouse_clicked
            && pt_in_rect(self.event.mouse_pos, hit)
        {
            let move_id = self.windows[idx].part_id(&mut self.id_seed, WindowPart::Move);
            self.active_id = Some(move_id);
        }
        self.current = None;
    }

    /// Declares a whole window: `f` only runs while the window is expanded.
    pub fn window<F: FnOnce(&mut Self)>(&mut self, name: &str, open: Option<&mut bool>, opts: WindowOptions, f: F) {
        if self.begin_window(name, open, opts) {
            f(self);
        }
        self.end_window();
    }

    pub(crate) fn current_index(&self) -> usize { self.current.expect("widgets must be declared between begin_window and end_window") }

    pub(crate) fn current_window(&self) -> &Window<R> { &self.windows[self.current_index()] }

    pub(crate) fn current_window_mut(&mut self) -> &mut Window<R> {
        let idx = self.current_index();
        &mut self.windows[idx]
    }

    /// Whether widgets of the current window are skipped this frame.
    pub(crate) fn skip_items(&self) -> bool { self.current_window().collapsed }

    /// Id of `label` in the current window.
    pub fn get_id(&mut self, label: &str) -> Id {
        let idx = self.current_index();
        self.windows[idx].get_id(&mut self.id_seed, label)
    }

    /// Layout cursor of the current window, in window coordinates.
    pub fn cursor(&self) -> Vec2f { self.current_window().layout.cursor() }

    pub(crate) fn measure(&self, text: &str) -> Vec2f { self.canvas.measure_text(text) }

    pub(crate) fn item_size(&mut self, size: Vec2f) {
        if self.skip_items() {
            return;
        }
        self.current_window_mut().layout.item_size(size);
    }

    /// Places the next item beside the previous one, after the default spacing.
    pub fn same_line(&mut self) { self.same_line_ex(0.0, None); }

    /// Places the next item on the previous line, at `column_x` when it is
    /// non-zero, otherwise after the previous item with `spacing` pixels
    /// (the default item spacing when `None`).
    pub fn same_line_ex(&mut self, column_x: f32, spacing: Option<f32>) {
        if self.skip_items() {
            return;
        }
        self.current_window_mut().layout.same_line(column_x, spacing);
    }

    /// Adds an empty line of item spacing.
    pub fn spacing(&mut self) { self.item_size(vec2(0.0, 0.0)); }

    /// Sets the width of the following sliders; a non-positive width selects the window default.
    pub fn push_item_width(&mut self, width: f32) {
        let window = self.current_window_mut();
        let width = if width > 0.0 { width } else { window.item_width_default };
        window.layout.push_item_width(width);
    }

    /// Restores the item width in effect before the matching push.
    pub fn pop_item_width(&mut self) { self.current_window_mut().layout.pop_item_width(); }

    /// Width of stretchable items in the current window.
    pub fn item_width(&self) -> f32 { self.current_window().layout.item_width() }

    /// Sets the tooltip drawn next to the cursor at the end of this frame.
    pub fn tooltip(&mut self, text: &str) { self.tooltip = format_bounded(TOOLTIP_BUF_LEN, format_args!("{}", text)); }

    /// Formatted variant of [`Context::tooltip`].
    pub fn tooltip_fmt(&mut self, args: fmt::Arguments<'_>) { self.tooltip = format_bounded(TOOLTIP_BUF_LEN, args); }

    /// Hit-tests the widget `id` occupying `bb` (window coordinates) in the
    /// current window and updates the hot and active widgets.
    ///
    /// A widget becomes active when clicked and reports `pressed` when the
    /// button is released over it. With `repeat`, a hovered widget also
    /// reports `pressed` while any widget is active.
    pub fn widget_interaction(&mut self, bb: Rectf, id: Id, repeat: bool) -> Interaction {
        let idx = self.current_index();
        self.interact(idx, bb, id, repeat)
    }

    pub(crate) fn is_hovered(&self, idx: usize, bb: Rectf) -> bool {
        let screen = translate_rect(bb, self.windows[idx].origin());
        self.hovered_window == Some(idx) && pt_in_rect(self.event.mouse_pos, screen)
    }

    fn interact(&mut self, idx: usize, bb: Rectf, id: Id, repeat: bool) -> Interaction {
        let hovered = self.is_hovered(idx, bb);
        let mut pressed = false;
        if hovered {
            self.hovered_id = Some(id);
            if self.event.mouse_clicked {
                self.active_id = Some(id);
            } else if repeat && self.active_id.is_some() {
                pressed = true;
            }
        }
        let mut held = false;
        if self.active_id == Some(id) {
            if self.event.mouse_down {
                held = true;
            } else {
                pressed |= hovered;
                self.active_id = None;
            }
        }
        Interaction { pressed, hovered, held }
    }

    /// Immediate click test used by toggles: pressed on the click edge, no capture.
    pub(crate) fn click_interaction(&mut self, bb: Rectf, id: Id) -> Interaction {
        let idx = self.current_index();
        let hovered = self.is_hovered(idx, bb);
        if hovered {
            self.hovered_id = Some(id);
        }
        Interaction { pressed: hovered && self.event.mouse_clicked, hovered, held: false }
    }

    /// Runs `f` with a draw helper bound to the current window's surface.
    pub(crate) fn draw<T, F: FnOnce(&mut DrawCtx<'_, R>) -> T>(&mut self, f: F) -> T {
        let window = self.current_window();
        let target = window.target();
        let borders = window.flags.has_border();
        let style = &self.style;
        self.canvas.with_renderer(|r| {
            let mut dc = DrawCtx::new(r, target, style, borders);
            f(&mut dc)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_renderer::*;

    fn context() -> Context<RecordingRenderer> { Context::new(RendererHandle::new(RecordingRenderer::default())) }

    fn declare(ctx: &mut Context<RecordingRenderer>, name: &str, x: f32, y: f32) {
        ctx.window(name, None, WindowOptions::default().pos(x, y).size(200.0, 150.0), |_| {});
    }

    fn order(ctx: &Context<RecordingRenderer>) -> Vec<String> { ctx.windows().map(|w| w.name().to_string()).collect() }

    #[test]
    fn window_defaults() {
        let mut ctx = context();
        ctx.frame(|ctx| {
            assert!(ctx.begin_window("Defaults", None, WindowOptions::default()));
            assert_eq!(ctx.item_width(), 162.0);
            assert_eq!(ctx.cursor().x, 8.0);
            assert_eq!(ctx.cursor().y, 28.0);
            ctx.end_window();
        });
        let w = ctx.find_window("Defaults").unwrap();
        assert_rect_eq(w.rect(), rect(60.0, 60.0, 250.0, 250.0));
        assert_eq!(w.opacity(), 1.0);
        assert!(w.is_visible());
    }

    #[test]
    fn placement_only_applies_on_creation() {
        let mut ctx = context();
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        ctx.frame(|ctx| declare(ctx, "A", 300.0, 300.0));
        assert_rect_eq(ctx.find_window("A").unwrap().rect(), rect(10.0, 10.0, 200.0, 150.0));
    }

    #[test]
    fn hover_is_cleared_outside_windows() {
        let mut ctx = context();
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        ctx.input.mousemove(50.0, 50.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        assert_eq!(ctx.hovered_window(), Some("A"));

        ctx.input.mousemove(500.0, 500.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        assert_eq!(ctx.hovered_window(), None);
        assert_eq!(ctx.hovered_id(), None);
    }

    #[test]
    fn undeclared_windows_are_not_hit() {
        let mut ctx = context();
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        ctx.frame(|_| {});
        ctx.input.mousemove(50.0, 50.0);
        ctx.frame(|_| {});
        assert_eq!(ctx.hovered_window(), None);
    }

    #[test]
    fn click_brings_window_to_front() {
        let mut ctx = context();
        ctx.frame(|ctx| {
            declare(ctx, "A", 10.0, 10.0);
            declare(ctx, "B", 100.0, 100.0);
        });
        assert_eq!(order(&ctx), ["A", "B"]);

        // overlap region, B is on top
        ctx.input.mousemove(150.0, 120.0);
        ctx.frame(|ctx| {
            declare(ctx, "A", 10.0, 10.0);
            declare(ctx, "B", 100.0, 100.0);
        });
        assert_eq!(ctx.hovered_window(), Some("B"));

        // A-only region
        ctx.input.mousedown(20.0, 40.0);
        ctx.frame(|ctx| {
            declare(ctx, "A", 10.0, 10.0);
            declare(ctx, "B", 100.0, 100.0);
        });
        assert_eq!(order(&ctx), ["B", "A"]);
        ctx.input.mouseup(20.0, 40.0);

        // overlap region now belongs to A
        ctx.input.mousemove(150.0, 120.0);
        ctx.frame(|ctx| {
            declare(ctx, "A", 10.0, 10.0);
            declare(ctx, "B", 100.0, 100.0);
        });
        assert_eq!(ctx.hovered_window(), Some("A"));
    }

    #[test]
    fn composites_back_to_front() {
        let mut ctx = context();
        ctx.frame(|ctx| {
            declare(ctx, "A", 10.0, 10.0);
            declare(ctx, "B", 100.0, 100.0);
        });
        let a = ctx.find_window("A").unwrap().surface().unwrap().id();
        let b = ctx.find_window("B").unwrap().surface().unwrap().id();
        let composited: Vec<_> = ctx
            .renderer_handle()
            .scope(|r| r.calls_of(|c| matches!(c, DrawCall::Surface { .. })))
            .into_iter()
            .filter_map(|c| match c {
                DrawCall::Surface { id, .. } => Some(id),
                _ => None,
            })
            .collect();
        assert_eq!(composited, vec![a, b]);
    }

    #[test]
    fn drag_on_empty_space_moves_window() {
        let mut ctx = context();
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        ctx.input.mousedown(100.0, 100.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        assert!(ctx.active_id().is_some());
        ctx.input.mousemove(130.0, 90.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        assert_rect_eq(ctx.find_window("A").unwrap().rect(), rect(40.0, 0.0, 200.0, 150.0));
        ctx.input.mouseup(130.0, 90.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        assert_eq!(ctx.active_id(), None);
    }

    #[test]
    fn no_move_flag_pins_window() {
        let mut ctx = context();
        let opts = WindowOptions::default().pos(10.0, 10.0).size(200.0, 150.0).flags(WindowFlags::NO_MOVE);
        ctx.frame(|ctx| ctx.window("A", None, opts.clone(), |_| {}));
        ctx.input.mousedown(100.0, 100.0);
        ctx.frame(|ctx| ctx.window("A", None, opts.clone(), |_| {}));
        ctx.input.mousemove(130.0, 90.0);
        ctx.frame(|ctx| ctx.window("A", None, opts.clone(), |_| {}));
        assert_rect_eq(ctx.find_window("A").unwrap().rect(), rect(10.0, 10.0, 200.0, 150.0));
    }

    #[test]
    fn double_click_on_title_bar_toggles_collapse() {
        let mut ctx = context();
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        ctx.input.mousedown(80.0, 15.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        ctx.input.mouseup(80.0, 15.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        assert!(!ctx.find_window("A").unwrap().is_collapsed());

        ctx.input.mousedown(80.0, 15.0);
        let mut expanded = true;
        ctx.frame(|ctx| {
            expanded = ctx.begin_window("A", None, WindowOptions::default());
            ctx.end_window();
        });
        assert!(!expanded);
        assert!(ctx.find_window("A").unwrap().is_collapsed());
    }

    #[test]
    fn double_click_outside_title_bar_does_nothing() {
        let mut ctx = context();
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        for _ in 0..2 {
            ctx.input.mousedown(80.0, 100.0);
            ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
            ctx.input.mouseup(80.0, 100.0);
            ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        }
        assert!(!ctx.find_window("A").unwrap().is_collapsed());
    }

    #[test]
    fn no_title_bar_never_collapses() {
        let mut ctx = context();
        let opts = WindowOptions::default().pos(10.0, 10.0).flags(WindowFlags::NO_TITLE_BAR);
        ctx.frame(|ctx| ctx.window("A", None, opts.clone(), |_| {}));
        for _ in 0..2 {
            ctx.input.mousedown(80.0, 15.0);
            ctx.frame(|ctx| ctx.window("A", None, opts.clone(), |_| {}));
            ctx.input.mouseup(80.0, 15.0);
            ctx.frame(|ctx| ctx.window("A", None, opts.clone(), |ctx| assert_eq!(ctx.cursor().y, 8.0)));
        }
        assert!(!ctx.find_window("A").unwrap().is_collapsed());
    }

    #[test]
    fn resize_grip_clamps_to_min_size() {
        let mut ctx = context();
        ctx.input.mousemove(200.0, 150.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        let old = ctx.find_window("A").unwrap().surface().unwrap().id();

        // grip covers the bottom-right 30x30 corner
        ctx.input.mousedown(200.0, 150.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        ctx.input.mousemove(0.0, 0.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));

        let w = ctx.find_window("A").unwrap();
        assert_rect_eq(w.rect(), rect(10.0, 10.0, 48.0, 48.0));
        let surface = w.surface().unwrap();
        assert_ne!(surface.id(), old);
        assert_eq!(surface.size().x, 48.0);
        assert!(ctx.renderer_handle().scope(|r| r.released.contains(&old)));
    }

    #[test]
    fn failed_resize_keeps_previous_surface() {
        let mut ctx = context();
        ctx.input.mousemove(200.0, 150.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        let old = ctx.find_window("A").unwrap().surface().unwrap().id();
        ctx.renderer_handle().scope_mut(|r| r.fail_surfaces = true);

        ctx.input.mousedown(200.0, 150.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        ctx.input.mousemove(220.0, 170.0);
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));

        let w = ctx.find_window("A").unwrap();
        assert_eq!(w.rect().width, 220.0);
        assert_eq!(w.surface().unwrap().id(), old);
    }

    #[test]
    fn window_without_surface_still_lays_out() {
        let mut ctx = context();
        ctx.renderer_handle().scope_mut(|r| r.fail_surfaces = true);
        ctx.frame(|ctx| {
            ctx.window("A", None, WindowOptions::default(), |ctx| {
                ctx.text("hello");
                assert_eq!(ctx.cursor().y, 28.0 + 14.0 + 5.0);
            })
        });
        assert!(ctx.find_window("A").unwrap().surface().is_none());
    }

    #[test]
    fn close_button_toggles_open() {
        let mut ctx = context();
        let mut open = true;
        let opts = WindowOptions::default().pos(10.0, 10.0).size(200.0, 150.0);
        ctx.frame(|ctx| ctx.window("A", Some(&mut open), opts.clone(), |_| {}));
        // close box spans x in [192, 208), y in [12, 28)
        ctx.input.mousedown(200.0, 20.0);
        ctx.frame(|ctx| ctx.window("A", Some(&mut open), opts.clone(), |_| {}));
        assert!(open);
        ctx.input.mouseup(200.0, 20.0);
        ctx.frame(|ctx| ctx.window("A", Some(&mut open), opts.clone(), |_| {}));
        assert!(!open);
    }

    #[test]
    fn content_is_clipped_below_title_bar() {
        let mut ctx = context();
        ctx.frame(|ctx| declare(ctx, "A", 10.0, 10.0));
        let target = Target::Surface(ctx.find_window("A").unwrap().surface().unwrap().id());
        let clips = ctx.renderer_handle().scope(|r| r.calls_of(|c| matches!(c, DrawCall::Clip(..))));
        assert_eq!(clips, vec![DrawCall::Clip(target, Some([0.0, 20.0, 200.0, 130.0])), DrawCall::Clip(target, None)]);
    }

    #[test]
    fn title_hides_suffix() {
        let mut ctx = context();
        ctx.frame(|ctx| declare(ctx, "Tools##left", 10.0, 10.0));
        let w = ctx.find_window("Tools##left").unwrap();
        assert_eq!(w.name(), "Tools##left");
        let target = Target::Surface(w.surface().unwrap().id());
        let texts = ctx.renderer_handle().scope(|r| r.texts_on(target));
        assert_eq!(texts, vec![String::from("Tools")]);
    }

    fn two_repeat_boxes(ctx: &mut Context<RecordingRenderer>) -> (Interaction, Interaction) {
        let mut got = (Interaction::default(), Interaction::default());
        ctx.frame(|ctx| {
            ctx.window("A", None, WindowOptions::default().pos(10.0, 10.0).size(200.0, 150.0), |ctx| {
                let a = ctx.get_id("a");
                got.0 = ctx.widget_interaction(rect(8.0, 28.0, 50.0, 20.0), a, true);
                let b = ctx.get_id("b");
                got.1 = ctx.widget_interaction(rect(8.0, 60.0, 50.0, 20.0), b, true);
            })
        });
        got
    }

    #[test]
    fn repeat_widget_presses_while_another_is_held() {
        let mut ctx = context();
        ctx.input.mousemove(30.0, 45.0);
        two_repeat_boxes(&mut ctx);

        ctx.input.mousedown(30.0, 45.0);
        let (a, b) = two_repeat_boxes(&mut ctx);
        assert_eq!(a, Interaction { pressed: false, hovered: true, held: true });
        assert_eq!(b, Interaction::default());

        // slide onto the second box without releasing
        ctx.input.mousemove(30.0, 80.0);
        for _ in 0..2 {
            let (a, b) = two_repeat_boxes(&mut ctx);
            assert_eq!(a, Interaction { pressed: false, hovered: false, held: true });
            assert_eq!(b, Interaction { pressed: true, hovered: true, held: false });
        }

        ctx.input.mouseup(30.0, 80.0);
        let (a, b) = two_repeat_boxes(&mut ctx);
        assert!(!a.held && !a.pressed);
        assert!(!b.held);
        assert_eq!(ctx.active_id(), None);
    }

    #[test]
    fn widget_label_cannot_alias_window_move() {
        let mut ctx = context();
        let opts = WindowOptions::default().pos(10.0, 10.0).size(200.0, 150.0);
        let declare = |ctx: &mut Context<RecordingRenderer>| {
            ctx.window("A", None, opts.clone(), |ctx| {
                let id = ctx.get_id("#MOVE");
                ctx.widget_interaction(rect(8.0, 28.0, 50.0, 20.0), id, false);
            })
        };
        ctx.input.mousemove(30.0, 45.0);
        ctx.frame(declare);
        ctx.input.mousedown(30.0, 45.0);
        ctx.frame(declare);
        ctx.input.mousemove(60.0, 75.0);
        ctx.frame(declare);
        ctx.frame(declare);
        assert_rect_eq(ctx.find_window("A").unwrap().rect(), rect(10.0, 10.0, 200.0, 150.0));
    }

    #[test]
    fn opacity_falls_back_to_style() {
        let mut ctx = context();
        ctx.style_mut().default_window_alpha = 0.75;
        ctx.frame(|ctx| ctx.window("A", None, WindowOptions::default().opacity(-1.0), |_| {}));
        assert_eq!(ctx.find_window("A").unwrap().opacity(), 0.75);
        ctx.frame(|ctx| ctx.window("A", None, WindowOptions::default().opacity(0.5), |_| {}));
        assert_eq!(ctx.find_window("A").unwrap().opacity(), 0.5);
    }

    #[test]
    fn tooltip_is_drawn_on_main_target() {
        let mut ctx = context();
        ctx.frame(|ctx| {
            ctx.window("A", None, WindowOptions::default(), |ctx| ctx.tooltip_fmt(format_args!("{} items", 3)));
        });
        let texts = ctx.renderer_handle().scope(|r| r.texts_on(Target::Main));
        assert_eq!(texts, vec![String::from("3 items")]);

        ctx.frame(|ctx| ctx.window("A", None, WindowOptions::default(), |_| {}));
        let texts = ctx.renderer_handle().scope(|r| r.texts_on(Target::Main));
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn fps_counter_refreshes_once_a_second() {
        let mut fps = FpsCounter::new();
        let start = Instant::now();
        for i in 0..12u64 {
            fps.tick(start + Duration::from_millis(i * 100));
        }
        // first refresh happened on the second tick, 100ms apart
        assert!((fps.fps - 10.0).abs() < 0.01);
        assert_eq!(fps.stamps.len(), FPS_SAMPLES);
    }

    #[test]
    #[should_panic]
    fn widgets_outside_windows_panic() {
        let mut ctx = context();
        ctx.new_frame();
        ctx.button("orphan");
    }

    #[test]
    #[should_panic]
    fn nested_windows_panic() {
        let mut ctx = context();
        ctx.new_frame();
        ctx.begin_window("A", None, WindowOptions::default());
        ctx.begin_window("B", None, WindowOptions::default());
    }
}
