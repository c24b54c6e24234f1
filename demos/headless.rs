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
// Runs the demo windows against a renderer that only counts what it is asked
// to draw, while a scripted mouse clicks, drags and double-clicks through them.
//
//   cargo run --example headless --features logging
use imdui_redux::*;
use std::collections::{BTreeMap, HashMap};

const GLYPH: Vec2f = Vec2f { x: 7.0, y: 14.0 };

#[derive(Default)]
struct CountingRenderer {
    output: (f32, f32),
    surfaces: HashMap<SurfaceId, (f32, f32)>,
    textures: HashMap<TextureId, (i32, i32)>,
    calls: BTreeMap<&'static str, usize>,
}

impl CountingRenderer {
    fn count(&mut self, kind: &'static str) { *self.calls.entry(kind).or_default() += 1; }
}

impl Renderer for CountingRenderer {
    fn set_font(&mut self, name: &str, size: f32) { log::info!("font {} {}px", name, size); }

    fn set_stroke_width(&mut self, _width: f32) {}

    fn output_size(&self) -> Vec2f { vec2(self.output.0, self.output.1) }

    fn resize(&mut self, width: f32, height: f32) { self.output = (width, height); }

    fn create_surface(&mut self, id: SurfaceId, width: f32, height: f32) -> Result<(), String> {
        if width > 4096.0 || height > 4096.0 {
            return Err(format!("{}x{} exceeds the surface limit", width, height));
        }
        self.surfaces.insert(id, (width, height));
        Ok(())
    }

    fn release_surface(&mut self, id: SurfaceId) { self.surfaces.remove(&id); }

    fn begin_draw(&mut self, _target: Target) { self.count("begin"); }

    fn end_draw(&mut self, _target: Target) { self.count("end"); }

    fn clear(&mut self, _target: Target, _color: Color) { self.count("clear"); }

    fn push_clip(&mut self, _target: Target, _rect: Rectf) { self.count("clip"); }

    fn pop_clip(&mut self, _target: Target) {}

    fn draw_point(&mut self, _target: Target, _color: Color, _pt: Vec2f) { self.count("point"); }

    fn draw_line(&mut self, _target: Target, _color: Color, _from: Vec2f, _to: Vec2f) { self.count("line"); }

    fn draw_rect(&mut self, _target: Target, _color: Color, _rect: Rectf, _filled: bool) { self.count("rect"); }

    fn draw_rounded_rect(&mut self, _target: Target, _color: Color, _rect: Rectf, _radius: Vec2f, _filled: bool) { self.count("rounded_rect"); }

    fn draw_ellipse(&mut self, _target: Target, _color: Color, _center: Vec2f, _radius: Vec2f, _filled: bool) { self.count("ellipse"); }

    fn draw_polygon(&mut self, _target: Target, _color: Color, _points: &[Vec2f], _filled: bool) { self.count("polygon"); }

    fn draw_polyline(&mut self, _target: Target, _color: Color, _points: &[Vec2f]) { self.count("polyline"); }

    fn draw_text(&mut self, target: Target, _color: Color, text: &str, _rect: Rectf, _align: TextAlign) {
        if target == Target::Main {
            log::debug!("overlay text: {:?}", text);
        }
        self.count("text");
    }

    fn measure_text(&self, text: &str) -> Vec2f { vec2(text.chars().count() as f32 * GLYPH.x, GLYPH.y) }

    fn create_texture(&mut self, id: TextureId, width: i32, height: i32, _pixels: &[u8]) -> Result<(), String> {
        self.textures.insert(id, (width, height));
        Ok(())
    }

    fn destroy_texture(&mut self, id: TextureId) { self.textures.remove(&id); }

    fn draw_texture(&mut self, _target: Target, _id: TextureId, _rect: Rectf) { self.count("texture"); }

    fn draw_surface(&mut self, _surface: SurfaceId, _rect: Rectf, _opacity: f32) { self.count("composite"); }
}

struct State {
    show_demo: bool,
    show_options: bool,
    show_style_editor: bool,
    slider: f32,
    check1: bool,
    check2: bool,
    radio: i32,
    col1: [f32; 3],
    no_title_bar: bool,
    no_border: bool,
    no_resize: bool,
    no_move: bool,
    fill_alpha: f32,
}

impl State {
    fn new() -> Self {
        Self {
            show_demo: true,
            show_options: true,
            show_style_editor: true,
            slider: 0.5,
            check1: false,
            check2: false,
            radio: 0,
            col1: [1.0, 0.0, 0.2],
            no_title_bar: false,
            no_border: true,
            no_resize: false,
            no_move: false,
            fill_alpha: 1.0,
        }
    }

    fn demo_window<R: Renderer>(&mut self, ctx: &mut Context<R>) {
        if !self.show_demo {
            return;
        }
        let opts = WindowOptions::default().pos(20.0, 20.0).size(400.0, 200.0);
        if ctx.begin_window("ImDui Demo", Some(&mut self.show_demo), opts) {
            ctx.text("Hello ImDui!");
            if ctx.button("I am a button.") {
                log::info!("button pressed");
            }
            if ctx.slider_float("slider", &mut self.slider, 0.0, 1.0) {
                log::info!("slider moved to {:.3}", self.slider);
            }
            ctx.checkbox("checkbox1", &mut self.check1);
            ctx.same_line_ex(100.0, None);
            ctx.checkbox("checkbox2", &mut self.check2);

            ctx.radio_button_value("radio a", &mut self.radio, 0);
            ctx.same_line_ex(100.0, None);
            ctx.radio_button_value("radio b", &mut self.radio, 1);
            ctx.same_line_ex(200.0, None);
            ctx.radio_button_value("radio c", &mut self.radio, 2);

            ctx.color_edit3("color editor 1", &mut self.col1);
            let fps = ctx.fps();
            ctx.text_fmt(format_args!("{:.0} fps", fps));
        }
        ctx.end_window();
    }

    fn options_window<R: Renderer>(&mut self, ctx: &mut Context<R>) {
        if !self.show_options {
            return;
        }
        let mut flags = WindowFlags::NONE;
        flags.set(WindowFlags::NO_TITLE_BAR, self.no_title_bar);
        flags.set(WindowFlags::NO_BORDER, self.no_border);
        flags.set(WindowFlags::NO_RESIZE, self.no_resize);
        flags.set(WindowFlags::NO_MOVE, self.no_move);
        let opts = WindowOptions::default().pos(20.0, 240.0).size(400.0, 300.0).opacity(self.fill_alpha).flags(flags);
        if ctx.begin_window("Window Options", Some(&mut self.show_options), opts) {
            ctx.text("I can eat glass and it doesn't hurt me.");
            ctx.spacing();
            if ctx.collapse("Help") {
                ctx.text("1. Double-click the title bar to collapse a window.");
                ctx.text("2. Drag the bottom-right corner to resize.");
                ctx.text("3. Drag empty space to move the window.");
            }
            if ctx.collapse("Window options##flags") {
                ctx.checkbox("no titlebar", &mut self.no_title_bar);
                ctx.same_line_ex(100.0, None);
                ctx.checkbox("no border", &mut self.no_border);
                ctx.checkbox("no resize", &mut self.no_resize);
                ctx.same_line_ex(100.0, None);
                ctx.checkbox("no move", &mut self.no_move);
                ctx.slider_float("fill alpha", &mut self.fill_alpha, 0.0, 1.0);
            }
        }
        ctx.end_window();
    }

    fn style_window<R: Renderer>(&mut self, ctx: &mut Context<R>) {
        if !self.show_style_editor {
            return;
        }
        let opts = WindowOptions::default().pos(642.0, 20.0).size(400.0, 570.0);
        if ctx.begin_window("Style Editor", Some(&mut self.show_style_editor), opts) {
            ctx.show_style_editor();
        }
        ctx.end_window();
    }

    fn frame<R: Renderer>(&mut self, ctx: &mut Context<R>) {
        ctx.new_frame();
        self.demo_window(ctx);
        self.options_window(ctx);
        self.style_window(ctx);
        ctx.begin(color(0.45, 0.55, 0.6, 1.0));
        ctx.render();
        ctx.end();
    }
}

enum Step {
    Move(f32, f32),
    Down(f32, f32),
    Up(f32, f32),
    Idle,
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let renderer = RendererHandle::new(CountingRenderer::default());
    let mut ctx = Context::new(renderer.clone());
    ctx.resize(1080.0, 720.0);

    let mut state = State::new();
    let script = [
        // press "I am a button."
        Step::Move(40.0, 80.0),
        Step::Down(40.0, 80.0),
        Step::Up(40.0, 80.0),
        // drag the slider to its right end
        Step::Move(100.0, 104.0),
        Step::Down(100.0, 104.0),
        Step::Move(300.0, 104.0),
        Step::Up(300.0, 104.0),
        // open the help section
        Step::Move(100.0, 305.0),
        Step::Down(100.0, 305.0),
        Step::Up(100.0, 305.0),
        // double-click the style editor title bar
        Step::Move(800.0, 30.0),
        Step::Down(800.0, 30.0),
        Step::Up(800.0, 30.0),
        Step::Down(800.0, 30.0),
        Step::Up(800.0, 30.0),
        // drag the demo window by its empty area
        Step::Move(380.0, 200.0),
        Step::Down(380.0, 200.0),
        Step::Move(420.0, 230.0),
        Step::Up(420.0, 230.0),
        Step::Idle,
    ];

    for step in &script {
        match *step {
            Step::Move(x, y) => ctx.input.mousemove(x, y),
            Step::Down(x, y) => ctx.input.mousedown(x, y),
            Step::Up(x, y) => ctx.input.mouseup(x, y),
            Step::Idle => {}
        }
        state.frame(&mut ctx);
    }

    println!("frames: {}", ctx.frame_count());
    println!("slider: {:.3}", state.slider);
    for window in ctx.windows() {
        let r = window.rect();
        println!(
            "window {:<16} at ({}, {}) size {}x{} collapsed: {}",
            window.name(),
            r.x,
            r.y,
            r.width,
            r.height,
            window.is_collapsed()
        );
    }
    renderer.scope(|r| {
        for (kind, count) in &r.calls {
            println!("{:>14}: {}", kind, count);
        }
        println!("live surfaces: {}", r.surfaces.len());
    });
}
