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
use std::collections::HashMap;

/// Fixed advance of every glyph.
pub(crate) const GLYPH_WIDTH: f32 = 7.0;
/// Fixed line height.
pub(crate) const LINE_HEIGHT: f32 = 14.0;

fn r4(r: Rectf) -> [f32; 4] { [r.x, r.y, r.width, r.height] }

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCall {
    Begin(Target),
    End(Target),
    Clear(Target),
    Clip(Target, Option<[f32; 4]>),
    Rect { target: Target, color: Color, rect: [f32; 4], filled: bool },
    Shape { target: Target, color: Color, kind: &'static str },
    Text { target: Target, text: String, rect: [f32; 4], align: TextAlign },
    Texture { target: Target, id: TextureId, rect: [f32; 4] },
    Surface { id: SurfaceId, rect: [f32; 4], opacity: f32 },
}

/// Renderer that records every call and measures text with a fixed-width font.
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
    pub surfaces: HashMap<SurfaceId, (f32, f32)>,
    pub released: Vec<SurfaceId>,
    pub textures: HashMap<TextureId, (i32, i32)>,
    pub fail_surfaces: bool,
    pub font: Option<(String, f32)>,
    pub output: (f32, f32),
}

impl RecordingRenderer {
    pub fn calls_of<F: Fn(&DrawCall) -> bool>(&self, f: F) -> Vec<DrawCall> { self.calls.iter().filter(|c| f(c)).cloned().collect() }

    pub fn texts_on(&self, on: Target) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { target, text, .. } if *target == on => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn all_texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn filled_rects(&self, color: Color) -> Vec<[f32; 4]> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect { color: col, rect, filled: true, .. } if *col == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) { self.calls.clear(); }
}

impl Renderer for RecordingRenderer {
    fn set_font(&mut self, name: &str, size: f32) { self.font = Some((name.to_string(), size)); }

    fn set_stroke_width(&mut self, _width: f32) {}

    fn output_size(&self) -> Vec2f { vec2(self.output.0, self.output.1) }

    fn resize(&mut self, width: f32, height: f32) { self.output = (width, height); }

    fn create_surface(&mut self, id: SurfaceId, width: f32, height: f32) -> Result<(), String> {
        if self.fail_surfaces {
            return Err(String::from("out of video memory"));
        }
        self.surfaces.insert(id, (width, height));
        Ok(())
    }

    fn release_surface(&mut self, id: SurfaceId) {
        self.surfaces.remove(&id);
        self.released.push(id);
    }

    fn begin_draw(&mut self, target: Target) { self.calls.push(DrawCall::Begin(target)); }

    fn end_draw(&mut self, target: Target) { self.calls.push(DrawCall::End(target)); }

    fn clear(&mut self, target: Target, _color: Color) { self.calls.push(DrawCall::Clear(target)); }

    fn push_clip(&mut self, target: Target, rect: Rectf) { self.calls.push(DrawCall::Clip(target, Some(r4(rect)))); }

    fn pop_clip(&mut self, target: Target) { self.calls.push(DrawCall::Clip(target, None)); }

    fn draw_point(&mut self, target: Target, color: Color, _pt: Vec2f) { self.calls.push(DrawCall::Shape { target, color, kind: "point" }); }

    fn draw_line(&mut self, target: Target, color: Color, _from: Vec2f, _to: Vec2f) { self.calls.push(DrawCall::Shape { target, color, kind: "line" }); }

    fn draw_rect(&mut self, target: Target, color: Color, rect: Rectf, filled: bool) { self.calls.push(DrawCall::Rect { target, color, rect: r4(rect), filled }); }

    fn draw_rounded_rect(&mut self, target: Target, color: Color, _rect: Rectf, _radius: Vec2f, _filled: bool) {
        self.calls.push(DrawCall::Shape { target, color, kind: "rounded_rect" });
    }

    fn draw_ellipse(&mut self, target: Target, color: Color, _center: Vec2f, _radius: Vec2f, _filled: bool) {
        self.calls.push(DrawCall::Shape { target, color, kind: "ellipse" });
    }

    fn draw_polygon(&mut self, target: Target, color: Color, _points: &[Vec2f], _filled: bool) { self.calls.push(DrawCall::Shape { target, color, kind: "polygon" }); }

    fn draw_polyline(&mut self, target: Target, color: Color, _points: &[Vec2f]) { self.calls.push(DrawCall::Shape { target, color, kind: "polyline" }); }

    fn draw_text(&mut self, target: Target, _color: Color, text: &str, rect: Rectf, align: TextAlign) {
        self.calls.push(DrawCall::Text { target, text: text.to_string(), rect: r4(rect), align });
    }

    fn measure_text(&self, text: &str) -> Vec2f { vec2(text.chars().count() as f32 * GLYPH_WIDTH, LINE_HEIGHT) }

    fn create_texture(&mut self, id: TextureId, width: i32, height: i32, _pixels: &[u8]) -> Result<(), String> {
        self.textures.insert(id, (width, height));
        Ok(())
    }

    fn destroy_texture(&mut self, id: TextureId) { self.textures.remove(&id); }

    fn draw_texture(&mut self, target: Target, id: TextureId, rect: Rectf) { self.calls.push(DrawCall::Texture { target, id, rect: r4(rect) }); }

    fn draw_surface(&mut self, id: SurfaceId, rect: Rectf, opacity: f32) { self.calls.push(DrawCall::Surface { id, rect: r4(rect), opacity }); }
}

pub(crate) fn assert_rect_eq(actual: Rectf, expected: Rectf) {
    assert_eq!(actual.x, expected.x, "x");
    assert_eq!(actual.y, expected.y, "y");
    assert_eq!(actual.width, expected.width, "width");
    assert_eq!(actual.height, expected.height, "height");
}

pub(crate) type TestContext = Context<RecordingRenderer>;

pub(crate) fn test_context() -> TestContext { Context::new(RendererHandle::new(RecordingRenderer::default())) }
