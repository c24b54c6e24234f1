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
#![deny(missing_docs)]
//! `imdui-redux` is the interaction and layout core of an immediate mode GUI.
//!
//! The host declares its widgets every frame between [`Context::new_frame`]
//! and [`Context::render`]. The context keeps the little state that has to
//! survive between frames: window placement and stacking order, which widget
//! is hot or active, per window boolean storage and the widget id registry.
//! Everything visual goes through a [`Renderer`] implementation supplied by
//! the host; each window draws into its own off-screen surface and the
//! surfaces are composited back-to-front at the end of the frame.
//!
//! ```ignore
//! let mut ctx = Context::new(RendererHandle::new(my_renderer));
//! let mut opened = true;
//! loop {
//!     ctx.input.mousemove(x, y);
//!     ctx.new_frame();
//!     if ctx.begin_window("Demo", Some(&mut opened), WindowOptions::default()) {
//!         if ctx.button("Click me") {
//!             log::info!("clicked");
//!         }
//!     }
//!     ctx.end_window();
//!     ctx.begin(color(0.1, 0.1, 0.1, 1.0));
//!     ctx.render();
//!     ctx.end();
//! }
//! ```
mod canvas;
mod context;
mod draw_context;
mod format;
mod idmngr;
mod input;
mod layout;
mod storage;
mod widgets;
mod window;

#[cfg(test)]
mod test_renderer;

pub use canvas::*;
pub use context::*;
pub use format::*;
pub use idmngr::*;
pub use input::*;
pub use layout::*;
pub use rs_math3d::*;
pub use storage::*;
pub use widgets::*;
pub use window::*;

use bitflags::*;
use std::sync::{Arc, RwLock};

/// Axis aligned rectangle in pixels; position plus extent.
pub type Rectf = Rect<f32>;

/// Shorthand for building a [`Vec2f`].
pub fn vec2(x: f32, y: f32) -> Vec2f { Vec2f::new(x, y) }

/// Shorthand for building a [`Rectf`] from its origin and extent.
pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectf { Rectf { x, y, width, height } }

/// Builds a rectangle from a position and a size vector.
pub fn rect_at(pos: Vec2f, size: Vec2f) -> Rectf { rect(pos.x, pos.y, size.x, size.y) }

/// Returns `true` when `pt` lies inside `r`.
///
/// The left and top edges are inclusive, the right and bottom edges are not,
/// so two adjacent rectangles never both contain the same point.
pub fn pt_in_rect(pt: Vec2f, r: Rectf) -> bool { pt.x >= r.x && pt.x < r.x + r.width && pt.y >= r.y && pt.y < r.y + r.height }

/// Moves a rectangle by `offset`, keeping its extent.
pub fn translate_rect(r: Rectf, offset: Vec2f) -> Rectf { rect(r.x + offset.x, r.y + offset.y, r.width, r.height) }

#[derive(Default, Copy, Clone, Debug, PartialEq)]
/// RGBA color with floating point channels in `[0, 1]`.
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

/// Convenience constructor for [`Color`].
pub fn color(r: f32, g: f32, b: f32, a: f32) -> Color { Color { r, g, b, a } }

impl Color {
    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as f32 / 255.0,
            g: ((rgb >> 8) & 0xFF) as f32 / 255.0,
            b: (rgb & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [f32; 4] { [self.r, self.g, self.b, self.a] }

    /// Builds a color from `[r, g, b, a]`.
    pub fn from_array(c: [f32; 4]) -> Self { color(c[0], c[1], c[2], c[3]) }

    /// Quantizes every channel to a byte, rounding to nearest.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c * 255.0 + 0.5).clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[repr(u32)]
/// Named color roles used by the style table.
pub enum ControlColor {
    /// Text of every widget.
    Text = 0,
    /// Window and widget outlines.
    Border,
    /// Window background.
    WindowBg,
    /// Background of check boxes, sliders and swatches.
    WidgetBg,
    /// Check mark and radio dot.
    WidgetActive,
    /// Title bar of an expanded window.
    TitleBar,
    /// Title bar of a collapsed window.
    TitleBarCollapsed,
    /// Slider grab at rest.
    Slider,
    /// Slider grab while dragged.
    SliderActive,
    /// Button at rest.
    Button,
    /// Button under the cursor.
    ButtonHovered,
    /// Button being pressed.
    ButtonActive,
    /// Collapsing header at rest.
    Collapse,
    /// Collapsing header under the cursor.
    CollapseHovered,
    /// Collapsing header being pressed.
    CollapseActive,
    /// Resize grip at rest.
    ResizeGrip,
    /// Resize grip under the cursor.
    ResizeGripHovered,
    /// Resize grip being dragged.
    ResizeGripActive,
    /// Tooltip background.
    TooltipBg,
}

impl ControlColor {
    /// Number of color roles.
    pub const COUNT: usize = 19;

    /// Every role in table order.
    pub const ALL: [ControlColor; Self::COUNT] = [
        ControlColor::Text,
        ControlColor::Border,
        ControlColor::WindowBg,
        ControlColor::WidgetBg,
        ControlColor::WidgetActive,
        ControlColor::TitleBar,
        ControlColor::TitleBarCollapsed,
        ControlColor::Slider,
        ControlColor::SliderActive,
        ControlColor::Button,
        ControlColor::ButtonHovered,
        ControlColor::ButtonActive,
        ControlColor::Collapse,
        ControlColor::CollapseHovered,
        ControlColor::CollapseActive,
        ControlColor::ResizeGrip,
        ControlColor::ResizeGripHovered,
        ControlColor::ResizeGripActive,
        ControlColor::TooltipBg,
    ];

    /// Display name of the role, as shown by the style editor.
    pub fn name(self) -> &'static str {
        match self {
            ControlColor::Text => "Color_Text",
            ControlColor::Border => "Color_Border",
            ControlColor::WindowBg => "Color_WindowBg",
            ControlColor::WidgetBg => "Color_WidgetBg",
            ControlColor::WidgetActive => "Color_WidgetActive",
            ControlColor::TitleBar => "Color_TitleBar",
            ControlColor::TitleBarCollapsed => "Color_TitleBarCollapsed",
            ControlColor::Slider => "Color_Slider",
            ControlColor::SliderActive => "Color_SliderActive",
            ControlColor::Button => "Color_Button",
            ControlColor::ButtonHovered => "Color_ButtonHovered",
            ControlColor::ButtonActive => "Color_ButtonActive",
            ControlColor::Collapse => "Color_Collapse",
            ControlColor::CollapseHovered => "Color_CollapseHovered",
            ControlColor::CollapseActive => "Color_CollapseActive",
            ControlColor::ResizeGrip => "Color_ResizeGrip",
            ControlColor::ResizeGripHovered => "Color_ResizeGripHovered",
            ControlColor::ResizeGripActive => "Color_ResizeGripActive",
            ControlColor::TooltipBg => "Color_TooltipBg",
        }
    }

    /// Looks a role up by its display name.
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.iter().copied().find(|c| c.name() == name) }
}

/// Visual parameters shared by every window of a context.
#[derive(Clone, Debug)]
pub struct Style {
    /// Font family handed to the renderer.
    pub font_name: String,
    /// Font size in points, also used as the collapse arrow extent.
    pub font_size: f32,
    /// Width of lines and outlines.
    pub stroke_width: f32,
    /// Opacity used when a window does not specify one.
    pub default_window_alpha: f32,
    /// Space between the window edge and its content.
    pub window_padding: Vec2f,
    /// Smallest size a window can be resized to.
    pub window_min_size: Vec2f,
    /// Space between a widget frame and its content.
    pub frame_padding: Vec2f,
    /// Space between consecutive items.
    pub item_spacing: Vec2f,
    /// Space between the parts of a composite widget.
    pub item_inner_spacing: Vec2f,
    /// Corner radius of window backgrounds; `0` keeps them square.
    pub window_rounding: f32,
    /// Height of the window title bar.
    pub title_bar_height: f32,
    /// Extent of the bottom-right resize grip.
    pub resize_grip_size: Vec2f,
    /// Color table indexed by [`ControlColor`].
    pub colors: [Color; ControlColor::COUNT],
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_name: String::from("Arial"),
            font_size: 12.0,
            stroke_width: 1.0,
            default_window_alpha: 1.0,
            window_padding: vec2(8.0, 8.0),
            window_min_size: vec2(48.0, 48.0),
            frame_padding: vec2(5.0, 4.0),
            item_spacing: vec2(10.0, 5.0),
            item_inner_spacing: vec2(5.0, 5.0),
            window_rounding: 0.0,
            title_bar_height: 20.0,
            resize_grip_size: vec2(30.0, 30.0),
            colors: [
                Color::from_hex(0x000000),
                Color::from_hex(0xFF00FF),
                Color::from_hex(0xDCDCDC),
                Color::from_hex(0xFFFFFF),
                Color::from_hex(0x4296FA),
                Color::from_hex(0x7BB4F7),
                Color::from_hex(0xA0C8FF),
                Color::from_hex(0x64B4FF),
                Color::from_hex(0x4296FA),
                Color::from_hex(0x9FA8DA),
                Color::from_hex(0xB2B4D2),
                Color::from_hex(0x8B94C8),
                Color::from_hex(0x9FA8DA),
                Color::from_hex(0xB2B4D2),
                Color::from_hex(0x8B94C8),
                Color::from_hex(0x95A5A6),
                Color::from_hex(0xBDC3C7),
                Color::from_hex(0xABB7B7),
                Color::from_hex(0xD8FFC4),
            ],
        }
    }
}

impl Style {
    /// Color assigned to `role`.
    pub fn color(&self, role: ControlColor) -> Color { self.colors[role as usize] }

    /// Replaces the color assigned to `role`.
    pub fn set_color(&mut self, role: ControlColor, color: Color) { self.colors[role as usize] = color; }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    /// Options that control how a window behaves.
    pub struct WindowFlags : u32 {
        /// Hides the title bar; the window can no longer be collapsed.
        const NO_TITLE_BAR = 1;
        /// Skips the outlines of the window and its widgets.
        const NO_BORDER = 2;
        /// Hides the resize grip.
        const NO_RESIZE = 4;
        /// Prevents dragging the window around.
        const NO_MOVE = 8;
        /// Accepted for compatibility; windows never scroll.
        const NO_SCROLLBAR = 16;
        /// No special options.
        const NONE = 0;
    }
}

impl WindowFlags {
    /// Returns `true` when the title bar is shown.
    pub fn has_title_bar(&self) -> bool { !self.intersects(Self::NO_TITLE_BAR) }
    /// Returns `true` when outlines are drawn.
    pub fn has_border(&self) -> bool { !self.intersects(Self::NO_BORDER) }
    /// Returns `true` when the resize grip is active.
    pub fn is_resizable(&self) -> bool { !self.intersects(Self::NO_RESIZE) }
    /// Returns `true` when the window can be dragged.
    pub fn is_movable(&self) -> bool { !self.intersects(Self::NO_MOVE) }
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
/// Horizontal placement of text inside its layout box.
pub enum TextAlign {
    /// Flush with the left edge.
    Left,
    /// Centered horizontally.
    Center,
    /// Flush with the right edge.
    Right,
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle of an off-screen surface owned by the renderer.
pub struct SurfaceId(u32);

impl SurfaceId {
    /// Wraps a raw surface handle.
    pub const fn new(raw: u32) -> Self { Self(raw) }
    /// Raw handle value.
    pub const fn raw(self) -> u32 { self.0 }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle of a texture uploaded to the renderer.
pub struct TextureId(u32);

impl TextureId {
    /// Wraps a raw texture handle.
    pub const fn new(raw: u32) -> Self { Self(raw) }
    /// Raw handle value.
    pub const fn raw(self) -> u32 { self.0 }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Destination of a draw call.
pub enum Target {
    /// The host's output.
    Main,
    /// An off-screen window surface.
    Surface(SurfaceId),
}

/// Drawing backend used by the GUI core.
///
/// Every call is in pixels. Surfaces and textures are identified by handles
/// the core allocates before asking the renderer to create the resource.
pub trait Renderer {
    /// Selects the font used by [`Renderer::draw_text`] and [`Renderer::measure_text`].
    fn set_font(&mut self, name: &str, size: f32);
    /// Sets the width of outlines and lines.
    fn set_stroke_width(&mut self, width: f32);
    /// Size of the host output in pixels.
    fn output_size(&self) -> Vec2f;
    /// Called when the host output changes size.
    fn resize(&mut self, width: f32, height: f32);

    /// Allocates an off-screen surface of the given size under `id`.
    fn create_surface(&mut self, id: SurfaceId, width: f32, height: f32) -> Result<(), String>;
    /// Frees the surface stored under `id`.
    fn release_surface(&mut self, id: SurfaceId);

    /// Starts recording into `target`.
    fn begin_draw(&mut self, target: Target);
    /// Finishes recording into `target`.
    fn end_draw(&mut self, target: Target);
    /// Fills the whole target with `color`.
    fn clear(&mut self, target: Target, color: Color);
    /// Restricts the following draws on `target` to `rect` until the matching pop.
    fn push_clip(&mut self, target: Target, rect: Rectf);
    /// Removes the clip rectangle pushed last on `target`.
    fn pop_clip(&mut self, target: Target);

    /// Draws a single pixel.
    fn draw_point(&mut self, target: Target, color: Color, pt: Vec2f);
    /// Draws a line segment.
    fn draw_line(&mut self, target: Target, color: Color, from: Vec2f, to: Vec2f);
    /// Draws an axis aligned rectangle, either filled or outlined.
    fn draw_rect(&mut self, target: Target, color: Color, rect: Rectf, filled: bool);
    /// Draws a rectangle with elliptic corners of the given radii.
    fn draw_rounded_rect(&mut self, target: Target, color: Color, rect: Rectf, radius: Vec2f, filled: bool);
    /// Draws an ellipse around `center`.
    fn draw_ellipse(&mut self, target: Target, color: Color, center: Vec2f, radius: Vec2f, filled: bool);
    /// Draws a closed polygon.
    fn draw_polygon(&mut self, target: Target, color: Color, points: &[Vec2f], filled: bool);
    /// Draws an open chain of line segments.
    fn draw_polyline(&mut self, target: Target, color: Color, points: &[Vec2f]);
    /// Draws a filled triangle.
    fn draw_triangle(&mut self, target: Target, color: Color, a: Vec2f, b: Vec2f, c: Vec2f) { self.draw_polygon(target, color, &[a, b, c], true); }

    /// Draws `text` inside `rect` with the requested alignment; the text is vertically centered.
    fn draw_text(&mut self, target: Target, color: Color, text: &str, rect: Rectf, align: TextAlign);
    /// Returns the extent of `text`. The height is one line even for empty text.
    fn measure_text(&self, text: &str) -> Vec2f;

    /// Uploads RGBA8 pixels under `id`.
    fn create_texture(&mut self, id: TextureId, width: i32, height: i32, pixels: &[u8]) -> Result<(), String>;
    /// Frees the texture stored under `id`.
    fn destroy_texture(&mut self, id: TextureId);
    /// Draws a texture stretched over `rect`.
    fn draw_texture(&mut self, target: Target, id: TextureId, rect: Rectf);

    /// Composites a window surface onto the main target.
    fn draw_surface(&mut self, surface: SurfaceId, rect: Rectf, opacity: f32);
}

/// Shared, thread-safe handle to a [`Renderer`].
pub struct RendererHandle<R: Renderer> {
    handle: Arc<RwLock<R>>,
}

// derive(Clone) would require R: Clone
impl<R: Renderer> Clone for RendererHandle<R> {
    fn clone(&self) -> Self { Self { handle: self.handle.clone() } }
}

impl<R: Renderer> RendererHandle<R> {
    /// Wraps a renderer inside an [`Arc<RwLock<...>>`] so it can be shared.
    pub fn new(renderer: R) -> Self { Self { handle: Arc::new(RwLock::new(renderer)) } }

    /// Executes the provided closure with a shared reference to the renderer.
    pub fn scope<Res, F: FnOnce(&R) -> Res>(&self, f: F) -> Res {
        match self.handle.read() {
            Ok(guard) => f(&*guard),
            // a panic while drawing leaves nothing half-written that reads could observe
            Err(poisoned) => f(&*poisoned.into_inner()),
        }
    }

    /// Executes the provided closure with a mutable reference to the renderer.
    pub fn scope_mut<Res, F: FnOnce(&mut R) -> Res>(&mut self, f: F) -> Res {
        match self.handle.write() {
            Ok(mut guard) => f(&mut *guard),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}
