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

/// Placement and behavior requested by a [`Context::begin_window`] call.
///
/// Position and size only apply when the window is created; afterwards the
/// user owns them through dragging and resizing.
#[derive(Clone, Debug, Default)]
pub struct WindowOptions {
    /// Initial top-left corner; `(60, 60)` when absent.
    pub pos: Option<Vec2f>,
    /// Initial size; `(250, 250)` when absent.
    pub size: Option<Vec2f>,
    /// Composite opacity; the style default when absent or negative.
    pub opacity: Option<f32>,
    /// Behavior flags, re-applied on every call.
    pub flags: WindowFlags,
}

impl WindowOptions {
    /// Sets the initial position.
    pub fn pos(mut self, x: f32, y: f32) -> Self {
        self.pos = Some(vec2(x, y));
        self
    }

    /// Sets the initial size.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(vec2(width, height));
        self
    }

    /// Sets the composite opacity.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Sets the behavior flags.
    pub fn flags(mut self, flags: WindowFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Default top-left corner of a new window.
pub const DEFAULT_WINDOW_POS: (f32, f32) = (60.0, 60.0);
/// Default size of a new window.
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (250.0, 250.0);

/// Persistent state of one named window.
pub struct Window<R: Renderer> {
    pub(crate) name: String,
    pub(crate) rect: Rectf,
    pub(crate) flags: WindowFlags,
    pub(crate) opacity: f32,
    pub(crate) visible: bool,
    pub(crate) was_visible: bool,
    pub(crate) collapsed: bool,
    pub(crate) item_width_default: f32,
    pub(crate) layout: LayoutCursor,
    pub(crate) storage: Storage,
    ids: IdManager,
    surface: Option<Surface<R>>,
}

impl<R: Renderer> Window<R> {
    pub(crate) fn new(name: &str, rect: Rectf, surface: Option<Surface<R>>) -> Self {
        Self {
            name: name.to_string(),
            rect,
            flags: WindowFlags::NONE,
            opacity: 1.0,
            visible: false,
            was_visible: false,
            collapsed: false,
            item_width_default: 0.0,
            layout: LayoutCursor::default(),
            storage: Storage::default(),
            ids: IdManager::default(),
            surface,
        }
    }

    /// Unique name of the window.
    pub fn name(&self) -> &str { &self.name }

    /// Screen rectangle.
    pub fn rect(&self) -> Rectf { self.rect }

    /// Flags passed to the latest `begin_window`.
    pub fn flags(&self) -> WindowFlags { self.flags }

    /// Composite opacity.
    pub fn opacity(&self) -> f32 { self.opacity }

    /// Whether the window was declared during the current frame.
    pub fn is_visible(&self) -> bool { self.visible }

    /// Whether only the title bar is shown.
    pub fn is_collapsed(&self) -> bool { self.collapsed }

    /// Collapsing header and other per-widget values.
    pub fn storage(&self) -> &Storage { &self.storage }

    /// Backing surface, absent when allocation failed.
    pub fn surface(&self) -> Option<&Surface<R>> { self.surface.as_ref() }

    pub(crate) fn target(&self) -> Option<Target> { self.surface.as_ref().map(|s| Target::Surface(s.id())) }

    pub(crate) fn get_id(&mut self, seed: &mut IdSeed, label: &str) -> Id { self.ids.get_id(seed, label) }

    pub(crate) fn part_id(&mut self, seed: &mut IdSeed, part: WindowPart) -> Id { self.ids.get_part_id(seed, part) }

    /// Screen point in window local coordinates.
    pub(crate) fn to_local(&self, pt: Vec2f) -> Vec2f { vec2(pt.x - self.rect.x, pt.y - self.rect.y) }

    /// Area that catches the mouse; only the title bar while collapsed.
    pub(crate) fn hit_rect(&self, title_bar_height: f32) -> Rectf {
        if self.collapsed { rect(self.rect.x, self.rect.y, self.rect.width, title_bar_height) } else { self.rect }
    }

    pub(crate) fn origin(&self) -> Vec2f { vec2(self.rect.x, self.rect.y) }

    /// Changes the window size and reallocates its surface.
    ///
    /// On allocation failure the previous surface stays in place.
    pub(crate) fn resize(&mut self, canvas: &mut Canvas<R>, size: Vec2f) {
        self.rect.width = size.x;
        self.rect.height = size.y;
        match canvas.create_surface(size) {
            Ok(surface) => self.surface = Some(surface),
            Err(e) => log::error!("cannot resize surface of window `{}` to {}x{}: {}", self.name, size.x, size.y, e),
        }
    }
}
