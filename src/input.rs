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

/// Seconds between two clicks that still count as a double click.
pub const DOUBLE_CLICK_TIME: f32 = 0.30;
/// Largest distance in pixels between the two clicks of a double click.
pub const DOUBLE_CLICK_MAX_DIST: f32 = 6.0;
/// Frame time assumed until the host reports a real one.
pub const DEFAULT_DELTA_TIME: f32 = 1.0 / 60.0;

/// Raw mouse state accumulated from platform callbacks between two frames.
#[derive(Clone, Debug)]
pub struct Input {
    mouse_pos: Vec2f,
    mouse_down: bool,
    mouse_pressed: bool,
    wheel: i32,
    delta_time: f32,
    double_click_time: f32,
    double_click_max_dist: f32,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            mouse_pos: vec2(-1.0, -1.0),
            mouse_down: false,
            mouse_pressed: false,
            wheel: 0,
            delta_time: DEFAULT_DELTA_TIME,
            double_click_time: DOUBLE_CLICK_TIME,
            double_click_max_dist: DOUBLE_CLICK_MAX_DIST,
        }
    }
}

impl Input {
    /// Records the latest cursor position.
    pub fn mousemove(&mut self, x: f32, y: f32) { self.mouse_pos = vec2(x, y); }

    /// Records a button press at the given position.
    pub fn mousedown(&mut self, x: f32, y: f32) {
        self.mousemove(x, y);
        self.mouse_down = true;
        // kept until the next frame so a press released before it is still seen
        self.mouse_pressed = true;
    }

    /// Records a button release at the given position.
    pub fn mouseup(&mut self, x: f32, y: f32) {
        self.mousemove(x, y);
        self.mouse_down = false;
    }

    /// Accumulates wheel steps.
    pub fn wheel(&mut self, steps: i32) { self.wheel += steps; }

    /// Sets the time elapsed since the previous frame, in seconds.
    pub fn set_delta_time(&mut self, seconds: f32) {
        assert!(seconds >= 0.0, "frame time cannot be negative");
        self.delta_time = seconds;
    }

    /// Overrides the double click time threshold.
    pub fn set_double_click_time(&mut self, seconds: f32) { self.double_click_time = seconds; }

    /// Overrides the double click distance threshold.
    pub fn set_double_click_max_dist(&mut self, pixels: f32) { self.double_click_max_dist = pixels; }

    /// Latest cursor position.
    pub fn mouse_pos(&self) -> Vec2f { self.mouse_pos }

    /// Whether the button is currently held.
    pub fn is_mouse_down(&self) -> bool { self.mouse_down }

    pub(crate) fn epilogue(&mut self) {
        self.mouse_pressed = false;
        self.wheel = 0;
    }
}

/// Per-frame snapshot of the mouse derived from [`Input`].
#[derive(Clone, Debug)]
pub struct Event {
    /// Cursor position this frame.
    pub mouse_pos: Vec2f,
    /// Cursor position last frame.
    pub mouse_pos_prev: Vec2f,
    /// `mouse_pos - mouse_pos_prev`.
    pub mouse_delta: Vec2f,
    /// Whether the button is held.
    pub mouse_down: bool,
    /// A press started since the previous frame.
    pub mouse_clicked: bool,
    /// Where the last click landed.
    pub mouse_clicked_pos: Vec2f,
    /// This click completed a double click.
    pub mouse_double_clicked: bool,
    /// Seconds the button has been held; `-1` when up.
    pub mouse_down_time: f32,
    /// Wheel steps since the previous frame.
    pub mouse_wheel: i32,
    time: f64,
    clicked_time: f64,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            mouse_pos: vec2(-1.0, -1.0),
            mouse_pos_prev: vec2(-1.0, -1.0),
            mouse_delta: vec2(0.0, 0.0),
            mouse_down: false,
            mouse_clicked: false,
            mouse_clicked_pos: vec2(0.0, 0.0),
            mouse_double_clicked: false,
            mouse_down_time: -1.0,
            mouse_wheel: 0,
            time: 0.0,
            clicked_time: f64::NEG_INFINITY,
        }
    }
}

impl Event {
    /// Seconds accumulated from the frame times reported so far.
    pub fn time(&self) -> f64 { self.time }

    pub(crate) fn normalize(&mut self, input: &Input) {
        self.time += input.delta_time as f64;

        self.mouse_pos_prev = self.mouse_pos;
        self.mouse_pos = input.mouse_pos;
        self.mouse_delta = vec2(self.mouse_pos.x - self.mouse_pos_prev.x, self.mouse_pos.y - self.mouse_pos_prev.y);

        self.mouse_down = input.mouse_down;
        self.mouse_down_time = match (input.mouse_down, self.mouse_down_time < 0.0) {
            (false, _) => -1.0,
            (true, true) => 0.0,
            (true, false) => self.mouse_down_time + input.delta_time,
        };
        self.mouse_clicked = input.mouse_pressed || self.mouse_down_time == 0.0;
        self.mouse_wheel = input.wheel;

        self.mouse_double_clicked = false;
        if self.mouse_clicked {
            let dx = self.mouse_pos.x - self.mouse_clicked_pos.x;
            let dy = self.mouse_pos.y - self.mouse_clicked_pos.y;
            let near = (dx * dx + dy * dy).sqrt() < input.double_click_max_dist;
            if self.time - self.clicked_time < input.double_click_time as f64 && near {
                self.mouse_double_clicked = true;
                self.clicked_time = f64::NEG_INFINITY;
                log::trace!("double click at ({}, {})", self.mouse_pos.x, self.mouse_pos.y);
            } else {
                self.clicked_time = self.time;
            }
            self.mouse_clicked_pos = self.mouse_pos;
        }
    }
}
