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

/// Cursor that places items top-to-bottom inside a window.
///
/// Every item reports its size through [`LayoutCursor::item_size`], which
/// moves the cursor to the start of the next line. [`LayoutCursor::same_line`]
/// rewinds it to the end of the previous item so the next one sits beside it.
#[derive(Clone, Debug)]
pub struct LayoutCursor {
    start: Vec2f,
    cursor: Vec2f,
    prev_line: Vec2f,
    current_line_height: f32,
    prev_line_height: f32,
    item_spacing: Vec2f,
    item_widths: Vec<f32>,
}

impl Default for LayoutCursor {
    fn default() -> Self {
        Self {
            start: vec2(0.0, 0.0),
            cursor: vec2(0.0, 0.0),
            prev_line: vec2(0.0, 0.0),
            current_line_height: 0.0,
            prev_line_height: 0.0,
            item_spacing: vec2(0.0, 0.0),
            item_widths: Vec::new(),
        }
    }
}

impl LayoutCursor {
    /// Rewinds to `start` and installs the window's default item width.
    pub fn reset(&mut self, start: Vec2f, item_spacing: Vec2f, item_width: f32) {
        self.start = start;
        self.cursor = start;
        self.prev_line = start;
        self.current_line_height = 0.0;
        self.prev_line_height = 0.0;
        self.item_spacing = item_spacing;
        self.item_widths.clear();
        self.item_widths.push(item_width);
    }

    /// Where the next item goes, relative to the window origin.
    pub fn cursor(&self) -> Vec2f { self.cursor }

    /// End of the previous item, where a same-line item would start.
    pub fn prev_line(&self) -> Vec2f { self.prev_line }

    /// Records an item of `size` at the cursor and advances to the next line.
    pub fn item_size(&mut self, size: Vec2f) {
        let line_height = self.current_line_height.max(size.y);
        self.prev_line = vec2(self.cursor.x + size.x, self.cursor.y);
        self.cursor = vec2(self.start.x, self.cursor.y + line_height + self.item_spacing.y);
        self.prev_line_height = line_height;
        self.current_line_height = 0.0;
    }

    /// Places the next item on the previous line.
    ///
    /// With `column_x != 0` the item starts at that column, shifted by
    /// `spacing` when it is positive. Otherwise it follows the previous item
    /// after `spacing`, or after the default item spacing when `spacing` is
    /// `None` or negative.
    pub fn same_line(&mut self, column_x: f32, spacing: Option<f32>) {
        let x = if column_x != 0.0 {
            column_x + spacing.unwrap_or(0.0).max(0.0)
        } else {
            self.prev_line.x + spacing.filter(|s| *s >= 0.0).unwrap_or(self.item_spacing.x)
        };
        self.cursor = vec2(x, self.prev_line.y);
        self.current_line_height = self.prev_line_height;
    }

    /// Width given to sliders and other stretchable items.
    pub fn item_width(&self) -> f32 { *self.item_widths.last().expect("item width stack should never be empty") }

    /// Pushes a width for the following items.
    pub fn push_item_width(&mut self, width: f32) { self.item_widths.push(width); }

    /// Restores the previous item width.
    ///
    /// Panics when only the window default is left.
    pub fn pop_item_width(&mut self) {
        assert!(self.item_widths.len() > 1, "pop_item_width without a matching push_item_width");
        self.item_widths.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> LayoutCursor {
        let mut layout = LayoutCursor::default();
        layout.reset(vec2(8.0, 28.0), vec2(10.0, 5.0), 162.0);
        layout
    }

    #[test]
    fn items_stack_vertically() {
        let mut layout = cursor();
        layout.item_size(vec2(40.0, 20.0));
        assert_eq!(layout.cursor().x, 8.0);
        assert_eq!(layout.cursor().y, 53.0);
        layout.item_size(vec2(10.0, 14.0));
        assert_eq!(layout.cursor().y, 72.0);
    }

    #[test]
    fn same_line_follows_previous_item() {
        let mut layout = cursor();
        layout.item_size(vec2(40.0, 20.0));
        layout.same_line(0.0, None);
        assert_eq!(layout.cursor().x, 58.0);
        assert_eq!(layout.cursor().y, 28.0);

        // the taller neighbour keeps the line height
        layout.item_size(vec2(30.0, 10.0));
        assert_eq!(layout.cursor().y, 53.0);

        layout.same_line(0.0, Some(0.0));
        assert_eq!(layout.cursor().x, 88.0);
    }

    #[test]
    fn same_line_at_column() {
        let mut layout = cursor();
        layout.item_size(vec2(40.0, 20.0));
        layout.same_line(100.0, None);
        assert_eq!(layout.cursor().x, 100.0);
        layout.same_line(100.0, Some(6.0));
        assert_eq!(layout.cursor().x, 106.0);
        layout.same_line(100.0, Some(-6.0));
        assert_eq!(layout.cursor().x, 100.0);
    }

    #[test]
    fn spacing_item_adds_a_gap() {
        let mut layout = cursor();
        layout.item_size(vec2(0.0, 0.0));
        assert_eq!(layout.cursor().y, 33.0);
    }

    #[test]
    fn item_width_stack() {
        let mut layout = cursor();
        assert_eq!(layout.item_width(), 162.0);
        layout.push_item_width(40.0);
        assert_eq!(layout.item_width(), 40.0);
        layout.pop_item_width();
        assert_eq!(layout.item_width(), 162.0);
    }

    #[test]
    #[should_panic]
    fn popping_the_default_width_panics() {
        let mut layout = cursor();
        layout.pop_item_width();
    }
}
