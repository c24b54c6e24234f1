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
use std::collections::HashMap;

#[cfg(feature = "png_source")]
use png::{ColorType, Decoder};
#[cfg(feature = "png_source")]
use std::io::Cursor;

#[derive(Copy, Clone)]
/// Describes image bytes that can be uploaded to a texture.
pub enum ImageSource<'a> {
    /// Raw RGBA8 pixels.
    Raw {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Pixel data, `width * height * 4` bytes.
        pixels: &'a [u8],
    },
    #[cfg(feature = "png_source")]
    /// PNG encoded bytes.
    Png {
        /// Encoded file contents.
        bytes: &'a [u8],
    },
}

#[derive(Copy, Clone, Debug)]
struct CachedImage {
    texture: TextureId,
    width: i32,
    height: i32,
}

/// Off-screen render target owned by a window.
///
/// The renderer surface is released when this value is dropped.
pub struct Surface<R: Renderer> {
    id: SurfaceId,
    size: Vec2f,
    renderer: RendererHandle<R>,
}

impl<R: Renderer> Surface<R> {
    /// Renderer handle of the surface.
    pub fn id(&self) -> SurfaceId { self.id }

    /// Size the surface was allocated with.
    pub fn size(&self) -> Vec2f { self.size }
}

impl<R: Renderer> Drop for Surface<R> {
    fn drop(&mut self) {
        let id = self.id;
        log::trace!("releasing surface {}", id.raw());
        self.renderer.scope_mut(|r| r.release_surface(id));
    }
}

/// Thin layer over the renderer that owns surfaces and the image cache.
pub struct Canvas<R: Renderer> {
    renderer: RendererHandle<R>,
    next_surface_id: u32,
    next_texture_id: u32,
    images: HashMap<String, CachedImage>,
}

impl<R: Renderer> Canvas<R> {
    /// Creates a canvas that draws through `renderer`.
    pub fn from(renderer: RendererHandle<R>) -> Self { Self { renderer, next_surface_id: 1, next_texture_id: 1, images: HashMap::new() } }

    /// Returns a clone of the renderer handle.
    pub fn renderer_handle(&self) -> RendererHandle<R> { self.renderer.clone() }

    /// Runs `f` with exclusive access to the renderer.
    pub fn with_renderer<Res, F: FnOnce(&mut R) -> Res>(&mut self, f: F) -> Res { self.renderer.scope_mut(f) }

    /// Measures `text` with the current font.
    pub fn measure_text(&self, text: &str) -> Vec2f { self.renderer.scope(|r| r.measure_text(text)) }

    /// Size of the host output.
    pub fn output_size(&self) -> Vec2f { self.renderer.scope(|r| r.output_size()) }

    /// Pushes font and stroke settings from `style` to the renderer.
    pub fn apply_style(&mut self, style: &Style) {
        self.renderer.scope_mut(|r| {
            r.set_font(&style.font_name, style.font_size);
            r.set_stroke_width(style.stroke_width);
        });
    }

    /// Allocates a window surface of `size` pixels.
    pub fn create_surface(&mut self, size: Vec2f) -> Result<Surface<R>, String> {
        let id = SurfaceId::new(self.next_surface_id);
        self.next_surface_id += 1;
        self.renderer.scope_mut(|r| r.create_surface(id, size.x, size.y))?;
        log::debug!("allocated surface {} ({}x{})", id.raw(), size.x, size.y);
        Ok(Surface { id, size, renderer: self.renderer.clone() })
    }

    /// Uploads image data and caches it under `name`.
    ///
    /// A later [`Canvas::draw_image`] with the same name reuses the texture
    /// instead of looking for a file.
    pub fn load_image_from(&mut self, name: &str, source: ImageSource) -> Result<(), String> {
        let image = match source {
            ImageSource::Raw { width, height, pixels } => {
                Self::assert_rgba_len(width, height, pixels.len())?;
                self.upload(width, height, pixels)?
            }
            #[cfg(feature = "png_source")]
            ImageSource::Png { bytes } => {
                let (width, height, rgba) = Self::decode_png(bytes)?;
                self.upload(width, height, rgba.as_slice())?
            }
        };
        if let Some(old) = self.images.insert(name.to_string(), image) {
            self.renderer.scope_mut(|r| r.destroy_texture(old.texture));
        }
        Ok(())
    }

    /// Native size of a cached image.
    pub fn image_size(&self, name: &str) -> Option<Vec2f> { self.images.get(name).map(|img| vec2(img.width as f32, img.height as f32)) }

    /// Drops a cached image and its texture.
    pub fn free_image(&mut self, name: &str) {
        if let Some(img) = self.images.remove(name) {
            self.renderer.scope_mut(|r| r.destroy_texture(img.texture));
        }
    }

    /// Draws the image named `name` into `rect`.
    ///
    /// Images that are not cached yet are read from the file system using
    /// `name` as the path. A zero width or height in `rect` is replaced by
    /// the native extent, keeping the aspect ratio when only one is zero.
    /// Returns `false` when the image could not be loaded; failures are not
    /// cached, so the next frame tries again.
    pub fn draw_image(&mut self, target: Target, name: &str, rect: Rectf) -> bool {
        let cached = self.images.get(name).copied();
        let image = match cached {
            Some(img) => img,
            None => match self.load_file(name) {
                Ok(img) => {
                    self.images.insert(name.to_string(), img);
                    img
                }
                Err(e) => {
                    log::warn!("cannot load image `{}`: {}", name, e);
                    return false;
                }
            },
        };
        let dest = fit_image_rect(rect, vec2(image.width as f32, image.height as f32));
        self.renderer.scope_mut(|r| r.draw_texture(target, image.texture, dest));
        true
    }

    fn upload(&mut self, width: i32, height: i32, pixels: &[u8]) -> Result<CachedImage, String> {
        let texture = TextureId::new(self.next_texture_id);
        self.next_texture_id += 1;
        self.renderer.scope_mut(|r| r.create_texture(texture, width, height, pixels))?;
        Ok(CachedImage { texture, width, height })
    }

    #[cfg(feature = "png_source")]
    fn load_file(&mut self, path: &str) -> Result<CachedImage, String> {
        let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
        let (width, height, rgba) = Self::decode_png(&bytes)?;
        self.upload(width, height, rgba.as_slice())
    }

    #[cfg(not(feature = "png_source"))]
    fn load_file(&mut self, _path: &str) -> Result<CachedImage, String> { Err(String::from("loading images from files requires the `png_source` feature")) }

    fn assert_rgba_len(width: i32, height: i32, len: usize) -> Result<(), String> {
        if width <= 0 || height <= 0 {
            return Err(String::from("Image dimensions must be positive"));
        }
        let expected = width as usize * height as usize * 4;
        if len != expected {
            return Err(format!("Expected {} RGBA bytes, received {}", expected, len));
        }
        Ok(())
    }

    #[cfg(feature = "png_source")]
    fn decode_png(bytes: &[u8]) -> Result<(i32, i32, Vec<u8>), String> {
        let decoder = Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().map_err(|e| e.to_string())?;
        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| "PNG decoder did not report output size".to_string())?;
        let mut buf = vec![0; buf_size];
        let info = reader.next_frame(&mut buf).map_err(|e| e.to_string())?;
        let raw = &buf[..info.buffer_size()];
        let mut rgba = Vec::with_capacity((info.width as usize) * (info.height as usize) * 4);
        match info.color_type {
            ColorType::Rgba => rgba.extend_from_slice(raw),
            ColorType::Rgb => {
                for px in raw.chunks(3) {
                    rgba.extend_from_slice(px);
                    rgba.push(0xFF);
                }
            }
            ColorType::Grayscale => {
                for &v in raw {
                    rgba.extend_from_slice(&[v, v, v, 0xFF]);
                }
            }
            ColorType::GrayscaleAlpha => {
                for px in raw.chunks(2) {
                    rgba.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
                }
            }
            _ => return Err("Unsupported PNG color type".into()),
        }
        Ok((info.width as i32, info.height as i32, rgba))
    }
}

impl<R: Renderer> Drop for Canvas<R> {
    fn drop(&mut self) {
        let textures: Vec<_> = self.images.values().map(|img| img.texture).collect();
        self.renderer.scope_mut(|r| {
            for id in &textures {
                r.destroy_texture(*id);
            }
        });
        self.images.clear();
    }
}

/// Resolves the destination of an image draw.
///
/// Zero extents fall back to the native size; when exactly one is zero it is
/// derived from the other so the image keeps its aspect ratio.
pub fn fit_image_rect(r: Rectf, native: Vec2f) -> Rectf {
    match (r.width == 0.0, r.height == 0.0) {
        (true, true) => rect(r.x, r.y, native.x, native.y),
        (true, false) => rect(r.x, r.y, r.height * native.x / native.y, r.height),
        (false, true) => rect(r.x, r.y, r.width, r.width * native.y / native.x),
        (false, false) => r,
    }
}
