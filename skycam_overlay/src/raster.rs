/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::path::Path;
use ab_glyph::FontArc;
use image::{RgbaImage, Rgba};
use imageproc::{drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut}, rect::Rect};
use tracing::debug;

use crate::{canvas::{Canvas, Color, TextAlign, BLACK, TRANSPARENT}, errors::Result, font};

/// RGBA image backed canvas. The background is transparent so that frames can be composited over
/// the camera image
pub struct RasterCanvas {
    img: RgbaImage,
    background: Color,
    fill: Color,
    stroke: Color,
    line_width: f64,
    font: FontArc,
    font_size: f64,
    align: TextAlign,
}

impl RasterCanvas {
    /// transparent canvas that draws text with the default font
    pub fn new (width: u32, height: u32)->Result<Self> {
        Ok( Self::with_font( width, height, TRANSPARENT, font::load_default_font()?) )
    }

    pub fn with_font (width: u32, height: u32, background: Color, font: FontArc)->Self {
        RasterCanvas {
            img: RgbaImage::from_pixel( width, height, background),
            background,
            fill: BLACK,
            stroke: BLACK,
            line_width: 1.0,
            font,
            font_size: 10.0,
            align: TextAlign::Left,
        }
    }

    pub fn image (&self)->&RgbaImage { &self.img }

    pub fn pixel (&self, x: u32, y: u32)->Option<Rgba<u8>> {
        if x < self.img.width() && y < self.img.height() { Some( *self.img.get_pixel( x, y)) } else { None }
    }

    pub fn save_png (&self, path: impl AsRef<Path>)->Result<()> {
        let path = path.as_ref();
        self.img.save_with_format( path, image::ImageFormat::Png)?;
        debug!("saved overlay frame to {:?}", path);
        Ok(())
    }

    // imageproc panics on zero sized rects
    fn rect (x: f64, y: f64, w: f64, h: f64)->Rect {
        let x0 = x.round();
        let y0 = y.round();
        let w = ((x + w).round() - x0).max(1.0);
        let h = ((y + h).round() - y0).max(1.0);
        Rect::at( x0 as i32, y0 as i32).of_size( w as u32, h as u32)
    }
}

impl Canvas for RasterCanvas {
    fn width (&self)->u32 { self.img.width() }
    fn height (&self)->u32 { self.img.height() }

    fn clear (&mut self) {
        let bg = self.background;
        self.img.pixels_mut().for_each( |p| *p = bg);
    }

    fn set_fill_color (&mut self, color: Color) { self.fill = color }
    fn set_stroke_color (&mut self, color: Color) { self.stroke = color }
    fn set_line_width (&mut self, width: f64) { self.line_width = width }
    fn set_font_size (&mut self, px: f64) { self.font_size = px }
    fn set_text_align (&mut self, align: TextAlign) { self.align = align }

    fn stroke_rect (&mut self, x: f64, y: f64, w: f64, h: f64) {
        draw_hollow_rect_mut( &mut self.img, Self::rect( x, y, w, h), self.stroke);
    }

    fn fill_rect (&mut self, x: f64, y: f64, w: f64, h: f64) {
        draw_filled_rect_mut( &mut self.img, Self::rect( x, y, w, h), self.fill);
    }

    fn stroke_line (&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        let n = self.line_width.round().max(1.0) as usize;
        let len = (x1 - x0).hypot( y1 - y0);
        let (nx, ny) = if len > 0.0 { (-(y1 - y0) / len, (x1 - x0) / len) } else { (0.0, 0.0) };

        for i in 0..n {
            let d = i as f64 - (n - 1) as f64 / 2.0; // parallel segments for wider lines
            let (dx, dy) = (nx * d, ny * d);
            draw_line_segment_mut( &mut self.img,
                ((x0 + dx) as f32, (y0 + dy) as f32),
                ((x1 + dx) as f32, (y1 + dy) as f32),
                self.stroke);
        }
    }

    fn fill_text (&mut self, text: &str, x: f64, y: f64) {
        let left = self.align.left_edge( x, self.measure_text( text));
        let top = y - font::ascent( &self.font, self.font_size);
        draw_text_mut( &mut self.img, self.fill, left.round() as i32, top.round() as i32, font::px_scale( self.font_size), &self.font, text);
    }

    fn measure_text (&self, text: &str)->f64 { font::text_width( &self.font, text, self.font_size) }
}
