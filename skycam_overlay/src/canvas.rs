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

//! the drawing surface abstraction the overlay renderer draws into. This is a small 2D context in the
//! spirit of an HTML canvas: stateful colors, line width, font size and text alignment, plus a handful
//! of primitives. Text positions refer to the baseline.

use ab_glyph::FontArc;
use image::Rgba;
use serde::{Serialize,Deserialize};
use crate::{errors::Result, font};

pub type Color = Rgba<u8>;

pub const BLACK: Color = Rgba([0, 0, 0, 255]);
pub const WHITE: Color = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Color = Rgba([0, 0, 0, 0]);

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum TextAlign {
    #[default] Left,
    Center,
    Right
}

impl TextAlign {
    /// left edge of a text of given width drawn at `x` with this alignment
    pub fn left_edge (&self, x: f64, text_width: f64)->f64 {
        match self {
            TextAlign::Left => x,
            TextAlign::Center => x - text_width / 2.0,
            TextAlign::Right => x - text_width,
        }
    }
}

pub trait Canvas {
    fn width (&self)->u32;
    fn height (&self)->u32;

    fn clear (&mut self);

    fn set_fill_color (&mut self, color: Color);
    fn set_stroke_color (&mut self, color: Color);
    fn set_line_width (&mut self, width: f64);
    fn set_font_size (&mut self, px: f64);
    fn set_text_align (&mut self, align: TextAlign);

    fn stroke_rect (&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect (&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_line (&mut self, x0: f64, y0: f64, x1: f64, y1: f64);

    /// draw text with the current fill color, font size and alignment. `y` is the baseline
    fn fill_text (&mut self, text: &str, x: f64, y: f64);

    /// width in pixels `text` would have with the current font size
    fn measure_text (&self, text: &str)->f64;
}

/* #region RecordingCanvas *****************************************************************************/

#[derive(Debug,Clone,PartialEq)]
pub enum DrawOp {
    Clear,
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    FontSize(f64),
    Align(TextAlign),
    StrokeRect { x: f64, y: f64, w: f64, h: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    Line { x0: f64, y0: f64, x1: f64, y1: f64 },
    Text { text: String, x: f64, y: f64, align: TextAlign },
}

/// a canvas that only records what is drawn into it. Clearing starts a new op list, i.e. after rendering
/// a frame the ops are exactly what that frame consists of. Text is measured with the same font metrics
/// a [`crate::RasterCanvas`] with that font would use
#[derive(Debug,Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    font: FontArc,
    font_size: f64,
    align: TextAlign,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new (width: u32, height: u32)->Result<Self> {
        Ok( Self::with_font( width, height, font::load_default_font()?) )
    }

    pub fn with_font (width: u32, height: u32, font: FontArc)->Self {
        RecordingCanvas { width, height, font, font_size: 10.0, align: TextAlign::Left, ops: Vec::new() }
    }

    pub fn font (&self)->&FontArc { &self.font }

    pub fn ops (&self)->&[DrawOp] { self.ops.as_slice() }

    pub fn lines (&self)->Vec<(f64,f64,f64,f64)> {
        self.ops.iter().filter_map( |op| match op {
            DrawOp::Line{x0,y0,x1,y1} => Some((*x0,*y0,*x1,*y1)),
            _ => None
        }).collect()
    }

    pub fn stroke_rects (&self)->Vec<(f64,f64,f64,f64)> {
        self.ops.iter().filter_map( |op| match op {
            DrawOp::StrokeRect{x,y,w,h} => Some((*x,*y,*w,*h)),
            _ => None
        }).collect()
    }

    pub fn fill_rects (&self)->Vec<(f64,f64,f64,f64)> {
        self.ops.iter().filter_map( |op| match op {
            DrawOp::FillRect{x,y,w,h} => Some((*x,*y,*w,*h)),
            _ => None
        }).collect()
    }

    pub fn texts (&self)->Vec<(String,f64,f64,TextAlign)> {
        self.ops.iter().filter_map( |op| match op {
            DrawOp::Text{text,x,y,align} => Some((text.clone(),*x,*y,*align)),
            _ => None
        }).collect()
    }

    pub fn find_text (&self, s: &str)->Option<(f64,f64,TextAlign)> {
        self.texts().into_iter().find( |t| t.0 == s).map( |t| (t.1, t.2, t.3))
    }
}

impl Canvas for RecordingCanvas {
    fn width (&self)->u32 { self.width }
    fn height (&self)->u32 { self.height }

    fn clear (&mut self) {
        self.ops.clear();
        self.ops.push( DrawOp::Clear);
    }

    fn set_fill_color (&mut self, color: Color) { self.ops.push( DrawOp::FillColor(color)) }
    fn set_stroke_color (&mut self, color: Color) { self.ops.push( DrawOp::StrokeColor(color)) }
    fn set_line_width (&mut self, width: f64) { self.ops.push( DrawOp::LineWidth(width)) }

    fn set_font_size (&mut self, px: f64) {
        self.font_size = px;
        self.ops.push( DrawOp::FontSize(px))
    }

    fn set_text_align (&mut self, align: TextAlign) {
        self.align = align;
        self.ops.push( DrawOp::Align(align))
    }

    fn stroke_rect (&mut self, x: f64, y: f64, w: f64, h: f64) { self.ops.push( DrawOp::StrokeRect{x,y,w,h}) }
    fn fill_rect (&mut self, x: f64, y: f64, w: f64, h: f64) { self.ops.push( DrawOp::FillRect{x,y,w,h}) }
    fn stroke_line (&mut self, x0: f64, y0: f64, x1: f64, y1: f64) { self.ops.push( DrawOp::Line{x0,y0,x1,y1}) }

    fn fill_text (&mut self, text: &str, x: f64, y: f64) {
        self.ops.push( DrawOp::Text{ text: text.to_string(), x, y, align: self.align })
    }

    fn measure_text (&self, text: &str)->f64 { font::text_width( &self.font, text, self.font_size) }
}

/* #endregion RecordingCanvas */
