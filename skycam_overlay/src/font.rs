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

//! font resources for overlay labels. Text is rendered and measured with [ab_glyph](https://docs.rs/ab_glyph)
//! fonts, the default is a monospace font that ships in this package's `data/` dir and is embedded into the
//! binary so that a deployed overlay does not depend on the working directory

use std::path::{Path,PathBuf};
use ab_glyph::{Font,FontArc,PxScale,ScaleFont};
use imageproc::drawing::text_size;

use crate::errors::{Result, configuration_error};

pub const DEFAULT_FONT_NAME: &'static str = "DejaVuSansMono.ttf"; // make sure this is in skycam_overlay/data

const DEFAULT_FONT_DATA: &'static [u8] = include_bytes!("../data/DejaVuSansMono.ttf");

pub fn font_path (font_name: &str)->PathBuf {
    Path::new( env!("CARGO_MANIFEST_DIR")).join("data").join( font_name)
}

/// load a font file from our package data dir
pub fn load_font (font_name: &str)->Result<FontArc> {
    let path = font_path( font_name);
    if !path.is_file() {
        Err( configuration_error( format!("font not found: {}", font_name)))
    } else {
        let data = std::fs::read( &path)?;
        Ok( FontArc::try_from_vec( data)? )
    }
}

pub fn load_default_font ()->Result<FontArc> {
    Ok( FontArc::try_from_slice( DEFAULT_FONT_DATA)? )
}

/// font sizes are pixel heights
#[inline]
pub fn px_scale (font_size: f64)->PxScale { PxScale::from( font_size as f32) }

/// advance width of `text` in pixels, i.e. what imageproc lays out for it
pub fn text_width (font: &impl Font, text: &str, font_size: f64)->f64 {
    if text.is_empty() || font_size <= 0.0 {
        0.0
    } else {
        text_size( px_scale( font_size), font, text).0 as f64
    }
}

/// distance between top of the layout box and the baseline
pub fn ascent (font: &impl Font, font_size: f64)->f64 {
    font.as_scaled( px_scale( font_size)).ascent() as f64
}
