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

use ab_glyph::FontArc;
use serde::{Serialize,Deserialize};
use skycam_common::config::{load_config, config_from_str};

use crate::{
    camera::{CameraConfig, CameraModel, Viewport},
    errors::Result,
    font,
    renderer::{RenderOptions, StyleMode},
    synthetic::SyntheticConfig
};

pub const DEFAULT_CONFIG: &'static str = "skycam.ron";

/// the top level skycam config, normally read from `configs/skycam.ron`
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct OverlayConfig {
    pub camera: CameraConfig,
    pub viewport: Viewport,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub synthetic: Option<SyntheticConfig>,
    #[serde(default)]
    pub snapshot: Option<SnapshotConfig>,
}

impl OverlayConfig {
    pub fn load (filename: &str)->Result<Self> {
        Ok( load_config( filename)? )
    }

    pub fn from_ron (src: &str)->Result<Self> {
        Ok( config_from_str( src)? )
    }

    pub fn camera_model (&self)->Result<CameraModel> { CameraModel::from_config( &self.camera) }

    pub fn checked_viewport (&self)->Result<Viewport> { self.viewport.validated() }
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub fps: f64,
    pub style: StyleMode,
    pub calibrate: bool,
    pub h_step: f64,
    pub v_step: f64,
    pub marker_size: f64,
    pub marker_point_size: f64,
    pub font_size: f64,
    /// font file in the skycam_overlay data dir. None uses the embedded default font
    pub font: Option<String>,
}

impl Default for RenderConfig {
    fn default()->Self {
        let opts = RenderOptions::default();
        RenderConfig {
            fps: 30.0,
            style: StyleMode::Auto,
            calibrate: opts.calibrate,
            h_step: opts.horizontal_step,
            v_step: opts.vertical_step,
            marker_size: opts.marker_size,
            marker_point_size: opts.marker_point_size,
            font_size: opts.font_size,
            font: None,
        }
    }
}

impl RenderConfig {
    pub fn render_options (&self)->RenderOptions {
        RenderOptions {
            calibrate: self.calibrate,
            horizontal_step: self.h_step,
            vertical_step: self.v_step,
            marker_size: self.marker_size,
            marker_point_size: self.marker_point_size,
            font_size: self.font_size,
            ..RenderOptions::default()
        }
    }

    pub fn load_font (&self)->Result<FontArc> {
        match &self.font {
            Some(name) => font::load_font( name),
            None => font::load_default_font()
        }
    }
}

/// periodic PNG output of rendered frames (the file gets overwritten)
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct SnapshotConfig {
    pub path: String,
    #[serde(default="default_every")]
    pub every: u64,
}

fn default_every ()->u64 { 30 }

impl SnapshotConfig {
    pub fn new (path: impl ToString)->Self { SnapshotConfig { path: path.to_string(), every: default_every() } }

    pub fn is_due (&self, frame: u64)->bool {
        self.every > 0 && frame % self.every == 0
    }
}
