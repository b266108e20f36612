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

use std::fmt;
use crate::{camera::{CameraModel, Viewport}, delta::CameraDelta};

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for ScreenPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!( f, "({:.1},{:.1})", self.x, self.y) }
}

/// linear angle-to-pixel mapping for one axis. Offsets at or beyond the half fov end up on the edge
/// (0 or `dim`), we never cull
#[inline]
pub fn project_axis (offset: f64, half_fov: f64, dim: f64)->f64 {
    let half_dim = dim / 2.0;
    let raw = half_dim - half_dim * (offset / half_fov);
    raw.clamp( 0.0, dim)
}

/// maps camera deltas into viewport pixel coordinates (origin top left)
#[derive(Debug,Clone,Copy)]
pub struct ScreenProjector {
    width: f64,
    height: f64,
    half_hfov: f64,
    half_vfov: f64,
}

impl ScreenProjector {
    pub fn new (camera: &CameraModel, viewport: &Viewport)->Self {
        ScreenProjector {
            width: viewport.width_f64(),
            height: viewport.height_f64(),
            half_hfov: camera.half_horizontal_fov(),
            half_vfov: camera.half_vertical_fov(),
        }
    }

    #[inline] pub fn width (&self)->f64 { self.width }
    #[inline] pub fn height (&self)->f64 { self.height }

    pub fn x (&self, bearing_offset: f64)->f64 { project_axis( bearing_offset, self.half_hfov, self.width) }
    pub fn y (&self, elevation_offset: f64)->f64 { project_axis( elevation_offset, self.half_vfov, self.height) }

    pub fn project_offsets (&self, bearing_offset: f64, elevation_offset: f64)->ScreenPoint {
        ScreenPoint { x: self.x( bearing_offset), y: self.y( elevation_offset) }
    }

    pub fn project (&self, delta: &CameraDelta)->ScreenPoint {
        self.project_offsets( delta.bearing_offset, delta.elevation_offset)
    }
}
