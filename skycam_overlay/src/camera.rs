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
use serde::{Serialize,Deserialize};
use skycam_common::{all_finite, geo::GeoPoint3};

use crate::errors::{Result, configuration_error};

/// the camera section of the config file. This is only the serialized form, use [`CameraModel::from_config`]
/// to get something the overlay can work with
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct CameraConfig {
    pub position: GeoPoint3,
    pub bearing: f64,
    pub hfov: f64,
    pub vfov: f64,
    #[serde(default)]
    pub horizon_angle: f64,
}

/// observer pose and optics of the fixed camera. All angles in degrees, fovs are full angles.
/// Instances are only created through the validating constructors and are not mutable afterwards
#[derive(Debug,Clone,PartialEq)]
pub struct CameraModel {
    position: GeoPoint3,
    bearing: f64,
    hfov: f64,
    vfov: f64,
    horizon_angle: f64,
}

impl CameraModel {
    /// positions with longitudes outside [-180,180] (e.g. 200 from a config file) are wrapped
    pub fn new (position: GeoPoint3, bearing: f64, hfov: f64, vfov: f64, horizon_angle: f64)->Result<Self> {
        let position = position.normalized();
        if !position.is_valid() {
            return Err( configuration_error( format!("invalid camera position {}", position)))
        }
        if !all_finite( &[bearing, hfov, vfov, horizon_angle]) {
            return Err( configuration_error( "non-finite camera angle"))
        }
        if hfov <= 0.0 || vfov <= 0.0 {
            return Err( configuration_error( format!("camera fov has to be positive (hfov={}, vfov={})", hfov, vfov)))
        }

        Ok( CameraModel { position, bearing, hfov, vfov, horizon_angle } )
    }

    pub fn from_config (config: &CameraConfig)->Result<Self> {
        Self::new( config.position, config.bearing, config.hfov, config.vfov, config.horizon_angle)
    }

    #[inline] pub fn position (&self)->&GeoPoint3 { &self.position }
    #[inline] pub fn bearing (&self)->f64 { self.bearing }
    #[inline] pub fn horizontal_fov (&self)->f64 { self.hfov }
    #[inline] pub fn vertical_fov (&self)->f64 { self.vfov }
    #[inline] pub fn horizon_angle (&self)->f64 { self.horizon_angle }

    #[inline] pub fn half_horizontal_fov (&self)->f64 { self.hfov / 2.0 }
    #[inline] pub fn half_vertical_fov (&self)->f64 { self.vfov / 2.0 }
}

impl fmt::Display for CameraModel {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Camera( pos: {}, bearing: {}°, fov: {}°x{}°, horizon: {}° )",
                self.position, self.bearing, self.hfov, self.vfov, self.horizon_angle)
    }
}

/// pixel dimensions of the drawing surface
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new (width: u32, height: u32)->Result<Self> {
        Viewport { width, height }.validated()
    }

    /// we have to call this for deserialized viewports
    pub fn validated (self)->Result<Self> {
        if self.width == 0 || self.height == 0 {
            Err( configuration_error( format!("empty viewport {}x{}", self.width, self.height)))
        } else {
            Ok(self)
        }
    }

    #[inline] pub fn width_f64 (&self)->f64 { self.width as f64 }
    #[inline] pub fn height_f64 (&self)->f64 { self.height as f64 }

    pub fn center (&self)->(f64,f64) { (self.width_f64() / 2.0, self.height_f64() / 2.0) }
}
