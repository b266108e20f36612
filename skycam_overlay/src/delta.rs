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
use uom::si::{f64::Length, length::meter};
use skycam_common::{all_finite, angle::normalize_180, geo::GeoPoint3};
use skycam_adsb::AircraftReport;

use crate::{camera::CameraModel, errors::{Result, invalid_input}};

/// where an aircraft is as seen from the camera: straight line distance in meters, bearing offset from
/// the camera boresight (positive means left of it) and elevation offset from the camera horizon
/// (positive means above), both in degrees
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct CameraDelta {
    pub distance: f64,
    pub bearing_offset: f64,
    pub elevation_offset: f64,
}

impl CameraDelta {
    pub fn distance_length (&self)->Length { Length::new::<meter>( self.distance) }
}

impl fmt::Display for CameraDelta {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Delta( dist: {:.0}m, bearing: {:.3}°, elevation: {:.3}° )", self.distance, self.bearing_offset, self.elevation_offset)
    }
}

/// compute the camera-relative delta of an aircraft report on the WGS84 ellipsoid.
/// The bearing offset is wrapped into (-180,180] so that targets on both sides of north are continuous
pub fn camera_delta (report: &AircraftReport, camera: &CameraModel)->Result<CameraDelta> {
    if !all_finite( &[report.lat, report.lng, report.altitude]) || report.lat.abs() > 90.0 {
        return Err( invalid_input( format!("invalid position for {}: [{},{}] alt {}", report.callsign, report.lat, report.lng, report.altitude)))
    }

    let pos = GeoPoint3::from_lon_lat_degrees_alt( report.lng, report.lat, report.altitude_length());
    let ned = camera.position().ned_delta_to( &pos);

    Ok( CameraDelta {
        distance: ned.length(),
        bearing_offset: normalize_180( camera.bearing() - ned.bearing().degrees()),
        elevation_offset: ned.elevation().degrees() - camera.horizon_angle(),
    })
}
