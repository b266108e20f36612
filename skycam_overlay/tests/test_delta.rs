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

use skycam_common::geo::GeoPoint3;
use skycam_adsb::{AircraftReport, AltitudeUnit};
use skycam_overlay::*;

const CAM_LAT: f64 = 41.9;
const CAM_LON: f64 = -87.9;

fn camera (bearing: f64, horizon: f64)->CameraModel {
    CameraModel::new( GeoPoint3::from_lon_lat_degrees_alt_meters( CAM_LON, CAM_LAT, 0.0), bearing, 60.0, 40.0, horizon).unwrap()
}

// run with "cargo test test_delta -- --nocapture"

#[test]
fn test_due_north_boresight () {
    let r = AircraftReport::new( "N1", CAM_LAT + 0.1, CAM_LON, 0.0, AltitudeUnit::Meters);
    let d = camera_delta( &r, &camera( 0.0, 0.0)).unwrap();
    println!("due north: {d}");

    assert!( d.bearing_offset.abs() < 1e-6);
    assert!( d.elevation_offset.abs() < 0.1);
    assert!( d.distance > 11_000.0 && d.distance < 11_200.0);

    // end-to-end: this has to be (almost) the viewport center
    let renderer = OverlayRenderer::new( camera( 0.0, 0.0), Viewport::new( 640, 480).unwrap());
    let p = renderer.locate( &r).unwrap();
    println!("screen: {p}");
    assert!( (p.x - 320.0).abs() < 1e-3);
    assert!( (p.y - 240.0).abs() < 1.5);
}

#[test]
fn test_bearing_wraps_around_north () {
    // slightly west of north is a small positive offset, not ~360
    let west = AircraftReport::new( "W1", CAM_LAT + 0.1, CAM_LON - 0.01, 0.0, AltitudeUnit::Meters);
    let d = camera_delta( &west, &camera( 0.0, 0.0)).unwrap();
    println!("west of north: {d}");
    assert!( d.bearing_offset > 0.0 && d.bearing_offset < 10.0);

    let east = AircraftReport::new( "E1", CAM_LAT + 0.1, CAM_LON + 0.01, 0.0, AltitudeUnit::Meters);
    let d = camera_delta( &east, &camera( 0.0, 0.0)).unwrap();
    assert!( d.bearing_offset < 0.0 && d.bearing_offset > -10.0);

    // camera looking north-west, target due west is to its left
    let due_west = AircraftReport::new( "W2", CAM_LAT, CAM_LON - 0.1, 0.0, AltitudeUnit::Meters);
    let d = camera_delta( &due_west, &camera( 315.0, 0.0)).unwrap();
    assert!( (d.bearing_offset - 45.0).abs() < 0.1);
}

#[test]
fn test_horizon_angle () {
    let r = AircraftReport::new( "UP", CAM_LAT, CAM_LON, 1000.0, AltitudeUnit::Meters);
    let level = camera_delta( &r, &camera( 0.0, 0.0)).unwrap();
    let tilted = camera_delta( &r, &camera( 0.0, 10.0)).unwrap();

    assert!( (level.elevation_offset - 90.0).abs() < 1e-4);
    assert!( (tilted.elevation_offset - 80.0).abs() < 1e-4);
}

#[test]
fn test_feet_and_meters () {
    let ft = AircraftReport::new( "FT", CAM_LAT + 0.05, CAM_LON + 0.05, 3281.0, AltitudeUnit::Feet);
    let m = AircraftReport::new( "M", CAM_LAT + 0.05, CAM_LON + 0.05, 1000.0, AltitudeUnit::Meters);

    let d_ft = camera_delta( &ft, &camera( 45.0, 0.0)).unwrap();
    let d_m = camera_delta( &m, &camera( 45.0, 0.0)).unwrap();

    assert!( (d_ft.distance - d_m.distance).abs() < 1e-6);
    assert!( (d_ft.elevation_offset - d_m.elevation_offset).abs() < 1e-9);
}

#[test]
fn test_invalid_input () {
    let cam = camera( 0.0, 0.0);

    for r in [
        AircraftReport::new( "NAN", f64::NAN, CAM_LON, 0.0, AltitudeUnit::Feet),
        AircraftReport::new( "INF", CAM_LAT, f64::INFINITY, 0.0, AltitudeUnit::Feet),
        AircraftReport::new( "ALT", CAM_LAT, CAM_LON, f64::NAN, AltitudeUnit::Meters),
        AircraftReport::new( "LAT", 95.0, CAM_LON, 0.0, AltitudeUnit::Meters),
    ] {
        let res = camera_delta( &r, &cam);
        println!("{}: {:?}", r.callsign, res);
        assert!( matches!( res, Err(SkycamError::InvalidInput(_))));
    }
}

#[test]
fn test_coincident () {
    let r = AircraftReport::new( "CAM", CAM_LAT, CAM_LON, 0.0, AltitudeUnit::Meters);
    let d = camera_delta( &r, &camera( 0.0, 0.0)).unwrap();
    assert_eq!( d.distance, 0.0);
    assert_eq!( d.bearing_offset, 0.0);
    assert_eq!( d.elevation_offset, 0.0);
}
