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

fn projector ()->ScreenProjector {
    let camera = CameraModel::new( GeoPoint3::from_lon_lat_degrees_alt_meters( -87.9, 41.9, 0.0), 0.0, 60.0, 40.0, 0.0).unwrap();
    let viewport = Viewport::new( 640, 480).unwrap();
    ScreenProjector::new( &camera, &viewport)
}

#[test]
fn test_boresight () {
    let p = projector().project_offsets( 0.0, 0.0);
    assert_eq!( p, ScreenPoint { x: 320.0, y: 240.0 });
}

#[test]
fn test_fov_edges () {
    let proj = projector();

    assert_eq!( proj.x( 30.0), 0.0);
    assert_eq!( proj.x( -30.0), 640.0);
    assert_eq!( proj.y( 20.0), 0.0);
    assert_eq!( proj.y( -20.0), 480.0);

    assert_eq!( proj.x( 15.0), 160.0); // half way left
    assert_eq!( proj.y( -10.0), 360.0); // half way down
}

#[test]
fn test_clamping () {
    let proj = projector();

    assert_eq!( proj.x( 75.0), 0.0);
    assert_eq!( proj.x( -179.0), 640.0);
    assert_eq!( proj.y( 89.0), 0.0);
    assert_eq!( proj.y( -45.0), 480.0);

    // clamping an already clamped coordinate does not change it
    for offset in [-100.0, -30.0, -7.5, 0.0, 12.0, 30.0, 100.0] {
        let x = project_axis( offset, 30.0, 640.0);
        assert!( x >= 0.0 && x <= 640.0);
        assert_eq!( x.clamp( 0.0, 640.0), x);
    }
}

#[test]
fn test_invalid_camera () {
    let pos = GeoPoint3::from_lon_lat_degrees_alt_meters( -87.9, 41.9, 0.0);
    assert!( matches!( CameraModel::new( pos, 0.0, 0.0, 40.0, 0.0), Err(SkycamError::ConfigurationError(_))));
    assert!( matches!( CameraModel::new( pos, 0.0, 60.0, -1.0, 0.0), Err(SkycamError::ConfigurationError(_))));
    assert!( matches!( CameraModel::new( pos, f64::NAN, 60.0, 40.0, 0.0), Err(SkycamError::ConfigurationError(_))));

    let bad_pos = GeoPoint3::from_lon_lat_degrees_alt_meters( -87.9, 95.0, 0.0);
    assert!( CameraModel::new( bad_pos, 0.0, 60.0, 40.0, 0.0).is_err());

    assert!( Viewport::new( 0, 480).is_err());
    assert!( Viewport::new( 640, 0).is_err());
}

#[test]
fn test_camera_longitude_wrap () {
    let src = r#"(
        camera: ( position: (lat: 41.9, lon: 200.0, alt: 0.0), bearing: 0.0, hfov: 60.0, vfov: 40.0 ),
        viewport: ( width: 640, height: 480 ),
    )"#;
    let camera = OverlayConfig::from_ron( src).unwrap().camera_model().unwrap();
    println!("{camera}");
    assert_eq!( camera.position().longitude_degrees(), -160.0);

    let reference = CameraModel::new( GeoPoint3::from_lon_lat_degrees_alt_meters( -160.0, 41.9, 0.0), 0.0, 60.0, 40.0, 0.0).unwrap();
    assert_eq!( camera, reference);

    // a report due north of the wrapped position ends up on the boresight column
    let report = AircraftReport::new( "AAL7", 42.0, -160.0, 5000.0, AltitudeUnit::Feet);
    let delta = camera_delta( &report, &camera).unwrap();
    assert!( delta.bearing_offset.abs() < 1e-6);
    assert!( delta.distance > 11_000.0);

    let p = ScreenProjector::new( &camera, &Viewport::new( 640, 480).unwrap()).project( &delta);
    assert!( (p.x - 320.0).abs() < 1e-3);

    // still rejected: non-finite longitudes
    let bad_pos = GeoPoint3::from_lon_lat_degrees_alt_meters( f64::INFINITY, 41.9, 0.0);
    assert!( matches!( CameraModel::new( bad_pos, 0.0, 60.0, 40.0, 0.0), Err(SkycamError::ConfigurationError(_))));
}
