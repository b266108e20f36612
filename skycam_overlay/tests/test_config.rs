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

use skycam_overlay::*;

#[test]
fn test_default_config () {
    let config = OverlayConfig::from_ron( include_str!("../../configs/skycam.ron")).unwrap();
    println!("{config:#?}");

    let camera = config.camera_model().unwrap();
    assert_eq!( camera.bearing(), 300.0);
    assert_eq!( camera.half_horizontal_fov(), 30.0);
    assert_eq!( config.checked_viewport().unwrap(), Viewport { width: 1280, height: 720 });
    assert_eq!( config.render.style, StyleMode::Auto);
    assert!( config.synthetic.is_none()); // demo aircraft only runs on request
    assert!( config.render.font.is_none());
    assert_eq!( config.snapshot.as_ref().map( |s| s.every), Some(30));
}

#[test]
fn test_minimal_config () {
    let src = r#"(
        camera: ( position: (lat: 37.4, lon: -122.1), bearing: 90.0, hfov: 50.0, vfov: 30.0 ),
        viewport: ( width: 800, height: 600 ),
    )"#;
    let config = OverlayConfig::from_ron( src).unwrap();

    assert_eq!( config.camera.horizon_angle, 0.0);
    assert_eq!( config.render, RenderConfig::default());
    assert!( config.synthetic.is_none());
    assert!( config.snapshot.is_none());

    let opts = config.render.render_options();
    assert_eq!( opts, RenderOptions::default());
}

#[test]
fn test_invalid_config () {
    let src = r#"(
        camera: ( position: (lat: 37.4, lon: -122.1), bearing: 90.0, hfov: 0.0, vfov: 30.0 ),
        viewport: ( width: 0, height: 600 ),
    )"#;
    let config = OverlayConfig::from_ron( src).unwrap();
    assert!( matches!( config.camera_model(), Err(SkycamError::ConfigurationError(_))));
    assert!( matches!( config.checked_viewport(), Err(SkycamError::ConfigurationError(_))));

    assert!( matches!( OverlayConfig::from_ron( "(camera: ())"), Err(SkycamError::ConfigError(_))));

    let snapshot = SnapshotConfig::new("frame.png");
    assert!( snapshot.is_due(30) && snapshot.is_due(60) && !snapshot.is_due(31));
}
