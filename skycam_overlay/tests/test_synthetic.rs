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

use std::{sync::Arc, time::Duration};
use skycam_common::geo::GeoPoint3;
use skycam_adsb::{AircraftStore, AltitudeUnit, ReportConnector, TrackStore, report_channel, spawn_ingest};
use skycam_overlay::*;

fn camera ()->CameraModel {
    CameraModel::new( GeoPoint3::from_lon_lat_degrees_alt_meters( -87.6359, 41.8789, 440.0), 300.0, 60.0, 40.0, 0.0).unwrap()
}

#[test]
fn test_defaults () {
    let config = SyntheticConfig::default();
    assert_eq!( config.callsign, "FAKE01");
    assert_eq!( config.altitude_ft, 10_000.0);
    assert_eq!( (config.start_lat, config.start_lng), (41.9792, -87.9044));
    assert!( (config.reset_distance().get::<uom::si::length::meter>() - 121_920.0).abs() < 1e-6);
}

#[test]
fn test_step () {
    let mut feed = SyntheticFeed::new( SyntheticConfig::default(), camera());
    let r = feed.step().unwrap();
    println!("{r}");

    assert_eq!( r.callsign, "FAKE01");
    assert_eq!( r.unit, AltitudeUnit::Feet);
    assert_eq!( r.altitude, 10_000.0);

    // moved exactly one step
    let d = (r.lat - 41.9792).hypot( r.lng + 87.9044);
    assert!( (d - 0.0005).abs() < 1e-9);
    assert_eq!( feed.report(), &r);
}

#[test]
fn test_reset () {
    let mut feed = SyntheticFeed::new( SyntheticConfig::default(), camera());
    feed.set_position( 45.0, -87.9); // ~350km from the camera

    let r = feed.step().unwrap();
    assert_eq!( r.lat, 41.9792);
    assert_eq!( r.lng, -87.9044);

    // the next step moves on from the start position
    let r = feed.step().unwrap();
    assert!( r.lat != 41.9792 || r.lng != -87.9044);
}

#[test]
fn test_invalid_position () {
    let mut feed = SyntheticFeed::new( SyntheticConfig::default(), camera());
    feed.set_position( f64::NAN, -87.9);
    assert!( matches!( feed.step(), Err(SkycamError::InvalidInput(_))));
}

#[test]
fn test_invalid_rate () {
    let config = SyntheticConfig { rate_hz: 0.0, ..SyntheticConfig::default() };
    assert!( matches!( SyntheticConnector::new( config, camera()), Err(SkycamError::ConfigurationError(_))));
}

#[tokio::test]
async fn test_connector () {
    let store = Arc::new( AircraftStore::new("synthetic"));
    let (tx,rx) = report_channel(64);
    let ingest = spawn_ingest( store.clone(), rx);

    let config = SyntheticConfig { rate_hz: 200.0, ..SyntheticConfig::default() };
    let mut connector = SyntheticConnector::new( config, camera()).unwrap();
    connector.start( tx.clone()).await.unwrap();
    assert!( connector.is_running());

    let (tx2,_rx2) = report_channel(1);
    assert!( connector.start( tx2).await.is_err()); // can only be started once
    drop(tx);

    tokio::time::sleep( Duration::from_millis(100)).await;
    connector.terminate();

    let n = tokio::time::timeout( Duration::from_secs(2), ingest).await.unwrap().unwrap();
    println!("ingested {n} synthetic reports");

    assert!( n > 0);
    let reports = store.aircraft_reports();
    assert_eq!( reports.len(), 1);
    assert_eq!( reports[0].callsign, "FAKE01");
}
