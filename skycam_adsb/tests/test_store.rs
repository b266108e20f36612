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

use std::sync::Arc;
use skycam_adsb::*;

// run with "cargo test test_store -- --nocapture"

#[test]
fn test_altitude_conversion () {
    let r = AircraftReport::new( "UAL123", 41.9, -87.9, 10000.0, AltitudeUnit::Feet);
    assert!( (r.altitude_meters() - 10000.0 / 3.281).abs() < 1e-9);
    assert!( (r.altitude_meters() * FT_MTR - 10000.0).abs() < 1e-6);

    let r = AircraftReport::new( "UAL123", 41.9, -87.9, 3048.0, AltitudeUnit::Meters);
    assert_eq!( r.altitude_meters(), 3048.0);
}

#[test]
fn test_latest_report_wins () {
    let store = AircraftStore::new("test");
    assert!( store.is_empty());
    assert_eq!( store.source(), "test");

    store.add_report( AircraftReport::new( "AAL1", 41.0, -87.0, 5000.0, AltitudeUnit::Feet));
    store.add_report( AircraftReport::new( "SWA2", 42.0, -88.0, 6000.0, AltitudeUnit::Feet));
    store.add_report( AircraftReport::new( "AAL1", 41.5, -87.5, 5500.0, AltitudeUnit::Feet));

    let reports = store.aircraft_reports();
    for r in &reports { println!("{r}") }

    assert_eq!( reports.len(), 2);
    let aal1 = store.get("AAL1").unwrap();
    assert_eq!( aal1.lat, 41.5);
    assert_eq!( aal1.altitude, 5500.0);
    assert!( store.timestamp().millis() > 0);
}

#[tokio::test]
async fn test_ingest () {
    let store = Arc::new( AircraftStore::new("test"));
    let (tx,rx) = report_channel(16);
    let jh = spawn_ingest( store.clone(), rx);

    for i in 0..5 {
        tx.send( AircraftReport::new( "FAKE01", 41.9 + i as f64 * 0.01, -87.9, 10000.0, AltitudeUnit::Feet)).await.unwrap();
    }
    tx.send( AircraftReport::new( "FAKE02", 42.0, -87.9, 3000.0, AltitudeUnit::Meters)).await.unwrap();
    drop(tx);

    let n = jh.await.unwrap();
    assert_eq!( n, 6);
    assert_eq!( store.len(), 2);
    assert!( (store.get("FAKE01").unwrap().lat - 41.94).abs() < 1e-9);
}

#[tokio::test]
async fn test_send_after_close () {
    let (tx,rx) = report_channel(4);
    send_report( &tx, AircraftReport::new( "AAL1", 41.0, -87.0, 5000.0, AltitudeUnit::Feet)).await.unwrap();
    drop(rx);

    let res = send_report( &tx, AircraftReport::new( "AAL1", 41.1, -87.0, 5000.0, AltitudeUnit::Feet)).await;
    println!("{:?}", res);
    assert!( matches!( res, Err(AdsbError::SendError(_))));
}
