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

//! the aircraft report side of skycam: the report data model, the track store the overlay reads
//! its per-frame snapshots from, and the connector/ingest plumbing that feeds the store

use std::{fmt, sync::atomic::{AtomicI64,Ordering}};
use serde::{Serialize,Deserialize};
use dashmap::DashMap; // safe to snapshot while the ingest task is writing
use uom::si::{f64::Length, length::meter};
use skycam_common::datetime::EpochMillis;

pub mod connector;
pub use connector::{ReportConnector, ReportSender, ReportReceiver, report_channel, send_report, spawn_ingest};

pub mod errors;
pub use errors::{AdsbError, Result};

/// feet per meter as used by the overlay. Note this is deliberately not the exact uom conversion factor
pub const FT_MTR: f64 = 3.281;

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
pub enum AltitudeUnit {
    Feet,
    Meters
}

/// a single position report for an aircraft. These are transient - the store keeps the latest one per
/// callsign and the overlay only reads snapshots of them
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct AircraftReport {
    pub callsign: String,
    pub lat: f64,
    pub lng: f64,
    pub altitude: f64,
    pub unit: AltitudeUnit,
}

impl AircraftReport {
    pub fn new (callsign: impl ToString, lat: f64, lng: f64, altitude: f64, unit: AltitudeUnit)->Self {
        AircraftReport { callsign: callsign.to_string(), lat, lng, altitude, unit }
    }

    pub fn altitude_meters (&self)->f64 {
        match self.unit {
            AltitudeUnit::Feet => self.altitude / FT_MTR,
            AltitudeUnit::Meters => self.altitude
        }
    }

    pub fn altitude_length (&self)->Length { Length::new::<meter>( self.altitude_meters()) }
}

impl fmt::Display for AircraftReport {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit { AltitudeUnit::Feet => "ft", AltitudeUnit::Meters => "m" };
        write!( f, "AircraftReport( cs: \"{}\", pos: [{},{}], alt: {}{} )", self.callsign, self.lat, self.lng, self.altitude, unit)
    }
}

/// the abstract provider of point-in-time aircraft snapshots. Implementors have to be safe to read from
/// while reports are added
pub trait TrackStore {
    /// unordered snapshot of the current reports
    fn aircraft_reports (&self)->Vec<AircraftReport>;

    fn add_report (&self, report: AircraftReport);
}

/// simple callsign keyed store - the latest report for a callsign wins.
/// There is no eviction of stale aircraft
pub struct AircraftStore {
    source: String,
    timestamp: AtomicI64, // last ingest
    aircraft: DashMap<String,AircraftReport>,
}

impl AircraftStore {
    pub fn new (source: impl ToString)->Self {
        AircraftStore {
            source: source.to_string(),
            timestamp: AtomicI64::new(0),
            aircraft: DashMap::new(),
        }
    }

    pub fn source (&self)->&str { self.source.as_str() }
    pub fn timestamp (&self)->EpochMillis { EpochMillis::new( self.timestamp.load(Ordering::Relaxed)) }

    pub fn len (&self)->usize { self.aircraft.len() }
    pub fn is_empty (&self)->bool { self.aircraft.is_empty() }

    pub fn get (&self, callsign: &str)->Option<AircraftReport> {
        self.aircraft.get( callsign).map( |e| e.value().clone())
    }
}

impl TrackStore for AircraftStore {
    fn aircraft_reports (&self)->Vec<AircraftReport> {
        self.aircraft.iter().map( |e| e.value().clone()).collect()
    }

    fn add_report (&self, report: AircraftReport) {
        self.timestamp.store( EpochMillis::now().millis(), Ordering::Relaxed);
        self.aircraft.insert( report.callsign.clone(), report);
    }
}
