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

use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize,Deserialize};
use tokio::{task::JoinHandle, time::interval};
use tracing::{debug,info,warn};
use uom::si::{f64::Length, length::foot};
use skycam_common::datetime::rate_interval;
use skycam_adsb::{AdsbError, AircraftReport, AltitudeUnit, ReportConnector, ReportSender, send_report};

use crate::{camera::CameraModel, delta::camera_delta, errors::{Result, configuration_error}};

/// config for the synthetic demo aircraft. Defaults put it next to O'Hare
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct SyntheticConfig {
    pub callsign: String,
    pub altitude_ft: f64,
    pub start_lat: f64,
    pub start_lng: f64,
    pub step_deg: f64,
    pub rate_hz: f64,
    pub reset_distance_ft: f64,
}

impl Default for SyntheticConfig {
    fn default()->Self {
        SyntheticConfig {
            callsign: "FAKE01".to_string(),
            altitude_ft: 10_000.0,
            start_lat: 41.9792,
            start_lng: -87.9044,
            step_deg: 0.0005,
            rate_hz: 30.0,
            reset_distance_ft: 400_000.0,
        }
    }
}

impl SyntheticConfig {
    pub fn reset_distance (&self)->Length { Length::new::<foot>( self.reset_distance_ft) }
}

/// a single fake aircraft that moves in a fixed pattern relative to the camera. Once it gets further
/// away than the reset distance it jumps back to its start position
#[derive(Debug,Clone)]
pub struct SyntheticFeed {
    config: SyntheticConfig,
    camera: CameraModel,
    report: AircraftReport,
}

impl SyntheticFeed {
    pub fn new (config: SyntheticConfig, camera: CameraModel)->Self {
        let report = AircraftReport::new( &config.callsign, config.start_lat, config.start_lng, config.altitude_ft, AltitudeUnit::Feet);
        SyntheticFeed { config, camera, report }
    }

    pub fn config (&self)->&SyntheticConfig { &self.config }
    pub fn report (&self)->&AircraftReport { &self.report }

    pub fn set_position (&mut self, lat: f64, lng: f64) {
        self.report.lat = lat;
        self.report.lng = lng;
    }

    /// advance the aircraft by one tick and return the new report
    pub fn step (&mut self)->Result<AircraftReport> {
        let delta = camera_delta( &self.report, &self.camera)?;

        if delta.distance_length() > self.config.reset_distance() {
            debug!("{} out of range ({:.0}m), reset", self.report.callsign, delta.distance);
            self.report.lat = self.config.start_lat;
            self.report.lng = self.config.start_lng;
        } else {
            let (sin, cos) = delta.bearing_offset.to_radians().sin_cos();
            self.report.lat += self.config.step_deg * cos;
            self.report.lng += self.config.step_deg * sin;
        }

        Ok( self.report.clone())
    }
}

/// runs a [`SyntheticFeed`] on its own timer and sends each report through the ingest channel
pub struct SyntheticConnector {
    feed: Option<SyntheticFeed>,
    tick_interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl SyntheticConnector {
    pub fn new (config: SyntheticConfig, camera: CameraModel)->Result<Self> {
        let tick_interval = rate_interval( config.rate_hz).ok_or_else( || configuration_error( format!("invalid synthetic rate {}", config.rate_hz)))?;
        Ok( SyntheticConnector { feed: Some( SyntheticFeed::new( config, camera)), tick_interval, task: None } )
    }

    pub fn is_running (&self)->bool {
        self.task.as_ref().map( |t| !t.is_finished()).unwrap_or(false)
    }
}

#[async_trait]
impl ReportConnector for SyntheticConnector {
    async fn start (&mut self, sender: ReportSender) -> skycam_adsb::Result<()> {
        let Some(mut feed) = self.feed.take() else {
            return Err( AdsbError::ConnectorError( "synthetic feed already started".to_string()))
        };
        let mut timer = interval( self.tick_interval);
        info!("starting synthetic feed {} with interval {:?}", feed.config().callsign, self.tick_interval);

        self.task = Some( tokio::spawn( async move {
            loop {
                timer.tick().await;
                match feed.step() {
                    Ok(report) => {
                        if let Err(e) = send_report( &sender, report).await {
                            info!("stopping synthetic feed: {}", e);
                            break
                        }
                    }
                    Err(e) => warn!("synthetic feed step failed: {}", e)
                }
            }
        }));

        Ok(())
    }

    fn terminate (&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("synthetic feed terminated");
        }
    }
}
