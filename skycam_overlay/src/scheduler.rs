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
use tokio::time::interval;
use tracing::{info,debug};
use skycam_common::datetime::{local_hour, rate_interval};
use skycam_adsb::TrackStore;

use crate::{
    canvas::Canvas,
    errors::{Result, configuration_error},
    renderer::{FrameStats, OverlayRenderer, RenderOptions, StyleMode}
};

/// fixed rate driver for the overlay renderer. The frame rate is independent of how often the
/// store gets updated - each tick renders whatever snapshot the store has at that time
pub struct RenderLoop<S,C> where S: TrackStore, C: Canvas {
    renderer: OverlayRenderer,
    store: Arc<S>,
    canvas: C,
    options: RenderOptions,
    style: StyleMode,
    frame_interval: Duration,
    max_frames: Option<u64>,
    hour_source: fn()->u32,
}

impl<S,C> RenderLoop<S,C> where S: TrackStore, C: Canvas {
    pub fn new (renderer: OverlayRenderer, store: Arc<S>, canvas: C, options: RenderOptions, style: StyleMode, fps: f64)->Result<Self> {
        let frame_interval = rate_interval( fps).ok_or_else( || configuration_error( format!("invalid frame rate {}", fps)))?;
        let vp = renderer.viewport();
        if canvas.width() != vp.width || canvas.height() != vp.height {
            return Err( configuration_error( format!("canvas size {}x{} does not match viewport {}x{}",
                                                     canvas.width(), canvas.height(), vp.width, vp.height)))
        }

        Ok( RenderLoop { renderer, store, canvas, options, style, frame_interval, max_frames: None, hour_source: local_hour } )
    }

    pub fn with_max_frames (mut self, max_frames: Option<u64>)->Self {
        self.max_frames = max_frames;
        self
    }

    /// replace the wall clock hour used for automatic day/night styling
    pub fn with_hour_source (mut self, hour_source: fn()->u32)->Self {
        self.hour_source = hour_source;
        self
    }

    pub fn frame_interval (&self)->Duration { self.frame_interval }
    pub fn options (&self)->&RenderOptions { &self.options }
    pub fn canvas (&self)->&C { &self.canvas }
    pub fn into_canvas (self)->C { self.canvas }

    /// render a single frame for the given local hour
    pub fn render_once (&mut self, hour: u32)->FrameStats {
        self.options.night = self.style.is_night( hour);
        let reports = self.store.aircraft_reports();
        self.renderer.render_frame( &mut self.canvas, &reports, &self.options)
    }

    /// run until `max_frames` are rendered or we get interrupted. The `frame_action` is called after each
    /// frame with the 1-based frame number - if it fails the loop is terminated with that error.
    /// Returns the number of rendered frames
    pub async fn run<F> (&mut self, mut frame_action: F)->Result<u64>
        where F: FnMut(u64, &C, &FrameStats)->Result<()>
    {
        let mut timer = interval( self.frame_interval);
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut frames: u64 = 0;
        info!("render loop started with interval {:?}", self.frame_interval);

        loop {
            if let Some(max_frames) = self.max_frames {
                if frames >= max_frames { break }
            }

            tokio::select! {
                _ = timer.tick() => {
                    let stats = self.render_once( (self.hour_source)());
                    frames += 1;
                    debug!("frame {}: {:?}", frames, stats);
                    frame_action( frames, &self.canvas, &stats)?;
                }
                _ = &mut ctrl_c => {
                    info!("render loop interrupted");
                    break
                }
            }
        }

        info!("render loop terminated after {} frames", frames);
        Ok(frames)
    }
}
