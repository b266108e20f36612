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
use anyhow::Result;
use tracing::{info,warn};
use tracing_subscriber::EnvFilter;
use skycam_common::define_cli;
use skycam_adsb::{AircraftStore, ReportConnector, report_channel, spawn_ingest};
use skycam_overlay::{
    OverlayConfig, OverlayRenderer, RasterCanvas, RenderLoop, SnapshotConfig, SyntheticConnector,
    canvas::TRANSPARENT, config::DEFAULT_CONFIG
};

define_cli! { ARGS [about="overlay live air traffic on a fixed camera view"] =
    config: String [help="config file (looked up in ./configs or $SKYCAM_CONFIGS)", long, default_value=DEFAULT_CONFIG],
    synthetic: bool [help="run the synthetic demo aircraft (parameters from the config 'synthetic' section if present)", long],
    frames: Option<u64> [help="stop after rendering this many frames", long],
    snapshot: Option<String> [help="periodically write the rendered frame to this PNG file", long],
    calibrate: bool [help="draw calibration cross through the viewport center", long]
}

#[tokio::main(flavor = "current_thread")]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    let config = OverlayConfig::load( &ARGS.config)?;
    let camera = config.camera_model()?;
    let viewport = config.checked_viewport()?;
    info!("{} with viewport {}x{}", camera, viewport.width, viewport.height);

    let store = Arc::new( AircraftStore::new("skycam"));
    let (tx,rx) = report_channel(256);
    let ingest = spawn_ingest( store.clone(), rx);

    let mut connector = if ARGS.synthetic {
        let mut c = SyntheticConnector::new( config.synthetic.clone().unwrap_or_default(), camera.clone())?;
        c.start( tx.clone()).await?;
        Some(c)
    } else {
        warn!("no report connector configured, rendering empty overlay");
        None
    };
    drop(tx);

    let mut options = config.render.render_options();
    if ARGS.calibrate { options.calibrate = true }

    let snapshot = match &ARGS.snapshot {
        Some(path) => Some( SnapshotConfig { path: path.clone(), ..config.snapshot.clone().unwrap_or_else( || SnapshotConfig::new(path)) }),
        None => config.snapshot.clone()
    };

    let canvas = RasterCanvas::with_font( viewport.width, viewport.height, TRANSPARENT, config.render.load_font()?);
    let renderer = OverlayRenderer::new( camera, viewport);
    let mut render_loop = RenderLoop::new( renderer, store.clone(), canvas, options, config.render.style, config.render.fps)?
        .with_max_frames( ARGS.frames);

    let n_frames = render_loop.run( |frame, canvas, _stats| {
        if let Some(snapshot) = &snapshot {
            if snapshot.is_due( frame) {
                canvas.save_png( &snapshot.path)?;
            }
        }
        Ok(())
    }).await?;

    if let Some(c) = connector.as_mut() { c.terminate() }
    ingest.abort();

    info!("rendered {} frames, {} aircraft in store '{}'", n_frames, store.len(), store.source());
    Ok(())
}
