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

//! augmented reality overlay of live air traffic for a fixed camera.
//!
//! Aircraft reports are turned into camera-relative deltas (distance, bearing offset, elevation offset)
//! on the WGS84 ellipsoid, linearly mapped into viewport pixels and drawn as markers with callsign
//! labels, together with degree ticks and field-of-view labels. A [`scheduler::RenderLoop`] does this
//! at a fixed frame rate from whatever the [`skycam_adsb::TrackStore`] currently holds.

pub mod errors;
pub use errors::{Result, SkycamError};

pub mod camera;
pub use camera::{CameraConfig, CameraModel, Viewport};

pub mod delta;
pub use delta::{CameraDelta, camera_delta};

pub mod projector;
pub use projector::{ScreenPoint, ScreenProjector, project_axis};

pub mod font;

pub mod canvas;
pub use canvas::{Canvas, Color, DrawOp, RecordingCanvas, TextAlign};

pub mod raster;
pub use raster::RasterCanvas;

pub mod renderer;
pub use renderer::{FrameStats, OverlayRenderer, RenderOptions, StyleMode, is_night};

pub mod scheduler;
pub use scheduler::RenderLoop;

pub mod synthetic;
pub use synthetic::{SyntheticConfig, SyntheticConnector, SyntheticFeed};

pub mod config;
pub use config::{OverlayConfig, RenderConfig, SnapshotConfig};
