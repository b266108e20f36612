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

use serde::{Serialize,Deserialize};
use tracing::{debug,warn};
use skycam_adsb::AircraftReport;

use crate::{
    camera::{CameraModel, Viewport},
    canvas::{Canvas, Color, TextAlign, BLACK, WHITE},
    delta::camera_delta,
    errors::Result,
    projector::{ScreenPoint, ScreenProjector}
};

/// night is everything after 16:59 and before 05:00 local time
#[inline]
pub fn is_night (hour: u32)->bool {
    hour > 16 || hour < 5
}

#[inline]
pub fn style_color (night: bool)->Color {
    if night { WHITE } else { BLACK }
}

/// how the day/night style is chosen for each frame
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum StyleMode {
    #[default] Auto,
    Day,
    Night
}

impl StyleMode {
    pub fn is_night (&self, hour: u32)->bool {
        match self {
            StyleMode::Auto => is_night(hour),
            StyleMode::Day => false,
            StyleMode::Night => true,
        }
    }
}

/// per-frame drawing parameters. Sizes in pixels, steps in degrees
#[derive(Debug,Clone,PartialEq)]
pub struct RenderOptions {
    pub night: bool,
    pub calibrate: bool,
    pub horizontal_step: f64,
    pub vertical_step: f64,
    pub marker_size: f64,
    pub marker_point_size: f64,
    pub font_size: f64,
    pub label_offset: f64,
    pub tick_half_length: f64,
    pub label_margin: f64,
}

impl Default for RenderOptions {
    fn default()->Self {
        RenderOptions {
            night: false,
            calibrate: false,
            horizontal_step: 5.0,
            vertical_step: 5.0,
            marker_size: 50.0,
            marker_point_size: 1.0,
            font_size: 30.0,
            label_offset: 5.0,
            tick_half_length: 10.0,
            label_margin: 2.0,
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub struct FrameStats {
    pub drawn: usize,
    pub skipped: usize,
}

/// positive tick offsets `k*step` (k >= 1) up to and including `half_fov`
pub fn tick_offsets (step: f64, half_fov: f64)->Vec<f64> {
    let mut ticks = Vec::new();
    if step > 0.0 && step.is_finite() {
        let mut k = 1;
        loop {
            let v = k as f64 * step;
            if v > half_fov + 1e-9 { break }
            ticks.push(v);
            k += 1;
        }
    }
    ticks
}

/// label text for a fov or tick angle
pub fn degree_label (deg: f64)->String {
    format!("{}°", deg)
}

/// draws complete overlay frames for a fixed camera and viewport
#[derive(Debug,Clone)]
pub struct OverlayRenderer {
    camera: CameraModel,
    viewport: Viewport,
    projector: ScreenProjector,
}

impl OverlayRenderer {
    pub fn new (camera: CameraModel, viewport: Viewport)->Self {
        let projector = ScreenProjector::new( &camera, &viewport);
        OverlayRenderer { camera, viewport, projector }
    }

    pub fn camera (&self)->&CameraModel { &self.camera }
    pub fn viewport (&self)->&Viewport { &self.viewport }
    pub fn projector (&self)->&ScreenProjector { &self.projector }

    /// where `report` ends up on screen
    pub fn locate (&self, report: &AircraftReport)->Result<ScreenPoint> {
        let delta = camera_delta( report, &self.camera)?;
        Ok( self.projector.project( &delta))
    }

    /// clear `canvas` and draw all aircraft plus the static overlay elements. Aircraft we cannot
    /// locate are skipped, they never abort the frame
    pub fn render_frame<C> (&self, canvas: &mut C, reports: &[AircraftReport], opts: &RenderOptions)->FrameStats
        where C: Canvas + ?Sized
    {
        let mut stats = FrameStats::default();

        canvas.clear();
        let color = style_color( opts.night);
        canvas.set_fill_color( color);
        canvas.set_stroke_color( color);
        canvas.set_line_width( 1.0);
        canvas.set_font_size( opts.font_size);

        for report in reports {
            match self.draw_aircraft( canvas, report, opts) {
                Ok(p) => {
                    debug!("{} at {}", report.callsign, p);
                    stats.drawn += 1;
                }
                Err(e) => {
                    warn!("skipping aircraft {}: {}", report.callsign, e);
                    stats.skipped += 1;
                }
            }
        }

        if opts.calibrate {
            self.draw_calibration( canvas);
        }
        self.draw_ticks( canvas, opts);
        self.draw_fov_labels( canvas, opts);

        stats
    }

    fn draw_aircraft<C> (&self, canvas: &mut C, report: &AircraftReport, opts: &RenderOptions)->Result<ScreenPoint>
        where C: Canvas + ?Sized
    {
        let p = self.locate( report)?;
        let m = opts.marker_size;
        let d = opts.marker_point_size;

        canvas.stroke_rect( p.x - m, p.y - m, 2.0 * m, 2.0 * m);
        canvas.fill_rect( p.x - d, p.y - d, 2.0 * d, 2.0 * d);

        canvas.set_text_align( TextAlign::Left);
        let w = canvas.measure_text( &report.callsign);
        canvas.fill_text( &report.callsign, p.x - w / 2.0, p.y - m - opts.label_offset);

        Ok(p)
    }

    fn draw_calibration<C> (&self, canvas: &mut C) where C: Canvas + ?Sized {
        let (w, h) = (self.viewport.width_f64(), self.viewport.height_f64());
        let (cx, cy) = self.viewport.center();

        canvas.stroke_line( 0.0, cy, w, cy);
        canvas.stroke_line( cx, 0.0, cx, h);
    }

    fn draw_ticks<C> (&self, canvas: &mut C, opts: &RenderOptions) where C: Canvas + ?Sized {
        let (cx, cy) = self.viewport.center();
        let t = opts.tick_half_length;

        for v in tick_offsets( opts.horizontal_step, self.camera.half_horizontal_fov()) {
            for offset in [v, -v] {
                let x = self.projector.x( offset);
                canvas.stroke_line( x, cy - t, x, cy + t);
            }
        }

        for v in tick_offsets( opts.vertical_step, self.camera.half_vertical_fov()) {
            for offset in [v, -v] {
                let y = self.projector.y( offset);
                canvas.stroke_line( cx - t, y, cx + t, y);
            }
        }
    }

    fn draw_fov_labels<C> (&self, canvas: &mut C, opts: &RenderOptions) where C: Canvas + ?Sized {
        let (w, h) = (self.viewport.width_f64(), self.viewport.height_f64());
        let margin = opts.label_margin;
        let hfov = self.camera.horizontal_fov();
        let vfov = self.camera.vertical_fov();

        canvas.set_text_align( TextAlign::Center);
        canvas.fill_text( &degree_label( vfov), w / 2.0, margin + opts.font_size);
        canvas.fill_text( &degree_label( -vfov), w / 2.0, h - margin);

        let y = h / 2.0 - opts.font_size;
        canvas.set_text_align( TextAlign::Left);
        canvas.fill_text( &degree_label( hfov), margin, y);
        canvas.set_text_align( TextAlign::Right);
        canvas.fill_text( &degree_label( -hfov), w - margin, y);
    }
}
