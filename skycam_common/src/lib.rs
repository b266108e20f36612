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

//! shared utilities of the skycam crates: normalized angles, WGS84 geo points with local
//! NED deltas, datetime helpers, RON config loading and the error/cli definition macros

pub mod macros;
pub mod angle;
pub mod geo;
pub mod datetime;
pub mod config;

/// true if all given values are finite (neither NaN nor infinite)
#[inline]
pub fn all_finite (vs: &[f64])->bool {
    vs.iter().all( |v| v.is_finite())
}
