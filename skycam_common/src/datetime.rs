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

use std::{fmt, time::Duration};
use chrono::{DateTime, Local, Timelike, Utc};
use serde::{Serialize,Deserialize};

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,PartialOrd)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub fn now ()->Self { EpochMillis( Utc::now().timestamp_millis()) }

    pub fn new (millis:i64)->Self { EpochMillis(millis) }

    pub fn millis (&self)->i64 { self.0 }
}

impl fmt::Display for EpochMillis {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::<Utc>::from_timestamp_millis(self.0) {
            Some(dt) => write!(f, "{}", dt),
            None => write!(f, "{}ms", self.0)
        }
    }
}

/// period of a given rate in Hz. Non-positive or non-finite rates are mapped to `None`
pub fn rate_interval (hz: f64)->Option<Duration> {
    if hz.is_finite() && hz > 0.0 { Some( Duration::from_secs_f64( 1.0 / hz)) } else { None }
}

/// this should be used wherever we might have to use a sim clock instead of the wall clock
#[inline]
pub fn local_now ()->DateTime<Local> {
    Local::now()
}

/// the hour [0..23] of the local wall clock
#[inline]
pub fn local_hour ()->u32 {
    local_now().hour()
}
