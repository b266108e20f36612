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

use std::{fmt, marker::PhantomData, cmp};
use serde::{Serialize, Deserialize, Serializer, Deserializer};

/// fold degrees into [-90,90] (latitude semantics: 100 becomes 80)
#[inline]
pub fn normalize_90 (d: f64) -> f64 {
    let x = normalize_180(d);

    if x < -90.0 { -180.0 - x }
    else if x > 90.0 { 180.0 - x }
    else { x }
}

/// wrap degrees into (-180,180]
#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x <= -180.0 { x + 360.0 }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// wrap degrees into [0,360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 {
        let y = x + 360.0;
        if y >= 360.0 { 0.0 } else { y } // -1e-17 + 360 rounds to 360
    } else {
        x
    }
}

/// signed smallest difference `a - b` in degrees, wrapped into (-180,180]
#[inline]
pub fn angle_diff_180 (a: f64, b: f64) -> f64 {
    normalize_180( a - b)
}

pub trait AngleKind {
    fn normalize (v: f64)->f64;
    fn name ()->&'static str;
}

#[derive(Debug,Clone,Copy)]
pub struct HalfPiKind {}
impl AngleKind for HalfPiKind {
    fn normalize (v: f64) -> f64 { normalize_90(v) }
    fn name ()->&'static str { "Angle90" }
}

#[derive(Debug,Clone,Copy)]
pub struct FullCircleKind {}
impl AngleKind for FullCircleKind {
    fn normalize (v: f64) -> f64 { normalize_360(v) }
    fn name ()->&'static str { "Angle360" }
}

/// a degree value that is normalized according to its kind upon construction
#[derive(Copy, Clone)]
pub struct NormalizedAngle<K> where K: AngleKind {
    value: f64,
    kind: PhantomData<K>,
}

impl<K> NormalizedAngle<K> where K: AngleKind {
    #[inline]
    pub fn from_degrees (deg: f64) -> Self {
        NormalizedAngle { value: K::normalize(deg), kind: PhantomData }
    }

    #[inline]
    pub fn from_radians (rad: f64) -> Self {
        Self::from_degrees( rad.to_degrees())
    }

    #[inline] pub fn degrees (&self)->f64 { self.value }
    #[inline] pub fn radians (&self)->f64 { self.value.to_radians() }

    #[inline] pub fn sin (&self)->f64 { self.radians().sin() }
    #[inline] pub fn cos (&self)->f64 { self.radians().cos() }
}

/// elevation angles and other [-90,90] quantities
pub type Angle90 = NormalizedAngle<HalfPiKind>;

/// bearings (clockwise from true north)
pub type Angle360 = NormalizedAngle<FullCircleKind>;

impl<K> fmt::Display for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}°", self.value) }
}

impl<K> fmt::Debug for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}({})", K::name(), self.value) }
}

impl<K> cmp::PartialEq for NormalizedAngle<K> where K: AngleKind {
    fn eq (&self, other: &Self) -> bool { self.value == other.value }
}

impl<K> cmp::PartialOrd for NormalizedAngle<K> where K: AngleKind {
    fn partial_cmp (&self, other: &Self) -> Option<cmp::Ordering> { self.value.partial_cmp( &other.value) }
}

impl<K> From<NormalizedAngle<K>> for f64 where K: AngleKind {
    fn from (a: NormalizedAngle<K>) -> Self { a.value }
}

//--- serde support (plain degree numbers)

impl<K> Serialize for NormalizedAngle<K> where K: AngleKind {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64( self.value)
    }
}

impl<'de,K> Deserialize<'de> for NormalizedAngle<K> where K: AngleKind {
    fn deserialize<D> (deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let deg = f64::deserialize( deserializer)?;
        if deg.is_finite() {
            Ok( Self::from_degrees(deg) )
        } else {
            Err( serde::de::Error::custom( format!("non-finite {} degrees", K::name())) )
        }
    }
}
