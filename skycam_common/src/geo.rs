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

//! geodetic points on the WGS84 ellipsoid and the observer-relative deltas between them.
//! We do not implement ellipsoid math ourselves but use [nav_types](https://docs.rs/nav-types/latest/nav_types/index.html)
//! for the WGS84 -> ECEF conversion and [nalgebra](https://docs.rs/nalgebra) for the rotation of ECEF
//! differences into the local North-East-Down frame of the observer.

use std::fmt;
use serde::{Serialize,Deserialize};
use nalgebra::{Matrix3,Vector3};
use nav_types::{ECEF,WGS84};
use uom::si::f64::Length;
use uom::si::length::meter;

use crate::angle::{normalize_180, Angle90, Angle360};

/* #region GeoPoint3 ***********************************************************************************************/

/// 3 dimensional point given by latitude, longitude (both in degrees) and altitude above the ellipsoid (in meters).
/// Note that the constructors do not validate and deserialized points are not normalized - use [`GeoPoint3::normalized`]
/// and [`GeoPoint3::is_valid`] before converting data from untrusted sources (nav_types asserts lat/lon ranges)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoPoint3 {
    #[serde(alias="latitude")]
    lat: f64,
    #[serde(alias="longitude", alias="lng")]
    lon: f64,
    #[serde(alias="altitude", default)]
    alt: f64,
}

impl GeoPoint3 {
    pub fn from_lon_lat_degrees_alt_meters (lon: f64, lat: f64, alt: f64) -> Self {
        GeoPoint3 { lat, lon: normalize_180(lon), alt }
    }

    pub fn from_lon_lat_degrees_alt (lon: f64, lat: f64, alt: Length) -> Self {
        Self::from_lon_lat_degrees_alt_meters( lon, lat, alt.get::<meter>())
    }

    #[inline] pub fn latitude_degrees (&self) -> f64 { self.lat }
    #[inline] pub fn longitude_degrees (&self) -> f64 { self.lon }
    #[inline] pub fn altitude_meters (&self) -> f64 { self.alt }
    #[inline] pub fn altitude (&self) -> Length { Length::new::<meter>(self.alt) }

    /// same point with longitude wrapped into (-180,180]
    pub fn normalized (&self) -> Self {
        GeoPoint3 { lon: normalize_180( self.lon), ..*self }
    }

    /// all components finite, latitude within [-90,90] and longitude within [-180,180]
    pub fn is_valid (&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.alt.is_finite()
            && self.lat.abs() <= 90.0 && self.lon.abs() <= 180.0
    }

    /// non-consuming conversion to ECEF (note that nav_types::WGS84 uses lat,lon order)
    pub fn as_ecef (&self) -> ECEF<f64> {
        WGS84::from_degrees_and_meters( self.lat, self.lon, self.alt).into()
    }

    /// the vector from `self` to `other`, expressed in the local North-East-Down frame of `self`
    pub fn ned_delta_to (&self, other: &GeoPoint3) -> NedDelta {
        let p0 = self.as_ecef();
        let p1 = other.as_ecef();
        let d = Vector3::new( p1.x() - p0.x(), p1.y() - p0.y(), p1.z() - p0.z());

        let (sin_lat, cos_lat) = self.lat.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.lon.to_radians().sin_cos();

        // rows are the local north, east and down unit vectors in ECEF
        let r = Matrix3::new(
            -sin_lat * cos_lon,  -sin_lat * sin_lon,   cos_lat,
            -sin_lon,             cos_lon,             0.0,
            -cos_lat * cos_lon,  -cos_lat * sin_lon,  -sin_lat
        );

        NedDelta( r * d)
    }
}

impl fmt::Display for GeoPoint3 {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}m]", self.lat, self.lon, self.alt)
    }
}

/* #endregion GeoPoint3 */

/* #region NedDelta ***********************************************************************************************/

/// observer-relative delta vector in meters (north, east, down)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct NedDelta( Vector3<f64>);

impl NedDelta {
    pub fn new (north: f64, east: f64, down: f64) -> Self { NedDelta( Vector3::new( north, east, down)) }

    #[inline] pub fn north (&self) -> f64 { self.0.x }
    #[inline] pub fn east (&self) -> f64 { self.0.y }
    #[inline] pub fn down (&self) -> f64 { self.0.z }

    /// straight line distance in meters
    #[inline] pub fn length (&self) -> f64 { self.0.norm() }

    /// clockwise from true north. Zero for coincident points
    pub fn bearing (&self) -> Angle360 {
        Angle360::from_radians( self.east().atan2( self.north()))
    }

    /// angle above the local horizontal plane. Zero for coincident points
    pub fn elevation (&self) -> Angle90 {
        let horizontal = self.north().hypot( self.east());
        if horizontal > 0.0 || self.down() != 0.0 {
            Angle90::from_radians( (-self.down()).atan2( horizontal))
        } else {
            Angle90::from_degrees(0.0)
        }
    }
}

impl fmt::Display for NedDelta {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NED({:.1},{:.1},{:.1})", self.north(), self.east(), self.down())
    }
}

/* #endregion NedDelta */
