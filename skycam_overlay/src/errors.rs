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

use skycam_common::define_error;

pub type Result<T> = std::result::Result<T, SkycamError>;

define_error!{ pub SkycamError =
    InvalidInput(String) : "invalid input: {0}",
    ConfigurationError(String) : "configuration error: {0}",
    ConfigError( #[from] skycam_common::config::ConfigError) : "{0}",
    AdsbError( #[from] skycam_adsb::AdsbError) : "{0}",
    ImageError( #[from] image::ImageError) : "image error: {0}",
    FontError( #[from] ab_glyph::InvalidFont) : "font error: {0}",
    IOError( #[from] std::io::Error) : "IO error: {0}"
}

pub fn invalid_input (msg: impl ToString)->SkycamError {
    SkycamError::InvalidInput( msg.to_string())
}

pub fn configuration_error (msg: impl ToString)->SkycamError {
    SkycamError::ConfigurationError( msg.to_string())
}
