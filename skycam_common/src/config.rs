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

//! RON based configuration lookup and loading.
//!
//! Config files are looked up in this order:
//!  1. the given filename as is (absolute or relative to the current dir)
//!  2. `$SKYCAM_CONFIGS/<filename>` if the `SKYCAM_CONFIGS` env var is set
//!  3. `./configs/<filename>`

use std::{env, fs, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;
use crate::define_error;

pub const CONFIGS: &'static str = "configs";
pub const CONFIG_DIR_VAR: &'static str = "SKYCAM_CONFIGS";

define_error!{ pub ConfigError =
    IOError( #[from] std::io::Error) : "IO error: {0}",
    RonError( #[from] ron::error::SpannedError) : "config RON error: {0}",
    NotFound(String) : "config not found: {0}"
}

pub type Result<T> = std::result::Result<T,ConfigError>;

pub fn find_config_file (filename: &str) -> Option<PathBuf> {
    let path = Path::new(filename);
    if path.is_file() { return Some(path.to_path_buf()) }

    if let Ok(dir) = env::var(CONFIG_DIR_VAR) {
        let path = Path::new(&dir).join(filename);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new(CONFIGS).join(filename);
    if path.is_file() { Some(path) } else { None }
}

/// load config of type C from a RON file found via [`find_config_file`]
pub fn load_config<C> (filename: &str) -> Result<C> where C: DeserializeOwned {
    match find_config_file( filename) {
        Some(path) => {
            let data = fs::read( &path)?;
            Ok( ron::de::from_bytes( data.as_slice())? )
        }
        None => Err( ConfigError::NotFound( filename.to_string()))
    }
}

/// parse config of type C from RON source text
pub fn config_from_str<C> (src: &str) -> Result<C> where C: DeserializeOwned {
    Ok( ron::from_str( src)? )
}
