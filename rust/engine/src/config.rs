// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Import configuration supplied by the caller.

use serde::{Deserialize, Serialize};

/// Import configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Uniform scale factor applied to every vertex coordinate at decode
    /// time.
    pub scale: f64,
}

impl ImportConfig {
    /// Configuration with a non-default scale factor.
    pub fn with_scale(scale: f64) -> Self {
        Self { scale }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
