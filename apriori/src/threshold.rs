// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! The minimum support threshold.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A minimum support threshold, expressed as a percentage in `[0, 100]`.
///
/// The mining functions take the raw percentage and do not validate it; `MinSupport` is the
/// checked form used when the threshold comes from user input.
///
/// ```
/// # use apriori::MinSupport;
/// let min_support: MinSupport = "50%".parse().unwrap();
/// assert_eq!(min_support.percent(), 50.0);
/// assert!("150".parse::<MinSupport>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MinSupport(f64);

impl MinSupport {
    /// Creates a threshold, rejecting values that are not finite or outside `[0, 100]`.
    pub fn new(percent: f64) -> Result<Self, Error> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(Error::invalid_argument(format!(
                "minimum support must be within [0, 100], got {percent}"
            )));
        }
        Ok(Self(percent))
    }

    /// Returns the threshold as a percentage.
    pub fn percent(&self) -> f64 {
        self.0
    }
}

impl FromStr for MinSupport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
        let percent = number.trim().parse::<f64>().map_err(|err| {
            Error::invalid_argument(format!("invalid minimum support {s:?}")).set_source(err)
        })?;
        Self::new(percent)
    }
}

impl fmt::Display for MinSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}
