// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Checks and messages shared by the parameter sets.

use crate::client::CloudApi;
use gax::error::Error;
use gax::multierror::Prefixed;

/// The length of a well-formed deployment id.
pub(crate) const DEPLOYMENT_ID_LEN: usize = 32;

pub(crate) const ERR_MISSING_API: &str = "api reference is required for the operation";
pub(crate) const ERR_DEPLOYMENT_ID: &str = "deployment id should have a length of 32 characters";
pub(crate) const ERR_MISSING_REGION: &str =
    "region not specified and is required for this operation";

pub(crate) fn invalid_deployment_id(id: &str) -> String {
    format!("id \"{id}\" is invalid")
}

/// Records the standard failure for a missing API handle.
pub(crate) fn check_api(merr: &mut Prefixed, api: &Option<CloudApi>) {
    if api.is_none() {
        merr.push(ERR_MISSING_API);
    }
}

/// Records the standard failure for a malformed deployment id.
pub(crate) fn check_deployment_id(merr: &mut Prefixed, id: &str) {
    if id.len() != DEPLOYMENT_ID_LEN {
        merr.push(invalid_deployment_id(id));
    }
}

pub(crate) fn check_region(merr: &mut Prefixed, region: &str) {
    if region.is_empty() {
        merr.push(ERR_MISSING_REGION);
    }
}

/// Converts the result of a parameter set validation into an error.
pub(crate) fn validated(result: Result<(), Prefixed>) -> crate::Result<()> {
    result.map_err(|e| {
        tracing::debug!("invalid parameters: {e}");
        Error::validation(e)
    })
}

/// Returns the API handle of a validated parameter set.
///
/// The parameter sets check the handle is present, this only fails if the
/// caller skipped the validation.
pub(crate) fn api(api: &Option<CloudApi>) -> crate::Result<&CloudApi> {
    api.as_ref()
        .ok_or_else(|| Error::validation(Prefixed::new("").append(ERR_MISSING_API)))
}

/// The options for a request scoped to `region`, if any.
pub(crate) fn region_options(region: &str) -> gax::options::RequestOptions {
    if region.is_empty() {
        return gax::options::RequestOptions::default();
    }
    gax::options::RequestOptions::with_region(region)
}
