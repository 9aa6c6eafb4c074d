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

//! Operations on the notes attached to a deployment.
//!
//! Notes are short comments about a deployment, for example, to record the
//! reason for a configuration change. The notes are stored in the region of
//! the deployment, all the operations require a region.

use crate::client::CloudApi;
use crate::model::{
    CreateNoteRequest, GetNoteRequest, ListNotesRequest, Note, Notes, UpdateNoteRequest,
};
use crate::params::{api, check_api, check_deployment_id, check_region, region_options, validated};
use gax::multierror::Prefixed;

const ERR_EMPTY_MESSAGE: &str = "note comment cannot be empty";
const ERR_EMPTY_USER_ID: &str = "user id cannot be empty";
const ERR_EMPTY_NOTE_ID: &str = "note id cannot be empty";

/// The parameters identifying the notes of a deployment.
#[derive(Clone, Debug, Default)]
pub struct Params {
    pub api: Option<CloudApi>,
    pub id: String,
    pub region: String,
}

impl Params {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment note");
        check_api(&mut merr, &self.api);
        check_deployment_id(&mut merr, &self.id);
        check_region(&mut merr, &self.region);
        merr.into_result()
    }
}

/// The parameters for [add].
#[derive(Clone, Debug, Default)]
pub struct AddParams {
    pub params: Params,
    pub message: String,
    /// The user adding the note.
    pub user_id: String,
}

impl AddParams {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment note add");
        merr.push_result(self.params.validate());
        if self.message.is_empty() {
            merr.push(ERR_EMPTY_MESSAGE);
        }
        if self.user_id.is_empty() {
            merr.push(ERR_EMPTY_USER_ID);
        }
        merr.into_result()
    }
}

/// Adds a note to a deployment.
///
/// Returns all the notes of the deployment, including the new note.
pub async fn add(params: AddParams) -> crate::Result<Notes> {
    validated(params.validate())?;
    let AddParams {
        params,
        message,
        user_id,
    } = params;
    let note = Note::new().set_message(message).set_user_id(user_id);
    api(&params.api)?
        .create_note(
            CreateNoteRequest::new(params.id, note),
            region_options(&params.region),
        )
        .await
}

/// Lists the notes of a deployment.
pub async fn list(params: Params) -> crate::Result<Notes> {
    validated(params.validate())?;
    api(&params.api)?
        .list_notes(
            ListNotesRequest::new(params.id),
            region_options(&params.region),
        )
        .await
}

/// The parameters for [get].
#[derive(Clone, Debug, Default)]
pub struct GetParams {
    pub params: Params,
    pub note_id: String,
}

impl GetParams {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment note get");
        merr.push_result(self.params.validate());
        if self.note_id.is_empty() {
            merr.push(ERR_EMPTY_NOTE_ID);
        }
        merr.into_result()
    }
}

/// Gets a single note.
pub async fn get(params: GetParams) -> crate::Result<Note> {
    validated(params.validate())?;
    let GetParams { params, note_id } = params;
    api(&params.api)?
        .get_note(
            GetNoteRequest::new(params.id, note_id),
            region_options(&params.region),
        )
        .await
}

/// The parameters for [update].
#[derive(Clone, Debug, Default)]
pub struct UpdateParams {
    pub params: Params,
    /// The new message.
    pub message: String,
    /// The user updating the note.
    pub user_id: String,
    pub note_id: String,
}

impl UpdateParams {
    pub fn validate(&self) -> Result<(), Prefixed> {
        let mut merr = Prefixed::new("deployment note update");
        merr.push_result(self.params.validate());
        if self.message.is_empty() {
            merr.push(ERR_EMPTY_MESSAGE);
        }
        if self.user_id.is_empty() {
            merr.push(ERR_EMPTY_USER_ID);
        }
        if self.note_id.is_empty() {
            merr.push(ERR_EMPTY_NOTE_ID);
        }
        merr.into_result()
    }
}

/// Replaces the message of an existing note.
///
/// The note is read first, only its message and author change. The author
/// becomes `user_id`.
pub async fn update(params: UpdateParams) -> crate::Result<Note> {
    validated(params.validate())?;
    let UpdateParams {
        params,
        message,
        user_id,
        note_id,
    } = params;
    let client = api(&params.api)?;
    let options = region_options(&params.region);
    let note = client
        .get_note(
            GetNoteRequest::new(params.id.as_str(), note_id.as_str()),
            options.clone(),
        )
        .await?;
    client
        .update_note(
            UpdateNoteRequest::new(
                params.id,
                note_id,
                note.set_message(message).set_user_id(user_id),
            ),
            options,
        )
        .await
}
