//! Wire shapes of the Airtable tables.
//!
//! Field names follow the base's column names, including `IMDb_rating`.

use marquee_core::MarqueeError;
use marquee_core::movie::Movie;
use marquee_core::record::RawRecord;
use marquee_core::user::{UserAccount, UserPatch};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a list request.
#[derive(Debug, Deserialize)]
pub struct RecordPage {
    pub records: Vec<RawRecord>,
    /// Cursor for the next page; present only when more records exist.
    #[serde(default)]
    pub offset: Option<String>,
}

/// Columns of the `movies` table.
#[derive(Debug, Default, Deserialize)]
pub struct MovieFields {
    pub name: Option<String>,
    pub poster: Option<String>,
    pub genre: Option<Vec<String>>,
    #[serde(rename = "IMDb_rating")]
    pub imdb_rating: Option<f64>,
    pub runtime: Option<String>,
}

/// Columns of the `users` table.
#[derive(Debug, Default, Deserialize)]
pub struct UserFields {
    pub name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
}

/// Body of a user PATCH; unset fields are left out of the JSON entirely.
#[derive(Debug, Default, Serialize)]
pub struct UserFieldsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<UserPatch> for UserFieldsPatch {
    fn from(patch: UserPatch) -> Self {
        Self {
            name: patch.name,
            email: patch.email,
            profile_image: patch.profile_image_url,
            password: patch.password,
        }
    }
}

impl UserFieldsPatch {
    /// Converts the patch into the `fields` object of the request body.
    pub fn into_fields(self) -> Result<Map<String, Value>, MarqueeError> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(fields),
            other => Err(MarqueeError::internal(format!(
                "User patch serialized to a non-object: {}",
                other
            ))),
        }
    }
}

fn decode_fields<T: for<'de> Deserialize<'de>>(
    table: &str,
    record: &RawRecord,
) -> Result<T, MarqueeError> {
    serde_json::from_value(record.fields.clone()).map_err(|e| {
        MarqueeError::decode(format!(
            "Invalid fields in {} record '{}': {}",
            table, record.id, e
        ))
    })
}

/// Maps a `movies` record to the domain entity.
pub fn movie_from_record(record: RawRecord) -> Result<Movie, MarqueeError> {
    let fields: MovieFields = decode_fields("movies", &record)?;
    Ok(Movie::from_parts(
        record.id,
        fields.name,
        fields.poster.as_deref(),
        fields.genre,
        fields.imdb_rating,
        fields.runtime,
    ))
}

/// Maps a `users` record to the domain entity.
pub fn user_from_record(record: RawRecord) -> Result<UserAccount, MarqueeError> {
    let fields: UserFields = decode_fields("users", &record)?;
    Ok(UserAccount {
        id: record.id,
        name: fields.name,
        email: fields.email,
        password_plaintext: fields.password,
        profile_image_url: fields.profile_image,
    })
}
