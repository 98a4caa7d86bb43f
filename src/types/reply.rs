use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::Error;

/// Outcome of a submission that completed at the transport level.
pub enum Submission {
    /// The decoded success body.
    Data(Value),
    /// The server answered with a redirect. The navigator has already been
    /// handed the final URL; no body was read.
    Navigated(Url),
}

/// A reply body, classified.
///
/// The funding API carries the disposition of a POST in the body rather
/// than the status code: an object with an `error` key is an application
/// failure, an object whose `errors` key holds a JSON-encoded validation
/// report is a rejected payload, and anything else is the success value.
/// `error` wins when both keys are present.
#[derive(Debug)]
pub enum Reply {
    /// Success value, no `error` or `errors` key.
    Success(Value),
    /// The `error` field's value, any JSON.
    Failure(Value),
    /// Decoded validation report, in server order.
    Invalid(Vec<FieldError>),
}

impl Reply {
    /// Classifies a raw reply body.
    ///
    /// Fails with [`Error::MalformedJson`] when the body, or the nested
    /// validation report inside an `errors` reply, is not valid JSON.
    pub fn decode(body: &str) -> Result<Reply, Error> {
        let raw = serde_json::from_str::<RawReply>(body).map_err(|e| {
            tracing::error!("Failed to parse reply body: {}", e);
            Error::MalformedJson(e)
        })?;
        Ok(match raw {
            RawReply::Failure { error } => Reply::Failure(error),
            RawReply::Invalid { errors } => {
                let fields = serde_json::from_str::<Vec<FieldError>>(&errors).map_err(|e| {
                    tracing::error!("Failed to parse validation report: {}", e);
                    Error::MalformedJson(e)
                })?;
                Reply::Invalid(fields)
            }
            RawReply::Success(value) => Reply::Success(value),
        })
    }
}

/// Wire-level classification. Variant order is the decode priority:
/// `error` is checked before `errors`, everything else is a success.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawReply {
    Failure {
        error: Value,
    },
    /// The validation report arrives double-encoded: a JSON string nested
    /// inside the already-decoded reply. That is the backend's error
    /// serialization convention, so the string is parsed a second time.
    Invalid {
        errors: String,
    },
    Success(Value),
}

/// A validation error tied to a named location in the submitted payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Where in the payload the error applies.
    pub loc: FieldPath,
    /// Human-readable message for that location.
    pub msg: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc, self.msg)
    }
}

/// Location of a rejected field. The validator reports either a bare field
/// name or a path of names and indices into the payload; a path renders
/// comma-joined.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldPath {
    Name(String),
    Path(Vec<PathSegment>),
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name(name) => f.write_str(name),
            FieldPath::Path(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", segment)?;
                }
                Ok(())
            }
        }
    }
}

/// One step of a [`FieldPath`]: a field name or a sequence index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Name(String),
    Index(u64),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Name(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}
