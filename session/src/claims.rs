//! Credential claim decoding and expiry checks.
//!
//! TRUST BOUNDARY
//! ==============
//! Signatures are not verified here. Claims are read only to pick menus and
//! redirects; the API server re-checks authorization on every request.
//!
//! ERROR HANDLING
//! ==============
//! Decoding never panics. Every malformed input maps to a [`DecodeError`]
//! variant, and [`is_expired`] treats any such error as expired.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The credential has no second dot-separated segment.
    #[error("credential has no payload segment")]
    MissingPayload,
    /// The payload segment is not valid base64 in either alphabet.
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded payload is not a JSON object.
    #[error("payload is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
    /// `sub` is absent or does not hold an integer.
    #[error("subject claim is missing or not an integer")]
    InvalidSubject,
    /// `exp` is absent or not a number.
    #[error("expiry claim is missing or not a number")]
    MissingExpiry,
}

/// Closed set of roles the UI routes on.
///
/// Parsed from the exact claim string; anything unrecognized keeps its label
/// for display but gets the lowest-privilege treatment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    CarSpec,
    User,
    Unknown(String),
}

impl Role {
    /// Claim label for this role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::CarSpec => "CarSpec",
            Self::User => "User",
            Self::Unknown(label) => label,
        }
    }
}

impl From<&str> for Role {
    fn from(label: &str) -> Self {
        match label {
            "Admin" => Self::Admin,
            "CarSpec" => Self::CarSpec,
            "User" => Self::User,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who the current credential belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Numeric user id from the `sub` claim.
    pub id: i64,
    /// Role claim; `None` when absent or empty.
    pub role: Option<Role>,
}

impl Identity {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Raw payload claims.
///
/// Fields stay as loose JSON so that a bad `exp` does not hide a good `sub`
/// and vice versa; each operation validates only what it reads.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Value,
    #[serde(default)]
    pub exp: Value,
    #[serde(default)]
    pub role: Value,
}

impl Claims {
    /// Parse the payload segment of `credential`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingPayload`], [`DecodeError::Base64`] or
    /// [`DecodeError::Json`] when the segment cannot be read.
    pub fn parse(credential: &str) -> Result<Self, DecodeError> {
        let payload = credential
            .split('.')
            .nth(1)
            .ok_or(DecodeError::MissingPayload)?;
        let bytes = match STANDARD_LENIENT.decode(payload) {
            Ok(bytes) => bytes,
            Err(_) => URL_SAFE_LENIENT.decode(payload)?,
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Subject as an integer user id.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidSubject`] unless `sub` is a whole number
    /// (`5` or `5.0`) or a string holding an integer.
    pub fn subject(&self) -> Result<i64, DecodeError> {
        match &self.sub {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(whole_number))
                .ok_or(DecodeError::InvalidSubject),
            Value::String(s) => s.trim().parse().map_err(|_| DecodeError::InvalidSubject),
            _ => Err(DecodeError::InvalidSubject),
        }
    }

    /// Role claim; empty or non-string values count as absent.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match &self.role {
            Value::String(s) if !s.is_empty() => Some(Role::from(s.as_str())),
            _ => None,
        }
    }

    /// Expiry in seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingExpiry`] when `exp` is absent or not numeric.
    pub fn expiry(&self) -> Result<f64, DecodeError> {
        self.exp.as_f64().ok_or(DecodeError::MissingExpiry)
    }
}

/// `f` as an `i64` when it has no fractional part and fits.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_number(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (in_range && f.fract() == 0.0).then(|| f as i64)
}

/// Decode `credential` into an [`Identity`].
///
/// # Errors
///
/// Any malformed input: missing segments, bad base64, bad JSON or a
/// non-numeric subject.
pub fn decode(credential: &str) -> Result<Identity, DecodeError> {
    let claims = Claims::parse(credential)?;
    Ok(Identity { id: claims.subject()?, role: claims.role() })
}

/// Whether `credential` must be treated as expired at `now_ms`.
///
/// Fails closed: an unreadable credential or missing `exp` counts as expired.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn is_expired(credential: &str, now_ms: i64) -> bool {
    match Claims::parse(credential).and_then(|claims| claims.expiry()) {
        Ok(exp) => exp * 1000.0 < now_ms as f64,
        Err(e) => {
            log::debug!("treating credential as expired: {e}");
            true
        }
    }
}

/// Wall-clock milliseconds since the Unix epoch.
///
/// Native targets only; browser callers pass `js_sys::Date::now()` instead.
#[must_use]
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}
