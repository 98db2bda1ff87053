//! `Authorization` header parsing

use crate::AuthError;

/// The only accepted scheme keyword (case-sensitive)
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly two whitespace-separated parts, the first being
/// the literal `Bearer`. `None` means the header was absent.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;

    let mut parts = header.split_whitespace();
    let (Some(scheme), token, rest) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AuthError::invalid_header(
            "Authorization header must be bearer token.",
        ));
    };

    if scheme != BEARER_SCHEME {
        return Err(AuthError::invalid_header(
            "Authorization header must start with \"Bearer\".",
        ));
    }

    match (token, rest) {
        (None, _) => Err(AuthError::invalid_header("Token not found.")),
        (Some(_), Some(_)) => Err(AuthError::invalid_header(
            "Authorization header must be bearer token.",
        )),
        (Some(token), None) => Ok(token),
    }
}
