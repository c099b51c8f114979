//! Token sanitization for the serial input stream.
//!
//! Every value the pipeline encodes passes through here first: one textual
//! token becomes one bounded, non-negative 32-bit serial, or ends the
//! stream. Downstream consumers rely on the non-negative convention, so the
//! sign bit is stripped rather than rejected.

/// A sanitized serial value, always in `[0, i32::MAX]`.
pub type Serial = i32;

/// Mask that clears the sign bit of a parsed value.
const SIGN_MASK: i64 = 0x7fff_ffff;

/// Parse one input token into a [`Serial`].
///
/// The token is parsed as a base-10 signed 64-bit integer and the sign bit
/// of the low 32 bits is cleared, so the result is non-negative even for
/// negative or sign-bit-heavy input. Returns `None` when the token is not a
/// base-10 integer; callers treat that as end of input, not as a value to
/// skip.
///
/// ```
/// use serial2parquet::sanitize::sanitize_token;
///
/// assert_eq!(sanitize_token("42"), Some(42));
/// assert_eq!(sanitize_token("-3"), Some(2_147_483_645));
/// assert_eq!(sanitize_token("forty-two"), None);
/// ```
pub fn sanitize_token(token: &str) -> Option<Serial> {
    let parsed: i64 = token.parse().ok()?;
    Some((parsed & SIGN_MASK) as Serial)
}

/// Adapt a stream of raw lines into a stream of sanitized serials.
///
/// Production stops at the first line that fails to parse; lines after it
/// are never pulled from `lines`. The returned iterator is single-pass and
/// pull-driven; no line is read before a serial is requested.
pub fn serials<I>(lines: I) -> impl Iterator<Item = Serial>
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().map_while(|line| sanitize_token(&line))
}
