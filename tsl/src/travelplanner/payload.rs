//! Isolating the JSON body inside a raw HTTP response.

/// Returned when a response contains no `{ ... }` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no JSON object found in response")]
pub struct NoJson;

/// Returns the JSON object embedded in a raw HTTP response.
///
/// Finds the last `}` in `response`, then the first `{` before it, and
/// returns everything between the two, inclusive. The status line and
/// headers in front, and any trailing bytes after the body, are dropped.
///
/// This is a boundary finder, not a brace matcher. It is only correct when
/// the response holds a single JSON object and no `{` or `}` appears in the
/// status line or headers before it, or after it. Nothing here checks that
/// precondition; a stray brace in a header yields a slice that will fail to
/// parse later.
///
/// # Errors
///
/// Returns `NoJson` if there is no `}`, or no `{` before the last `}`.
///
/// # Examples
///
/// ```
/// use tsl::travelplanner::isolate;
///
/// let raw = b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n{\"TripList\":{}}\r\n";
/// assert_eq!(isolate(raw).unwrap(), b"{\"TripList\":{}}");
///
/// assert!(isolate(b"HTTP/1.1 502 Bad Gateway\r\n\r\n").is_err());
/// ```
pub fn isolate(response: &[u8]) -> Result<&[u8], NoJson> {
    let end = response.iter().rposition(|&b| b == b'}').ok_or(NoJson)?;
    let head = &response[..=end];
    let start = head.iter().position(|&b| b == b'{').ok_or(NoJson)?;
    Ok(&head[start..])
}
