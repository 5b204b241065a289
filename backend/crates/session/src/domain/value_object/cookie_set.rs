//! Cookie Set Value Object
//!
//! A signed refresh token is a three-part dot-joined string. On the wire
//! it is split across three separate HTTP-only cookies so that no single
//! cookie carries a usable credential. `CookieSet` models what a request
//! actually presented:
//!
//! - `Absent`   - none of the three cookies were sent (not logged in)
//! - `Partial`  - some but not all were sent (tampering or breakage)
//! - `Complete` - all three segments are present and can be reassembled
//!
//! The tri-state matters: the refresh protocol rejects `Absent` and
//! `Partial` with different terminal outcomes.

/// The three refresh-token segments as presented by a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieSet {
    /// No segment cookie was sent
    Absent,
    /// At least one but not all three segments were sent
    Partial,
    /// All three segments are present, in token order
    Complete {
        header: String,
        payload: String,
        signature: String,
    },
}

impl CookieSet {
    /// Classify three optional cookie values read from a request
    pub fn from_parts(
        header: Option<String>,
        payload: Option<String>,
        signature: Option<String>,
    ) -> Self {
        match (header, payload, signature) {
            (None, None, None) => CookieSet::Absent,
            (Some(header), Some(payload), Some(signature)) => CookieSet::Complete {
                header,
                payload,
                signature,
            },
            _ => CookieSet::Partial,
        }
    }

    /// Split a signed token into its three dot-delimited segments
    ///
    /// Returns `None` when the token does not have exactly three parts.
    pub fn split(token: &str) -> Option<(&str, &str, &str)> {
        let mut parts = token.split('.');
        let header = parts.next()?;
        let payload = parts.next()?;
        let signature = parts.next()?;
        if parts.next().is_some() || header.is_empty() || payload.is_empty() {
            return None;
        }
        Some((header, payload, signature))
    }

    /// Reassemble the original token by dot-joining the segments
    ///
    /// Only a `Complete` set reconstructs; the caller decides what the
    /// other two states mean.
    pub fn reconstruct(&self) -> Option<String> {
        match self {
            CookieSet::Complete {
                header,
                payload,
                signature,
            } => Some(format!("{header}.{payload}.{signature}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_absent() {
        assert_eq!(CookieSet::from_parts(None, None, None), CookieSet::Absent);
    }

    #[test]
    fn test_from_parts_partial() {
        assert_eq!(
            CookieSet::from_parts(Some("a".into()), None, None),
            CookieSet::Partial
        );
        assert_eq!(
            CookieSet::from_parts(Some("a".into()), Some("b".into()), None),
            CookieSet::Partial
        );
        assert_eq!(
            CookieSet::from_parts(None, Some("b".into()), Some("c".into())),
            CookieSet::Partial
        );
    }

    #[test]
    fn test_complete_reconstructs_in_order() {
        let set = CookieSet::from_parts(Some("a".into()), Some("b".into()), Some("c".into()));
        assert_eq!(set.reconstruct(), Some("a.b.c".to_string()));
    }

    #[test]
    fn test_absent_and_partial_do_not_reconstruct() {
        assert_eq!(CookieSet::Absent.reconstruct(), None);
        assert_eq!(CookieSet::Partial.reconstruct(), None);
    }

    #[test]
    fn test_split_roundtrip() {
        let (h, p, s) = CookieSet::split("aaa.bbb.ccc").unwrap();
        assert_eq!((h, p, s), ("aaa", "bbb", "ccc"));

        let set = CookieSet::from_parts(Some(h.into()), Some(p.into()), Some(s.into()));
        assert_eq!(set.reconstruct(), Some("aaa.bbb.ccc".to_string()));
    }

    #[test]
    fn test_split_rejects_wrong_shape() {
        assert!(CookieSet::split("no-dots").is_none());
        assert!(CookieSet::split("one.dot").is_none());
        assert!(CookieSet::split("a.b.c.d").is_none());
        assert!(CookieSet::split(".b.c").is_none());
    }
}
