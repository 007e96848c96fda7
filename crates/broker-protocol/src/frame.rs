//! Bracketed text codec.
//!
//! A wire message is a sequence of bracket-delimited fields:
//!
//! ```text
//! [field1][field2]...
//! ```
//!
//! Decoding consumes exactly the first two groups as `(topic, payload)`;
//! any trailing groups are ignored. Group contents are passed through
//! verbatim — no trimming, no unescaping — so a payload like
//! `game1,X5` reaches the handler intact and the handler does any
//! further splitting itself.

use crate::error::FrameError;

/// One decoded `(topic, payload)` unit.
///
/// Both fields are non-empty by construction: empty bracket groups
/// (`[]`) never match, and [`decode`] fails outright when fewer than
/// two groups are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Routing key selecting which handler processes the payload.
    pub topic: String,

    /// Handler-specific payload, verbatim from the wire.
    pub payload: String,
}

/// Decode a raw wire message into a [`Frame`].
///
/// Scans for non-overlapping bracket groups: a group opens at `[`,
/// runs to the first following `]`, and must be non-empty. A group's
/// content may itself contain `[` but never `]`.
///
/// Fails with [`FrameError::Malformed`] when fewer than two groups
/// are found.
pub fn decode(raw: &str) -> Result<Frame, FrameError> {
    let mut groups = bracket_groups(raw);

    let topic = groups.next();
    let payload = groups.next();

    match (topic, payload) {
        (Some(topic), Some(payload)) => Ok(Frame {
            topic: topic.to_string(),
            payload: payload.to_string(),
        }),
        _ => Err(FrameError::Malformed(raw.to_string())),
    }
}

/// Encode a `(topic, result)` pair as the literal `[topic][result]`.
///
/// Never fails. Callers must ensure the fields contain no unescaped
/// brackets if the output has to round-trip back through [`decode`].
pub fn encode(topic: &str, result: &str) -> String {
    format!("[{topic}][{result}]")
}

/// Iterate the non-empty bracket groups of `raw`, in order.
fn bracket_groups(raw: &str) -> impl Iterator<Item = &str> {
    let mut rest = raw;

    std::iter::from_fn(move || {
        while let Some(open) = rest.find('[') {
            let after = &rest[open + 1..];
            let close = after.find(']')?;

            let content = &after[..close];
            rest = &after[close + 1..];

            if !content.is_empty() {
                return Some(content);
            }
            // Empty group: keep scanning after its closing bracket.
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_two_groups() {
        let frame = decode("[move][game1,X5]").unwrap();
        assert_eq!(frame.topic, "move");
        assert_eq!(frame.payload, "game1,X5");
    }

    #[test]
    fn decode_ignores_trailing_groups() {
        let frame = decode("[start][g1][extra][more]").unwrap();
        assert_eq!(frame.topic, "start");
        assert_eq!(frame.payload, "g1");
    }

    #[test]
    fn decode_passes_payload_through_verbatim() {
        let frame = decode("[update][g1, -,-,X ,O]").unwrap();
        assert_eq!(frame.payload, "g1, -,-,X ,O");
    }

    #[test]
    fn decode_skips_empty_groups() {
        let frame = decode("[][a][b]").unwrap();
        assert_eq!(frame.topic, "a");
        assert_eq!(frame.payload, "b");
    }

    #[test]
    fn decode_tolerates_text_between_groups() {
        let frame = decode("noise [topic] more noise [payload] tail").unwrap();
        assert_eq!(frame.topic, "topic");
        assert_eq!(frame.payload, "payload");
    }

    #[test]
    fn decode_fails_with_one_group() {
        let err = decode("[only_topic]").unwrap_err();
        assert_eq!(err, FrameError::Malformed("[only_topic]".to_string()));
    }

    #[test]
    fn decode_fails_with_no_groups() {
        assert!(decode("no brackets here").is_err());
        assert!(decode("").is_err());
    }

    #[test]
    fn decode_fails_on_unclosed_group() {
        assert!(decode("[topic][unclosed").is_err());
    }

    #[test]
    fn group_content_may_contain_open_bracket() {
        let frame = decode("[a[b][c]").unwrap();
        assert_eq!(frame.topic, "a[b");
        assert_eq!(frame.payload, "c");
    }

    #[test]
    fn encode_wraps_fields() {
        assert_eq!(encode("move", "ok"), "[move][ok]");
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let encoded = encode("connections", "Client-1, Client-2");
        let frame = decode(&encoded).unwrap();
        assert_eq!(frame.topic, "connections");
        assert_eq!(frame.payload, "Client-1, Client-2");
    }
}
