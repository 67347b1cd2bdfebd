//! Shareable path form of a tile ordering.
//!
//! One path segment per tile, in slot order. The platform is encoded by a
//! fixed suffix on the identity:
//!
//! | Platform | Segment        |
//! |----------|----------------|
//! | Twitch   | `name`         |
//! | YouTube  | `videoid~yt`   |
//! | Kick     | `name~kick`    |
//!
//! `/shroud/abc123~yt/xqc~kick` therefore decodes to three tiles.

use std::collections::HashSet;

use super::error::{MosaicError, MosaicResult};
use super::stream::{Platform, Tile};

/// Separator between an identity and its platform suffix.
const SUFFIX_SEPARATOR: char = '~';

/// Encodes one tile as a path segment.
#[must_use]
pub fn encode_segment(tile: &Tile) -> String { format!("{}{}", tile.id, tile.platform.path_suffix()) }

/// Encodes ordered tiles as a path such as `/a/b~yt`.
#[must_use]
pub fn encode_path(tiles: &[Tile]) -> String {
    let mut path = String::from("/");
    path.push_str(&tiles.iter().map(encode_segment).collect::<Vec<_>>().join("/"));
    path
}

/// Decodes a single path segment.
///
/// # Errors
///
/// Returns [`MosaicError::InvalidSegment`] when the identity is empty or the
/// suffix names no platform.
pub fn decode_segment(segment: &str) -> MosaicResult<Tile> {
    let (id, platform) = match segment.rsplit_once(SUFFIX_SEPARATOR) {
        Some((id, suffix)) => {
            let platform = Platform::ALL
                .into_iter()
                .find(|p| p.path_suffix().strip_prefix(SUFFIX_SEPARATOR) == Some(suffix))
                .ok_or_else(|| {
                    MosaicError::invalid_segment(segment, format!("unknown platform suffix '{suffix}'"))
                })?;
            (id, platform)
        }
        None => (segment, Platform::Twitch),
    };

    if id.is_empty() {
        return Err(MosaicError::invalid_segment(segment, "empty identity"));
    }
    Ok(Tile::new(id, platform))
}

/// Decodes a path into ordered tiles.
///
/// Empty segments are skipped and repeated identities keep their first
/// position.
///
/// # Errors
///
/// Returns the first segment error encountered.
pub fn decode_path(path: &str) -> MosaicResult<Vec<Tile>> {
    let mut seen = HashSet::new();
    let mut tiles = Vec::new();

    for segment in path.split('/').map(str::trim).filter(|s| !s.is_empty()) {
        let tile = decode_segment(segment)?;
        if seen.insert(tile.id.clone()) {
            tiles.push(tile);
        } else {
            tracing::debug!(id = %tile.id, "duplicate path segment skipped");
        }
    }

    Ok(tiles)
}

/// Parses a user-typed ordering against the active identities.
///
/// Names may be separated by commas, whitespace or slashes and match active
/// identities case-insensitively. Unknown names are dropped and active
/// identities that were not named are appended in their current order, so
/// the result is always a permutation of `active`.
#[must_use]
pub fn parse_order_text<S: AsRef<str>>(text: &str, active: &[S]) -> Vec<String> {
    let mut ordered: Vec<String> = Vec::with_capacity(active.len());

    let names = text
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    for name in names {
        let name = name.split(SUFFIX_SEPARATOR).next().unwrap_or(name);
        let Some(id) = active.iter().map(AsRef::as_ref).find(|id| id.eq_ignore_ascii_case(name))
        else {
            tracing::debug!(name, "unknown name in ordering dropped");
            continue;
        };
        if !ordered.iter().any(|o| o == id) {
            ordered.push(id.to_string());
        }
    }

    for id in active.iter().map(AsRef::as_ref) {
        if !ordered.iter().any(|o| o == id) {
            ordered.push(id.to_string());
        }
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path() {
        let tiles = vec![
            Tile::twitch("shroud"),
            Tile::new("abc123", Platform::YouTube),
            Tile::new("xqc", Platform::Kick),
        ];
        assert_eq!(encode_path(&tiles), "/shroud/abc123~yt/xqc~kick");
        assert_eq!(encode_path(&[]), "/");
    }

    #[test]
    fn test_decode_path() {
        let tiles = decode_path("/shroud//abc123~yt/xqc~kick/").unwrap();
        assert_eq!(
            tiles,
            vec![
                Tile::twitch("shroud"),
                Tile::new("abc123", Platform::YouTube),
                Tile::new("xqc", Platform::Kick),
            ]
        );
        assert!(decode_path("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_bad_segments() {
        assert_eq!(
            decode_path("/a/~yt").unwrap_err(),
            MosaicError::invalid_segment("~yt", "empty identity")
        );
        assert!(matches!(
            decode_path("/a/b~vimeo").unwrap_err(),
            MosaicError::InvalidSegment { .. }
        ));
    }

    #[test]
    fn test_decode_skips_duplicates() {
        let ids: Vec<String> =
            decode_path("/a/b/a~yt").unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_order_text() {
        let active = ["alpha", "Bravo", "charlie", "delta"];
        assert_eq!(
            parse_order_text("charlie, bravo  ghost/alpha", &active),
            vec!["charlie", "Bravo", "alpha", "delta"]
        );
        assert_eq!(parse_order_text("", &active), active.to_vec());
        assert_eq!(parse_order_text("delta delta", &active), vec!["delta", "alpha", "Bravo", "charlie"]);
    }

    #[test]
    fn test_parse_order_text_accepts_path_segments() {
        let active = ["a", "b"];
        assert_eq!(parse_order_text("/b~yt/a", &active), vec!["b", "a"]);
    }
}
