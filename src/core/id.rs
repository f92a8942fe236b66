//! Game and player identifiers.
//!
//! ## Layout
//!
//! Identifiers are opaque strings made of two base-36 parts:
//! - the creation instant in epoch milliseconds
//! - a 9-character random suffix
//!
//! Two ids minted in the same millisecond differ in their suffix, which is
//! enough to keep a local game history collision-free. They are not secret.
//!
//! ```
//! use least_count::core::{IdSource, Timestamp};
//!
//! let mut ids = IdSource::new(42);
//! let a = ids.next_id(Timestamp(1_700_000_000_000));
//! let b = ids.next_id(Timestamp(1_700_000_000_000));
//!
//! assert!(a.starts_with("loyw3v28"));
//! assert_eq!(a.len(), b.len());
//! assert_ne!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::clock::Timestamp;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random part of every identifier.
pub const ID_SUFFIX_LEN: usize = 9;

/// Identifier of a [`Game`](crate::core::Game).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

/// Identifier of a [`Player`](crate::core::Player).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Wrap an existing identifier string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id!(GameId);
string_id!(PlayerId);

/// Mints identifiers from a time prefix and a ChaCha8 random suffix.
///
/// Seeded sources produce the same suffix sequence every time, which keeps
/// tests and replays reproducible.
#[derive(Clone, Debug)]
pub struct IdSource {
    inner: ChaCha8Rng,
}

impl IdSource {
    /// Create a deterministic source.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Mint a raw identifier for the given instant.
    pub fn next_id(&mut self, now: Timestamp) -> String {
        let mut id = to_base36(now.millis());
        id.reserve(ID_SUFFIX_LEN);
        for _ in 0..ID_SUFFIX_LEN {
            let digit = self.inner.gen_range(0..BASE36.len());
            id.push(BASE36[digit] as char);
        }
        id
    }

    /// Mint a game identifier.
    pub fn game_id(&mut self, now: Timestamp) -> GameId {
        GameId(self.next_id(now))
    }

    /// Mint a player identifier.
    pub fn player_id(&mut self, now: Timestamp) -> PlayerId {
        PlayerId(self.next_id(now))
    }
}

impl Default for IdSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_id_shape() {
        let mut ids = IdSource::new(7);
        let id = ids.next_id(Timestamp(36));

        assert_eq!(id.len(), 2 + ID_SUFFIX_LEN);
        assert!(id.starts_with("10"));
        assert!(id.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = IdSource::new(42);
        let mut b = IdSource::new(42);

        for _ in 0..10 {
            assert_eq!(a.next_id(Timestamp(5)), b.next_id(Timestamp(5)));
        }
    }

    #[test]
    fn test_same_instant_ids_are_unique() {
        let mut ids = IdSource::new(1);
        let minted: FxHashSet<_> = (0..1_000).map(|_| ids.game_id(Timestamp(99))).collect();
        assert_eq!(minted.len(), 1_000);
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = PlayerId::new("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
        assert_eq!(id.to_string(), "abc123");
    }
}
