//! Card data - the immutable records the whole engine runs on.
//!
//! A [`Card`] is read-only once loaded from the catalog. Decks and the
//! catalog share ownership via `Arc<Card>`; nothing ever mutates a card
//! after load.

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a card in the catalog.
///
/// The card source carries no ids; they are assigned in catalog order at
/// load time, so the same source always yields the same ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl Default for CardId {
    fn default() -> Self {
        CardId(0)
    }
}

/// An immutable card.
///
/// Field names on the wire follow the catalog's JSON format: the series tag
/// is `serie` and the image references are `ruta_frente`/`ruta_reverso`.
/// The stat fields accept either JSON numbers or integer-valued strings,
/// which the source mixes freely.
///
/// The image references are opaque resource handles; the engine never
/// interprets them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Assigned at load time; not present in the source.
    #[serde(skip, default)]
    pub id: CardId,

    /// Series tag, e.g. "platinum" or "black".
    #[serde(rename = "serie")]
    pub series: String,

    #[serde(deserialize_with = "flexible_int")]
    pub hp: i64,

    #[serde(deserialize_with = "flexible_int")]
    pub atk: i64,

    #[serde(deserialize_with = "flexible_int")]
    pub def: i64,

    /// Real-valued modifier applied on top of the integer stats.
    pub bonus: f64,

    /// Front-face image reference (opaque).
    #[serde(rename = "ruta_frente")]
    pub front_image: String,

    /// Back-face image reference (opaque).
    #[serde(rename = "ruta_reverso")]
    pub back_image: String,
}

impl Card {
    /// Attack value used for turn-by-turn comparison: `atk + bonus`.
    ///
    /// Deliberately a float - two cards tie only on exact equality.
    #[must_use]
    pub fn effective_attack(&self) -> f64 {
        self.atk as f64 + self.bonus
    }

    /// Damage base contributed by this card when its side loses a turn:
    /// the three stats each incremented by the bonus, truncated to an
    /// integer.
    #[must_use]
    pub fn strike_value(&self) -> i64 {
        let total = (self.hp as f64 + self.bonus)
            + (self.atk as f64 + self.bonus)
            + (self.def as f64 + self.bonus);
        total as i64
    }
}

/// Accepts a JSON integer or an integer-valued string.
fn flexible_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("not an integer: {s:?}"))),
    }
}
