// src/tokens/shuffle.rs
use rand::Rng;

use super::Token;

/// Permutation des Pools für genau einen Durchlauf. Nach dem Erzeugen nur lesbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledPool(Vec<Token>);

impl ShuffledPool {
    /// Übernimmt eine bereits festgelegte Reihenfolge.
    pub fn from_order(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    /// Zugriff mit Umlauf (`index mod len`). `None` nur bei leerem Pool.
    pub fn get_wrapped(&self, index: usize) -> Option<&Token> {
        if self.0.is_empty() {
            return None;
        }
        self.0.get(index % self.0.len())
    }
}

/// Fisher-Yates über eine private Kopie; der Quell-Pool bleibt unverändert.
///
/// Pro Schritt wird ein gleichverteilter Wert aus `[0, 1)` gezogen und auf
/// `0..=i` abgebildet.
pub fn shuffle<R: Rng + ?Sized>(pool: &[Token], rng: &mut R) -> ShuffledPool {
    let mut shuffled = pool.to_vec();
    for i in (1..shuffled.len()).rev() {
        let unit: f64 = rng.gen();
        let j = ((unit * (i + 1) as f64).floor() as usize).min(i);
        shuffled.swap(i, j);
    }
    ShuffledPool(shuffled)
}
