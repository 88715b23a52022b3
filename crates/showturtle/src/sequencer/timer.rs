// src/sequencer/timer.rs
use std::time::Duration;

/// Genau ein ausstehender Schritt, angetrieben durch Frame- oder virtuelle Zeit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTimer {
    remaining: Option<Duration>,
}

impl StepTimer {
    pub fn schedule(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    /// Verwirft den ausstehenden Schritt. Gibt zurück, ob einer anstand.
    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Zieht Zeit von `budget` ab. `true`, sobald der Schritt fällig ist;
    /// der Rest bleibt in `budget` für nachfolgende Schritte.
    pub fn consume(&mut self, budget: &mut Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };

        if remaining <= *budget {
            *budget -= remaining;
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining - *budget);
            *budget = Duration::ZERO;
            false
        }
    }
}
