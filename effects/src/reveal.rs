//! Reason cards that flip from placeholder to their bound text on first tap.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Class added to a card once revealed.
pub const REVEALED_CLASS: &str = "revealed";

#[derive(Debug, Clone)]
pub struct RevealCard {
    reason: String,
    revealed: bool,
}

impl RevealCard {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into(), revealed: false }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Reveal the card, returning the text to display. One-way: later calls
    /// return `None`.
    pub fn reveal(&mut self) -> Option<&str> {
        if self.revealed {
            return None;
        }
        self.revealed = true;
        Some(&self.reason)
    }
}

/// All cards on the page, addressed by document order.
#[derive(Debug, Clone, Default)]
pub struct RevealDeck {
    cards: Vec<RevealCard>,
}

impl RevealDeck {
    #[must_use]
    pub fn new(reasons: impl IntoIterator<Item = String>) -> Self {
        Self { cards: reasons.into_iter().map(RevealCard::new).collect() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_revealed()).count()
    }

    /// Reveal card `index`. `None` when already revealed or out of range.
    pub fn reveal(&mut self, index: usize) -> Option<String> {
        self.cards.get_mut(index)?.reveal().map(str::to_owned)
    }
}
