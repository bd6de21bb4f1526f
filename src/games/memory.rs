// src/games/memory.rs

//! Quantum memory: find the pairs of matching quantum-state cards.
//!
//! Flipping a second card does not resolve the pair immediately. It issues a
//! [`ResolutionTicket`] naming the deck and both cards, and schedules the
//! resolution after a short delay so both labels stay visible. The ticket is
//! bound to the deck it was issued for: dealing a new deck cancels it, and a
//! stale ticket presented later is refused.

use crate::core::{DeckId, GameError, RandomBit, RESOLVE_DELAY};
use crate::validation::check_deck_pairs;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Visibility of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardState {
    /// Label hidden.
    FaceDown,
    /// Label revealed, waiting for its pair to resolve.
    FaceUp,
    /// Paired with its twin; stays revealed for the rest of the game.
    Matched,
}

/// A card in the dealt deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryCard {
    label: String,
    state: CardState,
}

impl MemoryCard {
    /// The card's quantum-state label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current visibility.
    pub fn state(&self) -> CardState {
        self.state
    }
}

/// What the presentation layer may show for one card. Hidden labels stay hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Position in the deck
    pub index: usize,
    /// Current visibility
    pub state: CardState,
    /// The label, present only when face up or matched
    pub label: Option<String>,
}

/// Names one pair of flips awaiting resolution on a specific deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolutionTicket {
    /// Deck the flips happened on
    pub deck: DeckId,
    /// First card flipped
    pub first: usize,
    /// Second card flipped
    pub second: usize,
    /// How long the pair should stay visible before resolving
    pub delay: Duration,
}

/// Result of resolving one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairOutcome {
    /// The pair that was resolved
    pub ticket: ResolutionTicket,
    /// Whether the labels matched
    pub matched: bool,
}

/// Progress counters for the current deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    /// Resolved pair attempts
    pub moves: u32,
    /// Pairs matched
    pub matches: u32,
    /// Play time accumulated through `advance`
    pub elapsed: Duration,
}

impl fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moves: {}, Matches: {}, Time: {}s", self.moves, self.matches, self.elapsed.as_secs())
    }
}

#[derive(Debug, Clone, Copy)]
struct ScheduledResolution {
    ticket: ResolutionTicket,
    remaining: Duration,
}

type PairListener = Box<dyn FnMut(&ResolutionTicket)>;

/// The memory pairing game.
pub struct MemoryPairingModel {
    cards: Vec<MemoryCard>,
    deck: Option<DeckId>,
    first_up: Option<usize>,
    pending: Option<ScheduledResolution>,
    delay: Duration,
    stats: MemoryStats,
    bits: RandomBit,
    listener: Option<PairListener>,
}

impl fmt::Debug for MemoryPairingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryPairingModel")
            .field("deck", &self.deck)
            .field("cards", &self.cards)
            .field("first_up", &self.first_up)
            .field("pending", &self.pending)
            .field("delay", &self.delay)
            .field("stats", &self.stats)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl MemoryPairingModel {
    /// Creates a model with no deck dealt, using the default resolve delay.
    pub fn new(bits: RandomBit) -> Self {
        Self::with_delay(bits, RESOLVE_DELAY)
    }

    /// Creates a model whose pairs resolve `delay` after the second flip.
    pub fn with_delay(bits: RandomBit, delay: Duration) -> Self {
        Self {
            cards: Vec::new(),
            deck: None,
            first_up: None,
            pending: None,
            delay,
            stats: MemoryStats::default(),
            bits,
            listener: None,
        }
    }

    /// Registers `listener` to be called each time a pair becomes resolvable.
    pub fn set_pair_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&ResolutionTicket) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the pair listener, if any.
    pub fn clear_pair_listener(&mut self) {
        self.listener = None;
    }

    /// Deals a shuffled deck of `size` cards, two per label.
    ///
    /// Labels are deduplicated keeping their first occurrence, and the first
    /// `size / 2` of them are used. Dealing discards the previous deck
    /// together with any resolution still pending on it.
    ///
    /// # Errors
    /// * `InvalidDeckSize` if `size` is zero or odd, or there are fewer
    ///   distinct labels than pairs.
    /// * `EmptyLabels` if `labels` is empty.
    pub fn new_deck<S: AsRef<str>>(&mut self, labels: &[S], size: usize) -> Result<DeckId, GameError> {
        if size == 0 || size % 2 != 0 {
            return Err(GameError::InvalidDeckSize { size, message: "must be a positive even number".to_string() });
        }

        let mut distinct: Vec<&str> = Vec::with_capacity(labels.len());
        for label in labels.iter().map(AsRef::as_ref) {
            if !distinct.contains(&label) {
                distinct.push(label);
            }
        }
        if distinct.is_empty() {
            return Err(GameError::EmptyLabels);
        }

        let pairs = size / 2;
        if pairs > distinct.len() {
            return Err(GameError::InvalidDeckSize {
                size,
                message: format!("needs {} distinct labels, got {}", pairs, distinct.len()),
            });
        }

        let mut cards: Vec<MemoryCard> = distinct
            .iter()
            .take(pairs)
            .flat_map(|label| {
                let card = MemoryCard { label: (*label).to_string(), state: CardState::FaceDown };
                [card.clone(), card]
            })
            .collect();
        self.bits.shuffle(&mut cards);
        check_deck_pairs(&cards)?;

        if let Some(cancelled) = self.pending.take() {
            debug!(deck = %cancelled.ticket.deck, "pending resolution cancelled by new deck");
        }
        let deck = DeckId(self.deck.map_or(1, |d| d.0 + 1));
        self.deck = Some(deck);
        self.cards = cards;
        self.first_up = None;
        self.stats = MemoryStats::default();

        debug!(%deck, size, "memory deck dealt");
        Ok(deck)
    }

    /// The current deck, if one has been dealt.
    pub fn deck_id(&self) -> Option<DeckId> {
        self.deck
    }

    /// All cards in deck order.
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    /// Presentation view of card `index`.
    pub fn card(&self, index: usize) -> Option<CardView> {
        self.cards.get(index).map(|card| CardView {
            index,
            state: card.state,
            label: match card.state {
                CardState::FaceDown => None,
                CardState::FaceUp | CardState::Matched => Some(card.label.clone()),
            },
        })
    }

    /// Counters for the current deck.
    pub fn stats(&self) -> MemoryStats {
        self.stats
    }

    /// The pair awaiting resolution, if any.
    pub fn pending_resolution(&self) -> Option<ResolutionTicket> {
        self.pending.map(|scheduled| scheduled.ticket)
    }

    /// Turns card `index` face up.
    ///
    /// Refused while a pair is awaiting resolution, or for a card that is
    /// already face up or matched. The second flip of a pair schedules its
    /// resolution and notifies the pair listener.
    pub fn flip(&mut self, index: usize) -> Result<CardView, GameError> {
        let len = self.cards.len();
        let Some(deck) = self.deck else {
            return Err(GameError::invalid_transition("flip a card", "no deck is dealt"));
        };
        if self.pending.is_some() {
            return Err(GameError::invalid_transition("flip a card", "a pair awaits resolution"));
        }
        let card = self.cards.get_mut(index).ok_or(GameError::CardOutOfRange { index, len })?;
        match card.state {
            CardState::FaceUp => return Err(GameError::invalid_transition("flip a card", "it is already face up")),
            CardState::Matched => return Err(GameError::invalid_transition("flip a card", "it is already matched")),
            CardState::FaceDown => card.state = CardState::FaceUp,
        }
        debug!(index, "memory card flipped");

        match self.first_up.take() {
            None => self.first_up = Some(index),
            Some(first) => {
                let ticket = ResolutionTicket { deck, first, second: index, delay: self.delay };
                self.pending = Some(ScheduledResolution { ticket, remaining: self.delay });
                debug!(%deck, first, second = index, "pair scheduled for resolution");
                if let Some(listener) = self.listener.as_mut() {
                    listener(&ticket);
                }
            }
        }

        self.card(index).ok_or(GameError::CardOutOfRange { index, len })
    }

    /// Resolves the pending pair now: matching labels lock in, others flip back.
    pub fn resolve(&mut self) -> Result<PairOutcome, GameError> {
        let scheduled = self
            .pending
            .take()
            .ok_or_else(|| GameError::invalid_transition("resolve a pair", "no pair is face up"))?;
        Ok(self.apply(scheduled.ticket))
    }

    /// Resolves the pair named by `ticket`, as a deferred callback would.
    ///
    /// # Errors
    /// * `StaleResolution` if the ticket was issued for an earlier deck.
    /// * `InvalidTransition` if that pair is not the one pending.
    pub fn resolve_ticket(&mut self, ticket: ResolutionTicket) -> Result<PairOutcome, GameError> {
        let current = self
            .deck
            .ok_or_else(|| GameError::invalid_transition("resolve a ticket", "no deck is dealt"))?;
        if ticket.deck != current {
            debug!(ticket_deck = %ticket.deck, current_deck = %current, "stale resolution refused");
            return Err(GameError::StaleResolution { ticket_deck: ticket.deck, current_deck: current });
        }
        if self.pending_resolution() != Some(ticket) {
            return Err(GameError::invalid_transition("resolve a ticket", "that pair is not pending"));
        }
        self.pending = None;
        Ok(self.apply(ticket))
    }

    /// Moves the game clock forward by `elapsed`.
    ///
    /// Returns the resolution if the pending pair's delay ran out during this
    /// step. Play time only accumulates while the deck is unfinished.
    pub fn advance(&mut self, elapsed: Duration) -> Option<PairOutcome> {
        if self.deck.is_some() && !self.is_complete() {
            self.stats.elapsed = self.stats.elapsed.saturating_add(elapsed);
        }

        let scheduled = self.pending.as_mut()?;
        scheduled.remaining = scheduled.remaining.saturating_sub(elapsed);
        if !scheduled.remaining.is_zero() {
            return None;
        }
        let ticket = scheduled.ticket;
        self.pending = None;
        Some(self.apply(ticket))
    }

    /// Whether every card of a dealt deck is matched.
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|card| card.state == CardState::Matched)
    }

    fn apply(&mut self, ticket: ResolutionTicket) -> PairOutcome {
        let matched = self.cards[ticket.first].label == self.cards[ticket.second].label;
        let next = if matched { CardState::Matched } else { CardState::FaceDown };
        self.cards[ticket.first].state = next;
        self.cards[ticket.second].state = next;

        self.stats.moves += 1;
        if matched {
            self.stats.matches += 1;
        }
        debug!(deck = %ticket.deck, first = ticket.first, second = ticket.second, matched, "pair resolved");
        PairOutcome { ticket, matched }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dealt(size: usize) -> MemoryPairingModel {
        let mut model = MemoryPairingModel::new(RandomBit::seeded(42));
        model.new_deck(&["a", "b", "c", "d"], size).unwrap();
        model
    }

    fn twin_of(model: &MemoryPairingModel, index: usize) -> usize {
        let label = model.cards()[index].label();
        (0..model.cards().len())
            .find(|&i| i != index && model.cards()[i].label() == label)
            .unwrap()
    }

    fn stranger_of(model: &MemoryPairingModel, index: usize) -> usize {
        let label = model.cards()[index].label();
        (0..model.cards().len()).find(|&i| model.cards()[i].label() != label).unwrap()
    }

    #[test]
    fn test_advance_resolves_after_delay() {
        let mut model = dealt(4);
        let twin = twin_of(&model, 0);
        model.flip(0).unwrap();
        model.flip(twin).unwrap();

        assert_eq!(model.advance(Duration::from_millis(400)), None);
        assert_eq!(model.advance(Duration::from_millis(599)), None);
        let outcome = model.advance(Duration::from_millis(1)).expect("delay elapsed");
        assert!(outcome.matched);
        assert_eq!(model.pending_resolution(), None);
        assert_eq!(model.advance(Duration::from_secs(5)), None, "resolution fires once");
        assert_eq!(model.stats().elapsed, Duration::from_millis(6000));
    }

    #[test]
    fn test_huge_time_steps_saturate() {
        let mut model = dealt(4);
        model.advance(Duration::MAX);
        model.advance(Duration::from_secs(1));
        assert_eq!(model.stats().elapsed, Duration::MAX);
    }

    #[test]
    fn test_zero_delay_resolves_on_next_advance() {
        let mut model = MemoryPairingModel::with_delay(RandomBit::seeded(3), Duration::ZERO);
        model.new_deck(&["x", "y"], 4).unwrap();
        let other = stranger_of(&model, 0);
        model.flip(0).unwrap();
        model.flip(other).unwrap();
        let outcome = model.advance(Duration::ZERO).unwrap();
        assert!(!outcome.matched);
    }

    #[test]
    fn test_listener_receives_ticket() {
        let seen: Rc<RefCell<Vec<ResolutionTicket>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut model = dealt(6);
        model.set_pair_listener(move |ticket| sink.borrow_mut().push(*ticket));

        model.flip(2).unwrap();
        assert!(seen.borrow().is_empty(), "one flip is not a pair");
        model.flip(4).unwrap();

        let tickets = seen.borrow();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].first, 2);
        assert_eq!(tickets[0].second, 4);
        assert_eq!(Some(tickets[0]), model.pending_resolution());
    }

    #[test]
    fn test_third_flip_waits_for_resolution() {
        let mut model = dealt(6);
        model.flip(0).unwrap();
        model.flip(1).unwrap();
        let err = model.flip(2).unwrap_err();
        assert!(matches!(err, GameError::InvalidTransition { .. }));
        assert_eq!(model.cards()[2].state(), CardState::FaceDown);
    }

    #[test]
    fn test_stale_ticket_cannot_touch_new_deck() {
        let mut model = dealt(4);
        model.flip(0).unwrap();
        model.flip(1).unwrap();
        let ticket = model.pending_resolution().unwrap();

        let new_deck = model.new_deck(&["p", "q"], 4).unwrap();
        assert_ne!(ticket.deck, new_deck);
        assert_eq!(model.pending_resolution(), None);

        let err = model.resolve_ticket(ticket).unwrap_err();
        assert_eq!(err, GameError::StaleResolution { ticket_deck: ticket.deck, current_deck: new_deck });
        assert!(model.cards().iter().all(|c| c.state() == CardState::FaceDown));
        assert_eq!(model.stats().moves, 0);
    }

    #[test]
    fn test_ticket_for_other_pair_is_refused() {
        let mut model = dealt(6);
        model.flip(0).unwrap();
        model.flip(1).unwrap();
        let mut ticket = model.pending_resolution().unwrap();
        ticket.second = 5;
        assert!(matches!(model.resolve_ticket(ticket), Err(GameError::InvalidTransition { .. })));
        assert!(model.pending_resolution().is_some());
    }

    #[test]
    fn test_hidden_labels_are_not_exposed() {
        let mut model = dealt(4);
        assert_eq!(model.card(0).unwrap().label, None);
        let view = model.flip(0).unwrap();
        assert_eq!(view.state, CardState::FaceUp);
        assert_eq!(view.label.as_deref(), Some(model.cards()[0].label()));
    }
}
