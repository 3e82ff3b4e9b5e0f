//! Decode context - the per-transaction state the host hands back on every call

use alloy_primitives::{Address, B256, U256};

use crate::display::DisplayField;
use crate::domain::{Operation, ParameterSlot};

/// Lifecycle of a context
///
/// Transitions only move forward; a context goes back to `Uninitialized`
/// solely through [`DecodeContext::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Uninitialized,
    /// Operation selected, schema words still expected
    Collecting,
    /// Schema exhausted, ready to finalize
    Complete,
    /// Display fields built
    Finalized,
}

/// Token metadata supplied by the host in answer to a token lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub ticker: String,
    pub decimals: u8,
}

/// State of one transaction under review
#[derive(Debug, Clone, Default)]
pub struct DecodeContext {
    stage: Stage,
    operation: Option<Operation>,
    /// Contract the transaction is sent to
    destination: Address,
    /// Schema position of the next word; never exceeds the schema length
    word_index: usize,
    /// Words received after the schema was exhausted
    ignored_words: usize,
    slots: [Option<B256>; ParameterSlot::STORED],
    pub(crate) token_lookup: Option<Address>,
    pub(crate) token_info: Option<TokenInfo>,
    pub(crate) fields: Vec<DisplayField>,
    /// Set once the host starts displaying the review
    pub(crate) frozen: bool,
}

impl DecodeContext {
    /// Bytes the host must reserve for a context
    pub const REQUIRED_SIZE: usize = std::mem::size_of::<Self>();

    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything from a previous transaction
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Select the operation; the context must have been reset first
    pub(crate) fn begin(&mut self, operation: Operation, destination: Address) {
        debug_assert_eq!(self.stage, Stage::Uninitialized);
        self.operation = Some(operation);
        self.destination = destination;
        self.stage = if operation.schema().is_empty() {
            Stage::Complete
        } else {
            Stage::Collecting
        };
        self.debug_check();
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn destination(&self) -> Address {
        self.destination
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn ignored_words(&self) -> usize {
        self.ignored_words
    }

    /// Slot the next word fills, `None` once the schema is exhausted
    pub fn next_slot(&self) -> Option<ParameterSlot> {
        if self.stage != Stage::Collecting {
            return None;
        }
        self.operation?.schema().get(self.word_index).copied()
    }

    /// Record the word for the current schema position and move on
    pub(crate) fn accept(&mut self, slot: ParameterSlot, word: B256) {
        debug_assert_eq!(self.next_slot(), Some(slot));
        if let Some(index) = slot.store_index() {
            self.slots[index] = Some(word);
        }
        self.word_index += 1;
        let schema_len = self.operation.map_or(0, |op| op.schema().len());
        if self.word_index >= schema_len {
            self.stage = Stage::Complete;
        }
        self.debug_check();
    }

    pub(crate) fn ignore(&mut self) {
        self.ignored_words += 1;
    }

    pub(crate) fn mark_finalized(&mut self) {
        debug_assert_eq!(self.stage, Stage::Complete);
        self.stage = Stage::Finalized;
        self.debug_check();
    }

    /// Raw word stored for a slot, `None` until it has been decoded
    pub fn word(&self, slot: ParameterSlot) -> Option<B256> {
        slot.store_index().and_then(|index| self.slots[index])
    }

    /// Slot value as an unsigned integer
    pub fn amount(&self, slot: ParameterSlot) -> Option<U256> {
        self.word(slot).map(|word| U256::from_be_bytes(word.0))
    }

    /// Slot value as a right-aligned address
    pub fn address(&self, slot: ParameterSlot) -> Option<Address> {
        self.word(slot).map(Address::from_word)
    }

    pub fn token_lookup(&self) -> Option<Address> {
        self.token_lookup
    }

    pub fn token_info(&self) -> Option<&TokenInfo> {
        self.token_info.as_ref()
    }

    pub fn fields(&self) -> &[DisplayField] {
        &self.fields
    }

    /// Check the schema invariants
    ///
    /// The word index stays within the schema, and only slots the schema
    /// declares, at positions already consumed, hold a value.
    pub fn check_invariants(&self) -> bool {
        let Some(operation) = self.operation else {
            return self.stage == Stage::Uninitialized
                && self.word_index == 0
                && self.slots.iter().all(Option::is_none)
                && self.fields.is_empty();
        };
        let schema = operation.schema();
        if self.word_index > schema.len() {
            return false;
        }
        let consumed = &schema[..self.word_index];
        let slots_ok = self.slots.iter().enumerate().all(|(index, value)| {
            value.is_none() || consumed.iter().any(|slot| slot.store_index() == Some(index))
        });
        let stage_ok = match self.stage {
            Stage::Uninitialized => false,
            Stage::Collecting => self.word_index < schema.len(),
            Stage::Complete | Stage::Finalized => self.word_index == schema.len(),
        };
        let fields_ok = self.stage == Stage::Finalized || self.fields.is_empty();
        slots_ok && stage_ok && fields_ok
    }

    fn debug_check(&self) {
        debug_assert!(self.check_invariants(), "decode context invariant violated: {self:?}");
    }
}
