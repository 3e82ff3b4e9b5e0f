//! Streaming parameter decoder
//!
//! Consumes calldata one 32-byte word per call and files each word under
//! the slot the active operation's schema assigns to that position.

use alloy_primitives::B256;

use crate::core::{DecodeContext, PluginError, Stage};

/// Size of one ABI calldata word
pub const WORD_SIZE: usize = 32;

/// Feed the next calldata word into the context
///
/// Words past the end of the schema are accepted and dropped.
pub fn provide_parameter(ctx: &mut DecodeContext, parameter: &[u8]) -> Result<(), PluginError> {
    match ctx.stage() {
        Stage::Uninitialized => return Err(PluginError::NotInitialized),
        Stage::Finalized => return Err(PluginError::AlreadyFinalized),
        Stage::Collecting | Stage::Complete => {}
    }

    let word = parse_word(parameter)?;

    let Some(slot) = ctx.next_slot() else {
        ctx.ignore();
        tracing::trace!(ignored = ctx.ignored_words(), "trailing parameter ignored");
        return Ok(());
    };

    if slot.is_address() && !is_address_word(&word) {
        return Err(PluginError::DirtyAddress { slot });
    }

    tracing::debug!(index = ctx.word_index(), ?slot, "parameter decoded");
    ctx.accept(slot, word);
    Ok(())
}

fn parse_word(parameter: &[u8]) -> Result<B256, PluginError> {
    let bytes: [u8; WORD_SIZE] = parameter
        .try_into()
        .map_err(|_| PluginError::InvalidWordLength(parameter.len()))?;
    Ok(B256::from(bytes))
}

/// An ABI encoded address is left padded with twelve zero bytes
fn is_address_word(word: &B256) -> bool {
    word[..WORD_SIZE - 20].iter().all(|b| *b == 0)
}

/// Split the argument section of calldata into words
///
/// The final chunk may be shorter than a word if the calldata is truncated;
/// [`provide_parameter`] rejects it.
pub fn words(arguments: &[u8]) -> impl Iterator<Item = &[u8]> {
    arguments.chunks(WORD_SIZE)
}

/// Count of words the schema still expects
pub fn remaining(ctx: &DecodeContext) -> usize {
    ctx.operation()
        .map_or(0, |op| op.schema().len().saturating_sub(ctx.word_index()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Operation, ParameterSlot};
    use alloy_primitives::{Address, U256};

    fn started(operation: Operation) -> DecodeContext {
        let mut ctx = DecodeContext::new();
        ctx.begin(operation, Address::ZERO);
        ctx
    }

    fn amount_word(value: u64) -> [u8; 32] {
        U256::from(value).to_be_bytes()
    }

    fn address_word(address: Address) -> [u8; 32] {
        address.into_word().0
    }

    #[test]
    fn test_rejects_before_init() {
        let mut ctx = DecodeContext::new();
        assert_eq!(
            provide_parameter(&mut ctx, &amount_word(1)),
            Err(PluginError::NotInitialized)
        );
    }

    #[test]
    fn test_rejects_short_word() {
        let mut ctx = started(Operation::Deposit);
        assert_eq!(
            provide_parameter(&mut ctx, &[0u8; 31]),
            Err(PluginError::InvalidWordLength(31))
        );
        assert_eq!(ctx.word_index(), 0);
    }

    #[test]
    fn test_decodes_amount_then_recipient() {
        let mut ctx = started(Operation::WithdrawTo);
        let recipient = Address::with_last_byte(0x42);
        provide_parameter(&mut ctx, &amount_word(500)).unwrap();
        provide_parameter(&mut ctx, &address_word(recipient)).unwrap();

        assert_eq!(ctx.stage(), Stage::Complete);
        assert_eq!(ctx.amount(ParameterSlot::Amount), Some(U256::from(500)));
        assert_eq!(ctx.address(ParameterSlot::Recipient), Some(recipient));
        assert_eq!(remaining(&ctx), 0);
    }

    #[test]
    fn test_trailing_words_are_ignored() {
        let mut ctx = started(Operation::Deposit);
        provide_parameter(&mut ctx, &amount_word(10)).unwrap();
        provide_parameter(&mut ctx, &amount_word(99)).unwrap();
        provide_parameter(&mut ctx, &[0xff; 32]).unwrap();

        assert_eq!(ctx.word_index(), 1);
        assert_eq!(ctx.ignored_words(), 2);
        assert_eq!(ctx.amount(ParameterSlot::Amount), Some(U256::from(10)));
    }

    #[test]
    fn test_words_on_parameterless_call_are_ignored() {
        let mut ctx = started(Operation::ClaimRewards);
        provide_parameter(&mut ctx, &amount_word(1)).unwrap();
        assert_eq!(ctx.stage(), Stage::Complete);
        assert_eq!(ctx.word_index(), 0);
    }

    #[test]
    fn test_dirty_address_padding_rejected() {
        let mut ctx = started(Operation::ZapIn);
        let mut word = [0u8; 32];
        word[0] = 1;
        assert_eq!(
            provide_parameter(&mut ctx, &word),
            Err(PluginError::DirtyAddress { slot: ParameterSlot::ZapToken })
        );
        assert_eq!(ctx.word_index(), 0);
    }

    #[test]
    fn test_unused_positions_are_skipped() {
        let mut ctx = started(Operation::ZapIn);
        let token = Address::with_last_byte(1);
        let vault = Address::with_last_byte(2);
        provide_parameter(&mut ctx, &address_word(token)).unwrap();
        provide_parameter(&mut ctx, &amount_word(1_000)).unwrap();
        provide_parameter(&mut ctx, &address_word(vault)).unwrap();
        provide_parameter(&mut ctx, &address_word(Address::with_last_byte(3))).unwrap();
        provide_parameter(&mut ctx, &amount_word(1)).unwrap();
        assert_eq!(ctx.next_slot(), Some(ParameterSlot::MinimumOutput));
        provide_parameter(&mut ctx, &amount_word(900)).unwrap();

        assert_eq!(ctx.stage(), Stage::Complete);
        assert_eq!(ctx.address(ParameterSlot::ZapToken), Some(token));
        assert_eq!(ctx.address(ParameterSlot::ZapVault), Some(vault));
        assert_eq!(ctx.amount(ParameterSlot::MinimumOutput), Some(U256::from(900)));
        assert!(ctx.check_invariants());
    }

    #[test]
    fn test_words_split() {
        let data = [0u8; 70];
        let chunks: Vec<_> = words(&data).map(<[u8]>::len).collect();
        assert_eq!(chunks, vec![32, 32, 6]);
    }
}
