//! Table-driven checks over every supported operation

use alloy_primitives::{address, Address, B256, U256};

use yearn_plugin::plugin::{self, InitContract};
use yearn_plugin::{
    DecodeContext, Operation, ParameterSlot, PluginError, Stage, Status, VaultRegistry,
};

const YV_DAI: Address = address!("0xdA816459F1AB5631232FE5e97a05BBBb94970c95");

/// Selector, initial slot and review field count per operation
const TABLE: [(Operation, [u8; 4], Option<ParameterSlot>, usize); 17] = [
    (Operation::DepositAll, [0xd0, 0xe3, 0x0d, 0xb0], None, 2),
    (Operation::Deposit, [0xb6, 0xb5, 0x5f, 0x25], Some(ParameterSlot::Amount), 3),
    (Operation::DepositTo, [0x6e, 0x55, 0x3f, 0x65], Some(ParameterSlot::Amount), 4),
    (Operation::WithdrawAll, [0x3c, 0xcf, 0xd6, 0x0b], None, 2),
    (Operation::Withdraw, [0x2e, 0x1a, 0x7d, 0x4d], Some(ParameterSlot::Amount), 3),
    (Operation::WithdrawTo, [0x00, 0xf7, 0x14, 0xce], Some(ParameterSlot::Amount), 4),
    (Operation::WithdrawToWithSlippage, [0xe6, 0x36, 0x97, 0xc8], Some(ParameterSlot::Amount), 5),
    (Operation::ZapIn, [0x38, 0xb3, 0x2e, 0x68], Some(ParameterSlot::ZapToken), 5),
    (Operation::ZapInViaIntermediary, [0x28, 0x93, 0x20, 0x94], Some(ParameterSlot::ZapToken), 5),
    (Operation::LendingMint, [0xa0, 0x71, 0x2d, 0x68], Some(ParameterSlot::Amount), 3),
    (Operation::LendingRedeem, [0xdb, 0x00, 0x6a, 0x75], Some(ParameterSlot::Amount), 3),
    (Operation::LendingRedeemUnderlying, [0x85, 0x2a, 0x12, 0xe3], Some(ParameterSlot::Amount), 3),
    (Operation::LendingBorrow, [0xc5, 0xeb, 0xea, 0xec], Some(ParameterSlot::Amount), 3),
    (Operation::LendingRepay, [0x0e, 0x75, 0x27, 0x02], Some(ParameterSlot::Amount), 3),
    (Operation::ClaimRewards, [0x4e, 0x71, 0xd9, 0x2d], None, 2),
    (Operation::Exit, [0xe9, 0xfa, 0xd8, 0xee], None, 2),
    (Operation::GetRewards, [0x3d, 0x18, 0xb9, 0x12], None, 2),
];

/// A word valid for any slot: an address word whose low bytes double as an amount
fn word_for(slot: ParameterSlot) -> B256 {
    match slot {
        ParameterSlot::ZapVault => YV_DAI.into_word(),
        ParameterSlot::Recipient | ParameterSlot::ZapToken => Address::ZERO.into_word(),
        _ => B256::from(U256::from(1_000_000u64)),
    }
}

fn initialized(operation: Operation) -> DecodeContext {
    let mut ctx = DecodeContext::new();
    plugin::init(&mut ctx, &InitContract::new(operation.selector(), YV_DAI)).unwrap();
    ctx
}

#[test]
fn test_every_selector_initializes() {
    for (operation, selector, initial_slot, _) in TABLE {
        let mut ctx = DecodeContext::new();
        let result = plugin::init(&mut ctx, &InitContract::new(selector, YV_DAI));
        assert_eq!(result, Ok(operation));
        assert_eq!(ctx.operation(), Some(operation));
        assert_eq!(ctx.next_slot(), initial_slot, "{operation:?}");
        let expected_stage = if initial_slot.is_some() {
            Stage::Collecting
        } else {
            Stage::Complete
        };
        assert_eq!(ctx.stage(), expected_stage);
    }
}

#[test]
fn test_table_covers_every_operation() {
    for operation in Operation::ALL {
        assert!(TABLE.iter().any(|(listed, ..)| *listed == operation), "{operation:?}");
    }
}

#[test]
fn test_unknown_selectors_unavailable() {
    let mut unknown = vec![[0u8; 4], [0xff; 4], [0xa9, 0x05, 0x9c, 0xbb], [0x09, 0x5e, 0xa7, 0xb3]];
    for (_, selector, ..) in TABLE {
        for bit in 0..32 {
            let mut flipped = selector;
            flipped[bit / 8] ^= 1 << (bit % 8);
            if TABLE.iter().all(|(_, known, ..)| *known != flipped) {
                unknown.push(flipped);
            }
        }
    }

    for selector in unknown {
        let mut ctx = DecodeContext::new();
        let err = plugin::init(&mut ctx, &InitContract::new(selector, YV_DAI)).unwrap_err();
        assert_eq!(err, PluginError::UnknownSelector(selector));
        assert_eq!(err.status(), Status::Unavailable);
    }
}

#[test]
fn test_schema_length_words_finalize() {
    for (operation, _, _, field_count) in TABLE {
        let mut ctx = initialized(operation);
        for slot in operation.schema() {
            plugin::provide_parameter(&mut ctx, word_for(*slot).as_slice()).unwrap();
        }
        let finalized = plugin::finalize(&mut ctx).unwrap();
        assert_eq!(finalized.field_count, field_count, "{operation:?}");
        assert_eq!(ctx.fields().len(), field_count);
        assert_eq!(ctx.fields()[0].label, "Operation");
        assert!(ctx.check_invariants());
    }
}

#[test]
fn test_missing_words_block_finalize() {
    for (operation, ..) in TABLE {
        let schema = operation.schema();
        if schema.is_empty() {
            continue;
        }
        for provided in 0..schema.len() {
            let mut ctx = initialized(operation);
            for slot in &schema[..provided] {
                plugin::provide_parameter(&mut ctx, word_for(*slot).as_slice()).unwrap();
            }
            let err = plugin::finalize(&mut ctx).unwrap_err();
            assert_eq!(
                err,
                PluginError::Incomplete {
                    received: provided,
                    expected: schema.len()
                }
            );
            assert_eq!(err.status(), Status::Error);
        }
    }
}

#[test]
fn test_extra_words_tolerated() {
    for (operation, _, _, field_count) in TABLE {
        let mut ctx = initialized(operation);
        for slot in operation.schema() {
            plugin::provide_parameter(&mut ctx, word_for(*slot).as_slice()).unwrap();
        }
        let before: Vec<_> = [
            ParameterSlot::Amount,
            ParameterSlot::Recipient,
            ParameterSlot::ZapToken,
            ParameterSlot::ZapVault,
            ParameterSlot::MinimumOutput,
            ParameterSlot::Slippage,
        ]
        .into_iter()
        .map(|slot| ctx.word(slot))
        .collect();

        for _ in 0..3 {
            assert_eq!(plugin::provide_parameter(&mut ctx, &[0xee; 32]), Ok(()));
        }
        assert_eq!(ctx.word_index(), operation.schema().len());
        assert_eq!(ctx.ignored_words(), 3);

        let after: Vec<_> = [
            ParameterSlot::Amount,
            ParameterSlot::Recipient,
            ParameterSlot::ZapToken,
            ParameterSlot::ZapVault,
            ParameterSlot::MinimumOutput,
            ParameterSlot::Slippage,
        ]
        .into_iter()
        .map(|slot| ctx.word(slot))
        .collect();
        assert_eq!(before, after, "{operation:?}");
        assert_eq!(plugin::finalize(&mut ctx).unwrap().field_count, field_count);
    }
}

#[test]
fn test_unset_slots_read_as_none() {
    let ctx = initialized(Operation::WithdrawToWithSlippage);
    assert_eq!(ctx.amount(ParameterSlot::Amount), None);
    assert_eq!(ctx.address(ParameterSlot::Recipient), None);
    assert_eq!(ctx.amount(ParameterSlot::Slippage), None);
}

#[test]
fn test_registry_exact_match_only() {
    let registry = VaultRegistry::yearn();
    assert!(registry.lookup(&YV_DAI).is_some());

    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(YV_DAI.as_slice());
    bytes[19] ^= 0x01;
    assert!(registry.lookup(&Address::from(bytes)).is_none());
    assert_eq!(VaultRegistry::iron_bank().len(), 32);
    assert_eq!(registry.len(), 85);
}
