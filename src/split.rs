//! Split computation: turns an expense amount plus a participant set into an
//! exact per-participant split in minor units. Pure functions, no storage.

use crate::error::LedgerError;
use crate::models::Share;
use serde::{Deserialize, Serialize};

/// A caller-proposed share before normalization. The amount is in minor units
/// but may carry a fractional part (an even three-way split of 1000 proposes
/// 333.33.. each) and may be negative; normalization fixes both.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposedShare {
    pub participant: String,
    pub amount: f64,
}

/// Splits `amount` evenly across `participants`, in order. Every participant
/// gets the floor share; the first `amount % n` participants absorb one extra
/// minor unit each, so the split always sums to `amount` exactly.
///
/// An empty participant list yields an empty split.
pub fn equal_split(amount: i64, participants: &[String]) -> Result<Vec<Share>, LedgerError> {
    if amount < 0 {
        return Err(LedgerError::NegativeAmount(amount));
    }
    if participants.is_empty() {
        return Ok(Vec::new());
    }

    let n = participants.len() as i64;
    let base = amount / n;
    let remainder = amount % n;

    Ok(participants
        .iter()
        .enumerate()
        .map(|(i, participant)| Share {
            participant: participant.clone(),
            amount: base + if (i as i64) < remainder { 1 } else { 0 },
        })
        .collect())
}

/// Normalizes a proposed split against the authoritative `amount`: floors each
/// proposal to whole minor units, clamps negatives to zero, then walks the
/// list in input order handing out (or taking back) one minor unit at a time
/// until the total matches `amount` exactly. No share ever goes negative.
///
/// Idempotent: the output is whole minor units, which floor to themselves, so
/// re-applying is a no-op.
pub fn adjust_custom_splits(
    amount: i64,
    proposed: &[ProposedShare],
) -> Result<Vec<Share>, LedgerError> {
    if amount < 0 {
        return Err(LedgerError::NegativeAmount(amount));
    }
    if proposed.is_empty() {
        return Ok(Vec::new());
    }

    // No share can legitimately exceed the total, so oversized proposals
    // (including f64 values beyond the i64 range) clamp to `amount`.
    let mut shares: Vec<Share> = proposed
        .iter()
        .map(|p| Share {
            participant: p.participant.clone(),
            amount: if p.amount <= 0.0 || !p.amount.is_finite() {
                0
            } else {
                (p.amount.floor() as i64).min(amount)
            },
        })
        .collect();

    // Wide accumulator: clamped shares are each <= amount, but their sum can
    // still pass i64::MAX for large inputs.
    let assigned: i128 = shares.iter().map(|s| s.amount as i128).sum();
    let mut shortfall = amount as i128 - assigned;
    let len = shares.len();

    let mut i = 0;
    while shortfall > 0 {
        shares[i % len].amount += 1;
        shortfall -= 1;
        i += 1;
    }
    // Overshoot only happens when proposals exceed the amount; since amount
    // is non-negative the loop always finds a positive share to reduce.
    while shortfall < 0 {
        if shares[i % len].amount > 0 {
            shares[i % len].amount -= 1;
            shortfall += 1;
        }
        i += 1;
    }

    Ok(shares)
}
