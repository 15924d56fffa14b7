//! The injected energy cost model.
//!
//! Energy pricing is a protocol-level constant set — coefficients relating
//! signature count and byte size to cost — that lives outside this crate.
//! We refuse to guess them: a wrong coefficient silently embeds a wrong
//! energy figure in every header, and every hash downstream of it. The
//! embedding application supplies a model; this crate only defines the seam.

use crate::transaction::types::Energy;

/// Deterministic pricing function for account transactions.
///
/// The assembler calls this exactly once per encoding with:
///
/// - `signature_count` — total signatures across all credentials,
/// - `payload_size` — byte length of `type tag ++ serialized payload`,
/// - `base_cost` — the payload's flat execution cost.
///
/// Implementations must be pure: same inputs, same energy, every time, on
/// every node. Anything else and identical transactions stop hashing
/// identically.
///
/// Closures with the matching shape implement the trait, so tests and small
/// embedders can write `|sigs, size, base| ...` instead of a named type.
pub trait EnergyCostModel {
    /// Total energy the transaction must fund.
    fn cost(&self, signature_count: u32, payload_size: usize, base_cost: Energy) -> Energy;
}

impl<F> EnergyCostModel for F
where
    F: Fn(u32, usize, Energy) -> Energy,
{
    fn cost(&self, signature_count: u32, payload_size: usize, base_cost: Energy) -> Energy {
        self(signature_count, payload_size, base_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_cost_models() {
        let model = |sigs: u32, size: usize, base: Energy| {
            Energy(base.0 + 100 * sigs as u64 + size as u64)
        };
        assert_eq!(model.cost(2, 41, Energy(300)), Energy(541));
    }

    #[test]
    fn trait_objects_work_at_the_seam() {
        let model: &dyn EnergyCostModel = &|_: u32, _: usize, base: Energy| base;
        assert_eq!(model.cost(5, 1000, Energy(7)), Energy(7));
    }
}
