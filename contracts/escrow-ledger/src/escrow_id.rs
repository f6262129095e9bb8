use soroban_sdk::Env;
use uuid::{Builder, Uuid};

/// Length of a hyphenated UUID in bytes.
pub const ESCROW_ID_LEN: usize = uuid::fmt::Hyphenated::LENGTH;

/// Draws 128 bits from the host PRNG and stamps them as a version 4 UUID.
pub fn generate(env: &Env) -> Uuid {
    let mut raw = [0u8; 16];
    raw[..8].copy_from_slice(&env.prng().u64_in_range(..).to_be_bytes());
    raw[8..].copy_from_slice(&env.prng().u64_in_range(..).to_be_bytes());
    Builder::from_random_bytes(raw).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Variant;

    #[test]
    fn generated_ids_are_distinct_v4_uuids() {
        let env = Env::default();
        let contract_id = env.register(crate::EscrowLedgerContract, ());
        let (first, second) = env.as_contract(&contract_id, || (generate(&env), generate(&env)));

        assert_ne!(first, second);
        for id in [first, second] {
            assert_eq!(id.get_version_num(), 4);
            assert_eq!(id.get_variant(), Variant::RFC4122);

            let mut buf = Uuid::encode_buffer();
            assert_eq!(id.hyphenated().encode_lower(&mut buf).len(), ESCROW_ID_LEN);
        }
    }
}
