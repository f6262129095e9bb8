use crate::entities::*;
use crate::errors::*;
use crate::{escrow_id, text};
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String};
use uuid::Uuid;

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const ESCROW_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const ESCROW_LIFETIME_THRESHOLD: u32 = ESCROW_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contract]
pub struct EscrowLedgerContract;

#[contractimpl]
impl EscrowLedgerContract {
    pub fn __constructor(env: Env) {
        env.storage().instance().set(&DataKey::EscrowCount, &0u64);
    }

    pub fn greet(env: Env, name: String) -> String {
        text::greeting(&env, &name)
    }

    pub fn get_escrow(env: Env, id: String) -> Result<Escrow, Error> {
        Self::load_escrow(&env, &id)
    }

    pub fn create_escrow(
        env: Env,
        seller: Address,
        buyer: Address,
        arbitrator: Address,
        amount: u64,
        description: String,
        release_time: u64,
    ) -> String {
        let mut id_buf = Uuid::encode_buffer();
        let id_text: &str = escrow_id::generate(&env)
            .hyphenated()
            .encode_lower(&mut id_buf);

        let escrow = Escrow {
            id: String::from_str(&env, id_text),
            seller,
            buyer,
            arbitrator,
            amount,
            status: EscrowStatus::Pending,
            release_time,
            description,
        };

        let count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::EscrowCount)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::EscrowCount, &count.saturating_add(1));
        Self::save_escrow(&env, &escrow);

        env.events().publish(
            (symbol_short!("escrow"), symbol_short!("created")),
            (escrow.id.clone(), amount, release_time),
        );
        log!(
            &env,
            "Escrow {} created for {} with release time {}",
            escrow.id,
            amount,
            release_time
        );

        text::creation_confirmation(&env, id_text, &escrow)
    }

    pub fn release_escrow(env: Env, id: String) -> Result<String, Error> {
        let mut escrow = Self::load_escrow(&env, &id)?;

        let Some(released) = escrow.status.release() else {
            return Ok(String::from_str(&env, text::ESCROW_NOT_PENDING));
        };
        if env.ledger().timestamp() < escrow.release_time {
            return Ok(String::from_str(&env, text::RELEASE_TIME_NOT_REACHED));
        }

        escrow.status = released;
        Self::save_escrow(&env, &escrow);

        env.events()
            .publish((symbol_short!("escrow"), symbol_short!("released")), id);
        log!(&env, "Escrow {} released", escrow.id);
        Ok(String::from_str(&env, text::ESCROW_RELEASED))
    }

    pub fn escrow_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::EscrowCount)
            .unwrap_or(0)
    }

    fn load_escrow(env: &Env, id: &String) -> Result<Escrow, Error> {
        // Reads keep the entry alive; the record itself is left untouched.
        let key = DataKey::Escrow(id.clone());
        let escrow: Escrow = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::EscrowNotFound)?;
        env.storage()
            .persistent()
            .extend_ttl(&key, ESCROW_LIFETIME_THRESHOLD, ESCROW_BUMP_AMOUNT);
        Ok(escrow)
    }

    fn save_escrow(env: &Env, escrow: &Escrow) {
        let key = DataKey::Escrow(escrow.id.clone());
        env.storage().persistent().set(&key, escrow);
        env.storage()
            .persistent()
            .extend_ttl(&key, ESCROW_LIFETIME_THRESHOLD, ESCROW_BUMP_AMOUNT);
        env.storage()
            .instance()
            .extend_ttl(ESCROW_LIFETIME_THRESHOLD, ESCROW_BUMP_AMOUNT);
    }
}
