use alloc::{format, string::String as Text, vec};
use soroban_sdk::{Env, String};

use crate::entities::Escrow;

pub const ESCROW_NOT_PENDING: &str = "Escrow is not pending";
pub const RELEASE_TIME_NOT_REACHED: &str = "Release time has not been reached";
pub const ESCROW_RELEASED: &str = "Escrow released";

pub fn greeting(env: &Env, name: &String) -> String {
    String::from_str(env, &format!("Hello, {}!", to_text(name)))
}

/// `Escrow <id> created: amount <amount>, release time <ts>, status <STATUS>`
pub fn creation_confirmation(env: &Env, id: &str, escrow: &Escrow) -> String {
    String::from_str(
        env,
        &format!(
            "Escrow {} created: amount {}, release time {}, status {}",
            id,
            escrow.amount,
            escrow.release_time,
            escrow.status.label()
        ),
    )
}

fn to_text(s: &String) -> Text {
    let mut bytes = vec![0u8; s.len() as usize];
    s.copy_into_slice(&mut bytes);
    Text::from_utf8_lossy(&bytes).into_owned()
}
