#![no_std]

extern crate alloc;

mod entities;
mod errors;
mod escrow_contract;
mod escrow_id;
mod text;

pub use entities::{DataKey, Escrow, EscrowStatus};
pub use errors::Error;
pub use escrow_contract::{EscrowLedgerContract, EscrowLedgerContractClient};
