use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EscrowStatus {
    Pending,
    Released,
    Disputed,
    Cancelled,
}

impl EscrowStatus {
    /// Status an escrow moves to when its funds are released.
    ///
    /// Only `Pending` can be released; every other status is terminal here.
    pub fn release(self) -> Option<EscrowStatus> {
        match self {
            EscrowStatus::Pending => Some(EscrowStatus::Released),
            EscrowStatus::Released | EscrowStatus::Disputed | EscrowStatus::Cancelled => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EscrowStatus::Pending => "PENDING",
            EscrowStatus::Released => "RELEASED",
            EscrowStatus::Disputed => "DISPUTED",
            EscrowStatus::Cancelled => "CANCELLED",
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Escrow {
    pub id: String,
    pub seller: Address,
    pub buyer: Address,
    pub arbitrator: Address,
    pub amount: u64,
    pub status: EscrowStatus,
    pub release_time: u64,
    pub description: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Escrow(String),
    EscrowCount,
}

#[cfg(test)]
mod tests {
    use super::EscrowStatus;

    #[test]
    fn only_pending_can_be_released() {
        assert_eq!(EscrowStatus::Pending.release(), Some(EscrowStatus::Released));
        assert_eq!(EscrowStatus::Released.release(), None);
        assert_eq!(EscrowStatus::Disputed.release(), None);
        assert_eq!(EscrowStatus::Cancelled.release(), None);
    }
}
