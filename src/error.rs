use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Insufficient minting fee: required {required}, sent {sent}")]
    InsufficientFee { required: Uint128, sent: Uint128 },

    #[error("Insufficient payment: required {required}, sent {sent}")]
    InsufficientPayment { required: Uint128, sent: Uint128 },

    #[error("Listing price must be greater than zero")]
    InvalidPrice {},

    #[error("Sender does not own this token")]
    NotOwner {},

    #[error("Token {token_id} is not listed for sale")]
    NotListed { token_id: u64 },

    #[error("Token {token_id} does not exist")]
    NotFound { token_id: u64 },

    #[error("Invalid funds")]
    InvalidFunds {},
}
