use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// Flat fees in the configured denom (micro-units): 0.05 and 0.01 whole units.
pub const MINTING_FEE: Uint128 = Uint128::new(50_000);
pub const LISTING_FEE: Uint128 = Uint128::new(10_000);

#[cw_serde]
pub struct Config {
    pub fee_recipient: Addr,
    pub denom: String,
    pub minting_fee: Uint128,
    pub listing_fee: Uint128,
}

#[cw_serde]
pub struct Token {
    pub owner: Addr,
    pub token_uri: String,
}

#[cw_serde]
pub struct Listing {
    pub token_id: u64,
    pub price: Uint128,
    pub is_listed: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const TOKENS: Map<u64, Token> = Map::new("tokens");

// A record stays here after purchase or cancellation, with is_listed unset.
pub const LISTINGS: Map<u64, Listing> = Map::new("listings");

// Token ids start at 1 and are never reused.
pub const NEXT_TOKEN_ID: Item<u64> = Item::new("next_token_id");
