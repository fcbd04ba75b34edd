use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Empty, Uint128};
use cw721::{NftInfoResponse, NumTokensResponse, OwnerOfResponse};

use crate::state::Listing;

#[cw_serde]
pub struct InstantiateMsg {
    pub fee_recipient: String,
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a new token to the sender. The attached funds pay the minting fee.
    Mint { token_uri: String },
    /// Put an owned token up for sale. The attached funds pay the listing fee.
    List { token_id: u64, price: Uint128 },
    /// Buy a listed token at its asking price with the attached funds.
    Purchase { token_id: u64 },
    /// Deactivate an owned token's listing.
    CancelListing { token_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    #[returns(NftInfoResponse<Empty>)]
    NftInfo { token_id: u64 },
    #[returns(NumTokensResponse)]
    NumTokens {},
    #[returns(Listing)]
    GetListing { token_id: u64 },
    #[returns(Vec<Listing>)]
    GetAllListings {
        from_index: Option<u64>,
        limit: Option<u64>,
    },
    #[returns(Uint128)]
    GetMintingFee {},
    #[returns(Uint128)]
    GetListingFee {},
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub fee_recipient: String,
    pub denom: String,
    pub minting_fee: Uint128,
    pub listing_fee: Uint128,
}
