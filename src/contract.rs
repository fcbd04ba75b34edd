#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Order,
    Response, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw721::{NftInfoResponse, NumTokensResponse, OwnerOfResponse};

use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    Config, Listing, Token, CONFIG, LISTINGS, LISTING_FEE, MINTING_FEE, NEXT_TOKEN_ID, TOKENS,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:nft-marketplace";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        fee_recipient: deps.api.addr_validate(&msg.fee_recipient)?,
        denom: msg.denom,
        minting_fee: MINTING_FEE,
        listing_fee: LISTING_FEE,
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_TOKEN_ID.save(deps.storage, &1u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("fee_recipient", config.fee_recipient)
        .add_attribute("denom", config.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { token_uri } => execute_mint(deps, info, token_uri),
        ExecuteMsg::List { token_id, price } => execute_list(deps, info, token_id, price),
        ExecuteMsg::Purchase { token_id } => execute_purchase(deps, info, token_id),
        ExecuteMsg::CancelListing { token_id } => execute_cancel_listing(deps, info, token_id),
    }
}

/// Total amount attached in `denom`. Any coin of another denom is rejected;
/// an empty funds list counts as zero so fee checks report the shortfall.
fn paid_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    let mut total = Uint128::zero();
    for coin in &info.funds {
        if coin.denom != denom {
            return Err(ContractError::InvalidFunds {});
        }
        total += coin.amount;
    }
    Ok(total)
}

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    token_uri: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let payment = paid_amount(&info, &config.denom)?;
    if payment < config.minting_fee {
        return Err(ContractError::InsufficientFee {
            required: config.minting_fee,
            sent: payment,
        });
    }

    let token_id = NEXT_TOKEN_ID.load(deps.storage)?;
    TOKENS.save(
        deps.storage,
        token_id,
        &Token {
            owner: info.sender.clone(),
            token_uri,
        },
    )?;
    NEXT_TOKEN_ID.save(deps.storage, &(token_id + 1))?;

    // The whole payment goes to the fee recipient, overpayment included.
    let fee_msg = BankMsg::Send {
        to_address: config.fee_recipient.to_string(),
        amount: coins(payment.u128(), config.denom),
    };

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("fee", payment)
        .add_message(fee_msg))
}

pub fn execute_list(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
    price: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::NotFound { token_id })?;
    if token.owner != info.sender {
        return Err(ContractError::NotOwner {});
    }
    if price.is_zero() {
        return Err(ContractError::InvalidPrice {});
    }

    let payment = paid_amount(&info, &config.denom)?;
    if payment < config.listing_fee {
        return Err(ContractError::InsufficientPayment {
            required: config.listing_fee,
            sent: payment,
        });
    }

    // Overwrites any previous listing for this token, active or stale.
    LISTINGS.save(
        deps.storage,
        token_id,
        &Listing {
            token_id,
            price,
            is_listed: true,
        },
    )?;

    let fee_msg = BankMsg::Send {
        to_address: config.fee_recipient.to_string(),
        amount: coins(payment.u128(), config.denom),
    };

    Ok(Response::new()
        .add_attribute("action", "list")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("seller", info.sender)
        .add_attribute("price", price)
        .add_message(fee_msg))
}

pub fn execute_purchase(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let listing = LISTINGS
        .may_load(deps.storage, token_id)?
        .filter(|listing| listing.is_listed)
        .ok_or(ContractError::NotListed { token_id })?;

    let payment = paid_amount(&info, &config.denom)?;
    if payment < listing.price {
        return Err(ContractError::InsufficientPayment {
            required: listing.price,
            sent: payment,
        });
    }

    // A listed token always exists, so a plain load is fine here.
    let mut token = TOKENS.load(deps.storage, token_id)?;
    let seller = token.owner;
    token.owner = info.sender.clone();
    TOKENS.save(deps.storage, token_id, &token)?;
    LISTINGS.save(
        deps.storage,
        token_id,
        &Listing {
            is_listed: false,
            ..listing
        },
    )?;

    // The seller keeps the whole payment, overpayment included.
    let pay_msg = BankMsg::Send {
        to_address: seller.to_string(),
        amount: coins(payment.u128(), config.denom),
    };

    Ok(Response::new()
        .add_attribute("action", "purchase")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("seller", seller)
        .add_attribute("buyer", info.sender)
        .add_attribute("payment", payment)
        .add_message(pay_msg))
}

pub fn execute_cancel_listing(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::NotFound { token_id })?;
    if token.owner != info.sender {
        return Err(ContractError::NotOwner {});
    }

    let listing = LISTINGS
        .may_load(deps.storage, token_id)?
        .filter(|listing| listing.is_listed)
        .ok_or(ContractError::NotListed { token_id })?;

    LISTINGS.save(
        deps.storage,
        token_id,
        &Listing {
            is_listed: false,
            ..listing
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "cancel_listing")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("seller", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::OwnerOf { token_id } => query_owner_of(deps, token_id),
        QueryMsg::NftInfo { token_id } => query_nft_info(deps, token_id),
        QueryMsg::NumTokens {} => query_num_tokens(deps),
        QueryMsg::GetListing { token_id } => query_listing(deps, token_id),
        QueryMsg::GetAllListings { from_index, limit } => {
            query_all_listings(deps, from_index, limit)
        }
        QueryMsg::GetMintingFee {} => {
            let config = CONFIG.load(deps.storage)?;
            Ok(to_json_binary(&config.minting_fee)?)
        }
        QueryMsg::GetListingFee {} => {
            let config = CONFIG.load(deps.storage)?;
            Ok(to_json_binary(&config.listing_fee)?)
        }
        QueryMsg::Config {} => query_config(deps),
    }
}

fn query_owner_of(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::NotFound { token_id })?;
    Ok(to_json_binary(&OwnerOfResponse {
        owner: token.owner.to_string(),
        approvals: vec![],
    })?)
}

fn query_nft_info(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::NotFound { token_id })?;
    Ok(to_json_binary(&NftInfoResponse {
        token_uri: Some(token.token_uri),
        extension: Empty {},
    })?)
}

fn query_num_tokens(deps: Deps) -> Result<Binary, ContractError> {
    let next_id = NEXT_TOKEN_ID.load(deps.storage)?;
    Ok(to_json_binary(&NumTokensResponse { count: next_id - 1 })?)
}

fn query_listing(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    // A stale record (purchased or cancelled) is returned with is_listed unset;
    // only a token that was never listed errors out.
    let listing = LISTINGS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::NotListed { token_id })?;
    Ok(to_json_binary(&listing)?)
}

fn query_all_listings(
    deps: Deps,
    from_index: Option<u64>,
    limit: Option<u64>,
) -> Result<Binary, ContractError> {
    let from_index = from_index.unwrap_or(0);
    let limit = limit.unwrap_or(10);

    let listings: StdResult<Vec<Listing>> = LISTINGS
        .range(deps.storage, None, None, Order::Ascending)
        .skip(from_index as usize)
        .take(limit as usize)
        .map(|item| item.map(|(_, listing)| listing))
        .collect();
    Ok(to_json_binary(&listings?)?)
}

fn query_config(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(to_json_binary(&ConfigResponse {
        fee_recipient: config.fee_recipient.to_string(),
        denom: config.denom,
        minting_fee: config.minting_fee,
        listing_fee: config.listing_fee,
    })?)
}
