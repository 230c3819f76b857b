//! Shared cw-multi-test harness: the guard contract plus two cw20-base
//! ledgers (the guarded token, minted by the guard, and the LP token).
#![allow(dead_code)]

use cosmwasm_std::{Addr, Empty, Timestamp, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use token_guard::msg::{CanSellResponse, ExecuteMsg, InstantiateMsg, LockConfigMsg, QueryMsg};

pub const OWNER: &str = "terra1owner";
pub const BRIDGE: &str = "terra1bridge";
pub const USER: &str = "terra1user";
pub const OTHER: &str = "terra1other";

pub const THIS_CHAIN_ID: u64 = 1;
pub const BSC_CHAIN_ID: u64 = 56;

/// Guarded token supply held by USER at start
pub const TOKEN_SUPPLY: u128 = 1_000_000;
/// LP tokens held by OWNER at start
pub const LP_SUPPLY: u128 = 500_000;

pub const LOCK_DURATION: u64 = 86_400;

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_guard() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        token_guard::contract::execute,
        token_guard::contract::instantiate,
        token_guard::contract::query,
    )
    .with_reply(token_guard::contract::reply);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub guard: Addr,
    pub token: Addr,
    pub lp_token: Addr,
    pub owner: Addr,
    pub bridge: Addr,
    pub user: Addr,
    pub other: Addr,
}

/// Default thresholds used across tests: 1 day / 5% / 10%
pub fn test_lock_config() -> LockConfigMsg {
    LockConfigMsg {
        lock_duration: LOCK_DURATION,
        min_liquidity_percentage: 5,
        max_sell_percentage: 10,
    }
}

pub fn default_instantiate_msg(token: &Addr, lp_token: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        owner: OWNER.to_string(),
        token: token.to_string(),
        lp_token: lp_token.to_string(),
        chain_id: THIS_CHAIN_ID,
        bridges: vec![BRIDGE.to_string()],
        lock_config: Some(test_lock_config()),
    }
}

fn instantiate_cw20(
    app: &mut App,
    code_id: u64,
    owner: &Addr,
    name: &str,
    symbol: &str,
    holder: &Addr,
    amount: u128,
) -> Addr {
    app.instantiate_contract(
        code_id,
        owner.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: holder.to_string(),
                amount: Uint128::from(amount),
            }],
            mint: Some(MinterResponse {
                minter: owner.to_string(),
                cap: None,
            }),
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

/// Deploy both ledgers and the guard, then hand token minting to the guard.
pub fn setup() -> Suite {
    let mut app = App::default();

    let owner = Addr::unchecked(OWNER);
    let bridge = Addr::unchecked(BRIDGE);
    let user = Addr::unchecked(USER);
    let other = Addr::unchecked(OTHER);

    let cw20_code = app.store_code(contract_cw20());
    let guard_code = app.store_code(contract_guard());

    let token = instantiate_cw20(
        &mut app,
        cw20_code,
        &owner,
        "Guarded Token",
        "GRD",
        &user,
        TOKEN_SUPPLY,
    );
    let lp_token = instantiate_cw20(
        &mut app,
        cw20_code,
        &owner,
        "Guarded LP",
        "GLP",
        &owner,
        LP_SUPPLY,
    );

    let guard = app
        .instantiate_contract(
            guard_code,
            owner.clone(),
            &default_instantiate_msg(&token, &lp_token),
            &[],
            "token-guard",
            Some(owner.to_string()),
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        token.clone(),
        &Cw20ExecuteMsg::UpdateMinter {
            new_minter: Some(guard.to_string()),
        },
        &[],
    )
    .unwrap();

    Suite {
        app,
        guard,
        token,
        lp_token,
        owner,
        bridge,
        user,
        other,
    }
}

impl Suite {
    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.guard.clone(), msg, &[])
    }

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(&self.guard, msg)
            .unwrap()
    }

    pub fn now(&self) -> Timestamp {
        self.app.block_info().time
    }

    pub fn advance_seconds(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += seconds / 5;
        });
    }

    pub fn balance(&self, cw20: &Addr, account: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                cw20,
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn token_supply(&self) -> Uint128 {
        let res: cw20::TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.token, &Cw20QueryMsg::TokenInfo {})
            .unwrap();
        res.total_supply
    }

    /// Grant the guard an allowance on one of the ledgers.
    pub fn approve(&mut self, cw20: &Addr, holder: &Addr, amount: u128) {
        self.app
            .execute_contract(
                holder.clone(),
                cw20.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.guard.to_string(),
                    amount: Uint128::from(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Owner approves and locks LP tokens.
    pub fn lock(&mut self, amount: u128, duration: u64) -> anyhow::Result<AppResponse> {
        let owner = self.owner.clone();
        let lp_token = self.lp_token.clone();
        self.approve(&lp_token, &owner, amount);
        self.execute(
            &owner,
            &ExecuteMsg::LockLiquidity {
                amount: Uint128::from(amount),
                duration,
            },
        )
    }

    pub fn can_sell(&self, seller: &Addr, amount: u128) -> CanSellResponse {
        self.query(&QueryMsg::CanSell {
            seller: seller.to_string(),
            amount: Uint128::from(amount),
        })
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Root cause of a failed execution, as the contract rendered it.
pub fn err_string(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}

/// Value of `key` on the first custom event of type `ty` (`wasm-` prefixed).
pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    let wasm_ty = format!("wasm-{}", ty);
    res.events
        .iter()
        .filter(|e| e.ty == wasm_ty)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn has_event(res: &AppResponse, ty: &str) -> bool {
    let wasm_ty = format!("wasm-{}", ty);
    res.events.iter().any(|e| e.ty == wasm_ty)
}
