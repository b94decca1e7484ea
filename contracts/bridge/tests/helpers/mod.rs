//! Shared multi-test setup for the bridge integration tests.
//!
//! Accounts are 20-byte bech32 addresses so they fit the signed message; the
//! token is a real cw20-base contract with the bridge as minter.

#![allow(dead_code)]

use anyhow::Result as AnyResult;
use cosmwasm_std::{to_json_binary, Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppBuilder, AppResponse, BankKeeper, ContractWrapper, Executor, MockAddressGenerator, MockApiBech32, WasmKeeper};

use attestor::{address, Attestation, Attestor, SwapInitialized, TxEvent};
use bridge::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, IsRedeemedResponse, NonceResponse, QueryMsg,
    ReceiveMsg,
};

pub type BridgeApp = App<BankKeeper, MockApiBech32>;

pub const PREFIX: &str = "terra";
pub const VALIDATOR_KEY: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000001";
pub const OTHER_KEY: &str = "0x0000000000000000000000000000000000000000000000000000000000000002";

/// Chain ids used throughout the tests
pub const CHAIN_A: u64 = 1;
pub const CHAIN_B: u64 = 56;

/// Starting balance of every funded account
pub const INITIAL_BALANCE: u128 = 1_000_000;

// ============================================================================
// Accounts
// ============================================================================

pub fn account(seed: u8) -> Addr {
    Addr::unchecked(address::encode(&[seed; 20], PREFIX).unwrap())
}

pub fn admin() -> Addr {
    account(0xad)
}

pub fn alice() -> Addr {
    account(0xa1)
}

pub fn bob() -> Addr {
    account(0xb0)
}

pub fn validator() -> Attestor {
    Attestor::from_hex(VALIDATOR_KEY).unwrap()
}

// ============================================================================
// Contracts
// ============================================================================

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    )
    .with_migrate(bridge::contract::migrate);
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

/// One bridge instance with its token ledger
#[derive(Debug, Clone)]
pub struct Instance {
    pub bridge: Addr,
    pub token: Addr,
    pub chain_id: u64,
}

pub fn new_app() -> BridgeApp {
    AppBuilder::default()
        .with_api(MockApiBech32::new(PREFIX))
        .with_wasm(WasmKeeper::default().with_address_generator(MockAddressGenerator))
        .build(|_, _, _| {})
}

/// Deploy token and bridge for `chain_id`, fund `alice` and `bob`, and hand
/// mint authority to the bridge.
pub fn deploy(app: &mut BridgeApp, chain_id: u64, validator_hex: &str) -> Instance {
    let admin = admin();

    let cw20_id = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_id,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Bridged Token".to_string(),
                symbol: "BRG".to_string(),
                decimals: 18,
                initial_balances: vec![
                    Cw20Coin {
                        address: alice().to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                    Cw20Coin {
                        address: bob().to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                ],
                mint: Some(MinterResponse {
                    minter: admin.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "bridged-token",
            None,
        )
        .unwrap();

    let bridge_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_id,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                validator: validator_hex.to_string(),
                token: token.to_string(),
                chain_id,
            },
            &[],
            "swap-bridge",
            Some(admin.to_string()),
        )
        .unwrap();

    app.execute_contract(
        admin,
        token.clone(),
        &Cw20ExecuteMsg::UpdateMinter {
            new_minter: Some(bridge.to_string()),
        },
        &[],
    )
    .unwrap();

    Instance {
        bridge,
        token,
        chain_id,
    }
}

/// Instance on `CHAIN_A` trusting the default validator
pub fn setup() -> (BridgeApp, Instance) {
    let mut app = new_app();
    let instance = deploy(&mut app, CHAIN_A, &validator().address_hex());
    (app, instance)
}

// ============================================================================
// Execute Helpers
// ============================================================================

pub fn add_chain(app: &mut BridgeApp, instance: &Instance, chain_id: u64) -> AnyResult<AppResponse> {
    app.execute_contract(
        admin(),
        instance.bridge.clone(),
        &ExecuteMsg::AddChain { chain_id },
        &[],
    )
}

/// Approve the bridge and swap through the allowance path.
pub fn swap(
    app: &mut BridgeApp,
    instance: &Instance,
    sender: &Addr,
    chain_id: u64,
    recipient: &str,
    amount: u128,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        sender.clone(),
        instance.token.clone(),
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: instance.bridge.to_string(),
            amount: Uint128::new(amount),
            expires: None,
        },
        &[],
    )?;

    app.execute_contract(
        sender.clone(),
        instance.bridge.clone(),
        &ExecuteMsg::Swap {
            chain_id,
            recipient: recipient.to_string(),
            amount: Uint128::new(amount),
        },
        &[],
    )
}

/// Swap through cw20 `Send`.
pub fn swap_via_send(
    app: &mut BridgeApp,
    instance: &Instance,
    sender: &Addr,
    chain_id: u64,
    recipient: &str,
    amount: u128,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        sender.clone(),
        instance.token.clone(),
        &Cw20ExecuteMsg::Send {
            contract: instance.bridge.to_string(),
            amount: Uint128::new(amount),
            msg: to_json_binary(&ReceiveMsg::Swap {
                chain_id,
                recipient: recipient.to_string(),
            })
            .unwrap(),
        },
        &[],
    )
}

pub fn redeem(
    app: &mut BridgeApp,
    instance: &Instance,
    caller: &Addr,
    attestation: &Attestation,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        caller.clone(),
        instance.bridge.clone(),
        &ExecuteMsg::Redeem {
            chain_id: attestation.chain_id,
            recipient: attestation.recipient.clone(),
            amount: attestation.amount,
            nonce: attestation.nonce,
            signature: attestation.signature.clone(),
        },
        &[],
    )
}

/// Sign a redemption with `attestor` without going through a swap.
pub fn attest(
    attestor: &Attestor,
    chain_id: u64,
    recipient: &Addr,
    amount: u128,
    nonce: u64,
) -> Attestation {
    let (recipient_bytes, _) = address::decode(recipient.as_str()).unwrap();
    Attestation {
        chain_id,
        recipient: recipient.to_string(),
        amount: Uint128::new(amount),
        nonce,
        signature: attestor
            .attest(chain_id, &recipient_bytes, amount, nonce)
            .unwrap(),
    }
}

/// Initiation records `instance` emitted in a transaction, as the attestor
/// would see them.
pub fn swaps_in(res: &AppResponse, instance: &Instance) -> Vec<SwapInitialized> {
    let events: Vec<TxEvent> = res.events.iter().map(TxEvent::from).collect();
    SwapInitialized::from_tx_events(&events, instance.bridge.as_str())
}

/// Attribute value from the bridge's `wasm` event
pub fn wasm_attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm")
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn err_str(res: AnyResult<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}

// ============================================================================
// Query Helpers
// ============================================================================

pub fn balance(app: &BridgeApp, instance: &Instance, account: &Addr) -> u128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            &instance.token,
            &Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}

pub fn total_supply(app: &BridgeApp, instance: &Instance) -> u128 {
    let res: cw20::TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(&instance.token, &Cw20QueryMsg::TokenInfo {})
        .unwrap();
    res.total_supply.u128()
}

pub fn current_nonce(app: &BridgeApp, instance: &Instance) -> u64 {
    let res: NonceResponse = app
        .wrap()
        .query_wasm_smart(&instance.bridge, &QueryMsg::CurrentNonce {})
        .unwrap();
    res.nonce
}

pub fn is_redeemed(app: &BridgeApp, instance: &Instance, chain_id: u64, nonce: u64) -> bool {
    let res: IsRedeemedResponse = app
        .wrap()
        .query_wasm_smart(&instance.bridge, &QueryMsg::IsRedeemed { chain_id, nonce })
        .unwrap();
    res.redeemed
}

pub fn config(app: &BridgeApp, instance: &Instance) -> ConfigResponse {
    app.wrap()
        .query_wasm_smart(&instance.bridge, &QueryMsg::Config {})
        .unwrap()
}
