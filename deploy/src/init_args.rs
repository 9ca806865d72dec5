use serde::Serialize;
use serde_json::Value;

use crate::command_line::CommandLine;

/// Arguments passed to the oracle contract's `new` entry point. Field names
/// and the string/number split per field are fixed by the contract interface:
/// 128-bit amounts and nanosecond durations travel as decimal strings, small
/// counters as bare integers.
#[derive(Debug, Serialize)]
pub struct InitArgs {
    pub initial_whitelist: Vec<Value>,
    pub config: OracleConfig,
}

#[derive(Debug, Serialize)]
pub struct OracleConfig {
    pub gov: String,
    pub final_arbitrator: String,
    pub stake_token: String,
    pub payment_token: String,
    pub validity_bond: String,
    pub max_outcomes: u8,
    pub default_challenge_window_duration: String,
    pub min_initial_challenge_window_duration: String,
    pub final_arbitrator_invoke_amount: String,
    pub resolution_fee_percentage: u16,
    pub min_resolution_bond: String,
    pub fee: FeeConfig,
}

#[derive(Debug, Serialize)]
pub struct FeeConfig {
    pub flux_market_cap: String,
    pub total_value_staked: String,
    pub resolution_fee_percentage: u16,
}

impl InitArgs {
    pub fn from_command_line(cmd: &CommandLine) -> Self {
        Self {
            initial_whitelist: Vec::new(),
            config: OracleConfig {
                gov: cmd.gov.clone(),
                final_arbitrator: cmd.final_arbitrator.clone(),
                stake_token: cmd.stake_token.clone(),
                payment_token: cmd.payment_token.clone(),
                validity_bond: cmd.validity_bond.clone(),
                max_outcomes: cmd.max_outcomes,
                default_challenge_window_duration: cmd.default_challenge_window_duration.clone(),
                min_initial_challenge_window_duration: cmd
                    .min_initial_challenge_window_duration
                    .clone(),
                final_arbitrator_invoke_amount: cmd.final_arbitrator_invoke_amount.clone(),
                resolution_fee_percentage: cmd.resolution_fee_percentage,
                min_resolution_bond: cmd.min_resolution_bond.clone(),
                fee: FeeConfig {
                    flux_market_cap: cmd.flux_market_cap.clone(),
                    total_value_staked: cmd.total_value_staked.clone(),
                    // single flag feeds both the config and the fee sub-object
                    resolution_fee_percentage: cmd.resolution_fee_percentage,
                },
            },
        }
    }
}
