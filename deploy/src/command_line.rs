use anyhow::Result;
use clap::Parser;

use crate::deploy::Deploy;

#[derive(Debug, Parser)]
#[clap(args_override_self = true)]
pub struct CommandLine {
    #[clap(long, default_value = "testnet")]
    pub network: String,

    #[clap(long = "accountId", default_value = "oracle.flux-dev")]
    pub account_id: String,

    #[clap(long, default_value = "gov.flux-dev")]
    pub gov: String,

    #[clap(long = "finalArbitrator", default_value = "arbitrator.flux-dev")]
    pub final_arbitrator: String,

    #[clap(long = "stakeToken", default_value = "v2.fluxtoken.flux-dev")]
    pub stake_token: String,

    #[clap(long = "paymentToken", default_value = "v2.wnear.flux-dev")]
    pub payment_token: String,

    #[clap(long = "validityBond", default_value = "1000000000000000000000000")]
    pub validity_bond: String,

    #[clap(long = "maxOutcomes", default_value_t = 8)]
    pub max_outcomes: u8,

    #[clap(
        long = "defaultChallengeWindowDuration",
        default_value = "43200000000000"
    )]
    pub default_challenge_window_duration: String,

    #[clap(
        long = "minInitialChallengeWindowDuration",
        default_value = "43200000000000"
    )]
    pub min_initial_challenge_window_duration: String,

    #[clap(
        long = "finalArbitratorInvokeAmount",
        default_value = "2500000000000000000000000000000"
    )]
    pub final_arbitrator_invoke_amount: String,

    #[clap(long = "fluxMarketCap", default_value = "50000000000000000000000000")]
    pub flux_market_cap: String,

    #[clap(long = "totalValueStaked", default_value = "2500000000000000000000000")]
    pub total_value_staked: String,

    #[clap(long = "resolutionFeePercentage", default_value_t = 100)]
    pub resolution_fee_percentage: u16,

    #[clap(long = "minResolutionBond", default_value = "100000000000000000000000000")]
    pub min_resolution_bond: String,
}

impl CommandLine {
    pub async fn execute(self) -> Result<i32> {
        let deploy = Deploy::new(self);
        deploy.run().await
    }
}
