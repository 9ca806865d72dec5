use anyhow::{Context, Result};
use tokio::process::Command;

use crate::{command_line::CommandLine, init_args::InitArgs};

const NEAR_BIN: &str = "near";
const NEAR_ENV: &str = "NEAR_ENV";
const WASM_FILE: &str = "res/oracle.wasm";
const INIT_FUNCTION: &str = "new";

pub struct Deploy {
    cmd: CommandLine,
}

impl Deploy {
    pub fn new(cmd: CommandLine) -> Self {
        Self { cmd }
    }

    pub async fn run(&self) -> Result<i32> {
        let init_args = serde_json::to_string(&InitArgs::from_command_line(&self.cmd))?;
        let args = near_deploy_args(&self.cmd.account_id, &init_args);

        log::info!("deploying to {} as {}", self.cmd.network, self.cmd.account_id);
        log::info!("init args: {}", init_args);

        let status = Command::new(NEAR_BIN)
            .env(NEAR_ENV, &self.cmd.network)
            .args(&args)
            .status()
            .await
            .with_context(|| format!("failed to spawn {}", NEAR_BIN))?;

        // exit codes pass through untouched; a signal death maps to 1
        Ok(status.code().unwrap_or(1))
    }
}

fn near_deploy_args(account_id: &str, init_args: &str) -> Vec<String> {
    [
        "deploy",
        "--accountId",
        account_id,
        "--wasmFile",
        WASM_FILE,
        "--initFunction",
        INIT_FUNCTION,
        "--initArgs",
        init_args,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn deploy_args_target_the_requested_account() {
        let cmd = CommandLine::try_parse_from([
            "deploy",
            "--accountId",
            "testoracle.near",
            "--network",
            "testnet",
        ])
        .unwrap();
        assert_eq!(cmd.network, "testnet");

        let init_args = serde_json::to_string(&InitArgs::from_command_line(&cmd)).unwrap();
        let args = near_deploy_args(&cmd.account_id, &init_args);

        assert_eq!(args[0], "deploy");
        assert_eq!(args[1], "--accountId");
        assert_eq!(args[2], "testoracle.near");
    }

    #[test]
    fn deploy_args_carry_wasm_init_function_and_payload() {
        let cmd = CommandLine::try_parse_from(["deploy"]).unwrap();
        let init_args = serde_json::to_string(&InitArgs::from_command_line(&cmd)).unwrap();
        let args = near_deploy_args(&cmd.account_id, &init_args);

        assert_eq!(
            args[3..8],
            [
                "--wasmFile".to_string(),
                "res/oracle.wasm".to_string(),
                "--initFunction".to_string(),
                "new".to_string(),
                "--initArgs".to_string(),
            ]
        );
        // the payload rides as a single argument, valid JSON end to end
        let payload: serde_json::Value = serde_json::from_str(&args[8]).unwrap();
        assert_eq!(payload["config"]["max_outcomes"], 8);
    }
}
