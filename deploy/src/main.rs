mod command_line;
mod deploy;
mod init_args;

use anyhow::Result;
use clap::Parser;
use command_line::CommandLine;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cmd = CommandLine::parse();
    let code = cmd.execute().await?;
    std::process::exit(code)
}
