//! Token command - prints a bearer token signed with the configured secret

use clap::Args;

use crate::config::AppConfig;
use crate::domain::AccountId;

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Account id the token is issued for
    #[arg(long)]
    pub uid: u64,
}

pub async fn run(args: TokenArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    let token = issue_token(&config, AccountId::new(args.uid))?;

    println!("{}", token);

    Ok(())
}

fn issue_token(config: &AppConfig, account_id: AccountId) -> anyhow::Result<String> {
    Ok(crate::create_jwt_service(config).generate(account_id)?)
}
