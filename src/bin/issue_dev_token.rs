// src/bin/issue_dev_token.rs
//! Mint a bearer token for local testing: `issue_dev_token <user-id> <username>`.
use anyhow::{Context, Result, bail};
use chatroom_core::application::{dto::TokenSubject, ports::security::TokenManager};
use chatroom_core::config::AppConfig;
use chatroom_core::domain::user::UserId;
use chatroom_core::infrastructure::security::token::BiscuitTokenManager;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(raw_id), Some(username)) = (args.next(), args.next()) else {
        bail!("usage: issue_dev_token <user-id> <username>");
    };
    let user_id: UserId = raw_id.parse().context("user id must be a positive integer")?;

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let token = manager.issue(TokenSubject { user_id, username }).await?;

    println!("{}", token.token);
    eprintln!("expires at {}", token.expires_at.to_rfc3339());
    Ok(())
}
