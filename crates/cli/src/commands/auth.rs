//! `contactsync auth` - interactive OAuth bootstrap for the HubSpot app

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use contactsync_common::auth::extract_authorization_code;
use contactsync_domain::constants::HUBSPOT_API_BASE;
use contactsync_domain::SyncError;
use contactsync_infra::errors::InfraError;
use contactsync_infra::integrations::hubspot::oauth_client;

use super::{load_config, persist_hubspot};

pub async fn run() -> anyhow::Result<()> {
    let config = load_config()?;
    let client = oauth_client(&config.hubspot, HUBSPOT_API_BASE)?;

    println!("HubSpot OAuth Token Setup");
    println!("{}", "=".repeat(80));
    println!();
    println!("STEP 1: Visit this URL in your browser:");
    println!();
    println!("{}", client.authorization_url());
    println!();
    println!("STEP 2: Authorize the app in your browser");
    println!("   - You'll be redirected to {} (the page may not load)", client.config().redirect_uri);
    println!("   - Copy the ENTIRE URL from your browser's address bar");
    println!();
    print!("STEP 3: Paste the redirect URL here: ");
    io::stdout().flush()?;

    let mut redirect_url = String::new();
    io::stdin().lock().read_line(&mut redirect_url).context("failed to read redirect URL")?;

    let code = code_from_redirect(&redirect_url)?;

    println!();
    println!("STEP 4: Exchanging code for access token...");
    let tokens = client
        .exchange_code_for_tokens(&code)
        .await
        .map_err(|err| SyncError::from(InfraError::from(err)))?;

    let credentials = config.hubspot.with_tokens(tokens.access_token, tokens.refresh_token);
    let path = persist_hubspot(&credentials)?;

    println!("✓ Tokens saved to {}", path.display());
    Ok(())
}

fn code_from_redirect(pasted: &str) -> anyhow::Result<String> {
    match extract_authorization_code(pasted.trim()) {
        Some(code) => Ok(code),
        None => bail!("no authorization code found in URL"),
    }
}
