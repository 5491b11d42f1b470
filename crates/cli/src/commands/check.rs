//! `contactsync check`

use std::sync::Arc;

use anyhow::bail;
use contactsync_core::{ContactService, EntityService};
use contactsync_infra::{FiberyClient, HttpClient, HubSpotClient};

use super::load_config;

/// Run both connection tests; fails if either platform is unreachable.
pub async fn run() -> anyhow::Result<()> {
    let config = load_config()?;
    let http = HttpClient::new()?;
    let mut failures = 0;

    let fibery = match FiberyClient::from_config(&config.fibery, http.clone()) {
        Ok(client) => EntityService::new(Arc::new(client)).test_connection().await,
        Err(err) => Err(err),
    };
    report("Fibery", fibery, &mut failures);

    let hubspot = match HubSpotClient::from_config(&config.hubspot, http) {
        Ok(client) => ContactService::new(Arc::new(client)).test_connection().await,
        Err(err) => Err(err),
    };
    report("HubSpot", hubspot, &mut failures);

    if failures > 0 {
        bail!("{failures} connection check(s) failed");
    }
    Ok(())
}

fn report(platform: &str, outcome: contactsync_domain::Result<String>, failures: &mut usize) {
    match outcome {
        Ok(message) => println!("✓ {message}"),
        Err(err) => {
            *failures += 1;
            println!("✗ {platform}: {err}");
        }
    }
}
