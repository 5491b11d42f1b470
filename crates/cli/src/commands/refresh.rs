//! `contactsync refresh-token [--save]`

use contactsync_infra::{HttpClient, HubSpotClient};

use super::{load_config, persist_hubspot};

/// `--save` anywhere after the subcommand name.
pub fn wants_save(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| arg == "--save")
}

pub async fn run(save: bool) -> anyhow::Result<()> {
    let config = load_config()?;
    let client = HubSpotClient::from_config(&config.hubspot, HttpClient::new()?)?;

    let refreshed = client.refresh_credentials().await?;
    println!("✓ Token refreshed successfully!");
    println!();
    println!("New Access Token: {}", refreshed.access_token.as_deref().unwrap_or_default());
    println!("New Refresh Token: {}", refreshed.refresh_token.as_deref().unwrap_or_default());

    if save {
        let path = persist_hubspot(&refreshed)?;
        println!();
        println!("✓ Saved to {}", path.display());
    } else {
        println!();
        println!("Update HUBSPOT_ACCESS_TOKEN in your configuration, or rerun with --save.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn save_flag_is_detected_after_subcommand() {
        assert!(wants_save(&args(&["refresh-token", "--save"])));
        assert!(!wants_save(&args(&["refresh-token"])));
        assert!(!wants_save(&args(&["--save"])));
        assert!(!wants_save(&args(&["refresh-token", "--saved"])));
    }
}
