//! `contactsync discover`

use std::sync::Arc;

use contactsync_core::EntityService;
use contactsync_infra::{FiberyClient, HttpClient};

use super::load_config;

pub async fn run() -> anyhow::Result<()> {
    let config = load_config()?;
    let client = FiberyClient::from_config(&config.fibery, HttpClient::new()?)?;
    let service = EntityService::new(Arc::new(client));

    println!("{}", "=".repeat(60));
    println!("DISCOVERING FIBERY ENTITY TYPES");
    println!("{}", "=".repeat(60));

    let summary = service.discover_types().await?;

    println!();
    println!("CUSTOM ENTITY TYPES (can be synced):");
    println!("{}", "-".repeat(60));

    if summary.custom_types.is_empty() {
        println!("  No custom types found yet.");
        println!("  You may need to create types in Fibery first.");
    }

    for custom in &summary.custom_types {
        println!();
        println!("  {}", custom.name);
        if !custom.fields.is_empty() {
            println!("     Fields ({}):", custom.fields.len());
            for field in custom.displayable_fields() {
                println!("       - {} ({})", field.name, field.field_type);
            }
        }
    }

    println!();
    println!("SUMMARY:");
    println!("  Custom types: {}", summary.custom_types.len());
    println!("  System types: {}", summary.system_types.len());

    Ok(())
}
