//! Variant table listing.
//!
//! Renders every canonical column a provider requires, the strategy used to
//! match it, and its accepted aliases.

use anyhow::Result;
use itertools::Itertools;
use log::info;

use crate::{cli::AliasesArgs, provider::Provider, table};

pub fn execute(args: &AliasesArgs) -> Result<()> {
    let providers = match args.provider {
        Some(provider) => vec![provider],
        None => Provider::ALL.to_vec(),
    };

    let headers = vec![
        "provider".to_string(),
        "column".to_string(),
        "match".to_string(),
        "aliases".to_string(),
    ];
    let rows = alias_rows(&providers);
    table::print_table(&headers, &rows);
    info!("Listed {} alias row(s)", rows.len());
    Ok(())
}

pub fn alias_rows(providers: &[Provider]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for provider in providers {
        for (entry, strategy) in provider.profile().slots() {
            rows.push(vec![
                provider.to_string(),
                entry.field.to_string(),
                strategy.to_string(),
                entry.aliases.iter().join(", "),
            ]);
        }
    }
    rows
}
