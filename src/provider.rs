//! Provider profiles and the static variant table.
//!
//! Each [`Provider`] maps to a [`ProviderProfile`] describing which IP
//! columns its files carry and how their headers are matched. The common
//! fields (`Cell Number`, `Sim Number`) are shared by every provider and are
//! always matched exactly.
//!
//! All aliases are stored lowercase and trimmed; header comparison happens
//! against `lower(trim(header))`. Alias sets of different canonical fields
//! must never overlap.

use std::{fmt, str::FromStr};

use clap::ValueEnum;

pub const CELL_NUMBER: &str = "Cell Number";
pub const SIM_NUMBER: &str = "Sim Number";
pub const IP_ADDRESS: &str = "IP Address";
pub const IP_ADDRESS_1: &str = "IP Address1";
pub const IP_ADDRESS_2: &str = "IP Address2";

/// A canonical field together with its accepted header aliases, in
/// preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAliases {
    pub field: &'static str,
    pub aliases: &'static [&'static str],
}

pub const COMMON_FIELDS: &[FieldAliases] = &[
    FieldAliases {
        field: CELL_NUMBER,
        aliases: &[
            "cell number",
            "cell no",
            "cellnumber",
            "cellno",
            "cell_number",
            "cell_no",
            "msisdn",
            "mobile no",
        ],
    },
    FieldAliases {
        field: SIM_NUMBER,
        aliases: &[
            "sim number",
            "sim no",
            "simnumber",
            "simno",
            "sim_number",
            "sim_no",
            "iccid",
            "sim",
            "icc id",
            "sim id",
        ],
    },
];

const VODACOM_IP_FIELDS: &[FieldAliases] = &[FieldAliases {
    field: IP_ADDRESS,
    aliases: &["ip address", "ip_address", "ipaddress", "ip"],
}];

const MTN_IP_FIELDS: &[FieldAliases] = &[
    FieldAliases {
        field: IP_ADDRESS_1,
        aliases: &["ip address1", "ip_address1", "ipaddress1", "ip1", "cn", "cn-ip"],
    },
    FieldAliases {
        field: IP_ADDRESS_2,
        aliases: &["ip address2", "ip_address2", "ipaddress2", "ip2", "nl", "nl-ip"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Provider {
    Vodacom,
    Mtn,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Vodacom, Provider::Mtn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Vodacom => "Vodacom",
            Provider::Mtn => "MTN",
        }
    }

    pub fn profile(&self) -> &'static ProviderProfile {
        match self {
            Provider::Vodacom => &VODACOM,
            Provider::Mtn => &MTN,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vodacom" => Ok(Provider::Vodacom),
            "mtn" => Ok(Provider::Mtn),
            other => Err(format!(
                "Unknown provider '{other}'. Supported providers: Vodacom, MTN"
            )),
        }
    }
}

/// How a slot's aliases are compared with normalized headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Aliases are tried in declared order; the first alias equal to a
    /// header wins.
    Exact,
    /// Columns are tried in table order; the first header that contains an
    /// alias, or is contained in one, wins.
    Substring,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::Substring => "substring",
        }
    }

    /// Returns the index into `headers` chosen for `aliases`. Headers whose
    /// `eligible` flag is false are skipped.
    pub fn locate(
        &self,
        aliases: &[&str],
        headers: &[String],
        eligible: impl Fn(usize) -> bool,
    ) -> Option<usize> {
        match self {
            MatchStrategy::Exact => aliases.iter().find_map(|alias| {
                headers
                    .iter()
                    .enumerate()
                    .find(|(idx, header)| eligible(*idx) && header.as_str() == *alias)
                    .map(|(idx, _)| idx)
            }),
            MatchStrategy::Substring => headers
                .iter()
                .enumerate()
                .filter(|(idx, _)| eligible(*idx))
                .find(|(_, header)| {
                    aliases
                        .iter()
                        .any(|alias| header.contains(alias) || alias.contains(header.as_str()))
                })
                .map(|(idx, _)| idx),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-provider reconciliation rules.
#[derive(Debug)]
pub struct ProviderProfile {
    pub provider: Provider,
    pub ip_fields: &'static [FieldAliases],
    pub ip_strategy: MatchStrategy,
}

static VODACOM: ProviderProfile = ProviderProfile {
    provider: Provider::Vodacom,
    ip_fields: VODACOM_IP_FIELDS,
    ip_strategy: MatchStrategy::Exact,
};

static MTN: ProviderProfile = ProviderProfile {
    provider: Provider::Mtn,
    ip_fields: MTN_IP_FIELDS,
    ip_strategy: MatchStrategy::Substring,
};

impl ProviderProfile {
    /// Canonical output columns in order: common fields, then IP fields.
    pub fn canonical_fields(&self) -> Vec<&'static str> {
        COMMON_FIELDS
            .iter()
            .chain(self.ip_fields.iter())
            .map(|entry| entry.field)
            .collect()
    }

    /// Every (field, aliases, strategy) slot the reconciler resolves, in
    /// resolution order.
    pub fn slots(&self) -> impl Iterator<Item = (&'static FieldAliases, MatchStrategy)> + '_ {
        COMMON_FIELDS
            .iter()
            .map(|entry| (entry, MatchStrategy::Exact))
            .chain(self.ip_fields.iter().map(|entry| (entry, self.ip_strategy)))
    }
}
