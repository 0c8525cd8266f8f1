//! Account data types.

use chrono::{DateTime, Utc};
use folio_shared::types::{AccountId, Money};
use serde::{Deserialize, Serialize};

use super::enums::{AccountType, Institution, UnknownMember};

/// A brokerage account as returned by the account API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Identifier at the institution.
    pub external_id: String,
    /// Raw [`AccountType`] id.
    pub account_type_id: u32,
    /// Raw [`Institution`] id.
    pub institution_id: u32,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Whether the account is active.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// The account type, if this build knows the id.
    #[must_use]
    pub const fn account_type(&self) -> Option<AccountType> {
        AccountType::from_id(self.account_type_id)
    }

    /// The institution, if this build knows the id.
    #[must_use]
    pub const fn institution(&self) -> Option<Institution> {
        Institution::from_id(self.institution_id)
    }
}

/// Aggregated totals for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTotals {
    /// Total cost basis.
    pub cost: Money,
}

/// Attribute used to partition an account list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupMode {
    /// A single group holding every account.
    #[default]
    None,
    /// One group per institution id.
    Institution,
    /// One group per account type id.
    AccountType,
}

impl GroupMode {
    /// Wire name (`none`, `institution`, `accountType`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Institution => "institution",
            Self::AccountType => "accountType",
        }
    }
}

impl std::fmt::Display for GroupMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GroupMode {
    type Err = UnknownMember;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "institution" => Ok(Self::Institution),
            "accounttype" | "account_type" | "account-type" => Ok(Self::AccountType),
            _ => Err(UnknownMember {
                kind: "group mode",
                value: s.to_string(),
            }),
        }
    }
}

/// One display group: its key, resolved label and member accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    /// Raw grouping value as a string, or `"all"` when ungrouped.
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Member accounts in input order.
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("none", GroupMode::None)]
    #[case("Institution", GroupMode::Institution)]
    #[case("accountType", GroupMode::AccountType)]
    #[case("account_type", GroupMode::AccountType)]
    fn test_group_mode_from_str(#[case] input: &str, #[case] expected: GroupMode) {
        assert_eq!(GroupMode::from_str(input), Ok(expected));
    }

    #[test]
    fn test_group_mode_rejects_unknown() {
        let err = GroupMode::from_str("currency").unwrap_err();
        assert_eq!(err.to_string(), "Unknown group mode: currency");
    }

    #[test]
    fn test_group_mode_serde_matches_display() {
        for mode in [GroupMode::None, GroupMode::Institution, GroupMode::AccountType] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
        }
        assert_eq!(GroupMode::default(), GroupMode::None);
    }

    #[test]
    fn test_account_deserializes_api_payload() {
        let json = r#"{
            "id": "0190f3c4-8a2b-7c3d-9e4f-5a6b7c8d9e0f",
            "name": "My TFSA",
            "external_id": "tfsa-abc123",
            "account_type_id": 1,
            "institution_id": 999,
            "currency": "CAD",
            "is_active": true,
            "created_at": "2025-11-14T18:40:44Z"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type(), Some(AccountType::Tfsa));
        assert_eq!(account.institution(), None);
        assert_eq!(account.institution_id, 999);
    }

    #[test]
    fn test_account_totals_payload() {
        let json = r#"{"cost":{"units":1500,"nanos":0,"currencyCode":"CAD"}}"#;
        let totals: AccountTotals = serde_json::from_str(json).unwrap();
        assert_eq!(totals.cost.display(), "$1,500");
    }
}
