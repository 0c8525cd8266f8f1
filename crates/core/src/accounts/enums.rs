//! Institution and account type enumerations.
//!
//! Both are append-only: a member's numeric id never changes, new members
//! only get new ids. Accounts store the raw id so values this build does
//! not know about still load.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Error returned when a string names no known member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownMember {
    /// Enumeration name.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Generates a numeric enumeration with an explicit label table.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $id:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in id order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Stable numeric id.
            #[must_use]
            pub const fn id(self) -> u32 {
                match self {
                    $( Self::$variant => $id, )+
                }
            }

            /// Looks up a member by numeric id.
            #[must_use]
            pub const fn from_id(id: u32) -> Option<Self> {
                match id {
                    $( $id => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Canonical English display name.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownMember;

            /// Accepts the display label or the member name, ignoring case.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| {
                        member.label().eq_ignore_ascii_case(wanted)
                            || member.name().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| UnknownMember {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl $name {
            const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u32(self.id())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let id = u32::deserialize(deserializer)?;
                Self::from_id(id).ok_or_else(|| {
                    de::Error::custom(format!("unknown {} id {}", $kind, id))
                })
            }
        }
    };
}

labelled_enum! {
    /// Registered and non-registered Canadian account types.
    AccountType, "account type" {
        /// Tax-Free Savings Account.
        Tfsa = 1 => "TFSA",
        /// Registered Retirement Savings Plan.
        Rrsp = 2 => "RRSP",
        /// First Home Savings Account.
        Fhsa = 3 => "FHSA",
        /// Taxable account.
        NonRegistered = 4 => "Non-Registered",
    }
}

labelled_enum! {
    /// Brokerages an account can be held at.
    Institution, "institution" {
        /// Wealthsimple.
        Wealthsimple = 1 => "Wealthsimple",
        /// Questrade.
        Questrade = 2 => "Questrade",
    }
}
