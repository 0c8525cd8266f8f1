//! Accounts and how they are grouped for display.
//!
//! - `enums` - Institution and account type tables
//! - `types` - Account, totals, group modes and descriptors
//! - `labels` - Label resolution strategies
//! - `service` - The account grouping service
//! - `source` - Seam for whatever fetches the account list

pub mod enums;
pub mod labels;
pub mod service;
pub mod source;
pub mod types;


pub use enums::{AccountType, Institution, UnknownMember};
pub use labels::{DEFAULT_UNKNOWN_LABEL, LabelDomain, LabelResolver, LabelStrategy, TranslateFn};
pub use service::{ALL_KEY, AccountGroupingService};
pub use source::{AccountSource, StaticAccountSource};
pub use types::{Account, AccountTotals, GroupDescriptor, GroupMode};
