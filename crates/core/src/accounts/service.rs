//! Account grouping service.

use std::future::Future;

use folio_shared::AppResult;
use tracing::{debug, warn};

use super::labels::{LabelDomain, LabelResolver};
use super::source::AccountSource;
use super::types::{Account, GroupDescriptor, GroupMode};
use crate::grouping::group_by;

/// Key of the single descriptor produced by [`GroupMode::None`].
pub const ALL_KEY: &str = "all";

/// Partitions account lists into labelled display groups.
#[derive(Debug, Clone, Default)]
pub struct AccountGroupingService {
    resolver: LabelResolver,
}

impl AccountGroupingService {
    /// Creates a service that labels groups with `resolver`.
    #[must_use]
    pub const fn new(resolver: LabelResolver) -> Self {
        Self { resolver }
    }

    /// The resolver used for group labels.
    #[must_use]
    pub const fn resolver(&self) -> &LabelResolver {
        &self.resolver
    }

    /// Groups an already-materialised account list.
    ///
    /// Descriptors come out in first-occurrence order of their key and
    /// every account lands in exactly one of them. Each label is resolved
    /// once, for the first account carrying that key.
    #[must_use]
    pub fn group(&self, accounts: Vec<Account>, mode: GroupMode) -> Vec<GroupDescriptor> {
        let total = accounts.len();

        let domain = match mode {
            GroupMode::None => {
                debug!(mode = %mode, accounts = total, "Accounts left ungrouped");
                return vec![GroupDescriptor {
                    key: ALL_KEY.to_string(),
                    label: String::new(),
                    accounts,
                }];
            }
            GroupMode::Institution => LabelDomain::Institution,
            GroupMode::AccountType => LabelDomain::AccountType,
        };

        let groups = group_by(accounts, |account| match domain {
            LabelDomain::Institution => account.institution_id,
            LabelDomain::AccountType => account.account_type_id,
        });

        let descriptors: Vec<GroupDescriptor> = groups
            .into_iter()
            .map(|(id, accounts)| GroupDescriptor {
                key: id.to_string(),
                label: self.resolver.resolve(domain, id),
                accounts,
            })
            .collect();

        debug!(
            mode = %mode,
            strategy = ?self.resolver.strategy(),
            accounts = total,
            groups = descriptors.len(),
            "Grouped accounts"
        );
        descriptors
    }

    /// Awaits a pending account list, then groups it.
    ///
    /// A failed list is returned as-is and nothing is grouped.
    pub async fn group_accounts<F, E>(
        &self,
        accounts: F,
        mode: GroupMode,
    ) -> Result<Vec<GroupDescriptor>, E>
    where
        F: Future<Output = Result<Vec<Account>, E>>,
        E: std::fmt::Display,
    {
        let accounts = accounts.await.inspect_err(|err| {
            warn!(mode = %mode, error = %err, "Account list failed to load");
        })?;
        Ok(self.group(accounts, mode))
    }

    /// Fetches accounts from `source`, then groups them.
    pub async fn group_from_source<S>(
        &self,
        source: &S,
        mode: GroupMode,
    ) -> AppResult<Vec<GroupDescriptor>>
    where
        S: AccountSource + ?Sized,
    {
        self.group_accounts(source.accounts(), mode).await
    }
}
