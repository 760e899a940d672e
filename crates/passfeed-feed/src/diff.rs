//! # Diff Engine
//!
//! Turns a catalog and a requester email into the folder actions for one
//! poll. Matching is exact: no case folding, no trimming.

use std::collections::BTreeMap;

use passfeed_core::{Catalog, Category, CredentialRecord};
use passfeed_vc::TicketCredential;

use crate::action::FeedAction;

/// Every category holding at least one record for `email`, with those
/// records in catalog order.
pub fn records_for_requester<'a>(
    catalog: &'a Catalog,
    email: &str,
) -> BTreeMap<Category, Vec<&'a CredentialRecord>> {
    catalog
        .iter()
        .filter_map(|(category, records)| {
            let matching: Vec<_> = records
                .iter()
                .filter(|r| r.attendee_email == email)
                .collect();
            (!matching.is_empty()).then(|| (category.clone(), matching))
        })
        .collect()
}

/// Build the poll response for `email`.
///
/// Each matching category yields `DeleteFolder` immediately followed by
/// `ReplaceInFolder` with one credential per matching record, produced by
/// `issue`. The first issuance error aborts.
pub fn compute_actions<E>(
    catalog: &Catalog,
    email: &str,
    mut issue: impl FnMut(&CredentialRecord) -> Result<TicketCredential, E>,
) -> Result<Vec<FeedAction>, E> {
    let matches = records_for_requester(catalog, email);
    let mut actions = Vec::with_capacity(matches.len() * 2);
    for (folder, records) in matches {
        let pcds = records
            .into_iter()
            .map(&mut issue)
            .collect::<Result<Vec<_>, E>>()?;
        actions.push(FeedAction::delete_folder(folder.clone()));
        actions.push(FeedAction::ReplaceInFolder { folder, pcds });
    }
    Ok(actions)
}
