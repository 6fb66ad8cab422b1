//! Governance proposals

use serde::Serialize;
use tracing::debug;

use super::{normalize_each, required};
use crate::config::constants::GOVERNANCE_TOKEN_DECIMALS;
use crate::errors::NormalizationError;
use crate::links;
use crate::subgraph::records::RawProposal;
use crate::timestamp::{format_date, parse_epoch};
use crate::types::tokens::{NormalizedAmount, TokenAmount, TokenDecimals};

/// A governance proposal with vote totals in whole tokens
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub aip_number: String,
    pub title: String,
    pub short_description: String,
    pub author: String,
    pub creator: String,
    pub state: String,
    pub total_current_voters: String,
    pub start_block: String,
    pub end_block: String,
    pub yes_votes: NormalizedAmount,
    pub no_votes: NormalizedAmount,
    pub created_timestamp: Option<i64>,
    pub date: String,
    pub ipfs_hash: Option<String>,
}

impl Proposal {
    /// IPFS gateway link for the proposal text, when the proposal has one
    pub fn ipfs_url(&self) -> Option<String> {
        self.ipfs_hash.as_deref().map(links::ipfs_url)
    }
}

fn votes(field: &'static str, raw: &Option<String>) -> Result<NormalizedAmount, NormalizationError> {
    TokenAmount::parse(field, required(field, raw)?)?
        .normalize(TokenDecimals::new(GOVERNANCE_TOKEN_DECIMALS))
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Normalize one proposal
///
/// Vote counts are scaled down by `10^18`; descriptive fields are copied,
/// absent ones becoming empty strings.
pub fn normalize_proposal(raw: &RawProposal) -> Result<Proposal, NormalizationError> {
    let created_timestamp = parse_epoch(raw.created_timestamp.as_deref());

    Ok(Proposal {
        id: raw.id.clone(),
        aip_number: text(&raw.aip_number),
        title: text(&raw.title),
        short_description: text(&raw.short_description),
        author: text(&raw.author),
        creator: text(&raw.creator),
        state: text(&raw.state),
        total_current_voters: text(&raw.total_current_voters),
        start_block: text(&raw.start_block),
        end_block: text(&raw.end_block),
        yes_votes: votes("currentYesVote", &raw.current_yes_vote)?,
        no_votes: votes("currentNoVote", &raw.current_no_vote)?,
        created_timestamp,
        date: format_date(created_timestamp),
        ipfs_hash: raw.ipfs_hash.clone().filter(|hash| !hash.is_empty()),
    })
}

/// Normalize every proposal, newest first as fetched
pub fn normalize_proposals(raw: &[RawProposal]) -> Vec<Proposal> {
    let proposals = normalize_each("proposals", raw, |r| r.id.as_str(), normalize_proposal);
    debug!(
        fetched = raw.len(),
        normalized = proposals.len(),
        "Normalized proposals"
    );
    proposals
}
