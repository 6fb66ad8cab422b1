//! Snapshot presentation
//!
//! [`text`] prints one section per non-empty slice, in a fixed order;
//! [`json`] serializes the whole snapshot.

use crate::config::constants::REWARD_SYMBOL;
use crate::dashboard::DashboardSnapshot;
use crate::normalize::{
    ActivityFeed, CollateralChange, FlashLoan, Liquidation, MarketOverview, Proposal, RateSwap,
    Reserve, ReserveEvent, RewardUser, SwapHistoryEntry,
};
use crate::types::tokens::TokenAmount;

struct Section {
    title: &'static str,
    lines: Vec<String>,
}

impl Section {
    fn new<T>(title: &'static str, items: &[T], line: impl Fn(&T) -> String) -> Self {
        Self {
            title,
            lines: items.iter().map(line).collect(),
        }
    }

    fn render(&self) -> String {
        let mut out = String::from(self.title);
        for line in &self.lines {
            out.push_str("\n  ");
            out.push_str(line);
        }
        out
    }
}

fn reserve_line(reserve: &Reserve) -> String {
    format!(
        "{} ({}) | liquidity {:.6}M {} | {}M | supply {:.6}% | variable borrow {:.6}% | stable borrow {:.6}% | utilization {:.6}%",
        reserve.symbol,
        reserve.name,
        reserve.native_liquidity_millions,
        reserve.symbol,
        reserve.usd_liquidity_millions.format(6),
        reserve.liquidity_rate_pct,
        reserve.variable_borrow_rate_pct,
        reserve.stable_borrow_rate_pct,
        reserve.utilization_pct,
    )
}

fn flash_loan_line(loan: &FlashLoan) -> String {
    format!(
        "{} | {} {} | fee {} {} | {}",
        loan.date,
        loan.amount,
        loan.reserve.symbol,
        loan.total_fee,
        loan.reserve.symbol,
        loan.tx_url()
    )
}

fn reserve_event_line(event: &ReserveEvent) -> String {
    format!(
        "{} | {} {} | {}",
        event.date,
        event.amount,
        event.reserve.symbol,
        event.tx_url()
    )
}

fn liquidation_line(liquidation: &Liquidation) -> String {
    format!(
        "{} | collateral {} {} | principal {} {} | {}",
        liquidation.date,
        liquidation.collateral_amount,
        liquidation.collateral_reserve.symbol,
        liquidation.principal_amount,
        liquidation.principal_reserve.symbol,
        liquidation.tx_url()
    )
}

fn rate_swap_line(swap: &RateSwap) -> String {
    format!(
        "{} | {} {} -> {} | stable {:.6}% | variable {:.6}% | {}",
        swap.date,
        swap.reserve.symbol,
        swap.rate_mode_from,
        swap.rate_mode_to,
        swap.stable_borrow_rate_pct,
        swap.variable_borrow_rate_pct,
        swap.tx_url()
    )
}

fn collateral_line(change: &CollateralChange) -> String {
    format!(
        "{} | {} {} -> {} | {}",
        change.date,
        change.reserve.symbol,
        change.from_state,
        change.to_state,
        change.tx_url()
    )
}

fn swap_history_line(entry: &SwapHistoryEntry) -> String {
    let amount = |value: Option<TokenAmount>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
    format!(
        "{} | {} -> {} | {} -> {} | {}",
        entry.swap_type,
        entry.from_asset,
        entry.to_asset,
        amount(entry.from_amount),
        amount(entry.received_amount),
        entry.tx_url()
    )
}

fn proposal_line(proposal: &Proposal) -> String {
    let mut line = format!(
        "AIP-{} {} | {} | by {} ({}) | {} ({} voters) | blocks {}-{} | yes {} | no {} | {}",
        proposal.aip_number,
        proposal.title,
        proposal.short_description,
        proposal.author,
        proposal.creator,
        proposal.state,
        proposal.total_current_voters,
        proposal.start_block,
        proposal.end_block,
        proposal.yes_votes,
        proposal.no_votes,
        proposal.date
    );
    if let Some(url) = proposal.ipfs_url() {
        line.push_str(" | ");
        line.push_str(&url);
    }
    line
}

fn reward_user_line(user: &RewardUser) -> String {
    format!(
        "{} | {} {} | {}",
        user.id,
        user.lifetime_rewards,
        REWARD_SYMBOL,
        user.address_url()
    )
}

fn market_sections(markets: &MarketOverview) -> Vec<Section> {
    if markets.is_empty() {
        return Vec::new();
    }
    vec![
        Section {
            title: "Market Size",
            lines: vec![format!("{}B", markets.total_market_size_billions.format(6))],
        },
        Section::new("Reserves", &markets.reserves, reserve_line),
    ]
}

fn activity_sections(feed: &ActivityFeed) -> Vec<Section> {
    vec![
        Section::new("Recent Flash Loans", &feed.flash_loans, flash_loan_line),
        Section::new("Recent Deposits", &feed.deposits, reserve_event_line),
        Section::new("Recent Borrow", &feed.borrows, reserve_event_line),
        Section::new("Recent Liquidations", &feed.liquidations, liquidation_line),
        Section::new("Recent Rate Swap", &feed.rate_swaps, rate_swap_line),
        Section::new("Recent Redeem", &feed.redeems, reserve_event_line),
        Section::new("Recent Repay", &feed.repays, reserve_event_line),
        Section::new(
            "Recent Collateral Status Change",
            &feed.collateral_changes,
            collateral_line,
        ),
        Section::new("Recent Swap History", &feed.swap_histories, swap_history_line),
    ]
}

/// Render a snapshot as plain-text sections
///
/// Sections appear in dashboard order; a section with nothing to show is
/// left out entirely, as is every section of a slice whose query failed.
pub fn text(snapshot: &DashboardSnapshot) -> String {
    let mut sections = Vec::new();

    if let Some(markets) = &snapshot.markets {
        sections.extend(market_sections(markets));
    }
    if let Some(feed) = &snapshot.activity {
        sections.extend(activity_sections(feed));
    }
    if let Some(proposals) = &snapshot.governance {
        sections.push(Section::new("Governance Proposals", proposals, proposal_line));
    }
    if let Some(feed) = &snapshot.activity {
        sections.push(Section::new(
            "Most Rewarded Users",
            &feed.reward_users,
            reward_user_line,
        ));
    }

    sections
        .iter()
        .filter(|section| !section.lines.is_empty())
        .map(Section::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render a snapshot as pretty-printed JSON
pub fn json(snapshot: &DashboardSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}
