//! GraphQL documents sent to the subgraphs
//!
//! Ordering is requested from the backend: reserves by total liquidity,
//! activity by timestamp, proposals by creation time and users by lifetime
//! rewards, all descending.

/// Reserve metrics, sent to the lending subgraph
pub const RESERVES: &str = r#"
{
  reserves(orderBy: totalLiquidity, orderDirection: desc) {
    id
    name
    decimals
    symbol
    liquidityRate
    variableBorrowRate
    stableBorrowRate
    totalDeposits
    totalLiquidity
    averageStableRate
    utilizationRate
    price {
      priceInEth
      oracle {
        usdPriceEth
      }
    }
  }
}
"#;

/// Protocol activity and top reward users, sent to the lending subgraph
pub const ACTIVITY: &str = r#"
{
  deposits(orderBy: timestamp, orderDirection: desc) {
    id
    amount
    timestamp
    reserve { id name symbol decimals }
  }
  borrows(orderBy: timestamp, orderDirection: desc) {
    id
    amount
    timestamp
    reserve { id name symbol decimals }
  }
  flashLoans(orderBy: timestamp, orderDirection: desc) {
    id
    reserve { id name symbol decimals }
    amount
    totalFee
    timestamp
  }
  liquidationCalls(orderBy: timestamp, orderDirection: desc) {
    id
    timestamp
    collateralReserve { id name symbol decimals }
    principalReserve { id name symbol decimals }
    collateralAmount
    principalAmount
  }
  swaps(orderBy: timestamp, orderDirection: desc) {
    id
    reserve { id name symbol decimals }
    borrowRateModeFrom
    borrowRateModeTo
    stableBorrowRate
    variableBorrowRate
    timestamp
  }
  redeemUnderlyings(orderBy: timestamp, orderDirection: desc) {
    id
    amount
    timestamp
    reserve { id name symbol decimals }
  }
  repays(orderBy: timestamp, orderDirection: desc) {
    id
    amount
    timestamp
    reserve { id name symbol decimals }
  }
  usageAsCollaterals(orderBy: timestamp, orderDirection: desc) {
    id
    timestamp
    reserve { id name symbol decimals }
    fromState
    toState
  }
  users(orderBy: lifetimeRewards, orderDirection: desc) {
    id
    lifetimeRewards
  }
  swapHistories {
    id
    fromAsset
    toAsset
    fromAmount
    receivedAmount
    swapType
  }
}
"#;

/// Governance proposals, sent to the governance subgraph
pub const PROPOSALS: &str = r#"
{
  proposals(orderBy: createdTimestamp, orderDirection: desc) {
    id
    state
    ipfsHash
    creator
    totalCurrentVoters
    startBlock
    endBlock
    currentYesVote
    currentNoVote
    createdTimestamp
    title
    shortDescription
    author
    aipNumber
  }
}
"#;
