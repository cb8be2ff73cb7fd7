//! Canonical snapshot field names.
//!
//! Calculation failures name the offending field with these strings, so they
//! are part of the persisted error records and must stay stable.

// Financial statement snapshot
pub const TOTAL_CURRENT_ASSETS: &str = "totalCurrentAssets";
pub const TOTAL_CURRENT_LIABILITIES: &str = "totalCurrentLiabilities";
pub const TOTAL_ASSETS: &str = "totalAssets";
pub const TOTAL_LIABILITIES: &str = "totalLiabilities";
pub const RETAINED_EARNINGS: &str = "retainedEarnings";
pub const EBIT: &str = "ebit";
pub const INTEREST_EXPENSE: &str = "interestExpense";
pub const TOTAL_SHAREHOLDER_EQUITY: &str = "totalShareholderEquity";
pub const INVENTORY: &str = "inventory";
pub const TOTAL_REVENUE: &str = "totalRevenue";
pub const TOTAL_DEBT: &str = "totalDebt";
pub const NET_INCOME: &str = "netIncome";
pub const OPERATING_CASH_FLOW: &str = "operatingCashFlow";

// Market data snapshot
pub const CURRENT_PRICE: &str = "currentPrice";
pub const MARKET_CAP: &str = "marketCap";
pub const REVENUE_TTM: &str = "revenueTTM";
pub const FORWARD_PE_RATIO: &str = "forwardPeRatio";
pub const TARGET_PRICE: &str = "targetPrice";
pub const FORWARD_EPS_GROWTH: &str = "forwardEpsGrowth";
pub const FORWARD_REVENUE_GROWTH: &str = "forwardRevenueGrowth";
pub const ANALYST_RATINGS: &str = "analystRatings";
