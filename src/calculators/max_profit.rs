use super::Calculator;
use crate::error::CalcError;

#[derive(Debug, Default, Clone, Copy)]
pub struct MaxProfit;

impl Calculator for MaxProfit {
    type Output = i64;

    fn name(&self) -> &'static str {
        "max_profit"
    }

    fn compute(&self, values: &[i32]) -> Result<i64, CalcError> {
        max_profit(values)
    }
}

/// Best `prices[sell] - prices[buy]` with `buy < sell`, or 0 if no trade gains.
///
/// Single pass: the profit at each index is checked against the lowest
/// price seen strictly before it, and only then is the running minimum
/// updated.
///
/// # Errors
///
/// Returns [`CalcError::EmptyPrices`] for an empty sequence.
pub fn max_profit(prices: &[i32]) -> Result<i64, CalcError> {
    let (&first, rest) = prices.split_first().ok_or(CalcError::EmptyPrices)?;

    let mut min_price = i64::from(first);
    let mut best = 0i64;

    for &price in rest {
        let price = i64::from(price);
        let profit = price - min_price;
        if profit > best {
            best = profit;
        }
        if price < min_price {
            min_price = price;
        }
    }

    Ok(best)
}
