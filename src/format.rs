use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// currency rendering, `$#,##0.00` by default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub group_size: usize,
    pub fraction_digits: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            grouping_separator: ',',
            decimal_separator: '.',
            group_size: 3,
            fraction_digits: 2,
        }
    }
}

impl CurrencyFormat {
    /// format an amount, rounding halves away from zero
    pub fn format(&self, amount: Money) -> String {
        let rounded = amount.round_dp(self.fraction_digits);
        let digits = format!(
            "{:.*}",
            self.fraction_digits as usize,
            rounded.abs().as_decimal()
        );

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 8);
        if rounded.is_negative() {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&self.group(whole));
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    fn group(&self, whole: &str) -> String {
        if self.group_size == 0 {
            return whole.to_string();
        }

        let len = whole.len();
        let mut grouped = String::with_capacity(len + len / self.group_size);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (len - i) % self.group_size == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}
