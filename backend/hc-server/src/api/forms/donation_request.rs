use crate::views::form_options::{CUSTOM_AMOUNT, DEFAULT_DONATION};

use serde::Deserialize;

/// Donation form. `amount` is a preset value or `"custom"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonationRequest {
    pub name: String,
    pub email: String,
    pub amount: String,
    pub custom_amount: String,
    pub anonymous: bool,
}

impl Default for DonationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            amount: DEFAULT_DONATION.to_string(),
            custom_amount: String::new(),
            anonymous: false,
        }
    }
}

impl DonationRequest {
    /// The field the final amount is read from.
    pub fn amount_field(&self) -> &'static str {
        if self.amount == CUSTOM_AMOUNT {
            "customAmount"
        } else {
            "amount"
        }
    }

    /// Positive amount in pesos, or `None` when missing, malformed or zero.
    pub fn final_amount(&self) -> Option<u64> {
        let raw = if self.amount == CUSTOM_AMOUNT {
            &self.custom_amount
        } else {
            &self.amount
        };

        raw.trim().parse::<u64>().ok().filter(|amount| *amount > 0)
    }
}
