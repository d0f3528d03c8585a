// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::{Proposal, Requirement};

pub const MIN_QUANTITY: i64 = 1;
pub const MAX_QUANTITY: i64 = 99;

pub fn discount_amount(price: f64, percent: f64) -> f64 {
    price * percent / 100.0
}

pub fn final_price(price: f64, percent: f64) -> f64 {
    price - discount_amount(price, percent)
}

/// Proposal pricing as shown under the proposal form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub gross: f64,
    pub discount: f64,
    pub total: f64,
}

impl Proposal {
    /// Quantity times unit price, less the proposal discount. Missing
    /// quantity or price count as zero.
    pub fn price_breakdown(&self) -> PriceBreakdown {
        let quantity = self.quantity.unwrap_or(0) as f64;
        let gross = quantity * self.price.unwrap_or(0.0);
        PriceBreakdown {
            gross,
            discount: discount_amount(gross, self.discount),
            total: final_price(gross, self.discount),
        }
    }

    pub fn add_requirement(&mut self, requirement: Requirement) -> Result<()> {
        if requirement.family.trim().is_empty() || requirement.sub_family.trim().is_empty() {
            bail!("requirement family and sub-family are required -- choose both and retry");
        }
        if requirement.quantity == 0 {
            bail!("requirement quantity must be positive");
        }
        self.requirements.push(requirement);
        Ok(())
    }

    pub fn remove_requirement(&mut self, index: usize) -> Option<Requirement> {
        (index < self.requirements.len()).then(|| self.requirements.remove(index))
    }

    pub fn required_units(&self) -> u32 {
        self.requirements
            .iter()
            .map(|requirement| requirement.quantity)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{discount_amount, final_price};
    use crate::{Proposal, Requirement};

    #[test]
    fn discount_on_list_price() {
        assert_eq!(discount_amount(999.0, 10.0), 99.9);
        assert_eq!(final_price(999.0, 0.0), 999.0);
        assert_eq!(final_price(200.0, 25.0), 150.0);
    }

    #[test]
    fn breakdown_applies_discount_to_quantity_total() {
        let proposal = Proposal {
            name: "Proposal 2".to_owned(),
            quantity: Some(2),
            price: Some(1600.0),
            discount: 10.0,
            ..Proposal::default()
        };
        let breakdown = proposal.price_breakdown();
        assert_eq!(breakdown.gross, 3200.0);
        assert_eq!(breakdown.discount, 320.0);
        assert_eq!(breakdown.total, 2880.0);
    }

    #[test]
    fn requirements_can_be_added_and_removed() {
        let mut proposal = Proposal::default();
        proposal
            .add_requirement(Requirement {
                family: "Living Room".to_owned(),
                sub_family: "Seating".to_owned(),
                quantity: 2,
            })
            .expect("valid requirement");
        proposal
            .add_requirement(Requirement {
                family: "Bedroom".to_owned(),
                sub_family: "Beds".to_owned(),
                quantity: 3,
            })
            .expect("valid requirement");
        assert_eq!(proposal.required_units(), 5);

        let removed = proposal.remove_requirement(0).expect("first requirement");
        assert_eq!(removed.sub_family, "Seating");
        assert_eq!(proposal.remove_requirement(5), None);
        assert_eq!(proposal.required_units(), 3);

        assert!(
            proposal
                .add_requirement(Requirement {
                    family: String::new(),
                    sub_family: "Beds".to_owned(),
                    quantity: 1,
                })
                .is_err()
        );
    }
}
