use serde::{Deserialize, Serialize};

/// Checkout discounts applied on top of resolved recipe prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountPolicy {
    pub first_box_percent: u8,
    pub additional_dog_percent: u8,
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self {
            first_box_percent: 50,
            additional_dog_percent: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountKind {
    AdditionalDog { dog: String },
    FirstBox,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountLine {
    #[serde(flatten)]
    pub kind: DiscountKind,
    pub percent: u8,
    pub amount_cents: u64,
}

/// `percent` of `cents`, rounded half-up to the nearest cent.
pub fn percent_of(cents: u64, percent: u8) -> u64 {
    (cents * u64::from(percent) + 50) / 100
}

/// Discounts for one delivery. Every dog after the first gets the multi-dog rate;
/// the first-box rate then applies to whatever remains.
pub fn apply_discounts(
    policy: &DiscountPolicy,
    dog_subtotals: &[(String, u64)],
    first_box: bool,
) -> Vec<DiscountLine> {
    let mut lines = Vec::new();

    if policy.additional_dog_percent > 0 {
        for (dog, subtotal) in dog_subtotals.iter().skip(1) {
            let amount_cents = percent_of(*subtotal, policy.additional_dog_percent);
            if amount_cents > 0 {
                lines.push(DiscountLine {
                    kind: DiscountKind::AdditionalDog { dog: dog.clone() },
                    percent: policy.additional_dog_percent,
                    amount_cents,
                });
            }
        }
    }

    if first_box && policy.first_box_percent > 0 {
        let subtotal: u64 = dog_subtotals.iter().map(|(_, cents)| cents).sum();
        let already: u64 = lines.iter().map(|line| line.amount_cents).sum();
        let remaining = subtotal.saturating_sub(already);
        lines.push(DiscountLine {
            kind: DiscountKind::FirstBox,
            percent: policy.first_box_percent,
            amount_cents: percent_of(remaining, policy.first_box_percent),
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent_of(1005, 10), 101);
        assert_eq!(percent_of(1004, 10), 100);
        assert_eq!(percent_of(999, 50), 500);
    }

    #[test]
    fn single_dog_without_first_box_has_no_discounts() {
        let lines = apply_discounts(
            &DiscountPolicy::default(),
            &[("Rex".to_string(), 12_000)],
            false,
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn first_box_applies_after_multi_dog_discount() {
        let lines = apply_discounts(
            &DiscountPolicy::default(),
            &[("Rex".to_string(), 10_000), ("Lulu".to_string(), 6_000)],
            true,
        );

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].kind,
            DiscountKind::AdditionalDog {
                dog: "Lulu".to_string()
            }
        );
        assert_eq!(lines[0].amount_cents, 600);
        assert_eq!(lines[1].kind, DiscountKind::FirstBox);
        assert_eq!(lines[1].amount_cents, (16_000 - 600) / 2);
    }
}
