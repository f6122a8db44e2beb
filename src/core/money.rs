use rust_decimal::Decimal;

/// Decimal places kept for every monetary amount
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary amount to the cent.
///
/// Uses `round_dp`'s half-even (banker's) rounding so repeated percent
/// calculations do not drift upward.
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_SCALE)
}

/// Validates that an amount is usable as money: non-negative and at most
/// two decimal places.
pub fn validate_amount(amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err("amount cannot be negative".to_string());
    }

    if amount.scale() > MONEY_SCALE {
        return Err(format!(
            "amounts must have at most {} decimal places, got {}",
            MONEY_SCALE,
            amount.scale()
        ));
    }

    Ok(())
}
