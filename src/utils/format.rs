use ethers::types::U256;

/// Balances at or below this many display units are dust and never shown.
pub const DUST_THRESHOLD: f64 = 1e-6;

/// Render an integer amount of smallest units as a decimal string, keeping
/// every significant digit. Trailing zeros and a bare decimal point are
/// trimmed, so `2500000000000000000` with 18 decimals becomes `"2.5"`.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let decimals = decimals as usize;
    let mut amount_str = amount.to_string();

    if decimals == 0 {
        return amount_str;
    }

    if amount_str.len() <= decimals {
        amount_str.insert_str(0, &"0".repeat(decimals - amount_str.len() + 1));
    }

    let point = amount_str.len() - decimals;
    amount_str.insert(point, '.');

    let trimmed = amount_str.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Display-unit value of an integer amount as a float.
pub fn to_display(amount: U256, decimals: u8) -> f64 {
    format_units(amount, decimals).parse().unwrap_or(0.0)
}

pub fn fixed(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

pub fn is_dust(balance: f64) -> bool {
    !(balance > DUST_THRESHOLD)
}
