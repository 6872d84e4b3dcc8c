//! Display formatting for balances and addresses.

const PRECISION: usize = 4;

/// Shorten a balance for display: 4 significant digits below 1, 4 decimal
/// places otherwise, trailing zeros stripped by round-tripping through
/// numeric parsing. Input that does not parse as a number passes through
/// unchanged.
pub fn format_quantity_short(quantity: &str) -> String {
    let Ok(value) = quantity.trim().parse::<f64>() else {
        return quantity.to_owned();
    };
    if !value.is_finite() {
        return quantity.to_owned();
    }

    let fixed = if value.abs() < 1.0 {
        to_significant(value, PRECISION)
    } else {
        format!("{value:.PRECISION$}")
    };
    strip_trailing_zeroes(&fixed)
}

/// Fixed-point rendering with `digits` significant digits, for |value| < 1.
fn to_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        let decimals = digits - 1;
        return format!("{value:.decimals$}");
    }
    let exponent = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - exponent).max(0) as usize;
    format!("{value:.decimals$}")
}

fn strip_trailing_zeroes(fixed: &str) -> String {
    match fixed.parse::<f64>() {
        Ok(value) => format!("{value}"),
        Err(_) => fixed.to_owned(),
    }
}

/// Shorten an address as `0x111...c302`. An absent address renders `"..."`.
pub fn shorten_address(address: Option<&str>) -> String {
    match address {
        Some(address) if address.len() > PRECISION + 5 => {
            format!("{}...{}", &address[..5], &address[address.len() - 4..])
        }
        Some(address) => address.to_owned(),
        None => "...".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_magnitudes_get_four_significant_digits() {
        assert_eq!(format_quantity_short("0.000123456"), "0.0001235");
        assert_eq!(format_quantity_short("0.5"), "0.5");
        assert_eq!(format_quantity_short("0.123449"), "0.1234");
    }

    #[test]
    fn larger_magnitudes_get_four_decimal_places() {
        assert_eq!(format_quantity_short("1234.56789"), "1234.5679");
        assert_eq!(format_quantity_short("42"), "42");
    }

    #[test]
    fn trailing_zeros_are_stripped() {
        assert_eq!(format_quantity_short("1.1"), "1.1");
        assert_eq!(format_quantity_short("2.5000"), "2.5");
        assert_eq!(format_quantity_short("0"), "0");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_quantity_short("-1234.56789"), "-1234.5679");
    }

    #[test]
    fn non_numeric_input_passes_through() {
        assert_eq!(format_quantity_short("n/a"), "n/a");
        assert_eq!(format_quantity_short(""), "");
    }

    #[test]
    fn addresses_shorten_to_five_plus_four() {
        assert_eq!(
            shorten_address(Some("0xdAC17F958D2ee523a2206206994597C13D831ec7")),
            "0xdAC...1ec7"
        );
    }

    #[test]
    fn absent_addresses_render_dots() {
        assert_eq!(shorten_address(None), "...");
    }

    #[test]
    fn short_inputs_are_left_alone() {
        assert_eq!(shorten_address(Some("0xabc")), "0xabc");
    }
}
