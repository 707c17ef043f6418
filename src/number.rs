//! Integer and float rendering, including whole-number collapse.

/// Shortest decimal representation of a signed 64-bit integer. Rust's own
/// `i64::to_string` already produces this (no leading zeros, `-` only for
/// negatives, `"0"` for zero), so there is nothing to add here beyond a
/// named entry point matching the other formatters.
pub fn format_int(n: i64) -> String {
    n.to_string()
}

/// Renders a float per the whole-number collapse rule: values equal to
/// their floor with magnitude below `1e15` render as the corresponding
/// integer; everything else renders at up to 15 significant digits
/// (`%.15g`-equivalent). `-0.0` normalizes to `0`.
pub fn format_float(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return format_non_finite(x);
    }
    if x == x.floor() && x.abs() < 1e15 {
        return format_int(x as i64);
    }
    format_g15(x)
}

fn format_non_finite(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

/// `%.15g`-equivalent rendering: up to 15 significant digits, trailing
/// zeros trimmed, fixed notation unless the decimal exponent falls outside
/// `[-4, 15)`, matching C's `%g` style-selection rule.
fn format_g15(x: f64) -> String {
    let neg = x.is_sign_negative();
    let ax = x.abs();

    let sci = format!("{:.14e}", ax);
    let (mantissa, exp_str) = sci.split_once('e').expect("scientific format always has 'e'");
    let exp: i32 = exp_str.parse().expect("exponent is always a valid integer");

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut out = String::new();
    if neg {
        out.push('-');
    }

    if exp < -4 || exp >= 15 {
        out.push(digits.as_bytes()[0] as char);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        if exp >= 0 {
            out.push('+');
        }
        out.push_str(&exp.to_string());
    } else if exp >= 0 {
        let int_len = (exp + 1) as usize;
        if digits.len() <= int_len {
            out.push_str(digits);
            out.push_str(&"0".repeat(int_len - digits.len()));
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    } else {
        out.push_str("0.");
        out.push_str(&"0".repeat((-exp - 1) as usize));
        out.push_str(digits);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_has_no_leading_zeros() {
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(-123), "-123");
        assert_eq!(format_int(42), "42");
    }

    #[test]
    fn whole_number_floats_collapse_to_int_form() {
        assert_eq!(format_float(42.0), "42");
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(-0.0), "0");
        assert_eq!(format_float(-7.0), "-7");
    }

    #[test]
    fn large_whole_numbers_stay_uncollapsed_at_threshold() {
        // 1e15 itself is not < 1e15, so it falls through to %.15g form.
        assert_eq!(format_float(1e15), "1e+15");
        assert_eq!(format_float(999_999_999_999_999.0), "999999999999999");
    }

    #[test]
    fn fractional_floats_render_shortest_form() {
        assert!(format_float(3.14).starts_with("3.14"));
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(-0.25), "-0.25");
    }

    #[test]
    fn very_small_and_large_use_scientific_notation() {
        assert!(format_float(1.5e-10).contains('e'));
        assert!(format_float(1.5e20).contains('e'));
    }
}
