//! printf-style `%g` number formatting for extent labels.
//!
//! `format!` has no general-format specifier, so this mirrors C's `%g`:
//! `precision` significant digits, scientific notation when the decimal
//! exponent is below -4 or at least `precision`, trailing zeros removed.

/// Format `value` like `%+.{precision}g` (or `%.{precision}g` without `plus`).
#[must_use]
pub fn format_g(value: f64, precision: usize, plus: bool) -> String {
    let p = precision.max(1);
    let sign = if value.is_sign_negative() {
        "-"
    } else if plus {
        "+"
    } else {
        ""
    };
    let magnitude = value.abs();

    if magnitude == 0.0 {
        return format!("{sign}0");
    }

    // Round to `p` significant digits first: the exponent can shift (9.99 -> 1e1).
    let sci = format!("{:.*e}", p - 1, magnitude);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{sign}{magnitude}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    let precision_exp = i32::try_from(p).unwrap_or(i32::MAX);
    if exp < -4 || exp >= precision_exp {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{sign}{}e{exp_sign}{:02}",
            strip_zeros(mantissa),
            exp.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(precision_exp - 1 - exp).unwrap_or(0);
        let fixed = format!("{magnitude:.decimals$}");
        format!("{sign}{}", strip_zeros(&fixed))
    }
}

#[inline]
fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
