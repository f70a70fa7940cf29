//! Human-readable rendering of the generating equations.
//!
//! Numbers use the shortest round-trip representation (`2.0`, `-0.5`).
//! Magnitudes below `1e-4` or from `1e16` up switch to exponent form with a
//! signed, at least two-digit exponent (`1e-05`, `1.5e+16`). Coefficients
//! always carry an explicit sign.

/// `AR model: y[t] = c +o1y[t-1] ... + e[t]`
pub fn ar_formula(constant: f64, coefficients: &[f64]) -> String {
    format!(
        "AR model: y[t] = {} {} + e[t]",
        number(constant),
        lag_terms(coefficients, "y")
    )
}

/// `MA model: y[t] = c +e[t] +o1e[t-1] ...`
pub fn ma_formula(constant: f64, coefficients: &[f64]) -> String {
    format!(
        "MA model: y[t] = {} +e[t] {}",
        number(constant),
        lag_terms(coefficients, "e")
    )
}

fn lag_terms(coefficients: &[f64], symbol: &str) -> String {
    coefficients
        .iter()
        .enumerate()
        .map(|(i, &o)| format!("{}{}[t-{}]", signed(o), symbol, i + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

fn number(x: f64) -> String {
    let repr = format!("{x:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

fn signed(x: f64) -> String {
    if x.is_sign_negative() {
        number(x)
    } else {
        format!("+{}", number(x))
    }
}
