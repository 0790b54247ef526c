use crate::scientific_computing::curve::Coefficients;

// enough fraction digits to print any f64 exactly
const EXACT_FRACTION_DIGITS:usize = 1074;

/// Rounds `value` to `decimals` places and drops trailing zeros,
/// so `2.500` prints as `2.5` and `2.000` as `2`. NaN prints as `0`.
///
/// Halfway cases round away from zero (`2.5` -> `3`, `0.125` -> `0.13`),
/// judged on the exact binary value, so `1.005` stays `1` at two places.
pub fn format_number(value:f64,decimals:usize) -> String {
    if value.is_nan() {
        return "0".to_string()
    }
    if value.is_infinite() {
        return format!("{value}")
    }
    let mut text = round_half_away(value.abs(), decimals);
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    // a value that rounds to zero loses its sign
    if value < 0.0 && text != "0" {
        text.insert(0, '-');
    }
    text
}

// magnitude rounded to `decimals` places, the first dropped digit decides
fn round_half_away(magnitude:f64,decimals:usize) -> String {
    let exact = format!("{:.*}",EXACT_FRACTION_DIGITS,magnitude);
    let (int_part,fraction) = exact.split_once('.').unwrap_or((exact.as_str(),""));
    let kept = decimals.min(fraction.len());
    let round_up = fraction.as_bytes().get(kept).is_some_and(|d| *d >= b'5');

    let mut digits:Vec<u8> = int_part.bytes().chain(fraction[..kept].bytes()).collect();
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            }else{
                *digit += 1;
                carry = false;
                break
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - kept;
    let mut text:String = digits[..split].iter().map(|&d| d as char).collect();
    if decimals > 0 {
        text.push('.');
        text.extend(digits[split..].iter().map(|&d| d as char));
        text.extend(std::iter::repeat_n('0', decimals - kept));
    }
    text
}

// " + " or " - " followed by the magnitude
fn signed_term(value:f64,decimals:usize) -> String {
    let sign = if value > 0.0 {" + "} else {" - "};
    format!("{sign}{}",format_number(value.abs(), decimals))
}

/// `y = ax² + bx + c` with unit coefficients shown as a bare sign and zero
/// `b`/`c` terms left out. The `x²` term is always printed.
pub fn format_quadratic(coefficients:&Coefficients,precision:usize) -> String {
    let (a,b,c) = (coefficients.a(),coefficients.b(),coefficients.c());
    let mut equation = String::from("y = ");

    if a.abs() != 1.0 {
        equation.push_str(&format_number(a, precision));
    }else if a < 0.0 {
        equation.push('-');
    }
    equation.push_str("x²");

    if b != 0.0 {
        let sign = if b > 0.0 {" + "} else {" - "};
        equation.push_str(sign);
        if b.abs() != 1.0 {
            equation.push_str(&format_number(b.abs(), precision));
        }
        equation.push('x');
    }

    if c != 0.0 {
        equation.push_str(&signed_term(c, precision));
    }
    equation
}

/// Slope-intercept form `y = mx + k` of the line through `(x0, y0)`.
///
/// A zero slope keeps a literal `0` as the leading term, e.g. `y = 0 + 5`.
pub fn format_tangent(x0:f64,y0:f64,slope:f64,precision:usize) -> String {
    let intercept = y0 - slope*x0;
    let mut equation = String::from("y = ");

    if slope.abs() == 1.0 {
        equation.push_str(if slope < 0.0 {"-x"} else {"x"});
    }else if slope == 0.0 {
        equation.push('0');
    }else{
        equation.push_str(&format_number(slope, precision));
        equation.push('x');
    }

    if intercept != 0.0 {
        equation.push_str(&signed_term(intercept, precision));
    }
    equation
}
