use serde_json::{Number, Value};

/// Renders a JSON value exactly as JavaScript's `JSON.stringify` would:
/// compact, fields in insertion order, JavaScript number formatting.
pub fn to_canonical_json(value: &Value) -> String {
    let mut output = String::new();
    write_value(&mut output, value);
    output
}

fn write_value(output: &mut String, value: &Value) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(number) => output.push_str(&format_number(number)),
        Value::String(text) => write_string(output, text),
        Value::Array(items) => {
            output.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    output.push(',');
                }
                write_value(output, item);
            }
            output.push(']');
        }
        Value::Object(fields) => {
            output.push('{');
            for (index, (key, item)) in fields.iter().enumerate() {
                if index > 0 {
                    output.push(',');
                }
                write_string(output, key);
                output.push(':');
                write_value(output, item);
            }
            output.push('}');
        }
    }
}

fn write_string(output: &mut String, text: &str) {
    // serde_json escapes the same set JSON.stringify does for valid UTF-8.
    output.push_str(&Value::from(text).to_string());
}

fn format_number(number: &Number) -> String {
    if let Some(value) = number.as_i64() {
        return value.to_string();
    }
    if let Some(value) = number.as_u64() {
        return value.to_string();
    }
    match number.as_f64() {
        Some(value) => format_js_double(value),
        None => number.to_string(),
    }
}

/// ECMAScript `Number::toString` for finite doubles.
pub(crate) fn format_js_double(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|ch| *ch != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let n = exponent + 1;

    let mut output = String::new();
    if value < 0.0 {
        output.push('-');
    }

    if k <= n && n <= 21 {
        output.push_str(&digits);
        output.extend(std::iter::repeat_n('0', (n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (integral, fractional) = digits.split_at(n as usize);
        output.push_str(integral);
        output.push('.');
        output.push_str(fractional);
    } else if -6 < n && n <= 0 {
        output.push_str("0.");
        output.extend(std::iter::repeat_n('0', (-n) as usize));
        output.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        output.push_str(first);
        if !rest.is_empty() {
            output.push('.');
            output.push_str(rest);
        }
        output.push('e');
        output.push(if n - 1 >= 0 { '+' } else { '-' });
        output.push_str(&(n - 1).abs().to_string());
    }
    output
}
