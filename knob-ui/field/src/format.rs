use knob_model::{Schema, Value, option_label};

/// Display text for a property value.
pub fn format_value(schema: &Schema, value: &Value, default_precision: u32) -> String {
    match value {
        Value::Number(number) => match schema.options.as_deref() {
            Some(options) => option_label(options, *number).to_string(),
            None => {
                let precision = schema.precision.unwrap_or(default_precision);
                format!("{:.*}", precision as usize, number)
            },
        },
        Value::Boolean(flag) => flag.to_string(),
        Value::String(text) => text.clone(),
        Value::Object(object) => object.to_string(),
        Value::Array(values) => values
            .iter()
            .map(|value| format_value(schema, value, default_precision))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Text the inline editor starts with.
pub fn edit_text(value: &Value, edit_precision: usize) -> String {
    match value {
        Value::Number(number) => format!("{number:.edit_precision$}"),
        Value::String(text) => text.clone(),
        other => format_value(&Schema::default(), other, edit_precision as u32),
    }
}

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"2.5px"`
/// parses as 2.5. Anything without a numeric prefix, and zero, yields 0.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let integer = digits(end);
    end += integer;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        if integer > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer == 0 && fraction == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut after_e = end + 1;
        if matches!(bytes.get(after_e), Some(b'+' | b'-')) {
            after_e += 1;
        }
        let exponent = digits(after_e);
        if exponent > 0 {
            end = after_e + exponent;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value != 0.0 && !value.is_nan() => value,
        _ => 0.0,
    }
}
