// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Text rendering of parameter values
//!
//! Numbers use the shortest decimal that round-trips, never exponent notation,
//! so generated files stay byte-stable across runs.

/// A value that knows its OpenSCAD literal form
pub trait ParamText {
    fn param_text(&self) -> String;
}

/// Format a float as its shortest round-trippable decimal (`180.0` -> `180`)
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else {
        // f64's Display is already shortest-exact and never uses an exponent
        format!("{}", value)
    }
}

/// `[a, b, c]`
pub fn format_tuple(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format_float(*v)).collect();
    format!("[{}]", items.join(", "))
}

/// `[ [a, b], [c, d] ]` - lists of tuples are padded inside the outer brackets
pub fn format_tuple_list<I, S>(tuples: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<String> = tuples.into_iter().map(|s| s.as_ref().to_string()).collect();
    format!("[ {} ]", items.join(", "))
}

/// Double-quoted string literal
pub fn format_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl ParamText for f64 {
    fn param_text(&self) -> String {
        format_float(*self)
    }
}

impl ParamText for i64 {
    fn param_text(&self) -> String {
        self.to_string()
    }
}

impl ParamText for bool {
    fn param_text(&self) -> String {
        self.to_string()
    }
}

impl ParamText for String {
    fn param_text(&self) -> String {
        format_string(self)
    }
}

impl ParamText for [f64; 2] {
    fn param_text(&self) -> String {
        format_tuple(self)
    }
}

impl ParamText for [f64; 3] {
    fn param_text(&self) -> String {
        format_tuple(self)
    }
}

impl ParamText for Vec<[f64; 2]> {
    fn param_text(&self) -> String {
        format_tuple_list(self.iter().map(|xy| format_tuple(xy)))
    }
}

impl ParamText for Vec<Vec<i64>> {
    fn param_text(&self) -> String {
        format_tuple_list(self.iter().map(|ints| {
            let items: Vec<String> = ints.iter().map(|i| i.to_string()).collect();
            format!("[{}]", items.join(", "))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float_shortest() {
        assert_eq!(format_float(180.0), "180");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(1e21), "1000000000000000000000");
        assert_eq!(format_float(1e-7), "0.0000001");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_tuple_spacing() {
        assert_eq!([1.0, 1.5, -3.0].param_text(), "[1, 1.5, -3]");
        assert_eq!(vec![[1.0, 0.0], [0.0, 1.0]].param_text(), "[ [1, 0], [0, 1] ]");
        assert_eq!(vec![vec![0_i64, 1, 2], vec![3]].param_text(), "[ [0, 1, 2], [3] ]");
        assert_eq!(Vec::<[f64; 2]>::new().param_text(), "[  ]");
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!("abc".to_string().param_text(), "\"abc\"");
        assert_eq!("say \"hi\"\\".to_string().param_text(), "\"say \\\"hi\\\"\\\\\"");
    }

    #[test]
    fn test_bool_and_int() {
        assert_eq!(true.param_text(), "true");
        assert_eq!(false.param_text(), "false");
        assert_eq!((-42_i64).param_text(), "-42");
    }
}
