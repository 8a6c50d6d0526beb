//! Turning keyboard-layout-editor raw data into strict JSON.
//!
//! The editor writes object keys without quotes (`{x:1,w:2}`) and omits the
//! outer brackets around the row list. Both are repaired here before parsing.

/// Quote bare object keys that follow `{` or `,` outside string literals.
pub fn quote_bare_keys(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len() + 16);
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;

        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | ',' => {
                let start = skip_whitespace(&chars, i);
                let end = bare_key_end(&chars, start);
                let colon = skip_whitespace(&chars, end);
                if end > start && chars.get(colon) == Some(&':') {
                    out.extend(&chars[i..start]);
                    out.push('"');
                    out.extend(&chars[start..end]);
                    out.push('"');
                    out.extend(&chars[end..colon]);
                    i = colon;
                }
            }
            _ => {}
        }
    }

    out
}

fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

/// End index of an identifier starting at `start`, or `start` if none.
fn bare_key_end(chars: &[char], start: usize) -> usize {
    match chars.get(start) {
        Some(c) if c.is_ascii_alphabetic() || *c == '_' => {}
        _ => return start,
    }
    let mut end = start + 1;
    while end < chars.len() && (chars[end].is_ascii_alphanumeric() || chars[end] == '_') {
        end += 1;
    }
    end
}

/// Wrap a bare row list (`[..],[..]`) in an outer array.
pub fn wrap_rows(json: &str) -> String {
    format!("[{}]", json.trim())
}
