//! Message assembly strategies
//!
//! A [`MessageFormatter`] combines the call's level, the resolved prefixes,
//! and the call arguments into the final output line. The default
//! [`TextFormat`] merges everything with single spaces and printf-style
//! template substitution.

use super::log_level::LogLevel;

/// Assembly of (level, resolved prefixes, arguments) into the final line.
///
/// Implemented for any conforming `Fn` closure, so a bare closure can be
/// supplied where a formatter is expected.
pub trait MessageFormatter: Send + Sync {
    fn format(&self, level: LogLevel, prefixes: &[String], args: &[String]) -> String;
}

impl<F> MessageFormatter for F
where
    F: Fn(LogLevel, &[String], &[String]) -> String + Send + Sync,
{
    fn format(&self, level: LogLevel, prefixes: &[String], args: &[String]) -> String {
        self(level, prefixes, args)
    }
}

/// Default formatter: single-space joining with printf-style templates.
///
/// The resolved prefixes followed by the call arguments form one sequence.
/// If the sequence is empty the result is the empty string. The first
/// element acts as a format template only when it contains a directive
/// (`%s`, `%d`, `%i`, `%f`, or the `%%` escape); directives consume the
/// following elements in order, directives left without an element stay
/// literal, and elements not consumed by a directive are appended
/// space-separated. Without directives the whole sequence is joined with
/// single spaces. All substituting directives insert the element's rendered
/// text; they differ only in call-site intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl MessageFormatter for TextFormat {
    fn format(&self, _level: LogLevel, prefixes: &[String], args: &[String]) -> String {
        let parts: Vec<&str> = prefixes
            .iter()
            .chain(args.iter())
            .map(String::as_str)
            .collect();
        merge(&parts)
    }
}

fn has_directive(template: &str) -> bool {
    let bytes = template.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'%' && matches!(bytes[i + 1], b's' | b'd' | b'i' | b'f' | b'%') {
            return true;
        }
        i += 1;
    }
    false
}

fn merge(parts: &[&str]) -> String {
    let Some((template, rest)) = parts.split_first() else {
        return String::new();
    };
    if !has_directive(template) {
        return parts.join(" ");
    }

    let mut out = String::with_capacity(template.len());
    let mut pending = rest.iter();
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s' | 'd' | 'i' | 'f') => match pending.next() {
                Some(arg) => {
                    chars.next();
                    out.push_str(arg);
                }
                None => out.push('%'),
            },
            _ => out.push('%'),
        }
    }
    for arg in pending {
        out.push(' ');
        out.push_str(arg);
    }
    out
}
