/// Returns `s` with its code points in reverse order.
///
/// Works on `char`s rather than bytes, so multi-byte characters survive intact.
/// Combining sequences are not kept together: each code point moves on its own.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
