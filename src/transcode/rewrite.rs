//! Per-line rewrite of the decoded subscription.
//!
//! Each entry is a routing descriptor optionally followed by a display name
//! starting at the first `#`. Everything from that `#` onward is
//! query-escaped. The separator is emitted literally and then escaped again
//! as part of the name (`prefix#%23name`); consumers rely on this exact output.
//!
//! Works on bytes: the document need not be UTF-8, and descriptors are
//! copied through unchanged.

/// Rewrite every non-empty line and join them with `\n`.
pub fn rewrite(document: &[u8]) -> Vec<u8> {
    document
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .map(rewrite_line)
        .collect::<Vec<_>>()
        .join(&b'\n')
}

/// Rewrite a single entry line.
pub fn rewrite_line(line: &[u8]) -> Vec<u8> {
    match line.iter().position(|&b| b == b'#') {
        None => line.to_vec(),
        Some(idx) => {
            let (prefix, comment) = line.split_at(idx);
            let escaped = query_escape(comment);
            let mut out = Vec::with_capacity(prefix.len() + 1 + escaped.len());
            out.extend_from_slice(prefix);
            out.push(b'#');
            out.extend_from_slice(escaped.as_bytes());
            out
        }
    }
}

/// Escape bytes for use in a URL query component.
///
/// ASCII alphanumerics and `-_.~` pass through, space becomes `+`, every
/// other byte becomes `%XX` (uppercase hex).
pub fn query_escape(bytes: &[u8]) -> String {
    // A literal '%' is escaped to "%25", so "%20" can only come from a space.
    urlencoding::encode_binary(bytes).replace("%20", "+")
}
