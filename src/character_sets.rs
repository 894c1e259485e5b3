/// Scheme character classification
/// Returns: 0=invalid, 1=valid non-initial (digits, +, -, .), 2=ASCII letter (valid anywhere)
const SCHEME_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 2;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 2;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 1;
        i += 1;
    }
    table[b'+' as usize] = 1;
    table[b'-' as usize] = 1;
    table[b'.' as usize] = 1;

    table
};

/// Check if a string is a syntactically valid URL scheme.
/// Scheme names must start with an ASCII letter and may contain only ASCII
/// letters, digits, `+`, `-`, and `.`.
/// Multi-byte UTF-8 sequences fall outside the table's nonzero range, so a
/// byte-wise scan rejects non-ASCII input.
pub fn is_valid_scheme(scheme: &str) -> bool {
    let bytes = scheme.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if SCHEME_CHAR_TABLE[first as usize] != 2 {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|&b| SCHEME_CHAR_TABLE[b as usize] != 0)
}

/// Path-segment character classification
/// Returns: 0=invalid, 1=valid passthrough
/// Valid set: unreserved (a-z A-Z 0-9 - . _ ~), sub-delims (! $ & ' ( ) * + , ; =),
/// plus : and @ permitted in a path segment, plus / which the assembler
/// normalizes to a single leading slash. # and ? are structural separators
/// and stay invalid.
const PATH_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 1;
        i += 1;
    }

    table[b'-' as usize] = 1;
    table[b'.' as usize] = 1;
    table[b'_' as usize] = 1;
    table[b'~' as usize] = 1;

    table[b'!' as usize] = 1;
    table[b'$' as usize] = 1;
    table[b'&' as usize] = 1;
    table[b'\'' as usize] = 1;
    table[b'(' as usize] = 1;
    table[b')' as usize] = 1;
    table[b'*' as usize] = 1;
    table[b'+' as usize] = 1;
    table[b',' as usize] = 1;
    table[b';' as usize] = 1;
    table[b'=' as usize] = 1;

    table[b':' as usize] = 1;
    table[b'@' as usize] = 1;
    table[b'/' as usize] = 1;

    table
};

/// Check if every byte of an action name is a valid URL path character.
pub fn is_valid_path(action: &str) -> bool {
    action
        .bytes()
        .all(|b| PATH_CHAR_TABLE[b as usize] != 0)
}
