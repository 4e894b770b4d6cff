use thiserror::Error;

// ---------------------------------------------------------------------------
// Classmark codec
// ---------------------------------------------------------------------------
//
// A classmark is 1–2 uppercase ASCII letters.  Ranks are dense:
//   A→0 … Z→25, AA→26, AB→27 … ZZ→701
// so all single letters form one contiguous block before every two-letter
// mark.  Mixed-length ranges are valid and span that boundary: "G".."GF"
// covers the remaining singles H..Z as well as AA..GF.

/// Highest valid rank (`ZZ`): 26 single letters + 26×26 pairs − 1.
pub const MAX_RANK: u16 = 26 + 26 * 26 - 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassmarkError {
    #[error("invalid classmark {0:?} (must be 1-2 letters A-Z)")]
    InvalidMark(String),
    #[error("rank {0} has no classmark (valid: 0..={MAX_RANK})")]
    RankOutOfBounds(u16),
    #[error("range start {start:?} exceeds end {end:?}")]
    ReversedRange { start: String, end: String },
}

/// True iff `mark` is exactly 1 or 2 uppercase ASCII letters.
pub fn is_valid_classmark(mark: &str) -> bool {
    (1..=2).contains(&mark.len()) && mark.bytes().all(|b| b.is_ascii_uppercase())
}

/// Map a valid classmark to its rank.
pub fn classmark_to_rank(mark: &str) -> Result<u16, ClassmarkError> {
    if !is_valid_classmark(mark) {
        return Err(ClassmarkError::InvalidMark(mark.to_string()));
    }
    let bytes = mark.as_bytes();
    let first = (bytes[0] - b'A') as u16;
    match bytes.len() {
        1 => Ok(first),
        _ => {
            let second = (bytes[1] - b'A') as u16;
            Ok(26 + 26 * first + second)
        }
    }
}

/// Inverse of [`classmark_to_rank`] for ranks `0..=MAX_RANK`.
pub fn rank_to_classmark(rank: u16) -> Result<String, ClassmarkError> {
    if rank > MAX_RANK {
        return Err(ClassmarkError::RankOutOfBounds(rank));
    }
    if rank <= 25 {
        return Ok(char::from(b'A' + rank as u8).to_string());
    }
    let n = rank - 26;
    let first = char::from(b'A' + (n / 26) as u8);
    let second = char::from(b'A' + (n % 26) as u8);
    Ok(format!("{first}{second}"))
}

/// Inclusive expansion from `start` to `end` in ascending rank order.
///
/// Endpoints are trimmed and uppercased before validation.  A reversed
/// range is an error, not an empty result.
pub fn expand_range(start: &str, end: &str) -> Result<Vec<String>, ClassmarkError> {
    let s = start.trim().to_uppercase();
    let e = end.trim().to_uppercase();
    let si = classmark_to_rank(&s)?;
    let ei = classmark_to_rank(&e)?;
    if si > ei {
        return Err(ClassmarkError::ReversedRange { start: s, end: e });
    }
    (si..=ei).map(rank_to_classmark).collect()
}
