//! Browser `KeyboardEvent.keyCode` values the translator binds by default.

pub const SPACE: u32 = 32;
pub const LEFT: u32 = 37;
pub const UP: u32 = 38;
pub const RIGHT: u32 = 39;
pub const DOWN: u32 = 40;

pub const DIGIT_1: u32 = 49;
pub const DIGIT_2: u32 = 50;
pub const DIGIT_3: u32 = 51;
pub const DIGIT_4: u32 = 52;
pub const DIGIT_5: u32 = 53;

pub const A: u32 = 65;
pub const D: u32 = 68;
pub const H: u32 = 72;
pub const J: u32 = 74;
pub const S: u32 = 83;
pub const W: u32 = 87;

/// Zero-based index for the digit keys 1 through 9.
pub fn digit_index(key_code: u32) -> Option<usize> {
    match key_code {
        49..=57 => Some((key_code - DIGIT_1) as usize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_indices() {
        assert_eq!(digit_index(DIGIT_1), Some(0));
        assert_eq!(digit_index(DIGIT_5), Some(4));
        assert_eq!(digit_index(57), Some(8));
        assert_eq!(digit_index(48), None);
        assert_eq!(digit_index(W), None);
    }
}
