use super::matching::CharacterMatching;

/// Single-character parser over a fixed ASCII class
pub type CharClass = CharacterMatching<fn(char) -> bool>;

fn class(predicate: fn(char) -> bool) -> CharClass {
    CharacterMatching::new(predicate)
}

/// `a`-`z`
pub fn lowercase() -> CharClass {
    class(|c| c.is_ascii_lowercase())
}

/// `A`-`Z`
pub fn uppercase() -> CharClass {
    class(|c| c.is_ascii_uppercase())
}

/// `0`-`9`
pub fn digit() -> CharClass {
    class(|c| c.is_ascii_digit())
}

/// Lowercase or uppercase ASCII letter
pub fn letter() -> CharClass {
    class(|c| c.is_ascii_alphabetic())
}

/// ASCII letter or digit
pub fn alphanumeric() -> CharClass {
    class(|c| c.is_ascii_alphanumeric())
}

/// Space, tab or newline and nothing else (no `\r`, no Unicode spaces)
pub fn whitespace() -> CharClass {
    class(|c| matches!(c, ' ' | '\t' | '\n'))
}
