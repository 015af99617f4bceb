pub mod class;
pub mod matching;

pub use class::{CharClass, alphanumeric, digit, letter, lowercase, uppercase, whitespace};
pub use matching::{
    CharacterMatching, any_character, character, character_in, character_in_range,
    character_matching,
};
