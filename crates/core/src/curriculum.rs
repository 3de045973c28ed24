//! Curriculum datasets - static, ordered levels of puzzle entries
//!
//! Two bundled curricula share the same shape: the word-builder levels
//! (single-letter tokens, difficulty tiers, no lessons) and the
//! phoneme-blender levels (multi-letter phoneme tokens, an intro lesson
//! per level, authored decoys). All data is immutable and loaded once.

use phonics_play_types::{Token, TokenClass};

/// A worked example shown on a lesson screen.
#[derive(Debug, Clone, Copy)]
pub struct WorkedExample {
    pub tokens: &'static [Token],
    pub word: &'static str,
}

/// Intro lesson for a level (phoneme variant only).
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [WorkedExample],
}

/// One puzzle: a target token sequence plus display metadata.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub word: &'static str,
    pub target: &'static [Token],
    pub emoji: &'static str,
    pub hint: &'static str,
    /// Pre-authored decoys. Empty for entries whose decoys are generated.
    pub decoys: &'static [Token],
}

/// An ordered group of entries sharing a difficulty tier.
#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub name: &'static str,
    pub label: &'static str,
    pub lesson: Option<Lesson>,
    pub entries: &'static [Entry],
}

/// Read-only view over an ordered level list.
///
/// Out-of-range access is a programmer error: indices are always derived
/// from internal state, so slice indexing (and its panic) is the contract.
#[derive(Debug, Clone, Copy)]
pub struct Curriculum {
    levels: &'static [Level],
}

impl Curriculum {
    pub const fn new(levels: &'static [Level]) -> Self {
        Self { levels }
    }

    pub fn level(&self, index: usize) -> &'static Level {
        &self.levels[index]
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn entry_count(&self, level_index: usize) -> usize {
        self.levels[level_index].entries.len()
    }
}

/// The full single-letter alphabet, used for distractor draws.
pub const LETTER_ALPHABET: [Token; 26] = [
    Token("A"),
    Token("B"),
    Token("C"),
    Token("D"),
    Token("E"),
    Token("F"),
    Token("G"),
    Token("H"),
    Token("I"),
    Token("J"),
    Token("K"),
    Token("L"),
    Token("M"),
    Token("N"),
    Token("O"),
    Token("P"),
    Token("Q"),
    Token("R"),
    Token("S"),
    Token("T"),
    Token("U"),
    Token("V"),
    Token("W"),
    Token("X"),
    Token("Y"),
    Token("Z"),
];

/// Phonemes rendered as vowels. Everything else is a consonant.
const VOWEL_PHONEMES: [&str; 18] = [
    "A", "E", "I", "O", "U", "EE", "OO", "AI", "OA", "EA", "OU", "AW", "OI", "AR", "OR", "ER",
    "IR", "UR",
];

/// Classify a token for rendering. Pure lookup, case-insensitive.
pub fn token_class(token: Token) -> TokenClass {
    if VOWEL_PHONEMES
        .iter()
        .any(|v| v.eq_ignore_ascii_case(token.as_str()))
    {
        TokenClass::Vowel
    } else {
        TokenClass::Consonant
    }
}

// ============== Word Builder levels ==============

pub const WORD_BUILDER: Curriculum = Curriculum::new(&[
    Level {
        name: "easy",
        label: "Easy",
        lesson: None,
        entries: &[
            Entry {
                word: "SUN",
                target: &[Token("S"), Token("U"), Token("N")],
                emoji: "\u{2600}\u{fe0f}",
                hint: "It shines bright in the sky!",
                decoys: &[],
            },
            Entry {
                word: "CAT",
                target: &[Token("C"), Token("A"), Token("T")],
                emoji: "\u{1f431}",
                hint: "This pet says 'meow'!",
                decoys: &[],
            },
            Entry {
                word: "DOG",
                target: &[Token("D"), Token("O"), Token("G")],
                emoji: "\u{1f436}",
                hint: "This pet says 'woof'!",
                decoys: &[],
            },
            Entry {
                word: "HAT",
                target: &[Token("H"), Token("A"), Token("T")],
                emoji: "\u{1f9e2}",
                hint: "You wear it on your head!",
                decoys: &[],
            },
            Entry {
                word: "BEE",
                target: &[Token("B"), Token("E"), Token("E")],
                emoji: "\u{1f41d}",
                hint: "It makes honey and goes 'buzz'!",
                decoys: &[],
            },
            Entry {
                word: "CUP",
                target: &[Token("C"), Token("U"), Token("P")],
                emoji: "\u{2615}",
                hint: "You drink from it!",
                decoys: &[],
            },
            Entry {
                word: "BUS",
                target: &[Token("B"), Token("U"), Token("S")],
                emoji: "\u{1f68c}",
                hint: "A big vehicle that carries many people!",
                decoys: &[],
            },
            Entry {
                word: "FISH",
                target: &[Token("F"), Token("I"), Token("S"), Token("H")],
                emoji: "\u{1f41f}",
                hint: "It swims in the water!",
                decoys: &[],
            },
        ],
    },
    Level {
        name: "medium",
        label: "Medium",
        lesson: None,
        entries: &[
            Entry {
                word: "BOOK",
                target: &[Token("B"), Token("O"), Token("O"), Token("K")],
                emoji: "\u{1f4d6}",
                hint: "You read stories in it!",
                decoys: &[],
            },
            Entry {
                word: "MOON",
                target: &[Token("M"), Token("O"), Token("O"), Token("N")],
                emoji: "\u{1f319}",
                hint: "It lights up the night sky!",
                decoys: &[],
            },
            Entry {
                word: "STAR",
                target: &[Token("S"), Token("T"), Token("A"), Token("R")],
                emoji: "\u{2b50}",
                hint: "It twinkles in the night sky!",
                decoys: &[],
            },
            Entry {
                word: "TREE",
                target: &[Token("T"), Token("R"), Token("E"), Token("E")],
                emoji: "\u{1f333}",
                hint: "It has leaves and grows tall!",
                decoys: &[],
            },
            Entry {
                word: "RAIN",
                target: &[Token("R"), Token("A"), Token("I"), Token("N")],
                emoji: "\u{1f327}\u{fe0f}",
                hint: "Water falling from clouds!",
                decoys: &[],
            },
            Entry {
                word: "BIRD",
                target: &[Token("B"), Token("I"), Token("R"), Token("D")],
                emoji: "\u{1f426}",
                hint: "It has wings and can fly!",
                decoys: &[],
            },
            Entry {
                word: "FROG",
                target: &[Token("F"), Token("R"), Token("O"), Token("G")],
                emoji: "\u{1f438}",
                hint: "It says 'ribbit' and hops!",
                decoys: &[],
            },
            Entry {
                word: "CAKE",
                target: &[Token("C"), Token("A"), Token("K"), Token("E")],
                emoji: "\u{1f382}",
                hint: "A sweet treat for birthdays!",
                decoys: &[],
            },
        ],
    },
    Level {
        name: "hard",
        label: "Hard",
        lesson: None,
        entries: &[
            Entry {
                word: "CLOUD",
                target: &[Token("C"), Token("L"), Token("O"), Token("U"), Token("D")],
                emoji: "\u{2601}\u{fe0f}",
                hint: "White and fluffy in the sky!",
                decoys: &[],
            },
            Entry {
                word: "HOUSE",
                target: &[Token("H"), Token("O"), Token("U"), Token("S"), Token("E")],
                emoji: "\u{1f3e0}",
                hint: "You live inside it!",
                decoys: &[],
            },
            Entry {
                word: "SMILE",
                target: &[Token("S"), Token("M"), Token("I"), Token("L"), Token("E")],
                emoji: "\u{1f60a}",
                hint: "What you do when you're happy!",
                decoys: &[],
            },
            Entry {
                word: "HEART",
                target: &[Token("H"), Token("E"), Token("A"), Token("R"), Token("T")],
                emoji: "\u{2764}\u{fe0f}",
                hint: "A symbol of love!",
                decoys: &[],
            },
            Entry {
                word: "MUSIC",
                target: &[Token("M"), Token("U"), Token("S"), Token("I"), Token("C")],
                emoji: "\u{1f3b5}",
                hint: "Sounds you listen and dance to!",
                decoys: &[],
            },
            Entry {
                word: "LIGHT",
                target: &[Token("L"), Token("I"), Token("G"), Token("H"), Token("T")],
                emoji: "\u{1f4a1}",
                hint: "It helps you see in the dark!",
                decoys: &[],
            },
            Entry {
                word: "DREAM",
                target: &[Token("D"), Token("R"), Token("E"), Token("A"), Token("M")],
                emoji: "\u{1f4ad}",
                hint: "Stories your mind tells when you sleep!",
                decoys: &[],
            },
            Entry {
                word: "OCEAN",
                target: &[Token("O"), Token("C"), Token("E"), Token("A"), Token("N")],
                emoji: "\u{1f30a}",
                hint: "A very big body of salty water!",
                decoys: &[],
            },
        ],
    },
]);

// ============== Phoneme Blender levels ==============

pub const PHONEME_BLENDER: Curriculum = Curriculum::new(&[
    Level {
        name: "letter-sounds",
        label: "Letter Sounds",
        lesson: Some(Lesson {
            title: "Every Letter Has a Sound!",
            description: "Each letter makes its own special sound. Let's blend them together to make words!",
            examples: &[
                WorkedExample {
                    tokens: &[Token("C"), Token("A"), Token("T")],
                    word: "CAT",
                },
                WorkedExample {
                    tokens: &[Token("S"), Token("U"), Token("N")],
                    word: "SUN",
                },
            ],
        }),
        entries: &[
            Entry {
                word: "CAT",
                target: &[Token("C"), Token("A"), Token("T")],
                emoji: "\u{1f431}",
                hint: "Says meow!",
                decoys: &[],
            },
            Entry {
                word: "SUN",
                target: &[Token("S"), Token("U"), Token("N")],
                emoji: "\u{2600}\u{fe0f}",
                hint: "Shines in the sky!",
                decoys: &[],
            },
            Entry {
                word: "DOG",
                target: &[Token("D"), Token("O"), Token("G")],
                emoji: "\u{1f436}",
                hint: "Says woof!",
                decoys: &[],
            },
            Entry {
                word: "HAT",
                target: &[Token("H"), Token("A"), Token("T")],
                emoji: "\u{1f9e2}",
                hint: "Goes on your head!",
                decoys: &[],
            },
            Entry {
                word: "BUS",
                target: &[Token("B"), Token("U"), Token("S")],
                emoji: "\u{1f68c}",
                hint: "A big yellow ride!",
                decoys: &[],
            },
            Entry {
                word: "PIG",
                target: &[Token("P"), Token("I"), Token("G")],
                emoji: "\u{1f437}",
                hint: "Oink oink!",
                decoys: &[],
            },
            Entry {
                word: "RUG",
                target: &[Token("R"), Token("U"), Token("G")],
                emoji: "\u{1faa7}",
                hint: "Soft on the floor!",
                decoys: &[],
            },
            Entry {
                word: "PEN",
                target: &[Token("P"), Token("E"), Token("N")],
                emoji: "\u{1f58a}\u{fe0f}",
                hint: "You write with it!",
                decoys: &[],
            },
        ],
    },
    Level {
        name: "consonant-blends",
        label: "Consonant Blends",
        lesson: Some(Lesson {
            title: "Two Consonants Can Work Together!",
            description: "Sometimes two consonants blend their sounds together. You can still hear both sounds!",
            examples: &[
                WorkedExample {
                    tokens: &[Token("ST"), Token("A"), Token("R")],
                    word: "STAR",
                },
                WorkedExample {
                    tokens: &[Token("FL"), Token("A"), Token("G")],
                    word: "FLAG",
                },
            ],
        }),
        entries: &[
            Entry {
                word: "STAR",
                target: &[Token("ST"), Token("A"), Token("R")],
                emoji: "\u{2b50}",
                hint: "Twinkles at night!",
                decoys: &[],
            },
            Entry {
                word: "FLAG",
                target: &[Token("FL"), Token("A"), Token("G")],
                emoji: "\u{1f3f3}\u{fe0f}",
                hint: "Waves in the wind!",
                decoys: &[],
            },
            Entry {
                word: "CRAB",
                target: &[Token("CR"), Token("A"), Token("B")],
                emoji: "\u{1f980}",
                hint: "Has big claws!",
                decoys: &[],
            },
            Entry {
                word: "FROG",
                target: &[Token("FR"), Token("O"), Token("G")],
                emoji: "\u{1f438}",
                hint: "Says ribbit!",
                decoys: &[],
            },
            Entry {
                word: "DRUM",
                target: &[Token("DR"), Token("U"), Token("M")],
                emoji: "\u{1f941}",
                hint: "You bang on it!",
                decoys: &[],
            },
            Entry {
                word: "SNAIL",
                target: &[Token("SN"), Token("AI"), Token("L")],
                emoji: "\u{1f40c}",
                hint: "Carries its house!",
                decoys: &[],
            },
            Entry {
                word: "BLOCK",
                target: &[Token("BL"), Token("O"), Token("CK")],
                emoji: "\u{1f9f1}",
                hint: "You build with it!",
                decoys: &[],
            },
            Entry {
                word: "TRAIN",
                target: &[Token("TR"), Token("AI"), Token("N")],
                emoji: "\u{1f682}",
                hint: "Rides on tracks!",
                decoys: &[],
            },
        ],
    },
    Level {
        name: "digraphs",
        label: "Digraphs",
        lesson: Some(Lesson {
            title: "Two Letters, One New Sound!",
            description: "Some letter pairs make a brand new sound. SH says /sh/, CH says /ch/, TH says /th/!",
            examples: &[
                WorkedExample {
                    tokens: &[Token("SH"), Token("I"), Token("P")],
                    word: "SHIP",
                },
                WorkedExample {
                    tokens: &[Token("CH"), Token("I"), Token("N")],
                    word: "CHIN",
                },
            ],
        }),
        entries: &[
            Entry {
                word: "SHIP",
                target: &[Token("SH"), Token("I"), Token("P")],
                emoji: "\u{1f6a2}",
                hint: "Sails the seas!",
                decoys: &[],
            },
            Entry {
                word: "CHIN",
                target: &[Token("CH"), Token("I"), Token("N")],
                emoji: "\u{1f64d}",
                hint: "Below your mouth!",
                decoys: &[],
            },
            Entry {
                word: "THIN",
                target: &[Token("TH"), Token("I"), Token("N")],
                emoji: "\u{1faa1}",
                hint: "Not thick!",
                decoys: &[],
            },
            Entry {
                word: "WHALE",
                target: &[Token("WH"), Token("A"), Token("LE")],
                emoji: "\u{1f433}",
                hint: "Biggest in the ocean!",
                decoys: &[],
            },
            Entry {
                word: "FISH",
                target: &[Token("F"), Token("I"), Token("SH")],
                emoji: "\u{1f41f}",
                hint: "Swims in water!",
                decoys: &[],
            },
            Entry {
                word: "SHARK",
                target: &[Token("SH"), Token("AR"), Token("K")],
                emoji: "\u{1f988}",
                hint: "King of the sea!",
                decoys: &[],
            },
            Entry {
                word: "CHEST",
                target: &[Token("CH"), Token("E"), Token("ST")],
                emoji: "\u{1fa77}",
                hint: "Holds treasure!",
                decoys: &[],
            },
            Entry {
                word: "PATH",
                target: &[Token("P"), Token("A"), Token("TH")],
                emoji: "\u{1f6b6}",
                hint: "You walk on it!",
                decoys: &[],
            },
        ],
    },
    Level {
        name: "vowel-teams",
        label: "Vowel Teams",
        lesson: Some(Lesson {
            title: "When Two Vowels Walk Together!",
            description: "When two vowels are side by side, the first one says its name! AI says /ay/, OA says /oh/, EE says /ee/!",
            examples: &[
                WorkedExample {
                    tokens: &[Token("R"), Token("AI"), Token("N")],
                    word: "RAIN",
                },
                WorkedExample {
                    tokens: &[Token("B"), Token("OA"), Token("T")],
                    word: "BOAT",
                },
            ],
        }),
        entries: &[
            Entry {
                word: "RAIN",
                target: &[Token("R"), Token("AI"), Token("N")],
                emoji: "\u{1f327}\u{fe0f}",
                hint: "Falls from clouds!",
                decoys: &[],
            },
            Entry {
                word: "BOAT",
                target: &[Token("B"), Token("OA"), Token("T")],
                emoji: "\u{26f5}",
                hint: "Floats on water!",
                decoys: &[],
            },
            Entry {
                word: "SEED",
                target: &[Token("S"), Token("EE"), Token("D")],
                emoji: "\u{1f331}",
                hint: "Grows into a plant!",
                decoys: &[],
            },
            Entry {
                word: "MOON",
                target: &[Token("M"), Token("OO"), Token("N")],
                emoji: "\u{1f319}",
                hint: "Glows at night!",
                decoys: &[],
            },
            Entry {
                word: "TEAM",
                target: &[Token("T"), Token("EA"), Token("M")],
                emoji: "\u{1f91d}",
                hint: "Work together!",
                decoys: &[],
            },
            Entry {
                word: "GOAT",
                target: &[Token("G"), Token("OA"), Token("T")],
                emoji: "\u{1f410}",
                hint: "Says baaah!",
                decoys: &[],
            },
            Entry {
                word: "FEET",
                target: &[Token("F"), Token("EE"), Token("T")],
                emoji: "\u{1f9b6}",
                hint: "You walk on them!",
                decoys: &[],
            },
            Entry {
                word: "TOOTH",
                target: &[Token("T"), Token("OO"), Token("TH")],
                emoji: "\u{1fab7}",
                hint: "In your mouth!",
                decoys: &[],
            },
        ],
    },
]);
