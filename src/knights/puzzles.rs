use crate::logic::{Formula, Symbol};

/// One of the islanders appearing in the puzzles.
///
/// Every character is either a knight, whose statements are all true, or a
/// knave, whose statements are all false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Character {
    A,
    B,
    C,
}

impl Character {
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    #[must_use]
    pub fn knight(self) -> Symbol {
        Symbol::new(format!("{} is a Knight", self.name()))
    }

    #[must_use]
    pub fn knave(self) -> Symbol {
        Symbol::new(format!("{} is a Knave", self.name()))
    }

    #[must_use]
    pub fn is_knight(self) -> Formula {
        Formula::Atom(self.knight())
    }

    #[must_use]
    pub fn is_knave(self) -> Formula {
        Formula::Atom(self.knave())
    }

    /// The character is a knight or a knave, never both.
    #[must_use]
    pub fn exactly_one_role(self) -> Formula {
        Formula::and([
            Formula::or([self.is_knight(), self.is_knave()]),
            Formula::not(Formula::and([self.is_knight(), self.is_knave()])),
        ])
    }

    /// The character asserts `statement`: it holds if they are a knight and
    /// fails if they are a knave.
    #[must_use]
    pub fn says(self, statement: Formula) -> Formula {
        Formula::and([
            Formula::implies(self.is_knight(), statement.clone()),
            Formula::implies(self.is_knave(), Formula::not(statement)),
        ])
    }
}

/// A puzzle: what each character said, encoded as a knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub name: String,
    pub statements: Vec<&'static str>,
    pub knowledge: Formula,
}

/// The knight/knave symbols for every character, in reporting order.
#[must_use]
pub fn candidate_symbols() -> Vec<Symbol> {
    Character::ALL
        .iter()
        .flat_map(|c| [c.knight(), c.knave()])
        .collect()
}

/// A says "I am both a knight and a knave."
#[must_use]
pub fn puzzle_0() -> Puzzle {
    use Character::A;

    Puzzle {
        name: "Puzzle 0".to_string(),
        statements: vec![r#"A says "I am both a knight and a knave.""#],
        knowledge: Formula::and([
            A.exactly_one_role(),
            A.says(Formula::and([A.is_knight(), A.is_knave()])),
        ]),
    }
}

/// A says "We are both knaves." B says nothing.
#[must_use]
pub fn puzzle_1() -> Puzzle {
    use Character::{A, B};

    Puzzle {
        name: "Puzzle 1".to_string(),
        statements: vec![r#"A says "We are both knaves.""#, "B says nothing."],
        knowledge: Formula::and([
            A.exactly_one_role(),
            B.exactly_one_role(),
            A.says(Formula::and([A.is_knave(), B.is_knave()])),
        ]),
    }
}

/// A says "We are the same kind." B says "We are of different kinds."
#[must_use]
pub fn puzzle_2() -> Puzzle {
    use Character::{A, B};

    let same_kind = Formula::or([
        Formula::and([A.is_knight(), B.is_knight()]),
        Formula::and([A.is_knave(), B.is_knave()]),
    ]);
    let different_kinds = Formula::or([
        Formula::and([A.is_knight(), B.is_knave()]),
        Formula::and([A.is_knave(), B.is_knight()]),
    ]);

    Puzzle {
        name: "Puzzle 2".to_string(),
        statements: vec![
            r#"A says "We are the same kind.""#,
            r#"B says "We are of different kinds.""#,
        ],
        knowledge: Formula::and([
            A.exactly_one_role(),
            B.exactly_one_role(),
            A.says(same_kind),
            B.says(different_kinds),
        ]),
    }
}

/// A says either "I am a knight." or "I am a knave.", but you don't know
/// which. B says "A said 'I am a knave'." B then says "C is a knave." C says
/// "A is a knight."
#[must_use]
pub fn puzzle_3() -> Puzzle {
    use Character::{A, B, C};

    Puzzle {
        name: "Puzzle 3".to_string(),
        statements: vec![
            r#"A says either "I am a knight." or "I am a knave.", but you don't know which."#,
            r#"B says "A said 'I am a knave'.""#,
            r#"B says "C is a knave.""#,
            r#"C says "A is a knight.""#,
        ],
        knowledge: Formula::and([
            A.exactly_one_role(),
            B.exactly_one_role(),
            C.exactly_one_role(),
            Formula::or([A.says(A.is_knight()), A.says(A.is_knave())]),
            B.says(A.says(A.is_knave())),
            B.says(C.is_knave()),
            C.says(A.is_knight()),
        ]),
    }
}

#[must_use]
pub fn all_puzzles() -> Vec<Puzzle> {
    vec![puzzle_0(), puzzle_1(), puzzle_2(), puzzle_3()]
}
