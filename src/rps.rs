//! Scoring rounds of rock, paper, scissors.
//!
//! The three shapes form a cycle: each beats the shape one step before it, so
//! comparing two shapes only needs the difference of their ordinals, modulo 3.

use failure::Error;
use input::records;
use itertools::Itertools;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    /// Decode the opponent's column of the strategy guide.
    pub fn from_opponent(symbol: char) -> Result<Shape, Error> {
        match symbol {
            'A' => Ok(Shape::Rock),
            'B' => Ok(Shape::Paper),
            'C' => Ok(Shape::Scissors),
            _ => Err(format_err!("bad opponent symbol: {:?}", symbol)),
        }
    }

    /// Decode our own column of the strategy guide, read as a shape to play.
    pub fn from_self(symbol: char) -> Result<Shape, Error> {
        match symbol {
            'X' => Ok(Shape::Rock),
            'Y' => Ok(Shape::Paper),
            'Z' => Ok(Shape::Scissors),
            _ => Err(format_err!("bad response symbol: {:?}", symbol)),
        }
    }

    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Return the shape whose ordinal is `n` modulo 3.
    pub fn from_ordinal(n: u32) -> Shape {
        Shape::ALL[(n % 3) as usize]
    }
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Lose, Outcome::Draw, Outcome::Win];

    /// Return the outcome of playing `mine` against `theirs`.
    pub fn of(mine: Shape, theirs: Shape) -> Outcome {
        match mine.ordinal() as i32 - theirs.ordinal() as i32 {
            1 | -2 => Outcome::Win,
            0 => Outcome::Draw,
            _ => Outcome::Lose,
        }
    }

    /// Decode our own column of the strategy guide, read as the outcome we're
    /// supposed to arrange.
    pub fn from_symbol(symbol: char) -> Result<Outcome, Error> {
        match symbol {
            'X' => Ok(Outcome::Lose),
            'Y' => Ok(Outcome::Draw),
            'Z' => Ok(Outcome::Win),
            _ => Err(format_err!("bad outcome symbol: {:?}", symbol)),
        }
    }

    pub fn ordinal(self) -> u32 {
        self as u32
    }

    pub fn bonus(self) -> u32 {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}

/// Return our score for a round in which we play `mine` against `theirs`: the
/// shape's own value, 1 to 3, plus the bonus for the outcome.
pub fn score(mine: Shape, theirs: Shape) -> u32 {
    mine.ordinal() + 1 + Outcome::of(mine, theirs).bonus()
}

/// Return the shape to play against `theirs` to get `outcome`.
///
/// Losing means playing the shape one step back around the cycle, drawing the
/// same shape, and winning the shape one step forward.
pub fn derive_self(theirs: Shape, outcome: Outcome) -> Shape {
    // (theirs + outcome - 1) mod 3, kept non-negative.
    Shape::from_ordinal(theirs.ordinal() + outcome.ordinal() + 2)
}

/// One line of the strategy guide.
///
/// The second column has two readings, so both are kept.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Round {
    pub theirs: Shape,
    pub mine: Shape,
    pub wanted: Outcome,
}

impl Round {
    /// Score the round reading the second column as the shape to play.
    pub fn score_as_shape(&self) -> u32 {
        score(self.mine, self.theirs)
    }

    /// Score the round reading the second column as the outcome to arrange.
    pub fn score_as_outcome(&self) -> u32 {
        score(derive_self(self.theirs, self.wanted), self.theirs)
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

impl FromStr for Round {
    type Err = Error;
    fn from_str(s: &str) -> Result<Round, Error> {
        let (first, second) = s
            .split(' ')
            .map(single_char)
            .collect_tuple()
            .ok_or_else(|| format_err!("round should be two symbols separated by a space: {:?}", s))?;
        let (first, second) = match (first, second) {
            (Some(first), Some(second)) => (first, second),
            _ => return Err(format_err!("round symbols should be single letters: {:?}", s)),
        };

        Ok(Round {
            theirs: Shape::from_opponent(first)?,
            mine: Shape::from_self(second)?,
            wanted: Outcome::from_symbol(second)?,
        })
    }
}

/// Return the total score for every round in `input`, under each reading of
/// the second column: `(as shapes, as outcomes)`.
pub fn total_scores(input: &str) -> Result<(u32, u32), Error> {
    let mut as_shapes = 0;
    let mut as_outcomes = 0;
    for line in records(input) {
        let round = Round::from_str(line)?;
        debug!(
            "{:?}: shape score {}, outcome score {}",
            round,
            round.score_as_shape(),
            round.score_as_outcome()
        );
        as_shapes += round.score_as_shape();
        as_outcomes += round.score_as_outcome();
    }
    Ok((as_shapes, as_outcomes))
}

#[cfg(test)]
mod test {
    use super::*;
    use cartesian_product;

    fn all_pairs() -> impl Iterator<Item = (Shape, Shape)> {
        cartesian_product(Shape::ALL.to_vec(), Shape::ALL.to_vec())
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Shape::from_opponent('A').unwrap(), Shape::Rock);
        assert_eq!(Shape::from_opponent('C').unwrap(), Shape::Scissors);
        assert_eq!(Shape::from_self('Y').unwrap(), Shape::Paper);
        assert_eq!(Outcome::from_symbol('Z').unwrap(), Outcome::Win);

        // The two alphabets don't overlap.
        assert!(Shape::from_opponent('X').is_err());
        assert!(Shape::from_self('A').is_err());
        assert!(Outcome::from_symbol('B').is_err());
        assert!(Shape::from_opponent('a').is_err());
    }

    #[test]
    fn test_ordinals() {
        for (i, &shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape.ordinal(), i as u32);
            assert_eq!(Shape::from_ordinal(i as u32), shape);
            assert_eq!(Shape::from_ordinal(i as u32 + 3), shape);
        }
    }

    #[test]
    fn test_outcome_of() {
        assert_eq!(Outcome::of(Shape::Paper, Shape::Rock), Outcome::Win);
        assert_eq!(Outcome::of(Shape::Rock, Shape::Scissors), Outcome::Win);
        assert_eq!(Outcome::of(Shape::Scissors, Shape::Paper), Outcome::Win);
        assert_eq!(Outcome::of(Shape::Rock, Shape::Paper), Outcome::Lose);
        assert_eq!(Outcome::of(Shape::Scissors, Shape::Rock), Outcome::Lose);
        assert_eq!(Outcome::of(Shape::Paper, Shape::Paper), Outcome::Draw);
    }

    #[test]
    fn test_score() {
        // Paper against rock: 2 for paper, 6 for the win.
        assert_eq!(score(Shape::Paper, Shape::Rock), 8);
        assert_eq!(score(Shape::Rock, Shape::Paper), 1);
        assert_eq!(score(Shape::Scissors, Shape::Scissors), 6);

        for (mine, theirs) in all_pairs() {
            let total = score(mine, theirs);
            assert!(1 <= total && total <= 9);
            let bonus = total - (mine.ordinal() + 1);
            assert_eq!(Outcome::ALL.iter().filter(|o| o.bonus() == bonus).count(), 1);
        }
    }

    #[test]
    fn test_every_outcome_occurs_once_per_shape() {
        for &theirs in &Shape::ALL {
            for &outcome in &Outcome::ALL {
                let count = Shape::ALL
                    .iter()
                    .filter(|&&mine| Outcome::of(mine, theirs) == outcome)
                    .count();
                assert_eq!(count, 1);
            }
        }
    }

    #[test]
    fn test_derive_self() {
        assert_eq!(derive_self(Shape::Rock, Outcome::Draw), Shape::Rock);
        assert_eq!(derive_self(Shape::Rock, Outcome::Lose), Shape::Scissors);
        assert_eq!(derive_self(Shape::Paper, Outcome::Lose), Shape::Rock);
        assert_eq!(derive_self(Shape::Scissors, Outcome::Win), Shape::Rock);

        for &theirs in &Shape::ALL {
            for &outcome in &Outcome::ALL {
                let mine = derive_self(theirs, outcome);
                assert_eq!(Outcome::of(mine, theirs), outcome);
                assert_eq!(score(mine, theirs) - (mine.ordinal() + 1), outcome.bonus());
            }
        }
    }

    #[test]
    fn test_derive_self_round_trip() {
        for (mine, theirs) in all_pairs() {
            assert_eq!(derive_self(theirs, Outcome::of(mine, theirs)), mine);
        }
    }

    #[test]
    fn test_parse_round() -> Result<(), Error> {
        assert_eq!(
            Round::from_str("A Y")?,
            Round {
                theirs: Shape::Rock,
                mine: Shape::Paper,
                wanted: Outcome::Draw,
            }
        );
        assert!(Round::from_str("").is_err());
        assert!(Round::from_str("A").is_err());
        assert!(Round::from_str("A  Y").is_err());
        assert!(Round::from_str("A Y Z").is_err());
        assert!(Round::from_str("AB Y").is_err());
        assert!(Round::from_str("X A").is_err());
        assert!(Round::from_str("D Y").is_err());
        Ok(())
    }

    #[test]
    fn test_round_scores() -> Result<(), Error> {
        let round = Round::from_str("A Y")?;
        assert_eq!(round.score_as_shape(), 8);
        assert_eq!(round.score_as_outcome(), 4);

        let round = Round::from_str("B X")?;
        assert_eq!(round.score_as_shape(), 1);
        assert_eq!(round.score_as_outcome(), 1);

        let round = Round::from_str("C Z")?;
        assert_eq!(round.score_as_shape(), 6);
        assert_eq!(round.score_as_outcome(), 7);
        Ok(())
    }

    #[test]
    fn test_total_scores() -> Result<(), Error> {
        assert_eq!(total_scores("A Y\nB X\nC Z\n")?, (15, 12));
        assert_eq!(total_scores("")?, (0, 0));
        assert!(total_scores("A Y\nB Q\n").is_err());
        Ok(())
    }
}
