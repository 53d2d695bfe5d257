//! Tracking the largest group totals in a list of numbers separated into groups
//! by blank lines.

use failure::Error;
use std::fmt;
use std::str::{FromStr, Lines};

/// An iterator over the totals of the blank-line-separated groups of numbers
/// in some text, in order of appearance.
///
/// Every blank line ends the current group, so two blank lines in a row
/// produce a group whose total is zero. The end of the text ends the last group
/// only if it holds at least one number; a trailing blank line doesn't produce
/// an extra empty group.
pub struct GroupTotals<'a> {
    lines: Lines<'a>,
}

pub fn group_totals(input: &str) -> GroupTotals {
    GroupTotals {
        lines: input.lines(),
    }
}

impl<'a> Iterator for GroupTotals<'a> {
    type Item = Result<u64, Error>;

    fn next(&mut self) -> Option<Result<u64, Error>> {
        let mut total: u64 = 0;
        let mut pending = false;
        for line in &mut self.lines {
            let line = line.trim();
            if line.is_empty() {
                return Some(Ok(total));
            }
            let number = match u64::from_str(line) {
                Ok(number) => number,
                Err(_) => return Some(Err(format_err!("bad number in input: {:?}", line))),
            };
            total = match total.checked_add(number) {
                Some(total) => total,
                None => return Some(Err(format_err!("group total overflowed at {:?}", line))),
            };
            pending = true;
        }

        if pending {
            Some(Ok(total))
        } else {
            None
        }
    }
}

/// The three largest group totals seen so far, with the 1-based numbers of the
/// groups they came from.
///
/// `values` is always sorted in decreasing order, and `groups[i]` is the group
/// that produced `values[i]`. Slots that haven't been filled yet hold zero in
/// both arrays.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TopThree {
    values: [u64; 3],
    groups: [usize; 3],
}

impl TopThree {
    /// Consider the total for `group`, keeping it if it beats one of the
    /// current three.
    ///
    /// Only a strictly larger total displaces an entry, so among equal totals
    /// the one seen first ranks higher.
    pub fn offer(&mut self, group: usize, total: u64) {
        let slot = match self.values.iter().position(|&value| total > value) {
            None => return,
            Some(slot) => slot,
        };

        for i in (slot + 1..3).rev() {
            self.values[i] = self.values[i - 1];
            self.groups[i] = self.groups[i - 1];
        }
        self.values[slot] = total;
        self.groups[slot] = group;
    }

    /// Build a `TopThree` from a stream of group totals, numbering the groups
    /// from 1. Stop at the first error.
    pub fn from_totals<I>(totals: I) -> Result<TopThree, Error>
    where
        I: IntoIterator<Item = Result<u64, Error>>,
    {
        let mut top = TopThree::default();
        for (index, total) in totals.into_iter().enumerate() {
            let total = total?;
            debug!("group {}: {}", index + 1, total);
            top.offer(index + 1, total);
        }
        Ok(top)
    }

    pub fn values(&self) -> [u64; 3] {
        self.values
    }

    pub fn groups(&self) -> [usize; 3] {
        self.groups
    }

    pub fn largest(&self) -> u64 {
        self.values[0]
    }

    pub fn sum(&self) -> u64 {
        self.values.iter().sum()
    }

    /// The largest total plus the group numbers of the second and third
    /// largest.
    ///
    /// This adds a total to two group numbers, so it isn't a meaningful
    /// quantity. It reproduces the figure that older runs of this puzzle
    /// reported, so answers can be compared against them.
    pub fn legacy_composite(&self) -> u64 {
        self.values[0] + self.groups[1] as u64 + self.groups[2] as u64
    }
}

impl fmt::Display for TopThree {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:?} from groups {:?}", self.values, self.groups)
    }
}
