//! Comparing pairs of section assignments.

use failure::Error;
use input::records;
use itertools::Itertools;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A pair of inclusive ranges of section ids, written `a-b,c-d`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assignment {
    first: RangeInclusive<u32>,
    second: RangeInclusive<u32>,
}

fn parse_range(s: &str) -> Result<RangeInclusive<u32>, Error> {
    let (start, end) = s
        .split('-')
        .collect_tuple()
        .ok_or_else(|| format_err!("range should be two numbers joined by '-': {:?}", s))?;
    let start = u32::from_str(start.trim())?;
    let end = u32::from_str(end.trim())?;
    if start > end {
        return Err(format_err!("range runs backwards: {:?}", s));
    }
    Ok(start..=end)
}

fn contains(outer: &RangeInclusive<u32>, inner: &RangeInclusive<u32>) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

impl FromStr for Assignment {
    type Err = Error;
    fn from_str(s: &str) -> Result<Assignment, Error> {
        let (first, second) = s
            .split(',')
            .collect_tuple()
            .ok_or_else(|| format_err!("assignment should be two ranges joined by ',': {:?}", s))?;
        Ok(Assignment {
            first: parse_range(first)?,
            second: parse_range(second)?,
        })
    }
}

impl Assignment {
    /// True if either range contains the other entirely.
    pub fn fully_contains(&self) -> bool {
        contains(&self.first, &self.second) || contains(&self.second, &self.first)
    }

    /// True if the ranges have any section in common.
    pub fn overlaps(&self) -> bool {
        self.first.start() <= self.second.end() && self.second.start() <= self.first.end()
    }
}

fn count_where<F>(input: &str, mut pred: F) -> Result<usize, Error>
where
    F: FnMut(&Assignment) -> bool,
{
    let mut count = 0;
    for line in records(input) {
        let assignment = Assignment::from_str(line)?;
        if pred(&assignment) {
            debug!("{:?}", assignment);
            count += 1;
        }
    }
    Ok(count)
}

pub fn count_contained(input: &str) -> Result<usize, Error> {
    count_where(input, Assignment::fully_contains)
}

pub fn count_overlapping(input: &str) -> Result<usize, Error> {
    count_where(input, Assignment::overlaps)
}
