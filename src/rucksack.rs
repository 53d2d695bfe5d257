//! Finding the items rucksacks have in common.
//!
//! Each line of input lists the items in one rucksack, one letter per item.
//! The first half of the line is one compartment, the second half the other.

use failure::Error;
use input::records;
use itertools::Itertools;

/// Return the priority of `item`: `a` through `z` are 1 through 26, and `A`
/// through `Z` are 27 through 52.
pub fn priority(item: char) -> Result<u32, Error> {
    match item {
        'a'..='z' => Ok(item as u32 - 'a' as u32 + 1),
        'A'..='Z' => Ok(item as u32 - 'A' as u32 + 27),
        _ => Err(format_err!("not an item: {:?}", item)),
    }
}

/// Return the item that appears in both compartments of `rucksack`.
///
/// If the compartments share more than one item, return the one that comes
/// first in the first compartment.
pub fn shared_in_halves(rucksack: &str) -> Result<char, Error> {
    if !rucksack.is_ascii() || rucksack.len() % 2 != 0 {
        return Err(format_err!("rucksack can't be split evenly: {:?}", rucksack));
    }
    let (left, right) = rucksack.split_at(rucksack.len() / 2);
    left.chars()
        .find(|&item| right.contains(item))
        .ok_or_else(|| format_err!("compartments have nothing in common: {:?}", rucksack))
}

/// Return the first item of `a` that also appears in both `b` and `c`.
pub fn badge(a: &str, b: &str, c: &str) -> Result<char, Error> {
    a.chars()
        .find(|&item| b.contains(item) && c.contains(item))
        .ok_or_else(|| format_err!("group has no badge: {:?}", (a, b, c)))
}

/// Sum the priorities of the items shared between each rucksack's
/// compartments.
pub fn part1(input: &str) -> Result<u32, Error> {
    let mut sum = 0;
    for rucksack in records(input) {
        let item = shared_in_halves(rucksack)?;
        debug!("{}: {:?}", rucksack, item);
        sum += priority(item)?;
    }
    Ok(sum)
}

/// Sum the priorities of the badges of each consecutive group of three
/// rucksacks.
pub fn part2(input: &str) -> Result<u32, Error> {
    let rucksacks: Vec<&str> = records(input).collect();
    if rucksacks.len() % 3 != 0 {
        return Err(format_err!(
            "{} rucksacks can't be split into groups of three",
            rucksacks.len()
        ));
    }

    let mut sum = 0;
    for (a, b, c) in rucksacks.into_iter().tuples() {
        let item = badge(a, b, c)?;
        debug!("badge {:?}", item);
        sum += priority(item)?;
    }
    Ok(sum)
}
