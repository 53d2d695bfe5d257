extern crate advent_of_code_2022 as aoc;
extern crate env_logger;
extern crate failure;

use aoc::input::read_input;
use aoc::sections::{count_contained, count_overlapping};
use failure::Error;

#[allow(dead_code)]
static TEST_INPUT: &str = include_str!("../../data/examples/04.txt");

fn main() -> Result<(), Error> {
    env_logger::init();
    let input = read_input(4)?;

    println!("pairs where one contains the other: {}", count_contained(&input)?);
    println!("pairs that overlap: {}", count_overlapping(&input)?);

    Ok(())
}

#[test]
fn test_example() -> Result<(), Error> {
    assert_eq!(count_contained(TEST_INPUT)?, 2);
    assert_eq!(count_overlapping(TEST_INPUT)?, 4);
    Ok(())
}
