extern crate advent_of_code_2022 as aoc;
extern crate env_logger;
extern crate failure;

use aoc::input::read_input;
use aoc::rucksack;
use failure::Error;

#[allow(dead_code)]
static TEST_INPUT: &str = include_str!("../../data/examples/03.txt");

fn main() -> Result<(), Error> {
    env_logger::init();
    let input = read_input(3)?;

    println!("misplaced item priorities: {}", rucksack::part1(&input)?);
    println!("badge priorities: {}", rucksack::part2(&input)?);

    Ok(())
}

#[test]
fn test_example() -> Result<(), Error> {
    assert_eq!(rucksack::part1(TEST_INPUT)?, 157);
    assert_eq!(rucksack::part2(TEST_INPUT)?, 70);
    Ok(())
}
