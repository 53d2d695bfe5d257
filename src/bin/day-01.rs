extern crate advent_of_code_2022 as aoc;
extern crate env_logger;
extern crate failure;

use aoc::calories::{group_totals, TopThree};
use aoc::input::read_input;
use failure::Error;

#[allow(dead_code)]
static TEST_INPUT: &str = include_str!("../../data/examples/01.txt");

fn main() -> Result<(), Error> {
    env_logger::init();
    let input = read_input(1)?;

    let top = TopThree::from_totals(group_totals(&input))?;
    println!("top three: {}", top);
    println!("largest total: {}", top.largest());
    println!("sum of top three: {}", top.sum());
    println!("legacy composite: {}", top.legacy_composite());

    Ok(())
}

#[test]
fn test_example() -> Result<(), Error> {
    let top = TopThree::from_totals(group_totals(TEST_INPUT))?;
    assert_eq!(top.largest(), 24000);
    assert_eq!(top.sum(), 45000);
    assert_eq!(top.groups(), [4, 3, 5]);
    Ok(())
}
