extern crate advent_of_code_2022 as aoc;
extern crate env_logger;
extern crate failure;

use aoc::input::read_input;
use aoc::rps::total_scores;
use failure::Error;

#[allow(dead_code)]
static TEST_INPUT: &str = include_str!("../../data/examples/02.txt");

fn main() -> Result<(), Error> {
    env_logger::init();
    let input = read_input(2)?;

    let (as_shapes, as_outcomes) = total_scores(&input)?;
    println!("score reading the guide as shapes: {}", as_shapes);
    println!("score reading the guide as outcomes: {}", as_outcomes);

    Ok(())
}

#[test]
fn test_example() -> Result<(), Error> {
    assert_eq!(total_scores(TEST_INPUT)?, (15, 12));
    Ok(())
}
