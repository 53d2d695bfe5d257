#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;

pub mod calories;
pub mod input;
pub mod rps;
pub mod rucksack;
pub mod sections;

/// Return an iterator over every pair `(i, j)` with `i` drawn from `a` and `j`
/// from `b`, varying `j` fastest.
pub fn cartesian_product<A, B>(a: A, b: B) -> impl Iterator<Item=(A::Item, B::Item)>
where A: IntoIterator,
      B: IntoIterator,
      A::Item: Clone,
      B::IntoIter: Clone,
{
    let a = a.into_iter();
    let b = b.into_iter();
    a.flat_map(move |i| b.clone().map(move |j| (i.clone(), j)))
}

#[test]
fn test_cartesian_product() {
    assert_eq!(cartesian_product(0..2, "ab".chars()).collect::<Vec<_>>(),
               vec![(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b')]);
    assert_eq!(cartesian_product(0..0, 0..3).count(), 0);
}
