// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Counts strict increases between consecutive values; an input shorter
/// than one window yields zero.
fn ascents(values: impl Iterator<Item = u64>) -> usize {
	use itertools::Itertools as _;
	values
		.tuple_windows()
		.filter(|(prev, next)| next > prev)
		.count()
}


fn measurements_from_str(s: &str) -> anyhow::Result<Vec<u64>> {
	Ok(parsing::measurements_from_str(s).collect::<Result<_, _>>()?)
}


fn part1_impl(measurements: impl Iterator<Item = u64>) -> usize {
	ascents(measurements)
}

pub(crate) fn part1(input: &str) -> anyhow::Result<String> {
	let count = part1_impl(measurements_from_str(input)?.into_iter());
	Ok(format!("Increasing measurements: {count}"))
}


fn part2_impl(measurements: impl Iterator<Item = u64>) -> usize {
	use itertools::Itertools as _;
	ascents(measurements.tuple_windows().map(|(a, b, c)| a + b + c))
}

pub(crate) fn part2(input: &str) -> anyhow::Result<String> {
	let count = part2_impl(measurements_from_str(input)?.into_iter());
	Ok(format!("Increasing window sums: {count}"))
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	#[error("invalid measurement {token:?} ({source})")]
	pub(super) struct MeasurementError {
		token: String,
		source: ParseIntError,
	}

	pub(super) fn measurements_from_str(s: &str)
	-> impl Iterator<Item = Result<u64, MeasurementError>> + '_ {
		s.split_whitespace()
			.map(|token| token.parse()
				.map_err(|source| MeasurementError { token: token.to_owned(), source }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		199
		200
		208
		210
		200
		207
		240
		269
		260
		263
	" };
	let measurements = measurements_from_str(INPUT).unwrap();
	assert_eq!(part1_impl(measurements.iter().copied()), 7);
	assert_eq!(part2_impl(measurements.into_iter()), 5);

	// Inputs shorter than the window produce no windows, no ascents.
	assert_eq!(part1_impl(std::iter::empty()), 0);
	assert_eq!(part1_impl([199].into_iter()), 0);
	assert_eq!(part2_impl([199, 200, 208].into_iter()), 0);

	assert!(measurements_from_str("199 two-hundred 208").is_err());
}
