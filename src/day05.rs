// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Vent {
	from: [i32; 2],
	to: [i32; 2],
}

impl Vent {
	fn is_axis_aligned(&self) -> bool {
		self.from[0] == self.to[0] || self.from[1] == self.to[1]
	}

	// Parsing guarantees the vent is axis-aligned or 45°-diagonal, so
	// stepping both axes by their signum walks exactly the covered points.
	fn points(&self) -> impl Iterator<Item = [i32; 2]> {
		let Self { from, to } = *self;
		let step = [(to[0] - from[0]).signum(), (to[1] - from[1]).signum()];
		let len = (to[0] - from[0]).abs().max((to[1] - from[1]).abs());
		(0..=len).map(move |i| [from[0] + i * step[0], from[1] + i * step[1]])
	}
}


fn input_vents_from_str(s: &str) -> anyhow::Result<Vec<Vent>> {
	Ok(parsing::vents_from_str(s).collect::<Result<_, _>>()?)
}

/// Counts grid points covered by at least two vents.
fn overlaps(vents: impl Iterator<Item = Vent>) -> usize {
	let mut covered = HashMap::new();
	for vent in vents {
		for point in vent.points() {
			*covered.entry(point).or_insert(0_usize) += 1;
		}
	}
	covered.into_values().filter(|&count| count >= 2).count()
}


fn part1_impl(vents: impl Iterator<Item = Vent>) -> usize {
	overlaps(vents.filter(Vent::is_axis_aligned))
}

pub(crate) fn part1(input: &str) -> anyhow::Result<String> {
	let count = part1_impl(input_vents_from_str(input)?.into_iter());
	Ok(format!("Points covered by overlapping vents: {count}"))
}


fn part2_impl(vents: impl Iterator<Item = Vent>) -> usize {
	overlaps(vents)
}

pub(crate) fn part2(input: &str) -> anyhow::Result<String> {
	let count = part2_impl(input_vents_from_str(input)?.into_iter());
	Ok(format!("Points covered by overlapping vents (incl. diagonal): {count}"))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Vent;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum VentError {
		#[error("missing \"->\" separator")]
		Format,
		#[error("invalid coordinate pair {found:?}")]
		Point { found: String },
		#[error("invalid coordinate ({0})")]
		Coord(#[from] ParseIntError),
		#[error("vent is neither axis-aligned nor diagonal")]
		Skew,
	}

	fn point_from_str(s: &str) -> Result<[i32; 2], VentError> {
		let (x, y) = s.trim().split_once(',')
			.ok_or_else(|| VentError::Point { found: s.trim().to_owned() })?;
		Ok([x.trim().parse()?, y.trim().parse()?])
	}

	impl FromStr for Vent {
		type Err = VentError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (from, to) = s.split_once("->").ok_or(VentError::Format)?;
			let (from, to) = (point_from_str(from)?, point_from_str(to)?);
			let (dx, dy) = (to[0] - from[0], to[1] - from[1]);
			if dx != 0 && dy != 0 && dx.abs() != dy.abs() { return Err(VentError::Skew) }
			Ok(Vent { from, to })
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("line {line}: {source}")]
	pub(super) struct VentsError {
		line: usize,
		source: VentError,
	}

	pub(super) fn vents_from_str(s: &str)
	-> impl Iterator<Item = Result<Vent, VentsError>> + '_ {
		s.lines().enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|source| VentsError { line: l + 1, source }))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		0,9 -> 5,9
		8,0 -> 0,8
		9,4 -> 3,4
		2,2 -> 2,1
		7,0 -> 7,4
		6,4 -> 2,0
		0,9 -> 2,9
		3,4 -> 1,4
		0,0 -> 8,8
		5,5 -> 8,2
	" };

	#[test]
	fn parse() {
		let vents = input_vents_from_str(INPUT).unwrap();
		assert_eq!(vents[0], Vent { from: [0, 9], to: [5, 9] });
		assert_eq!(vents[1], Vent { from: [8, 0], to: [0, 8] });
		assert_eq!(vents.len(), 10);

		assert!("0,9 5,9".parse::<Vent>().is_err());
		assert!("0,x -> 5,9".parse::<Vent>().is_err());
		assert!("0,0 -> 2,5".parse::<Vent>().is_err());
	}

	#[test]
	fn points() {
		let points = "9,7 -> 7,9".parse::<Vent>().unwrap().points().collect::<Vec<_>>();
		assert_eq!(points, [[9, 7], [8, 8], [7, 9]]);
		let points = "1,1 -> 1,1".parse::<Vent>().unwrap().points().collect::<Vec<_>>();
		assert_eq!(points, [[1, 1]]);
	}

	#[test]
	fn overlapping() {
		let vents = input_vents_from_str(INPUT).unwrap();
		assert_eq!(part1_impl(vents.iter().copied()), 5);
		assert_eq!(part2_impl(vents.into_iter()), 12);

		assert_eq!(part1_impl(std::iter::empty()), 0);
	}
}
