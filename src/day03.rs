// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


struct Diagnostic {
	width: u32,
	numbers: Vec<u32>,
}

impl Diagnostic {
	fn ones(numbers: &[u32], bit: u32) -> usize {
		numbers.iter().filter(|&&number| number >> bit & 1 == 1).count()
	}

	/// Builds a rate by choosing one bit per column, most significant first;
	/// `choose` maps a column's ones/zeros counts to the chosen bit.
	fn rate(&self, choose: impl Fn(usize, usize) -> u32) -> u32 {
		(0..self.width).rev().fold(0, |rate, bit| {
			let ones = Self::ones(&self.numbers, bit);
			rate << 1 | choose(ones, self.numbers.len() - ones)
		})
	}

	fn gamma_rate(&self) -> u32 {
		self.rate(|ones, zeros| u32::from(ones > zeros))
	}

	fn epsilon_rate(&self) -> u32 {
		self.rate(|ones, zeros| u32::from(ones <= zeros))
	}

	fn power_consumption(&self) -> u64 {
		u64::from(self.gamma_rate()) * u64::from(self.epsilon_rate())
	}

	/// Narrows the numbers column by column, keeping those whose bit matches
	/// `choose` of the remaining candidates, until a single rating is left.
	fn filtered_rate(&self, choose: impl Fn(usize, usize) -> u32) -> Option<u32> {
		let mut candidates = self.numbers.clone();
		for bit in (0..self.width).rev() {
			if candidates.len() <= 1 { break }
			let ones = Self::ones(&candidates, bit);
			let keep = choose(ones, candidates.len() - ones);
			candidates.retain(|&number| number >> bit & 1 == keep);
		}
		match candidates[..] { [rating] => Some(rating), _ => None }
	}

	fn oxygen_rating(&self) -> Option<u32> {
		self.filtered_rate(|ones, zeros| u32::from(ones >= zeros))
	}

	fn co2_rating(&self) -> Option<u32> {
		self.filtered_rate(|ones, zeros| u32::from(ones < zeros))
	}

	fn life_support_rating(&self) -> Option<u64> {
		Some(u64::from(self.oxygen_rating()?) * u64::from(self.co2_rating()?))
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<String> {
	let diagnostic: Diagnostic = input.parse()?;
	Ok(format!("Power consumption: {}", diagnostic.power_consumption()))
}

pub(crate) fn part2(input: &str) -> anyhow::Result<String> {
	let diagnostic: Diagnostic = input.parse()?;
	let rating = diagnostic.life_support_rating()
		.context("bit filtering left no single rating")?;
	Ok(format!("Life support rating: {rating}"))
}


mod parsing {
	use std::str::FromStr;
	use super::Diagnostic;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum DiagnosticError {
		#[error("empty diagnostic report")]
		Empty,
		#[error("invalid bit {found:?} on line {line}")]
		Bit { line: usize, found: char },
		#[error("line {line} is {found} bits wide, expected {expected}")]
		Width { line: usize, found: usize, expected: usize },
		#[error("line {line} is {found} bits wide, at most 32 supported")]
		TooWide { line: usize, found: usize },
	}

	impl FromStr for Diagnostic {
		type Err = DiagnosticError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use DiagnosticError::*;
			let mut width = None;
			let mut numbers = Vec::new();
			for (l, line) in s.lines().enumerate() {
				let line = line.trim();
				if line.is_empty() { continue }
				let expected = *width.get_or_insert(line.len());
				// Numbers are held in `u32`s; a wider line would overflow the shift.
				if expected > 32 {
					return Err(TooWide { line: l + 1, found: expected })
				}
				if line.len() != expected {
					return Err(Width { line: l + 1, found: line.len(), expected })
				}
				numbers.push(line.chars().try_fold(0, |number, chr| match chr {
					'0' => Ok(number << 1),
					'1' => Ok(number << 1 | 1),
					found => Err(Bit { line: l + 1, found }),
				})?);
			}
			Ok(Diagnostic { width: width.ok_or(Empty)? as u32, numbers })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		00100
		11110
		10110
		10111
		10101
		01111
		00111
		11100
		10000
		11001
		00010
		01010
	" };

	#[test]
	fn rates() {
		let diagnostic: Diagnostic = INPUT.parse().unwrap();
		assert_eq!(diagnostic.gamma_rate(), 22);
		assert_eq!(diagnostic.epsilon_rate(), 9);
		assert_eq!(diagnostic.power_consumption(), 198);
	}

	#[test]
	fn ratings() {
		let diagnostic: Diagnostic = INPUT.parse().unwrap();
		assert_eq!(diagnostic.oxygen_rating(), Some(23));
		assert_eq!(diagnostic.co2_rating(), Some(10));
		assert_eq!(diagnostic.life_support_rating(), Some(230));
	}

	#[test]
	fn parse_errors() {
		assert!("".parse::<Diagnostic>().is_err());
		assert!("10201".parse::<Diagnostic>().is_err());
		assert!("101\n10".parse::<Diagnostic>().is_err());
		assert!("1".repeat(33).parse::<Diagnostic>().is_err());
		assert!("0".repeat(32).parse::<Diagnostic>().is_ok());
	}
}
