// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use anyhow::Context as _;


struct Board {
	numbers: [u8; 25],
	marked: u32,
}

impl Board {
	fn draw(&mut self, number: u8) {
		for (i, &n) in self.numbers.iter().enumerate() {
			if n == number { self.marked |= 1 << i }
		}
	}

	fn winning(&self) -> bool {
		const ROW: u32 = 0b11111;
		const COLUMN: u32 = 0b00001_00001_00001_00001_00001;
		(0..5).any(|r| self.marked >> (5 * r) & ROW == ROW)
			|| (0..5).any(|c| self.marked >> c & COLUMN == COLUMN)
	}

	fn unmarked_sum(&self) -> u32 {
		self.numbers.iter().enumerate()
			.filter(|&(i, _)| self.marked >> i & 1 == 0)
			.map(|(_, &n)| u32::from(n))
			.sum()
	}
}

struct Game {
	draws: Vec<u8>,
	boards: Vec<Board>,
}

impl Game {
	/// Plays the game to the end, returning each winning board's score in
	/// the order the boards go out. Winning boards leave the game; several
	/// may go out on a single draw (scored in board order).
	fn winning_scores(mut self) -> Vec<u32> {
		let mut scores = Vec::new();
		for draw in self.draws {
			for board in &mut self.boards {
				board.draw(draw);
			}
			let mut b = 0;
			while b < self.boards.len() {
				if self.boards[b].winning() {
					let board = self.boards.remove(b);
					let score = board.unmarked_sum() * u32::from(draw);
					tracing::debug!(draw, score, "board wins");
					scores.push(score);
				} else {
					b += 1;
				}
			}
			if self.boards.is_empty() { break }
		}
		scores
	}
}


fn part1_impl(game: Game) -> Option<u32> {
	game.winning_scores().into_iter().next()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<String> {
	let score = part1_impl(input.parse()?).context("no board ever wins")?;
	Ok(format!("First winning score: {score}"))
}


fn part2_impl(game: Game) -> Option<u32> {
	game.winning_scores().into_iter().last()
}

pub(crate) fn part2(input: &str) -> anyhow::Result<String> {
	let score = part2_impl(input.parse()?).context("no board ever wins")?;
	Ok(format!("Last winning score: {score}"))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Board, Game};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum BoardError {
		#[error("invalid number {token:?} ({source})")]
		Number { token: String, source: ParseIntError },
		#[error("found {found} numbers, expected 25")]
		Size { found: usize },
	}

	impl FromStr for Board {
		type Err = BoardError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let numbers = s.split_whitespace()
				.map(|token| token.parse()
					.map_err(|source| BoardError::Number { token: token.to_owned(), source }))
				.collect::<Result<Vec<u8>, _>>()?;
			let found = numbers.len();
			let numbers = <[u8; 25]>::try_from(numbers)
				.map_err(|_| BoardError::Size { found })?;
			Ok(Board { numbers, marked: 0 })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GameError {
		#[error("empty input")]
		Empty,
		#[error("invalid draw {token:?} ({source})")]
		Draw { token: String, source: ParseIntError },
		#[error("board {board}: {source}")]
		Board { board: usize, source: BoardError },
	}

	impl FromStr for Game {
		type Err = GameError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut blocks = s.split("\n\n").filter(|block| !block.trim().is_empty());
			let draws = blocks.next().ok_or(GameError::Empty)?
				.split(',')
				.map(|token| { let token = token.trim(); token.parse()
					.map_err(|source| GameError::Draw { token: token.to_owned(), source }) })
				.collect::<Result<_, _>>()?;
			let boards = blocks.enumerate()
				.map(|(b, block)| block.parse()
					.map_err(|source| GameError::Board { board: b + 1, source }))
				.collect::<Result<_, _>>()?;
			Ok(Game { draws, boards })
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

		22 13 17 11  0
		 8  2 23  4 24
		21  9 14 16  7
		 6 10  3 18  5
		 1 12 20 15 19

		 3 15  0  2 22
		 9 18 13 17  5
		19  8  7 25 23
		20 11 10 24  4
		14 21 16 12  6

		14 21 17 24  4
		10 16 15  9 19
		18  8 23 26 20
		22 11 13  6  5
		 2  0 12  3  7
	" };

	#[test]
	fn parse() {
		let game: Game = INPUT.parse().unwrap();
		assert_eq!(&game.draws[..4], &[7, 4, 9, 5]);
		assert_eq!(game.boards.len(), 3);
		assert_eq!(game.boards[2].numbers[..5], [14, 21, 17, 24, 4]);

		assert!("1,2,3\n\n1 2 3".parse::<Game>().is_err());
		assert!("1,x,3".parse::<Game>().is_err());
		assert!("".parse::<Game>().is_err());
	}

	#[test]
	fn winning_lines() {
		let mut board: Board = "\
			22 13 17 11  0\n 8  2 23  4 24\n21  9 14 16  7\n\
			 6 10  3 18  5\n 1 12 20 15 19".parse().unwrap();
		for number in [8, 2, 23, 4] {
			board.draw(number);
			assert!(!board.winning());
		}
		board.draw(24);
		assert!(board.winning());

		let mut board: Board = board.numbers.map(|n| n.to_string()).join(" ").parse().unwrap();
		for number in [17, 23, 14, 3] {
			board.draw(number);
			assert!(!board.winning());
		}
		board.draw(20);
		assert!(board.winning());
	}

	#[test]
	fn scores() {
		assert_eq!(part1_impl(INPUT.parse().unwrap()), Some(4512));
		assert_eq!(part2_impl(INPUT.parse().unwrap()), Some(1924));
	}

	// The first two boards complete their top rows on the draw of 5; they
	// score in board order, and the later third winner is the stage 2 result.
	#[test]
	fn same_draw_winners() {
		const INPUT: &str = indoc::indoc! { "
			1,2,3,4,5,24

			 1  2  3  4  5
			30 31 32 33 34
			35 36 37 38 39
			40 41 42 43 44
			45 46 47 48 49

			 5  4  3  2  1
			50 51 52 53 54
			55 56 57 58 59
			60 61 62 63 64
			65 66 67 68 69

			 1  2  3  4 24
			70 71 72 73 74
			75 76 77 78 79
			80 81 82 83 84
			85 86 87 88 89
		" };
		let game: Game = INPUT.parse().unwrap();
		assert_eq!(game.winning_scores(), [790 * 5, 1190 * 5, 1590 * 24]);
		assert_eq!(part1_impl(INPUT.parse().unwrap()), Some(3950));
		assert_eq!(part2_impl(INPUT.parse().unwrap()), Some(38160));
	}
}
