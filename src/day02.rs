// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::fmt;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dir { Forward, Up, Down }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Command(Dir, u32);

impl fmt::Display for Dir {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Dir::Forward => "forward",
			Dir::Up => "up",
			Dir::Down => "down",
		})
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.0, self.1)
	}
}


/// Positional state folded over a command stream. Updates are functional:
/// each operation consumes the state and returns its successor.
trait Submarine: Default {
	#[must_use]
	fn dive(self, amount: i64) -> Self;
	#[must_use]
	fn advance(self, amount: i64) -> Self;
	fn end_state(&self) -> i64;
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Plain {
	depth: i64,
	pos: i64,
}

impl Submarine for Plain {
	fn dive(self, amount: i64) -> Self {
		Self { depth: self.depth + amount, ..self }
	}

	fn advance(self, amount: i64) -> Self {
		Self { pos: self.pos + amount, ..self }
	}

	fn end_state(&self) -> i64 {
		self.pos * self.depth
	}
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Aimed {
	depth: i64,
	pos: i64,
	aim: i64,
}

impl Submarine for Aimed {
	fn dive(self, amount: i64) -> Self {
		Self { aim: self.aim + amount, ..self }
	}

	// Depth shifts by the aim as it stood before this command.
	fn advance(self, amount: i64) -> Self {
		Self { pos: self.pos + amount, depth: self.depth + amount * self.aim, ..self }
	}

	fn end_state(&self) -> i64 {
		self.pos * self.depth
	}
}


fn input_commands_from_str(s: &str) -> impl Iterator<Item = Command> + '_ {
	s.lines().filter_map(parsing::command_from_str)
}

/// Left-folds the command stream from the zero state, strictly in input
/// order. `Up` inverts its amount's sign here, never inside the state types.
fn navigate<S: Submarine + fmt::Debug>(commands: impl Iterator<Item = Command>) -> S {
	let sub = commands.fold(S::default(), |sub, Command(dir, amount)| match dir {
		Dir::Up => sub.dive(-i64::from(amount)),
		Dir::Down => sub.dive(i64::from(amount)),
		Dir::Forward => sub.advance(i64::from(amount)),
	});
	tracing::debug!(?sub, "final state");
	sub
}


fn part1_impl(commands: impl Iterator<Item = Command>) -> i64 {
	navigate::<Plain>(commands).end_state()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<String> {
	Ok(format!("End state: {}", part1_impl(input_commands_from_str(input))))
}


fn part2_impl(commands: impl Iterator<Item = Command>) -> i64 {
	navigate::<Aimed>(commands).end_state()
}

pub(crate) fn part2(input: &str) -> anyhow::Result<String> {
	Ok(format!("End state: {}", part2_impl(input_commands_from_str(input))))
}


mod parsing {
	use super::{Command, Dir};

	const DIR_WORDS: [&str; 3] = ["up", "down", "forward"];

	/// Returns the command on a line of the form `<word> <amount>`, or
	/// `None` for anything else (to be skipped by the caller).
	pub(super) fn command_from_str(line: &str) -> Option<Command> {
		let (word, amount) = line.trim().split_once(char::is_whitespace)?;
		if !DIR_WORDS.contains(&word) { return None }
		// Plain digits only; `parse` alone would also accept a leading `+`.
		let amount = amount.trim();
		if !amount.bytes().all(|b| b.is_ascii_digit()) { return None }
		let amount = amount.parse().ok()?;
		let dir = match word {
			"up" => Dir::Up,
			"down" => Dir::Down,
			"forward" => Dir::Forward,
			// `DIR_WORDS` was checked above; reaching this arm means that
			// check and this mapping disagree.
			word => unreachable!("unvetted direction word {word:?}"),
		};
		Some(Command(dir, amount))
	}
}
