// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Declares the `dayNN` solver modules and generates `run_day`, which
/// dispatches a `(day, stage)` selection to the matching `partN` function.
macro_rules! mod_days {
	( $( $day:literal ),+ $(,)? ) => { paste::paste! {
		$( mod [<day $day>]; )+

		pub(crate) fn run_day(day: u8, stage: crate::Stage, input: &str) -> anyhow::Result<String> {
			match day {
				$( $day => match stage {
					crate::Stage::Stage1 => [<day $day>]::part1(input),
					crate::Stage::Stage2 => [<day $day>]::part2(input),
				}, )+
				day => anyhow::bail!("no solver for day {day}"),
			}
		}
	} };
}
pub(crate) use mod_days;
