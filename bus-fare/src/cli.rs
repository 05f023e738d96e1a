//! Interactive prompt loop for the card reader.
//!
//! Owns all user-facing messages, input validation, retry loops, and
//! formatting. The fare core is driven only through its public API, and
//! only once inputs are syntactically and range-valid.
//!
//! The loop is generic over [`BufRead`] and [`Write`] so tests can drive
//! it with in-memory buffers.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::card::{MIN_ENTRY_BALANCE, SmartCard};
use crate::domain::{Day, Route, Stop, SwipeTime, Trip};
use crate::fare::{FareSchedule, calculate_fare};

/// Outcome of one completed trip, for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct TripReceipt {
    pub day: Day,
    pub swipe_in_time: String,
    pub stops_travelled: u32,
    pub fare: f64,
    pub remaining_balance: f64,
}

/// Run one trip end to end: prompt, validate, swipe in, charge, swipe out.
///
/// With `json` set, a machine-readable receipt is printed after a
/// successful trip.
pub fn run(input: &mut impl BufRead, output: &mut impl Write, json: bool) -> io::Result<()> {
    writeln!(
        output,
        "------------------Bus Smart Card System----------------------------"
    )?;
    writeln!(output)?;

    let balance = prompt_balance(input, output)?;
    let mut card = SmartCard::new(balance);
    let route = Route::new();
    let schedule = FareSchedule::default();

    let swipe_in_time = prompt_time(input, output)?;
    let swipe_in_day = prompt_day(input, output)?;
    let (start, end) = prompt_stops(input, output, &route)?;

    if let Err(e) = card.swipe_in() {
        writeln!(output, "Insufficient balance to swipe in! ({e})")?;
        return Ok(());
    }
    writeln!(output, "Swipe in successful!")?;

    let trip = Trip::new(swipe_in_time, swipe_in_day, start, end);
    let fare = calculate_fare(&schedule, &trip);
    writeln!(output, "Calculated Fare: ${fare:.2}")?;

    match card.deduct(fare) {
        Ok(()) => {
            writeln!(
                output,
                "Swipe out successful! Remaining Balance: ${:.2}",
                card.balance()
            )?;

            if json {
                let receipt = TripReceipt {
                    day: swipe_in_day,
                    swipe_in_time: swipe_in_time.to_string(),
                    stops_travelled: trip.stops_travelled(),
                    fare,
                    remaining_balance: card.balance(),
                };
                let rendered = serde_json::to_string_pretty(&receipt)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(output, "{rendered}")?;
            }
        }
        Err(e) => {
            writeln!(output, "{e}")?;
        }
    }

    Ok(())
}

/// Read one line, trimmed. EOF is an error: the loop cannot continue
/// without input.
fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

/// Prompt for the initial balance until it is a number of at least the
/// entry minimum.
fn prompt_balance(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<f64> {
    loop {
        write!(output, "Enter the initial balance on the smart card: ")?;
        output.flush()?;

        let line = read_line(input)?;
        match line.parse::<f64>() {
            Ok(balance) if balance >= MIN_ENTRY_BALANCE => return Ok(balance),
            Ok(_) => writeln!(
                output,
                "Insufficient balance to swipe in! Minimum balance of ${MIN_ENTRY_BALANCE:.0} required. Please enter again."
            )?,
            Err(_) => writeln!(output, "Invalid amount! Please enter a number.")?,
        }
    }
}

/// Prompt for the swipe-in time until it parses as HH:MM.
fn prompt_time(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<SwipeTime> {
    loop {
        write!(output, "Enter swipe-in time in HH:MM (24-hour format): ")?;
        output.flush()?;

        let line = read_line(input)?;
        match SwipeTime::parse_hhmm(&line) {
            Ok(time) => return Ok(time),
            Err(_) => writeln!(
                output,
                "Invalid time format! Please enter time in HH:MM (24-hour format)."
            )?,
        }
    }
}

/// Prompt for the day of the week until it matches a full day name.
fn prompt_day(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Day> {
    loop {
        write!(output, "Enter the day of the week (e.g., Monday, Saturday): ")?;
        output.flush()?;

        let line = read_line(input)?;
        match Day::parse(&line) {
            Ok(day) => return Ok(day),
            Err(_) => writeln!(output, "Invalid day! Please enter a valid day of the week.")?,
        }
    }
}

/// Prompt for the start and end stops until both are in range.
fn prompt_stops(
    input: &mut impl BufRead,
    output: &mut impl Write,
    route: &Route,
) -> io::Result<(Stop, Stop)> {
    loop {
        write!(output, "Enter the starting stop (1 to {}): ", route.len())?;
        output.flush()?;
        let start_line = read_line(input)?;

        write!(output, "Enter the ending stop (1 to {}): ", route.len())?;
        output.flush()?;
        let end_line = read_line(input)?;

        let (Ok(start_num), Ok(end_num)) = (start_line.parse::<u8>(), end_line.parse::<u8>())
        else {
            writeln!(output, "Invalid input! Please enter valid integers for the stops.")?;
            continue;
        };

        match (Stop::new(start_num), Stop::new(end_num)) {
            (Ok(start), Ok(end)) => return Ok((start, end)),
            _ => writeln!(
                output,
                "Invalid stop numbers! Please enter numbers between 1 and {}.",
                route.len()
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(input: &str, json: bool) -> String {
        let mut reader = Cursor::new(input.as_bytes());
        let mut output = Vec::new();
        run(&mut reader, &mut output, json).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn happy_path_weekday_trip() {
        let output = run_with("15\n14:00\nMonday\n1\n4\n", false);

        assert!(output.contains("Swipe in successful!"));
        assert!(output.contains("Calculated Fare: $2.40"));
        assert!(output.contains("Swipe out successful! Remaining Balance: $12.60"));
    }

    #[test]
    fn night_weekend_trip_with_tier_discount() {
        let output = run_with("15\n02:00\nSunday\n1\n15\n", false);

        // 5 * 0.60 + 9 * 0.60 * 0.8 = 7.32, then * 0.9 = 6.588
        assert!(output.contains("Calculated Fare: $6.59"));
        assert!(output.contains("Remaining Balance: $8.41"));
    }

    #[test]
    fn balance_reprompted_until_sufficient() {
        let output = run_with("5\nabc\n15\n14:00\nMonday\n1\n4\n", false);

        assert!(output.contains("Minimum balance of $10 required"));
        assert!(output.contains("Invalid amount!"));
        assert!(output.contains("Swipe in successful!"));
    }

    #[test]
    fn time_reprompted_until_valid() {
        let output = run_with("15\n25:00\n1430\n14:00\nMonday\n1\n4\n", false);

        assert_eq!(output.matches("Invalid time format!").count(), 2);
        assert!(output.contains("Calculated Fare: $2.40"));
    }

    #[test]
    fn day_reprompted_until_exact_match() {
        let output = run_with("15\n14:00\nmonday\nMon\nMonday\n1\n4\n", false);

        assert_eq!(output.matches("Invalid day!").count(), 2);
        assert!(output.contains("Swipe in successful!"));
    }

    #[test]
    fn stops_reprompted_on_range_and_parse_errors() {
        let output = run_with("15\n14:00\nMonday\n0\n4\nx\n4\n1\n4\n", false);

        assert!(output.contains("Invalid stop numbers!"));
        assert!(output.contains("Invalid input!"));
        assert!(output.contains("Calculated Fare: $2.40"));
    }

    #[test]
    fn same_stop_trip_is_free() {
        let output = run_with("15\n14:00\nMonday\n7\n7\n", false);

        assert!(output.contains("Calculated Fare: $0.00"));
        assert!(output.contains("Remaining Balance: $15.00"));
    }

    #[test]
    fn json_receipt_after_successful_trip() {
        let output = run_with("15\n14:00\nMonday\n1\n4\n", true);

        assert!(output.contains("\"day\": \"Monday\""));
        assert!(output.contains("\"swipe_in_time\": \"14:00\""));
        assert!(output.contains("\"stops_travelled\": 3"));
        assert!(output.contains("\"fare\": 2.4"));
        assert!(output.contains("\"remaining_balance\": 12.6"));
    }

    #[test]
    fn eof_mid_prompt_is_an_error() {
        let mut reader = Cursor::new(b"15\n" as &[u8]);
        let mut output = Vec::new();

        let err = run(&mut reader, &mut output, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
