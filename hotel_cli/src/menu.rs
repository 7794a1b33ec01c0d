//! Interactive menu session.
//!
//! Reads choices and prompted values line by line from any `BufRead` and
//! writes all output to any `Write`, so the whole session can be driven from
//! a pipe or from tests. End of input ends the session.

use hotel_core::{
    is_before, BookingError, CalendarDate, CheckInError, Config, ReservationId, ReservationStore,
    Result, RoomNumber,
};
use std::io::{BufRead, Write};

/// How the bookings listing is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    Text,
    /// One JSON object per line
    Json,
}

/// Whether the session continues after an action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a, R, W> {
    store: &'a mut ReservationStore,
    config: &'a Config,
    format: ListFormat,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        store: &'a mut ReservationStore,
        config: &'a Config,
        format: ListFormat,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            config,
            format,
            input,
            output,
        }
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_main_menu()?;
            let Some(line) = self.prompt("Enter Your Choice: ")? else {
                break;
            };

            let flow = match line.trim() {
                "1" => {
                    write_hotel_info(&mut self.output, self.config)?;
                    Flow::Continue
                }
                "2" => self.room_booking()?,
                "3" => self.room_availability()?,
                "4" => self.check_in()?,
                "5" => self.check_out()?,
                "6" => self.cancel_booking()?,
                "7" => {
                    self.display_bookings()?;
                    Flow::Continue
                }
                "8" => self.services()?,
                "9" => {
                    writeln!(self.output, "Thank You!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid input. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "-------------- Main Menu --------------")?;
        writeln!(self.output, "1. Hotel Information")?;
        writeln!(self.output, "2. Room Booking")?;
        writeln!(self.output, "3. Room Availability")?;
        writeln!(self.output, "4. Check In")?;
        writeln!(self.output, "5. Check Out")?;
        writeln!(self.output, "6. Cancel Booking")?;
        writeln!(self.output, "7. Display All Bookings")?;
        writeln!(self.output, "8. Services")?;
        writeln!(self.output, "9. Exit")?;
        Ok(())
    }

    fn room_booking(&mut self) -> Result<Flow> {
        let limits = self.store.limits();
        if self.store.len() >= limits.max_customers {
            writeln!(self.output, "Customer limit reached. Cannot book more rooms.")?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompt_name()? else {
            return Ok(Flow::Exit);
        };
        let Some(room) = self.prompt_room()? else {
            return Ok(Flow::Exit);
        };
        let Some((check_in, check_out)) = self.prompt_stay()? else {
            return Ok(Flow::Exit);
        };

        match self.store.book(&name, room, check_in, check_out) {
            Ok(id) => writeln!(self.output, "Room booked successfully. Reservation {}.", id)?,
            Err(BookingError::RoomUnavailable { .. }) => {
                writeln!(self.output, "Room is not available for the given dates.")?
            }
            Err(e) => writeln!(self.output, "Booking failed: {}.", e)?,
        }
        Ok(Flow::Continue)
    }

    fn room_availability(&mut self) -> Result<Flow> {
        let Some(room) = self.prompt_room()? else {
            return Ok(Flow::Exit);
        };
        let Some((check_in, check_out)) = self.prompt_stay()? else {
            return Ok(Flow::Exit);
        };

        if self.store.is_room_available(room, check_in, check_out) {
            writeln!(self.output, "Room is available for the given dates.")?;
        } else {
            writeln!(self.output, "Room is not available for the given dates.")?;
        }
        Ok(Flow::Continue)
    }

    fn check_in(&mut self) -> Result<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "No bookings available for check-in.")?;
            return Ok(Flow::Continue);
        }
        let Some(room) = self.prompt_room()? else {
            return Ok(Flow::Exit);
        };

        match self.store.check_in(room) {
            Ok(id) => {
                let guest = self.guest_name(id);
                writeln!(
                    self.output,
                    "Check-in successful for {} in room number {}.",
                    guest, room
                )?;
            }
            Err(CheckInError::AlreadyCheckedIn { guest, .. }) => {
                writeln!(self.output, "Customer {} is already checked in.", guest)?;
            }
            Err(CheckInError::NotFound(_)) => {
                writeln!(self.output, "No booking found for the given room number.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn check_out(&mut self) -> Result<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "No bookings available for check-out.")?;
            return Ok(Flow::Continue);
        }
        let Some(room) = self.prompt_room()? else {
            return Ok(Flow::Exit);
        };

        match self.store.check_out(room) {
            Ok(id) => {
                let guest = self.guest_name(id);
                writeln!(
                    self.output,
                    "Check-out successful for {} from room number {}.",
                    guest, room
                )?;
            }
            Err(_) => {
                writeln!(
                    self.output,
                    "No checked-in customer found for the given room number."
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn cancel_booking(&mut self) -> Result<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "No bookings available to cancel.")?;
            return Ok(Flow::Continue);
        }
        let Some(room) = self.prompt_room()? else {
            return Ok(Flow::Exit);
        };

        match self.store.cancel(room) {
            Ok(_) => writeln!(self.output, "Booking for room {} has been canceled.", room)?,
            Err(_) => writeln!(self.output, "No booking found for room {}.", room)?,
        }
        Ok(Flow::Continue)
    }

    fn display_bookings(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No bookings available.")?;
            return Ok(());
        }
        match self.format {
            ListFormat::Text => {
                writeln!(self.output, "Current Bookings:")?;
                for reservation in self.store.list() {
                    writeln!(self.output, "{}", reservation)?;
                }
            }
            ListFormat::Json => {
                for reservation in self.store.list() {
                    let line = serde_json::to_string(reservation)?;
                    writeln!(self.output, "{}", line)?;
                }
            }
        }
        Ok(())
    }

    fn services(&mut self) -> Result<Flow> {
        let config = self.config;
        let services = &config.hotel.services;
        let back = services.len() + 1;
        let exit = services.len() + 2;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--------Service Menu--------")?;
            for (i, service) in services.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, service)?;
            }
            writeln!(self.output, "{}. Return to Main Menu", back)?;
            writeln!(self.output, "{}. Exit", exit)?;

            let Some(line) = self.prompt("Enter Your Choice: ")? else {
                return Ok(Flow::Exit);
            };

            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=services.len()).contains(&choice) => {
                    writeln!(self.output, "{}: Available", services[choice - 1])?;
                }
                Ok(choice) if choice == back => return Ok(Flow::Continue),
                Ok(choice) if choice == exit => {
                    writeln!(self.output, "Thank You!")?;
                    return Ok(Flow::Exit);
                }
                _ => writeln!(self.output, "Invalid input. Please try again.")?,
            }
        }
    }

    fn guest_name(&self, id: ReservationId) -> String {
        self.store
            .get(id)
            .map(|r| r.guest_name().to_string())
            .unwrap_or_default()
    }

    /// Write `message`, then read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            tracing::debug!("End of input reached");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_name(&mut self) -> Result<Option<String>> {
        let max_len = self.store.limits().max_name_length;
        loop {
            let Some(line) = self.prompt("\nEnter customer name: ")? else {
                return Ok(None);
            };
            let name = line.trim();
            let len = name.chars().count();
            if len > 0 && len <= max_len {
                return Ok(Some(name.to_string()));
            }
            writeln!(
                self.output,
                "Invalid name. Please enter between 1 and {} characters.",
                max_len
            )?;
        }
    }

    fn prompt_room(&mut self) -> Result<Option<RoomNumber>> {
        let max_rooms = self.store.limits().max_rooms;
        loop {
            let message = format!("Enter room number (1-{}): ", max_rooms);
            let Some(line) = self.prompt(&message)? else {
                return Ok(None);
            };
            match line.trim().parse::<RoomNumber>() {
                Ok(room) if (1..=max_rooms).contains(&room) => return Ok(Some(room)),
                _ => writeln!(
                    self.output,
                    "Invalid input. Please enter a valid room number between 1 and {}.",
                    max_rooms
                )?,
            }
        }
    }

    fn prompt_date(&mut self, label: &str) -> Result<Option<CalendarDate>> {
        loop {
            let message = format!("Enter {} date (dd mm yyyy): ", label);
            let Some(line) = self.prompt(&message)? else {
                return Ok(None);
            };
            match line.parse::<CalendarDate>() {
                Ok(date) if date.is_valid() => return Ok(Some(date)),
                _ => writeln!(self.output, "Invalid {} date. Please try again.", label)?,
            }
        }
    }

    /// Prompt for a check-in date, then for a check-out date until it falls
    /// after the check-in date.
    fn prompt_stay(&mut self) -> Result<Option<(CalendarDate, CalendarDate)>> {
        let Some(check_in) = self.prompt_date("check-in")? else {
            return Ok(None);
        };
        loop {
            let Some(check_out) = self.prompt_date("check-out")? else {
                return Ok(None);
            };
            if is_before(check_in, check_out) {
                return Ok(Some((check_in, check_out)));
            }
            writeln!(
                self.output,
                "Check-out date must be after the check-in date. Please try again."
            )?;
        }
    }
}

pub fn write_hotel_info(out: &mut impl Write, config: &Config) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "*************-{}-**************", config.hotel.name)?;
    writeln!(out)?;
    writeln!(out, "'{}'", config.hotel.description)?;
    writeln!(out)?;
    writeln!(out, "********************************************")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_core::StoreLimits;
    use std::io::Cursor;

    fn run_with(store: &mut ReservationStore, format: ListFormat, script: &str) -> String {
        let config = Config::default();
        let mut output = Vec::new();
        Session::new(store, &config, format, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn run_script(script: &str) -> (ReservationStore, String) {
        let mut store = ReservationStore::new();
        let output = run_with(&mut store, ListFormat::Text, script);
        (store, output)
    }

    #[test]
    fn test_exit_choice() {
        let (_, out) = run_script("9\n");
        assert!(out.contains("Main Menu"));
        assert!(out.contains("Thank You!"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (store, out) = run_script("2\nAlice\n5\n");
        assert!(store.is_empty());
        assert!(out.contains("Enter check-in date"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (_, out) = run_script("42\nabc\n9\n");
        assert_eq!(out.matches("Invalid input. Please try again.").count(), 2);
    }

    #[test]
    fn test_booking_scenario() {
        let script = "\
2\nAlice\n5\n01 06 2024\n05 06 2024\n\
2\nBob\n5\n03 06 2024\n07 06 2024\n\
2\nCarol\n5\n05/06/2024\n10/06/2024\n\
7\n9\n";
        let (store, out) = run_script(script);

        assert_eq!(store.len(), 2);
        assert_eq!(out.matches("Room booked successfully").count(), 2);
        assert!(out.contains("Room is not available for the given dates."));
        assert!(out.contains(
            "Customer: Alice, Room: 5, Check-in: 01/06/2024, Check-out: 05/06/2024, Checked-in: No"
        ));
        assert!(out.contains("Customer: Carol, Room: 5"));
    }

    #[test]
    fn test_reprompts_for_bad_room_and_dates() {
        let script = "\
2\nAlice\n0\nfive\n51\n5\n\
31 04 2024\nnot a date\n01 06 2024\n\
01 06 2024\n31 05 2024\n02 06 2024\n9\n";
        let (store, out) = run_script(script);

        assert_eq!(
            out.matches("Please enter a valid room number between 1 and 50").count(),
            3
        );
        assert_eq!(out.matches("Invalid check-in date").count(), 2);
        assert_eq!(out.matches("Check-out date must be after the check-in date").count(), 2);
        assert_eq!(store.len(), 1);
        let r = store.list().next().unwrap();
        assert_eq!(r.check_in_date(), CalendarDate::new(1, 6, 2024));
        assert_eq!(r.check_out_date(), CalendarDate::new(2, 6, 2024));
    }

    #[test]
    fn test_reprompts_for_signed_dates() {
        let script = "2\nAlice\n5\n-1 06 2024\n01 06 2024\n02 06 -2024\n02 06 2024\n9\n";
        let (store, out) = run_script(script);

        assert_eq!(out.matches("Invalid check-in date").count(), 1);
        assert_eq!(out.matches("Invalid check-out date").count(), 1);
        let r = store.list().next().unwrap();
        assert_eq!(r.check_in_date(), CalendarDate::new(1, 6, 2024));
        assert_eq!(r.check_out_date(), CalendarDate::new(2, 6, 2024));
    }

    #[test]
    fn test_reprompts_for_empty_name() {
        let (store, out) = run_script("2\n   \nAlice\n1\n01 06 2024\n02 06 2024\n9\n");
        assert!(out.contains("Invalid name"));
        assert_eq!(store.list().next().unwrap().guest_name(), "Alice");
    }

    #[test]
    fn test_availability() {
        let script = "\
2\nAlice\n5\n01 06 2024\n05 06 2024\n\
3\n5\n03 06 2024\n04 06 2024\n\
3\n5\n05 06 2024\n06 06 2024\n9\n";
        let (_, out) = run_script(script);
        assert!(out.contains("Room is not available for the given dates."));
        assert!(out.contains("Room is available for the given dates."));
    }

    #[test]
    fn test_lifecycle_messages() {
        let script = "\
4\n\
2\nAlice\n5\n01 06 2024\n05 06 2024\n\
4\n6\n4\n5\n4\n5\n\
5\n5\n5\n5\n9\n";
        let (store, out) = run_script(script);

        assert!(out.contains("No bookings available for check-in."));
        assert!(out.contains("No booking found for the given room number."));
        assert!(out.contains("Check-in successful for Alice in room number 5."));
        assert!(out.contains("Customer Alice is already checked in."));
        assert!(out.contains("Check-out successful for Alice from room number 5."));
        assert!(out.contains("No checked-in customer found for the given room number."));
        assert!(!store.list().next().unwrap().is_checked_in());
    }

    #[test]
    fn test_cancel_messages() {
        let script = "\
6\n\
2\nAlice\n5\n01 06 2024\n05 06 2024\n\
6\n7\n6\n5\n7\n9\n";
        let (store, out) = run_script(script);

        assert!(out.contains("No bookings available to cancel."));
        assert!(out.contains("No booking found for room 7."));
        assert!(out.contains("Booking for room 5 has been canceled."));
        assert!(out.contains("No bookings available."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_customer_limit() {
        let mut store = ReservationStore::with_limits(StoreLimits {
            max_customers: 1,
            ..StoreLimits::default()
        });
        let script = "\
2\nAlice\n1\n01 06 2024\n05 06 2024\n\
2\n9\n";
        let out = run_with(&mut store, ListFormat::Text, script);
        assert!(out.contains("Customer limit reached. Cannot book more rooms."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_json_listing() {
        let mut store = ReservationStore::new();
        store
            .book("Alice", 5, CalendarDate::new(1, 6, 2024), CalendarDate::new(5, 6, 2024))
            .unwrap();
        let out = run_with(&mut store, ListFormat::Json, "7\n9\n");

        // The listing follows the menu prompt on the same line
        let line = out
            .lines()
            .find_map(|l| l.find('{').map(|i| &l[i..]))
            .expect("json line");
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["guest_name"], "Alice");
        assert_eq!(value["id"]["room"], 5);
    }

    #[test]
    fn test_json_listing_empty() {
        let mut store = ReservationStore::new();
        let out = run_with(&mut store, ListFormat::Json, "7\n9\n");
        assert!(out.contains("No bookings available."));
        assert!(!out.contains('{'));
    }

    #[test]
    fn test_services_menu() {
        let (_, out) = run_script("8\n2\n7\n5\n9\n");
        assert!(out.contains("Service Menu"));
        assert!(out.contains("Laundry Service: Available"));
        assert!(out.contains("Invalid input. Please try again."));
        assert_eq!(out.matches("Main Menu ---").count(), 2);
        assert!(out.contains("Thank You!"));
    }

    #[test]
    fn test_services_exit() {
        let (_, out) = run_script("8\n6\n");
        assert!(out.contains("Thank You!"));
        assert_eq!(out.matches("Main Menu ---").count(), 1);
    }

    #[test]
    fn test_hotel_info() {
        let (_, out) = run_script("1\n9\n");
        assert!(out.contains("*************-Vintage Villa-**************"));
        assert!(out.contains("24/7 room service"));
    }
}
