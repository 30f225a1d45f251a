//! Plain-text directions.

use std::fmt;

use super::itinerary::Itinerary;

/// Formats minutes with two decimals, rounding halves up.
///
/// Rounding works on the shortest decimal form of the value, so `0.125`
/// gives `0.13` and `1.005` gives `1.01`.
pub fn format_minutes(minutes: f64) -> String {
    let shortest = minutes.to_string();
    let Some((whole, fraction)) = shortest.split_once('.') else {
        return format!("{minutes:.2}");
    };
    if fraction.len() <= 2 {
        return format!("{minutes:.2}");
    }

    let round_up = fraction.as_bytes()[2] >= b'5';
    match format!("{whole}{}", &fraction[..2]).parse::<u128>() {
        Ok(hundredths) => {
            let hundredths = hundredths + u128::from(round_up);
            format!("{}.{:02}", hundredths / 100, hundredths % 100)
        }
        // Negative or out of range: not a travel time
        Err(_) => format!("{minutes:.2}"),
    }
}

/// Renders an itinerary as numbered, human-readable directions.
///
/// ```text
/// The fastest route takes 4 minute(s).
/// Directions
/// ----------
/// 1. Walk from "Starting Point" to "Red Station 1" for 0.60 minutes.
/// 2. Ride the cart from "Red Station 1" to "Red Station 2" for 3.20 minutes.
/// ```
pub struct Directions<'a>(pub &'a Itinerary);

impl fmt::Display for Directions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let itinerary = self.0;
        writeln!(
            f,
            "The fastest route takes {} minute(s).",
            itinerary.rounded_minutes()
        )?;
        writeln!(f, "Directions")?;
        writeln!(f, "----------")?;
        for (i, segment) in itinerary.segments().iter().enumerate() {
            let action = if segment.is_transit() {
                "Ride the cart from"
            } else {
                "Walk from"
            };
            writeln!(
                f,
                "{}. {} \"{}\" to \"{}\" for {} minutes.",
                i + 1,
                action,
                segment.from_label,
                segment.to_label,
                format_minutes(segment.duration_minutes)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use crate::planner::itinerary::{RouteSegment, TravelMode};

    fn hop(from: &str, to: &str, minutes: f64, mode: TravelMode) -> RouteSegment {
        RouteSegment {
            from: StationId(0),
            to: StationId(1),
            from_label: from.into(),
            to_label: to.into(),
            duration_minutes: minutes,
            mode,
            line: None,
        }
    }

    #[test]
    fn renders_numbered_steps() {
        let itinerary = Itinerary::new(vec![
            hop("Starting Point", "Red Station 1", 0.6, TravelMode::Walk),
            hop("Red Station 1", "Red Station 2", 3.2, TravelMode::Cart),
            hop("Red Station 2", "Final Destination", 0.123, TravelMode::Walk),
        ]);

        let text = Directions(&itinerary).to_string();
        assert_eq!(
            text,
            "The fastest route takes 4 minute(s).\n\
             Directions\n\
             ----------\n\
             1. Walk from \"Starting Point\" to \"Red Station 1\" for 0.60 minutes.\n\
             2. Ride the cart from \"Red Station 1\" to \"Red Station 2\" for 3.20 minutes.\n\
             3. Walk from \"Red Station 2\" to \"Final Destination\" for 0.12 minutes.\n"
        );
    }

    #[test]
    fn empty_itinerary_has_headline_only() {
        let text = Directions(&Itinerary::default()).to_string();
        assert_eq!(
            text,
            "The fastest route takes 0 minute(s).\nDirections\n----------\n"
        );
    }

    #[test]
    fn minutes_round_half_up() {
        assert_eq!(format_minutes(0.125), "0.13");
        assert_eq!(format_minutes(2.625), "2.63");
        assert_eq!(format_minutes(1.005), "1.01");
        assert_eq!(format_minutes(9.995), "10.00");
        assert_eq!(format_minutes(0.124), "0.12");
        assert_eq!(format_minutes(0.36), "0.36");
        assert_eq!(format_minutes(4.0), "4.00");
        assert_eq!(format_minutes(0.0), "0.00");
        assert_eq!(format_minutes(1e-7), "0.00");
    }

    #[test]
    fn exact_tie_step_rounds_up() {
        let itinerary = Itinerary::new(vec![
            hop("Starting Point", "Final Destination", 0.125, TravelMode::Walk),
            hop("Final Destination", "Elsewhere", 2.625, TravelMode::Cart),
        ]);
        let text = Directions(&itinerary).to_string();
        assert!(text.contains("for 0.13 minutes."));
        assert!(text.contains("for 2.63 minutes."));
    }

    #[test]
    fn headline_rounds_half_up() {
        let itinerary = Itinerary::new(vec![hop("A", "B", 2.5, TravelMode::Walk)]);
        let text = Directions(&itinerary).to_string();
        assert!(text.starts_with("The fastest route takes 3 minute(s)."));
        assert!(text.contains("for 2.50 minutes."));
    }
}
