//! Itinerary chain logic
//!
//! Days after day 1 do not own their start location: it is derived from the
//! previous day every time it is needed. A travel day hands over its end
//! location, a stay day hands over wherever it started. The stored
//! `start_location` of a later day is only a seed written when the day was
//! appended (or by [`Itinerary::relink`]) and is never read back here.
//!
//! Every edit takes the trip by value and returns the updated trip.

use tracing::debug;
use uuid::Uuid;

use crate::models::{Day, DayType, Location, MAX_MEMBERS, MAX_STOPS_PER_DAY, Stop, Trip};
use crate::{Result, TripPlannerError};

/// Pure itinerary operations
pub struct Itinerary;

impl Itinerary {
    /// Effective start of every day, in order
    #[must_use]
    pub fn effective_starts(days: &[Day]) -> Vec<Option<Location>> {
        let mut starts: Vec<Option<Location>> = Vec::with_capacity(days.len());
        for (index, day) in days.iter().enumerate() {
            let start = if index == 0 {
                day.start_location.clone()
            } else {
                let previous = &days[index - 1];
                match previous.day_type {
                    DayType::Travel => previous.end_location.clone(),
                    DayType::Stay => starts[index - 1].clone(),
                }
            };
            starts.push(start);
        }
        starts
    }

    /// Effective start of the day at `index`
    #[must_use]
    pub fn effective_start(days: &[Day], index: usize) -> Option<Location> {
        if index >= days.len() {
            return None;
        }
        Self::effective_starts(&days[..=index]).pop().flatten()
    }

    /// Where the travelers are at the end of the day at `index`
    #[must_use]
    pub fn effective_end(days: &[Day], index: usize) -> Option<Location> {
        let day = days.get(index)?;
        match day.day_type {
            DayType::Travel => day.end_location.clone(),
            DayType::Stay => Self::effective_start(days, index),
        }
    }

    /// Append a day, seeding its start from where the last day ends
    #[must_use]
    pub fn append_day(mut trip: Trip, day_type: DayType) -> Trip {
        let day_no = trip.days.len() as u32 + 1;
        let mut day = Day::new(day_no, day_type);
        day.start_location = trip
            .days
            .len()
            .checked_sub(1)
            .and_then(|last| Self::effective_end(&trip.days, last));
        debug!("Appending {} day {}", day_type, day_no);
        trip.days.push(day);
        trip
    }

    /// Remove the day at `index` and renumber the rest.
    ///
    /// The stored start seeds of the following days are left as they were;
    /// call [`Itinerary::relink`] to rewrite them.
    pub fn remove_day(mut trip: Trip, index: usize) -> Result<Trip> {
        if index == 0 {
            return Err(TripPlannerError::validation("Day 1 cannot be removed"));
        }
        trip.day(index)?;
        trip.days.remove(index);
        Self::renumber(&mut trip.days);
        debug!("Removed day {}, {} days left", index + 1, trip.days.len());
        Ok(trip)
    }

    /// Replace the day at `index`; used for every field edit
    pub fn replace_day(mut trip: Trip, index: usize, mut day: Day) -> Result<Trip> {
        trip.day(index)?;
        if day.stops.len() > MAX_STOPS_PER_DAY {
            return Err(TripPlannerError::StopLimitExceeded {
                day_no: index as u32 + 1,
                max: MAX_STOPS_PER_DAY,
            });
        }
        day.day_no = index as u32 + 1;
        trip.days[index] = day;
        Ok(trip)
    }

    pub fn set_day_type(trip: Trip, index: usize, day_type: DayType) -> Result<Trip> {
        let mut day = trip.day(index)?.clone();
        day.day_type = day_type;
        Self::replace_day(trip, index, day)
    }

    /// Set the explicit start; only day 1 owns one
    pub fn set_start_location(trip: Trip, index: usize, location: Location) -> Result<Trip> {
        if index != 0 {
            return Err(TripPlannerError::validation(format!(
                "Day {} starts where the previous day ends",
                index + 1
            )));
        }
        let mut day = trip.day(index)?.clone();
        day.start_location = Some(location);
        Self::replace_day(trip, index, day)
    }

    pub fn set_end_location(trip: Trip, index: usize, location: Location) -> Result<Trip> {
        let mut day = trip.day(index)?.clone();
        day.end_location = Some(location);
        Self::replace_day(trip, index, day)
    }

    /// Append a stop to a day, rejecting an eleventh
    pub fn add_stop(trip: Trip, index: usize, location: Location) -> Result<Trip> {
        let mut day = trip.day(index)?.clone();
        if !day.has_room_for_stop() {
            return Err(TripPlannerError::StopLimitExceeded {
                day_no: day.day_no,
                max: MAX_STOPS_PER_DAY,
            });
        }
        day.stops.push(Stop::new(location));
        Self::replace_day(trip, index, day)
    }

    /// Swap the stop at `position` for a newly picked location
    pub fn replace_stop(
        trip: Trip,
        index: usize,
        position: usize,
        location: Location,
    ) -> Result<Trip> {
        let mut day = trip.day(index)?.clone();
        let slot = day.stops.get_mut(position).ok_or_else(|| {
            TripPlannerError::validation(format!(
                "Day {} has no stop at position {}",
                index + 1,
                position + 1
            ))
        })?;
        *slot = Stop::new(location);
        Self::replace_day(trip, index, day)
    }

    pub fn remove_stop(trip: Trip, index: usize, position: usize) -> Result<Trip> {
        let mut day = trip.day(index)?.clone();
        if position >= day.stops.len() {
            return Err(TripPlannerError::validation(format!(
                "Day {} has no stop at position {}",
                index + 1,
                position + 1
            )));
        }
        day.stops.remove(position);
        Self::replace_day(trip, index, day)
    }

    /// Move the stop `active` to where `over` currently sits
    pub fn move_stop(trip: Trip, index: usize, active: Uuid, over: Uuid) -> Result<Trip> {
        if active == over {
            return Ok(trip);
        }
        let mut day = trip.day(index)?.clone();
        let from = day
            .stop_position(&active)
            .ok_or_else(|| TripPlannerError::validation(format!("Unknown stop {active}")))?;
        let to = day
            .stop_position(&over)
            .ok_or_else(|| TripPlannerError::validation(format!("Unknown stop {over}")))?;
        let stop = day.stops.remove(from);
        day.stops.insert(to, stop);
        Self::replace_day(trip, index, day)
    }

    /// Clamp the traveler count into 1..=50
    #[must_use]
    pub fn set_members(mut trip: Trip, members: u32) -> Trip {
        trip.members = members.clamp(1, MAX_MEMBERS);
        trip
    }

    /// Rewrite the stored start of every day after day 1 to its effective start
    #[must_use]
    pub fn relink(mut trip: Trip) -> Trip {
        let starts = Self::effective_starts(&trip.days);
        for (day, start) in trip.days.iter_mut().zip(starts).skip(1) {
            day.start_location = start;
        }
        trip
    }

    fn renumber(days: &mut [Day]) {
        for (index, day) in days.iter_mut().enumerate() {
            day.day_no = index as u32 + 1;
        }
    }
}
