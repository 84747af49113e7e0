//! End-of-lane hand-off boundary
//!
//! When a car sits on the last cell of its lane the container asks the
//! next segment whether it will take the car. Nothing in the network
//! accepts cars yet; [`DeadEnd`] is the segment every container uses by
//! default and the car simply stops.

use super::car::Car;

/// Something a car can be handed to when it reaches the end of a lane
pub trait NextSegment {
    /// Offer `car` to this segment. Returning `true` means the segment took
    /// ownership of the vehicle and it must leave the offering lane.
    fn accept(&mut self, car: &Car) -> bool;
}

/// A segment that refuses every car
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadEnd;

impl NextSegment for DeadEnd {
    fn accept(&mut self, _car: &Car) -> bool {
        false
    }
}

impl<F> NextSegment for F
where
    F: FnMut(&Car) -> bool,
{
    fn accept(&mut self, car: &Car) -> bool {
        self(car)
    }
}
