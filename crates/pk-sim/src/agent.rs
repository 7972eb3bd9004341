//! The closed set of things activated each tick.

use pk_core::{SimRng, SpotId, VehicleId};

/// One activation slot in a tick.
///
/// Spots are passive; they are scheduled so the activation order covers
/// every agent in the facility.  The manager always runs last.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Agent {
    Spot(SpotId),
    Vehicle(VehicleId),
    Manager,
}

/// A fresh random permutation of spots and vehicles, followed by the
/// manager.
pub fn activation_order(
    spots:    impl Iterator<Item = SpotId>,
    vehicles: impl Iterator<Item = VehicleId>,
    rng:      &mut SimRng,
) -> Vec<Agent> {
    let mut order: Vec<Agent> = spots
        .map(Agent::Spot)
        .chain(vehicles.map(Agent::Vehicle))
        .collect();
    rng.shuffle(&mut order);
    order.push(Agent::Manager);
    order
}
