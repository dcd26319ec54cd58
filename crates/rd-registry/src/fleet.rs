//! `Fleet` — arena of vehicles with a string-id index.
//!
//! Vehicles live in a `Vec<Option<Vehicle>>` addressed by [`VehicleHandle`].
//! Removing a vehicle leaves a `None` hole; handles are never reused, so a
//! handle held across a removal resolves to `None` instead of to a different
//! vehicle.  Iteration order is registration order.

use rd_core::{VehicleHandle, VehicleId};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{RegistryError, RegistryResult, Vehicle, VehicleUpdate};

#[derive(Debug, Default, Clone)]
pub struct Fleet {
    slots: Vec<Option<Vehicle>>,
    index: FxHashMap<VehicleId, VehicleHandle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `vehicle` and return its handle.
    ///
    /// Fails with [`RegistryError::DuplicateVehicle`] when the id is taken and
    /// [`RegistryError::InvalidLocation`] when its coordinates are out of range.
    pub fn add(&mut self, vehicle: Vehicle) -> RegistryResult<VehicleHandle> {
        if self.index.contains_key(&vehicle.id) {
            return Err(RegistryError::DuplicateVehicle(vehicle.id));
        }
        if !vehicle.location.geo.is_valid() {
            return Err(RegistryError::InvalidLocation(vehicle.location.geo));
        }
        let handle = VehicleHandle(self.slots.len() as u32);
        debug!(vehicle = %vehicle.id, %handle, category = %vehicle.category, "vehicle registered");
        self.index.insert(vehicle.id.clone(), handle);
        self.slots.push(Some(vehicle));
        Ok(handle)
    }

    /// Remove a vehicle and return it.
    pub fn remove(&mut self, id: &VehicleId) -> RegistryResult<Vehicle> {
        let handle = self
            .index
            .remove(id)
            .ok_or_else(|| RegistryError::VehicleNotFound(id.clone()))?;
        let vehicle = self.slots[handle.index()]
            .take()
            .ok_or_else(|| RegistryError::VehicleNotFound(id.clone()))?;
        debug!(vehicle = %id, %handle, "vehicle removed");
        Ok(vehicle)
    }

    /// Apply a partial update to the descriptive fields of a vehicle.
    /// Status is not touched; it only changes through dispatch.
    pub fn update(&mut self, id: &VehicleId, update: VehicleUpdate) -> RegistryResult<()> {
        if let Some(place) = &update.location
            && !place.geo.is_valid()
        {
            return Err(RegistryError::InvalidLocation(place.geo));
        }
        let vehicle = self
            .get_mut(id)
            .ok_or_else(|| RegistryError::VehicleNotFound(id.clone()))?;
        if let Some(category) = update.category {
            vehicle.category = category;
        }
        if let Some(driver) = update.driver {
            vehicle.driver = driver;
        }
        if let Some(location) = update.location {
            vehicle.location = location;
        }
        Ok(())
    }

    #[inline]
    pub fn handle(&self, id: &VehicleId) -> Option<VehicleHandle> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.handle(id).and_then(|h| self.get_by_handle(h))
    }

    pub fn get_mut(&mut self, id: &VehicleId) -> Option<&mut Vehicle> {
        let handle = self.handle(id)?;
        self.get_by_handle_mut(handle)
    }

    #[inline]
    pub fn get_by_handle(&self, handle: VehicleHandle) -> Option<&Vehicle> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_by_handle_mut(&mut self, handle: VehicleHandle) -> Option<&mut Vehicle> {
        self.slots.get_mut(handle.index()).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: &VehicleId) -> bool {
        self.index.contains_key(id)
    }

    /// Handles of every available vehicle, in registration order.
    pub fn available(&self) -> Vec<VehicleHandle> {
        self.iter()
            .filter(|(_, v)| v.is_available())
            .map(|(h, _)| h)
            .collect()
    }

    /// Registered vehicles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleHandle, &Vehicle)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (VehicleHandle(i as u32), v)))
    }

    /// Number of registered (not removed) vehicles.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
