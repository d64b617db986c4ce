//! Locker size and occupancy status.

use crate::label::define_label_enum;

define_label_enum! {
    /// Physical size class of a locker.
    LockerSize("locker size") {
        Small = "P",
        Medium = "M",
        Large = "G",
    }
}

define_label_enum! {
    /// Occupancy status of a locker.
    ///
    /// `Occupied` must hold exactly while an active rental references the
    /// locker; only the rental lifecycle moves a locker between
    /// `Available` and `Occupied`.
    LockerStatus("locker status") {
        Available = "Disponível",
        Occupied = "Ocupado",
        Maintenance = "Manutenção",
    }
}

impl LockerStatus {
    /// Whether a new rental may claim a locker in this status.
    pub fn is_rentable(self) -> bool {
        self == LockerStatus::Available
    }
}
