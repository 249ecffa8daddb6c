use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(transparent)]
pub struct VehicleId(Uuid);

impl VehicleId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
