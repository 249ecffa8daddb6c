use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(transparent)]
pub struct VehicleName(String);

impl VehicleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
