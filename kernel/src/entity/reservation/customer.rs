use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(transparent)]
pub struct CustomerPhone(String);

impl CustomerPhone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }
}
