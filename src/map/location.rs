use thiserror::Error;

use crate::listings::Coordinate;

/// Answer to a foreground location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// A device position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub coordinate: Coordinate,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Device location, asked for in two steps: permission first, then a fix.
pub trait LocationProvider: Send + Sync {
    fn request_permission(&self) -> Permission;

    fn current_position(&self) -> Result<Position, LocationError>;
}

/// Location taken from configuration. No position means permission is denied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfiguredLocation {
    pub position: Option<Coordinate>,
}

impl ConfiguredLocation {
    #[must_use]
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }

    #[must_use]
    pub fn denied() -> Self {
        Self { position: None }
    }
}

impl LocationProvider for ConfiguredLocation {
    fn request_permission(&self) -> Permission {
        if self.position.is_some() {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn current_position(&self) -> Result<Position, LocationError> {
        self.position
            .map(|coordinate| Position { coordinate })
            .ok_or_else(|| LocationError::Unavailable("no position configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_position_grants_permission() {
        let location = ConfiguredLocation::new(Coordinate::new(48.85, 2.35));
        assert_eq!(location.request_permission(), Permission::Granted);
        assert_eq!(
            location.current_position().unwrap().coordinate,
            Coordinate::new(48.85, 2.35).unwrap()
        );
    }

    #[test]
    fn missing_position_is_a_denial() {
        let location = ConfiguredLocation::denied();
        assert_eq!(location.request_permission(), Permission::Denied);
        assert!(location.current_position().is_err());
    }
}
