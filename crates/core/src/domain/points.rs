use super::DomainError;

/// Point value a problem is worth before any runtime penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BasePoints(u32);

impl BasePoints {
    pub const DEFAULT: u32 = 100;

    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidBasePoints(value))
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for BasePoints {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for BasePoints {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BasePoints> for u32 {
    fn from(value: BasePoints) -> Self {
        value.value()
    }
}
