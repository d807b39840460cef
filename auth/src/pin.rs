/// Hospital-issued PIN gate for doctor self-registration.
///
/// Holds the configured PIN for the lifetime of the process. A rejected
/// candidate yields `false` and nothing else.
#[derive(Clone)]
pub struct PinValidator {
    pin: String,
}

impl PinValidator {
    pub fn new(pin: impl Into<String>) -> Self {
        Self { pin: pin.into() }
    }

    /// Exact string equality against the configured PIN.
    pub fn validate(&self, candidate: &str) -> bool {
        self.pin == candidate
    }
}

impl std::fmt::Debug for PinValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinValidator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_exact_match() {
        let validator = PinValidator::new("1234");

        assert!(validator.validate("1234"));
        assert!(!validator.validate("4321"));
        assert!(!validator.validate("1234 "));
        assert!(!validator.validate("12345"));
        assert!(!validator.validate(""));
    }

    #[test]
    fn test_debug_does_not_leak_pin() {
        let validator = PinValidator::new("9876");
        assert!(!format!("{:?}", validator).contains("9876"));
    }
}
