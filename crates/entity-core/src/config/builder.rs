//! Generic two-phase config construction with layered defaults.

use thiserror::Error;

/// Rejected configuration input. Raised synchronously at construction
/// time; the message names the offending fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Explicit three-layer defaulting: the first supplied value wins, from
/// the outermost layer in.
pub fn merge<T>(built_in: T, caller: Option<T>, user: Option<T>) -> T {
    user.or(caller).unwrap_or(built_in)
}

/// A complete config generated from a partial input.
pub trait BaseData<I>: Sized {
    /// Reject mutually-exclusive or co-dependent input combinations.
    /// Runs before base-data generation.
    fn validate_input(_input: &I) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Fill a complete config from the partial input, using the library
    /// defaults for everything unset.
    fn generate_base_data(input: &I) -> Self;
}

/// Two-phase builder keeping the original input alongside the generated
/// data, so later defaults only apply where the caller supplied nothing.
#[derive(Debug, Clone)]
pub struct ConfigBuilder<I, D> {
    input: I,
    data: D,
}

impl<I, D: BaseData<I>> ConfigBuilder<I, D> {
    pub fn new(input: I) -> Result<Self, ConfigError> {
        D::validate_input(&input)?;
        let data = D::generate_base_data(&input);
        Ok(Self { input, data })
    }

    /// Overwrite one field of the generated data, only when the caller's
    /// original input left it unset. `supplied` inspects the input, not
    /// the generated output, so a library default never counts as a user
    /// choice.
    pub fn with_default<T>(
        mut self,
        supplied: impl FnOnce(&I) -> bool,
        slot: impl FnOnce(&mut D) -> &mut T,
        value: T,
    ) -> Self {
        if !supplied(&self.input) {
            *slot(&mut self.data) = value;
        }
        self
    }

    pub fn build(self) -> D {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct GreetingInput {
        greeting: Option<String>,
        shout: Option<bool>,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct GreetingConfig {
        greeting: String,
        shout: bool,
    }

    impl BaseData<GreetingInput> for GreetingConfig {
        fn validate_input(input: &GreetingInput) -> Result<(), ConfigError> {
            if input.shout == Some(true) && input.greeting.is_none() {
                return Err(ConfigError::Invalid(
                    "shout is enabled but no greeting is set".to_string(),
                ));
            }
            Ok(())
        }

        fn generate_base_data(input: &GreetingInput) -> Self {
            Self {
                greeting: input.greeting.clone().unwrap_or_else(|| "hello".to_string()),
                shout: input.shout.unwrap_or(false),
            }
        }
    }

    #[test]
    fn test_merge_layering() {
        assert_eq!(merge("built-in", None, None), "built-in");
        assert_eq!(merge("built-in", Some("caller"), None), "caller");
        assert_eq!(merge("built-in", Some("caller"), Some("user")), "user");
        assert_eq!(merge("built-in", None, Some("user")), "user");
    }

    #[test]
    fn test_with_default_fills_unset_fields() {
        let config = ConfigBuilder::<_, GreetingConfig>::new(GreetingInput::default())
            .unwrap()
            .with_default(
                |input| input.greeting.is_some(),
                |data| &mut data.greeting,
                "good evening".to_string(),
            )
            .build();

        assert_eq!(config.greeting, "good evening");
        assert!(!config.shout);
    }

    #[test]
    fn test_with_default_never_overwrites_user_input() {
        let input = GreetingInput {
            greeting: Some("hi".to_string()),
            shout: None,
        };

        let config = ConfigBuilder::<_, GreetingConfig>::new(input)
            .unwrap()
            .with_default(
                |input| input.greeting.is_some(),
                |data| &mut data.greeting,
                "good evening".to_string(),
            )
            .build();

        assert_eq!(config.greeting, "hi");
    }

    #[test]
    fn test_validate_input_runs_before_generation() {
        let input = GreetingInput {
            greeting: None,
            shout: Some(true),
        };

        let err = ConfigBuilder::<_, GreetingConfig>::new(input).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid("shout is enabled but no greeting is set".to_string())
        );
    }
}
