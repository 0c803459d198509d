//! The rule registry: a fixed, process-wide catalog of named predicates.
//!
//! The model layer addresses rules by the names its annotations carry
//! (`IsEmail`, `ArrayMinLength`, ...). The registry maps each name to a
//! uniform `fn(&Value, &[Value]) -> bool`; parameters travel as values so
//! every rule has the same shape regardless of arity.
//!
//! The table is built once behind a `LazyLock` and never mutated, so it is
//! safe to read from any number of threads without synchronization.

use std::collections::HashMap;
use std::sync::LazyLock;

use fieldcheck_model::Value;

use crate::rules;

/// Uniform predicate shape stored in the registry.
///
/// Rules with parameters read them from the slice; a missing or malformed
/// parameter makes the rule return `false`, it never panics.
pub type RuleFn = fn(&Value, &[Value]) -> bool;

/// Every rule the registry knows, by catalog name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    IsRequired,
    IsEmail,
    IsNumber,
    IsInt,
    IsFloat,
    IsBoolean,
    IsString,
    IsArray,
    IsUrl,
    IsUuid,
    IsNotEmpty,
    IsDateString,
    IsPhoneNumber,
    Max,
    Min,
    Length,
    MinLength,
    MaxLength,
    ArrayMinLength,
    ArrayMaxLength,
    ArrayLength,
}

impl RuleName {
    /// All rules in catalog order.
    pub const ALL: &'static [Self] = &[
        Self::IsRequired,
        Self::IsEmail,
        Self::IsNumber,
        Self::IsInt,
        Self::IsFloat,
        Self::IsBoolean,
        Self::IsString,
        Self::IsArray,
        Self::IsUrl,
        Self::IsUuid,
        Self::IsNotEmpty,
        Self::IsDateString,
        Self::IsPhoneNumber,
        Self::Max,
        Self::Min,
        Self::Length,
        Self::MinLength,
        Self::MaxLength,
        Self::ArrayMinLength,
        Self::ArrayMaxLength,
        Self::ArrayLength,
    ];

    /// The name as it appears in model annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IsRequired => "IsRequired",
            Self::IsEmail => "IsEmail",
            Self::IsNumber => "IsNumber",
            Self::IsInt => "IsInt",
            Self::IsFloat => "IsFloat",
            Self::IsBoolean => "IsBoolean",
            Self::IsString => "IsString",
            Self::IsArray => "IsArray",
            Self::IsUrl => "IsUrl",
            Self::IsUuid => "IsUUID",
            Self::IsNotEmpty => "IsNotEmpty",
            Self::IsDateString => "IsDateString",
            Self::IsPhoneNumber => "IsPhoneNumber",
            Self::Max => "Max",
            Self::Min => "Min",
            Self::Length => "Length",
            Self::MinLength => "MinLength",
            Self::MaxLength => "MaxLength",
            Self::ArrayMinLength => "ArrayMinLength",
            Self::ArrayMaxLength => "ArrayMaxLength",
            Self::ArrayLength => "ArrayLength",
        }
    }

    /// Parse a catalog name. Names are exact; annotations are generated, so
    /// there is no case folding.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rule| rule.as_str() == name)
    }

    /// Number of parameters the rule takes beyond the value itself.
    pub fn arity(&self) -> usize {
        match self {
            Self::Max
            | Self::Min
            | Self::Length
            | Self::MinLength
            | Self::MaxLength
            | Self::ArrayMinLength
            | Self::ArrayMaxLength
            | Self::ArrayLength => 1,
            _ => 0,
        }
    }

    /// The uniform predicate for this rule.
    pub fn rule_fn(&self) -> RuleFn {
        match self {
            Self::IsRequired => |value, _| rules::is_required(value),
            Self::IsEmail => |value, _| rules::is_email(value),
            Self::IsNumber => |value, _| rules::is_number(value),
            Self::IsInt => |value, _| rules::is_int(value),
            Self::IsFloat => |value, _| rules::is_float(value),
            Self::IsBoolean => |value, _| rules::is_boolean(value),
            Self::IsString => |value, _| rules::is_string(value),
            Self::IsArray => |value, _| rules::is_array(value),
            Self::IsUrl => |value, _| rules::is_url(value),
            Self::IsUuid => |value, _| rules::is_uuid(value),
            Self::IsNotEmpty => |value, _| rules::is_not_empty(value),
            Self::IsDateString => |value, _| rules::is_date_string(value),
            Self::IsPhoneNumber => |value, _| rules::is_phone_number(value),
            Self::Max => |value, params| {
                number_param(params).is_some_and(|max| rules::max(value, max))
            },
            Self::Min => |value, params| {
                number_param(params).is_some_and(|min| rules::min(value, min))
            },
            Self::Length => |value, params| {
                count_param(params).is_some_and(|len| rules::length(value, len))
            },
            Self::MinLength => |value, params| {
                count_param(params).is_some_and(|len| rules::min_length(value, len))
            },
            Self::MaxLength => |value, params| {
                count_param(params).is_some_and(|len| rules::max_length(value, len))
            },
            Self::ArrayMinLength => |value, params| {
                count_param(params).is_some_and(|len| rules::array_min_length(value, len))
            },
            Self::ArrayMaxLength => |value, params| {
                count_param(params).is_some_and(|len| rules::array_max_length(value, len))
            },
            Self::ArrayLength => |value, params| {
                count_param(params).is_some_and(|len| rules::array_length(value, len))
            },
        }
    }
}

/// First parameter as a number.
fn number_param(params: &[Value]) -> Option<f64> {
    params.first().and_then(Value::as_f64)
}

/// First parameter as a non-negative integral count.
fn count_param(params: &[Value]) -> Option<usize> {
    number_param(params)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0)
        .map(|n| n as usize)
}

/// Registry of validation rules indexed by catalog name.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: HashMap<&'static str, RuleFn>,
}

impl Registry {
    fn build() -> Self {
        let mut rules = HashMap::new();
        for rule in RuleName::ALL {
            rules.insert(rule.as_str(), rule.rule_fn());
        }
        Self { rules }
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<RuleFn> {
        self.rules.get(name).copied()
    }

    /// Run a rule against a value.
    pub fn apply(&self, rule: RuleName, value: &Value, params: &[Value]) -> bool {
        match self.get(rule.as_str()) {
            Some(rule_fn) => rule_fn(value, params),
            None => false,
        }
    }

    /// Number of rules in the registry.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all rule names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// The process-wide rule registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for rule in RuleName::ALL {
            assert_eq!(RuleName::parse(rule.as_str()), Some(*rule));
        }
        assert_eq!(RuleName::parse("IsUUID"), Some(RuleName::IsUuid));
        assert_eq!(RuleName::parse("isuuid"), None);
        assert_eq!(RuleName::parse("NoSuchRule"), None);
    }

    #[test]
    fn registry_covers_the_whole_catalog() {
        let registry = registry();
        assert_eq!(registry.len(), RuleName::ALL.len());
        for rule in RuleName::ALL {
            assert!(registry.get(rule.as_str()).is_some(), "{}", rule.as_str());
        }
        assert!(registry.get("Unknown").is_none());
    }

    #[test]
    fn malformed_params_degrade_to_false() {
        let registry = registry();
        let min = registry.get("Min").expect("Min rule");
        assert!(!min(&Value::Int(5), &[]));
        assert!(!min(&Value::Int(5), &[Value::from("three")]));
        assert!(min(&Value::Int(5), &[Value::Int(3)]));

        let length = registry.get("Length").expect("Length rule");
        assert!(!length(&Value::from("ab"), &[Value::Float(-2.0)]));
        assert!(!length(&Value::from("ab"), &[Value::Float(2.5)]));
        assert!(length(&Value::from("ab"), &[Value::Float(2.0)]));
    }
}
