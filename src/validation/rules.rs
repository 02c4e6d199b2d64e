//! Rule sets for the chat configuration fields

use super::ValidationRule;

pub static TEMP: [ValidationRule; 1] = [ValidationRule::float_const(
    "must be in the range [0,1]",
    Some(0.0),
    Some(1.0),
)];

pub static N_PREDICT: [ValidationRule; 1] = [ValidationRule::integer_const(
    "must be an integer greater than or equal to -1",
    Some(-1),
    None,
)];

pub static TOP_K: [ValidationRule; 1] = [ValidationRule::integer_const(
    "must be an integer greater than or equal to 0",
    Some(0),
    None,
)];

pub static REPEAT_PENALTY: [ValidationRule; 1] = [ValidationRule::float_const(
    "must be greater than or equal to 0",
    Some(0.0),
    None,
)];

pub static MIN_P: [ValidationRule; 1] = [ValidationRule::float_const(
    "must be in the range [0,1]",
    Some(0.0),
    Some(1.0),
)];

pub static TOP_P: [ValidationRule; 1] = [ValidationRule::float_const(
    "must be in the range [0,1]",
    Some(0.0),
    Some(1.0),
)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_all, RuleRef};

    #[test]
    fn test_temp_bounds() {
        let rules = [RuleRef::from(&TEMP)];
        assert!(validate_all("0.0", &rules));
        assert!(validate_all("1.0", &rules));
        assert!(!validate_all("-0.0001", &rules));
        assert!(!validate_all("1.0001", &rules));
    }

    #[test]
    fn test_n_predict_bounds() {
        let rules = [RuleRef::from(&N_PREDICT)];
        assert!(validate_all("-1", &rules));
        assert!(validate_all("4096", &rules));
        assert!(!validate_all("-2", &rules));
        assert!(!validate_all("", &rules));
    }
}
