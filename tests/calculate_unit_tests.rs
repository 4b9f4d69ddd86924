//! Unit tests for arithmetic dispatch

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use calc::error::CalcError;
    use calc::operations::{Operation, calculate};

    #[test]
    fn basic_operations() {
        assert_eq!(calculate("add", 5.0, 3.0).unwrap(), 8.0);
        assert_eq!(calculate("subtract", 5.0, 3.0).unwrap(), 2.0);
        assert_eq!(calculate("multiply", 5.0, 3.0).unwrap(), 15.0);
        assert_eq!(calculate("divide", 6.0, 3.0).unwrap(), 2.0);
    }

    #[test]
    fn divide_is_not_truncating() {
        assert_eq!(calculate("divide", 7.0, 2.0).unwrap(), 3.5);
        assert_eq!(calculate("divide", -7.0, 2.0).unwrap(), -3.5);
    }

    #[test]
    fn divide_by_zero_for_any_dividend() {
        for x in [0.0, 1.0, -42.5, f64::MAX] {
            assert_eq!(calculate("divide", x, 0.0), Err(CalcError::DivisionByZero));
        }
    }

    #[test]
    fn unknown_operation() {
        let err = calculate("power", 2.0, 3.0).unwrap_err();

        assert_eq!(err, CalcError::unknown_operation("power"));
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("Unknown operation: power"));
    }

    #[test]
    fn unknown_operation_is_checked_before_divisor() {
        assert_eq!(
            calculate("modulo", 1.0, 0.0),
            Err(CalcError::unknown_operation("modulo"))
        );
    }

    #[test]
    fn overflow_follows_native_floats() {
        assert_eq!(
            calculate("multiply", f64::MAX, 2.0).unwrap(),
            f64::INFINITY
        );
    }

    #[test]
    fn calculate_is_idempotent() {
        for operation in Operation::ALL {
            let first = calculate(operation.name(), 0.1, 0.2).unwrap();
            let second = calculate(operation.name(), 0.1, 0.2).unwrap();
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn apply_matches_calculate() {
        for operation in Operation::ALL {
            assert_eq!(
                operation.apply(9.0, 4.0),
                calculate(operation.name(), 9.0, 4.0)
            );
        }
    }
}
