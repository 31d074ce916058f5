//! Custom assertion macros
//!
//! Assertions with more descriptive failure output than `assert!`.

/// Assert that two values are approximately equal (for floating point)
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr) => {
        assert_approx_eq!($left, $right, 1e-3)
    };
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right): (f32, f32) = ($left, $right);
        let diff = (left - right).abs();
        assert!(
            diff < $epsilon,
            "Values are not approximately equal: {} vs {} (diff: {})",
            left,
            right,
            diff
        );
    }};
}

/// Assert that a value is within a range
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        assert!(
            $value >= $min && $value <= $max,
            "Value {} is not in range [{}, {}]",
            $value,
            $min,
            $max
        );
    };
}

/// Assert that a string contains a substring
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
