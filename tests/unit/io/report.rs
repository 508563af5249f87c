//! Tests for human-readable partition reports

#[cfg(test)]
mod tests {
    use bitpartition::io::report::{format_outcome, format_set};
    use bitpartition::partition;

    // Tests set rendering with braces and separators
    // Verified by joining with a bare comma
    #[test]
    fn test_format_set() {
        assert_eq!(format_set::<u64>(&[]), "{}");
        assert_eq!(format_set(&[7u64]), "{7}");
        assert_eq!(format_set(&[1u64, 2, 3]), "{1, 2, 3}");
    }

    // Tests the feasible report lists both sets
    // Verified by printing set 1 twice
    #[test]
    fn test_feasible_report() {
        let result = partition(&[1u64, 1, 1, 1]).unwrap();

        assert_eq!(
            format_outcome(&result),
            "The set can be partitioned\nSet 1: {1, 1}\nSet 2: {1, 1}"
        );
    }

    // Tests the feasible report for empty input
    // Verified by skipping set lines when both are empty
    #[test]
    fn test_empty_report() {
        let result = partition::<u64>(&[]).unwrap();

        assert_eq!(
            format_outcome(&result),
            "The set can be partitioned\nSet 1: {}\nSet 2: {}"
        );
    }

    // Tests both infeasible wordings
    // Verified by using the odd-sum message for every infeasible status
    #[test]
    fn test_infeasible_reports() {
        let even = partition(&[1u64, 5]).unwrap();
        let odd = partition(&[1u64, 2, 3, 5]).unwrap();

        assert_eq!(format_outcome(&even), "The set cannot be partitioned");
        assert_eq!(
            format_outcome(&odd),
            "The set cannot be partitioned (sum is odd)"
        );
    }
}
