use citycompare::format_number;

#[test]
fn test_format_number_basic() {
    assert_eq!(format_number(123), "123");
    assert_eq!(format_number(1234), "1 234");
    assert_eq!(format_number(12345), "12 345");
}

#[test]
fn test_format_number_large() {
    assert_eq!(format_number(170049), "170 049");
    assert_eq!(format_number(2133111), "2 133 111");
}

#[test]
fn test_format_number_edge_cases() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(100), "100");
    assert_eq!(format_number(1000), "1 000");
}
