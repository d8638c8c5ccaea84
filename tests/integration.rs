use q64f::{Fixed, ToStringFormat};

#[test]
fn public_api_basic_arithmetic() {
    let a: Fixed = "10.5".parse().unwrap();
    let b: Fixed = "3".parse().unwrap();
    assert_eq!((a + b).to_string(), "13.5");
    assert_eq!((a - b).to_string(), "7.5");
    assert_eq!(a.floor().to_string(), "10");
    assert_eq!(a.ceil().to_string(), "11");
}

#[test]
fn public_api_saturating_division() {
    let a = Fixed::from_i64(1);
    assert_eq!(a / Fixed::ZERO, Fixed::MAX);
    assert_eq!((-a) / Fixed::ZERO, Fixed::MIN);
}

#[test]
fn public_api_formatting_options() {
    let value = Fixed::from_i64(-7);
    let mut opt = ToStringFormat::default();
    opt.width = 5;
    opt.zero_pad = true;
    assert_eq!(value.to_string_opt(&opt), "-0007");
}

#[test]
fn public_api_ordering() {
    let mut values: Vec<Fixed> = ["3", "-1", "0", "2.5", "-4"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    values.sort();
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    assert_eq!(rendered, vec!["-4", "-1", "0", "2.5", "3"]);
}
