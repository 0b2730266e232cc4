//! GCD, extended GCD and LCM through the public surface.

use std::str::FromStr;

use num_traits::One;

use mpa::{algorithms, ExtendedGcd, Integer};

fn int(s: &str) -> Integer {
    Integer::from_str(s).unwrap()
}

#[test]
fn coprime_pair() {
    let x1 = int("0xab123567567adeeff143565756742");
    let x2 = int("0x1234aeefdbba123231221");
    assert!(x1.gcd(&x2).is_one());
    assert_eq!(x1.lcm(&x2), &x1 * &x2);

    let (g, s, t) = (&x1).extended_gcd(&x2);
    assert!(g.is_one());
    assert_eq!(&(&s * &x1) + &(&t * &x2), Integer::one());
}

#[test]
fn shared_factor_pair() {
    let x1 = int("0xab123567567adeeff143565756742");
    let x2 = int("0x1234aeefdbba123231221");
    let x3 = int("0xde");
    let a = &x3 * &x1;
    let b = &x3 * &x2;
    assert_eq!(a.gcd(&b), x3);
    assert_eq!(a.lcm(&b), &(&x3 * &x1) * &x2);

    let (g, s, t) = (&a).extended_gcd(&b);
    assert_eq!(g, x3);
    assert_eq!(&(&s * &a) + &(&t * &b), x3);
}

#[test]
fn golang_bignum_negative_cases() {
    // (d, x, y, a, b) with d = gcd(a, b) and d = x*a + y*b
    let cases = [
        ("0", "0", "0", "0", "0"),
        ("7", "0", "1", "0", "7"),
        ("7", "0", "-1", "0", "-7"),
        ("11", "1", "0", "11", "0"),
        ("7", "-1", "-2", "-77", "35"),
        ("935", "-3", "8", "64515", "24310"),
        ("935", "-3", "-8", "64515", "-24310"),
        ("935", "3", "-8", "-64515", "-24310"),
        ("1", "-9", "47", "120", "23"),
        ("7", "1", "-2", "77", "35"),
        (
            "935000000000000000",
            "-3",
            "8",
            "64515000000000000000",
            "24310000000000000000",
        ),
        (
            "1",
            "-221",
            "22059940471369027483332068679400581064239780177629666810348940098015901108344",
            "98920366548084643601728869055592650835572950932266967461790948584315647051443",
            "991",
        ),
    ];
    for (d, _x, _y, a, b) in cases {
        let d = int(d);
        let a = int(a);
        let b = int(b);
        let (g, s, t) = (&a).extended_gcd(&b);
        assert_eq!(g, d, "gcd({a}, {b})");
        assert_eq!(&(&s * &a) + &(&t * &b), d, "bezout for ({a}, {b})");
        assert_eq!(algorithms::gcd(&a, &b), d);
    }
}

#[test]
fn lcm_times_gcd_is_product_magnitude() {
    let pairs = [
        ("12", "18"),
        ("-12", "18"),
        ("0xde", "0x1234aeefdbba123231221"),
        ("-0xab123567567adeeff143565756742", "-0xde"),
    ];
    for (a, b) in pairs {
        let a = int(a);
        let b = int(b);
        assert_eq!(&a.lcm(&b) * &a.gcd(&b), (&a * &b).abs(), "({a}, {b})");
    }
}
